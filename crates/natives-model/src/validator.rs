use indexmap::IndexMap;

use crate::types::document::{Document, Function, NativeType, NATIVE_TYPE_TOKENS};
use crate::types::error::{
    ErrorEntry, ValidationReport, E_DUPLICATE_NAME, E_EMPTY_ALIAS_DEFINITION, E_EMPTY_NAME,
    E_EMPTY_NATIVE_TYPE, E_EMPTY_PROPERTY_TYPE, E_MULTI_VALUE_PARAMETER, W_UNKNOWN_TOKEN,
};

/// Validate a document's structure.
/// Collects every problem instead of stopping at the first one.
pub fn validate(document: &Document) -> ValidationReport {
    let mut report = ValidationReport::success();

    check_unique(
        document.interfaces.iter().map(|i| i.name.as_str()),
        "interfaces",
        &mut report,
    );
    check_unique(
        document.type_aliases.iter().map(|t| t.name.as_str()),
        "typeAliases",
        &mut report,
    );
    check_unique(
        document.modules.iter().map(|m| m.name.as_str()),
        "modules",
        &mut report,
    );

    for (i, iface) in document.interfaces.iter().enumerate() {
        check_name(&iface.name, &format!("interfaces[{i}]"), &mut report);
        for (p, prop) in iface.properties.iter().enumerate() {
            let path = format!("interfaces[{i}].properties[{p}]");
            check_name(&prop.name, &path, &mut report);
            if prop.type_.trim().is_empty() {
                report.push(ErrorEntry::error(
                    E_EMPTY_PROPERTY_TYPE,
                    "property type must not be empty",
                    format!("{path}.type"),
                ));
            }
        }
    }

    for (i, alias) in document.type_aliases.iter().enumerate() {
        let path = format!("typeAliases[{i}]");
        check_name(&alias.name, &path, &mut report);
        if alias.definition.trim().is_empty() {
            report.push(ErrorEntry::error(
                E_EMPTY_ALIAS_DEFINITION,
                "type alias definition must not be empty",
                format!("{path}.definition"),
            ));
        }
    }

    for (m, module) in document.modules.iter().enumerate() {
        let path = format!("modules[{m}]");
        check_name(&module.name, &path, &mut report);
        check_unique(
            module.functions.iter().map(|f| f.name.as_str()),
            &format!("{path}.functions"),
            &mut report,
        );
        for (f, function) in module.functions.iter().enumerate() {
            check_function(function, &format!("{path}.functions[{f}]"), &mut report);
        }
    }

    report
}

fn check_function(function: &Function, path: &str, report: &mut ValidationReport) {
    check_name(&function.name, path, report);
    check_unique(
        function.parameters.iter().map(|p| p.name.as_str()),
        &format!("{path}.parameters"),
        report,
    );

    for (p, param) in function.parameters.iter().enumerate() {
        let param_path = format!("{path}.parameters[{p}]");
        check_name(&param.name, &param_path, report);
        check_native_type(&param.native_type, &param_path, report);
        if param.native_type.is_multi_value() {
            report.push(ErrorEntry::error(
                E_MULTI_VALUE_PARAMETER,
                "parameters take exactly one native type token",
                format!("{param_path}.nativeType"),
            ));
        }
    }

    let return_path = format!("{path}.returnType");
    check_name(&function.return_type.name, &return_path, report);
    check_native_type(&function.return_type.native_type, &return_path, report);
}

fn check_name(name: &str, path: &str, report: &mut ValidationReport) {
    if name.trim().is_empty() {
        report.push(ErrorEntry::error(
            E_EMPTY_NAME,
            "name must not be empty",
            format!("{path}.name"),
        ));
    }
}

fn check_native_type(native_type: &NativeType, path: &str, report: &mut ValidationReport) {
    if native_type.is_empty() {
        report.push(ErrorEntry::error(
            E_EMPTY_NATIVE_TYPE,
            "native type must contain at least one token",
            format!("{path}.nativeType"),
        ));
        return;
    }

    for (t, token) in native_type.tokens().iter().enumerate() {
        if !NATIVE_TYPE_TOKENS.contains(&token.as_str()) {
            report.push(ErrorEntry::warning(
                W_UNKNOWN_TOKEN,
                format!("unknown native type token '{token}'"),
                format!("{path}.nativeType[{t}]"),
            ));
        }
    }
}

fn check_unique<'a>(
    names: impl Iterator<Item = &'a str>,
    path: &str,
    report: &mut ValidationReport,
) {
    let mut first_seen: IndexMap<&str, usize> = IndexMap::new();
    for (i, name) in names.enumerate() {
        if name.is_empty() {
            continue;
        }
        match first_seen.get(name) {
            Some(first) => report.push(ErrorEntry::error(
                E_DUPLICATE_NAME,
                format!("duplicate name '{name}' (first declared at {path}[{first}])"),
                format!("{path}[{i}]"),
            )),
            None => {
                first_seen.insert(name, i);
            }
        }
    }
}

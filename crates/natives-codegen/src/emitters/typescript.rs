use natives_model::{Function, Interface, Module, TypeAlias};
use tracing::trace;

use crate::context::EmitContext;
use crate::dialect::Dialect;
use crate::docs::DocContent;
use crate::error::{require_name, CodegenError};
use crate::options::GenerateOptions;
use crate::traits::{DialectEmitter, TypeMap};
use crate::types::typescript::TypeScriptTypes;
use crate::types::TypeResolver;

/// TypeScript ambient declaration emitter.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptEmitter {
    types: TypeScriptTypes,
}

impl TypeScriptEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit_documentation(&self, doc: &DocContent, ctx: &EmitContext) -> String {
        let mut out = ctx.line("/**");
        for line in &doc.summary {
            out.push_str(&ctx.line(&format!("* {}", line)));
        }
        for (name, text) in &doc.params {
            out.push_str(&ctx.line(&format!("* @param {} {}", name, text)));
        }
        if let Some(returns) = &doc.returns {
            out.push_str(&ctx.line(&format!("* @returns {}", returns)));
        }
        out.push_str(&ctx.line("*/"));
        out
    }
}

impl DialectEmitter for TypeScriptEmitter {
    fn dialect(&self) -> Dialect {
        Dialect::TypeScript
    }

    fn type_map(&self) -> &dyn TypeMap {
        &self.types
    }

    fn documents_return_shape(&self) -> bool {
        false
    }

    fn emit_function(
        &self,
        function: &Function,
        options: &GenerateOptions,
        ctx: &mut EmitContext,
    ) -> Result<String, CodegenError> {
        require_name(&function.name, || "function".to_string())?;
        trace!(function = %function.name, "emitting declaration");

        let resolver = TypeResolver::new(&self.types, self.dialect(), function);
        let params = function
            .parameters
            .iter()
            .map(|p| {
                require_name(&p.name, || format!("function '{}' parameter", function.name))?;
                Ok(format!("{}: {}", p.name, resolver.parameter(p)?))
            })
            .collect::<Result<Vec<_>, CodegenError>>()?;
        let return_type = resolver.return_type(&function.return_type)?;

        let mut out = String::new();
        if options.documentation_enabled() {
            let doc = DocContent::collect(function, &resolver, self.documents_return_shape())?;
            if let Some(doc) = doc {
                out.push_str(&self.emit_documentation(&doc, ctx));
            }
        }
        out.push_str(&format!(
            "{}export function {}({}): {};",
            ctx.indent(),
            function.name,
            params.join(", "),
            return_type.type_name()
        ));
        Ok(out)
    }

    fn emit_module(
        &self,
        module: &Module,
        options: &GenerateOptions,
        ctx: &mut EmitContext,
    ) -> Result<String, CodegenError> {
        require_name(&module.name, || "module".to_string())?;

        let mut out = ctx.line(&format!("declare module \"{}\" {{", module.name));
        ctx.push_indent();
        for function in &module.functions {
            out.push_str(&self.emit_function(function, options, ctx)?);
            out.push('\n');
        }
        ctx.pop_indent();
        out.push_str(&format!("{}}}", ctx.indent()));
        Ok(out)
    }

    fn emit_imports(&self, ctx: &mut EmitContext) -> String {
        // ambient declarations import nothing
        ctx.take_usings();
        String::new()
    }

    fn declares_types(&self) -> bool {
        true
    }

    fn emit_interface(
        &self,
        interface: &Interface,
        ctx: &mut EmitContext,
    ) -> Result<String, CodegenError> {
        require_name(&interface.name, || "interface".to_string())?;

        let mut out = ctx.line(&format!("interface {} {{", interface.name));
        for property in &interface.properties {
            require_name(&property.name, || format!("interface '{}' property", interface.name))?;
            if property.type_.trim().is_empty() {
                return Err(CodegenError::malformed(
                    format!("interface '{}' property '{}'", interface.name, property.name),
                    "type must not be empty",
                ));
            }
            out.push_str(&format!("{}  {}: {};\n", ctx.indent(), property.name, property.type_));
        }
        out.push_str(&format!("{}}}", ctx.indent()));
        Ok(out)
    }

    fn emit_type_alias(
        &self,
        alias: &TypeAlias,
        ctx: &mut EmitContext,
    ) -> Result<String, CodegenError> {
        require_name(&alias.name, || "type alias".to_string())?;
        if alias.definition.trim().is_empty() {
            return Err(CodegenError::malformed(
                format!("type alias '{}'", alias.name),
                "definition must not be empty",
            ));
        }
        Ok(format!("{}type {} = {};", ctx.indent(), alias.name, alias.definition))
    }

    fn file_extension(&self) -> &str {
        "d.ts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use natives_model::{NativeType, Parameter, ReturnType};
    use pretty_assertions::assert_eq;

    fn emit(function: &Function, options: &GenerateOptions) -> Result<String, CodegenError> {
        let emitter = TypeScriptEmitter::new();
        let mut ctx = EmitContext::new();
        ctx.push_indent();
        emitter.emit_function(function, options, &mut ctx)
    }

    #[test]
    fn test_emit_function_without_docs() {
        let f = Function::new(
            "getPlayerHealth",
            ReturnType::new("number", NativeType::single("Int")),
        )
        .with_param(Parameter::new("playerId", "Int"));
        assert_eq!(
            emit(&f, &GenerateOptions::default()).unwrap(),
            "\texport function getPlayerHealth(playerId: number): number;"
        );
    }

    #[test]
    fn test_emit_void_function() {
        let f = Function::new("setEntityAlpha", ReturnType::void())
            .with_param(Parameter::new("entity", "Entity"))
            .with_param(Parameter::new("alpha", "Int"))
            .with_param(Parameter::new("skin", "Boolean"));
        assert_eq!(
            emit(&f, &GenerateOptions::default()).unwrap(),
            "\texport function setEntityAlpha(entity: number, alpha: number, skin: boolean): void;"
        );
    }

    #[test]
    fn test_emit_function_with_docs() {
        let f = Function::new(
            "getGroundZFor3dCoord",
            ReturnType::new("[boolean, number]", NativeType::multi(["Boolean", "Float"]))
                .with_description("ground height"),
        )
        .with_description("Finds the ground.\nMay fail under water.")
        .with_param(Parameter::new("x", "Float").with_description("world x"))
        .with_param(Parameter::new("y", "Float"));
        assert_eq!(
            emit(&f, &GenerateOptions::default()).unwrap(),
            "\t/**\n\
             \t* Finds the ground.\n\
             \t* May fail under water.\n\
             \t* @param x world x\n\
             \t* @returns [boolean, number] ground height\n\
             \t*/\n\
             \texport function getGroundZFor3dCoord(x: number, y: number): [boolean, number];"
        );
    }

    #[test]
    fn test_shape_only_function_has_no_docs() {
        let f = Function::new(
            "getGroundZ",
            ReturnType::new("[boolean, number]", NativeType::multi(["Boolean", "Float"])),
        );
        assert_eq!(
            emit(&f, &GenerateOptions::default()).unwrap(),
            "\texport function getGroundZ(): [boolean, number];"
        );
    }

    #[test]
    fn test_documentation_toggle() {
        let f = Function::new("wait", ReturnType::void())
            .with_description("Pauses")
            .with_param(Parameter::new("ms", "Int"));
        let options = GenerateOptions::new().generate_documentation(false);
        assert_eq!(emit(&f, &options).unwrap(), "\texport function wait(ms: number): void;");
    }

    #[test]
    fn test_comment_terminator_in_param_description_is_removed() {
        let f = Function::new("wait", ReturnType::void())
            .with_param(Parameter::new("ms", "Int").with_description("time */ in ms"));
        let code = emit(&f, &GenerateOptions::default()).unwrap();
        assert!(code.contains("\t* @param ms time  in ms\n"));
        assert_eq!(code.matches("*/").count(), 1);
    }

    #[test]
    fn test_emit_module() {
        let module = Module::new("natives")
            .with_function(
                Function::new("wait", ReturnType::void()).with_param(Parameter::new("ms", "Int")),
            )
            .with_function(Function::new(
                "getGameTimer",
                ReturnType::new("number", NativeType::single("Int")),
            ));
        let emitter = TypeScriptEmitter::new();
        let mut ctx = EmitContext::new();
        let code = emitter
            .emit_module(&module, &GenerateOptions::default(), &mut ctx)
            .unwrap();
        assert_eq!(
            code,
            "declare module \"natives\" {\n\
             \texport function wait(ms: number): void;\n\
             \texport function getGameTimer(): number;\n\
             }"
        );
        assert_eq!(ctx.indent_level(), 0);
    }

    #[test]
    fn test_emit_interface_and_alias() {
        let emitter = TypeScriptEmitter::new();
        let mut ctx = EmitContext::new();
        let iface = Interface::new("Vector3")
            .with_property("x", "number")
            .with_property("y", "number");
        assert_eq!(
            emitter.emit_interface(&iface, &mut ctx).unwrap(),
            "interface Vector3 {\n  x: number;\n  y: number;\n}"
        );
        assert_eq!(
            emitter
                .emit_type_alias(&TypeAlias::new("MemoryBuffer", "object"), &mut ctx)
                .unwrap(),
            "type MemoryBuffer = object;"
        );
    }

    #[test]
    fn test_blank_function_name_is_rejected() {
        let f = Function::new(" ", ReturnType::void());
        assert!(matches!(
            emit(&f, &GenerateOptions::default()),
            Err(CodegenError::MalformedModel { .. })
        ));
    }

    #[test]
    fn test_delimiter_only_description_emits_no_block() {
        let f = Function::new("wait", ReturnType::void())
            .with_param(Parameter::new("ms", "Int").with_description("/* */"));
        assert_eq!(
            emit(&f, &GenerateOptions::default()).unwrap(),
            "\texport function wait(ms: number): void;"
        );
    }
}

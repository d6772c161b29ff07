use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;
use natives_model::{Function, Module};
use tracing::trace;

use crate::context::EmitContext;
use crate::dialect::Dialect;
use crate::docs::DocContent;
use crate::error::{require_name, CodegenError};
use crate::options::GenerateOptions;
use crate::traits::{DialectEmitter, TypeMap};
use crate::types::csharp::CSharpTypes;
use crate::types::{ResolvedReturn, TypeResolver};

/// Produces the expression that fetches a native function from the handle.
pub trait HandleLookup: Send + Sync {
    fn lookup_expr(&self, handle: &str, name: &str) -> String;
}

/// `handle.GetObjectProperty("name")` on a `WebAssembly.Core` JS object.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectPropertyLookup;

impl HandleLookup for ObjectPropertyLookup {
    fn lookup_expr(&self, handle: &str, name: &str) -> String {
        format!("{}.GetObjectProperty(\"{}\")", handle, name)
    }
}

/// Shape of the generated wrapper class.
#[derive(Clone)]
pub struct BindingConfig {
    pub namespace: String,
    pub class_name: String,
    /// Field and constructor parameter holding the native object
    pub handle_field: String,
    pub handle_type: String,
    /// Type of the per-function reference fields
    pub function_type: String,
    pub usings: Vec<String>,
    pub lookup: Arc<dyn HandleLookup>,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            namespace: "AltV.Net.Client".to_string(),
            class_name: "NativeNatives".to_string(),
            handle_field: "native".to_string(),
            handle_type: "JSObject".to_string(),
            function_type: "Function".to_string(),
            usings: vec!["WebAssembly".to_string(), "WebAssembly.Core".to_string()],
            lookup: Arc::new(ObjectPropertyLookup),
        }
    }
}

impl fmt::Debug for BindingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingConfig")
            .field("namespace", &self.namespace)
            .field("class_name", &self.class_name)
            .field("handle_field", &self.handle_field)
            .field("handle_type", &self.handle_type)
            .field("function_type", &self.function_type)
            .field("usings", &self.usings)
            .finish_non_exhaustive()
    }
}

/// C# wrapper class emitter.
#[derive(Debug, Clone, Default)]
pub struct CSharpEmitter {
    config: BindingConfig,
    types: CSharpTypes,
}

impl CSharpEmitter {
    pub fn new(config: BindingConfig) -> Self {
        Self {
            config,
            types: CSharpTypes,
        }
    }

    fn emit_documentation(&self, doc: &DocContent, ctx: &EmitContext) -> String {
        let mut out = ctx.line("/// <summary>");
        for line in &doc.summary {
            out.push_str(&ctx.line(&format!("/// {}", line)));
        }
        out.push_str(&ctx.line("/// </summary>"));
        for (name, text) in &doc.params {
            out.push_str(&ctx.line(&format!("/// <param name=\"{}\">{}</param>", name, text)));
        }
        if let Some(returns) = &doc.returns {
            out.push_str(&ctx.line(&format!("/// <returns>{}</returns>", returns)));
        }
        out
    }

    /// Fields and the constructor that binds every function reference once.
    fn emit_class_prelude(&self, module: &Module, ctx: &mut EmitContext) -> String {
        let cfg = &self.config;
        let mut out = ctx.line(&format!(
            "private readonly {} {};",
            cfg.handle_type, cfg.handle_field
        ));
        out.push('\n');
        for function in &module.functions {
            out.push_str(&ctx.line(&format!(
                "private readonly {} {};",
                cfg.function_type,
                field_name(&function.name)
            )));
        }
        out.push('\n');

        out.push_str(&ctx.line(&format!(
            "public {}({} {})",
            cfg.class_name, cfg.handle_type, cfg.handle_field
        )));
        out.push_str(&ctx.line("{"));
        ctx.push_indent();
        out.push_str(&ctx.line(&format!(
            "this.{} = {};",
            cfg.handle_field, cfg.handle_field
        )));
        for function in &module.functions {
            let lookup = cfg.lookup.lookup_expr(&cfg.handle_field, &function.name);
            out.push_str(&ctx.line(&format!(
                "if ({field} == null) {field} = ({ty}) {lookup};",
                field = field_name(&function.name),
                ty = cfg.function_type,
            )));
        }
        ctx.pop_indent();
        out.push_str(&ctx.line("}"));
        out
    }

    /// Every field, method and the constructor share one class scope.
    fn check_members(&self, module: &Module) -> Result<(), CodegenError> {
        let mut taken = IndexSet::new();
        taken.insert(self.config.class_name.clone());
        taken.insert(self.config.handle_field.clone());
        for function in &module.functions {
            for member in [field_name(&function.name), method_name(&function.name)] {
                if !taken.insert(member.clone()) {
                    return Err(CodegenError::malformed(
                        format!("module '{}' function '{}'", module.name, function.name),
                        format!("class member '{}' is already declared", member),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl DialectEmitter for CSharpEmitter {
    fn dialect(&self) -> Dialect {
        Dialect::CSharp
    }

    fn type_map(&self) -> &dyn TypeMap {
        &self.types
    }

    fn documents_return_shape(&self) -> bool {
        true
    }

    fn emit_function(
        &self,
        function: &Function,
        options: &GenerateOptions,
        ctx: &mut EmitContext,
    ) -> Result<String, CodegenError> {
        require_name(&function.name, || "function".to_string())?;
        trace!(function = %function.name, "emitting wrapper");

        let resolver = TypeResolver::new(&self.types, self.dialect(), function);
        let params = function
            .parameters
            .iter()
            .map(|p| {
                require_name(&p.name, || format!("function '{}' parameter", function.name))?;
                Ok(format!("{} {}", resolver.parameter(p)?, p.name))
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

        out.push_str(&ctx.line(&format!(
            "public {} {}({})",
            return_type.type_name(),
            method_name(&function.name),
            params.join(", ")
        )));
        out.push_str(&ctx.line("{"));
        ctx.push_indent();

        // the bound handle always travels as the first argument
        let args: Vec<&str> = std::iter::once(self.config.handle_field.as_str())
            .chain(function.parameters.iter().map(|p| p.name.as_str()))
            .collect();
        let call = format!("{}.Call({})", field_name(&function.name), args.join(", "));
        let statement = match &return_type {
            ResolvedReturn::Void(_) => format!("{};", call),
            ResolvedReturn::Value(ty) => format!("return ({}) {};", ty, call),
        };
        out.push_str(&ctx.line(&statement));

        ctx.pop_indent();
        out.push_str(&ctx.line("}"));
        Ok(out)
    }

    fn emit_module(
        &self,
        module: &Module,
        options: &GenerateOptions,
        ctx: &mut EmitContext,
    ) -> Result<String, CodegenError> {
        require_name(&module.name, || "module".to_string())?;
        for function in &module.functions {
            require_name(&function.name, || format!("module '{}' function", module.name))?;
        }
        self.check_members(module)?;
        for namespace in &self.config.usings {
            ctx.add_using(namespace.clone());
        }

        let mut out = ctx.line(&format!("namespace {}", self.config.namespace));
        out.push_str(&ctx.line("{"));
        ctx.push_indent();
        out.push_str(&ctx.line(&format!("public class {}", self.config.class_name)));
        out.push_str(&ctx.line("{"));
        ctx.push_indent();

        out.push_str(&self.emit_class_prelude(module, ctx));
        out.push('\n');
        for function in &module.functions {
            out.push_str(&self.emit_function(function, options, ctx)?);
            out.push('\n');
        }

        ctx.pop_indent();
        out.push_str(&ctx.line("}"));
        ctx.pop_indent();
        out.push_str(&format!("{}}}", ctx.indent()));
        Ok(out)
    }

    fn emit_imports(&self, ctx: &mut EmitContext) -> String {
        let usings = ctx.take_usings();
        if usings.is_empty() {
            return String::new();
        }
        let lines: Vec<String> = usings
            .iter()
            .map(|namespace| format!("using {};", namespace))
            .collect();
        lines.join("\n")
    }

    fn file_extension(&self) -> &str {
        "cs"
    }

    fn module_limit(&self) -> Option<usize> {
        Some(1)
    }
}

/// Field holding a function reference: the native name, `_`-prefixed when
/// the native name is already its own method name.
fn field_name(name: &str) -> String {
    if method_name(name) == name {
        format!("_{name}")
    } else {
        name.to_string()
    }
}

/// Wrapper method name: the native name with its first character upper-cased.
fn method_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

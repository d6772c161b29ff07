use natives_model::{Function, Interface, Module, TypeAlias};

use crate::context::EmitContext;
use crate::dialect::Dialect;
use crate::error::CodegenError;
use crate::options::GenerateOptions;

/// Static mapping from native type tokens to one dialect's type spelling.
pub trait TypeMap: Send + Sync {
    /// Spelling for `token`, or `None` when the table has no entry.
    ///
    /// `multi_value` is set while resolving a member of a multi-value return.
    fn lookup(&self, token: &str, multi_value: bool) -> Option<&'static str>;

    /// Parameterized container for a multi-value return.
    fn container(&self, members: &[&str]) -> String;

    /// Spelling of "no value".
    fn void_type(&self) -> &'static str {
        "void"
    }
}

/// Dialect-specific renderer for functions and modules.
///
/// Each output dialect implements this trait to turn the document model
/// into well-formed source text.
pub trait DialectEmitter: Send + Sync {
    /// Which dialect this emitter targets.
    fn dialect(&self) -> Dialect;

    /// Native type table for this dialect.
    fn type_map(&self) -> &dyn TypeMap;

    /// Whether a multi-value return with no prose still gets a documentation block.
    fn documents_return_shape(&self) -> bool;

    /// Render one function: documentation block (if enabled) plus signature or body.
    fn emit_function(
        &self,
        function: &Function,
        options: &GenerateOptions,
        ctx: &mut EmitContext,
    ) -> Result<String, CodegenError>;

    /// Render one module with all of its functions in declaration order.
    fn emit_module(
        &self,
        module: &Module,
        options: &GenerateOptions,
        ctx: &mut EmitContext,
    ) -> Result<String, CodegenError>;

    /// Generate import directives from those collected in `ctx`.
    fn emit_imports(&self, ctx: &mut EmitContext) -> String;

    /// Whether interfaces and type aliases belong to this dialect.
    fn declares_types(&self) -> bool {
        false
    }

    fn emit_interface(
        &self,
        _interface: &Interface,
        _ctx: &mut EmitContext,
    ) -> Result<String, CodegenError> {
        Err(CodegenError::UnsupportedSection {
            dialect: self.dialect(),
            section: "interface",
        })
    }

    fn emit_type_alias(
        &self,
        _alias: &TypeAlias,
        _ctx: &mut EmitContext,
    ) -> Result<String, CodegenError> {
        Err(CodegenError::UnsupportedSection {
            dialect: self.dialect(),
            section: "type alias",
        })
    }

    /// File extension for this dialect (e.g., "d.ts", "cs").
    fn file_extension(&self) -> &str;

    /// Most modules one file of this dialect can hold; `None` for no limit.
    fn module_limit(&self) -> Option<usize> {
        None
    }
}

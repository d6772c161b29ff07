use natives_model::Document;
use tracing::debug;

use crate::context::EmitContext;
use crate::dialect::Dialect;
use crate::emitters;
use crate::error::CodegenError;
use crate::options::GenerateOptions;
use crate::traits::DialectEmitter;

/// First header line of every generated file.
pub const BANNER: &str = "THIS FILE IS AUTOGENERATED by natives-typegen";

/// Renders a whole [`Document`] into one source file of a single dialect.
pub struct DocumentGenerator {
    emitter: Box<dyn DialectEmitter>,
    options: GenerateOptions,
}

impl std::fmt::Debug for DocumentGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentGenerator")
            .field("dialect", &self.emitter.dialect())
            .field("options", &self.options)
            .finish()
    }
}

impl DocumentGenerator {
    /// Create a generator for `dialect` using that dialect's default emitter.
    pub fn new(dialect: Dialect, options: GenerateOptions) -> Self {
        Self::with_emitter(emitters::create_emitter(dialect), options)
    }

    /// Create a generator around a preconfigured emitter.
    pub fn with_emitter(emitter: Box<dyn DialectEmitter>, options: GenerateOptions) -> Self {
        Self { emitter, options }
    }

    /// Generate the complete file.
    ///
    /// Order: header, imports, interfaces, type aliases, modules. Any
    /// unmapped or malformed element aborts the whole document.
    pub fn generate(&self, document: &Document) -> Result<String, CodegenError> {
        let dialect = self.emitter.dialect();
        debug!(
            %dialect,
            modules = document.modules.len(),
            functions = document.function_count(),
            "generating document"
        );

        if let Some(limit) = self.emitter.module_limit() {
            if document.modules.len() > limit {
                return Err(CodegenError::malformed(
                    "document",
                    format!(
                        "{} modules given, the {} dialect renders at most {}",
                        document.modules.len(),
                        dialect,
                        limit
                    ),
                ));
            }
        }

        let mut ctx = EmitContext::new();
        let mut body = String::new();

        if self.emitter.declares_types() {
            for interface in &document.interfaces {
                body.push_str(&self.emitter.emit_interface(interface, &mut ctx)?);
                body.push('\n');
            }
            body.push('\n');

            for alias in &document.type_aliases {
                body.push_str(&self.emitter.emit_type_alias(alias, &mut ctx)?);
                body.push('\n');
            }
            body.push('\n');
        }

        for module in &document.modules {
            debug!(
                %dialect,
                module = %module.name,
                functions = module.functions.len(),
                "rendering module"
            );
            body.push_str(&self.emitter.emit_module(module, &self.options, &mut ctx)?);
            body.push_str("\n\n");
        }

        let imports = self.emitter.emit_imports(&mut ctx);

        let mut out = self.header();
        if !imports.is_empty() {
            out.push_str(&imports);
            out.push_str("\n\n");
        }
        out.push_str(&body);
        Ok(out)
    }

    fn header(&self) -> String {
        if !self.options.emit_header {
            return String::new();
        }

        let mut out = format!("// {}\n", BANNER);
        if let Some(timestamp) = &self.options.timestamp {
            out.push_str(&format!("// Generated {}\n", timestamp));
        }
        for line in self.options.custom_header_lines.iter().flatten() {
            for part in line.split('\n') {
                out.push_str(&format!("//{}\n", part.trim_end_matches('\r')));
            }
        }
        out.push('\n');
        out
    }

    pub fn dialect(&self) -> Dialect {
        self.emitter.dialect()
    }

    /// Access the dialect emitter.
    pub fn emitter(&self) -> &dyn DialectEmitter {
        self.emitter.as_ref()
    }
}

/// Run several generators over the same document in parallel.
///
/// Each generator renders on its own scoped thread into its own buffer;
/// results come back in the order of `generators`.
pub fn generate_all(
    document: &Document,
    generators: &[DocumentGenerator],
) -> Vec<Result<String, CodegenError>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = generators
            .iter()
            .map(|generator| scope.spawn(move || generator.generate(document)))
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}

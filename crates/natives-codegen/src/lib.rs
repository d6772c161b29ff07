pub mod context;
pub mod dialect;
pub mod docs;
pub mod error;
pub mod generator;
pub mod options;
pub mod traits;

// Native type mapping tables
pub mod types;

// Dialect emitters
pub mod emitters;

// Re-exports
pub use context::EmitContext;
pub use dialect::Dialect;
pub use emitters::csharp::{BindingConfig, HandleLookup, ObjectPropertyLookup};
pub use error::{CodegenError, TypeSite};
pub use generator::{generate_all, DocumentGenerator, BANNER};
pub use options::GenerateOptions;
pub use traits::{DialectEmitter, TypeMap};

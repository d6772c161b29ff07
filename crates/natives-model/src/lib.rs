pub mod loader;
pub mod types;
pub mod validator;

// Re-exports
pub use loader::{load_document, parse_document, LoadError};
pub use types::document::{
    Document, Function, Interface, Module, NativeType, Parameter, Property, ReturnType, TypeAlias,
    NATIVE_TYPE_TOKENS, VOID_RETURN,
};
pub use types::error::{ErrorEntry, Severity, ValidationReport};
pub use validator::validate;

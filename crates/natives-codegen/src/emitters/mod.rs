pub mod csharp;
pub mod typescript;

use crate::dialect::Dialect;
use crate::traits::DialectEmitter;

/// Create the emitter for the given dialect with its default configuration.
pub fn create_emitter(dialect: Dialect) -> Box<dyn DialectEmitter> {
    match dialect {
        Dialect::TypeScript => Box::new(typescript::TypeScriptEmitter::new()),
        Dialect::CSharp => Box::new(csharp::CSharpEmitter::default()),
    }
}

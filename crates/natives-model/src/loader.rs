use std::path::Path;

use thiserror::Error;

use crate::types::document::Document;

/// Read a materialized document from a JSON file.
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_string_lossy().into_owned()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| LoadError::IoError(path.to_string_lossy().into_owned(), e))?;

    parse_document(&content, &path.to_string_lossy())
}

/// Parse a document from JSON text. `source` only labels errors.
pub fn parse_document(content: &str, source: &str) -> Result<Document, LoadError> {
    serde_json::from_str(content).map_err(|e| LoadError::ParseError {
        source_name: source.to_string(),
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("I/O error reading {0}: {1}")]
    IoError(String, std::io::Error),

    #[error("failed to parse {source_name} at {line}:{column}: {message}")]
    ParseError {
        source_name: String,
        line: usize,
        column: usize,
        message: String,
    },
}

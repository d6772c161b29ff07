use std::fmt;

use thiserror::Error;

use crate::dialect::Dialect;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("unmapped native type '{token}' for {site} of function '{function}' ({dialect})")]
    UnmappedType {
        dialect: Dialect,
        function: String,
        site: TypeSite,
        token: String,
    },

    #[error("malformed model at {location}: {reason}")]
    MalformedModel { location: String, reason: String },

    #[error("{dialect} output has no {section} section")]
    UnsupportedSection {
        dialect: Dialect,
        section: &'static str,
    },

    #[error("unknown dialect: {0}")]
    UnknownDialect(String),
}

impl CodegenError {
    pub(crate) fn malformed(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedModel {
            location: location.into(),
            reason: reason.into(),
        }
    }
}

/// Where a native type token appeared inside a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSite {
    Parameter(String),
    Return,
    /// Zero-based member of a multi-value return.
    ReturnMember(usize),
}

impl fmt::Display for TypeSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSite::Parameter(name) => write!(f, "parameter '{name}'"),
            TypeSite::Return => f.write_str("return type"),
            TypeSite::ReturnMember(index) => write!(f, "return member {index}"),
        }
    }
}

/// Fail on a blank identifier instead of emitting it.
pub(crate) fn require_name(
    name: &str,
    location: impl FnOnce() -> String,
) -> Result<(), CodegenError> {
    if name.trim().is_empty() {
        return Err(CodegenError::malformed(location(), "name must not be empty"));
    }
    Ok(())
}

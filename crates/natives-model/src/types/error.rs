use serde::{Deserialize, Serialize};

// ── Error code constants ──

pub const E_EMPTY_NAME: &str = "E_EMPTY_NAME";
pub const E_EMPTY_NATIVE_TYPE: &str = "E_EMPTY_NATIVE_TYPE";
pub const E_DUPLICATE_NAME: &str = "E_DUPLICATE_NAME";
pub const E_MULTI_VALUE_PARAMETER: &str = "E_MULTI_VALUE_PARAMETER";
pub const E_EMPTY_PROPERTY_TYPE: &str = "E_EMPTY_PROPERTY_TYPE";
pub const E_EMPTY_ALIAS_DEFINITION: &str = "E_EMPTY_ALIAS_DEFINITION";
pub const W_UNKNOWN_TOKEN: &str = "W_UNKNOWN_TOKEN";

/// Severity of a report entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// Machine-readable stable error code
    pub code: String,
    pub severity: Severity,
    /// Human-readable error message
    pub message: String,
    /// Dotted path to the offending element, e.g. `modules[0].functions[2]`
    pub path: String,
}

/// Aggregated validation report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the document is valid (no errors, warnings are ok)
    pub ok: bool,
    pub errors: Vec<ErrorEntry>,
}

impl ValidationReport {
    /// Create a successful (empty) report
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
        }
    }

    /// Add an entry and update the ok flag
    pub fn push(&mut self, entry: ErrorEntry) {
        if entry.severity == Severity::Error {
            self.ok = false;
        }
        self.errors.push(entry);
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.errors.iter().filter(|e| e.severity == severity).count()
    }

    /// Check if any errors exist (not warnings)
    pub fn has_errors(&self) -> bool {
        !self.ok
    }

    /// Entries carrying the given code, in report order.
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a ErrorEntry> + 'a {
        self.errors.iter().filter(move |e| e.code == code)
    }
}

impl ErrorEntry {
    pub fn error(code: &str, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            severity: Severity::Error,
            message: message.into(),
            path: path.into(),
        }
    }

    pub fn warning(code: &str, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            severity: Severity::Warning,
            message: message.into(),
            path: path.into(),
        }
    }
}

//! Generation options shared by every dialect.

/// Options for one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Include the banner and custom header lines
    pub(crate) emit_header: bool,
    /// Extra header lines, each emitted as its own comment line
    pub(crate) custom_header_lines: Option<Vec<String>>,
    /// Emit documentation blocks at all
    pub(crate) generate_documentation: bool,
    /// Label for the `Generated ...` banner line; omitted when absent
    pub(crate) timestamp: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            emit_header: true,
            custom_header_lines: None,
            generate_documentation: true,
            timestamp: None,
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit the file header.
    pub fn emit_header(mut self, value: bool) -> Self {
        self.emit_header = value;
        self
    }

    /// Set extra header comment lines.
    pub fn custom_header_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_header_lines = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// Set whether to emit documentation blocks.
    pub fn generate_documentation(mut self, value: bool) -> Self {
        self.generate_documentation = value;
        self
    }

    /// Set the generation timestamp label shown in the banner.
    pub fn timestamp(mut self, label: impl Into<String>) -> Self {
        self.timestamp = Some(label.into());
        self
    }

    pub fn documentation_enabled(&self) -> bool {
        self.generate_documentation
    }
}

use indexmap::IndexSet;

/// Tracks state during emission: indentation and collected `using` directives.
///
/// Both dialects indent with one tab per level.
#[derive(Debug, Clone, Default)]
pub struct EmitContext {
    /// Current indentation level
    indent_level: usize,
    /// Namespaces to import (deduped, insertion-ordered)
    usings: IndexSet<String>,
}

impl EmitContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current indentation string.
    pub fn indent(&self) -> String {
        "\t".repeat(self.indent_level)
    }

    /// Current indentation followed by `text` and a newline.
    pub fn line(&self, text: &str) -> String {
        format!("{}{}\n", self.indent(), text)
    }

    pub fn push_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn pop_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Add a namespace import (deduped).
    pub fn add_using(&mut self, namespace: impl Into<String>) {
        self.usings.insert(namespace.into());
    }

    /// Drain and return all collected namespace imports.
    pub fn take_usings(&mut self) -> IndexSet<String> {
        std::mem::take(&mut self.usings)
    }
}

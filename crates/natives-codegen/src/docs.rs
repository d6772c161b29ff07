//! Documentation content shared by every dialect.
//!
//! Dialects differ only in how the content is framed (`/** */` versus
//! `///` XML tags); which lines exist is decided here.

use natives_model::Function;

use crate::error::CodegenError;
use crate::types::TypeResolver;

/// The lines of one function's documentation block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocContent {
    /// One entry per line of the function description.
    pub summary: Vec<String>,
    /// `(parameter name, text)` for parameters that carry a description.
    pub params: Vec<(String, String)>,
    /// Container type text and/or return description.
    pub returns: Option<String>,
}

impl DocContent {
    /// Collect documentation for `function`.
    ///
    /// Text that is empty once sanitized counts as absent. Returns `None`
    /// when nothing is left and, unless `document_shape` is set, regardless
    /// of the return shape.
    pub fn collect(
        function: &Function,
        resolver: &TypeResolver<'_>,
        document_shape: bool,
    ) -> Result<Option<Self>, CodegenError> {
        let shape = resolver.return_shape(&function.return_type)?;

        let summary = function
            .description
            .as_deref()
            .map(summary_lines)
            .unwrap_or_default();

        let params: Vec<(String, String)> = function
            .parameters
            .iter()
            .filter_map(|p| {
                let text = fold_lines(p.description.as_deref()?);
                (!text.is_empty()).then(|| (p.name.clone(), text))
            })
            .collect();

        let return_text = function
            .return_type
            .description
            .as_deref()
            .map(fold_lines)
            .unwrap_or_default();

        let has_prose = !summary.is_empty() || !params.is_empty() || !return_text.is_empty();
        if !has_prose && !(document_shape && shape.is_some()) {
            return Ok(None);
        }

        let returns = format!("{} {}", shape.unwrap_or_default(), return_text);
        let returns = returns.trim();

        Ok(Some(Self {
            summary,
            params,
            returns: (!returns.is_empty()).then(|| returns.to_string()),
        }))
    }
}

/// Sanitized description lines, without leading or trailing blank lines.
fn summary_lines(text: &str) -> Vec<String> {
    let lines: Vec<String> = text.split('\n').map(sanitize_line).collect();
    let Some(start) = lines.iter().position(|l| !l.is_empty()) else {
        return Vec::new();
    };
    let end = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(start);
    lines[start..=end].to_vec()
}

/// Strip comment delimiters and surrounding whitespace from one line.
pub fn sanitize_line(line: &str) -> String {
    line.replace("/*", "").replace("*/", "").trim().to_string()
}

/// Sanitize every line and join the non-empty ones with single spaces.
pub fn fold_lines(text: &str) -> String {
    text.split('\n')
        .map(sanitize_line)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

//! Committee lookup from rich-text formatting.
//!
//! Resolutions put the committee name in bold on one of the first lines,
//! without any `key: value` syntax, so the plain-text extractor misses it.
//! The per-run bold flag comes from the external document-model
//! collaborator; this module only interprets the runs it is handed.

/// A rich-text run with its bold flag, as supplied by the document model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// Run text.
    pub text: String,
    /// Whether the run is rendered bold.
    pub bold: bool,
}

impl TextRun {
    /// Convenience constructor.
    pub fn new(text: impl Into<String>, bold: bool) -> Self {
        Self {
            text: text.into(),
            bold,
        }
    }
}

/// Best guess at the committee name: the first bold run, with a leading
/// `Committee:` label stripped. `None` when no bold run exists or the
/// remainder is empty.
pub fn committee_from_runs(runs: &[TextRun]) -> Option<String> {
    let first_bold = runs.iter().find(|run| run.bold)?;
    let raw = first_bold.text.trim();
    let name = raw.strip_prefix("Committee:").unwrap_or(raw).trim();
    (!name.is_empty()).then(|| name.to_string())
}

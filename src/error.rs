use thiserror::Error;

/// Errors raised only for caller contract violations.
///
/// Business-rule problems (missing header fields, invalid lines, stale
/// totals) are never errors at the API boundary — they are returned as data
/// in [`crate::types::ValidationResult`], since a draft invoice is expected
/// to be incomplete while it is being edited.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Invalid engine configuration (e.g. a negative tax rate).
    #[error("configuration error: {0}")]
    Config(String),
}

/// A single validation finding with field path and message.
///
/// Rendered through `Display` into the plain-string error/warning sequences
/// of [`crate::types::ValidationResult`], so consumers can show findings
/// directly to an end user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dot-separated path to the offending field (e.g. "lines[2].quantity").
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

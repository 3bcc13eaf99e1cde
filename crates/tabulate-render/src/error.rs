//! Error types for table rendering.

/// Errors that can stop a table from being rendered.
///
/// All of them are detected before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The requested style is not in the registry.
    #[error("unknown table style: {0}")]
    UnknownStyle(String),

    /// Input could not be decoded as text.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// An alignment token is not one of left, center, right, numeric.
    #[error("invalid alignment '{0}': expected one of left, center, right, numeric")]
    InvalidAlignment(String),
}

impl TableError {
    /// Create a malformed-input error.
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedInput(detail.into())
    }
}

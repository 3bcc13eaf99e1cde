//! Error types for the command-line front end.

use std::io;

use tabulate_render::TableError;

/// Errors that stop `tabulate` before a table is printed.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// The CSV reader rejected the input.
    #[error("failed to parse input: {0}")]
    Csv(#[from] csv::Error),

    /// The configuration file is missing or invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The field separator regex is unusable.
    #[error("invalid separator pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    /// The delimiter is not a single byte.
    #[error("invalid delimiter '{0}': expected a single ASCII character, '\\t' or 'tab'")]
    Delimiter(String),

    /// The table itself could not be rendered.
    #[error(transparent)]
    Table(#[from] TableError),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    /// Create a pattern error.
    pub fn pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }
}

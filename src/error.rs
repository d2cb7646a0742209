//! Error types for alff
//!
//! Fatal errors only: configuration problems and file I/O at the pipeline
//! boundaries. Per-SNP lookup failures are not errors; they resolve to the
//! -1 sentinel and the run continues.

use thiserror::Error;

/// Result type alias for alff operations
pub type Result<T> = std::result::Result<T, AlffError>;

/// Fatal error for the annotation pipeline
///
/// All errors are user-facing with clear messages and suggestions.
#[derive(Error, Debug)]
pub enum AlffError {
    /// Configuration is invalid (separator, columns, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Resolved allele column does not hold allele strings
    #[error("Allele column '{column}' is non-string. Please check the correct column is being read (set --allele-col explicitly).")]
    AlleleColumnNotText { column: String },

    /// Input table has fewer columns than required
    #[error("Input table needs at least two columns (SNP and allele), found {0}.")]
    TooFewColumns(usize),

    /// File system operation failed
    #[error("File operation failed: {0}. Check the path and file permissions.")]
    Io(#[from] std::io::Error),

    /// Delimited table parsing or writing failed
    #[error("Failed to read or write the table: {0}. Check the separator and file format.")]
    Csv(#[from] csv::Error),

    /// HTTP client could not be constructed
    #[error("Network client error: {0}.")]
    Http(#[from] reqwest::Error),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AlffError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

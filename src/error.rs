use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for summarizer operations.
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Error type returned across loading, summarizing, and report writing.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The input file does not exist. Raised before any processing or output happens;
    /// the only fatal error the normal path produces.
    #[error("missing input file: {}", .path.display())]
    MissingInput { path: PathBuf },

    /// Underlying I/O error (e.g. permission denied, unwritable output directory).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Excel workbook error.
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),

    /// CSV read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is not a readable rectangular table (no sheets, no header row,
    /// unrecognized extension, ...).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

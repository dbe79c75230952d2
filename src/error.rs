//! Error types for Calyx.
//!
//! Only the ingestion path can fail. The query surface resolves every
//! failure mode to an empty result, a default value, or an empty suggestion
//! list, so none of its operations return a `Result`.

use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Error, Debug)]
pub enum CalyxError {
    /// I/O failure while reading a catalog source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience result type used throughout the crate.
pub type Result<T> = std::result::Result<T, CalyxError>;

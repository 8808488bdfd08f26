//! Application error types

use thiserror::Error;

use crate::ports::FetchError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The fetch capability failed.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// A file could not be read.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

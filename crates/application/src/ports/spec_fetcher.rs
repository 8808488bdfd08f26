//! Spec fetcher port

use std::future::Future;
use std::pin::Pin;

use apidoc_domain::{DomainError, FetchResult, RequestDescriptor};
use thiserror::Error;

/// Transport-level failure of a fetch.
///
/// An HTTP error status is not a `FetchError`; it arrives as a
/// `FetchResult` with the status set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Request exceeded its timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that was exceeded.
        timeout_ms: u64,
    },

    /// Connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Redirect limit reached.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit.
        max: usize,
    },

    /// Response body could not be read as text.
    #[error("failed to read body: {0}")]
    Body(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

impl From<DomainError> for FetchError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidUrl(message) => Self::InvalidUrl(message),
            other => Self::Other(other.to_string()),
        }
    }
}

/// Boxed future returned by [`SpecFetcher::fetch`].
pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<FetchResult, FetchError>> + Send + 'a>>;

/// Port for performing the HTTP exchange of a decorated request.
///
/// The returned future settles exactly once. Retries and timeouts, if
/// any, are the implementation's concern.
pub trait SpecFetcher: Send + Sync {
    /// Sends the request and returns the response status line and body.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` only for transport failures.
    fn fetch<'a>(&'a self, request: &'a RequestDescriptor) -> FetchFuture<'a>;
}

//! Result of a completed HTTP exchange

use serde::{Deserialize, Serialize};

/// Status line and body text of a response.
///
/// Any HTTP status is a valid result here; deciding whether a 4xx/5xx
/// counts as a failure is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    /// HTTP status code
    pub status: u16,
    /// Reason phrase (e.g. "Not Found")
    pub status_text: String,
    /// Response body as text
    pub text: String,
}

impl FetchResult {
    /// Creates a new fetch result.
    #[must_use]
    pub fn new(status: u16, status_text: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            text: text.into(),
        }
    }

    /// Creates a `200 OK` result with the given body.
    #[must_use]
    pub fn ok(text: impl Into<String>) -> Self {
        Self::new(200, "OK", text)
    }

    /// Returns true for status codes of 400 and above.
    #[must_use]
    pub const fn is_error_status(&self) -> bool {
        self.status >= 400
    }
}

//! Fetch settings
//!
//! Transport preferences for the HTTP adapter. None of these are applied
//! by the download flow itself.

use serde::{Deserialize, Serialize};

/// Default limit on followed redirects.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Settings for the HTTP fetch adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    /// User-Agent header value.
    pub user_agent: String,
    /// Per-request timeout in milliseconds; no timeout when absent.
    pub timeout_ms: Option<u64>,
    /// Maximum number of redirects to follow.
    pub max_redirects: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_ms: None,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

fn default_user_agent() -> String {
    format!("apidoc/{}", env!("CARGO_PKG_VERSION"))
}

impl FetchSettings {
    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

//! Loading status of the most recent document fetch.
//!
//! A download moves from `None` to `Loading`, then to exactly one of
//! `Success` or `Failed`. `FailedConfig` is set by configuration loading
//! elsewhere and is kept as a valid value here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Coarse lifecycle indicator of a document fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum LoadingStatus {
    /// No fetch has started.
    #[default]
    None,

    /// A fetch is in flight.
    Loading,

    /// The last fetch failed.
    Failed,

    /// The last fetch succeeded.
    Success,

    /// Configuration could not be loaded.
    FailedConfig,

    /// A status outside the recognized set, kept verbatim.
    Unrecognized(String),
}

impl LoadingStatus {
    /// String forms of the recognized statuses.
    pub const RECOGNIZED: [&'static str; 5] =
        ["none", "loading", "failed", "success", "failedConfig"];

    /// Parses a status, keeping unrecognized values instead of failing.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        raw.parse().unwrap_or_else(|_| Self::Unrecognized(raw))
    }

    /// Returns the string form of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Loading => "loading",
            Self::Failed => "failed",
            Self::Success => "success",
            Self::FailedConfig => "failedConfig",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Returns true if this is one of the recognized statuses.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Returns true if a fetch is in progress.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true for the states a download ends in.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }
}

impl FromStr for LoadingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "loading" => Ok(Self::Loading),
            "failed" => Ok(Self::Failed),
            "success" => Ok(Self::Success),
            "failedConfig" => Ok(Self::FailedConfig),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

impl fmt::Display for LoadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for LoadingStatus {
    fn from(raw: String) -> Self {
        Self::from_raw(raw)
    }
}

impl From<&str> for LoadingStatus {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

impl From<LoadingStatus> for String {
    fn from(status: LoadingStatus) -> Self {
        match status {
            LoadingStatus::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

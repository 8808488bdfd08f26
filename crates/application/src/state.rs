//! Spec state: actions, reducer and selectors.
//!
//! The state container applies [`SpecAction`]s through [`reduce`]; readers
//! go through the selector functions so a missing slot reads as a default.

use apidoc_domain::LoadingStatus;
use tracing::error;

/// Persisted spec slot of the application state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecState {
    /// Status of the most recent download.
    pub loading_status: Option<LoadingStatus>,
    /// Body of the last successfully fetched document.
    pub spec: Option<String>,
    /// URL of the document.
    pub url: Option<String>,
}

/// Update intents accepted by the spec state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecAction {
    /// Set the loading status.
    UpdateLoadingStatus(LoadingStatus),
    /// Replace the document body.
    UpdateSpec(String),
    /// Replace the document URL.
    UpdateUrl(String),
}

impl SpecAction {
    /// Stable identifier of the action kind.
    #[must_use]
    pub const fn action_type(&self) -> &'static str {
        match self {
            Self::UpdateLoadingStatus(_) => "spec_update_loading_status",
            Self::UpdateSpec(_) => "spec_update_spec",
            Self::UpdateUrl(_) => "spec_update_url",
        }
    }
}

/// Builds a loading-status transition.
///
/// An unrecognized status is logged and still produces the transition.
#[must_use]
pub fn update_loading_status(status: impl Into<LoadingStatus>) -> SpecAction {
    let status = status.into();
    if let Err(e) = status.as_str().parse::<LoadingStatus>() {
        error!("{e}");
    }
    SpecAction::UpdateLoadingStatus(status)
}

/// Applies an action, returning the new state.
#[must_use]
pub fn reduce(state: &SpecState, action: SpecAction) -> SpecState {
    let mut next = state.clone();
    match action {
        SpecAction::UpdateLoadingStatus(status) => next.loading_status = Some(status),
        SpecAction::UpdateSpec(spec) => next.spec = Some(spec),
        SpecAction::UpdateUrl(url) => next.url = Some(url),
    }
    next
}

/// Current loading status; `None` when the state or slot is missing.
#[must_use]
pub fn loading_status(state: Option<&SpecState>) -> LoadingStatus {
    state
        .and_then(|s| s.loading_status.clone())
        .unwrap_or_default()
}

/// Body of the loaded document, if any.
#[must_use]
pub fn spec_body(state: &SpecState) -> Option<&str> {
    state.spec.as_deref()
}

/// URL of the loaded document, if any.
#[must_use]
pub fn spec_url(state: &SpecState) -> Option<&str> {
    state.url.as_deref()
}

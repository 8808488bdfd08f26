//! In-memory state container for the spec slot.
//!
//! Implements the `DownloadContext` port by dispatching each update
//! intent through the spec reducer under a single write lock.

use apidoc_application::DownloadContext;
use apidoc_application::state::{self, SpecAction, SpecState};
use apidoc_domain::{LoadingStatus, SecurityActivation};
use parking_lot::RwLock;
use tracing::debug;

/// Thread-safe in-memory store for spec state, authorization and errors.
#[derive(Debug, Default)]
pub struct InMemorySpecStore {
    spec: RwLock<SpecState>,
    authorized: RwLock<Vec<SecurityActivation>>,
    errors: RwLock<Vec<String>>,
}

impl InMemorySpecStore {
    /// Creates a store whose current URL is `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            spec: RwLock::new(SpecState {
                url: Some(url.into()),
                ..SpecState::default()
            }),
            ..Self::default()
        }
    }

    /// Applies an action through the spec reducer.
    pub fn dispatch(&self, action: SpecAction) {
        debug!(action = action.action_type(), "dispatching");
        let mut spec = self.spec.write();
        *spec = state::reduce(&spec, action);
    }

    /// Replaces the authorized activations.
    pub fn set_authorized(&self, activations: Vec<SecurityActivation>) {
        *self.authorized.write() = activations;
    }

    /// Returns a snapshot of the spec state.
    #[must_use]
    pub fn state(&self) -> SpecState {
        self.spec.read().clone()
    }

    /// Returns the current loading status.
    #[must_use]
    pub fn loading_status(&self) -> LoadingStatus {
        state::loading_status(Some(&*self.spec.read()))
    }

    /// Returns every error reported so far, oldest first.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors.read().clone()
    }
}

impl DownloadContext for InMemorySpecStore {
    fn current_url(&self) -> String {
        state::spec_url(&self.spec.read())
            .unwrap_or_default()
            .to_string()
    }

    fn authorized_activations(&self) -> Vec<SecurityActivation> {
        self.authorized.read().clone()
    }

    fn report_error(&self, message: String) {
        self.errors.write().push(message);
    }

    fn set_loading_status(&self, status: LoadingStatus) {
        self.dispatch(state::update_loading_status(status));
    }

    fn set_document_body(&self, text: String) {
        self.dispatch(SpecAction::UpdateSpec(text));
    }

    fn set_current_url(&self, url: String) {
        self.dispatch(SpecAction::UpdateUrl(url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidoc_domain::ApiKeyLocation;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_store_defaults() {
        let store = InMemorySpecStore::new("http://x/spec.json");
        assert_eq!(store.current_url(), "http://x/spec.json");
        assert_eq!(store.loading_status(), LoadingStatus::None);
        assert!(store.authorized_activations().is_empty());
        assert!(store.errors().is_empty());
    }

    #[test]
    fn test_empty_store_has_empty_url() {
        let store = InMemorySpecStore::default();
        assert_eq!(store.current_url(), "");
    }

    #[test]
    fn test_setters_go_through_reducer() {
        let store = InMemorySpecStore::new("http://x/old.json");
        store.set_loading_status(LoadingStatus::Success);
        store.set_document_body("{}".to_string());
        store.set_current_url("http://x/new.json".to_string());

        let state = store.state();
        assert_eq!(state.loading_status, Some(LoadingStatus::Success));
        assert_eq!(state.spec.as_deref(), Some("{}"));
        assert_eq!(store.current_url(), "http://x/new.json");
    }

    #[test]
    fn test_unrecognized_status_is_stored() {
        let store = InMemorySpecStore::default();
        store.set_loading_status(LoadingStatus::from_raw("bogus"));
        assert_eq!(
            store.loading_status(),
            LoadingStatus::Unrecognized("bogus".to_string())
        );
    }

    #[test]
    fn test_authorized_and_errors() {
        let store = InMemorySpecStore::default();
        let activation = SecurityActivation::api_key("key", ApiKeyLocation::Query, "abc");
        store.set_authorized(vec![activation.clone()]);
        store.report_error("first".to_string());
        store.report_error("second".to_string());

        assert_eq!(store.authorized_activations(), vec![activation]);
        assert_eq!(store.errors(), vec!["first".to_string(), "second".to_string()]);
    }
}

//! Download Spec Use Case
//!
//! Fetches the API description document and publishes the outcome into
//! the shared state: one `loading` transition, then exactly one of
//! `success` (with body and URL) or `failed` (with a reported error).

use std::sync::Arc;

use apidoc_domain::{FetchResult, LoadingStatus, RequestDescriptor};
use tracing::{debug, info, warn};

use crate::ports::{DownloadContext, FetchError, SpecFetcher};
use crate::security::apply_securities;

/// How a download ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Document fetched and published.
    Loaded {
        /// URL the document was fetched from.
        url: String,
    },
    /// Fetch failed; `message` was reported to the user.
    Failed {
        /// Reported error message, `"<status text> <url>"`.
        message: String,
    },
}

impl DownloadOutcome {
    /// Returns true if the document was loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Use case for downloading an API description.
///
/// Concurrent calls are not serialized; each runs its own sequence and the
/// last update applied to the shared state wins.
///
/// # Example
///
/// ```ignore
/// let fetcher = Arc::new(ReqwestSpecFetcher::new(&FetchSettings::default())?);
/// let store = Arc::new(InMemorySpecStore::new("https://petstore.example/openapi.json"));
/// let use_case = DownloadSpec::new(fetcher, store);
///
/// use_case.download(None).await;
/// ```
pub struct DownloadSpec<F: SpecFetcher, C: DownloadContext> {
    fetcher: Arc<F>,
    context: Arc<C>,
}

impl<F: SpecFetcher, C: DownloadContext> DownloadSpec<F, C> {
    /// Creates a new `DownloadSpec` use case.
    pub const fn new(fetcher: Arc<F>, context: Arc<C>) -> Self {
        Self { fetcher, context }
    }

    /// Downloads the document from `url`, or from the current URL when
    /// `url` is absent or empty.
    ///
    /// Never fails: every outcome is published as a state transition and
    /// also returned for the caller's convenience.
    pub async fn download(&self, url: Option<&str>) -> DownloadOutcome {
        let url = match url {
            Some(explicit) if !explicit.is_empty() => explicit.to_string(),
            _ => self.context.current_url(),
        };

        self.context.set_loading_status(LoadingStatus::Loading);

        let activations = self.context.authorized_activations();
        debug!(url = %url, activations = activations.len(), "downloading spec");

        let request = apply_securities(
            &RequestDescriptor::spec_download(url.as_str()),
            &activations,
        );
        let result = self.fetcher.fetch(&request).await;

        self.complete(url, result)
    }

    fn complete(&self, url: String, result: Result<FetchResult, FetchError>) -> DownloadOutcome {
        match result {
            Ok(response) if !response.is_error_status() => {
                info!(url = %url, bytes = response.text.len(), "spec downloaded");
                self.context.set_loading_status(LoadingStatus::Success);
                self.context.set_document_body(response.text);
                self.context.set_current_url(url.clone());
                DownloadOutcome::Loaded { url }
            }
            Ok(response) => self.fail(&response.status_text, &url),
            Err(error) => self.fail(&error.to_string(), &url),
        }
    }

    fn fail(&self, reason: &str, url: &str) -> DownloadOutcome {
        let message = format!("{reason} {url}");
        warn!(%message, "spec download failed");
        self.context.set_loading_status(LoadingStatus::Failed);
        self.context.report_error(message.clone());
        DownloadOutcome::Failed { message }
    }
}

//! Spec fetcher implementation using reqwest.
//!
//! This adapter implements the `SpecFetcher` port. Any HTTP status is
//! returned as a `FetchResult`; only transport failures become errors.

use std::time::Duration;

use apidoc_application::ports::{FetchError, FetchFuture, SpecFetcher};
use apidoc_domain::{FetchResult, FetchSettings, RequestDescriptor};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, trace};

/// Spec fetcher backed by `reqwest::Client`.
pub struct ReqwestSpecFetcher {
    client: Client,
    timeout_ms: Option<u64>,
    max_redirects: usize,
}

impl ReqwestSpecFetcher {
    /// Creates a fetcher from the given settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(settings: &FetchSettings) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(settings.max_redirects));
        if let Some(timeout_ms) = settings.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Other(e.to_string()))?;

        Ok(Self {
            client,
            timeout_ms: settings.timeout_ms,
            max_redirects: settings.max_redirects,
        })
    }

    /// Maps reqwest errors to `FetchError`.
    fn map_error(&self, error: &reqwest::Error) -> FetchError {
        if error.is_timeout() {
            return FetchError::Timeout {
                timeout_ms: self.timeout_ms.unwrap_or_default(),
            };
        }
        if error.is_connect() {
            return FetchError::ConnectionFailed(error.to_string());
        }
        if error.is_redirect() {
            return FetchError::TooManyRedirects {
                max: self.max_redirects,
            };
        }
        if error.is_body() || error.is_decode() {
            return FetchError::Body(error.to_string());
        }
        FetchError::Other(error.to_string())
    }

    async fn send(&self, request: &RequestDescriptor) -> Result<FetchResult, FetchError> {
        let url = request.resolved_url()?;
        trace!(
            url = %url,
            credentials = ?request.credentials,
            load_spec = request.load_spec,
            "sending request"
        );

        let response = self
            .client
            .get(url)
            .headers(header_map(request))
            .send()
            .await
            .map_err(|e| self.map_error(&e))?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let text = response.text().await.map_err(|e| self.map_error(&e))?;

        Ok(FetchResult::new(status.as_u16(), status_text, text))
    }
}

/// Converts the descriptor headers, skipping pairs that are not valid HTTP.
fn header_map(request: &RequestDescriptor) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(request.headers.len());
    for (name, value) in &request.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => debug!(name = %name, "skipping invalid header"),
        }
    }
    headers
}

impl SpecFetcher for ReqwestSpecFetcher {
    fn fetch<'a>(&'a self, request: &'a RequestDescriptor) -> FetchFuture<'a> {
        Box::pin(self.send(request))
    }
}

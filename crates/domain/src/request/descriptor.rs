//! Transport-agnostic request descriptor

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Accept header sent when fetching an API description.
pub const SPEC_ACCEPT: &str = "application/json,*/*";

/// Whether credentials such as cookies travel with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialsPolicy {
    /// Never send credentials
    Omit,
    /// Send credentials to the same origin only
    #[default]
    SameOrigin,
    /// Always send credentials
    Include,
}

/// An outgoing HTTP request before or after security decoration.
///
/// Decoration never mutates a descriptor in place; it produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// Target URL
    pub url: String,
    /// Header names are kept exactly as provided
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Query parameters added on top of any query already in `url`
    #[serde(default)]
    pub query: BTreeMap<String, String>,
    /// Credentials policy
    #[serde(default)]
    pub credentials: CredentialsPolicy,
    /// Marks a document fetch rather than a generic request
    #[serde(default)]
    pub load_spec: bool,
}

impl RequestDescriptor {
    /// Creates a descriptor for the given URL with no headers or query.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            query: BTreeMap::new(),
            credentials: CredentialsPolicy::default(),
            load_spec: false,
        }
    }

    /// Creates the base descriptor used to download an API description.
    #[must_use]
    pub fn spec_download(url: impl Into<String>) -> Self {
        Self::new(url)
            .with_header("Accept", SPEC_ACCEPT)
            .with_credentials(CredentialsPolicy::SameOrigin)
            .with_load_spec(true)
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Sets the credentials policy.
    #[must_use]
    pub const fn with_credentials(mut self, credentials: CredentialsPolicy) -> Self {
        self.credentials = credentials;
        self
    }

    /// Sets the document-fetch flag.
    #[must_use]
    pub const fn with_load_spec(mut self, load_spec: bool) -> Self {
        self.load_spec = load_spec;
        self
    }

    /// Returns a header value by its exact name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Returns a query parameter value by name.
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// Parses `url` and appends every query parameter.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the URL is empty or malformed.
    pub fn resolved_url(&self) -> DomainResult<Url> {
        if self.url.trim().is_empty() {
            return Err(DomainError::InvalidUrl("URL is required".to_string()));
        }
        let mut url = Url::parse(&self.url)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.url)))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

//! Apidoc Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (the fetch capability and the shared download context)
//! - Security decoration of outgoing requests
//! - The spec download use case
//! - Spec state actions, reducer and selectors

pub mod download;
pub mod error;
pub mod ports;
pub mod security;
pub mod state;

pub use download::{DownloadOutcome, DownloadSpec};
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{DownloadContext, FetchError, FetchFuture, SpecFetcher};
pub use security::apply_securities;
pub use state::{SpecAction, SpecState, update_loading_status};

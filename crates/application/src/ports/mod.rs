//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod download_context;
mod spec_fetcher;

pub use download_context::DownloadContext;
pub use spec_fetcher::{FetchError, FetchFuture, SpecFetcher};

//! Adapters implementing application ports.

mod in_memory_store;
mod reqwest_fetcher;

pub use in_memory_store::InMemorySpecStore;
pub use reqwest_fetcher::ReqwestSpecFetcher;

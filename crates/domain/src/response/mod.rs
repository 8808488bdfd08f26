//! Response domain types

mod fetch_result;

pub use fetch_result::FetchResult;

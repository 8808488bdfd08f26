//! Apidoc Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod auth;

pub use adapters::{InMemorySpecStore, ReqwestSpecFetcher};
pub use auth::{load_activations, parse_activations};

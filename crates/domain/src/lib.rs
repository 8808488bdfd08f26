//! Apidoc Domain - Core types
//!
//! This crate defines the value types shared by the spec loader:
//! request descriptors, security schemes and their credentials,
//! fetch results and the loading status lifecycle.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod error;
pub mod request;
pub mod response;
pub mod settings;
pub mod state;

pub use auth::{
    ApiKeyLocation, BasicCredentials, SecurityActivation, SecurityScheme, SecurityValue,
    TokenCredentials,
};
pub use error::{DomainError, DomainResult};
pub use request::{CredentialsPolicy, RequestDescriptor, SPEC_ACCEPT};
pub use response::FetchResult;
pub use settings::FetchSettings;
pub use state::LoadingStatus;

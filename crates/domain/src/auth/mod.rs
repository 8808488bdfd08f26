//! Security scheme domain types

mod types;

pub use types::{
    ApiKeyLocation, BasicCredentials, SecurityActivation, SecurityScheme, SecurityValue,
    TokenCredentials,
};

//! Request domain types

mod descriptor;

pub use descriptor::{CredentialsPolicy, RequestDescriptor, SPEC_ACCEPT};

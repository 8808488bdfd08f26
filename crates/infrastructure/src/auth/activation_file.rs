//! JSON file of security activations.
//!
//! The file holds an array in application order, e.g.
//!
//! ```json
//! [
//!   { "schema": { "type": "apiKey", "in": "query", "name": "key" }, "value": "abc" },
//!   { "schema": { "type": "basic" }, "value": { "username": "u", "password": "p" } },
//!   { "schema": { "type": "oauth2" }, "token": { "access_token": "tok" } }
//! ]
//! ```

use std::path::Path;

use apidoc_application::{ApplicationError, ApplicationResult};
use apidoc_domain::SecurityActivation;
use tokio::fs;
use tracing::debug;

/// Parses a JSON array of activations.
///
/// # Errors
///
/// Returns `ApplicationError::Config` if the JSON is malformed.
pub fn parse_activations(json: &str) -> ApplicationResult<Vec<SecurityActivation>> {
    serde_json::from_str(json)
        .map_err(|e| ApplicationError::Config(format!("invalid activations: {e}")))
}

/// Reads and parses an activation file.
///
/// # Errors
///
/// Returns `ApplicationError::Io` if the file cannot be read, or
/// `ApplicationError::Config` if its contents are malformed.
pub async fn load_activations(path: &Path) -> ApplicationResult<Vec<SecurityActivation>> {
    let json = fs::read_to_string(path)
        .await
        .map_err(|e| ApplicationError::Io(format!("{}: {e}", path.display())))?;
    let activations = parse_activations(&json)?;
    debug!(path = %path.display(), count = activations.len(), "loaded activations");
    Ok(activations)
}

//! Security decoration of outgoing requests.
//!
//! [`apply_securities`] folds an ordered list of activations over a copy of
//! the base request. Each activation writes one header or query parameter;
//! when two activations target the same name, the later one wins.
//!
//! A missing or mismatched credential never aborts the fold. The target
//! name is left absent instead (removed if an earlier activation set it).

use std::collections::BTreeMap;

use apidoc_domain::{
    ApiKeyLocation, RequestDescriptor, SecurityActivation, SecurityScheme, SecurityValue,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, trace};

/// Header carrying basic and `OAuth2` credentials.
pub const AUTHORIZATION: &str = "authorization";

/// Token type used when neither the token nor the value names one.
pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// Returns a copy of `base` decorated with every activation, in order.
///
/// `base` is left untouched. The result depends only on the inputs.
#[must_use]
pub fn apply_securities<'a, I>(base: &RequestDescriptor, activations: I) -> RequestDescriptor
where
    I: IntoIterator<Item = &'a SecurityActivation>,
{
    activations.into_iter().fold(base.clone(), apply_security)
}

fn apply_security(
    mut request: RequestDescriptor,
    activation: &SecurityActivation,
) -> RequestDescriptor {
    trace!(scheme = activation.schema.kind(), "applying security");

    match &activation.schema {
        SecurityScheme::ApiKey { name, location } => {
            let target = match location {
                ApiKeyLocation::Query => &mut request.query,
                ApiKeyLocation::Header => &mut request.headers,
            };
            let key = activation
                .value
                .as_ref()
                .and_then(SecurityValue::as_api_key)
                .filter(|_| !name.is_empty())
                .map(str::to_string);
            assign(target, name, key);
        }
        SecurityScheme::Basic => {
            assign(
                &mut request.headers,
                AUTHORIZATION,
                basic_authorization(activation),
            );
        }
        SecurityScheme::OAuth2 => {
            assign(
                &mut request.headers,
                AUTHORIZATION,
                oauth2_authorization(activation),
            );
        }
        SecurityScheme::Other => {}
    }

    request
}

fn assign(target: &mut BTreeMap<String, String>, name: &str, value: Option<String>) {
    if let Some(value) = value {
        target.insert(name.to_string(), value);
    } else {
        debug!(name, "security credential missing, leaving value absent");
        target.remove(name);
    }
}

fn basic_authorization(activation: &SecurityActivation) -> Option<String> {
    let credentials = activation.value.as_ref()?.as_basic()?;

    if let Some(header) = &credentials.pre_encoded_header {
        return Some(header.clone());
    }

    let username = credentials.username.as_deref()?;
    let password = credentials.password.as_deref().unwrap_or_default();
    let encoded = STANDARD.encode(format!("{username}:{password}"));
    Some(format!("Basic {encoded}"))
}

fn oauth2_authorization(activation: &SecurityActivation) -> Option<String> {
    let token = activation.token.as_ref();
    let value = activation.value.as_ref().and_then(SecurityValue::as_oauth2);

    let access_token = token
        .and_then(|t| t.access_token.as_deref())
        .or_else(|| value.and_then(|v| v.access_token.as_deref()))?;
    let token_type = token
        .and_then(|t| t.token_type.as_deref())
        .or_else(|| value.and_then(|v| v.token_type.as_deref()))
        .unwrap_or(DEFAULT_TOKEN_TYPE);

    Some(format!("{token_type} {access_token}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidoc_domain::{BasicCredentials, TokenCredentials};
    use pretty_assertions::assert_eq;

    fn base() -> RequestDescriptor {
        RequestDescriptor::spec_download("http://x/spec.json")
    }

    #[test]
    fn test_no_activations_copies_base() {
        let base = base();
        let none: Vec<SecurityActivation> = Vec::new();
        let result = apply_securities(&base, &none);
        assert_eq!(result, base);
    }

    #[test]
    fn test_pure_and_base_untouched() {
        let base = base();
        let snapshot = base.clone();
        let activations = vec![
            SecurityActivation::api_key("X-Key", ApiKeyLocation::Header, "k"),
            SecurityActivation::basic("u", "p"),
        ];

        let first = apply_securities(&base, &activations);
        let second = apply_securities(&base, &activations);

        assert_eq!(first, second);
        assert_eq!(base, snapshot);
        assert_eq!(base.header(AUTHORIZATION), None);
    }

    #[test]
    fn test_api_key_in_query() {
        let activation = SecurityActivation::api_key("key", ApiKeyLocation::Query, "abc");
        let result = apply_securities(&base(), [&activation]);
        assert_eq!(result.query_param("key"), Some("abc"));
        assert_eq!(result.header("key"), None);
    }

    #[test]
    fn test_api_key_in_header() {
        let activation = SecurityActivation::api_key("X-API-Key", ApiKeyLocation::Header, "abc");
        let result = apply_securities(&base(), [&activation]);
        assert_eq!(result.header("X-API-Key"), Some("abc"));
        assert!(result.query.is_empty());
    }

    #[test]
    fn test_basic_computed() {
        let activation = SecurityActivation::basic("u", "p");
        let result = apply_securities(&base(), [&activation]);
        assert_eq!(result.header(AUTHORIZATION), Some("Basic dTpw"));
    }

    #[test]
    fn test_basic_pre_encoded_passthrough() {
        let activation = SecurityActivation::basic_header("Basic ZXhhbXBsZQ==");
        let result = apply_securities(&base(), [&activation]);
        assert_eq!(result.header(AUTHORIZATION), Some("Basic ZXhhbXBsZQ=="));
    }

    #[test]
    fn test_basic_pre_encoded_wins_over_username() {
        let activation = SecurityActivation::new(
            SecurityScheme::Basic,
            Some(SecurityValue::Basic(BasicCredentials {
                username: Some("u".to_string()),
                password: Some("p".to_string()),
                pre_encoded_header: Some("Custom abc".to_string()),
            })),
        );
        let result = apply_securities(&base(), [&activation]);
        assert_eq!(result.header(AUTHORIZATION), Some("Custom abc"));
    }

    #[test]
    fn test_basic_missing_password_encodes_empty() {
        let activation = SecurityActivation::new(
            SecurityScheme::Basic,
            Some(SecurityValue::Basic(BasicCredentials {
                username: Some("user".to_string()),
                ..BasicCredentials::default()
            })),
        );
        let result = apply_securities(&base(), [&activation]);
        // "user:"
        assert_eq!(result.header(AUTHORIZATION), Some("Basic dXNlcjo="));
    }

    #[test]
    fn test_oauth2_default_bearer() {
        let activation = SecurityActivation::oauth2("tok");
        let result = apply_securities(&base(), [&activation]);
        assert_eq!(result.header(AUTHORIZATION), Some("Bearer tok"));
    }

    #[test]
    fn test_oauth2_value_token_type() {
        let activation = SecurityActivation::new(
            SecurityScheme::OAuth2,
            Some(SecurityValue::OAuth2(
                TokenCredentials::new("tok").with_token_type("Token"),
            )),
        );
        let result = apply_securities(&base(), [&activation]);
        assert_eq!(result.header(AUTHORIZATION), Some("Token tok"));
    }

    #[test]
    fn test_oauth2_token_precedence() {
        let activation = SecurityActivation::oauth2("t1")
            .with_token(TokenCredentials::new("t2").with_token_type("MAC"));
        let result = apply_securities(&base(), [&activation]);
        assert_eq!(result.header(AUTHORIZATION), Some("MAC t2"));
    }

    #[test]
    fn test_oauth2_falls_back_to_value_access_token() {
        let token = TokenCredentials {
            access_token: None,
            token_type: Some("MAC".to_string()),
        };
        let activation = SecurityActivation::oauth2("t1").with_token(token);
        let result = apply_securities(&base(), [&activation]);
        assert_eq!(result.header(AUTHORIZATION), Some("MAC t1"));
    }

    #[test]
    fn test_oauth2_token_without_value() {
        let activation = SecurityActivation::new(SecurityScheme::OAuth2, None)
            .with_token(TokenCredentials::new("t3"));
        let result = apply_securities(&base(), [&activation]);
        assert_eq!(result.header(AUTHORIZATION), Some("Bearer t3"));
    }

    #[test]
    fn test_last_write_wins() {
        let activations = vec![
            SecurityActivation::basic("u", "p"),
            SecurityActivation::oauth2("tok"),
        ];
        let result = apply_securities(&base(), &activations);
        assert_eq!(result.header(AUTHORIZATION), Some("Bearer tok"));

        let reversed: Vec<_> = activations.iter().rev().collect();
        let result = apply_securities(&base(), reversed);
        assert_eq!(result.header(AUTHORIZATION), Some("Basic dTpw"));
    }

    #[test]
    fn test_last_write_wins_for_query() {
        let activations = vec![
            SecurityActivation::api_key("key", ApiKeyLocation::Query, "first"),
            SecurityActivation::api_key("key", ApiKeyLocation::Query, "second"),
        ];
        let result = apply_securities(&base(), &activations);
        assert_eq!(result.query_param("key"), Some("second"));
    }

    #[test]
    fn test_other_scheme_is_noop() {
        let other = SecurityActivation::new(
            SecurityScheme::Other,
            Some(SecurityValue::ApiKey("ignored".to_string())),
        );
        let key = SecurityActivation::api_key("key", ApiKeyLocation::Query, "abc");

        let with_other = apply_securities(&base(), [&key, &other]);
        let without_other = apply_securities(&base(), [&key]);
        assert_eq!(with_other, without_other);
    }

    #[test]
    fn test_missing_api_key_value_is_absent() {
        let activation =
            SecurityActivation::new(SecurityScheme::api_key("key", ApiKeyLocation::Query), None);
        let result = apply_securities(&base(), [&activation]);
        assert_eq!(result.query_param("key"), None);
    }

    #[test]
    fn test_api_key_without_name_is_absent() {
        let activation = SecurityActivation::api_key("", ApiKeyLocation::Header, "abc");
        let result = apply_securities(&base(), [&activation]);
        assert_eq!(result.headers, base().headers);
        assert!(result.query.is_empty());
    }

    #[test]
    fn test_mismatched_value_degrades_to_absent() {
        let activations = vec![
            SecurityActivation::oauth2("tok"),
            // basic scheme carrying an oauth2-shaped value
            SecurityActivation::new(
                SecurityScheme::Basic,
                Some(SecurityValue::OAuth2(TokenCredentials::new("x"))),
            ),
        ];
        let result = apply_securities(&base(), &activations);
        assert_eq!(result.header(AUTHORIZATION), None);
        assert_eq!(result.header("Accept"), base().header("Accept"));
    }

    #[test]
    fn test_oauth2_without_any_token_is_absent() {
        let activation = SecurityActivation::new(SecurityScheme::OAuth2, None);
        let result = apply_securities(&base(), [&activation]);
        assert_eq!(result.header(AUTHORIZATION), None);
    }

    #[test]
    fn test_basic_without_username_is_absent() {
        let activation = SecurityActivation::new(
            SecurityScheme::Basic,
            Some(SecurityValue::Basic(BasicCredentials::default())),
        );
        let result = apply_securities(&base(), [&activation]);
        assert_eq!(result.header(AUTHORIZATION), None);
    }
}

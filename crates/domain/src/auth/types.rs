//! Security scheme and credential types

use serde::{Deserialize, Serialize};

/// Authentication mechanism declared by an API description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SecurityScheme {
    /// API key sent as a header or query parameter
    #[serde(rename = "apiKey")]
    ApiKey {
        /// Header or query parameter name
        #[serde(default)]
        name: String,
        /// Where to add the key
        #[serde(rename = "in", default)]
        location: ApiKeyLocation,
    },
    /// HTTP basic authentication
    #[serde(rename = "basic")]
    Basic,
    /// `OAuth2` access token
    #[serde(rename = "oauth2")]
    OAuth2,
    /// Any scheme this crate does not apply
    #[serde(other)]
    Other,
}

impl SecurityScheme {
    /// Creates an API key scheme.
    #[must_use]
    pub fn api_key(name: impl Into<String>, location: ApiKeyLocation) -> Self {
        Self::ApiKey {
            name: name.into(),
            location,
        }
    }

    /// Short name of the scheme type, safe to log.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ApiKey { .. } => "apiKey",
            Self::Basic => "basic",
            Self::OAuth2 => "oauth2",
            Self::Other => "other",
        }
    }
}

/// Location for API key authentication.
///
/// Anything other than `query` is treated as a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApiKeyLocation {
    /// Add to query parameters
    Query,
    /// Add to request headers
    #[default]
    #[serde(other)]
    Header,
}

/// Username/password pair, or a header the caller already formatted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BasicCredentials {
    /// Username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Complete `Authorization` value, used verbatim when present
    #[serde(
        rename = "header",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub pre_encoded_header: Option<String>,
}

/// Access token with an optional token type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenCredentials {
    /// The access token string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// Token type, "Bearer" when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

impl TokenCredentials {
    /// Creates credentials carrying only an access token.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            token_type: None,
        }
    }

    /// Sets the token type.
    #[must_use]
    pub fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = Some(token_type.into());
        self
    }
}

/// Credential value bound to a scheme.
///
/// The valid arm depends on the scheme type. A mismatched arm is not
/// rejected; it is treated as a missing credential when applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecurityValue {
    /// Raw API key
    ApiKey(String),
    /// Basic credentials
    Basic(BasicCredentials),
    /// `OAuth2` token fields
    OAuth2(TokenCredentials),
}

impl SecurityValue {
    /// Returns the API key if this is the API key arm.
    #[must_use]
    pub fn as_api_key(&self) -> Option<&str> {
        match self {
            Self::ApiKey(key) => Some(key),
            _ => None,
        }
    }

    /// Returns the basic credentials if this is the basic arm.
    #[must_use]
    pub const fn as_basic(&self) -> Option<&BasicCredentials> {
        match self {
            Self::Basic(credentials) => Some(credentials),
            _ => None,
        }
    }

    /// Returns the token fields if this is the `OAuth2` arm.
    #[must_use]
    pub const fn as_oauth2(&self) -> Option<&TokenCredentials> {
        match self {
            Self::OAuth2(token) => Some(token),
            _ => None,
        }
    }
}

/// An active credential binding a scheme to a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityActivation {
    /// The scheme being satisfied
    pub schema: SecurityScheme,
    /// Credential value, shaped after the scheme type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<SecurityValue>,
    /// Token obtained through an `OAuth2` flow; wins over `value`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenCredentials>,
}

impl SecurityActivation {
    /// Creates an activation from a scheme and value.
    #[must_use]
    pub const fn new(schema: SecurityScheme, value: Option<SecurityValue>) -> Self {
        Self {
            schema,
            value,
            token: None,
        }
    }

    /// Creates an API key activation.
    #[must_use]
    pub fn api_key(
        name: impl Into<String>,
        location: ApiKeyLocation,
        key: impl Into<String>,
    ) -> Self {
        Self::new(
            SecurityScheme::api_key(name, location),
            Some(SecurityValue::ApiKey(key.into())),
        )
    }

    /// Creates a basic activation from a username and password.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new(
            SecurityScheme::Basic,
            Some(SecurityValue::Basic(BasicCredentials {
                username: Some(username.into()),
                password: Some(password.into()),
                pre_encoded_header: None,
            })),
        )
    }

    /// Creates a basic activation carrying a ready-made `Authorization` value.
    #[must_use]
    pub fn basic_header(header: impl Into<String>) -> Self {
        Self::new(
            SecurityScheme::Basic,
            Some(SecurityValue::Basic(BasicCredentials {
                pre_encoded_header: Some(header.into()),
                ..BasicCredentials::default()
            })),
        )
    }

    /// Creates an `OAuth2` activation from an access token.
    #[must_use]
    pub fn oauth2(access_token: impl Into<String>) -> Self {
        Self::new(
            SecurityScheme::OAuth2,
            Some(SecurityValue::OAuth2(TokenCredentials::new(access_token))),
        )
    }

    /// Attaches a token obtained from an `OAuth2` flow.
    #[must_use]
    pub fn with_token(mut self, token: TokenCredentials) -> Self {
        self.token = Some(token);
        self
    }
}

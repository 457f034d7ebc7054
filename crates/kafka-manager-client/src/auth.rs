//! Request authentication
//!
//! Kafka Manager accepts one of two credential schemes, chosen once per
//! client: a single access token, or the data-platform key set made of a key,
//! the caller's Okta groups, a supplier code and a user id.

use std::fmt;

use reqwest::{RequestBuilder, header::CONTENT_TYPE};

use crate::constants::header;

/// Credentials attached to every outgoing request
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Public API access, `Access-Token` header
    Token { access_token: String },
    /// Internal data-platform access, four `CAI-Data-Platform-*` headers
    Key {
        key: String,
        okta_groups: String,
        supplier: String,
        user_id: String,
    },
}

impl Credentials {
    pub fn token(access_token: &str) -> Self {
        Credentials::Token {
            access_token: access_token.to_string(),
        }
    }

    pub fn key(key: &str, okta_groups: &str, supplier: &str, user_id: &str) -> Self {
        Credentials::Key {
            key: key.to_string(),
            okta_groups: okta_groups.to_string(),
            supplier: supplier.to_string(),
            user_id: user_id.to_string(),
        }
    }

    /// Apply authentication headers and the JSON content type.
    /// The request body is left untouched.
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(CONTENT_TYPE, header::CONTENT_TYPE_JSON);

        match self {
            Credentials::Token { access_token } => {
                request.header(header::ACCESS_TOKEN, access_token)
            }
            Credentials::Key {
                key,
                okta_groups,
                supplier,
                user_id,
            } => request
                .header(header::DATA_PLATFORM_KEY, key)
                .header(header::DATA_PLATFORM_OKTA_GROUPS, okta_groups)
                .header(header::DATA_PLATFORM_SUPPLIER, supplier)
                .header(header::DATA_PLATFORM_USER_ID, user_id),
        }
    }

    /// Short scheme name used in log lines
    pub fn scheme(&self) -> &'static str {
        match self {
            Credentials::Token { .. } => "token",
            Credentials::Key { .. } => "key",
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Token { .. } => f
                .debug_struct("Token")
                .field("access_token", &"***")
                .finish(),
            Credentials::Key {
                okta_groups,
                supplier,
                user_id,
                ..
            } => f
                .debug_struct("Key")
                .field("key", &"***")
                .field("okta_groups", okta_groups)
                .field("supplier", supplier)
                .field("user_id", user_id)
                .finish(),
        }
    }
}

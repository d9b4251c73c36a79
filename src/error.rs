use std::fmt;

use serde::{Deserialize, Serialize};

use crate::request::null_as_default;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The athlete declined the authorization request (`error=access_denied`).
    #[error("authorization denied by user")]
    AuthorizationDenied,

    /// Strava failed to process the request: any 5xx status, or an error
    /// envelope that names no cause.
    #[error("server error")]
    Server,

    /// The error envelope blames the `Application` resource: the client id
    /// or client secret is wrong.
    #[error("invalid client_id or client_secret")]
    InvalidCredentials,

    /// The error envelope blames the `RequestToken` resource: the code is
    /// unknown, expired or already used.
    #[error("unrecognized authorization code")]
    InvalidCode,

    /// Any other structured error envelope returned by Strava.
    #[error("{0}")]
    Api(ApiError),

    /// Network / transport error from the HTTP client.
    #[error("HTTP request failed: {0}")]
    Http(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// A response body could not be decoded.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("callback URL is not set")]
    CallbackUrlUnset,

    #[error("callback URL is not a valid absolute URL: {0}")]
    InvalidCallbackUrl(#[from] url::ParseError),

    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Strava's error envelope, e.g. for a failed validation with several causes.
///
/// Displays as its own JSON encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// The offending object, e.g. `Application` or `RequestToken`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub field: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
}

impl ErrorDetail {
    pub fn new(
        resource: impl Into<String>,
        field: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            resource: resource.into(),
            field: field.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

impl std::error::Error for ApiError {}

use std::env;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::error::ConfigError;

/// Strava's API root. OAuth endpoints live under `/oauth`.
pub const DEFAULT_BASE_PATH: &str = "https://www.strava.com/api/v3";

pub const CLIENT_ID_VAR: &str = "STRAVA_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "STRAVA_CLIENT_SECRET";
pub const CALLBACK_URL_VAR: &str = "STRAVA_CALLBACK_URL";
pub const BASE_PATH_VAR: &str = "STRAVA_BASE_PATH";

/// Application credentials and endpoints. Read-only once handed to an
/// [`OAuthAuthenticator`](crate::OAuthAuthenticator).
#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    /// Absolute URL Strava redirects to after the athlete decides.
    /// Its path is what the application routes to the callback handler.
    pub callback_url: String,
    pub base_path: String,
}

impl Config {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            callback_url: callback_url.into(),
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }

    /// Point the OAuth endpoints at a different host, e.g. a mock server.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into().trim_end_matches('/').to_string();
        self
    }

    /// Load configuration from `STRAVA_CLIENT_ID`, `STRAVA_CLIENT_SECRET`,
    /// `STRAVA_CALLBACK_URL` and the optional `STRAVA_BASE_PATH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| match lookup(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => {
                warn!("{key} is missing or empty");
                Err(ConfigError::MissingVar(key))
            }
        };

        let mut config = Self::new(
            required(CLIENT_ID_VAR)?,
            required(CLIENT_SECRET_VAR)?,
            required(CALLBACK_URL_VAR)?,
        );
        if let Some(base_path) = lookup(BASE_PATH_VAR).filter(|v| !v.is_empty()) {
            config = config.with_base_path(base_path);
        }

        debug!(
            client_id = %config.client_id,
            secret_fingerprint = %config.secret_fingerprint(),
            callback_url = %config.callback_url,
            base_path = %config.base_path,
            "loaded Strava OAuth configuration"
        );
        Ok(config)
    }

    /// First 8 hex chars of the SHA-256 of the client secret, for comparing
    /// secrets in logs without revealing them.
    pub fn secret_fingerprint(&self) -> String {
        let digest = Sha256::digest(self.client_secret.as_bytes());
        format!("{digest:x}").chars().take(8).collect()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("callback_url", &self.callback_url)
            .field("base_path", &self.base_path)
            .finish()
    }
}

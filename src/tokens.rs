use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::request::null_as_default;

/// Result of a successful code exchange or token refresh.
///
/// Every field is defaulted, so a sparse body still decodes.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Expiry as seconds since the Unix epoch.
    #[serde(default)]
    pub expires_at: Option<u64>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// The athlete who granted access. Not included on token refresh.
    #[serde(default, deserialize_with = "null_as_default")]
    pub athlete: AthleteDetailed,
}

impl AuthorizationResponse {
    pub fn expires_at_time(&self) -> Option<SystemTime> {
        self.expires_at.map(|secs| UNIX_EPOCH + Duration::from_secs(secs))
    }

    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token.is_some()
    }
}

impl std::fmt::Debug for AuthorizationResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationResponse")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .field("expires_at", &self.expires_at)
            .field("expires_in", &self.expires_in)
            .field("athlete", &self.athlete)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteDetailed {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub resource_state: Option<i32>,
    pub username: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub firstname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lastname: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub sex: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub premium: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub summit: bool,
    /// URL of the medium (62x62) profile picture.
    pub profile_medium: Option<String>,
    /// URL of the large (124x124) profile picture.
    pub profile: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub email: Option<String>,
    pub follower_count: Option<u32>,
    pub friend_count: Option<u32>,
    pub measurement_preference: Option<String>,
    pub ftp: Option<u32>,
    pub weight: Option<f64>,
}

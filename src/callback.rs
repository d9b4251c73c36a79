/// Value of the `error` parameter when the athlete clicks "Cancel".
pub const ACCESS_DENIED: &str = "access_denied";

/// Query parameters of the redirect Strava sends back to the callback URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
    pub state: Option<String>,
    /// Comma-separated scopes the athlete actually granted.
    pub scope: Option<String>,
}

impl CallbackParams {
    /// Parse a raw query string, with or without the leading `?`.
    /// Unknown parameters are ignored; the first occurrence of each wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                "code" => &mut params.code,
                "error" => &mut params.error,
                "state" => &mut params.state,
                "scope" => &mut params.scope,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        params
    }

    pub fn from_url(url: &url::Url) -> Self {
        Self::from_query(url.query().unwrap_or(""))
    }

    pub fn is_access_denied(&self) -> bool {
        self.error.as_deref() == Some(ACCESS_DENIED)
    }
}

use serde::de::IgnoredAny;
use url::Url;

use crate::callback::CallbackParams;
use crate::config::Config;
use crate::error::{ConfigError, Error};
use crate::http::HttpClient;
use crate::request::{classify_response, create_form_request, send_request};
use crate::scope::Scope;
use crate::tokens::AuthorizationResponse;

/// OAuth 2.0 authorization flow for [Strava](https://developers.strava.com/docs/authentication/).
///
/// Strava sends client credentials in the form body and reports failures
/// through its own error envelope rather than the RFC 6749 `error` field.
/// Every failure is mapped onto one [`Error`] variant: the four well-known
/// cases (`AuthorizationDenied`, `Server`, `InvalidCredentials`,
/// `InvalidCode`) can be matched directly, anything else arrives as
/// [`Error::Api`] with the full envelope.
///
/// # Example
///
/// ```rust,no_run
/// use strava_oauth::{CallbackParams, Config, OAuthAuthenticator, Scope, generate_state};
///
/// # async fn example() -> Result<(), strava_oauth::Error> {
/// let auth = OAuthAuthenticator::new(Config::new(
///     "1234",
///     "client-secret",
///     "https://example.com/strava/oauth",
/// ));
///
/// // Step 1: Route the callback path and redirect the athlete.
/// let path = auth.callback_path()?;
/// let state = generate_state();
/// let url = auth.authorization_url(&state, Scope::ViewPrivate, false)?;
///
/// // Step 2: In the handler for `path`, exchange the code.
/// let params = CallbackParams::from_query("state=...&code=...");
/// let http = strava_oauth::default_client();
/// let response = auth.handle_callback(http, &params).await?;
/// println!("Authorized athlete {}", response.athlete.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OAuthAuthenticator {
    config: Config,
}

impl OAuthAuthenticator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path component of the configured callback URL, for mounting the
    /// callback handler on the right route.
    ///
    /// The path is returned percent-encoded, as it appears on the wire, and
    /// a URL without a path yields `/`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::CallbackUrlUnset`] when the callback URL is empty, or
    /// [`ConfigError::InvalidCallbackUrl`] when it is not an absolute URL.
    pub fn callback_path(&self) -> Result<String, Error> {
        if self.config.callback_url.is_empty() {
            return Err(ConfigError::CallbackUrlUnset.into());
        }

        let url = Url::parse(&self.config.callback_url).map_err(ConfigError::from)?;
        Ok(url.path().to_string())
    }

    /// Builds the URL the athlete is redirected to for approval.
    ///
    /// Parameters are emitted in a fixed order: `client_id`, `response_type`,
    /// `redirect_uri`, `scope`, then `state` when non-empty and
    /// `approval_prompt=force` when `force_approval` is set. The callback URL
    /// is inserted verbatim. `client_id` and `state` are form-encoded, so a
    /// `state` holding `&`, `%` or spaces appears escaped; values from
    /// [`generate_state`](crate::generate_state) are unchanged.
    ///
    /// # Errors
    ///
    /// The same configuration errors as [`callback_path`](Self::callback_path).
    pub fn authorization_url(
        &self,
        state: &str,
        scope: Scope,
        force_approval: bool,
    ) -> Result<String, Error> {
        self.callback_path()?;

        let mut url = format!(
            "{}/oauth/authorize?client_id={}&response_type=code&redirect_uri={}&scope={}",
            self.config.base_path,
            encode(&self.config.client_id),
            self.config.callback_url,
            scope.as_str(),
        );

        if !state.is_empty() {
            url.push_str("&state=");
            url.push_str(&encode(state));
        }

        if force_approval {
            url.push_str("&approval_prompt=force");
        }

        Ok(url)
    }

    /// Handles the redirect back from Strava.
    ///
    /// A denial returns [`Error::AuthorizationDenied`] without contacting
    /// Strava. Otherwise the `code` is exchanged through
    /// [`authorize`](Self::authorize).
    pub async fn handle_callback(
        &self,
        http_client: &(impl HttpClient + ?Sized),
        params: &CallbackParams,
    ) -> Result<AuthorizationResponse, Error> {
        if params.is_access_denied() {
            return Err(Error::AuthorizationDenied);
        }

        let code = params.code.as_deref().unwrap_or_default();
        self.authorize(http_client, code).await
    }

    /// Exchanges an authorization code for an access token and the
    /// athlete's profile.
    pub async fn authorize(
        &self,
        http_client: &(impl HttpClient + ?Sized),
        code: &str,
    ) -> Result<AuthorizationResponse, Error> {
        let request = create_form_request(
            &self.token_endpoint(),
            &[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
            ],
        );
        send_request(http_client, request).await
    }

    /// Trades a refresh token for a new access token. The response carries
    /// no athlete, so `athlete` is left at its default.
    pub async fn refresh_access_token(
        &self,
        http_client: &(impl HttpClient + ?Sized),
        refresh_token: &str,
    ) -> Result<AuthorizationResponse, Error> {
        let request = create_form_request(
            &self.token_endpoint(),
            &[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
            ],
        );
        send_request(http_client, request).await
    }

    /// Revokes the application's access for the athlete owning `access_token`.
    pub async fn deauthorize(
        &self,
        http_client: &(impl HttpClient + ?Sized),
        access_token: &str,
    ) -> Result<(), Error> {
        let request = create_form_request(
            &format!("{}/oauth/deauthorize", self.config.base_path),
            &[("access_token", access_token)],
        );
        let response = http_client.send(request).await?;

        if (200..300).contains(&response.status) {
            return Ok(());
        }
        classify_response::<IgnoredAny>(&response).map(|_| ())
    }

    fn token_endpoint(&self) -> String {
        format!("{}/oauth/token", self.config.base_path)
    }
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

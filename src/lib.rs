//! OAuth 2.0 authorization for the Strava API.
//!
//! [`OAuthAuthenticator`] builds the authorization URL, resolves the local
//! callback route and turns the redirect back from Strava into either an
//! [`AuthorizationResponse`] or a classified [`Error`].

mod authenticator;
mod callback;
mod config;
mod error;
mod http;
mod request;
mod scope;
mod state;
mod tokens;

// Core
pub use authenticator::OAuthAuthenticator;
pub use callback::{ACCESS_DENIED, CallbackParams};
pub use config::{Config, DEFAULT_BASE_PATH};
pub use error::{ApiError, ConfigError, Error, ErrorDetail};
pub use http::{HttpClient, HttpRequest, HttpResponse, Method};
pub use scope::Scope;
pub use tokens::{AthleteDetailed, AuthorizationResponse};

// Utilities
pub use request::{classify_api_error, classify_response, create_form_request};
pub use state::generate_state;

// Default HTTP client (behind feature flag)
#[cfg(feature = "reqwest-client")]
pub use http::{ReqwestClient, default_client};

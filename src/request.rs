use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::Error;
use crate::error::ApiError;
use crate::http::{HttpClient, HttpRequest, HttpResponse, Method};

const USER_AGENT: &str = concat!("strava-oauth/", env!("CARGO_PKG_VERSION"));

/// Build a form-encoded POST to one of Strava's OAuth endpoints.
/// Sets Content-Type, Accept: application/json and the crate User-Agent.
pub fn create_form_request(endpoint: &str, params: &[(&str, &str)]) -> HttpRequest {
    let encoded_body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();

    HttpRequest {
        method: Method::Post,
        url: endpoint.to_string(),
        headers: vec![
            (
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            ),
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ],
        body: encoded_body.into_bytes(),
    }
}

/// Send a request and decode a 2xx body as `T`. Transport failures are
/// returned unchanged as [`Error::Http`]; everything else goes through
/// [`classify_response`].
pub async fn send_request<T: DeserializeOwned>(
    client: &(impl HttpClient + ?Sized),
    request: HttpRequest,
) -> Result<T, Error> {
    let response = client.send(request).await?;
    classify_response(&response)
}

/// Interpret a Strava OAuth response.
/// - 5xx -> Err(Error::Server), body ignored
/// - 2xx -> body decoded as `T`, or Err(Error::Parse)
/// - other -> body decoded as [`ApiError`] and passed to [`classify_api_error`],
///   or Err(Error::Parse) when it is not JSON
pub fn classify_response<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, Error> {
    match response.status {
        500..=599 => Err(Error::Server),
        200..=299 => Ok(serde_json::from_slice(&response.body)?),
        _ => {
            let envelope: ApiError = serde_json::from_slice(&response.body)?;
            Err(classify_api_error(envelope))
        }
    }
}

/// Map an error envelope onto a well-known failure. Only the first detail's
/// resource is consulted; unrecognized envelopes are kept whole.
pub fn classify_api_error(envelope: ApiError) -> Error {
    // An envelope with no details is reported as a server error.
    let Some(first) = envelope.errors.first() else {
        return Error::Server;
    };

    match first.resource.as_str() {
        "Application" => Error::InvalidCredentials,
        "RequestToken" => Error::InvalidCode,
        _ => Error::Api(envelope),
    }
}

/// Decode a present `null` the same as a missing field. Strava sends both.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

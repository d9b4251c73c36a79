use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mock Strava built on `wiremock`. Serves the `/oauth/token` and
/// `/oauth/deauthorize` endpoints with configurable behavior.
pub struct MockStrava {
    server: MockServer,
}

impl MockStrava {
    /// Start a new mock server on a random available port.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the mock server (e.g. "http://127.0.0.1:PORT"), usable
    /// as `Config::base_path`.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Mount a handler that answers `POST /oauth/token` with the given
    /// status and raw body.
    pub async fn mock_token(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a handler that answers `POST /oauth/token` with a 400 error
    /// envelope naming `resource`.
    pub async fn mock_token_error(&self, resource: &str) {
        let body = serde_json::json!({
            "message": "Bad Request",
            "errors": [{ "resource": resource, "field": "", "code": "invalid" }],
        });
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_deauthorize(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/oauth/deauthorize"))
            .respond_with(ResponseTemplate::new(status).set_body_string("{}"))
            .mount(&self.server)
            .await;
    }

    /// Mount a handler that answers `GET <route>` with a JSON body.
    pub async fn mock_get(&self, route: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .expect("request recording enabled")
            .len()
    }

    /// Assert that the last request to the mock server contained
    /// the expected form-urlencoded parameters in its body.
    pub async fn verify_form(&self, expected_params: &[(&str, &str)]) {
        let requests = self
            .server
            .received_requests()
            .await
            .expect("request recording enabled");
        let last = requests.last().expect("expected at least one request");
        let body_str = String::from_utf8(last.body.clone()).expect("body should be UTF-8");
        let parsed: Vec<(String, String)> = url::form_urlencoded::parse(body_str.as_bytes())
            .into_owned()
            .collect();

        for (key, value) in expected_params {
            let found = parsed.iter().any(|(k, v)| k == key && v == value);
            assert!(
                found,
                "expected form param {}={} in request body, got: {}",
                key, value, body_str
            );
        }
    }
}

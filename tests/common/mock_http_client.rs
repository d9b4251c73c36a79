use std::sync::Mutex;

use strava_oauth::{HttpClient, HttpRequest, HttpResponse};

/// An `HttpClient` implementation that records requests and returns
/// pre-configured responses, or fails every request when built with
/// [`MockHttpClient::unreachable`].
pub struct MockHttpClient {
    /// Pre-configured responses to return in order.
    responses: Mutex<Vec<HttpResponse>>,
    /// Recorded requests for assertion.
    recorded: Mutex<Vec<HttpRequest>>,
    unreachable: bool,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            recorded: Mutex::new(Vec::new()),
            unreachable: false,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::new()
        }
    }

    /// Add a response to the queue. Responses are returned in FIFO order.
    pub fn enqueue(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push(HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        });
    }

    /// Drain and return all recorded requests.
    pub fn take_requests(&self) -> Vec<HttpRequest> {
        self.recorded.lock().unwrap().drain(..).collect()
    }
}

impl HttpClient for MockHttpClient {
    async fn send(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse, Box<dyn std::error::Error + Send + Sync>> {
        self.recorded.lock().unwrap().push(request);
        if self.unreachable {
            return Err("connection refused".into());
        }
        let response = self.responses.lock().unwrap().remove(0);
        Ok(response)
    }
}

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A minimal HTTP request representation.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// A minimal HTTP response representation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Trait for sending HTTP requests. Implementations must be `Send + Sync`
/// so they can be shared across async tasks.
///
/// An `Err` must only be returned for failures below HTTP (DNS, connect,
/// TLS). Any response that arrives is returned as-is, whatever its status.
pub trait HttpClient: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, Box<dyn std::error::Error + Send + Sync>>> + Send;
}

#[cfg(feature = "reqwest-client")]
mod reqwest_impl {
    use std::sync::OnceLock;

    use super::{HttpClient, HttpRequest, HttpResponse, Method};

    pub struct ReqwestClient {
        inner: reqwest::Client,
    }

    impl ReqwestClient {
        pub fn new() -> Self {
            Self {
                inner: reqwest::Client::new(),
            }
        }

        /// Wrap a pre-configured client (timeouts, proxies).
        pub fn from_client(inner: reqwest::Client) -> Self {
            Self { inner }
        }
    }

    impl Default for ReqwestClient {
        fn default() -> Self {
            Self::new()
        }
    }

    impl HttpClient for ReqwestClient {
        async fn send(
            &self,
            req: HttpRequest,
        ) -> Result<HttpResponse, Box<dyn std::error::Error + Send + Sync>> {
            let mut builder = match req.method {
                Method::Get => self.inner.get(&req.url),
                Method::Post => self.inner.post(&req.url),
            };

            for (name, value) in &req.headers {
                builder = builder.header(name, value);
            }

            if !req.body.is_empty() {
                builder = builder.body(req.body);
            }

            let response = builder.send().await.inspect_err(|e| {
                tracing::debug!(
                    method = req.method.as_str(),
                    url = %req.url,
                    error = %e,
                    "request failed"
                );
            })?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();

            tracing::debug!(
                method = req.method.as_str(),
                url = %req.url,
                status,
                len = body.len(),
                "received response"
            );

            Ok(HttpResponse { status, body })
        }
    }

    static DEFAULT_CLIENT: OnceLock<ReqwestClient> = OnceLock::new();

    /// A process-wide [`ReqwestClient`], created on first use.
    pub fn default_client() -> &'static ReqwestClient {
        DEFAULT_CLIENT.get_or_init(ReqwestClient::new)
    }
}

#[cfg(feature = "reqwest-client")]
pub use reqwest_impl::{ReqwestClient, default_client};

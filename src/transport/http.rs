//! Blocking `reqwest` transport used when no other transport is configured.

use super::{HttpRequest, HttpResponse, Transport, TransportError};
use std::time::Duration;

/// Default transport over a blocking `reqwest` client.
///
/// Must not be constructed from inside an async runtime; the blocking client
/// spins up its own.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::builder().build()
    }

    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()?;

        let status = response.status();
        let headers = response.headers().clone();
        Ok(HttpResponse {
            status,
            headers,
            body: Box::new(response),
        })
    }
}

pub struct HttpTransportBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpTransportBuilder {
    pub fn new() -> Self {
        Self {
            timeout: None,
            user_agent: None,
        }
    }

    /// Total per-request timeout. Unset means the transport never gives up on its own.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<HttpTransport, TransportError> {
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| concat!("watson-tts/", env!("CARGO_PKG_VERSION")).to_string());
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(HttpTransport { client })
    }
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

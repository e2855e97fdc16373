//! Pluggable network layer.
//!
//! [`TtsClient`](crate::TtsClient) never talks to the network directly: it hands a fully
//! built [`HttpRequest`] to a [`Transport`] and inspects the [`HttpResponse`] it gets back.
//! [`HttpTransport`] is the default, backed by a blocking `reqwest` client. Any
//! `Fn(HttpRequest) -> Result<HttpResponse, TransportError>` closure is a transport too,
//! which is how tests substitute the network.

mod http;

pub use http::{HttpTransport, HttpTransportBuilder};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use std::fmt;
use std::io::Read;
use url::Url;

/// A request ready to be put on the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Response head plus an unread body.
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Box<dyn Read + Send>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Read + Send + 'static) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Box::new(body),
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Status line as the server would print it, e.g. "503 Service Unavailable".
    pub fn status_line(&self) -> String {
        self.status.to_string()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Sends one request and returns the response head with a readable body.
///
/// Implementations must not retry; a failure to obtain a response is reported as
/// a [`TransportError`]. Non-2xx statuses are *not* transport failures.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync,
{
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self(request)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Transport error: {0}")]
    Other(String),
}

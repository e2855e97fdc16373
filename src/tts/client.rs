//! TTS (Text-to-Speech) client.

use super::types::{AudioStream, Auth, SynthesisRequest};
use crate::config;
use crate::transport::{HttpRequest, HttpTransport, Transport, TransportError};
use crate::{Error, ErrorContext, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::OnceCell;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;
use url::Url;

/// Fixed synthesis URL used unless the builder overrides it.
pub const DEFAULT_ENDPOINT: &str =
    "https://stream.watsonplatform.net/text-to-speech/api/v1/synthesize";

const WARNINGS_HEADER: &str = "warnings";

#[derive(Serialize)]
struct SynthesizeBody<'a> {
    text: &'a str,
}

/// Credentials and transport override, always read and replaced together.
struct Shared {
    auth: Auth,
    transport: Option<Arc<dyn Transport>>,
}

/// Client for text-to-speech synthesis.
///
/// Safe to share between threads. Each [`synthesize`](Self::synthesize) call takes one
/// snapshot of the credentials and transport under a read lock and then runs without
/// holding it, so [`set_auth`](Self::set_auth) never tears a pair under an in-flight call.
pub struct TtsClient {
    endpoint: Url,
    shared: RwLock<Shared>,
    default_transport: OnceCell<Arc<dyn Transport>>,
}

impl TtsClient {
    pub fn builder() -> TtsClientBuilder {
        TtsClientBuilder::new()
    }

    /// Build a client from `WATSON_TEXT_TO_SPEECH_USERNAME` and `WATSON_TEXT_TO_SPEECH_PASSWORD`.
    pub fn from_env() -> Result<Self> {
        Self::builder().auth(config::auth_from_env()?).build()
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied key lookup.
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::builder().auth(config::auth_from_lookup(lookup)?).build()
    }

    /// Replace both credentials at once. `None` is rejected and leaves the current pair intact.
    pub fn set_auth(&self, auth: impl Into<Option<Auth>>) -> Result<()> {
        let auth = auth.into().ok_or_else(|| {
            Error::invalid_argument_with_context(
                "credentials must be provided",
                ErrorContext::new()
                    .with_field_path("auth")
                    .with_source("set_auth"),
            )
        })?;

        let mut shared = self.shared.write().unwrap_or_else(PoisonError::into_inner);
        shared.auth = auth;
        Ok(())
    }

    /// Swap the network layer; `None` restores the default HTTP transport.
    pub fn set_transport(&self, transport: Option<Arc<dyn Transport>>) {
        let mut shared = self.shared.write().unwrap_or_else(PoisonError::into_inner);
        shared.transport = transport;
    }

    /// Copy of the current credentials.
    pub fn auth(&self) -> Auth {
        self.shared
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .auth
            .clone()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Synthesize `request.text` and return the response body as a stream.
    ///
    /// The caller owns the returned stream and releases the connection by dropping it.
    pub fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioStream> {
        let (auth, transport) = self.snapshot()?;
        let http_request = self.build_request(&auth, request)?;

        debug!(
            endpoint = %self.endpoint,
            voice = ?request.voice.as_ref().map(|v| v.as_str()),
            accept = ?request.output_content_type.as_ref().map(|c| c.as_str()),
            "dispatching synthesis request"
        );

        let transport = match transport {
            Some(transport) => transport,
            None => self.default_transport()?,
        };
        let response = transport.send(http_request)?;

        debug!(
            status = %response.status,
            content_type = ?response.content_type(),
            "synthesis response received"
        );

        if let Some(warnings) = response.headers.get(WARNINGS_HEADER) {
            let warnings = String::from_utf8_lossy(warnings.as_bytes()).into_owned();
            if !warnings.is_empty() {
                return Err(Error::ServerWarning(warnings));
            }
        }

        let status = response.status.as_u16();
        if !(200..=299).contains(&status) {
            return Err(Error::HttpStatus {
                status,
                status_line: response.status_line(),
            });
        }

        let content_type = response.content_type().map(str::to_string);
        Ok(AudioStream::new(response.status, content_type, response.body))
    }

    fn snapshot(&self) -> Result<(Auth, Option<Arc<dyn Transport>>)> {
        let (auth, transport) = {
            let shared = self.shared.read().unwrap_or_else(PoisonError::into_inner);
            (shared.auth.clone(), shared.transport.clone())
        };

        let mut missing = Vec::new();
        if auth.username.is_empty() {
            missing.push("expecting a username");
        }
        if auth.password.is_empty() {
            missing.push("expecting a password");
        }
        if !missing.is_empty() {
            return Err(Error::Credentials { missing });
        }

        Ok((auth, transport))
    }

    fn default_transport(&self) -> Result<Arc<dyn Transport>> {
        let transport = self.default_transport.get_or_try_init(|| {
            HttpTransport::new().map(|t| Arc::new(t) as Arc<dyn Transport>)
        })?;
        Ok(Arc::clone(transport))
    }

    fn build_request(&self, auth: &Auth, request: &SynthesisRequest) -> Result<HttpRequest> {
        // Sorted key order, voice and accept only when set.
        let mut params: Vec<(&str, &str)> = Vec::with_capacity(2);
        if let Some(ct) = request.output_content_type.as_ref().filter(|c| !c.is_empty()) {
            params.push(("accept", ct.as_str()));
        }
        if let Some(voice) = request.voice.as_ref().filter(|v| !v.is_empty()) {
            params.push(("voice", voice.as_str()));
        }

        let mut url = self.endpoint.clone();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        let body = serde_json::to_vec(&SynthesizeBody {
            text: &request.text,
        })?;

        let credentials = STANDARD.encode(format!("{}:{}", auth.username, auth.password));
        let mut authorization = HeaderValue::from_str(&format!("Basic {}", credentials))
            .map_err(|e| TransportError::InvalidRequest(format!("authorization header: {}", e)))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(HttpRequest {
            method: Method::POST,
            url,
            headers,
            body,
        })
    }
}

impl fmt::Debug for TtsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtsClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

pub struct TtsClientBuilder {
    auth: Auth,
    endpoint: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl TtsClientBuilder {
    pub fn new() -> Self {
        Self {
            auth: Auth::default(),
            endpoint: None,
            transport: None,
        }
    }

    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    pub fn credentials(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth(Auth::new(username, password))
    }

    /// Override the synthesis URL (mainly for tests and proxies).
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<TtsClient> {
        let raw = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        let endpoint_ctx = || {
            ErrorContext::new()
                .with_field_path("endpoint")
                .with_source("tts")
        };
        let endpoint = Url::parse(raw).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid endpoint URL {:?}", raw),
                endpoint_ctx().with_details(e.to_string()),
            )
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                format!("Endpoint URL {:?} is not a base URL", raw),
                endpoint_ctx(),
            ));
        }

        Ok(TtsClient {
            endpoint,
            shared: RwLock::new(Shared {
                auth: self.auth,
                transport: self.transport,
            }),
            default_transport: OnceCell::new(),
        })
    }
}

impl Default for TtsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! # watson-tts
//!
//! Blocking client for the Watson text-to-speech `synthesize` endpoint.
//!
//! One call to [`TtsClient::synthesize`] issues one `POST` carrying the text as a
//! JSON body, with the voice and the desired audio encoding as query parameters,
//! authenticated with HTTP Basic credentials. On success the live response body is
//! handed back as an [`AudioStream`] for the caller to drain.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use watson_tts::{ContentType, SynthesisRequest, TtsClient, Voice};
//!
//! fn main() -> watson_tts::Result<()> {
//!     // Reads WATSON_TEXT_TO_SPEECH_USERNAME / WATSON_TEXT_TO_SPEECH_PASSWORD.
//!     let client = TtsClient::from_env()?;
//!
//!     let request = SynthesisRequest::new("This is not a drill. Good evening!")
//!         .voice(Voice::BRAZILIAN_FEMALE)
//!         .accept(ContentType::WAV);
//!
//!     let mut audio = client.synthesize(&request)?;
//!     let mut out = File::create("output.wav")?;
//!     std::io::copy(&mut audio, &mut out)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tts`] | Client, request and catalogue types |
//! | [`transport`] | Pluggable network layer and the default blocking HTTP transport |
//! | [`config`] | Environment-based credential lookup |
//! | [`error`] | Error taxonomy |

pub mod config;
pub mod error;
pub mod transport;
pub mod tts;

pub use error::{Error, ErrorContext};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport, TransportError};
pub use tts::{
    AudioStream, Auth, ContentType, SynthesisRequest, TtsClient, TtsClientBuilder, Voice,
    DEFAULT_ENDPOINT,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

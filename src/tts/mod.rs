//! TTS module: turns text into an audio stream through the remote `synthesize` endpoint.

mod client;
mod types;

pub use client::{TtsClient, TtsClientBuilder, DEFAULT_ENDPOINT};
pub use types::{AudioStream, Auth, ContentType, SynthesisRequest, Voice};

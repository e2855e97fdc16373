//! TTS (Text-to-Speech) types.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Read};

/// Username/password pair for HTTP Basic authentication.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth {
    pub username: String,
    pub password: String,
}

impl Auth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Server-side speaker identity (locale + speaker name).
///
/// The associated constants cover the known catalogue; [`Voice::new`] passes any
/// other identifier through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Voice(Cow<'static, str>);

impl Voice {
    pub const GERMAN_FEMALE: Voice = Voice::from_static("de-DE_BirgitVoice");
    pub const GERMAN_MALE: Voice = Voice::from_static("de-DE_DieterVoice");
    pub const BRITISH_FEMALE: Voice = Voice::from_static("en-GB_KateVoice");
    pub const AMERICAN_ALLISON_FEMALE: Voice = Voice::from_static("en-US_AllisonVoice");
    pub const AMERICAN_LISA_FEMALE: Voice = Voice::from_static("en-US_LisaVoice");
    pub const AMERICAN_MICHAEL_MALE: Voice = Voice::from_static("en-US_MichaelVoice");
    pub const SPANISH_CASTILIAN_MALE: Voice = Voice::from_static("es-ES_EnriqueVoice");
    pub const SPANISH_CASTILIAN_FEMALE: Voice = Voice::from_static("es-ES_LauraVoice");
    pub const SPANISH_LATIN_AMERICAN_FEMALE: Voice = Voice::from_static("es-LA_SofiaVoice");
    pub const SPANISH_NORTH_AMERICAN_FEMALE: Voice = Voice::from_static("es-US_SofiaVoice");
    pub const FRENCH_FEMALE: Voice = Voice::from_static("fr-FR_ReneeVoice");
    pub const ITALIAN_FEMALE: Voice = Voice::from_static("it-IT_FrancescaVoice");
    pub const JAPANESE_FEMALE: Voice = Voice::from_static("ja-JP_EmiVoice");
    pub const BRAZILIAN_FEMALE: Voice = Voice::from_static("pt-BR_IsabelaVoice");

    pub const ALL: [Voice; 14] = [
        Self::GERMAN_FEMALE,
        Self::GERMAN_MALE,
        Self::BRITISH_FEMALE,
        Self::AMERICAN_ALLISON_FEMALE,
        Self::AMERICAN_LISA_FEMALE,
        Self::AMERICAN_MICHAEL_MALE,
        Self::SPANISH_CASTILIAN_MALE,
        Self::SPANISH_CASTILIAN_FEMALE,
        Self::SPANISH_LATIN_AMERICAN_FEMALE,
        Self::SPANISH_NORTH_AMERICAN_FEMALE,
        Self::FRENCH_FEMALE,
        Self::ITALIAN_FEMALE,
        Self::JAPANESE_FEMALE,
        Self::BRAZILIAN_FEMALE,
    ];

    pub fn new(id: impl Into<String>) -> Self {
        Voice(Cow::Owned(id.into()))
    }

    pub const fn from_static(id: &'static str) -> Self {
        Voice(Cow::Borrowed(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Voice {
    fn from(id: &'static str) -> Self {
        Voice::from_static(id)
    }
}

impl From<String> for Voice {
    fn from(id: String) -> Self {
        Voice::new(id)
    }
}

/// Requested audio encoding of the response, as a MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentType(Cow<'static, str>);

impl ContentType {
    pub const WAV: ContentType = ContentType::from_static("audio/wav");
    pub const OGG: ContentType = ContentType::from_static("audio/ogg");
    pub const OGG_OPUS: ContentType = ContentType::from_static("audio/ogg;codecs=opus");
    pub const OGG_VORBIS: ContentType = ContentType::from_static("audio/ogg;codecs=vorbis");
    /// Carries the literal placeholder `rate=rate`; use [`ContentType::mulaw`] for a real rate.
    pub const MULAW: ContentType = ContentType::from_static("audio/mulaw;rate=rate");
    pub const BASIC: ContentType = ContentType::from_static("audio/basic");
    pub const FLAC: ContentType = ContentType::from_static("audio/flac");
    pub const WEBM_OPUS: ContentType = ContentType::from_static("audio/webm;codecs=opus");
    pub const WEBM_VORBIS: ContentType = ContentType::from_static("audio/webm;codecs=vorbis");
    /// Sent exactly as catalogued, placeholder rate included. See [`ContentType::l16`].
    pub const L16: ContentType = ContentType::from_static("audio/116;rate=rate");

    pub const ALL: [ContentType; 10] = [
        Self::WAV,
        Self::OGG,
        Self::OGG_OPUS,
        Self::OGG_VORBIS,
        Self::MULAW,
        Self::BASIC,
        Self::FLAC,
        Self::WEBM_OPUS,
        Self::WEBM_VORBIS,
        Self::L16,
    ];

    pub fn new(mime: impl Into<String>) -> Self {
        ContentType(Cow::Owned(mime.into()))
    }

    pub const fn from_static(mime: &'static str) -> Self {
        ContentType(Cow::Borrowed(mime))
    }

    /// `audio/mulaw` at the given sampling rate in Hz.
    pub fn mulaw(rate: u32) -> Self {
        Self::new(format!("audio/mulaw;rate={}", rate))
    }

    /// Linear 16-bit PCM (`audio/l16`) at the given sampling rate in Hz.
    pub fn l16(rate: u32) -> Self {
        Self::new(format!("audio/l16;rate={}", rate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ContentType {
    fn from(mime: &'static str) -> Self {
        ContentType::from_static(mime)
    }
}

impl From<String> for ContentType {
    fn from(mime: String) -> Self {
        ContentType::new(mime)
    }
}

/// One synthesis call. Unset (or empty) voice and content type are left to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice: Option<Voice>,
    pub output_content_type: Option<ContentType>,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn voice(mut self, voice: impl Into<Voice>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    pub fn accept(mut self, content_type: impl Into<ContentType>) -> Self {
        self.output_content_type = Some(content_type.into());
        self
    }
}

/// Live response body of a successful synthesis call.
///
/// Reading pulls bytes from the network on demand. Dropping the stream releases
/// the underlying connection, whether or not it was drained.
pub struct AudioStream {
    status: StatusCode,
    content_type: Option<String>,
    body: Box<dyn Read + Send>,
}

impl AudioStream {
    pub(crate) fn new(
        status: StatusCode,
        content_type: Option<String>,
        body: Box<dyn Read + Send>,
    ) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// `Content-Type` reported by the server, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Drain the remaining body into memory.
    pub fn into_bytes(mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.body.read_to_end(&mut buf)?;
        Ok(buf)
    }

    pub fn into_inner(self) -> Box<dyn Read + Send> {
        self.body
    }
}

impl Read for AudioStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.body.read(buf)
    }
}

impl fmt::Debug for AudioStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioStream")
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_values_are_verbatim() {
        assert_eq!(Voice::BRAZILIAN_FEMALE.as_str(), "pt-BR_IsabelaVoice");
        assert_eq!(Voice::AMERICAN_MICHAEL_MALE.to_string(), "en-US_MichaelVoice");
        assert_eq!(ContentType::OGG_OPUS.as_str(), "audio/ogg;codecs=opus");
        assert_eq!(ContentType::MULAW.as_str(), "audio/mulaw;rate=rate");
        assert_eq!(ContentType::L16.as_str(), "audio/116;rate=rate");
    }

    #[test]
    fn catalogue_has_no_duplicates() {
        let all_voices = Voice::ALL;
        let voices: std::collections::HashSet<_> = all_voices.iter().collect();
        assert_eq!(voices.len(), all_voices.len());
        let all_types = ContentType::ALL;
        let types: std::collections::HashSet<_> = all_types.iter().collect();
        assert_eq!(types.len(), all_types.len());
    }

    #[test]
    fn rate_parameterized_types() {
        assert_eq!(ContentType::mulaw(8000).as_str(), "audio/mulaw;rate=8000");
        assert_eq!(ContentType::l16(22050).as_str(), "audio/l16;rate=22050");
    }

    #[test]
    fn pass_through_and_equality() {
        assert_eq!(Voice::new("pt-BR_IsabelaVoice"), Voice::BRAZILIAN_FEMALE);
        assert_eq!(Voice::from("brazilian-female-1").as_str(), "brazilian-female-1");
        assert!(Voice::new("").is_empty());
    }

    #[test]
    fn request_builder() {
        let req = SynthesisRequest::new("hello")
            .voice(Voice::GERMAN_MALE)
            .accept(ContentType::FLAC);
        assert_eq!(req.text, "hello");
        assert_eq!(req.voice, Some(Voice::GERMAN_MALE));
        assert_eq!(req.output_content_type, Some(ContentType::FLAC));
        assert_eq!(SynthesisRequest::new("x").voice, None);
    }

    #[test]
    fn auth_serde_and_debug() {
        let auth: Auth =
            serde_json::from_str(r#"{"username":"u","password":"secret"}"#).unwrap();
        assert_eq!(auth, Auth::new("u", "secret"));
        let dbg = format!("{:?}", auth);
        assert!(dbg.contains("\"u\""));
        assert!(!dbg.contains("secret"));
    }

    #[test]
    fn voice_serializes_as_plain_string() {
        let json = serde_json::to_string(&Voice::FRENCH_FEMALE).unwrap();
        assert_eq!(json, "\"fr-FR_ReneeVoice\"");
    }
}

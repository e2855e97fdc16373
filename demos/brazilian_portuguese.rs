//! Synthesize a short greeting with the Brazilian Portuguese voice and save it as WAV.
//!
//! Requires WATSON_TEXT_TO_SPEECH_USERNAME and WATSON_TEXT_TO_SPEECH_PASSWORD.

use std::fs::File;
use tracing_subscriber::EnvFilter;
use watson_tts::{ContentType, SynthesisRequest, TtsClient, Voice};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = TtsClient::from_env()?;

    let request = SynthesisRequest::new("This is not a drill. Good evening!")
        .voice(Voice::BRAZILIAN_FEMALE)
        .accept(ContentType::WAV);
    let mut audio = client.synthesize(&request)?;

    let mut out = File::create("brazilian-output-audio.wav")?;
    std::io::copy(&mut audio, &mut out)?;
    Ok(())
}

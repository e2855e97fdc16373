//! Speak the current UTC time with an American male voice and save it as OGG.
//!
//! Requires WATSON_TEXT_TO_SPEECH_USERNAME and WATSON_TEXT_TO_SPEECH_PASSWORD.
//! Run with: RUST_LOG=watson_tts=debug cargo run --example american_english

use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;
use watson_tts::{ContentType, SynthesisRequest, TtsClient, Voice};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = TtsClient::from_env()?;

    let secs = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() % 86_400;
    let text = format!(
        "The time in 24hr clock is {}:{}:{}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    );

    let mut audio = client.synthesize(
        &SynthesisRequest::new(text)
            .voice(Voice::AMERICAN_MICHAEL_MALE)
            .accept(ContentType::OGG),
    )?;

    let mut out = File::create("english-time-audio.ogg")?;
    let written = std::io::copy(&mut audio, &mut out)?;
    println!("wrote {} bytes to english-time-audio.ogg", written);
    Ok(())
}

//! End-to-end tests through the default HTTP transport against a local mock server.

use mockito::{Matcher, Server};
use std::io::Read;
use std::time::Duration;
use watson_tts::{
    ContentType, Error, HttpTransport, SynthesisRequest, Transport, TtsClient, Voice,
};

const SYNTH_PATH: &str = "/text-to-speech/api/v1/synthesize";

// "username:password"
const BASIC_AUTH: &str = "Basic dXNlcm5hbWU6cGFzc3dvcmQ=";

fn client_for(server: &Server) -> TtsClient {
    TtsClient::builder()
        .credentials("username", "password")
        .endpoint(format!("{}{}", server.url(), SYNTH_PATH))
        .build()
        .expect("client")
}

#[test]
fn test_synthesize_sends_query_auth_and_json_body() {
    let mut server = Server::new();
    let audio = b"RIFF\x24\x00\x00\x00WAVEfmt fake pcm".to_vec();
    let mock = server
        .mock("POST", SYNTH_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("voice".into(), "pt-BR_IsabelaVoice".into()),
            Matcher::UrlEncoded("accept".into(), "audio/wav".into()),
        ]))
        .match_header("authorization", BASIC_AUTH)
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(
            r#"{"text":"This is not a drill. Good evening!"}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "audio/wav")
        .with_body(&audio)
        .create();

    let client = client_for(&server);
    let request = SynthesisRequest::new("This is not a drill. Good evening!")
        .voice(Voice::BRAZILIAN_FEMALE)
        .accept(ContentType::WAV);

    let mut stream = client.synthesize(&request).expect("synthesize");
    assert_eq!(stream.content_type(), Some("audio/wav"));
    let mut got = Vec::new();
    stream.read_to_end(&mut got).expect("read body");
    assert_eq!(got, audio);

    mock.assert();
}

#[test]
fn test_synthesize_without_options_sends_bare_endpoint() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", SYNTH_PATH)
        .match_body(Matcher::JsonString(r#"{"text":"hello"}"#.to_string()))
        .with_status(200)
        .with_body("ogg")
        .create();

    let client = client_for(&server);
    let stream = client
        .synthesize(&SynthesisRequest::new("hello"))
        .expect("synthesize");
    assert_eq!(stream.into_bytes().expect("drain"), b"ogg");

    mock.assert();
}

#[test]
fn test_warnings_header_fails_even_on_200() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", SYNTH_PATH)
        .match_query(Matcher::UrlEncoded(
            "voice".into(),
            "de-DE_DieterVoice".into(),
        ))
        .with_status(200)
        .with_header("Warnings", "deprecated voice")
        .with_body("audio")
        .create();

    let client = client_for(&server);
    match client.synthesize(&SynthesisRequest::new("x").voice(Voice::GERMAN_MALE)) {
        Err(Error::ServerWarning(text)) => assert_eq!(text, "deprecated voice"),
        other => panic!("expected server warning, got {:?}", other),
    }

    mock.assert();
}

#[test]
fn test_service_unavailable_is_http_status_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", SYNTH_PATH)
        .with_status(503)
        .with_body("busy")
        .create();

    let client = client_for(&server);
    let err = client
        .synthesize(&SynthesisRequest::new("x"))
        .expect_err("503 must fail");
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("503"), "{}", err);
}

#[test]
fn test_missing_password_never_hits_server() {
    let mut server = Server::new();
    let mock = server.mock("POST", SYNTH_PATH).expect(0).create();

    let client = TtsClient::builder()
        .credentials("username", "")
        .endpoint(format!("{}{}", server.url(), SYNTH_PATH))
        .build()
        .expect("client");
    let err = client
        .synthesize(&SynthesisRequest::new("x"))
        .expect_err("must fail");
    assert!(matches!(err, Error::Credentials { .. }));
    assert!(err.to_string().contains("expecting a password"));

    mock.assert();
}

#[test]
fn test_connection_refused_is_transport_error() {
    // Port 1 is reserved and not listening on test hosts.
    let client = TtsClient::builder()
        .credentials("username", "password")
        .endpoint(format!("http://127.0.0.1:1{}", SYNTH_PATH))
        .build()
        .expect("client");
    let err = client
        .synthesize(&SynthesisRequest::new("x"))
        .expect_err("must fail");
    assert!(err.is_transport(), "{:?}", err);
}

#[test]
fn test_custom_http_transport_is_used() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", SYNTH_PATH)
        .match_query(Matcher::UrlEncoded("accept".into(), "audio/flac".into()))
        .match_header("user-agent", "tts-tests/1.0")
        .with_status(200)
        .with_body("flac")
        .create();

    let transport = HttpTransport::builder()
        .timeout(Duration::from_secs(5))
        .user_agent("tts-tests/1.0")
        .build()
        .expect("transport");
    let transport: std::sync::Arc<dyn Transport> = std::sync::Arc::new(transport);
    let client = TtsClient::builder()
        .credentials("username", "password")
        .endpoint(format!("{}{}", server.url(), SYNTH_PATH))
        .transport(transport)
        .build()
        .expect("client");

    let stream = client
        .synthesize(&SynthesisRequest::new("x").accept(ContentType::FLAC))
        .expect("synthesize");
    assert_eq!(stream.into_bytes().expect("drain"), b"flac");

    mock.assert();
}

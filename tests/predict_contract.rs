//! End-to-end tests: TEA engine + HTTP classifier against a local server

use std::time::Duration;

use phishguard_app::config::Settings;
use phishguard_app::{Engine, Message};
use phishguard_client::test_utils::{serve_once, serve_once_capturing, HttpReply};
use phishguard_client::{HttpClassifier, TRANSPORT_FAILURE_MESSAGE};
use phishguard_core::{AnalysisResult, Outcome, Page};
use url::Url;

fn engine_for(base: &str, timeout: Duration) -> Engine<HttpClassifier> {
    let endpoint = Url::parse(&format!("{}/predict", base)).unwrap();
    Engine::new(Settings::default(), HttpClassifier::new(endpoint, timeout))
}

async fn analyze(engine: &mut Engine<HttpClassifier>, email: &str) {
    engine.process_message(Message::SelectPage(Page::Detector));
    engine.process_message(Message::EditInput(email.to_string()));
    engine.process_message(Message::Submit);
    assert!(engine.state.detector.pending);

    tokio::time::timeout(Duration::from_secs(10), engine.process_next())
        .await
        .expect("analysis should resolve");
    assert!(!engine.state.detector.pending);
}

fn confidence_text(engine: &Engine<HttpClassifier>) -> Option<String> {
    engine
        .state
        .detector
        .last_result
        .as_ref()?
        .verdict()?
        .confidence()
        .map(|c| c.to_string())
}

#[tokio::test]
async fn phishing_response_renders_threat_probability() {
    let (base, requests) = serve_once_capturing(HttpReply::json(
        200,
        r#"{"prediction": 1, "probability": 0.873}"#,
    ));
    let mut engine = engine_for(&base, Duration::from_secs(5));

    analyze(&mut engine, "  URGENT: confirm your password  ").await;

    let request = requests.recv_timeout(Duration::from_secs(1)).unwrap();
    assert!(request.starts_with("POST /predict"));
    assert!(request.contains(r#"{"email":"URGENT: confirm your password"}"#));

    let result = engine.state.detector.last_result.as_ref().unwrap();
    assert_eq!(result.outcome(), Outcome::Phishing);
    assert_eq!(confidence_text(&engine).as_deref(), Some("87.3%"));
}

#[tokio::test]
async fn legitimate_response_renders_safety_score() {
    let base = serve_once(HttpReply::json(
        200,
        r#"{"prediction": 0, "probability": 0.12}"#,
    ));
    let mut engine = engine_for(&base, Duration::from_secs(5));

    analyze(&mut engine, "Team lunch moved to 1pm").await;

    let result = engine.state.detector.last_result.as_ref().unwrap();
    assert_eq!(result.outcome(), Outcome::Safe);
    assert_eq!(confidence_text(&engine).as_deref(), Some("88.0%"));
}

#[tokio::test]
async fn server_error_is_a_recoverable_failure() {
    let base = serve_once(HttpReply::json(500, r#"{"error": "model not loaded"}"#));
    let mut engine = engine_for(&base, Duration::from_secs(5));

    analyze(&mut engine, "hello").await;

    assert_eq!(
        engine.state.detector.last_result,
        Some(AnalysisResult::failed(TRANSPORT_FAILURE_MESSAGE))
    );
    assert!(engine.state.detector.can_submit());
}

#[tokio::test]
async fn missing_prediction_is_a_failure_not_safe() {
    let base = serve_once(HttpReply::json(200, r#"{"probability": 0.4}"#));
    let mut engine = engine_for(&base, Duration::from_secs(5));

    analyze(&mut engine, "hello").await;

    let result = engine.state.detector.last_result.as_ref().unwrap();
    assert_eq!(result.outcome(), Outcome::Error);
}

#[tokio::test]
async fn slow_service_times_out() {
    let base = serve_once(
        HttpReply::json(200, r#"{"prediction": 1, "probability": 0.9}"#)
            .delayed(Duration::from_secs(3)),
    );
    let mut engine = engine_for(&base, Duration::from_millis(300));

    analyze(&mut engine, "hello").await;

    let result = engine.state.detector.last_result.as_ref().unwrap();
    assert_eq!(result.outcome(), Outcome::Error);
}

#[tokio::test]
async fn unreachable_service_is_a_failure() {
    // Bind then drop a listener to get a port nobody is listening on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let mut engine = engine_for(&format!("http://127.0.0.1:{}", port), Duration::from_secs(2));

    analyze(&mut engine, "hello").await;

    let result = engine.state.detector.last_result.as_ref().unwrap();
    assert_eq!(result.outcome(), Outcome::Error);
}

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use polyglot::application::ports::{TranslationEngine, TranslationEngineError};
use polyglot::domain::{AudioBuffer, SpeakerId, TargetLanguage};
use polyglot::infrastructure::engine::RemoteTranslationEngine;

const MODEL: &str = "facebook/seamless-m4t-v2-large";

#[derive(Clone, Default)]
struct ModelServer {
    received: Arc<Mutex<Vec<Value>>>,
}

async fn halve(State(server): State<ModelServer>, Json(body): Json<Value>) -> Json<Value> {
    let samples: Vec<f64> = body["samples"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_f64().unwrap() / 2.0)
        .collect();
    server.received.lock().unwrap().push(body);
    Json(json!({ "samples": samples }))
}

async fn reject() -> (StatusCode, &'static str) {
    (StatusCode::UNPROCESSABLE_ENTITY, "unsupported language")
}

async fn crash() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "cuda out of memory")
}

async fn garbage() -> &'static str {
    "not json"
}

async fn healthy() -> StatusCode {
    StatusCode::OK
}

async fn spawn_model_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn french() -> TargetLanguage {
    TargetLanguage::parse("fra").unwrap()
}

#[tokio::test]
async fn given_model_server_when_translating_then_returns_server_samples_at_input_rate() {
    let server = ModelServer::default();
    let router = Router::new()
        .route("/translate", post(halve))
        .with_state(server.clone());
    let base_url = spawn_model_server(router).await;
    let engine = RemoteTranslationEngine::new(&base_url, MODEL.to_string()).unwrap();
    let audio = AudioBuffer::mono(vec![0.5, -0.5, 0.25], 16_000);

    let translated = engine
        .translate(&audio, &french(), SpeakerId::resolve(Some(3)))
        .await
        .unwrap();

    assert_eq!(translated.samples(), &[0.25, -0.25, 0.125]);
    assert_eq!(translated.sample_rate(), 16_000);
    assert_eq!(translated.channels(), 1);

    let received = server.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["target_language"], "fra");
    assert_eq!(received[0]["speaker_id"], 3);
    assert_eq!(received[0]["sample_rate"], 16_000);
    assert_eq!(received[0]["channels"], 1);
    assert_eq!(received[0]["model"], MODEL);
}

#[tokio::test]
async fn given_client_error_from_server_when_translating_then_returns_invalid_request() {
    let base_url = spawn_model_server(Router::new().route("/translate", post(reject))).await;
    let engine = RemoteTranslationEngine::new(&base_url, MODEL.to_string()).unwrap();

    let result = engine
        .translate(&AudioBuffer::mono(vec![0.0; 4], 16_000), &french(), SpeakerId::DEFAULT)
        .await;

    match result {
        Err(TranslationEngineError::InvalidRequest(message)) => {
            assert!(message.contains("unsupported language"));
        }
        other => panic!("expected InvalidRequest, got {:?}", other.map(|a| a.len())),
    }
}

#[tokio::test]
async fn given_server_error_when_translating_then_returns_inference_failed() {
    let base_url = spawn_model_server(Router::new().route("/translate", post(crash))).await;
    let engine = RemoteTranslationEngine::new(&base_url, MODEL.to_string()).unwrap();

    let result = engine
        .translate(&AudioBuffer::mono(vec![0.0; 4], 16_000), &french(), SpeakerId::DEFAULT)
        .await;

    assert!(matches!(
        result,
        Err(TranslationEngineError::InferenceFailed(_))
    ));
}

#[tokio::test]
async fn given_malformed_response_when_translating_then_returns_inference_failed() {
    let base_url = spawn_model_server(Router::new().route("/translate", post(garbage))).await;
    let engine = RemoteTranslationEngine::new(&base_url, MODEL.to_string()).unwrap();

    let result = engine
        .translate(&AudioBuffer::mono(vec![0.0; 4], 16_000), &french(), SpeakerId::DEFAULT)
        .await;

    assert!(matches!(
        result,
        Err(TranslationEngineError::InferenceFailed(_))
    ));
}

#[tokio::test]
async fn given_unreachable_server_when_translating_then_returns_unavailable() {
    let engine = RemoteTranslationEngine::new(&unreachable_url().await, MODEL.to_string()).unwrap();

    let result = engine
        .translate(&AudioBuffer::mono(vec![0.0; 4], 16_000), &french(), SpeakerId::DEFAULT)
        .await;

    assert!(matches!(result, Err(TranslationEngineError::Unavailable(_))));
}

#[tokio::test]
async fn given_healthy_server_when_checking_readiness_then_is_ready() {
    let base_url = spawn_model_server(Router::new().route("/health", get(healthy))).await;
    let engine = RemoteTranslationEngine::new(&format!("{}/", base_url), MODEL.to_string()).unwrap();

    assert!(engine.is_ready().await);
}

#[tokio::test]
async fn given_unreachable_server_when_checking_readiness_then_is_not_ready() {
    let engine = RemoteTranslationEngine::new(&unreachable_url().await, MODEL.to_string()).unwrap();

    assert!(!engine.is_ready().await);
}

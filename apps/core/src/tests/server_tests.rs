//! HTTP Boundary Tests
//!
//! Exercises the router with in-memory requests via tower's `oneshot` -
//! no socket needed.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

use crate::engine::{ChatResponse, Emotion, Intent, Strategy};
use crate::models::{HealthStatus, ServiceInfo, WelcomeReply};
use crate::server::{create_router, AppState};

fn app() -> axum::Router {
    create_router(Arc::new(AppState::new()))
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not the expected JSON shape")
}

fn post_chat(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

#[tokio::test]
async fn test_root_reports_service_identity() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let info: ServiceInfo = body_json(response).await;
    assert_eq!(info.name, "Solace API");
    assert_eq!(info.status, "online");
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health: HealthStatus = body_json(response).await;
    assert_eq!(health.status, "healthy");
    assert!(health.uptime_seconds >= 0);
}

#[tokio::test]
async fn test_welcome_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/welcome").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let welcome: WelcomeReply = body_json(response).await;
    assert!(welcome.message.contains("Solace"));
}

#[tokio::test]
async fn test_chat_normal_path() {
    let response = app()
        .oneshot(post_chat(
            r#"{"message": "I feel really anxious about my exam tomorrow"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let chat: ChatResponse = body_json(response).await;
    assert_eq!(chat.emotion, Emotion::Anxious);
    assert!(!chat.is_crisis);
    assert_eq!(chat.strategy, Strategy::CbtReflective);
    assert!(!chat.message.is_empty());
}

#[tokio::test]
async fn test_chat_crisis_path() {
    let response = app()
        .oneshot(post_chat(r#"{"message": "I want to kill myself"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let chat: ChatResponse = body_json(response).await;
    assert!(chat.is_crisis);
    assert_eq!(chat.emotion, Emotion::Crisis);
    assert_eq!(chat.intent, Intent::Crisis);
    assert_eq!(chat.strategy, Strategy::SafetyProtocol);
    assert!(chat.message.contains("988"));
}

#[tokio::test]
async fn test_chat_accepts_conversation_history() {
    let body = r#"{
        "message": "What should I do about my job situation",
        "conversation_history": [
            {"role": "user", "content": "hello"},
            {"role": "assistant", "content": "hi, what's on your mind?"}
        ]
    }"#;

    let response = app().oneshot(post_chat(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let chat: ChatResponse = body_json(response).await;
    assert_eq!(chat.intent, Intent::SeekingAdvice);
}

#[tokio::test]
async fn test_chat_empty_message_still_replies() {
    let response = app()
        .oneshot(post_chat(r#"{"message": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let chat: ChatResponse = body_json(response).await;
    assert_eq!(chat.emotion, Emotion::General);
    assert_eq!(chat.intent, Intent::ExploringFeelings);
    assert!(!chat.message.is_empty());
}

#[tokio::test]
async fn test_chat_missing_message_field_is_rejected() {
    let response = app()
        .oneshot(post_chat(r#"{"conversation_history": []}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_chat_requires_json_content_type() {
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .body(Body::from(r#"{"message": "hi"}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = app()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

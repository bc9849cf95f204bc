//! HTTP boundary for the response engine.
//!
//! Thin wrapper: JSON extraction and CORS only. All response semantics
//! live in the engine module.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::engine::{ChatResponse, ResponseEngine};
use crate::error::AppError;
use crate::models::{ChatRequest, HealthStatus, ServiceInfo, WelcomeReply};

const SERVICE_NAME: &str = "Solace API";

/// Shared state: one engine instance serves every request.
pub struct AppState {
    engine: ResponseEngine,
    started_at: DateTime<Utc>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            engine: ResponseEngine::new(),
            started_at: Utc::now(),
        }
    }
}

/// Create the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    // The chat front end runs on a separate origin; mirror its permissive
    // CORS policy.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/welcome", get(welcome))
        .route("/chat", post(chat))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// GET / - service identity.
async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "online".to_string(),
    })
}

/// GET /health - liveness probe.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
    })
}

/// GET /welcome - static greeting for a fresh conversation.
async fn welcome(State(state): State<Arc<AppState>>) -> Json<WelcomeReply> {
    Json(WelcomeReply {
        message: state.engine.welcome_message().to_string(),
    })
}

/// POST /chat - run one message through the pipeline.
async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("chat_request", %request_id);
    let _enter = span.enter();

    let response = state
        .engine
        .respond(&request.message, &request.conversation_history);

    Json(response)
}

/// Bind the configured address and serve until shutdown.
pub async fn serve(config: ServerConfig, state: Arc<AppState>) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| AppError::Config(format!("invalid bind address {}: {e}", config.bind_address())))?;

    let app = create_router(state);

    info!("Starting Solace server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

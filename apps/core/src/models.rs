use serde::{Deserialize, Serialize};

/// One prior conversation turn, as an open key/value record.
///
/// The front end sends whatever shape it keeps locally (role/content pairs
/// today); the engine accepts the turns without reading them, so the type
/// stays deliberately untyped.
pub type ChatTurn = serde_json::Map<String, serde_json::Value>;

/// Inbound body of the chat endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message. May be empty; the engine still replies.
    pub message: String,
    /// Prior turns, optional and unread by classification.
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

/// Payload of the service root endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service display name.
    pub name: String,
    /// Crate version.
    pub version: String,
    /// Constant "online" while the process serves.
    pub status: String,
}

/// Payload of the health endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Constant "healthy" while the process serves.
    pub status: String,
    /// Seconds since process start.
    pub uptime_seconds: i64,
}

/// Payload of the welcome endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeReply {
    /// The static greeting.
    pub message: String,
}

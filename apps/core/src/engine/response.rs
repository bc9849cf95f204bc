//! Chat response record - the engine's output structure.

use serde::{Deserialize, Serialize};

use super::emotion::Emotion;
use super::intent::Intent;

/// Which response mode produced the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Normal pipeline: classification + template selection.
    CbtReflective,
    /// Crisis short-circuit with the fixed resource message.
    SafetyProtocol,
}

/// Complete reply record for one inbound message.
///
/// Constructed fresh per request and never persisted. Exactly two shapes
/// are possible: the crisis shape (`is_crisis=true`, crisis labels,
/// safety message) and the normal shape (`is_crisis=false`, classified
/// labels, selected template).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The reply text shown to the user.
    pub message: String,
    /// Detected emotion, or `crisis` on the safety path.
    pub emotion: Emotion,
    /// Detected intent, or `crisis` on the safety path.
    pub intent: Intent,
    /// Whether the safety path produced this reply.
    pub is_crisis: bool,
    /// The response mode that produced `message`.
    pub strategy: Strategy,
}

//! Response engine - orchestrates the classification pipeline.
//!
//! Pipeline per message: crisis screen (terminal on a hit), then emotion
//! and intent classification, then template selection keyed by emotion.

use rand::Rng;
use std::time::Instant;
use tracing::debug;

use super::emotion::{Emotion, EmotionClassifier};
use super::intent::{Intent, IntentClassifier};
use super::response::{ChatResponse, Strategy};
use super::safety::CrisisScreener;
use super::templates::ResponseSelector;
use crate::models::ChatTurn;

/// Static greeting returned by the welcome boundary operation.
const WELCOME_MESSAGE: &str = "Hello, I'm Solace. I'm here to listen and support you through whatever you're experiencing. This is a safe, judgment-free space. What's on your mind today?";

/// Stateless response engine shared across requests.
///
/// All tables are read-only after construction, so one instance can serve
/// concurrent requests without locking.
pub struct ResponseEngine {
    screener: CrisisScreener,
    emotions: EmotionClassifier,
    intents: IntentClassifier,
    selector: ResponseSelector,
}

impl Default for ResponseEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseEngine {
    pub fn new() -> Self {
        Self {
            screener: CrisisScreener::new(),
            emotions: EmotionClassifier::new(),
            intents: IntentClassifier::new(),
            selector: ResponseSelector,
        }
    }

    /// Produce a reply for one inbound message.
    ///
    /// `history` is accepted for API compatibility and reserved for
    /// multi-turn context; no pipeline step consults it yet.
    pub fn respond(&self, message: &str, history: &[ChatTurn]) -> ChatResponse {
        self.respond_with(message, history, &mut rand::thread_rng())
    }

    /// Same pipeline with a caller-supplied RNG for template selection, so
    /// tests can assert the exact reply text.
    pub fn respond_with<R: Rng + ?Sized>(
        &self,
        message: &str,
        _history: &[ChatTurn],
        rng: &mut R,
    ) -> ChatResponse {
        let started = Instant::now();

        let safety = self.screener.screen(message);
        if safety.is_crisis {
            return ChatResponse {
                message: safety.message,
                emotion: Emotion::Crisis,
                intent: Intent::Crisis,
                is_crisis: true,
                strategy: Strategy::SafetyProtocol,
            };
        }

        let emotion = self.emotions.classify(message);
        let intent = self.intents.classify(message);
        let reply = self.selector.select_with(emotion, rng);

        debug!(
            emotion = %emotion,
            intent = %intent,
            elapsed_us = started.elapsed().as_micros() as u64,
            "message classified"
        );

        ChatResponse {
            message: reply.to_string(),
            emotion,
            intent,
            is_crisis: false,
            strategy: Strategy::CbtReflective,
        }
    }

    /// The static greeting, independent of the classification pipeline.
    pub fn welcome_message(&self) -> &'static str {
        WELCOME_MESSAGE
    }
}

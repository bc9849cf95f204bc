//! # Engine Module
//!
//! Rule-based response engine for Solace.
//! Classifies user input with static pattern tables - no LLM, no network.
//!
//! ## Components
//! - `matcher`: generic first-match category scanner
//! - `emotion`: emotion detection using regex patterns
//! - `intent`: intent classification using regex patterns
//! - `safety`: crisis screening with the fixed resource message
//! - `templates`: reply template tables + random selection
//! - `response`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod emotion;
pub mod intent;
pub mod matcher;
pub mod response;
pub mod safety;
pub mod templates;

// Re-export main types for convenience
pub use analyzer::ResponseEngine;
pub use emotion::{Emotion, EmotionClassifier};
pub use intent::{Intent, IntentClassifier};
pub use response::{ChatResponse, Strategy};
pub use safety::{CrisisScreener, SafetyCheck, SAFETY_RESOURCES};
pub use templates::ResponseSelector;

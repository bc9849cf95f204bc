//! Crisis screening.
//!
//! Every inbound message is screened before any other processing. A match
//! short-circuits the whole pipeline and returns a fixed safety message
//! pointing at crisis resources.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Crisis resource lines, interpolated into the safety message in this
/// exact order.
pub const SAFETY_RESOURCES: &[&str] = &[
    "🆘 National Suicide Prevention Lifeline: 988 (US)",
    "📱 Crisis Text Line: Text HOME to 741741",
    "🌍 International Association for Suicide Prevention: https://www.iasp.info/resources/Crisis_Centres/",
    "💬 Trevor Project (LGBTQ+ Youth): 1-866-488-7386",
    "🤝 SAMHSA National Helpline: 1-800-662-4357",
];

// Word-boundary patterns so fragments inside unrelated longer words never
// trigger the safety path. Scan order is declaration order.
static CRISIS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\b(suicide|suicidal|kill myself|end my life|want to die|better off dead)\b")
            .expect("invalid regex: suicidal ideation keywords"),
        Regex::new(r"\b(self.?harm|hurt myself|cut myself|cutting)\b")
            .expect("invalid regex: self-harm keywords"),
        Regex::new(r"\b(overdose|end it all|no reason to live)\b")
            .expect("invalid regex: overdose keywords"),
        Regex::new(r"\b(plan to die|planning to|how to kill)\b")
            .expect("invalid regex: lethal planning keywords"),
    ]
});

/// Outcome of screening one message.
#[derive(Debug, Clone)]
pub struct SafetyCheck {
    pub is_crisis: bool,
    /// The full safety message on a crisis hit, empty otherwise.
    pub message: String,
}

/// Screens messages for crisis-risk language.
pub struct CrisisScreener {
    patterns: Vec<Regex>,
}

impl Default for CrisisScreener {
    fn default() -> Self {
        Self::new()
    }
}

impl CrisisScreener {
    pub fn new() -> Self {
        Self {
            patterns: CRISIS_PATTERNS.clone(),
        }
    }

    /// Test a message against the crisis patterns.
    ///
    /// Pure function of the input text and the static tables; never fails,
    /// including on the empty string.
    pub fn screen(&self, message: &str) -> SafetyCheck {
        let message_lower = message.to_lowercase();

        for pattern in &self.patterns {
            if let Some(hit) = pattern.find(&message_lower) {
                warn!("crisis language detected: '{}'", hit.as_str());
                return SafetyCheck {
                    is_crisis: true,
                    message: Self::crisis_reply(),
                };
            }
        }

        SafetyCheck {
            is_crisis: false,
            message: String::new(),
        }
    }

    fn crisis_reply() -> String {
        format!(
            "I'm really concerned about what you're sharing. Your safety is the top priority, and I care about your wellbeing.\n\n\
             Please know that I'm an AI and not equipped to handle crisis situations, but there are trained professionals available 24/7 who can provide immediate support.\n\n\
             Please reach out to one of these crisis resources right away:\n\n\
             {}\n\n\
             You deserve support, and there are people who want to help. Please don't hesitate to contact them.",
            SAFETY_RESOURCES.join("\n")
        )
    }
}

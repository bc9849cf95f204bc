//! Emotion detection using regex patterns.
//!
//! Pure pattern matching over a fixed category table - no ML model.
//! Category declaration order is the tie-break when a message matches
//! several emotions.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::matcher::FirstMatchClassifier;

/// Detected emotional tone of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Anxious,
    Depressed,
    Angry,
    Overwhelmed,
    Confused,
    Hopeful,
    /// Default when no pattern matches.
    General,
    /// Produced only by the safety path, never by the classifier.
    Crisis,
}

impl Emotion {
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Anxious => "anxious",
            Emotion::Depressed => "depressed",
            Emotion::Angry => "angry",
            Emotion::Overwhelmed => "overwhelmed",
            Emotion::Confused => "confused",
            Emotion::Hopeful => "hopeful",
            Emotion::General => "general",
            Emotion::Crisis => "crisis",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Compiled once at first use; an invalid static pattern is unrecoverable.
static ANXIOUS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\b(worried|anxious|nervous|scared|panic|afraid|fear|terrified)\b")
            .expect("invalid regex: anxious keywords"),
        Regex::new(r"\b(can't (sleep|breathe)|heart racing|sweating)\b")
            .expect("invalid regex: anxious phrases"),
    ]
});

static DEPRESSED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\b(sad|depressed|hopeless|empty|numb|worthless|alone)\b")
            .expect("invalid regex: depressed keywords"),
        Regex::new(r"\b(no point|give up|nothing matters)\b")
            .expect("invalid regex: depressed phrases"),
    ]
});

static ANGRY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\b(angry|furious|mad|frustrated|irritated|rage|pissed)\b")
            .expect("invalid regex: angry keywords"),
        Regex::new(r"\b(can't stand|hate|fed up)\b").expect("invalid regex: angry phrases"),
    ]
});

static OVERWHELMED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\b(overwhelmed|stressed|too much|can't cope|drowning)\b")
            .expect("invalid regex: overwhelmed keywords"),
        Regex::new(r"\b(breaking point|can't handle)\b")
            .expect("invalid regex: overwhelmed phrases"),
    ]
});

static CONFUSED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\b(confused|lost|don't know|uncertain|unsure)\b")
            .expect("invalid regex: confused keywords"),
        Regex::new(r"\b(what to do|which way|unclear)\b")
            .expect("invalid regex: confused phrases"),
    ]
});

static HOPEFUL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\b(hopeful|better|improving|positive|good|optimistic)\b")
            .expect("invalid regex: hopeful keywords"),
        Regex::new(r"\b(getting better|making progress|feeling stronger)\b")
            .expect("invalid regex: hopeful phrases"),
    ]
});

/// Emotion classifier over the fixed pattern table.
pub struct EmotionClassifier {
    inner: FirstMatchClassifier<Emotion>,
}

impl Default for EmotionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionClassifier {
    pub fn new() -> Self {
        let inner = FirstMatchClassifier::new(
            vec![
                (Emotion::Anxious, ANXIOUS_PATTERNS.clone()),
                (Emotion::Depressed, DEPRESSED_PATTERNS.clone()),
                (Emotion::Angry, ANGRY_PATTERNS.clone()),
                (Emotion::Overwhelmed, OVERWHELMED_PATTERNS.clone()),
                (Emotion::Confused, CONFUSED_PATTERNS.clone()),
                (Emotion::Hopeful, HOPEFUL_PATTERNS.clone()),
            ],
            Emotion::General,
        );

        Self { inner }
    }

    /// Detect the primary emotion of a message.
    pub fn classify(&self, message: &str) -> Emotion {
        self.inner.classify(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anxious_detection() {
        let classifier = EmotionClassifier::new();

        let messages = vec![
            "I'm so worried about tomorrow",
            "My heart racing won't stop",
            "I feel terrified all the time",
            "I can't sleep at night",
        ];

        for message in messages {
            assert_eq!(
                classifier.classify(message),
                Emotion::Anxious,
                "Expected Anxious for '{}'",
                message
            );
        }
    }

    #[test]
    fn test_depressed_detection() {
        let classifier = EmotionClassifier::new();

        assert_eq!(classifier.classify("I feel so empty inside"), Emotion::Depressed);
        assert_eq!(classifier.classify("there's no point anymore"), Emotion::Depressed);
    }

    #[test]
    fn test_angry_detection() {
        let classifier = EmotionClassifier::new();

        assert_eq!(classifier.classify("I'm furious at my boss"), Emotion::Angry);
        assert_eq!(classifier.classify("I'm fed up with everything"), Emotion::Angry);
    }

    #[test]
    fn test_declaration_order_tie_break() {
        let classifier = EmotionClassifier::new();

        // Matches both anxious ("scared") and angry ("mad"); anxious is
        // declared first and must win.
        assert_eq!(classifier.classify("I'm scared and mad"), Emotion::Anxious);
    }

    #[test]
    fn test_general_fallback() {
        let classifier = EmotionClassifier::new();

        assert_eq!(classifier.classify("the weather is cloudy today"), Emotion::General);
        assert_eq!(classifier.classify(""), Emotion::General);
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = EmotionClassifier::new();

        assert_eq!(classifier.classify("I AM SO ANXIOUS"), Emotion::Anxious);
    }

    #[test]
    fn test_label_round_trip() {
        assert_eq!(Emotion::Overwhelmed.label(), "overwhelmed");
        assert_eq!(Emotion::Crisis.to_string(), "crisis");
    }
}

//! Intent classification using regex patterns.
//!
//! Same first-match scan as emotion detection, over a distinct category
//! table with a distinct default.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use super::matcher::FirstMatchClassifier;

/// Detected conversational intent of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    SeekingSupport,
    Venting,
    SeekingAdvice,
    /// Also the default when no pattern matches.
    ExploringFeelings,
    ProblemSolving,
    /// Produced only by the safety path, never by the classifier.
    Crisis,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::SeekingSupport => "seeking_support",
            Intent::Venting => "venting",
            Intent::SeekingAdvice => "seeking_advice",
            Intent::ExploringFeelings => "exploring_feelings",
            Intent::ProblemSolving => "problem_solving",
            Intent::Crisis => "crisis",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

static SEEKING_SUPPORT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\b(help|support|talk|listen|need someone|be there)\b")
            .expect("invalid regex: seeking_support keywords"),
    ]
});

static VENTING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\b(just need to say|get this off my chest|need to vent|let it out)\b")
            .expect("invalid regex: venting phrases"),
    ]
});

static SEEKING_ADVICE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\b(what should|how do i|advice|suggest|recommend|tell me)\b")
            .expect("invalid regex: seeking_advice keywords"),
    ]
});

static EXPLORING_FEELINGS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\b(feel|feeling|emotion|experience|going through)\b")
            .expect("invalid regex: exploring_feelings keywords"),
    ]
});

static PROBLEM_SOLVING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\b(problem|issue|situation|how to handle|deal with)\b")
            .expect("invalid regex: problem_solving keywords"),
    ]
});

/// Intent classifier over the fixed pattern table.
pub struct IntentClassifier {
    inner: FirstMatchClassifier<Intent>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    pub fn new() -> Self {
        let inner = FirstMatchClassifier::new(
            vec![
                (Intent::SeekingSupport, SEEKING_SUPPORT_PATTERNS.clone()),
                (Intent::Venting, VENTING_PATTERNS.clone()),
                (Intent::SeekingAdvice, SEEKING_ADVICE_PATTERNS.clone()),
                (Intent::ExploringFeelings, EXPLORING_FEELINGS_PATTERNS.clone()),
                (Intent::ProblemSolving, PROBLEM_SOLVING_PATTERNS.clone()),
            ],
            Intent::ExploringFeelings,
        );

        Self { inner }
    }

    /// Classify the intent of a message.
    pub fn classify(&self, message: &str) -> Intent {
        self.inner.classify(message)
    }
}

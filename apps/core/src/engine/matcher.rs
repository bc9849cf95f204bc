//! Generic first-match category scanner.
//!
//! The emotion and intent classifiers run the same algorithm over different
//! tables: categories are declared in a fixed order, each carries an ordered
//! list of patterns, and the first pattern to hit decides the category.
//! Implemented once here so the two classifiers cannot drift apart.

use regex::Regex;

/// One category together with its ordered patterns.
struct CategoryPatterns<C> {
    category: C,
    patterns: Vec<Regex>,
}

/// Scans categories in declaration order and returns the category of the
/// first matching pattern, or a fixed fallback when nothing matches.
pub struct FirstMatchClassifier<C> {
    groups: Vec<CategoryPatterns<C>>,
    fallback: C,
}

impl<C: Copy> FirstMatchClassifier<C> {
    pub fn new(groups: Vec<(C, Vec<Regex>)>, fallback: C) -> Self {
        let groups = groups
            .into_iter()
            .map(|(category, patterns)| CategoryPatterns { category, patterns })
            .collect();

        Self { groups, fallback }
    }

    /// Classify a message.
    ///
    /// The message is lowercased once; the scan is a nested walk over
    /// categories then patterns, short-circuiting on the first hit. Total
    /// over all inputs: an empty or unmatched message yields the fallback.
    pub fn classify(&self, text: &str) -> C {
        let text = text.to_lowercase();

        for group in &self.groups {
            for pattern in &group.patterns {
                if pattern.is_match(&text) {
                    return group.category;
                }
            }
        }

        self.fallback
    }
}

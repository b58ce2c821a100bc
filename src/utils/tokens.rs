//! Heuristic token estimation
//!
//! Not tied to any model's vocabulary. Text is split on whitespace; inside a
//! word every punctuation character is a token of its own and every run of
//! other characters is one token. Punctuation means the Unicode `P*`
//! general categories; symbols such as `<`, `=` and `+` are not punctuation.

use unicode_categories::UnicodeCategories;

/// Running token counter for a pipeline run
#[derive(Debug, Default, Clone)]
pub struct TokenEstimator {
    total: u64,
}

impl TokenEstimator {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Count tokens in `text`, add them to the running total, and return the count
    pub fn count(&mut self, text: &str) -> u64 {
        let tokens = estimate(text);
        self.total += tokens;
        tokens
    }

    /// Tokens counted so far
    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Estimate tokens in `text` without touching any counter
pub fn estimate(text: &str) -> u64 {
    let mut tokens = 0;

    for word in text.split_whitespace() {
        let mut in_run = false;
        for ch in word.chars() {
            if ch.is_punctuation() {
                tokens += 1;
                in_run = false;
            } else if !in_run {
                tokens += 1;
                in_run = true;
            }
        }
    }

    tokens
}

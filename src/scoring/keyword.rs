//! Keyword-counting fallback scorer
//!
//! Used when no trained model is loaded. Deterministic: the score moves
//! 0.1 away from neutral per matched keyword, clamped into [0, 1].

use crate::scoring::Scorer;

// Fixed keyword data; the sets mix English and French tokens and are
// carried as given.
static POSITIVE_KEYWORDS: &[&str] = &[
    "good", "great", "love", "amazing", "excellent", "super", "cool", "merci", "génial",
];

static NEGATIVE_KEYWORDS: &[&str] = &[
    "bad", "hate", "awful", "terrible", "horrible", "nul", "pourri", "triste",
];

/// Deterministic keyword-presence scorer
pub struct KeywordScorer;

impl KeywordScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for KeywordScorer {
    fn score(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let positive = hits(&lowered, POSITIVE_KEYWORDS);
        let negative = hits(&lowered, NEGATIVE_KEYWORDS);
        (0.5 + 0.1 * f64::from(positive - negative)).clamp(0.0, 1.0)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

/// Number of keywords present in the text (each counted at most once)
fn hits(text: &str, keywords: &[&str]) -> i32 {
    keywords.iter().filter(|kw| text.contains(**kw)).count() as i32
}

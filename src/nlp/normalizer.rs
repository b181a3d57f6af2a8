use crate::error::AppError;
use crate::nlp::stopwords::STOPWORDS;
use crate::nlp::{lemma, stem};
use regex::Regex;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

/// Token normalization mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeMode {
    /// Reduce tokens to their dictionary base form
    Lemma,
    /// Reduce tokens to a rule-based stem
    Stem,
}

impl FromStr for NormalizeMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lemma" => Ok(Self::Lemma),
            "stem" => Ok(Self::Stem),
            other => Err(AppError::Validation(format!(
                "mode must be 'lemma' or 'stem', got '{other}'"
            ))),
        }
    }
}

/// Text normalizer
///
/// Strips everything outside the Latin alphabet and spaces, lowercases,
/// tokenizes, filters stopwords and short tokens, then reduces each
/// surviving token to its lemma or stem.
pub struct TextNormalizer {
    strip_re: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            strip_re: Regex::new(r"[^a-zA-Z ]+").unwrap(),
        }
    }

    /// Normalize raw text into space-joined tokens, preserving order.
    ///
    /// Tokens are dropped when they are stopwords or have length <= 2,
    /// both before and after normalization.
    pub fn normalize(&self, text: &str, mode: NormalizeMode) -> String {
        let cleaned = self
            .strip_re
            .replace_all(text, " ")
            .to_lowercase()
            .trim()
            .to_string();

        let mut out_tokens = Vec::new();
        for token in cleaned.unicode_words() {
            if token.len() <= 2 || STOPWORDS.contains(token) {
                continue;
            }

            let normalized = match mode {
                NormalizeMode::Lemma => lemma::lemmatize(token),
                NormalizeMode::Stem => stem::stem(token),
            };

            if normalized.len() > 2 {
                out_tokens.push(normalized);
            }
        }

        out_tokens.join(" ")
    }
}

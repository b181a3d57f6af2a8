//! Sentiment scoring module
//!
//! Provides the `Scorer` capability with two variants selected once at
//! startup: a model-backed scorer and a keyword-counting fallback.

pub mod keyword;
pub mod model;

pub use keyword::KeywordScorer;
pub use model::{ModelArtifact, ModelScorer};

use crate::config::config::ModelConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Binary sentiment label derived from a probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Positive iff score >= 0.5
    pub fn from_score(score: f64) -> Self {
        if score >= 0.5 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

/// Probability scorer for positive sentiment
///
/// Scoring is a pure function of the input plus immutable loaded state, so
/// a single instance is shared read-only across concurrent requests.
#[cfg_attr(test, mockall::automock)]
pub trait Scorer: Send + Sync {
    /// Probability in [0, 1] that the text expresses positive sentiment
    fn score(&self, text: &str) -> f64;

    /// Short name of the scoring backend
    fn backend(&self) -> &'static str;
}

/// Select the scorer once at startup.
///
/// Model unavailability is non-fatal: any load failure degrades to the
/// keyword fallback.
pub fn create_scorer(config: &ModelConfig) -> Arc<dyn Scorer> {
    match ModelScorer::load(&config.dir) {
        Ok(scorer) => {
            info!(
                model_dir = %config.dir.display(),
                model_version = %config.version,
                "Sentiment model loaded"
            );
            Arc::new(scorer)
        }
        Err(e) => {
            warn!(
                model_dir = %config.dir.display(),
                error = %e,
                "Model unavailable, falling back to keyword scoring"
            );
            Arc::new(KeywordScorer::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_threshold_is_inclusive_at_half() {
        assert_eq!(Sentiment::from_score(0.5), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0.499), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(1.0), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0.0), Sentiment::Negative);
    }

    #[test]
    fn labels_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&Sentiment::Negative).unwrap(),
            "\"negative\""
        );
    }

    #[test]
    fn missing_model_dir_selects_keyword_fallback() {
        let config = ModelConfig {
            dir: std::path::PathBuf::from("./does/not/exist"),
            version: "test".into(),
        };
        let scorer = create_scorer(&config);
        assert_eq!(scorer.backend(), "keyword");
    }
}

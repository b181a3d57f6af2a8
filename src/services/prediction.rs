//! Prediction service
//!
//! Orchestrates a single inference request: times the scoring call,
//! derives the binary label, emits one telemetry event, returns the
//! response payload.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::scoring::{Scorer, Sentiment};

/// Outcome of a single prediction call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub sentiment: Sentiment,
    pub score: f64,
    pub model_version: String,
    pub latency_ms: f64,
}

#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Score text and derive its sentiment label.
    ///
    /// Every call performs full inference; there is no retry and no
    /// caching. Exactly one telemetry event is emitted per call.
    async fn predict(&self, text: &str) -> Result<Prediction>;
}

pub struct PredictionServiceImpl {
    scorer: Arc<dyn Scorer>,
    model_version: String,
}

impl PredictionServiceImpl {
    pub fn new(scorer: Arc<dyn Scorer>, model_version: String) -> Self {
        Self {
            scorer,
            model_version,
        }
    }
}

#[async_trait]
impl PredictionService for PredictionServiceImpl {
    async fn predict(&self, text: &str) -> Result<Prediction> {
        let started = Instant::now();
        let score = self.scorer.score(text);
        let sentiment = Sentiment::from_score(score);
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

        info!(
            prediction_id = %Uuid::new_v4(),
            score,
            sentiment = %sentiment,
            model_version = %self.model_version,
            latency_ms,
            backend = self.scorer.backend(),
            "prediction"
        );

        Ok(Prediction {
            sentiment,
            score,
            model_version: self.model_version.clone(),
            latency_ms,
        })
    }
}

pub fn create_prediction_service(
    scorer: Arc<dyn Scorer>,
    model_version: String,
) -> Box<dyn PredictionService> {
    Box::new(PredictionServiceImpl::new(scorer, model_version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::MockScorer;
    use rstest::rstest;

    fn service_with_fixed_score(score: f64) -> PredictionServiceImpl {
        let mut scorer = MockScorer::new();
        scorer.expect_score().return_const(score);
        scorer.expect_backend().return_const("mock");
        PredictionServiceImpl::new(Arc::new(scorer), "test".into())
    }

    #[rstest]
    #[case(0.5, Sentiment::Positive)]
    #[case(0.51, Sentiment::Positive)]
    #[case(0.49, Sentiment::Negative)]
    #[case(0.0, Sentiment::Negative)]
    #[case(1.0, Sentiment::Positive)]
    #[tokio::test]
    async fn label_follows_score_threshold(#[case] score: f64, #[case] expected: Sentiment) {
        let service = service_with_fixed_score(score);
        let prediction = service.predict("some text").await.unwrap();
        assert_eq!(prediction.sentiment, expected);
        assert_eq!(prediction.score, score);
    }

    #[tokio::test]
    async fn latency_is_non_negative_and_version_is_echoed() {
        let service = service_with_fixed_score(0.8);
        let prediction = service.predict("some text").await.unwrap();
        assert!(prediction.latency_ms >= 0.0);
        assert_eq!(prediction.model_version, "test");
    }
}

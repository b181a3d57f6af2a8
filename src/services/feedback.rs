//! Feedback service
//!
//! Captures a client's correctness judgment on a prior prediction and
//! emits it to the telemetry sink. Invalid judgments are logged at warn
//! severity so alerting can key on misclassification rate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::scoring::Sentiment;

/// A correctness judgment on a prior prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub text: String,
    pub predicted: Sentiment,
    pub score: f64,
    pub is_valid: bool,
    pub model_version: Option<String>,
}

#[async_trait]
pub trait FeedbackService: Send + Sync {
    /// Record a feedback event. Always acknowledges; there is no
    /// validation failure path.
    async fn record(&self, feedback: Feedback) -> Result<()>;
}

pub struct FeedbackServiceImpl {
    model_version: String,
}

impl FeedbackServiceImpl {
    pub fn new(model_version: String) -> Self {
        Self { model_version }
    }
}

#[async_trait]
impl FeedbackService for FeedbackServiceImpl {
    async fn record(&self, feedback: Feedback) -> Result<()> {
        let model_version = feedback
            .model_version
            .as_deref()
            .unwrap_or(&self.model_version);

        if feedback.is_valid {
            info!(
                is_valid = feedback.is_valid,
                predicted = %feedback.predicted,
                score = feedback.score,
                model_version = %model_version,
                "user_feedback"
            );
        } else {
            warn!(
                is_valid = feedback.is_valid,
                predicted = %feedback.predicted,
                score = feedback.score,
                model_version = %model_version,
                "user_feedback"
            );
        }

        Ok(())
    }
}

pub fn create_feedback_service(model_version: String) -> Box<dyn FeedbackService> {
    Box::new(FeedbackServiceImpl::new(model_version))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(is_valid: bool, model_version: Option<String>) -> Feedback {
        Feedback {
            text: "Great flight".into(),
            predicted: Sentiment::Positive,
            score: 0.9,
            is_valid,
            model_version,
        }
    }

    #[tokio::test]
    async fn valid_feedback_is_acknowledged() {
        let service = FeedbackServiceImpl::new("test".into());
        assert!(service.record(feedback(true, None)).await.is_ok());
    }

    #[tokio::test]
    async fn invalid_feedback_is_acknowledged() {
        let service = FeedbackServiceImpl::new("test".into());
        assert!(service.record(feedback(false, Some("v2".into()))).await.is_ok());
    }
}

//! Prediction DTOs

use crate::scoring::Sentiment;
use crate::services::prediction::Prediction;
use serde::{Deserialize, Serialize};

/// Prediction request body
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Raw text to score
    pub text: String,
}

/// Prediction response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Binary sentiment label
    pub sentiment: Sentiment,
    /// Probability of positive sentiment, in [0, 1]
    pub score: f64,
    /// Version label of the serving model
    pub model_version: String,
    /// Wall-clock scoring latency in milliseconds
    pub latency_ms: f64,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            sentiment: prediction.sentiment,
            score: prediction.score,
            model_version: prediction.model_version,
            latency_ms: prediction.latency_ms,
        }
    }
}

//! Feedback DTOs

use crate::scoring::Sentiment;
use crate::services::feedback::Feedback;
use serde::{Deserialize, Serialize};

/// Feedback request body
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackRequest {
    /// Text the judged prediction was made on
    pub text: String,
    /// Label the service predicted
    pub predicted: Sentiment,
    /// Score the service returned
    pub score: f64,
    /// Whether the user judged the prediction correct
    pub is_valid: bool,
    /// Version label the prediction carried, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

/// Feedback acknowledgment body
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackAck {
    pub ok: bool,
}

impl From<FeedbackRequest> for Feedback {
    fn from(request: FeedbackRequest) -> Self {
        Self {
            text: request.text,
            predicted: request.predicted,
            score: request.score,
            is_valid: request.is_valid,
            model_version: request.model_version,
        }
    }
}

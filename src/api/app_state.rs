use crate::observability::AppMetrics;
use crate::services::feedback::FeedbackService;
use crate::services::prediction::PredictionService;
use std::sync::Arc;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Prediction service for inference orchestration
    pub prediction_service: Arc<dyn PredictionService>,
    /// Feedback service for correctness judgments
    pub feedback_service: Arc<dyn FeedbackService>,
    /// Request metrics
    pub metrics: Arc<AppMetrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("prediction_service", &"Arc<dyn PredictionService>")
            .field("feedback_service", &"Arc<dyn FeedbackService>")
            .field("metrics", &"Arc<AppMetrics>")
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        prediction_service: Box<dyn PredictionService>,
        feedback_service: Box<dyn FeedbackService>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            prediction_service: Arc::from(prediction_service),
            feedback_service: Arc::from(feedback_service),
            metrics,
        }
    }
}

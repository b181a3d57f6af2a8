//! Service modules

pub mod feedback;
pub mod prediction;

pub use feedback::{Feedback, FeedbackService, create_feedback_service};
pub use prediction::{Prediction, PredictionService, create_prediction_service};

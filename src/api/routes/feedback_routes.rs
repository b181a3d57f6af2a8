//! Feedback routes

use crate::api::handlers::feedback_handler::*;
use axum::{Router, routing::post};

use crate::api::app_state::AppState;

/// Create the feedback router
pub fn create_feedback_router() -> Router<AppState> {
    Router::new().route("/feedback", post(feedback))
}

//! Prediction routes

use crate::api::handlers::predict_handler::*;
use axum::{Router, routing::post};

use crate::api::app_state::AppState;

/// Create the prediction router
pub fn create_predict_router() -> Router<AppState> {
    Router::new().route("/predict", post(predict))
}

use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::predict_dto::*},
    error::AppError,
};

pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Prediction requested ({} chars)", request.text.len());

    let prediction = state.prediction_service.predict(&request.text).await?;
    state.metrics.record_prediction(prediction.latency_ms);

    Ok(Json(PredictResponse::from(prediction)))
}

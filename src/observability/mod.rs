//! Observability module
//!
//! Hand-rolled request metrics with Prometheus text exposition, plus a
//! health check endpoint.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

// ===== Metrics =====

/// Application request metrics
#[derive(Default)]
pub struct AppMetrics {
    pub predict_requests_total: AtomicU64,
    pub predict_latency_ms_sum: AtomicU64,
    pub feedback_total: AtomicU64,
    pub feedback_invalid_total: AtomicU64,
}

impl AppMetrics {
    /// Record a served prediction
    pub fn record_prediction(&self, latency_ms: f64) {
        self.predict_requests_total.fetch_add(1, Ordering::SeqCst);
        self.predict_latency_ms_sum
            .fetch_add(latency_ms.max(0.0) as u64, Ordering::SeqCst);
    }

    /// Record a feedback submission
    pub fn record_feedback(&self, is_valid: bool) {
        self.feedback_total.fetch_add(1, Ordering::SeqCst);
        if !is_valid {
            self.feedback_invalid_total.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Render metrics in Prometheus text format
    pub fn gather(&self) -> String {
        format!(
            r#"# HELP predict_requests_total Total prediction requests
# TYPE predict_requests_total counter
predict_requests_total {}
# HELP predict_latency_seconds Prediction latency in seconds
# TYPE predict_latency_seconds histogram
predict_latency_seconds_sum {}
predict_latency_seconds_count {}
# HELP feedback_total Total feedback submissions
# TYPE feedback_total counter
feedback_total {}
# HELP feedback_invalid_total Feedback submissions judging the prediction wrong
# TYPE feedback_invalid_total counter
feedback_invalid_total {}
"#,
            self.predict_requests_total.load(Ordering::SeqCst),
            self.predict_latency_ms_sum.load(Ordering::SeqCst) as f64 / 1000.0,
            self.predict_requests_total.load(Ordering::SeqCst),
            self.feedback_total.load(Ordering::SeqCst),
            self.feedback_invalid_total.load(Ordering::SeqCst),
        )
    }
}

// ===== Health check =====

/// Health check payload
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: f64,
    pub scorer_backend: &'static str,
}

/// State backing the observability routes
#[derive(Clone)]
pub struct ObservabilityState {
    pub metrics: Arc<AppMetrics>,
    pub version: String,
    pub scorer_backend: &'static str,
    started_at: Instant,
}

impl ObservabilityState {
    pub fn new(version: String, scorer_backend: &'static str, metrics: Arc<AppMetrics>) -> Self {
        Self {
            metrics,
            version,
            scorer_backend,
            started_at: Instant::now(),
        }
    }
}

/// Create the router serving /healthz and /metrics
pub fn create_observability_router(state: ObservabilityState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics))
        .with_state(state)
}

async fn healthz(State(state): State<ObservabilityState>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_seconds: state.started_at.elapsed().as_secs_f64(),
        scorer_backend: state.scorer_backend,
    })
}

async fn metrics(State(state): State<ObservabilityState>) -> impl IntoResponse {
    state.metrics.gather()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_accumulate_and_render() {
        let metrics = AppMetrics::default();
        metrics.record_prediction(12.0);
        metrics.record_prediction(8.0);
        metrics.record_feedback(true);
        metrics.record_feedback(false);

        let rendered = metrics.gather();
        assert!(rendered.contains("predict_requests_total 2"));
        assert!(rendered.contains("feedback_total 2"));
        assert!(rendered.contains("feedback_invalid_total 1"));
    }
}

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::api::app_state::AppState;
use crate::api::create_router;
use crate::observability::AppMetrics;
use crate::scoring::{KeywordScorer, Scorer};
use crate::services::feedback::FeedbackServiceImpl;
use crate::services::prediction::PredictionServiceImpl;

fn test_router() -> Router {
    let scorer: Arc<dyn Scorer> = Arc::new(KeywordScorer::new());
    let state = AppState::new(
        Box::new(PredictionServiceImpl::new(scorer, "test".into())),
        Box::new(FeedbackServiceImpl::new("test".into())),
        Arc::new(AppMetrics::default()),
    );
    create_router(state)
}

async fn post_json(router: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

mod predict_endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn positive_text_returns_positive_label() {
        let (status, body) = post_json(
            test_router(),
            "/predict",
            json!({"text": "I love this product, amazing!"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sentiment"], "positive");
        let score = body["score"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&score));
        assert_eq!(body["model_version"], "test");
        assert!(body["latency_ms"].as_f64().unwrap() >= 0.0);
    }

    #[tokio::test]
    async fn negative_text_returns_negative_label() {
        let (status, body) =
            post_json(test_router(), "/predict", json!({"text": "I hate this, awful!"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sentiment"], "negative");
    }

    #[tokio::test]
    async fn label_is_consistent_with_score() {
        let (_, body) = post_json(
            test_router(),
            "/predict",
            json!({"text": "nothing remarkable either way"}),
        )
        .await;

        let score = body["score"].as_f64().unwrap();
        let expected = if score >= 0.5 { "positive" } else { "negative" };
        assert_eq!(body["sentiment"], expected);
    }

    #[tokio::test]
    async fn malformed_body_is_rejected_before_service_logic() {
        let (status, _) = post_json(test_router(), "/predict", json!({"not_text": 1})).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn missing_content_type_is_rejected() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/predict")
                    .body(Body::from(json!({"text": "hello"}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}

mod feedback_endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn valid_feedback_is_acknowledged() {
        let (status, body) = post_json(
            test_router(),
            "/feedback",
            json!({
                "text": "Great flight",
                "predicted": "positive",
                "score": 0.9,
                "is_valid": true
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn invalid_feedback_is_acknowledged() {
        let (status, body) = post_json(
            test_router(),
            "/feedback",
            json!({
                "text": "Delayed flight",
                "predicted": "positive",
                "score": 0.8,
                "is_valid": false,
                "model_version": "v3"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn unknown_predicted_label_is_rejected() {
        let (status, _) = post_json(
            test_router(),
            "/feedback",
            json!({
                "text": "x",
                "predicted": "meh",
                "score": 0.5,
                "is_valid": true
            }),
        )
        .await;

        assert!(status.is_client_error());
    }
}

//! HTTP client module
//!
//! The client side of the two REST calls: prediction with a bounded
//! retry loop, feedback as a single attempt.

use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

use crate::api::dto::feedback_dto::FeedbackRequest;
use crate::api::dto::predict_dto::{PredictRequest, PredictResponse};
use crate::error::{AppError, Result};

const MAX_ATTEMPTS: u32 = 3;
const BACKOFF_STEP: Duration = Duration::from_millis(300);
const PREDICT_TIMEOUT: Duration = Duration::from_secs(8);
const FEEDBACK_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the prediction API
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from `API_BASE_URL` / `API_URL`, defaulting to
    /// the local server address
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("API_BASE_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Call POST /predict.
    ///
    /// Retries transient failures up to 3 attempts with linearly
    /// increasing backoff (0.3s x attempt) before surfacing a network
    /// error.
    pub async fn predict(&self, text: &str) -> Result<PredictResponse> {
        let mut last_err = String::new();

        for attempt in 1..=MAX_ATTEMPTS {
            match self
                .http
                .post(self.url("/predict"))
                .timeout(PREDICT_TIMEOUT)
                .json(&PredictRequest {
                    text: text.to_string(),
                })
                .send()
                .await
            {
                Ok(response) if response.status().is_success() => {
                    return Ok(response.json::<PredictResponse>().await?);
                }
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    last_err = format!("HTTP {status}: {}", truncate(&body, 200));
                }
                Err(e) => last_err = e.to_string(),
            }

            debug!(attempt, error = %last_err, "predict attempt failed");
            sleep(BACKOFF_STEP * attempt).await;
        }

        Err(AppError::Network(format!(
            "/predict failed after {MAX_ATTEMPTS} attempts: {last_err}"
        )))
    }

    /// Call POST /feedback. One attempt; reports HTTP-level success only.
    pub async fn send_feedback(&self, feedback: &FeedbackRequest) -> bool {
        match self
            .http
            .post(self.url("/feedback"))
            .timeout(FEEDBACK_TIMEOUT)
            .json(feedback)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

fn truncate(s: &str, max: usize) -> &str {
    s.get(..max).unwrap_or(s)
}

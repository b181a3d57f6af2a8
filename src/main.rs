use polarity::api::{self, app_state::AppState};
use polarity::config::loader::ConfigLoader;
use polarity::observability::{AppMetrics, ObservabilityState, create_observability_router};
use polarity::scoring::create_scorer;
use polarity::services::{create_feedback_service, create_prediction_service};
use polarity::telemetry;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;

    let _telemetry_guard = telemetry::init(&config.telemetry, &config.logging)?;

    info!(app = %config.app_name, environment = %config.environment, "Starting Polarity...");
    info!("Configuration loaded successfully");

    let scorer = create_scorer(&config.model);
    info!(backend = scorer.backend(), "Scorer initialized");

    let prediction_service =
        create_prediction_service(scorer.clone(), config.model.version.clone());
    let feedback_service = create_feedback_service(config.model.version.clone());
    info!("Services initialized");

    let metrics = Arc::new(AppMetrics::default());
    let app_state = AppState::new(prediction_service, feedback_service, metrics.clone());
    info!("Application state created");

    let observability_state = ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        scorer.backend(),
        metrics,
    );
    let router =
        create_observability_router(observability_state).merge(api::create_router(app_state));
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

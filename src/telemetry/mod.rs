//! Telemetry module
//!
//! Initializes the tracing stack that carries the structured events the
//! services emit. The telemetry connection string is required: startup
//! fails when it is absent.

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::config::{LoggingConfig, TelemetryConfig};
use crate::error::{AppError, Result};

/// Initialize the telemetry/logging stack.
///
/// Returns the guard keeping the non-blocking file writer alive; the
/// caller holds it for the process lifetime.
pub fn init(telemetry: &TelemetryConfig, logging: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if telemetry.connection_string.trim().is_empty() {
        return Err(AppError::Config(
            "telemetry connection string is required".to_string(),
        ));
    }

    let guard = match &logging.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "polarity.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            if logging.structured {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(env_filter(logging))
                    .with_writer(writer)
                    .init();
            } else {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter(logging))
                    .with_writer(writer)
                    .init();
            }
            Some(guard)
        }
        None => {
            if logging.structured {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(env_filter(logging))
                    .init();
            } else {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter(logging))
                    .init();
            }
            None
        }
    };

    info!("Telemetry initialized");
    Ok(guard)
}

fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_connection_string_fails_startup() {
        let err = init(&TelemetryConfig::default(), &LoggingConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}

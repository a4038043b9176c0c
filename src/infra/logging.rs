//! Logging setup. `RUST_LOG` overrides the configured level when set.

use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

pub fn init(config: &LogConfig) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        // The chain worker thread is named; keep that visible in the output.
        .with_thread_names(true)
        .try_init()
        .map_err(AppError::LoggingInit)
}

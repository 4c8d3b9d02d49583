//! Tracing initialization

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Result};

/// Initialize the tracing subscriber
///
/// The filter is seeded from the configured log level; `RUST_LOG` style
/// directives are accepted there too.
pub fn init_tracing(config: &Config) -> Result<()> {
    let log_level = config.service.log_level.clone();

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Tracing initialized for service: {}", config.service.name);

    Ok(())
}

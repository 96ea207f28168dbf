//! Logging setup
//!
//! `RUST_LOG` filters (default `fastqueue=info`), `FASTQUEUE_LOG_FORMAT=json`
//! switches to structured JSON. Output goes to stderr so it never mixes with
//! the rendered waitlist on stdout.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "fastqueue=info,fastqueue_core=info";

pub fn init_logging() -> Result<()> {
    let log_format =
        std::env::var("FASTQUEUE_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("Failed to create env filter")?;

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install log subscriber")?;
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install log subscriber")?;
        }
    }

    Ok(())
}

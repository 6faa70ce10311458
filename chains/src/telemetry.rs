//! Console logging setup.
//!
//! Provides [`Telemetry`] for configuring the `tracing` subscriber. Only
//! available with the `telemetry` feature.

use std::env;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log level applied when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging configuration for the CLI.
///
/// `RUST_LOG` takes precedence over the programmatic level.
#[derive(Debug, Default)]
pub struct Telemetry {
    log_level: Option<String>,
}

impl Telemetry {
    /// Creates a new, empty [`Telemetry`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level filter used when `RUST_LOG` is not set.
    ///
    /// Accepts any valid [`EnvFilter`] directive string (e.g. `"debug"`,
    /// `"chains=trace"`).
    #[must_use]
    pub fn with_log_level(mut self, level: Option<&str>) -> Self {
        self.log_level = level.map(str::to_owned);
        self
    }

    /// Installs the global subscriber, writing to stderr.
    ///
    /// A second call is a no-op.
    pub fn register(self) {
        let from_env = env::var("RUST_LOG")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .and_then(|v| EnvFilter::try_new(v).ok());
        let filter = from_env.unwrap_or_else(|| {
            let fallback = self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
            EnvFilter::try_new(fallback).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
        });

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();

        if installed.is_ok() {
            tracing::debug!("console logging registered");
        }
    }
}

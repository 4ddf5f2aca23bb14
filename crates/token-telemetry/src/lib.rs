//! # Token Telemetry
//!
//! Logging and metrics for processes hosting tax-token instances.
//!
//! ## Components
//!
//! - **Logging**: `tracing-subscriber` with an `EnvFilter`, text or JSON output
//! - **Metrics**: Prometheus counters for transfers, burns and deliveries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use token_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_telemetry(TelemetryConfig::from_env()).expect("telemetry");
//!     // host tokens here
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `tax-token` | Service name in log records |
//! | `TT_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `TT_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `TT_JSON_LOGS` | `false` | JSON log records |

#![warn(missing_docs)]

mod config;
mod logging;
pub mod metrics;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use logging::{build_filter, init_logging};
pub use metrics::{
    encode_metrics, record_allowance_update, record_amounts, record_invariant_violation,
    record_transfer, register_metrics, MetricsHandle, ALLOWANCE_UPDATES, INVARIANT_VIOLATIONS,
    TOKENS_BURNED, TOKENS_DELIVERED, TRANSFERS_TOTAL,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The global subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    /// Metric registration or encoding failed.
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// Invalid filter directive or other bad setting.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Register metrics, then install logging.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let metrics = register_metrics()?;
    init_logging(&config)?;

    Ok(TelemetryGuard {
        config,
        _metrics: metrics,
    })
}

/// Keeps telemetry state alive for the lifetime of the host.
pub struct TelemetryGuard {
    config: TelemetryConfig,
    _metrics: MetricsHandle,
}

impl TelemetryGuard {
    /// Configuration the guard was created with.
    pub fn config(&self) -> &TelemetryConfig {
        &self.config
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.config.service_name, "Shutting down telemetry");
    }
}

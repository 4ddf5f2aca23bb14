//! Prometheus metrics for tax-token hosts.
//!
//! All metrics follow the naming convention: `tt_<area>_<metric>_<unit>`.
//! Token amounts are exported as `f64` base units, so very large values lose
//! precision.

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Transfer attempts by operation and outcome
    pub static ref TRANSFERS_TOTAL: CounterVec = CounterVec::new(
        Opts::new("tt_transfers_total", "Transfer attempts"),
        &["operation", "outcome"]  // operation: transfer/transfer_from, outcome: success/failure
    ).expect("metric creation failed");

    /// Allowance changes by operation
    pub static ref ALLOWANCE_UPDATES: CounterVec = CounterVec::new(
        Opts::new("tt_allowance_updates_total", "Allowance changes"),
        &["operation", "outcome"]  // operation: approve/increase/decrease
    ).expect("metric creation failed");

    /// Base units burned as tax
    pub static ref TOKENS_BURNED: Counter = Counter::new(
        "tt_tokens_burned_total",
        "Base units destroyed by the transfer tax"
    ).expect("metric creation failed");

    /// Base units delivered to recipients
    pub static ref TOKENS_DELIVERED: Counter = Counter::new(
        "tt_tokens_delivered_total",
        "Base units credited to transfer recipients"
    ).expect("metric creation failed");

    /// Ledger invariant violations observed by a host
    pub static ref INVARIANT_VIOLATIONS: Counter = Counter::new(
        "tt_invariant_violations_total",
        "Ledger invariant violations detected after a mutation"
    ).expect("metric creation failed");
}

/// Handle returned once metrics are registered.
#[derive(Debug, Clone, Copy)]
pub struct MetricsHandle {
    _private: (),
}

/// Register all metrics with the global registry. Safe to call repeatedly.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(TRANSFERS_TOTAL.clone()),
        Box::new(ALLOWANCE_UPDATES.clone()),
        Box::new(TOKENS_BURNED.clone()),
        Box::new(TOKENS_DELIVERED.clone()),
        Box::new(INVARIANT_VIOLATIONS.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle { _private: () })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Count one transfer attempt.
pub fn record_transfer(operation: &str, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    TRANSFERS_TOTAL
        .with_label_values(&[operation, outcome])
        .inc();
}

/// Count one allowance change.
pub fn record_allowance_update(operation: &str, success: bool) {
    let outcome = if success { "success" } else { "failure" };
    ALLOWANCE_UPDATES
        .with_label_values(&[operation, outcome])
        .inc();
}

/// Add the tax and net amounts of a completed transfer.
pub fn record_amounts(burned: f64, delivered: f64) {
    TOKENS_BURNED.inc_by(burned);
    TOKENS_DELIVERED.inc_by(delivered);
}

/// Count one invariant violation.
pub fn record_invariant_violation() {
    INVARIANT_VIOLATIONS.inc();
}

//! Prometheus metrics for command execution.
//!
//! The runtime records metrics through the `metrics` facade. Nothing is
//! collected until a recorder is installed, which [`install_recorder`] does
//! for Prometheus.
//!
//! # Example
//!
//! ```rust,no_run
//! use todo_lists_runtime::metrics::install_recorder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let handle = install_recorder()?;
//! println!("{}", handle.render());
//! # Ok(())
//! # }
//! ```

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use thiserror::Error;

/// Commands processed, labelled by `action` and `outcome`
pub const COMMANDS_TOTAL: &str = "todo_lists_commands_total";

/// Time spent reducing a command
pub const COMMAND_DURATION_SECONDS: &str = "todo_lists_command_duration_seconds";

/// Sessions created on first use
pub const SESSIONS_CREATED_TOTAL: &str = "todo_lists_sessions_created_total";

/// Storage loads or saves that failed
pub const STORAGE_ERRORS_TOTAL: &str = "todo_lists_storage_errors_total";

/// Errors from metrics setup.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build the exporter
    #[error("Failed to build metrics exporter: {0}")]
    Build(String),
    /// Failed to install the recorder
    #[error("Failed to install metrics recorder: {0}")]
    Install(String),
}

/// Installs a global Prometheus recorder and describes every metric.
///
/// # Errors
///
/// Returns [`MetricsError`] if the exporter cannot be built, or if a
/// recorder is already installed.
pub fn install_recorder() -> Result<PrometheusHandle, MetricsError> {
    let builder = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Suffix("duration_seconds".to_string()),
            &[0.000_01, 0.000_05, 0.000_1, 0.000_5, 0.001, 0.005, 0.01, 0.05, 0.1],
        )
        .map_err(|e| MetricsError::Build(e.to_string()))?;

    let handle = builder
        .install_recorder()
        .map_err(|e| MetricsError::Install(e.to_string()))?;

    register_metrics();
    tracing::info!("Metrics recorder installed");
    Ok(handle)
}

/// Register all metric descriptions.
fn register_metrics() {
    describe_counter!(COMMANDS_TOTAL, "Total number of commands processed");
    describe_histogram!(
        COMMAND_DURATION_SECONDS,
        "Time taken to reduce a command against a session"
    );
    describe_counter!(
        SESSIONS_CREATED_TOTAL,
        "Total number of sessions created on first use"
    );
    describe_counter!(
        STORAGE_ERRORS_TOTAL,
        "Total number of failed session loads and saves"
    );
}

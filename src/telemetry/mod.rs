//! Telemetry module
//!
//! Structured logging and Prometheus metrics

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{
    install_exporter, record_issued, record_poll_failure, record_resolved, set_live_events,
    set_open_signals, PollStage, LIVE_EVENTS, OPEN_SIGNALS, POLL_FAILURES, SIGNALS_ISSUED,
    SIGNALS_RESOLVED,
};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)?;

    if let Some(port) = config.metrics_port {
        install_exporter(port)?;
    }

    Ok(())
}

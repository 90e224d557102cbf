//! Prometheus metrics

use crate::league::LeagueMode;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::{Ipv4Addr, SocketAddr};

pub const SIGNALS_ISSUED: &str = "courtside_signals_issued_total";
pub const SIGNALS_RESOLVED: &str = "courtside_signals_resolved_total";
pub const POLL_FAILURES: &str = "courtside_poll_failures_total";
pub const LIVE_EVENTS: &str = "courtside_live_events";
pub const OPEN_SIGNALS: &str = "courtside_open_signals";

/// Which upstream call failed during a poll
#[derive(Debug, Clone, Copy)]
pub enum PollStage {
    Scoreboard,
    Odds,
}

impl PollStage {
    fn as_str(&self) -> &'static str {
        match self {
            PollStage::Scoreboard => "scoreboard",
            PollStage::Odds => "odds",
        }
    }
}

/// Serve a scrape endpoint on all interfaces
pub fn install_exporter(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics exporter: {}", e))?;
    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}

pub fn record_issued(league: LeagueMode, count: u64) {
    metrics::counter!(SIGNALS_ISSUED, "league" => league.as_str()).increment(count);
}

pub fn record_resolved(league: LeagueMode, count: u64) {
    metrics::counter!(SIGNALS_RESOLVED, "league" => league.as_str()).increment(count);
}

pub fn record_poll_failure(league: LeagueMode, stage: PollStage) {
    metrics::counter!(
        POLL_FAILURES,
        "league" => league.as_str(),
        "stage" => stage.as_str()
    )
    .increment(1);
}

pub fn set_live_events(league: LeagueMode, count: usize) {
    metrics::gauge!(LIVE_EVENTS, "league" => league.as_str()).set(count as f64);
}

pub fn set_open_signals(league: LeagueMode, count: usize) {
    metrics::gauge!(OPEN_SIGNALS, "league" => league.as_str()).set(count as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_issued(LeagueMode::Nba, 2);
        record_resolved(LeagueMode::Ncaab, 1);
        record_poll_failure(LeagueMode::Nba, PollStage::Odds);
        set_live_events(LeagueMode::Nba, 4);
        set_open_signals(LeagueMode::Nba, 3);
    }

    #[test]
    fn test_stage_labels() {
        assert_eq!(PollStage::Scoreboard.as_str(), "scoreboard");
        assert_eq!(PollStage::Odds.as_str(), "odds");
    }
}

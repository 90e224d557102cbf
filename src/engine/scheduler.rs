//! Single-task poll scheduler

use super::Engine;
use crate::league::LeagueMode;
use chrono::Utc;
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::info;

/// Drives league polls on a fixed cadence
///
/// Each league gets its own interval; the second league starts half a cycle
/// after the first. Ticks are multiplexed in one `select!` loop, so a poll
/// always runs to completion before the next one starts.
pub struct Scheduler {
    engine: Engine,
    poll_every: Duration,
}

impl Scheduler {
    pub fn new(engine: Engine, poll_every: Duration) -> Self {
        Self { engine, poll_every }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Run until Ctrl-C
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
        })
        .await
    }

    /// Run until `shutdown` completes or a store write fails
    pub async fn run_until<F>(&mut self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()>,
    {
        let modes = self.engine.modes();
        let Some(&first_mode) = modes.first() else {
            return Ok(());
        };
        let second_mode = modes.get(1).copied();

        let start = Instant::now();
        let mut first = Self::interval(start, self.poll_every);
        let mut second =
            second_mode.map(|_| Self::interval(start + self.poll_every / 2, self.poll_every));

        info!(
            leagues = ?modes,
            poll_secs = self.poll_every.as_secs(),
            "Scheduler started"
        );

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = first.tick() => {
                    self.poll(first_mode).await?;
                }
                _ = Self::tick(&mut second) => {
                    if let Some(mode) = second_mode {
                        self.poll(mode).await?;
                    }
                }
                _ = &mut shutdown => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        Ok(())
    }

    fn interval(start: Instant, period: Duration) -> Interval {
        let mut interval = interval_at(start, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    }

    /// Tick an optional interval; never resolves when absent
    async fn tick(interval: &mut Option<Interval>) {
        match interval {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    async fn poll(&mut self, mode: LeagueMode) -> anyhow::Result<()> {
        let report = self.engine.poll_league(mode, Utc::now()).await?;
        tracing::trace!(league = %mode, ?report, "Poll report");
        Ok(())
    }
}

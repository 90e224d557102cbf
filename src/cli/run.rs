//! Run command implementation

use crate::config::Config;
use crate::engine::{Collaborators, Engine, Scheduler};
use crate::feed::EspnScoreboard;
use crate::league::LeagueMode;
use crate::odds::{OddsApiClient, QuoteFeed};
use crate::roster::StarTable;
use crate::store::JsonFileStore;
use anyhow::Context;
use clap::Args;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Leagues to monitor (comma-separated); all configured leagues when omitted
    #[arg(short, long, value_delimiter = ',')]
    pub leagues: Vec<LeagueMode>,
}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let leagues = config.select_leagues(&self.leagues)?;
        let stars = StarTable::load(&config.engine.stars_file);

        let scoreboard = EspnScoreboard::new(Duration::from_secs(config.engine.feed_timeout_secs))
            .context("Failed to build scoreboard client")?;
        let quotes = OddsApiClient::from_config(&config.odds)
            .context("Failed to build odds client")?
            .map(|client| Box::new(client) as Box<dyn QuoteFeed>);
        if quotes.is_none() {
            tracing::warn!("No odds API key configured, staking at the default price");
        }

        let store = JsonFileStore::new(&config.engine.data_dir);
        let engine = Engine::open(
            leagues,
            config.kelly.clone(),
            &config.odds,
            stars,
            Collaborators {
                scoreboard: Box::new(scoreboard),
                quotes,
                store: Box::new(store),
            },
        )
        .await
        .with_context(|| {
            format!(
                "Failed to restore state from {}",
                config.engine.data_dir.display()
            )
        })?;

        let mut scheduler = Scheduler::new(engine, Duration::from_secs(config.engine.poll_secs));
        scheduler.run().await?;

        let signals = scheduler.engine().signals();
        tracing::info!(
            signals = signals.len(),
            open = signals.open_count(),
            "Engine stopped"
        );
        Ok(())
    }
}

//! Scoreboard feed module
//!
//! Normalized per-tick game snapshots and the live scoreboard adapter

mod espn;
mod types;

pub use espn::EspnScoreboard;
pub use types::{
    FeedError, FinalScore, GameSnapshot, Scoreboard, ScoringLeader, ShotSplit, Side, TeamLine,
};

use crate::league::LeagueConfig;
use async_trait::async_trait;

/// Trait for scoreboard feed implementations
#[async_trait]
pub trait ScoreboardFeed: Send + Sync {
    /// Fetch live snapshots and completed finals for one league
    async fn fetch(&self, league: &LeagueConfig) -> Result<Scoreboard, FeedError>;
}

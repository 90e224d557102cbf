//! League configuration
//!
//! Static per-league parameters: game length, period structure and every
//! heuristic threshold. One `LeagueConfig` value is built per monitored
//! league and never mutated afterwards.

mod clock;
mod config;

pub use clock::parse_clock;
pub use config::{
    CoilWindow, LeagueConfig, LeagueMode, PeriodStyle, ScoreBand, ShotGate, SoftProfile,
};

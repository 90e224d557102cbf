//! courtside: live basketball edge signals with Kelly staking
//!
//! This library provides the core components for:
//! - Per-league configuration and game clock arithmetic
//! - Scoreboard snapshots from the ESPN public feed
//! - Scoring durability and supporting cast analysis
//! - Score momentum tracking and damage-lock detection
//! - Signal aggregation into one directional pick per game
//! - Moneyline quote matching and fractional Kelly staking
//! - Signal lifecycle: dedup, line movement capture, resolution
//! - JSON persistence and a single-task poll scheduler
//! - Structured logging and Prometheus metrics

pub mod analysis;
pub mod cli;
pub mod config;
pub mod engine;
pub mod feed;
pub mod league;
pub mod lifecycle;
pub mod momentum;
pub mod odds;
pub mod risk;
pub mod roster;
pub mod signal;
pub mod store;
pub mod telemetry;

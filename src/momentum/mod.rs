//! Score momentum tracking
//!
//! Keeps a short, spaced-out score history per event and decides whether a
//! trailing team's deficit has stopped moving ("damage-locked").

mod tracker;
mod types;

pub use tracker::{MomentumTracker, HISTORY_CAP, MIN_SPACING_SECS};
pub use types::{DamageLock, ScoreSample};

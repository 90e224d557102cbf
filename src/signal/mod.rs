//! Signal aggregation
//!
//! Turns analyzer output for one live event into a single directional pick
//! plus the bet type that is still actionable at this point of the game.

mod aggregator;
mod recommend;
mod types;

pub use aggregator::SignalAggregator;
pub use recommend::{recommend, BetKind, Recommendation};
pub use types::{CoilTier, Evidence, HomeCourt, Pick, SignalType};

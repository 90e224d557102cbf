//! Staking
//!
//! Urgency tiers and fractional-Kelly sizing against American moneylines

mod kelly;
mod urgency;

pub use kelly::{implied_probability, win_profit, KellySizer, Stake};
pub use urgency::{Urgency, UrgencyTier};

//! Kelly criterion stake sizing for American moneylines

use crate::config::KellyConfig;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Break-even probability implied by an American price
pub fn implied_probability(price: i32) -> Decimal {
    let p = Decimal::from(price);
    if price < 0 {
        p.abs() / (p.abs() + dec!(100))
    } else {
        dec!(100) / (p + dec!(100))
    }
}

/// Net payout per unit staked (b in the Kelly formula)
fn payout_ratio(price: i32) -> Decimal {
    let p = Decimal::from(price);
    if price > 0 {
        p / dec!(100)
    } else if price < 0 {
        dec!(100) / p.abs()
    } else {
        Decimal::ZERO
    }
}

/// Profit on a winning stake at an American price
pub fn win_profit(stake: Decimal, price: i32) -> Decimal {
    let p = Decimal::from(price);
    if price > 0 {
        stake * p / dec!(100)
    } else if price < 0 {
        stake * dec!(100) / p.abs()
    } else {
        Decimal::ZERO
    }
}

/// A sized stake
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stake {
    /// Assumed edge over the market
    pub edge: Decimal,
    /// Implied probability plus edge, capped
    pub win_prob: Decimal,
    /// Share of bankroll (0-1)
    pub fraction: Decimal,
    /// Whole-unit amount of the nominal bankroll
    pub amount: Decimal,
}

impl Stake {
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

/// Fractional Kelly calculator
#[derive(Debug, Clone)]
pub struct KellySizer {
    config: KellyConfig,
}

impl KellySizer {
    pub fn new(config: KellyConfig) -> Self {
        Self { config }
    }

    /// Assumed edge for a signal count
    pub fn edge(&self, signal_count: u32) -> Decimal {
        let extra = Decimal::from(signal_count.saturating_sub(1));
        (self.config.base_edge + extra * self.config.edge_per_signal).min(self.config.max_edge)
    }

    /// Size a stake
    ///
    /// f* = (b·p - q) / b on the edge-adjusted probability, floored at zero,
    /// scaled by the Kelly fraction and urgency, capped, then raised to the
    /// minimum ticket if positive.
    pub fn size(
        &self,
        implied_prob: Decimal,
        price: i32,
        signal_count: u32,
        urgency_multiplier: Decimal,
    ) -> Stake {
        let edge = self.edge(signal_count);
        let win_prob = (implied_prob + edge).min(self.config.max_win_prob);

        let zero = Stake {
            edge,
            win_prob,
            fraction: Decimal::ZERO,
            amount: Decimal::ZERO,
        };
        if edge < self.config.min_edge {
            return zero;
        }

        let b = payout_ratio(price);
        if b <= Decimal::ZERO {
            return zero;
        }

        let q = Decimal::ONE - win_prob;
        let full = ((b * win_prob - q) / b).max(Decimal::ZERO);
        let mut fraction = full * self.config.kelly_fraction * urgency_multiplier;

        if fraction > self.config.max_stake_pct {
            fraction = self.config.max_stake_pct;
        }
        if fraction > Decimal::ZERO && fraction < self.config.min_stake_pct {
            fraction = self.config.min_stake_pct;
        }

        let amount = (self.config.bankroll * fraction)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .max(Decimal::ZERO);

        Stake {
            edge,
            win_prob,
            fraction,
            amount,
        }
    }
}

impl Default for KellySizer {
    fn default() -> Self {
        Self::new(KellyConfig::default())
    }
}

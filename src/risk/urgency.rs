//! Urgency tiers by elapsed share of the game

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyTier {
    /// Under 30% of the game played
    Developing,
    /// 30% to 60%
    Prime,
    /// 60% to 85%
    ActNow,
    /// Last 15%
    Closing,
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UrgencyTier::Developing => "DEVELOPING",
            UrgencyTier::Prime => "PRIME",
            UrgencyTier::ActNow => "ACT_NOW",
            UrgencyTier::Closing => "CLOSING",
        };
        f.write_str(s)
    }
}

/// Tier plus the stake multiplier it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Urgency {
    pub tier: UrgencyTier,
    pub multiplier: Decimal,
}

impl Urgency {
    /// Classify an elapsed game fraction (0-1)
    pub fn classify(game_fraction: Decimal) -> Self {
        let (tier, multiplier) = if game_fraction < dec!(0.30) {
            (UrgencyTier::Developing, dec!(0.70))
        } else if game_fraction < dec!(0.60) {
            (UrgencyTier::Prime, dec!(1.00))
        } else if game_fraction < dec!(0.85) {
            (UrgencyTier::ActNow, dec!(0.85))
        } else {
            (UrgencyTier::Closing, dec!(0.50))
        };
        Self { tier, multiplier }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (dec!(0), UrgencyTier::Developing, dec!(0.70)),
            (dec!(0.2999), UrgencyTier::Developing, dec!(0.70)),
            (dec!(0.30), UrgencyTier::Prime, dec!(1.00)),
            (dec!(0.5999), UrgencyTier::Prime, dec!(1.00)),
            (dec!(0.60), UrgencyTier::ActNow, dec!(0.85)),
            (dec!(0.85), UrgencyTier::Closing, dec!(0.50)),
            (dec!(1), UrgencyTier::Closing, dec!(0.50)),
        ];
        for (fraction, tier, multiplier) in cases {
            let u = Urgency::classify(fraction);
            assert_eq!(u.tier, tier, "fraction {}", fraction);
            assert_eq!(u.multiplier, multiplier);
        }
    }

    #[test]
    fn test_display_and_serde_agree() {
        let json = serde_json::to_string(&UrgencyTier::ActNow).unwrap();
        assert_eq!(json, "\"ACT_NOW\"");
        assert_eq!(UrgencyTier::ActNow.to_string(), "ACT_NOW");
    }
}

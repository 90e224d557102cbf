//! Actionable bet type for the current game state

use crate::feed::GameSnapshot;
use crate::league::LeagueConfig;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BetKind {
    /// Moneyline
    Ml,
    Spread,
    /// Too late, too lopsided or in overtime
    Watch,
}

impl fmt::Display for BetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BetKind::Ml => "ML",
            BetKind::Spread => "SPREAD",
            BetKind::Watch => "WATCH",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: BetKind,
    pub margin: i32,
    /// Regulation minutes left, rounded half away from zero
    pub minutes_remaining: Decimal,
    /// Suggested units; absent for `Watch`
    pub units: Option<Decimal>,
}

/// Classify the bet type from margin and time left
pub fn recommend(league: &LeagueConfig, snap: &GameSnapshot) -> Recommendation {
    let margin = snap.margin();
    let remaining = league.minutes_remaining(snap.period, &snap.clock);
    let watch = Recommendation {
        kind: BetKind::Watch,
        margin,
        minutes_remaining: remaining
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        units: None,
    };

    if league.is_overtime(snap.period) || remaining < dec!(3) {
        return watch;
    }

    let (mut kind, mut units) = match margin {
        m if m <= 5 => (BetKind::Ml, dec!(1.5)),
        m if m <= 10 => (BetKind::Spread, dec!(1.5)),
        m if m <= 20 => (BetKind::Spread, Decimal::ONE),
        _ => return watch,
    };

    if remaining < dec!(6) {
        if kind == BetKind::Ml {
            kind = BetKind::Spread;
        } else if margin > 15 {
            return watch;
        }
        units = units.min(Decimal::ONE);
    }

    Recommendation {
        kind,
        units: Some(units),
        ..watch
    }
}

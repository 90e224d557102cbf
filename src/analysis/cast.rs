//! Supporting cast strength behind an underperforming star

use crate::league::LeagueConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const STRONG_GAP: i32 = -8;
const MODERATE_GAP: i32 = -15;

/// How the rest of the roster is holding up without the star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastStrength {
    /// Cast gap at or above -8
    Strong,
    /// Cast gap in [-15, -8)
    Moderate,
    /// Cast gap below -15
    Weak,
}

impl CastStrength {
    pub fn from_gap(cast_gap: i32) -> Self {
        if cast_gap >= STRONG_GAP {
            CastStrength::Strong
        } else if cast_gap >= MODERATE_GAP {
            CastStrength::Moderate
        } else {
            CastStrength::Weak
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportingCast {
    /// Team score minus the star's points
    pub cast_score: i32,
    /// Cast score minus opponent score
    pub cast_gap: i32,
    /// Star's expected points at this point of the game
    pub expected: Decimal,
    /// Shortfall against expectation, floored at zero
    pub deficit: Decimal,
    pub strength: CastStrength,
    /// Star reverting to expectation alone would erase a negative cast gap
    pub regression_flips: bool,
}

/// Analyze the cast around a tracked star
pub fn analyze_cast(
    league: &LeagueConfig,
    star_points: i32,
    team_score: i32,
    opponent_score: i32,
    star_ppg: Decimal,
    elapsed_minutes: Decimal,
) -> SupportingCast {
    let cast_score = team_score - star_points;
    let cast_gap = cast_score - opponent_score;
    let expected = league.expected_by_time(star_ppg, elapsed_minutes);
    let deficit = (expected - Decimal::from(star_points)).max(Decimal::ZERO);

    SupportingCast {
        cast_score,
        cast_gap,
        expected,
        deficit,
        strength: CastStrength::from_gap(cast_gap),
        regression_flips: cast_gap < 0 && deficit > Decimal::from(-cast_gap),
    }
}

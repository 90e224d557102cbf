//! Three-point dependence of a lead

use crate::league::LeagueConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Minimum raw score before a lead can be called fragile
const MIN_FRAGILE_SCORE: i32 = 20;

/// How much of a team's score came from threes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Durability {
    /// Share of points from three-point makes (0-100)
    pub pct3: Decimal,
    pub three_point_points: i32,
    pub other_points: i32,
    /// Leading, at least 20 points, and three-point share at or above the threshold
    pub fragile: bool,
}

impl Durability {
    fn empty() -> Self {
        Self {
            pct3: Decimal::ZERO,
            three_point_points: 0,
            other_points: 0,
            fragile: false,
        }
    }
}

/// Classify a team's lead as three-point dependent
pub fn analyze_durability(
    league: &LeagueConfig,
    score: i32,
    threes_made: u32,
    opponent_score: i32,
) -> Durability {
    if score <= 0 {
        return Durability::empty();
    }

    let three_point_points = threes_made as i32 * 3;
    let pct3 = Decimal::from(three_point_points) * dec!(100) / Decimal::from(score);
    let leading = score > opponent_score;

    Durability {
        pct3,
        three_point_points,
        other_points: score - three_point_points,
        fragile: pct3 >= league.fragile_threshold_pct && leading && score >= MIN_FRAGILE_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragile_table() {
        let nba = LeagueConfig::nba(); // threshold 42%

        // (score, threes, opponent, fragile)
        let cases = [
            (50, 7, 40, true),   // exactly 42%
            (50, 6, 40, false),  // 36%
            (20, 3, 10, true),   // exactly 20 points, 45%
            (19, 3, 10, false),  // 19 points
            (68, 9, 40, false),  // 39.7%
            (68, 10, 40, true),  // 44.1%
            (60, 12, 60, false), // tied is not leading
            (60, 12, 65, false), // trailing
            (0, 0, 0, false),
        ];

        for (score, threes, opp, expected) in cases {
            let d = analyze_durability(&nba, score, threes, opp);
            assert_eq!(
                d.fragile, expected,
                "score={} threes={} opp={}",
                score, threes, opp
            );
        }
    }

    #[test]
    fn test_threshold_differs_by_league() {
        // 41/100 from threes clears 40% (ncaab) but not 42% (nba)
        let d_nba = analyze_durability(&LeagueConfig::nba(), 51, 7, 40);
        let d_ncaab = analyze_durability(&LeagueConfig::ncaab(), 51, 7, 40);
        assert!(!d_nba.fragile);
        assert!(d_ncaab.fragile);
    }

    #[test]
    fn test_point_split() {
        let d = analyze_durability(&LeagueConfig::nba(), 68, 9, 40);
        assert_eq!(d.three_point_points, 27);
        assert_eq!(d.other_points, 41);
        assert_eq!(d.pct3.round_dp(1), dec!(39.7));
    }

    #[test]
    fn test_never_fragile_when_not_leading() {
        let nba = LeagueConfig::nba();
        for score in 0..80 {
            for threes in 0..=(score as u32 / 3) {
                for opp in [score, score + 1, score + 10] {
                    assert!(!analyze_durability(&nba, score, threes, opp).fragile);
                }
            }
        }
    }

    #[test]
    fn test_negative_score_is_empty() {
        let d = analyze_durability(&LeagueConfig::nba(), -4, 2, 0);
        assert_eq!(d.pct3, Decimal::ZERO);
        assert!(!d.fragile);
    }
}

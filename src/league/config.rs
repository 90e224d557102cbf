//! Per-league parameter tables

use crate::config::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Monitored league
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeagueMode {
    /// NBA (four 12-minute quarters)
    Nba,
    /// Men's college basketball (two 20-minute halves)
    Ncaab,
}

impl LeagueMode {
    /// Lowercase identifier used in keys and file names
    pub fn as_str(&self) -> &'static str {
        match self {
            LeagueMode::Nba => "nba",
            LeagueMode::Ncaab => "ncaab",
        }
    }
}

impl fmt::Display for LeagueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeagueMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nba" => Ok(LeagueMode::Nba),
            "ncaab" | "ncaa" => Ok(LeagueMode::Ncaab),
            other => Err(ConfigError::UnknownLeague(other.to_string())),
        }
    }
}

/// How periods are named in log lines and stored signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStyle {
    /// Q1..Q4, Q5 for overtime
    Quarter,
    /// H1, H2, then OT1, OT2..
    Half,
}

/// Hot-shooting gate: a three-point percentage on at least some volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotGate {
    /// Minimum three-point percentage (0-100)
    pub min_pct: Decimal,
    /// Minimum three-point attempts
    pub min_attempts: u32,
}

impl ShotGate {
    pub const fn new(min_pct: Decimal, min_attempts: u32) -> Self {
        Self {
            min_pct,
            min_attempts,
        }
    }

    pub fn passes(&self, pct: Decimal, attempts: u32) -> bool {
        pct >= self.min_pct && attempts >= self.min_attempts
    }

    /// True when any gate in the list passes
    pub fn any(gates: &[ShotGate], pct: Decimal, attempts: u32) -> bool {
        gates.iter().any(|g| g.passes(pct, attempts))
    }
}

/// Inclusive integer band over a score margin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBand {
    pub min: i32,
    pub max: i32,
}

impl ScoreBand {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Game-time window in which a star coil may be reported
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoilWindow {
    /// Inclusive period range
    Periods { min: u32, max: u32 },
    /// Inclusive elapsed-minutes range
    Minutes { min: Decimal, max: Decimal },
}

impl CoilWindow {
    pub fn contains(&self, period: u32, elapsed_minutes: Decimal) -> bool {
        match *self {
            CoilWindow::Periods { min, max } => period >= min && period <= max,
            CoilWindow::Minutes { min, max } => elapsed_minutes >= min && elapsed_minutes <= max,
        }
    }
}

/// Loosened thresholds used only to fill a category the strict pass missed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftProfile {
    pub hot_shooting: Vec<ShotGate>,
    /// Minimum share of points from threes (0-100)
    pub fragile_pct: Decimal,
    pub lead: ScoreBand,
    pub min_score: i32,
    /// Star pace (points / expected) must be below this
    pub star_pace: Decimal,
    pub star_margin: i32,
    pub star_window: CoilWindow,
    /// Accept a weak supporting cast as soft star evidence
    pub accept_weak_cast: bool,
}

/// Immutable parameters for one league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueConfig {
    pub mode: LeagueMode,
    /// Display label (e.g. "NBA")
    pub label: String,
    /// Live scoreboard endpoint
    pub scoreboard_url: String,
    /// Sport key on the odds provider
    pub odds_sport: String,
    pub total_minutes: Decimal,
    pub period_minutes: Decimal,
    pub regulation_periods: u32,
    /// First overtime period number
    pub overtime_period: u32,
    pub period_style: PeriodStyle,

    /// Share of points from threes (0-100) at which a lead is fragile
    pub fragile_threshold_pct: Decimal,
    pub hot_shooting: Vec<ShotGate>,
    /// Opponent non-three points per minute below which its engine is weak
    pub engine_threshold_ppm: Decimal,
    /// Lead band for a strict fragile hit
    pub fragile_margin: ScoreBand,

    /// Star pace below which a coil is reported
    pub coil_pace_max: Decimal,
    pub coil_max_margin: i32,
    pub coil_window: CoilWindow,
    /// Minimum season scoring rate for a tracked star
    pub star_ppg_min: Decimal,

    pub soft: SoftProfile,

    /// Fade boost pushing toward the home side; zero disables it
    pub home_court_boost: Decimal,
}

impl LeagueConfig {
    /// NBA preset
    pub fn nba() -> Self {
        Self {
            mode: LeagueMode::Nba,
            label: "NBA".to_string(),
            scoreboard_url:
                "https://site.api.espn.com/apis/site/v2/sports/basketball/nba/scoreboard"
                    .to_string(),
            odds_sport: "basketball_nba".to_string(),
            total_minutes: dec!(48),
            period_minutes: dec!(12),
            regulation_periods: 4,
            overtime_period: 5,
            period_style: PeriodStyle::Quarter,
            fragile_threshold_pct: dec!(42),
            hot_shooting: vec![ShotGate::new(dec!(50), 12), ShotGate::new(dec!(55), 8)],
            engine_threshold_ppm: dec!(1.3),
            fragile_margin: ScoreBand::new(3, 15),
            coil_pace_max: dec!(0.65),
            coil_max_margin: 15,
            coil_window: CoilWindow::Periods { min: 2, max: 3 },
            star_ppg_min: dec!(21),
            soft: SoftProfile {
                hot_shooting: vec![ShotGate::new(dec!(45), 10), ShotGate::new(dec!(50), 8)],
                fragile_pct: dec!(38),
                lead: ScoreBand::new(2, 18),
                min_score: 15,
                star_pace: dec!(0.75),
                star_margin: 18,
                star_window: CoilWindow::Periods { min: 1, max: 3 },
                accept_weak_cast: false,
            },
            home_court_boost: Decimal::ZERO,
        }
    }

    /// Men's college basketball preset
    pub fn ncaab() -> Self {
        Self {
            mode: LeagueMode::Ncaab,
            label: "NCAAB".to_string(),
            scoreboard_url: "https://site.api.espn.com/apis/site/v2/sports/basketball/mens-college-basketball/scoreboard".to_string(),
            odds_sport: "basketball_ncaab".to_string(),
            total_minutes: dec!(40),
            period_minutes: dec!(20),
            regulation_periods: 2,
            overtime_period: 3,
            period_style: PeriodStyle::Half,
            fragile_threshold_pct: dec!(40),
            hot_shooting: vec![ShotGate::new(dec!(48), 10), ShotGate::new(dec!(52), 7)],
            engine_threshold_ppm: dec!(1.1),
            fragile_margin: ScoreBand::new(3, 12),
            coil_pace_max: dec!(0.65),
            coil_max_margin: 12,
            coil_window: CoilWindow::Minutes {
                min: dec!(8),
                max: dec!(35),
            },
            star_ppg_min: dec!(16),
            soft: SoftProfile {
                hot_shooting: vec![ShotGate::new(dec!(40), 7), ShotGate::new(dec!(45), 5)],
                fragile_pct: dec!(36),
                lead: ScoreBand::new(2, 18),
                min_score: 12,
                star_pace: dec!(0.80),
                star_margin: 18,
                star_window: CoilWindow::Minutes {
                    min: dec!(4),
                    max: dec!(37),
                },
                accept_weak_cast: true,
            },
            home_court_boost: dec!(0.5),
        }
    }

    /// Preset for a league mode
    pub fn preset(mode: LeagueMode) -> Self {
        match mode {
            LeagueMode::Nba => Self::nba(),
            LeagueMode::Ncaab => Self::ncaab(),
        }
    }

    /// Whether the home-court adjustment applies in this league
    pub fn home_court_enabled(&self) -> bool {
        self.home_court_boost > Decimal::ZERO
    }

    /// True once the period number reaches overtime
    pub fn is_overtime(&self, period: u32) -> bool {
        period >= self.overtime_period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_mode_parse() {
        assert_eq!("nba".parse::<LeagueMode>().unwrap(), LeagueMode::Nba);
        assert_eq!("NCAAB".parse::<LeagueMode>().unwrap(), LeagueMode::Ncaab);
        assert_eq!(" ncaa ".parse::<LeagueMode>().unwrap(), LeagueMode::Ncaab);
        assert!("wnba".parse::<LeagueMode>().is_err());
    }

    #[test]
    fn test_league_mode_display() {
        assert_eq!(LeagueMode::Nba.to_string(), "nba");
        assert_eq!(LeagueMode::Ncaab.to_string(), "ncaab");
    }

    #[test]
    fn test_shot_gates_any_of() {
        let gates = LeagueConfig::nba().hot_shooting;
        assert!(ShotGate::any(&gates, dec!(50), 12));
        assert!(ShotGate::any(&gates, dec!(55), 8));
        assert!(!ShotGate::any(&gates, dec!(52), 11));
        assert!(!ShotGate::any(&gates, dec!(60), 7));
    }

    #[test]
    fn test_score_band_inclusive() {
        let band = ScoreBand::new(3, 15);
        assert!(band.contains(3));
        assert!(band.contains(15));
        assert!(!band.contains(2));
        assert!(!band.contains(16));
    }

    #[test]
    fn test_coil_window_periods_and_minutes() {
        let periods = CoilWindow::Periods { min: 2, max: 3 };
        assert!(periods.contains(2, dec!(0)));
        assert!(!periods.contains(4, dec!(30)));

        let minutes = CoilWindow::Minutes {
            min: dec!(8),
            max: dec!(35),
        };
        assert!(minutes.contains(1, dec!(8)));
        assert!(!minutes.contains(2, dec!(35.5)));
    }

    #[test]
    fn test_presets_differ_only_in_values() {
        let nba = LeagueConfig::nba();
        let ncaab = LeagueConfig::ncaab();
        assert_eq!(nba.total_minutes, dec!(48));
        assert_eq!(ncaab.total_minutes, dec!(40));
        assert!(!nba.home_court_enabled());
        assert!(ncaab.home_court_enabled());
        assert!(ncaab.soft.accept_weak_cast);
        assert_eq!(LeagueConfig::preset(LeagueMode::Ncaab), ncaab);
    }

    #[test]
    fn test_overtime_detection() {
        let nba = LeagueConfig::nba();
        assert!(!nba.is_overtime(4));
        assert!(nba.is_overtime(5));
        let ncaab = LeagueConfig::ncaab();
        assert!(ncaab.is_overtime(3));
    }

    #[test]
    fn test_league_config_deserialize() {
        let toml = r#"
            mode = "ncaab"
            label = "NCAAB"
            scoreboard_url = "http://localhost/scoreboard"
            odds_sport = "basketball_ncaab"
            total_minutes = 40
            period_minutes = 20
            regulation_periods = 2
            overtime_period = 3
            period_style = "half"
            fragile_threshold_pct = 40
            hot_shooting = [{ min_pct = 48, min_attempts = 10 }]
            engine_threshold_ppm = 1.1
            fragile_margin = { min = 3, max = 12 }
            coil_pace_max = 0.65
            coil_max_margin = 12
            coil_window = { minutes = { min = 8, max = 35 } }
            star_ppg_min = 16
            home_court_boost = 0.5

            [soft]
            hot_shooting = [{ min_pct = 40, min_attempts = 7 }]
            fragile_pct = 36
            lead = { min = 2, max = 18 }
            min_score = 12
            star_pace = 0.8
            star_margin = 18
            star_window = { periods = { min = 1, max = 2 } }
            accept_weak_cast = true
        "#;

        let league: LeagueConfig = toml::from_str(toml).unwrap();
        assert_eq!(league.mode, LeagueMode::Ncaab);
        assert_eq!(league.period_style, PeriodStyle::Half);
        assert_eq!(league.engine_threshold_ppm, dec!(1.1));
        assert!(matches!(league.coil_window, CoilWindow::Minutes { .. }));
        assert!(matches!(
            league.soft.star_window,
            CoilWindow::Periods { min: 1, max: 2 }
        ));
    }
}

//! Configuration types for courtside

use crate::league::{LeagueConfig, LeagueMode};
use crate::telemetry::LogFormat;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Invalid configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown league '{0}' (expected nba or ncaab)")]
    UnknownLeague(String),
    #[error("no leagues configured")]
    NoLeagues,
    #[error("league {0} configured more than once")]
    DuplicateLeague(LeagueMode),
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub kelly: KellyConfig,
    #[serde(default)]
    pub odds: OddsConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default = "default_leagues")]
    pub leagues: Vec<LeagueConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            kelly: KellyConfig::default(),
            odds: OddsConfig::default(),
            telemetry: TelemetryConfig::default(),
            leagues: default_leagues(),
        }
    }
}

fn default_leagues() -> Vec<LeagueConfig> {
    vec![LeagueConfig::nba(), LeagueConfig::ncaab()]
}

/// Polling cadence and file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seconds between polls of one league
    #[serde(default = "default_poll_secs")]
    pub poll_secs: u64,

    /// Directory holding engine-state.json and engine-signals.json
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Star lookup table
    #[serde(default = "default_stars_file")]
    pub stars_file: PathBuf,

    /// Scoreboard request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub feed_timeout_secs: u64,
}

fn default_poll_secs() -> u64 {
    30
}
fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
fn default_stars_file() -> PathBuf {
    PathBuf::from("./data/stars.json")
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            poll_secs: default_poll_secs(),
            data_dir: default_data_dir(),
            stars_file: default_stars_file(),
            feed_timeout_secs: default_timeout_secs(),
        }
    }
}

/// Fractional Kelly staking parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KellyConfig {
    /// Assumed edge for a single-category signal
    #[serde(default = "default_base_edge")]
    pub base_edge: Decimal,

    /// Extra edge per category beyond the first
    #[serde(default = "default_edge_per_signal")]
    pub edge_per_signal: Decimal,

    #[serde(default = "default_max_edge")]
    pub max_edge: Decimal,

    /// Edges below this are noise and get no stake
    #[serde(default = "default_min_edge")]
    pub min_edge: Decimal,

    #[serde(default = "default_max_win_prob")]
    pub max_win_prob: Decimal,

    /// Multiplier on full Kelly (0.5 = half-Kelly)
    #[serde(default = "default_kelly_fraction")]
    pub kelly_fraction: Decimal,

    /// Hard cap on stake as a share of bankroll
    #[serde(default = "default_max_stake_pct")]
    pub max_stake_pct: Decimal,

    /// Minimum ticket for any positive stake
    #[serde(default = "default_min_stake_pct")]
    pub min_stake_pct: Decimal,

    /// Nominal bankroll for display amounts
    #[serde(default = "default_bankroll")]
    pub bankroll: Decimal,
}

fn default_base_edge() -> Decimal {
    dec!(0.035)
}
fn default_edge_per_signal() -> Decimal {
    dec!(0.01)
}
fn default_max_edge() -> Decimal {
    dec!(0.08)
}
fn default_min_edge() -> Decimal {
    dec!(0.03)
}
fn default_max_win_prob() -> Decimal {
    dec!(0.90)
}
fn default_kelly_fraction() -> Decimal {
    dec!(0.5)
}
fn default_max_stake_pct() -> Decimal {
    dec!(0.05)
}
fn default_min_stake_pct() -> Decimal {
    dec!(0.005)
}
fn default_bankroll() -> Decimal {
    dec!(20000)
}

impl Default for KellyConfig {
    fn default() -> Self {
        Self {
            base_edge: default_base_edge(),
            edge_per_signal: default_edge_per_signal(),
            max_edge: default_max_edge(),
            min_edge: default_min_edge(),
            max_win_prob: default_max_win_prob(),
            kelly_fraction: default_kelly_fraction(),
            max_stake_pct: default_max_stake_pct(),
            min_stake_pct: default_min_stake_pct(),
            bankroll: default_bankroll(),
        }
    }
}

/// Moneyline quote provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsConfig {
    /// API key; quotes are skipped entirely when unset
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_odds_base_url")]
    pub base_url: String,

    /// Seconds before the quote book is considered stale
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,

    /// Comma-separated bookmaker keys
    #[serde(default = "default_bookmakers")]
    pub bookmakers: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_odds_base_url() -> String {
    "https://api.the-odds-api.com/v4".to_string()
}
fn default_refresh_secs() -> u64 {
    120
}
fn default_bookmakers() -> String {
    "fanduel,draftkings".to_string()
}

impl Default for OddsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_odds_base_url(),
            refresh_secs: default_refresh_secs(),
            bookmakers: default_bookmakers(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Prometheus scrape port; no exporter when unset
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty or duplicated league lists
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.leagues.is_empty() {
            return Err(ConfigError::NoLeagues);
        }
        for (i, league) in self.leagues.iter().enumerate() {
            if self.leagues[..i].iter().any(|l| l.mode == league.mode) {
                return Err(ConfigError::DuplicateLeague(league.mode));
            }
        }
        Ok(())
    }

    /// League parameters for a mode
    pub fn league(&self, mode: LeagueMode) -> Option<&LeagueConfig> {
        self.leagues.iter().find(|l| l.mode == mode)
    }

    /// Keep only the requested leagues, in configured order
    pub fn select_leagues(&self, modes: &[LeagueMode]) -> Result<Vec<LeagueConfig>, ConfigError> {
        let selected: Vec<LeagueConfig> = self
            .leagues
            .iter()
            .filter(|l| modes.is_empty() || modes.contains(&l.mode))
            .cloned()
            .collect();
        if selected.is_empty() {
            return Err(ConfigError::NoLeagues);
        }
        Ok(selected)
    }
}

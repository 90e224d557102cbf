//! Quote types

use crate::feed::{GameSnapshot, Side};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current moneyline for one matchup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddsQuote {
    /// Away team full name as the provider spells it
    pub away: String,
    pub home: String,
    /// American odds
    pub away_price: i32,
    pub home_price: i32,
    pub observed_at: DateTime<Utc>,
}

impl OddsQuote {
    /// Book key: lowercase "away vs home"
    pub fn key(&self) -> String {
        format!("{} vs {}", self.away, self.home).to_lowercase()
    }

    pub fn price(&self, side: Side) -> i32 {
        match side {
            Side::Away => self.away_price,
            Side::Home => self.home_price,
        }
    }
}

/// One historical price observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotePoint {
    pub at: DateTime<Utc>,
    pub away_price: i32,
    pub home_price: i32,
}

impl QuotePoint {
    pub fn price(&self, side: Side) -> i32 {
        match side {
            Side::Away => self.away_price,
            Side::Home => self.home_price,
        }
    }
}

/// The names a live event is known by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub away_abbr: String,
    pub home_abbr: String,
    pub away_name: String,
    pub home_name: String,
}

impl Matchup {
    pub fn from_snapshot(snap: &GameSnapshot) -> Self {
        Self {
            away_abbr: snap.away.abbr.clone(),
            home_abbr: snap.home.abbr.clone(),
            away_name: snap.away.name.clone(),
            home_name: snap.home.name.clone(),
        }
    }
}

/// Price used for staking a side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    pub price: i32,
    /// False when no quote matched and the default price stands in
    pub has_live_odds: bool,
    pub quote_key: Option<String>,
}

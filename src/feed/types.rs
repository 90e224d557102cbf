//! Scoreboard feed types

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upstream retrieval errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport failure or timeout
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-success HTTP status
    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },
    /// Body could not be decoded
    #[error("malformed feed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Which side of the matchup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Away,
    Home,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Side::Away => Side::Home,
            Side::Home => Side::Away,
        }
    }
}

/// Made/attempted pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotSplit {
    pub made: u32,
    pub attempted: u32,
}

impl ShotSplit {
    pub fn new(made: u32, attempted: u32) -> Self {
        Self { made, attempted }
    }

    /// Percentage made (0-100); zero when nothing was attempted
    pub fn pct(&self) -> Decimal {
        if self.attempted == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.made) * dec!(100) / Decimal::from(self.attempted)
    }
}

/// A current points leader for one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringLeader {
    pub name: String,
    pub points: i32,
    /// Team abbreviation
    pub team: String,
}

/// One team's line in a snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamLine {
    pub abbr: String,
    pub name: String,
    pub score: i32,
    pub field_goals: ShotSplit,
    pub three_pointers: ShotSplit,
    pub free_throws: ShotSplit,
    pub leaders: Vec<ScoringLeader>,
}

/// Normalized view of one live event at one poll
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub event_id: String,
    pub away: TeamLine,
    pub home: TeamLine,
    pub period: u32,
    pub clock: String,
}

impl GameSnapshot {
    pub fn team(&self, side: Side) -> &TeamLine {
        match side {
            Side::Away => &self.away,
            Side::Home => &self.home,
        }
    }

    /// Lead of `side` over its opponent (negative when trailing)
    pub fn lead(&self, side: Side) -> i32 {
        self.team(side).score - self.team(side.opposite()).score
    }

    /// Absolute score margin
    pub fn margin(&self) -> i32 {
        (self.away.score - self.home.score).abs()
    }

    /// True when `side` is behind
    pub fn is_trailing(&self, side: Side) -> bool {
        self.lead(side) < 0
    }

    /// Side whose abbreviation matches, if any
    pub fn side_of(&self, abbr: &str) -> Option<Side> {
        if self.away.abbr == abbr {
            Some(Side::Away)
        } else if self.home.abbr == abbr {
            Some(Side::Home)
        } else {
            None
        }
    }

    /// "AWY @ HOM"
    pub fn label(&self) -> String {
        format!("{} @ {}", self.away.abbr, self.home.abbr)
    }
}

/// Final score of a completed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalScore {
    pub event_id: String,
    pub away_abbr: String,
    pub home_abbr: String,
    pub away_score: i32,
    pub home_score: i32,
}

/// One league's scoreboard at one poll
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub live: Vec<GameSnapshot>,
    pub completed: Vec<FinalScore>,
}

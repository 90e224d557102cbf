//! Momentum types

use crate::feed::Side;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sampled score line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSample {
    pub at: DateTime<Utc>,
    pub away: i32,
    pub home: i32,
}

impl ScoreSample {
    pub fn new(at: DateTime<Utc>, away: i32, home: i32) -> Self {
        Self { at, away, home }
    }

    pub fn total(&self) -> i32 {
        self.away + self.home
    }

    /// Points `side` is behind by (negative when ahead)
    pub fn deficit(&self, side: Side) -> i32 {
        match side {
            Side::Away => self.home - self.away,
            Side::Home => self.away - self.home,
        }
    }
}

/// Outcome of a damage-lock check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageLock {
    pub locked: bool,
    /// Deficit at the newest sample (zero when the check short-circuited)
    pub deficit_now: i32,
    /// Deficit at the oldest sample
    pub deficit_then: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deficit_by_side() {
        let s = ScoreSample::new(Utc::now(), 40, 48);
        assert_eq!(s.deficit(Side::Away), 8);
        assert_eq!(s.deficit(Side::Home), -8);
        assert_eq!(s.total(), 88);
    }
}

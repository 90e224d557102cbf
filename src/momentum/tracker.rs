//! Rolling score history and the damage-lock detector

use super::types::{DamageLock, ScoreSample};
use crate::feed::Side;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Minimum wall-clock gap between two samples
pub const MIN_SPACING_SECS: i64 = 25;
/// Samples kept per event
pub const HISTORY_CAP: usize = 15;

const MIN_SAMPLES: usize = 4;
const MIN_ELAPSED_MINUTES: Decimal = dec!(15);
const MIN_SPAN_SECS: i64 = 180;
/// Largest single-step deficit shrink still counted as "no recovery"
const MAX_STEP_RECOVERY: i32 = 3;

/// Per-event score history for one league
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MomentumTracker {
    history: HashMap<String, VecDeque<ScoreSample>>,
}

impl MomentumTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a score line; returns true when a sample was appended
    ///
    /// Samples closer than 25 seconds to the previous one are dropped and the
    /// history is trimmed to the newest 15 entries.
    pub fn record(&mut self, event_id: &str, away: i32, home: i32, now: DateTime<Utc>) -> bool {
        let samples = self.history.entry(event_id.to_string()).or_default();

        let due = match samples.back() {
            Some(last) => now - last.at >= Duration::seconds(MIN_SPACING_SECS),
            None => true,
        };
        if due {
            samples.push_back(ScoreSample::new(now, away, home));
        }
        while samples.len() > HISTORY_CAP {
            samples.pop_front();
        }
        due
    }

    /// Samples recorded for an event, oldest first
    pub fn samples(&self, event_id: &str) -> Option<&VecDeque<ScoreSample>> {
        self.history.get(event_id)
    }

    /// Number of tracked events
    pub fn event_count(&self) -> usize {
        self.history.len()
    }

    /// Check whether `side`'s deficit has stopped shrinking
    ///
    /// Needs at least 4 samples spanning 3 minutes of wall clock, 15 minutes of
    /// game time, and a score that actually moved between the oldest and
    /// newest sample.
    pub fn damage_lock(&self, event_id: &str, side: Side, elapsed_minutes: Decimal) -> DamageLock {
        let Some(samples) = self.history.get(event_id) else {
            return DamageLock::default();
        };
        if samples.len() < MIN_SAMPLES || elapsed_minutes < MIN_ELAPSED_MINUTES {
            return DamageLock::default();
        }
        let (Some(first), Some(last)) = (samples.front(), samples.back()) else {
            return DamageLock::default();
        };
        if last.at - first.at < Duration::seconds(MIN_SPAN_SECS) {
            return DamageLock::default();
        }
        if last.total() == first.total() {
            return DamageLock::default();
        }

        let deficit_now = last.deficit(side);
        let deficit_then = first.deficit(side);
        let trailing = deficit_now > 0;
        let stable = deficit_now - deficit_then >= 0;
        let no_recovery = samples
            .iter()
            .zip(samples.iter().skip(1))
            .all(|(prev, next)| prev.deficit(side) - next.deficit(side) <= MAX_STEP_RECOVERY);

        DamageLock {
            locked: trailing && stable && no_recovery,
            deficit_now,
            deficit_then,
        }
    }

    /// Convenience wrapper over [`damage_lock`](Self::damage_lock)
    pub fn is_locked(&self, event_id: &str, side: Side, elapsed_minutes: Decimal) -> bool {
        self.damage_lock(event_id, side, elapsed_minutes).locked
    }
}

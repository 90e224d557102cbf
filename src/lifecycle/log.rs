//! Append-only signal log

use super::signal::{BetResult, Signal};
use super::summary::Summary;
use crate::feed::{FinalScore, Side};
use crate::league::LeagueMode;
use crate::odds::OddsBook;
use crate::risk::win_profit;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::info;

/// Post-issue window (minutes) sampled for the 5-minute line movement
pub const LEC_5_WINDOW: RangeInclusive<i64> = 4..=7;
/// Post-issue window (minutes) sampled for the 10-minute line movement
pub const LEC_10_WINDOW: RangeInclusive<i64> = 9..=12;

/// Every signal ever issued; records are never removed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalLog {
    signals: Vec<Signal>,
}

impl SignalLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_signals(signals: Vec<Signal>) -> Self {
        Self { signals }
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.signals.iter().any(|s| s.key == key)
    }

    /// Append a signal unless its dedup key was already issued
    pub fn issue(&mut self, signal: Signal) -> bool {
        if self.contains_key(&signal.key) {
            return false;
        }

        info!(
            league = %signal.league,
            game = %signal.game,
            bet = %signal.bet_team,
            fade = %signal.fade_team,
            types = %signal.types_label(),
            urgency = %signal.urgency.tier,
            price = signal.market_price,
            live_odds = signal.has_live_odds,
            stake = %signal.stake.amount,
            "Signal issued"
        );
        self.signals.push(signal);
        true
    }

    pub fn open_count(&self) -> usize {
        self.signals.iter().filter(|s| s.is_open()).count()
    }

    pub fn open_count_in(&self, league: LeagueMode) -> usize {
        self.signals
            .iter()
            .filter(|s| s.league == league && s.is_open())
            .count()
    }

    /// Fill in 5/10 minute line movement for open signals of a league
    ///
    /// Returns how many values were captured.
    pub fn capture_line_movement(
        &mut self,
        league: LeagueMode,
        book: &OddsBook,
        now: DateTime<Utc>,
    ) -> usize {
        let mut captured = 0;

        for signal in self
            .signals
            .iter_mut()
            .filter(|s| s.league == league && s.is_open())
        {
            let Some(history) = signal.quote_key.as_deref().and_then(|k| book.history(k)) else {
                continue;
            };
            let since = now - signal.issued_at;
            let window_price = |window: &RangeInclusive<i64>| {
                history
                    .iter()
                    .find(|point| {
                        let offset = point.at - signal.issued_at;
                        offset >= Duration::minutes(*window.start())
                            && offset <= Duration::minutes(*window.end())
                    })
                    .map(|point| point.price(signal.bet_side))
            };

            if signal.lec_5.is_none() && since >= Duration::minutes(5) {
                if let Some(price) = window_price(&LEC_5_WINDOW) {
                    signal.lec_5 = Some(signal.market_price - price);
                    captured += 1;
                }
            }
            if signal.lec_10.is_none() && since >= Duration::minutes(10) {
                if let Some(price) = window_price(&LEC_10_WINDOW) {
                    signal.lec_10 = Some(signal.market_price - price);
                    captured += 1;
                }
            }
        }

        captured
    }

    /// Settle open signals of a league whose events have finished
    ///
    /// Returns how many signals were resolved. Already resolved signals are
    /// never touched again.
    pub fn resolve(
        &mut self,
        league: LeagueMode,
        completed: &[FinalScore],
        now: DateTime<Utc>,
    ) -> usize {
        let mut resolved = 0;

        for signal in self
            .signals
            .iter_mut()
            .filter(|s| s.league == league && s.is_open())
        {
            let Some(final_score) = completed.iter().find(|f| f.event_id == signal.event_id)
            else {
                continue;
            };

            let (bet_score, other_score) = match signal.bet_side {
                Side::Away => (final_score.away_score, final_score.home_score),
                Side::Home => (final_score.home_score, final_score.away_score),
            };
            let result = if bet_score > other_score {
                BetResult::Win
            } else {
                BetResult::Loss
            };
            let pnl = match result {
                BetResult::Win => win_profit(signal.stake.amount, signal.market_price),
                BetResult::Loss => -signal.stake.amount,
            }
            .round_dp(2);

            signal.final_away_score = Some(final_score.away_score);
            signal.final_home_score = Some(final_score.home_score);
            signal.result = Some(result);
            signal.pnl = Some(pnl);
            signal.resolved_at = Some(now);
            resolved += 1;

            info!(
                league = %signal.league,
                game = %signal.game,
                bet = %signal.bet_team,
                result = ?result,
                score = %format!("{}-{}", final_score.away_score, final_score.home_score),
                pnl = %pnl,
                "Signal resolved"
            );
        }

        resolved
    }

    /// Per-league performance rollup
    pub fn summary(&self) -> Summary {
        Summary::from_signals(&self.signals)
    }
}

//! Performance rollup for `status`

use super::signal::{BetResult, Signal};
use crate::league::LeagueMode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

/// Counts and P&L for one league
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueSummary {
    pub issued: usize,
    pub open: usize,
    pub wins: usize,
    pub losses: usize,
    pub combined: usize,
    /// Stake on resolved signals
    pub staked: Decimal,
    pub net_pnl: Decimal,
}

impl LeagueSummary {
    pub fn resolved(&self) -> usize {
        self.wins + self.losses
    }

    /// Wins over resolved (0-1)
    pub fn win_rate(&self) -> Decimal {
        if self.resolved() == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.wins) / Decimal::from(self.resolved())
    }

    /// Net P&L over resolved stake (0-1)
    pub fn roi(&self) -> Decimal {
        if self.staked.is_zero() {
            return Decimal::ZERO;
        }
        self.net_pnl / self.staked
    }

    fn add(&mut self, signal: &Signal) {
        self.issued += 1;
        if signal.combined {
            self.combined += 1;
        }
        match signal.result {
            None => self.open += 1,
            Some(result) => {
                match result {
                    BetResult::Win => self.wins += 1,
                    BetResult::Loss => self.losses += 1,
                }
                self.staked += signal.stake.amount;
                self.net_pnl += signal.pnl.unwrap_or_default();
            }
        }
    }

    pub fn format_table(&self, title: &str) -> String {
        format!(
            r#"
══════════════════════════════════════════════════════
               {} SIGNALS
══════════════════════════════════════════════════════

ACTIVITY
───────────────────────────────────────────────────────
Issued:           {}
Open:             {}
Combined:         {}

PERFORMANCE
───────────────────────────────────────────────────────
Record:           {}-{}
Win Rate:         {:.1}%
Staked:           {:.2}
Net P&L:          {:+.2}
ROI:              {:+.2}%
══════════════════════════════════════════════════════
"#,
            title,
            self.issued,
            self.open,
            self.combined,
            self.wins,
            self.losses,
            self.win_rate() * dec!(100),
            self.staked,
            self.net_pnl,
            self.roi() * dec!(100),
        )
    }
}

/// Per-league rollup of the whole log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub leagues: BTreeMap<LeagueMode, LeagueSummary>,
}

impl Summary {
    pub fn from_signals(signals: &[Signal]) -> Self {
        let mut leagues: BTreeMap<LeagueMode, LeagueSummary> = BTreeMap::new();
        for signal in signals {
            leagues.entry(signal.league).or_default().add(signal);
        }
        Self { leagues }
    }

    pub fn league(&self, mode: LeagueMode) -> Option<&LeagueSummary> {
        self.leagues.get(&mode)
    }

    /// All leagues folded together
    pub fn total(&self) -> LeagueSummary {
        self.leagues
            .values()
            .fold(LeagueSummary::default(), |mut acc, s| {
                acc.issued += s.issued;
                acc.open += s.open;
                acc.wins += s.wins;
                acc.losses += s.losses;
                acc.combined += s.combined;
                acc.staked += s.staked;
                acc.net_pnl += s.net_pnl;
                acc
            })
    }

    pub fn format_table(&self) -> String {
        if self.leagues.is_empty() {
            return "No signals issued yet.\n".to_string();
        }
        self.leagues
            .iter()
            .map(|(mode, summary)| summary.format_table(&mode.as_str().to_uppercase()))
            .collect()
    }
}

//! The signal record

use crate::feed::{GameSnapshot, Side};
use crate::league::{LeagueConfig, LeagueMode};
use crate::odds::PriceQuote;
use crate::risk::{Stake, Urgency};
use crate::signal::{Evidence, HomeCourt, Pick, Recommendation, SignalType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BetResult {
    Win,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalState {
    Open,
    Resolved,
}

/// Dedup key: event, bet team, league and UTC issue hour
pub fn signal_key(event_id: &str, bet_team: &str, league: LeagueMode, at: DateTime<Utc>) -> String {
    format!("{}_{}_{}_{}", event_id, bet_team, league, at.format("%Y-%m-%dT%H"))
}

/// Everything needed to open a signal
pub struct SignalDraft<'a> {
    pub league: &'a LeagueConfig,
    pub snapshot: &'a GameSnapshot,
    pub pick: Pick,
    pub urgency: Urgency,
    pub recommendation: Recommendation,
    pub price: PriceQuote,
    pub implied_prob: Decimal,
    pub stake: Stake,
    pub issued_at: DateTime<Utc>,
}

impl SignalDraft<'_> {
    pub fn bet_team(&self) -> &str {
        &self.snapshot.team(self.pick.bet_side).abbr
    }

    pub fn key(&self) -> String {
        signal_key(
            &self.snapshot.event_id,
            self.bet_team(),
            self.league.mode,
            self.issued_at,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub id: Uuid,
    pub key: String,
    pub event_id: String,
    pub league: LeagueMode,
    /// "AWY @ HOM"
    pub game: String,
    pub away_abbr: String,
    pub home_abbr: String,
    pub away_name: String,
    pub home_name: String,
    pub away_score: i32,
    pub home_score: i32,
    pub period: u32,
    pub clock: String,
    pub period_label: String,

    pub bet_side: Side,
    pub bet_team: String,
    pub bet_team_name: String,
    pub fade_team: String,
    pub fade_team_name: String,
    pub evidence: Vec<Evidence>,
    pub signal_types: BTreeSet<SignalType>,
    pub signal_count: u32,
    pub combined: bool,
    pub urgency: Urgency,
    pub home_court: HomeCourt,
    pub recommendation: Recommendation,

    /// American price at issue
    pub market_price: i32,
    pub has_live_odds: bool,
    pub quote_key: Option<String>,
    pub implied_prob: Decimal,
    pub stake: Stake,
    pub issued_at: DateTime<Utc>,

    /// Entry price minus the price 4-7 minutes later
    #[serde(default)]
    pub lec_5: Option<i32>,
    /// Entry price minus the price 9-12 minutes later
    #[serde(default)]
    pub lec_10: Option<i32>,

    #[serde(default)]
    pub final_away_score: Option<i32>,
    #[serde(default)]
    pub final_home_score: Option<i32>,
    #[serde(default)]
    pub result: Option<BetResult>,
    #[serde(default)]
    pub pnl: Option<Decimal>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Signal {
    /// Open a new signal from a draft
    pub fn open(draft: SignalDraft<'_>) -> Self {
        let key = draft.key();
        let snap = draft.snapshot;
        let bet = snap.team(draft.pick.bet_side);
        let fade = snap.team(draft.pick.fade_side);

        Self {
            id: Uuid::new_v4(),
            key,
            event_id: snap.event_id.clone(),
            league: draft.league.mode,
            game: snap.label(),
            away_abbr: snap.away.abbr.clone(),
            home_abbr: snap.home.abbr.clone(),
            away_name: snap.away.name.clone(),
            home_name: snap.home.name.clone(),
            away_score: snap.away.score,
            home_score: snap.home.score,
            period: snap.period,
            clock: snap.clock.clone(),
            period_label: draft.league.period_label(snap.period),
            bet_side: draft.pick.bet_side,
            bet_team: bet.abbr.clone(),
            bet_team_name: bet.name.clone(),
            fade_team: fade.abbr.clone(),
            fade_team_name: fade.name.clone(),
            home_court: draft.pick.home_court,
            evidence: draft.pick.evidence,
            signal_types: draft.pick.signal_types,
            signal_count: draft.pick.signal_count,
            combined: draft.pick.combined,
            urgency: draft.urgency,
            recommendation: draft.recommendation,
            market_price: draft.price.price,
            has_live_odds: draft.price.has_live_odds,
            quote_key: draft.price.quote_key,
            implied_prob: draft.implied_prob,
            stake: draft.stake,
            issued_at: draft.issued_at,
            lec_5: None,
            lec_10: None,
            final_away_score: None,
            final_home_score: None,
            result: None,
            pnl: None,
            resolved_at: None,
        }
    }

    pub fn state(&self) -> SignalState {
        if self.resolved_at.is_some() {
            SignalState::Resolved
        } else {
            SignalState::Open
        }
    }

    pub fn is_open(&self) -> bool {
        self.state() == SignalState::Open
    }

    /// Home-court boost went into the fade totals
    pub fn home_court_edge(&self) -> bool {
        self.home_court.applied()
    }

    /// "3PT + STAR"
    pub fn types_label(&self) -> String {
        self.signal_types
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::log::tests::make_signal;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_signal_key_hour_bucket() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 1, 59, 59).unwrap();
        assert_eq!(
            signal_key("401", "BOS", LeagueMode::Nba, at),
            "401_BOS_nba_2025-01-15T01"
        );
        let next = Utc.with_ymd_and_hms(2025, 1, 15, 2, 0, 0).unwrap();
        assert_ne!(
            signal_key("401", "BOS", LeagueMode::Nba, at),
            signal_key("401", "BOS", LeagueMode::Nba, next)
        );
    }

    #[test]
    fn test_home_court_edge_follows_home_court() {
        let nba = LeagueConfig::nba();
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 1, 0, 0).unwrap();
        let mut signal = make_signal(&nba, "401", Side::Home, -150, dec!(5), at);
        assert!(!signal.home_court_edge());

        signal.home_court = HomeCourt::Headwind;
        assert!(signal.home_court_edge());

        // Older records carrying the flag still load
        let mut json = serde_json::to_value(&signal).unwrap();
        json["home_court_edge"] = serde_json::Value::Bool(false);
        let loaded: Signal = serde_json::from_value(json).unwrap();
        assert_eq!(loaded.home_court, HomeCourt::Headwind);
        assert!(loaded.home_court_edge());
    }
}

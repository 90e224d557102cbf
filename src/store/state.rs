//! Mutable per-league engine state

use crate::league::LeagueMode;
use crate::momentum::MomentumTracker;
use crate::odds::OddsBook;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rolling score history and cached quotes for one league
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueState {
    #[serde(default)]
    pub score_history: MomentumTracker,
    #[serde(default)]
    pub odds: OddsBook,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    #[serde(default)]
    pub leagues: BTreeMap<LeagueMode, LeagueState>,
}

impl EngineState {
    /// State for a league, created empty on first use
    pub fn league_mut(&mut self, mode: LeagueMode) -> &mut LeagueState {
        self.leagues.entry(mode).or_default()
    }

    pub fn league(&self, mode: LeagueMode) -> Option<&LeagueState> {
        self.leagues.get(&mode)
    }
}

//! Star table loading and lookup

use super::builtin_nba;
use crate::league::{LeagueConfig, LeagueMode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A tracked scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub name: String,
    /// Team abbreviation
    pub team: String,
    /// Season points per game
    pub ppg: Decimal,
}

/// On-disk shape of the star file
#[derive(Debug, Default, Deserialize)]
struct StarFile {
    #[serde(default)]
    nba: Vec<Star>,
    #[serde(default)]
    ncaab: Vec<Star>,
}

const NAME_SUFFIXES: &[&str] = &["jr", "jr.", "sr", "sr.", "ii", "iii", "iv"];

/// Map feed abbreviations onto one canonical form
pub fn normalize_abbr(abbr: &str) -> String {
    let upper = abbr.trim().to_ascii_uppercase();
    let canonical = match upper.as_str() {
        "GSW" => "GS",
        "UTAH" => "UTA",
        "NOP" | "NOR" => "NO",
        "PHO" => "PHX",
        "BRK" => "BKN",
        "SAS" => "SA",
        "NYK" => "NY",
        "WSH" => "WAS",
        other => return other.to_string(),
    };
    canonical.to_string()
}

/// Lowercase last name, skipping generational suffixes
pub fn surname(name: &str) -> Option<String> {
    name.split_whitespace()
        .rev()
        .map(|token| token.to_lowercase())
        .find(|token| !NAME_SUFFIXES.contains(&token.as_str()))
}

/// Read-only star lookup by league
#[derive(Debug, Clone, Default)]
pub struct StarTable {
    stars: BTreeMap<LeagueMode, Vec<Star>>,
}

impl StarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with only the built-in NBA roster
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert(LeagueMode::Nba, builtin_nba());
        table
    }

    /// Load a star file; a missing or malformed file degrades to the built-in roster
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let file = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<StarFile>(&content) {
                Ok(file) => file,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Malformed star file, ignoring");
                    StarFile::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Star file unavailable");
                StarFile::default()
            }
        };
        Self::from_lists(file.nba, file.ncaab)
    }

    /// Build from explicit lists, falling back to the built-in NBA roster
    pub fn from_lists(nba: Vec<Star>, ncaab: Vec<Star>) -> Self {
        let mut table = Self::new();
        table.insert(
            LeagueMode::Nba,
            if nba.is_empty() { builtin_nba() } else { nba },
        );
        table.insert(LeagueMode::Ncaab, ncaab);

        tracing::info!(
            nba = table.len(LeagueMode::Nba),
            ncaab = table.len(LeagueMode::Ncaab),
            "Star table loaded"
        );
        table
    }

    pub fn insert(&mut self, mode: LeagueMode, stars: Vec<Star>) {
        self.stars.insert(mode, stars);
    }

    pub fn len(&self, mode: LeagueMode) -> usize {
        self.stars.get(&mode).map_or(0, Vec::len)
    }

    /// Find a tracked star by leader name and team
    ///
    /// Matches on surname and normalized abbreviation; entries below the
    /// league's scoring floor are never returned.
    pub fn lookup(&self, league: &LeagueConfig, name: &str, team: &str) -> Option<&Star> {
        let wanted = surname(name)?;
        let team = normalize_abbr(team);

        self.stars.get(&league.mode)?.iter().find(|star| {
            star.ppg >= league.star_ppg_min
                && normalize_abbr(&star.team) == team
                && surname(&star.name).as_deref() == Some(wanted.as_str())
        })
    }
}

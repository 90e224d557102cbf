//! Built-in NBA roster used when the star file has no NBA entries

use super::Star;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const NBA: &[(&str, &str, Decimal)] = &[
    ("Luka Doncic", "LAL", dec!(32.5)),
    ("Shai Gilgeous-Alexander", "OKC", dec!(31.8)),
    ("Anthony Edwards", "MIN", dec!(29.6)),
    ("Jaylen Brown", "BOS", dec!(29.2)),
    ("Tyrese Maxey", "PHI", dec!(29.1)),
    ("Nikola Jokic", "DEN", dec!(28.8)),
    ("Donovan Mitchell", "CLE", dec!(28.5)),
    ("Kawhi Leonard", "LAC", dec!(28.0)),
    ("Lauri Markkanen", "UTA", dec!(26.7)),
    ("Jalen Brunson", "NYK", dec!(26.7)),
    ("Kevin Durant", "HOU", dec!(25.9)),
    ("Jamal Murray", "DEN", dec!(25.5)),
    ("Cade Cunningham", "DET", dec!(25.3)),
    ("Devin Booker", "PHX", dec!(24.7)),
    ("Michael Porter Jr.", "BKN", dec!(24.6)),
    ("James Harden", "LAC", dec!(24.5)),
    ("Deni Avdija", "POR", dec!(24.4)),
    ("Victor Wembanyama", "SAS", dec!(24.2)),
    ("Pascal Siakam", "IND", dec!(23.9)),
    ("Keyonte George", "UTA", dec!(23.8)),
    ("Jalen Johnson", "ATL", dec!(23.0)),
    ("Norman Powell", "MIA", dec!(22.9)),
    ("Trey Murphy III", "NOP", dec!(21.9)),
    ("Julius Randle", "MIN", dec!(21.9)),
    ("Zion Williamson", "NOP", dec!(21.8)),
];

/// NBA stars at 21+ points per game
pub fn builtin_nba() -> Vec<Star> {
    NBA.iter()
        .map(|(name, team, ppg)| Star {
            name: name.to_string(),
            team: team.to_string(),
            ppg: *ppg,
        })
        .collect()
}

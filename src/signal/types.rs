//! Signal aggregation types

use crate::feed::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Category of raw evidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalType {
    /// Lead built on unsustainable three-point shooting
    ThreePointFragile,
    /// Tracked star well below expected output
    StarCoil,
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalType::ThreePointFragile => f.write_str("3PT"),
            SignalType::StarCoil => f.write_str("STAR"),
        }
    }
}

/// Star coil classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoilTier {
    /// Cast holding up (gap >= -8)
    Elite,
    /// Cast gap in [-15, -8)
    Standard,
    Weak,
    /// Star's team trails and the deficit has stopped moving
    Locked,
}

impl CoilTier {
    /// Fade units and whether they land on the star's own team
    pub fn fade_weight(&self) -> Option<(Decimal, bool)> {
        match self {
            CoilTier::Elite => Some((Decimal::new(15, 1), false)),
            CoilTier::Standard => Some((Decimal::ONE, false)),
            CoilTier::Locked => Some((Decimal::ONE, true)),
            CoilTier::Weak => None,
        }
    }
}

impl fmt::Display for CoilTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CoilTier::Elite => "ELITE",
            CoilTier::Standard => "STANDARD",
            CoilTier::Weak => "WEAK",
            CoilTier::Locked => "LOCKED",
        };
        f.write_str(s)
    }
}

/// One explained piece of evidence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub kind: SignalType,
    /// Team abbreviation the evidence is about
    pub team: String,
    pub text: String,
    pub strong: bool,
    /// Found by the loosened thresholds
    #[serde(default)]
    pub soft: bool,
}

/// Home-court adjustment outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeCourt {
    #[default]
    None,
    /// Boost applied and the pick is the home side
    Tailwind,
    /// Boost applied but the pick is still the road side
    Headwind,
}

impl HomeCourt {
    pub fn applied(&self) -> bool {
        !matches!(self, HomeCourt::None)
    }
}

/// Aggregated directional pick for one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub bet_side: Side,
    pub fade_side: Side,
    pub evidence: Vec<Evidence>,
    pub signal_types: BTreeSet<SignalType>,
    /// Both categories present and not self-canceling
    pub combined: bool,
    /// Independent categories supporting the pick (1 or 2)
    pub signal_count: u32,
    pub away_fade: Decimal,
    pub home_fade: Decimal,
    pub home_court: HomeCourt,
}

//! In-game analyzers
//!
//! Pure functions over one team's line in a snapshot. Missing data never
//! errors: a zero score or an unknown star simply short-circuits the check.

mod cast;
mod durability;

pub use cast::{analyze_cast, CastStrength, SupportingCast};
pub use durability::{analyze_durability, Durability};

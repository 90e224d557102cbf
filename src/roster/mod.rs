//! Tracked-star lookup
//!
//! Season scoring rates for notable players, keyed by league. The table is
//! built by an external job; this module only reads it.

mod builtin;
mod table;

pub use builtin::builtin_nba;
pub use table::{normalize_abbr, surname, Star, StarTable};

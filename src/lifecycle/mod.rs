//! Signal lifecycle
//!
//! An append-only log of issued signals: hour-bucket dedup on issue,
//! post-issue line movement capture, and one-way resolution against final
//! scores.

mod log;
mod signal;
mod summary;

pub use log::{SignalLog, LEC_10_WINDOW, LEC_5_WINDOW};
pub use signal::{signal_key, BetResult, Signal, SignalDraft, SignalState};
pub use summary::{LeagueSummary, Summary};

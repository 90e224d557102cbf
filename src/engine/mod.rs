//! Polling engine
//!
//! `Engine` owns every piece of mutable state (score history, odds cache,
//! signal log) and runs one league poll at a time. `Scheduler` drives it on
//! a fixed cadence from a single task.

mod context;
mod scheduler;

pub use context::{Collaborators, Engine, PollReport};
pub use scheduler::Scheduler;

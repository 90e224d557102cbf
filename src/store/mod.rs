//! Persistence
//!
//! Engine state (score history and odds cache per league) and the signal log
//! are stored as two pretty-printed JSON documents.

mod json;
mod state;

pub use json::{JsonFileStore, SIGNALS_FILE, STATE_FILE};
pub use state::{EngineState, LeagueState};

use crate::lifecycle::SignalLog;
use async_trait::async_trait;
use thiserror::Error;

/// Persistence failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Durable storage for engine state and signals
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn load_state(&self) -> Result<EngineState, StoreError>;
    async fn save_state(&self, state: &EngineState) -> Result<(), StoreError>;
    async fn load_signals(&self) -> Result<SignalLog, StoreError>;
    async fn save_signals(&self, signals: &SignalLog) -> Result<(), StoreError>;
}

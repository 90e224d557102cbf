//! JSON file store

use super::{EngineState, StateStore, StoreError};
use crate::lifecycle::SignalLog;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const STATE_FILE: &str = "engine-state.json";
pub const SIGNALS_FILE: &str = "engine-signals.json";

/// Two JSON documents under a data directory
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    pub fn signals_path(&self) -> PathBuf {
        self.dir.join(SIGNALS_FILE)
    }

    /// Missing file reads as the default value
    async fn read<T: DeserializeOwned + Default>(path: &Path) -> Result<T, StoreError> {
        match fs::read_to_string(path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No stored file, starting empty");
                Ok(T::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a sibling temp file, then rename over the target
    async fn write<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(value)?;
        fs::create_dir_all(&self.dir).await?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, body).await?;
        fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn load_state(&self) -> Result<EngineState, StoreError> {
        Self::read(&self.state_path()).await
    }

    async fn save_state(&self, state: &EngineState) -> Result<(), StoreError> {
        self.write(&self.state_path(), state).await
    }

    async fn load_signals(&self) -> Result<SignalLog, StoreError> {
        Self::read(&self.signals_path()).await
    }

    async fn save_signals(&self, signals: &SignalLog) -> Result<(), StoreError> {
        self.write(&self.signals_path(), signals).await
    }
}

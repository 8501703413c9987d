use crate::persistence::files::{atomic_write, ensure_tempo_dir};
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Internal failure modes for the store. The public surface absorbs these:
/// a failed read presents as an absent value, a failed write as a no-op.
#[derive(Debug, Error)]
enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {reason}")]
    Write {
        path: PathBuf,
        reason: anyhow::Error,
    },
}

/// Key-scoped best-effort persistence primitive. Each key maps to one JSON
/// file under the store root; a value is only ever the most recent full
/// serialization written for that key.
#[derive(Debug)]
pub struct DurableStore {
    root: PathBuf,
}

impl DurableStore {
    /// Open the store over the tempo data directory, creating it if needed.
    pub fn open_default() -> Result<Self> {
        let root = ensure_tempo_dir()?;
        Ok(Self { root })
    }

    /// Open the store over a fixed root directory
    pub fn at(root: PathBuf) -> Self {
        Self { root }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// Read the value stored under `key`. Absent, unreadable, or non-UTF-8
    /// content all present as `None`; this never errors.
    pub fn read(&self, key: &str) -> Option<String> {
        self.try_read(key).ok().flatten()
    }

    /// Write `value` under `key`, replacing any previous value. Durability is
    /// best-effort: a failed write is silently dropped and in-memory state
    /// stays authoritative for the session.
    pub fn write(&self, key: &str, value: &str) {
        let _ = self.try_write(key, value);
    }

    fn try_read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| StoreError::Read { path, source })
    }

    fn try_write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        atomic_write(&path, value).map_err(|reason| StoreError::Write { path, reason })
    }
}

//! In-process ledger backed by a sorted map.
//!
//! State can be carried between host runs through a JSON snapshot: one
//! object mapping each key to its value as UTF-8 text.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::{LedgerStore, StoreError};

/// A [`LedgerStore`] that lives in memory for the duration of the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    state: BTreeMap<String, Vec<u8>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.state.keys().map(String::as_str)
    }

    /// Load a snapshot written by [`MemoryLedger::save_snapshot`].
    pub fn load_snapshot(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read(path).map_err(|e| {
            StoreError::Snapshot(format!("cannot read {}: {e}", path.display()))
        })?;
        let entries: BTreeMap<String, String> = serde_json::from_slice(&raw).map_err(|e| {
            StoreError::Snapshot(format!("malformed snapshot {}: {e}", path.display()))
        })?;

        let state = entries
            .into_iter()
            .map(|(k, v)| (k, v.into_bytes()))
            .collect::<BTreeMap<_, _>>();
        tracing::info!(path = %path.display(), keys = state.len(), "Loaded ledger snapshot");

        Ok(Self { state })
    }

    /// Write every entry to `path`, replacing any previous snapshot.
    ///
    /// Fails without touching the file if a value is not valid UTF-8.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), StoreError> {
        let mut entries = BTreeMap::new();
        for (key, value) in &self.state {
            let text = std::str::from_utf8(value).map_err(|e| {
                StoreError::Snapshot(format!("value under '{key}' is not UTF-8: {e}"))
            })?;
            entries.insert(key.as_str(), text);
        }

        let json = serde_json::to_vec_pretty(&entries)
            .map_err(|e| StoreError::Snapshot(format!("cannot encode snapshot: {e}")))?;
        fs::write(path, json).map_err(|e| {
            StoreError::Snapshot(format!("cannot write {}: {e}", path.display()))
        })?;
        tracing::info!(path = %path.display(), keys = entries.len(), "Saved ledger snapshot");

        Ok(())
    }
}

impl LedgerStore for MemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.state.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        tracing::trace!(key, bytes = value.len(), "put");
        self.state.insert(key.to_string(), value);
        Ok(())
    }
}

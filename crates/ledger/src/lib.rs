//! The key-value contract the asset contract needs from its ledger, plus an
//! in-process implementation used by the local host and by tests.

pub mod memory;

pub use memory::MemoryLedger;

/// Errors raised by a [`LedgerStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be read. A missing key is not an error.
    #[error("Failed to get state for key '{key}': {reason}")]
    Get { key: String, reason: String },

    #[error("Failed to put state for key '{key}': {reason}")]
    Put { key: String, reason: String },

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

/// Minimal ledger primitives.
///
/// `get` returns `Ok(None)` for a key that was never written, distinct from a
/// read failure. `put` overwrites unconditionally.
pub trait LedgerStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;
}

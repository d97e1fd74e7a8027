//! Ledger store abstraction
//!
//! The ledger persists as a single opaque JSON blob. Callers receive a
//! [`LedgerStore`] capability rather than reaching for a process-wide
//! singleton, so the file-backed and in-memory implementations are
//! interchangeable (the in-memory one backs tests and read-only
//! deployments).

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::models::Ledger;

/// Read/write access to the persisted ledger snapshot.
pub trait LedgerStore: Send + Sync {
    /// Load the current ledger snapshot.
    fn read(&self) -> Result<Ledger>;

    /// Persist a new ledger snapshot, replacing the previous one.
    fn write(&self, ledger: &Ledger) -> Result<()>;
}

/// In-memory store. State lives for the lifetime of the value.
pub struct MemoryStore {
    inner: Mutex<Ledger>,
}

impl MemoryStore {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Mutex::new(ledger),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Ledger::default())
    }
}

impl LedgerStore for MemoryStore {
    fn read(&self) -> Result<Ledger> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| Error::Store("ledger lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn write(&self, ledger: &Ledger) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| Error::Store("ledger lock poisoned".to_string()))?;
        *guard = ledger.clone();
        Ok(())
    }
}

/// File-backed store holding the ledger as pretty-printed JSON.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl LedgerStore for JsonFileStore {
    /// Missing file reads as an empty ledger; a corrupt file is an error.
    fn read(&self) -> Result<Ledger> {
        if !self.path.exists() {
            return Ok(Ledger::default());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Write to a sibling temp file, then rename over the target so a
        // crash mid-write cannot leave a truncated ledger behind.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(ledger)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        assert!(store.read().unwrap().transactions.is_empty());

        store.write(&Ledger::demo()).unwrap();
        let ledger = store.read().unwrap();
        assert_eq!(ledger.transactions.len(), 3);
        assert_eq!(ledger.savings_pocket, 2450.0);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("ledger.json"));

        // Missing file reads as an empty ledger
        assert!(!store.exists());
        assert!(store.read().unwrap().transactions.is_empty());

        store.write(&Ledger::demo()).unwrap();
        assert!(store.exists());

        let ledger = store.read().unwrap();
        assert_eq!(ledger.budget, 20000.0);
        assert_eq!(ledger.goals.len(), 2);
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deep/ledger.json"));
        store.write(&Ledger::default()).unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_file_store_rejects_corrupt_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, "not json {").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.read(), Err(Error::Json(_))));
    }
}

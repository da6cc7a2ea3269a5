//! # Storage Layer
//!
//! The todo collection lives in a single named **durable slot**: one key holding
//! the whole collection serialized as a JSON array of
//! `{"id": string, "todo": string, "isCompleted": bool}` objects.
//!
//! ## Layers
//!
//! - [`backend::SlotBackend`]: raw slot I/O (read a string, atomically replace it)
//!   - [`fs_backend::FsBackend`]: production, one `<key>.json` file per slot
//!   - [`mem_backend::MemBackend`]: testing, no persistence, can simulate write failures
//! - [`TodoPersistence`]: the adapter the store talks to. Serializes the full
//!   snapshot on [`TodoPersistence::save`] and turns backend or parse failures
//!   into [`PersistenceError`]s.
//!
//! There is no schema versioning, no migration and no partial write: every save
//! overwrites the slot with the complete current collection.

use crate::error::{ItaskError, PersistenceError};
use crate::model::TodoRecord;
use std::collections::HashSet;
use std::path::PathBuf;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::SlotBackend;

/// Default slot key, the same key browser builds of the app use.
pub const DEFAULT_SLOT_KEY: &str = "todos";

pub struct TodoPersistence<B: SlotBackend> {
    backend: B,
    key: String,
}

impl<B: SlotBackend> TodoPersistence<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn slot_path(&self) -> PathBuf {
        self.backend.slot_path(&self.key)
    }

    /// Read the collection. An absent or blank slot is an empty collection.
    ///
    /// Ids must be unique: a record repeating an earlier id is dropped and
    /// the first one wins.
    pub fn load(&self) -> Result<Vec<TodoRecord>, PersistenceError> {
        let raw = self
            .backend
            .read_slot(&self.key)
            .map_err(|e| PersistenceError::ReadFailed {
                key: self.key.clone(),
                reason: e.to_string(),
            })?;

        let raw = match raw {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                tracing::debug!(key = %self.key, "slot empty, starting with no todos");
                return Ok(Vec::new());
            }
        };

        let mut items: Vec<TodoRecord> =
            serde_json::from_str(&raw).map_err(|e| PersistenceError::Corrupt {
                key: self.key.clone(),
                reason: e.to_string(),
            })?;

        let mut seen = HashSet::new();
        items.retain(|item| {
            let first = seen.insert(item.id.clone());
            if !first {
                tracing::warn!(key = %self.key, id = %item.id, "dropping todo with duplicate id");
            }
            first
        });
        tracing::debug!(key = %self.key, count = items.len(), "loaded todos");
        Ok(items)
    }

    /// Overwrite the slot with the full snapshot.
    pub fn save(&self, items: &[TodoRecord]) -> Result<(), PersistenceError> {
        let write_failed = |e: ItaskError| PersistenceError::WriteFailed {
            key: self.key.clone(),
            reason: e.to_string(),
        };

        let raw = serde_json::to_string(items).map_err(|e| write_failed(e.into()))?;
        self.backend
            .write_slot(&self.key, &raw)
            .map_err(write_failed)?;
        tracing::debug!(key = %self.key, count = items.len(), "saved todos");
        Ok(())
    }
}

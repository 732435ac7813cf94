//! Client-local view history ledger.
//!
//! The ledger records pastes this machine has viewed, most recent first and
//! unique by id. It is the desktop analog of the original page's
//! local-storage `"history"` key: a single JSON document rewritten whole on
//! every update, with no cross-process coordination (last write wins).

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// One viewed paste remembered by the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: String,
    pub title: String,
}

/// Persistence seam for the ledger.
///
/// `load` is infallible by contract: an absent (or unreadable) ledger is an
/// empty one, so the viewer can never fail a page load over history state.
pub trait HistoryStore: Send {
    fn load(&self) -> Vec<HistoryEntry>;
    fn save(&self, entries: &[HistoryEntry]) -> Result<(), AppError>;
}

/// Reconcile the ledger after a successful view.
///
/// Removes any prior entry for `id` and prepends a fresh one, so the ledger
/// stays unique by id with the latest view first.
pub fn record_view(entries: Vec<HistoryEntry>, id: &str, title: &str) -> Vec<HistoryEntry> {
    let mut next = Vec::with_capacity(entries.len() + 1);
    next.push(HistoryEntry {
        id: id.to_string(),
        title: title.to_string(),
    });
    next.extend(entries.into_iter().filter(|entry| entry.id != id));
    next
}

/// JSON-file ledger implementation.
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for FileHistory {
    fn load(&self) -> Vec<HistoryEntry> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!("history ledger unreadable at {:?}: {}", self.path, err);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                // A corrupt ledger must not wedge the viewer; start over.
                warn!("history ledger corrupt at {:?}: {}", self.path, err);
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(entries)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

//! Shared test-only fakes for the store and history seams.

use crate::error::AppError;
use crate::history::{HistoryEntry, HistoryStore};
use crate::models::paste::Paste;
use crate::store::PasteStore;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// In-memory `Pastes` table with a switchable outage mode.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<HashMap<String, Paste>>,
    failing: AtomicBool,
}

impl MemoryStore {
    /// Insert a row directly, bypassing the `PasteStore` seam.
    pub fn seed(&self, paste: Paste) {
        self.rows
            .lock()
            .expect("store lock")
            .insert(paste.id.clone(), paste);
    }

    /// Make every subsequent store call fail like a transport outage.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of rows currently held.
    pub fn len(&self) -> usize {
        self.rows.lock().expect("store lock").len()
    }

    /// True when no rows are held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_outage(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::StoreMessage("simulated outage".to_string()));
        }
        Ok(())
    }
}

impl PasteStore for MemoryStore {
    fn fetch(&self, id: &str) -> Result<Option<Paste>, AppError> {
        self.check_outage()?;
        Ok(self.rows.lock().expect("store lock").get(id).cloned())
    }

    fn insert(&self, paste: &Paste) -> Result<(), AppError> {
        self.check_outage()?;
        self.rows
            .lock()
            .expect("store lock")
            .insert(paste.id.clone(), paste.clone());
        Ok(())
    }
}

// Shared handles let a test keep inspecting rows after the store has been
// boxed into a worker.
impl PasteStore for std::sync::Arc<MemoryStore> {
    fn fetch(&self, id: &str) -> Result<Option<Paste>, AppError> {
        self.as_ref().fetch(id)
    }

    fn insert(&self, paste: &Paste) -> Result<(), AppError> {
        self.as_ref().insert(paste)
    }
}

/// In-memory history ledger.
#[derive(Default)]
pub struct MemoryHistory {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl HistoryStore for MemoryHistory {
    fn load(&self) -> Vec<HistoryEntry> {
        self.entries.lock().expect("history lock").clone()
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), AppError> {
        *self.entries.lock().expect("history lock") = entries.to_vec();
        Ok(())
    }
}

//! Headless tests for the app state machine, driven through the real
//! backend worker with in-memory fakes.

mod state_basics;

use super::*;
use crate::backend::spawn_backend;
use ryopaste_core::test_support::MemoryStore;
use std::sync::Arc;
use tempfile::TempDir;

struct TestApp {
    app: RyoPasteApp,
    store: Arc<MemoryStore>,
    _history_dir: TempDir,
}

/// App wired to a shared in-memory store and a ledger file in a temp dir.
/// The worker and the history panel read the same ledger path, as in
/// production.
fn test_app() -> TestApp {
    let store = Arc::new(MemoryStore::default());
    let dir = TempDir::new().expect("temp dir");
    let ledger_path = dir.path().join("history.json");
    let backend = spawn_backend(
        Box::new(store.clone()),
        Box::new(FileHistory::new(ledger_path.clone())),
    );
    let app = RyoPasteApp::with_parts(
        backend,
        FileHistory::new(ledger_path),
        "https://paste.example".to_string(),
    );
    TestApp {
        app,
        store,
        _history_dir: dir,
    }
}

/// Block for the next worker event and apply it, as the frame loop would.
fn pump(app: &mut RyoPasteApp) {
    let event = app
        .backend
        .evt_rx
        .recv_timeout(Duration::from_secs(2))
        .expect("expected backend event");
    app.apply_event(event);
}

fn seeded(id: &str, code: &str, name: &str) -> ryopaste_core::models::paste::Paste {
    ryopaste_core::models::paste::Paste {
        id: id.to_string(),
        code: code.to_string(),
        lang: "rust".to_string(),
        name: name.to_string(),
    }
}

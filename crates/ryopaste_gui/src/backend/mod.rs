//! Backend worker wiring.
//!
//! This module exposes the command/event protocol plus the worker spawn
//! helper used by the egui UI thread.

mod protocol;
mod worker;

pub use protocol::{StoreCmd, StoreEvent};
pub use worker::{spawn_backend, BackendHandle};

#[cfg(test)]
mod tests {
    use super::*;
    use ryopaste_core::models::paste::Paste;
    use ryopaste_core::test_support::{MemoryHistory, MemoryStore};
    use std::sync::Arc;
    use std::time::Duration;

    fn recv_event(rx: &crossbeam_channel::Receiver<StoreEvent>) -> StoreEvent {
        rx.recv_timeout(Duration::from_secs(2))
            .expect("expected backend event")
    }

    #[test]
    fn worker_resolves_existing_pastes() {
        let store = Arc::new(MemoryStore::default());
        store.seed(Paste {
            id: "p1".into(),
            code: "alpha".into(),
            lang: "rust".into(),
            name: "first".into(),
        });
        let backend = spawn_backend(Box::new(store), Box::new(MemoryHistory::default()));

        backend
            .cmd_tx
            .send(StoreCmd::ResolvePaste { id: "p1".into() })
            .expect("send resolve");

        match recv_event(&backend.evt_rx) {
            StoreEvent::DocumentReady { id, document } => {
                assert_eq!(id, "p1");
                assert!(document.success);
                assert_eq!(document.code, "alpha");
                assert_eq!(document.title, "first");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn worker_reports_missing_pastes_as_placeholder_documents() {
        let backend = spawn_backend(
            Box::new(Arc::new(MemoryStore::default())),
            Box::new(MemoryHistory::default()),
        );

        backend
            .cmd_tx
            .send(StoreCmd::ResolvePaste {
                id: "missing".into(),
            })
            .expect("send resolve");

        match recv_event(&backend.evt_rx) {
            StoreEvent::DocumentReady { id, document } => {
                assert_eq!(id, "missing");
                assert!(!document.success);
                assert_eq!(document.title, "Not found");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn worker_saves_drafts_and_returns_the_new_id() {
        let store = Arc::new(MemoryStore::default());
        let backend = spawn_backend(Box::new(store.clone()), Box::new(MemoryHistory::default()));

        backend
            .cmd_tx
            .send(StoreCmd::SavePaste {
                code: "print(1)".into(),
                lang: "python".into(),
                name: "t".into(),
            })
            .expect("send save");

        let id = match recv_event(&backend.evt_rx) {
            StoreEvent::PasteSaved { id } => id,
            other => panic!("unexpected event: {:?}", other),
        };
        assert_eq!(store.len(), 1);

        backend
            .cmd_tx
            .send(StoreCmd::ResolvePaste { id })
            .expect("send resolve");
        match recv_event(&backend.evt_rx) {
            StoreEvent::DocumentReady { document, .. } => {
                assert_eq!(document.code, "print(1)");
                assert_eq!(document.title, "t");
                assert_eq!(document.lang, "python");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn worker_surfaces_insert_failures() {
        let store = Arc::new(MemoryStore::default());
        store.set_failing(true);
        let backend = spawn_backend(Box::new(store.clone()), Box::new(MemoryHistory::default()));

        backend
            .cmd_tx
            .send(StoreCmd::SavePaste {
                code: "x".into(),
                lang: "md".into(),
                name: "Untitled".into(),
            })
            .expect("send save");

        match recv_event(&backend.evt_rx) {
            StoreEvent::SaveFailed { message } => {
                assert!(message.contains("simulated outage"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(store.is_empty());
    }
}

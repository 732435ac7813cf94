//! Background worker thread for remote store access.

use crate::backend::{StoreCmd, StoreEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use ryopaste_core::document::resolve_paste;
use ryopaste_core::history::HistoryStore;
use ryopaste_core::models::paste::Paste;
use ryopaste_core::store::PasteStore;
use std::thread;
use tracing::error;

/// Handle for sending commands to, and receiving events from, the worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<StoreCmd>,
    pub evt_rx: Receiver<StoreEvent>,
}

/// Spawn the worker thread that performs blocking store access.
///
/// All network I/O stays off the UI thread; the worker replies with
/// [`StoreEvent`] values that are polled each frame. Requests carry no
/// timeout and are never retried, so a hung call simply leaves the issuing
/// page in its loading state.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_backend(
    store: Box<dyn PasteStore>,
    history: Box<dyn HistoryStore>,
) -> BackendHandle {
    let (cmd_tx, cmd_rx) = unbounded::<StoreCmd>();
    let (evt_tx, evt_rx) = unbounded::<StoreEvent>();

    thread::Builder::new()
        .name("ryopaste-backend".to_string())
        .spawn(move || {
            for cmd in cmd_rx.iter() {
                match cmd {
                    StoreCmd::ResolvePaste { id } => {
                        let document = resolve_paste(store.as_ref(), history.as_ref(), &id);
                        let _ = evt_tx.send(StoreEvent::DocumentReady { id, document });
                    }
                    StoreCmd::SavePaste { code, lang, name } => {
                        let paste = Paste::new(code, lang, name);
                        match store.insert(&paste) {
                            Ok(()) => {
                                let _ = evt_tx.send(StoreEvent::PasteSaved { id: paste.id });
                            }
                            Err(err) => {
                                error!("paste insert failed: {}", err);
                                let _ = evt_tx.send(StoreEvent::SaveFailed {
                                    message: err.to_string(),
                                });
                            }
                        }
                    }
                }
            }
        })
        .expect("spawn backend worker");

    BackendHandle { cmd_tx, evt_rx }
}

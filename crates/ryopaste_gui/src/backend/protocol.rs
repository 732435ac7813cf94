//! Protocol types for the backend worker.

use ryopaste_core::document::PasteDocument;

/// Commands issued by the UI thread for the backend worker to execute.
#[derive(Debug)]
pub enum StoreCmd {
    /// Resolve a paste id into a render-ready document (viewer page load).
    ResolvePaste { id: String },
    /// Mint an identifier and insert a paste assembled from the editor draft.
    SavePaste {
        code: String,
        lang: String,
        name: String,
    },
}

/// Events produced by the backend worker and polled by the UI thread.
#[derive(Debug)]
pub enum StoreEvent {
    /// Resolution finished; the document (content or placeholder) is ready.
    DocumentReady {
        id: String,
        document: PasteDocument,
    },
    /// The insert completed; the UI should navigate to the new paste.
    PasteSaved { id: String },
    /// The insert failed; the draft remains in the editor for a retry.
    SaveFailed { message: String },
}

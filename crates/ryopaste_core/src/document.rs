//! Viewer resolution flow producing render-ready documents.
//!
//! One point lookup per page load. Both failure kinds are terminal for that
//! load and render as fixed substitute documents; only a successful load
//! touches the history ledger.

use crate::history::{record_view, HistoryStore};
use crate::models::paste::Paste;
use crate::store::PasteStore;
use tracing::warn;

const ERROR_BODY: &str = "Error occured, please try again";
const NOT_FOUND_BODY: &str = "Paste not found, make sure you have the right link";
const PLACEHOLDER_LANG: &str = "md";

/// Render-ready state for the viewer page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteDocument {
    pub code: String,
    pub title: String,
    pub lang: String,
    pub success: bool,
}

impl PasteDocument {
    fn error() -> Self {
        Self {
            code: ERROR_BODY.to_string(),
            title: "Error".to_string(),
            lang: PLACEHOLDER_LANG.to_string(),
            success: false,
        }
    }

    fn not_found() -> Self {
        Self {
            code: NOT_FOUND_BODY.to_string(),
            title: "Not found".to_string(),
            lang: PLACEHOLDER_LANG.to_string(),
            success: false,
        }
    }

    fn from_paste(paste: Paste) -> Self {
        Self {
            code: paste.code,
            title: paste.name,
            lang: paste.lang,
            success: true,
        }
    }
}

/// Resolve an identifier into a render-ready document.
///
/// On a hit, the history ledger is reconciled (dedupe by id, prepend) before
/// the document is returned; lookup failures and misses leave the ledger
/// untouched. Lookups are not retried, and a ledger write failure does not
/// fail the resolution.
pub fn resolve_paste(
    store: &dyn PasteStore,
    history: &dyn HistoryStore,
    id: &str,
) -> PasteDocument {
    match store.fetch(id) {
        Err(err) => {
            warn!("paste lookup failed for {}: {}", id, err);
            PasteDocument::error()
        }
        Ok(None) => PasteDocument::not_found(),
        Ok(Some(paste)) => {
            let ledger = record_view(history.load(), id, &paste.name);
            if let Err(err) = history.save(&ledger) {
                warn!("history ledger write failed: {}", err);
            }
            PasteDocument::from_paste(paste)
        }
    }
}

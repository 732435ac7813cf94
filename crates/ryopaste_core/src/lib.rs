//! Core domain library for RyoPaste (config, remote store, history, keymap).

/// Configuration loading and defaults.
pub mod config;
/// Viewer resolution flow producing render-ready documents.
pub mod document;
/// Application error types (store/history).
pub mod error;
/// Client-local view history ledger.
pub mod history;
/// Declarative keyboard chord tables for both views.
pub mod keymap;
/// Data models for pastes and the language catalog.
pub mod models;
/// Remote table access layer.
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

pub use config::Config;
pub use error::AppError;
pub use store::{PasteStore, RemoteTable};

//! Application error types for store access and local state.
use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store request failed: {0}")]
    Store(#[from] reqwest::Error),

    #[error("Store error: {0}")]
    StoreMessage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("History I/O error: {0}")]
    Io(#[from] std::io::Error),
}

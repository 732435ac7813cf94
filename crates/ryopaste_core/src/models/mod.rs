//! Data models shared between the store client and the UI.

/// Language catalog for the selector and highlighter tags.
pub mod language;
/// Paste row model matching the remote table schema.
pub mod paste;

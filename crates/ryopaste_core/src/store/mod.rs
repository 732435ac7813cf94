//! Remote table access layer.

mod remote;

pub use remote::RemoteTable;

use crate::error::AppError;
use crate::models::paste::Paste;

/// Point-lookup and insert-one access to the `Pastes` table.
///
/// The hosted service is treated as an external collaborator; this trait is
/// the seam that lets the resolution and save flows run against an in-memory
/// table in tests.
pub trait PasteStore: Send {
    /// Fetch one paste by identifier.
    ///
    /// # Returns
    /// `Ok(Some(paste))` on a hit, `Ok(None)` when the lookup completed with
    /// zero rows, `Err` when the request could not complete.
    fn fetch(&self, id: &str) -> Result<Option<Paste>, AppError>;

    /// Insert one paste row.
    fn insert(&self, paste: &Paste) -> Result<(), AppError>;
}

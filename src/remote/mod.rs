//! Adapters for the shared services a submission talks to.

pub mod drive;
pub mod sheet;

use crate::errors::AppResult;
use crate::models::Entry;

pub use drive::{DriveStore, MediaObject};
pub use sheet::SheetStore;

/// The shared tabular store holding every entry ever submitted.
pub trait RemoteStore {
    /// Every data row (header excluded) in insertion order. Short rows are skipped.
    fn fetch_all_entries(&self) -> AppResult<Vec<Entry>>;

    /// Append one row at the end. No validation and no idempotence.
    fn append_entry(&self, entry: &Entry) -> AppResult<()>;
}

/// Shared storage for QR photos.
pub trait MediaStore {
    /// Upload `data` as `desired_filename` and return a publicly readable link.
    fn upload_and_link(&self, data: &[u8], desired_filename: &str) -> AppResult<String>;
}

impl<T: RemoteStore + ?Sized> RemoteStore for &T {
    fn fetch_all_entries(&self) -> AppResult<Vec<Entry>> {
        (**self).fetch_all_entries()
    }

    fn append_entry(&self, entry: &Entry) -> AppResult<()> {
        (**self).append_entry(entry)
    }
}

impl<T: MediaStore + ?Sized> MediaStore for &T {
    fn upload_and_link(&self, data: &[u8], desired_filename: &str) -> AppResult<String> {
        (**self).upload_and_link(data, desired_filename)
    }
}

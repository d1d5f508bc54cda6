//! Unified application error type.
//! Adapters, the submission workflow, export and the CLI all return AppError
//! so that every failure reaches the user through the same path.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Submission workflow
    // ---------------------------
    #[error("This Tree Name already exists: {0}")]
    DuplicateEntry(String),

    #[error("Please complete all fields (missing: {0})")]
    IncompleteForm(String),

    #[error("GPS location is missing")]
    MissingLocation,

    #[error("Photo upload failed: {0}")]
    UploadFailed(String),

    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    // ---------------------------
    // Input parsing
    // ---------------------------
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Location error: {0}")]
    Location(String),

    // ---------------------------
    // IO / local database
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for failures caused by an external system rather than user input.
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            AppError::UploadFailed(_) | AppError::RemoteUnavailable(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;

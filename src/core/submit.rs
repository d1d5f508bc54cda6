//! Submission of one tree record: validation, duplicate check, photo upload,
//! remote append and session update.

use crate::config::{FailurePolicy, RemoteFailurePolicy, UploadFailurePolicy};
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::identifier::is_duplicate;
use crate::models::{Entry, IdTemplate, TreeForm};
use crate::remote::{MediaStore, RemoteStore};

/// Checks that need no remote call: every form field filled and both
/// coordinates present. Returns the pending coordinates.
pub fn check_local(session: &Session, form: &TreeForm) -> AppResult<(f64, f64)> {
    if !form.is_complete() {
        return Err(AppError::IncompleteForm(form.missing_fields().join(", ")));
    }

    match (session.latitude(), session.longitude()) {
        (Some(latitude), Some(longitude)) => Ok((latitude, longitude)),
        _ => Err(AppError::MissingLocation),
    }
}

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub entry: Entry,
    pub photo_url: Option<String>,
    /// Set when the photo upload failed and the entry was saved without it.
    pub upload_error: Option<String>,
}

pub struct SubmissionWorkflow<R, M> {
    remote: R,
    media: M,
    template: IdTemplate,
    policy: FailurePolicy,
}

impl<R: RemoteStore, M: MediaStore> SubmissionWorkflow<R, M> {
    pub fn new(remote: R, media: M, template: IdTemplate, policy: FailurePolicy) -> Self {
        Self {
            remote,
            media,
            template,
            policy,
        }
    }

    /// Run one submission attempt. Every failure is terminal for the attempt.
    pub fn submit(&self, session: &mut Session, form: &TreeForm) -> AppResult<SubmissionReceipt> {
        //
        // 1. Candidate identifier
        //
        let identifier = self.template.compose(&form.suffix);

        //
        // 2. Local checks, no network involved
        //
        let (latitude, longitude) = check_local(session, form)?;

        //
        // 3. Fresh remote snapshot and duplicate check
        //
        let existing = self.remote.fetch_all_entries()?;
        if is_duplicate(&identifier, existing.iter().map(|e| e.identifier.as_str())) {
            return Err(AppError::DuplicateEntry(identifier));
        }

        //
        // 4. Photo upload
        //
        let mut photo_url = None;
        let mut upload_error = None;

        if let Some(photo) = session.photo() {
            let filename = self.template.photo_filename(&form.suffix);
            match self.media.upload_and_link(photo, &filename) {
                Ok(url) => photo_url = Some(url),
                Err(e) => match self.policy.upload {
                    UploadFailurePolicy::Abort => return Err(e),
                    UploadFailurePolicy::Continue => upload_error = Some(e.to_string()),
                },
            }
        }

        //
        // 5. Persist
        //
        let entry = Entry {
            identifier,
            species: form.species.trim().to_string(),
            height: form.height.trim().to_string(),
            dbh: form.dbh.trim().to_string(),
            canopy: form.canopy.trim().to_string(),
            latitude: Some(latitude),
            longitude: Some(longitude),
        };

        if let Err(e) = self.remote.append_entry(&entry) {
            if self.policy.remote == RemoteFailurePolicy::KeepLocal {
                session.append_and_reset_pending(entry);
            }
            return Err(e);
        }

        //
        // 6. Session update
        //
        session.append_and_reset_pending(entry.clone());

        Ok(SubmissionReceipt {
            entry,
            photo_url,
            upload_error,
        })
    }
}

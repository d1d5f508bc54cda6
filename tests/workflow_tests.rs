mod common;
use common::entry;

use std::cell::{Cell, RefCell};
use treeqr::config::{FailurePolicy, RemoteFailurePolicy, UploadFailurePolicy};
use treeqr::core::session::Session;
use treeqr::core::submit::SubmissionWorkflow;
use treeqr::errors::{AppError, AppResult};
use treeqr::models::{Entry, IdTemplate, TreeForm};
use treeqr::remote::{MediaStore, RemoteStore};

#[derive(Default)]
struct FakeSheet {
    rows: RefCell<Vec<Entry>>,
    fetches: Cell<usize>,
    fail_fetch: bool,
    fail_append: bool,
}

impl FakeSheet {
    fn with(ids: &[&str]) -> Self {
        let sheet = Self::default();
        sheet
            .rows
            .borrow_mut()
            .extend(ids.iter().map(|id| entry(id)));
        sheet
    }
}

impl RemoteStore for FakeSheet {
    fn fetch_all_entries(&self) -> AppResult<Vec<Entry>> {
        self.fetches.set(self.fetches.get() + 1);
        if self.fail_fetch {
            return Err(AppError::RemoteUnavailable("offline".into()));
        }
        Ok(self.rows.borrow().clone())
    }

    fn append_entry(&self, entry: &Entry) -> AppResult<()> {
        if self.fail_append {
            return Err(AppError::RemoteUnavailable("quota exceeded".into()));
        }
        self.rows.borrow_mut().push(entry.clone());
        Ok(())
    }
}

#[derive(Default)]
struct FakeDrive {
    uploads: RefCell<Vec<String>>,
    fail: bool,
}

impl MediaStore for FakeDrive {
    fn upload_and_link(&self, _data: &[u8], desired_filename: &str) -> AppResult<String> {
        self.uploads.borrow_mut().push(desired_filename.to_string());
        if self.fail {
            return Err(AppError::UploadFailed("permission denied".into()));
        }
        Ok(format!("https://drive.google.com/uc?id={desired_filename}"))
    }
}

fn form(suffix: &str) -> TreeForm {
    TreeForm {
        suffix: suffix.into(),
        species: "Dyera costulata".into(),
        height: "3".into(),
        dbh: "4".into(),
        canopy: "50".into(),
    }
}

fn ready_session(with_photo: bool) -> Session {
    let mut s = Session::new();
    s.request_location();
    s.set_pending_location(Some(1.23), Some(103.4));
    if with_photo {
        s.set_pending_photo(vec![0xFF, 0xD8, 0xFF]);
    }
    s
}

fn workflow<'a>(
    sheet: &'a FakeSheet,
    drive: &'a FakeDrive,
    policy: FailurePolicy,
) -> SubmissionWorkflow<&'a FakeSheet, &'a FakeDrive> {
    SubmissionWorkflow::new(sheet, drive, IdTemplate::new("GGN", "25"), policy)
}

fn policy(upload: UploadFailurePolicy, remote: RemoteFailurePolicy) -> FailurePolicy {
    FailurePolicy { upload, remote }
}

#[test]
fn test_submit_uploads_photo_appends_and_resets() {
    let sheet = FakeSheet::default();
    let drive = FakeDrive::default();
    let wf = workflow(&sheet, &drive, FailurePolicy::default());
    let mut session = ready_session(true);

    let receipt = wf.submit(&mut session, &form("A1")).expect("submit");

    assert_eq!(receipt.entry, entry("GGN/25/A1"));
    assert_eq!(
        receipt.photo_url.as_deref(),
        Some("https://drive.google.com/uc?id=GGN_25_A1_QR.jpg")
    );
    assert!(receipt.upload_error.is_none());
    assert_eq!(*drive.uploads.borrow(), ["GGN_25_A1_QR.jpg"]);
    assert_eq!(*sheet.rows.borrow(), [entry("GGN/25/A1")]);

    assert_eq!(session.entries(), [entry("GGN/25/A1")]);
    assert!(session.latitude().is_none() && session.longitude().is_none());
    assert!(!session.location_requested());
    assert!(session.photo().is_none());
}

#[test]
fn test_submit_without_photo_skips_upload() {
    let sheet = FakeSheet::default();
    let drive = FakeDrive::default();
    let wf = workflow(&sheet, &drive, FailurePolicy::default());
    let mut session = ready_session(false);

    let receipt = wf.submit(&mut session, &form("A1")).expect("submit");

    assert!(receipt.photo_url.is_none());
    assert!(drive.uploads.borrow().is_empty());
    assert_eq!(sheet.rows.borrow().len(), 1);
}

#[test]
fn test_duplicate_in_other_case_and_whitespace_is_rejected() {
    let sheet = FakeSheet::with(&["GGN/25/B2", "GGN/25/A1"]);
    let drive = FakeDrive::default();
    let wf = workflow(&sheet, &drive, FailurePolicy::default());
    let mut session = ready_session(true);

    let err = wf.submit(&mut session, &form(" a1 ")).unwrap_err();

    assert!(matches!(err, AppError::DuplicateEntry(_)));
    assert_eq!(sheet.rows.borrow().len(), 2);
    assert!(drive.uploads.borrow().is_empty());
    // Nothing consumed: the user can fix the suffix and resubmit.
    assert!(session.entries().is_empty());
    assert!(session.photo().is_some());
    assert_eq!(session.latitude(), Some(1.23));
}

#[test]
fn test_duplicate_check_uses_a_fresh_snapshot_each_time() {
    let sheet = FakeSheet::default();
    let drive = FakeDrive::default();
    let wf = workflow(&sheet, &drive, FailurePolicy::default());

    let mut first = ready_session(false);
    wf.submit(&mut first, &form("A1")).expect("first submit");

    // Another session submitting the same tree afterwards sees the new row.
    let mut second = ready_session(false);
    let err = wf.submit(&mut second, &form("a1")).unwrap_err();
    assert!(matches!(err, AppError::DuplicateEntry(_)));
    assert_eq!(sheet.fetches.get(), 2);
}

#[test]
fn test_incomplete_form_fails_before_any_remote_call() {
    let sheet = FakeSheet::default();
    let drive = FakeDrive::default();
    let wf = workflow(&sheet, &drive, FailurePolicy::default());

    for blank in ["species", "height", "dbh", "canopy"] {
        let mut f = form("A1");
        match blank {
            "species" => f.species.clear(),
            "height" => f.height.clear(),
            "dbh" => f.dbh.clear(),
            _ => f.canopy = "   ".into(),
        }

        let mut session = ready_session(true);
        let err = wf.submit(&mut session, &f).unwrap_err();
        assert!(matches!(err, AppError::IncompleteForm(_)), "{blank}: {err}");
    }

    assert_eq!(sheet.fetches.get(), 0);
    assert!(drive.uploads.borrow().is_empty());
}

#[test]
fn test_incomplete_form_names_missing_fields() {
    let sheet = FakeSheet::default();
    let drive = FakeDrive::default();
    let wf = workflow(&sheet, &drive, FailurePolicy::default());
    let mut session = ready_session(false);

    let mut f = form("");
    f.canopy.clear();

    match wf.submit(&mut session, &f) {
        Err(AppError::IncompleteForm(fields)) => assert_eq!(fields, "Tree Name, Canopy"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_missing_coordinate_fails_before_any_remote_call() {
    let sheet = FakeSheet::default();
    let drive = FakeDrive::default();
    let wf = workflow(&sheet, &drive, FailurePolicy::default());

    for (lat, lon) in [(None, None), (Some(1.0), None), (None, Some(103.0))] {
        let mut session = Session::new();
        session.set_pending_location(lat, lon);
        session.set_pending_photo(vec![1, 2, 3]);

        let err = wf.submit(&mut session, &form("A1")).unwrap_err();
        assert!(matches!(err, AppError::MissingLocation));
    }

    assert_eq!(sheet.fetches.get(), 0);
    assert!(drive.uploads.borrow().is_empty());
}

#[test]
fn test_unreachable_store_stops_before_upload() {
    let sheet = FakeSheet {
        fail_fetch: true,
        ..Default::default()
    };
    let drive = FakeDrive::default();
    let wf = workflow(&sheet, &drive, FailurePolicy::default());
    let mut session = ready_session(true);

    let err = wf.submit(&mut session, &form("A1")).unwrap_err();

    assert!(matches!(err, AppError::RemoteUnavailable(_)));
    assert!(drive.uploads.borrow().is_empty());
    assert!(session.entries().is_empty());
}

#[test]
fn test_upload_failure_continue_saves_entry_without_link() {
    let sheet = FakeSheet::default();
    let drive = FakeDrive {
        fail: true,
        ..Default::default()
    };
    let wf = workflow(
        &sheet,
        &drive,
        policy(UploadFailurePolicy::Continue, RemoteFailurePolicy::KeepLocal),
    );
    let mut session = ready_session(true);

    let receipt = wf.submit(&mut session, &form("A1")).expect("submit");

    assert!(receipt.photo_url.is_none());
    assert!(receipt.upload_error.unwrap().contains("permission denied"));
    assert_eq!(sheet.rows.borrow().len(), 1);
    assert_eq!(session.entries().len(), 1);
    assert!(session.photo().is_none());
}

#[test]
fn test_upload_failure_abort_keeps_everything_pending() {
    let sheet = FakeSheet::default();
    let drive = FakeDrive {
        fail: true,
        ..Default::default()
    };
    let wf = workflow(
        &sheet,
        &drive,
        policy(UploadFailurePolicy::Abort, RemoteFailurePolicy::KeepLocal),
    );
    let mut session = ready_session(true);

    let err = wf.submit(&mut session, &form("A1")).unwrap_err();

    assert!(matches!(err, AppError::UploadFailed(_)));
    assert!(sheet.rows.borrow().is_empty());
    assert!(session.entries().is_empty());
    assert!(session.photo().is_some());
    assert!(session.location_requested());
}

#[test]
fn test_remote_failure_keep_local_appends_to_session() {
    let sheet = FakeSheet {
        fail_append: true,
        ..Default::default()
    };
    let drive = FakeDrive::default();
    let wf = workflow(&sheet, &drive, FailurePolicy::default());
    let mut session = ready_session(true);

    let err = wf.submit(&mut session, &form("A1")).unwrap_err();

    assert!(matches!(err, AppError::RemoteUnavailable(_)));
    assert!(err.is_external());
    assert_eq!(session.entries(), [entry("GGN/25/A1")]);
    assert!(session.latitude().is_none());
    assert!(session.photo().is_none());
}

#[test]
fn test_remote_failure_discard_leaves_session_untouched() {
    let sheet = FakeSheet {
        fail_append: true,
        ..Default::default()
    };
    let drive = FakeDrive::default();
    let wf = workflow(
        &sheet,
        &drive,
        policy(UploadFailurePolicy::Continue, RemoteFailurePolicy::Discard),
    );
    let mut session = ready_session(false);

    let err = wf.submit(&mut session, &form("A1")).unwrap_err();

    assert!(matches!(err, AppError::RemoteUnavailable(_)));
    assert!(session.entries().is_empty());
    assert_eq!(session.longitude(), Some(103.4));
    assert!(session.location_requested());
}

//! End-to-end tests for the log editor state machine: mode selection,
//! baseline reconciliation, validation, and the submission protocol.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;

use creel_core::draft::Field;
use creel_gateway::{GatewayError, RecordGateway};

use creel_app::editor::{
    BaselineOutcome, EditorMode, EditorState, LogEditor, NotFoundPolicy, Submission,
};
use creel_app::error::AppError;
use creel_app::refresh::{refresh_channel, RefreshEvents};
use creel_app::routes::Route;

use common::{carp_log, server_error, MockGateway};

/// Session user for every test.
const USER: i64 = 3;

fn editor_with(gateway: &Arc<MockGateway>, mode: EditorMode) -> (LogEditor, RefreshEvents) {
    let (handle, events) = refresh_channel();
    let editor = LogEditor::new(
        Arc::clone(gateway) as Arc<dyn RecordGateway>,
        handle,
        USER,
        mode,
    );
    (editor, events)
}

fn fill_valid_draft(editor: &mut LogEditor) {
    editor.set_field(Field::Species, "Carp").unwrap();
    editor.set_field(Field::FishLength, "22").unwrap();
    editor.set_field(Field::Pounds, "5").unwrap();
    editor.set_field(Field::Ounces, "3").unwrap();
    editor.set_field(Field::Bait, "Jigs").unwrap();
    editor.set_field(Field::FishingMethod, "Shore").unwrap();
}

// ---------------------------------------------------------------------------
// Test: create mode submits exactly one create call and navigates home
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_mode_submits_once_and_navigates_to_dashboard() {
    let gateway = Arc::new(MockGateway::new());
    let (mut editor, mut events) = editor_with(&gateway, EditorMode::Create);

    assert_eq!(
        editor.load_baseline().await.unwrap(),
        BaselineOutcome::NotApplicable
    );
    assert_eq!(editor.state(), EditorState::Ready);

    fill_valid_draft(&mut editor);
    let Submission {
        record,
        destination,
    } = editor.submit().await.unwrap();

    assert_eq!(destination, Route::Dashboard);
    assert_eq!(record.user_id, USER);
    assert_eq!(record.species, "Carp");
    assert_eq!(editor.state(), EditorState::Complete);

    // Exactly one create, never an update, and the refresh signal fired.
    assert_eq!(gateway.calls(), vec!["create".to_string()]);
    assert!(events.try_requested());
}

// ---------------------------------------------------------------------------
// Test: a blank required field aborts locally with zero network calls
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blank_species_blocks_submission_without_network() {
    let gateway = Arc::new(MockGateway::new());
    let (mut editor, mut events) = editor_with(&gateway, EditorMode::Create);
    editor.load_baseline().await.unwrap();

    fill_valid_draft(&mut editor);
    editor.set_field(Field::Species, "").unwrap();

    let err = editor.submit().await.unwrap_err();
    let errors = assert_matches!(err, AppError::Validation(errors) => errors);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "species");
    assert_eq!(errors[0].message, "species cannot be left blank.");

    assert!(gateway.calls().is_empty());
    assert!(!events.try_requested());

    // The draft survives for correction.
    assert_eq!(editor.state(), EditorState::Ready);
    assert_eq!(editor.draft().get(Field::FishLength), "22");
}

// ---------------------------------------------------------------------------
// Test: every blank required field is collected, not just the first
// ---------------------------------------------------------------------------

#[tokio::test]
async fn all_validation_failures_are_collected() {
    let gateway = Arc::new(MockGateway::new());
    let (mut editor, _events) = editor_with(&gateway, EditorMode::Create);
    editor.load_baseline().await.unwrap();

    let err = editor.submit().await.unwrap_err();
    let errors = assert_matches!(err, AppError::Validation(errors) => errors);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["species", "fish_length"]);
    assert!(gateway.calls().is_empty());
}

// ---------------------------------------------------------------------------
// Test: edit mode pre-fills every editable field but keeps the session owner
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_mode_prefills_draft_except_owner() {
    // The stored record belongs to user 42; the session user is 3.
    let gateway = Arc::new(MockGateway::with_logs(vec![carp_log()]));
    let (mut editor, mut events) = editor_with(&gateway, EditorMode::Edit(7));

    assert_eq!(
        editor.load_baseline().await.unwrap(),
        BaselineOutcome::Loaded
    );

    let draft = editor.draft();
    assert_eq!(draft.get(Field::Species), "Carp");
    assert_eq!(draft.get(Field::FishLength), "22");
    assert_eq!(draft.get(Field::Pounds), "5");
    assert_eq!(draft.get(Field::Ounces), "3");
    assert_eq!(draft.get(Field::Bait), "Jigs");
    assert_eq!(draft.get(Field::FishingMethod), "Shore");
    assert_eq!(draft.user_id(), USER);

    editor.set_field(Field::Species, "Bluegill").unwrap();
    editor.submit().await.unwrap();

    // One fetch, one update, no create; ownership stays the session's.
    assert_eq!(
        gateway.calls(),
        vec!["fetch:7".to_string(), "update:7".to_string()]
    );
    assert_eq!(gateway.stored()[0].user_id, USER);
    assert_eq!(gateway.stored()[0].species, "Bluegill");
    assert!(events.try_requested());
}

// ---------------------------------------------------------------------------
// Test: the baseline load is single-shot per mount
// ---------------------------------------------------------------------------

#[tokio::test]
async fn baseline_load_is_single_shot() {
    let gateway = Arc::new(MockGateway::with_logs(vec![carp_log()]));
    let (mut editor, _events) = editor_with(&gateway, EditorMode::Edit(7));

    assert_eq!(
        editor.load_baseline().await.unwrap(),
        BaselineOutcome::Loaded
    );
    assert_eq!(
        editor.load_baseline().await.unwrap(),
        BaselineOutcome::AlreadyLoaded
    );

    assert_eq!(gateway.call_count("fetch"), 1);
}

// ---------------------------------------------------------------------------
// Test: not-found baseline degrades to a blank form under the default policy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_baseline_falls_back_to_blank_form() {
    let gateway = Arc::new(MockGateway::new());
    let (mut editor, _events) = editor_with(&gateway, EditorMode::Edit(7));

    assert_eq!(
        editor.load_baseline().await.unwrap(),
        BaselineOutcome::Missing
    );

    // Draft untouched, form usable, submission not locally blocked.
    for field in Field::ALL {
        assert_eq!(editor.draft().get(field), "");
    }
    fill_valid_draft(&mut editor);
    let err = editor.submit().await.unwrap_err();

    // The attempt reached the gateway (the server rejects the stale id);
    // nothing in the editor blocked it.
    assert_matches!(
        err,
        AppError::Gateway(GatewayError::NotFound { id: 7, .. })
    );
    assert_eq!(gateway.call_count("update"), 1);
}

// ---------------------------------------------------------------------------
// Test: not-found baseline blocks submission under SurfaceError
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_baseline_blocks_submission_under_surface_error() {
    let gateway = Arc::new(MockGateway::new());
    let (handle, _events) = refresh_channel();
    let mut editor = LogEditor::new(
        Arc::clone(&gateway) as Arc<dyn RecordGateway>,
        handle,
        USER,
        EditorMode::Edit(7),
    )
    .with_policy(NotFoundPolicy::SurfaceError);

    assert_matches!(
        editor.load_baseline().await.unwrap_err(),
        AppError::MissingBaseline(7)
    );

    fill_valid_draft(&mut editor);
    assert_matches!(
        editor.submit().await.unwrap_err(),
        AppError::MissingBaseline(7)
    );

    assert_eq!(gateway.call_count("create"), 0);
    assert_eq!(gateway.call_count("update"), 0);
}

// ---------------------------------------------------------------------------
// Test: a transport failure on the baseline fetch leaves the draft alone
// ---------------------------------------------------------------------------

#[tokio::test]
async fn baseline_transport_failure_keeps_draft_untouched() {
    let gateway = Arc::new(MockGateway::with_logs(vec![carp_log()]));
    gateway.fail_operation("fetch", server_error());
    let (mut editor, _events) = editor_with(&gateway, EditorMode::Edit(7));

    assert_matches!(
        editor.load_baseline().await.unwrap_err(),
        AppError::Gateway(GatewayError::Api { status: 500, .. })
    );

    // Blank but usable form; the one-shot load is consumed.
    assert_eq!(editor.state(), EditorState::Ready);
    assert_eq!(editor.draft().get(Field::Species), "");
    assert_eq!(
        editor.load_baseline().await.unwrap(),
        BaselineOutcome::AlreadyLoaded
    );
}

// ---------------------------------------------------------------------------
// Test: a failed submission preserves the draft for a retry
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_submission_preserves_draft_for_retry() {
    let gateway = Arc::new(MockGateway::new());
    gateway.fail_operation("create", server_error());
    let (mut editor, mut events) = editor_with(&gateway, EditorMode::Create);
    editor.load_baseline().await.unwrap();
    fill_valid_draft(&mut editor);

    assert_matches!(
        editor.submit().await.unwrap_err(),
        AppError::Gateway(GatewayError::Api { status: 500, .. })
    );
    assert_eq!(editor.state(), EditorState::Ready);
    assert!(!events.try_requested());
    assert_eq!(editor.draft().get(Field::Species), "Carp");

    // Retry without re-entering anything.
    editor.submit().await.unwrap();
    assert_eq!(gateway.call_count("create"), 2);
    assert!(events.try_requested());
}

// ---------------------------------------------------------------------------
// Test: only Ready accepts field edits and submission triggers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edits_rejected_outside_ready() {
    let gateway = Arc::new(MockGateway::new());
    let (mut editor, _events) = editor_with(&gateway, EditorMode::Edit(7));

    // Still Initializing: the baseline step has not run.
    assert_matches!(
        editor.set_field(Field::Species, "Carp"),
        Err(AppError::InvalidState { .. })
    );
    assert_matches!(
        editor.submit().await,
        Err(AppError::InvalidState { .. })
    );
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn edits_rejected_after_completion() {
    let gateway = Arc::new(MockGateway::new());
    let (mut editor, _events) = editor_with(&gateway, EditorMode::Create);
    editor.load_baseline().await.unwrap();
    fill_valid_draft(&mut editor);
    editor.submit().await.unwrap();

    assert_matches!(
        editor.set_field(Field::Species, "Bluegill"),
        Err(AppError::InvalidState { state: "complete" })
    );
}

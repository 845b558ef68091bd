//! The dual-mode log editor: one engine that either creates a new
//! record or edits an existing one identified by the navigation path.
//!
//! The engine owns the draft and walks an explicit state machine:
//!
//! ```text
//! Initializing -> (edit mode only) LoadingBaseline -> Ready
//!                                   Ready -> Submitting -> Ready | Complete
//! ```
//!
//! `Ready` is the only state that accepts field edits and a submission
//! trigger; the suspend states make overlapping async operations
//! structurally impossible, so the draft needs no locking. There is no
//! path back into `LoadingBaseline` once `Ready` is reached.

use std::sync::Arc;

use creel_core::draft::{Field, LogDraft};
use creel_core::log::FishingLog;
use creel_core::types::{LogId, UserId};
use creel_gateway::RecordGateway;

use crate::error::AppError;
use crate::refresh::RefreshHandle;
use crate::routes::Route;

/// Which record the editor works on. Fixed for the engine's lifetime;
/// switching modes means constructing a new editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Drafting a brand-new record.
    Create,
    /// Editing the existing record with this id.
    Edit(LogId),
}

impl EditorMode {
    /// Mode implied by the route that mounts the editor.
    pub const fn from_route(route: &Route) -> Option<EditorMode> {
        match route {
            Route::NewLog => Some(EditorMode::Create),
            Route::EditLog(id) => Some(EditorMode::Edit(*id)),
            _ => None,
        }
    }
}

/// Lifecycle state of one mounted editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Constructed; the baseline has not been considered yet.
    Initializing,
    /// Suspended on the baseline fetch (edit mode only).
    LoadingBaseline,
    /// Accepting field edits and a submission trigger.
    Ready,
    /// Suspended on the create-or-update call.
    Submitting,
    /// Submitted successfully; the caller navigates away.
    Complete,
}

impl EditorState {
    const fn name(self) -> &'static str {
        match self {
            EditorState::Initializing => "initializing",
            EditorState::LoadingBaseline => "loading",
            EditorState::Ready => "ready",
            EditorState::Submitting => "submitting",
            EditorState::Complete => "complete",
        }
    }
}

/// What to do when the edit target resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotFoundPolicy {
    /// Degrade to an untouched blank form.
    #[default]
    BlankForm,
    /// Surface the missing baseline and block submission.
    SurfaceError,
}

/// Settled result of [`LogEditor::load_baseline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineOutcome {
    /// Create mode: there is no baseline to load.
    NotApplicable,
    /// The fetched record filled the draft.
    Loaded,
    /// The id resolved to nothing; the draft is untouched.
    Missing,
    /// The baseline load already ran for this editor; nothing was
    /// re-fetched.
    AlreadyLoaded,
}

/// A successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// The authoritative record as the server stored it.
    pub record: FishingLog,
    /// Where the caller should navigate: the authenticated landing page.
    pub destination: Route,
}

/// The form reconciliation engine.
///
/// Constructed behind the access gate with an authenticated user id, so
/// the draft's owner is always the session user -- the fetched
/// baseline's owner is never copied in, which makes client-side
/// ownership reassignment impossible.
pub struct LogEditor {
    mode: EditorMode,
    state: EditorState,
    draft: LogDraft,
    user_id: UserId,
    gateway: Arc<dyn RecordGateway>,
    refresh: RefreshHandle,
    policy: NotFoundPolicy,
    /// `(record id, session user id)` the baseline load ran for. Both
    /// inputs are fixed at construction, so once set the load never
    /// re-runs; a changed input is a remount, i.e. a new editor.
    loaded_key: Option<(LogId, UserId)>,
    /// Set when the edit target was missing under
    /// [`NotFoundPolicy::SurfaceError`]; blocks submission.
    baseline_missing: Option<LogId>,
}

impl LogEditor {
    /// Editor for `mode`, owned by the authenticated `user_id`.
    ///
    /// The draft starts fully initialized and empty, with its owner
    /// pre-filled from the session.
    pub fn new(
        gateway: Arc<dyn RecordGateway>,
        refresh: RefreshHandle,
        user_id: UserId,
        mode: EditorMode,
    ) -> Self {
        Self {
            mode,
            state: EditorState::Initializing,
            draft: LogDraft::empty(user_id),
            user_id,
            gateway,
            refresh,
            policy: NotFoundPolicy::default(),
            loaded_key: None,
            baseline_missing: None,
        }
    }

    /// Override the not-found policy (defaults to
    /// [`NotFoundPolicy::BlankForm`]).
    pub fn with_policy(mut self, policy: NotFoundPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn mode(&self) -> EditorMode {
        self.mode
    }

    pub const fn state(&self) -> EditorState {
        self.state
    }

    /// The current draft, for the form to render.
    pub const fn draft(&self) -> &LogDraft {
        &self.draft
    }

    /// Run the mount-time baseline step.
    ///
    /// In create mode this only moves the engine to `Ready`. In edit
    /// mode it issues exactly one fetch for the record id; the load is
    /// single-shot per `(record id, session user id)`, so calling this
    /// again returns [`BaselineOutcome::AlreadyLoaded`] without a
    /// network call.
    ///
    /// On success the fetched record's editable fields overwrite the
    /// draft while the owner stays the session user. A not-found
    /// outcome follows the configured [`NotFoundPolicy`]. On a
    /// transport error the draft is untouched and the error is
    /// returned for display; the engine still reaches `Ready` so the
    /// user keeps a usable (blank) form.
    pub async fn load_baseline(&mut self) -> Result<BaselineOutcome, AppError> {
        let id = match self.mode {
            EditorMode::Create => {
                if self.state == EditorState::Initializing {
                    self.state = EditorState::Ready;
                }
                return Ok(BaselineOutcome::NotApplicable);
            }
            EditorMode::Edit(id) => id,
        };

        let key = (id, self.user_id);
        if self.loaded_key == Some(key) {
            return Ok(BaselineOutcome::AlreadyLoaded);
        }
        // The load is consumed whether or not it succeeds, matching the
        // one-shot mount semantics.
        self.loaded_key = Some(key);

        self.state = EditorState::LoadingBaseline;
        let fetched = self.gateway.fetch_log(id).await;
        self.state = EditorState::Ready;

        match fetched {
            Ok(Some(log)) => {
                self.draft = LogDraft::from_log(self.user_id, &log);
                tracing::debug!(id, "baseline loaded into draft");
                Ok(BaselineOutcome::Loaded)
            }
            Ok(None) => match self.policy {
                NotFoundPolicy::BlankForm => {
                    tracing::warn!(id, "edit target not found; falling back to blank form");
                    Ok(BaselineOutcome::Missing)
                }
                NotFoundPolicy::SurfaceError => {
                    self.baseline_missing = Some(id);
                    tracing::warn!(id, "edit target not found; blocking submission");
                    Err(AppError::MissingBaseline(id))
                }
            },
            Err(err) => {
                tracing::error!(id, error = %err, "baseline fetch failed");
                Err(err.into())
            }
        }
    }

    /// Replace the value of one draft field. Accepted only in `Ready`.
    pub fn set_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), AppError> {
        if self.state != EditorState::Ready {
            return Err(AppError::InvalidState {
                state: self.state.name(),
            });
        }
        self.draft.set(field, value);
        Ok(())
    }

    /// Validate the draft and send it through the gateway.
    ///
    /// Validation failures abort locally with every collected
    /// [`creel_core::draft::FieldError`] and zero network calls. A valid
    /// draft produces exactly one gateway call: create in create mode,
    /// update with the original id in edit mode. On success the
    /// collection refresh signal fires and the returned [`Submission`]
    /// points at the dashboard. On a gateway failure the draft is
    /// preserved untouched and the engine returns to `Ready` so the
    /// user can retry without re-entering anything.
    pub async fn submit(&mut self) -> Result<Submission, AppError> {
        if self.state != EditorState::Ready {
            return Err(AppError::InvalidState {
                state: self.state.name(),
            });
        }
        if let Some(id) = self.baseline_missing {
            return Err(AppError::MissingBaseline(id));
        }

        let payload = match self.draft.to_payload() {
            Ok(payload) => payload,
            Err(errors) => {
                tracing::warn!(count = errors.len(), "draft failed validation");
                return Err(AppError::Validation(errors));
            }
        };

        self.state = EditorState::Submitting;
        let result = match self.mode {
            EditorMode::Create => self.gateway.create_log(&payload).await,
            EditorMode::Edit(id) => self.gateway.update_log(id, &payload).await,
        };

        match result {
            Ok(record) => {
                self.state = EditorState::Complete;
                self.refresh.request();
                tracing::info!(fish_id = record.fish_id, "fishing log submitted");
                Ok(Submission {
                    record,
                    destination: Route::Dashboard,
                })
            }
            Err(err) => {
                self.state = EditorState::Ready;
                tracing::error!(error = %err, "fishing log submission failed");
                Err(err.into())
            }
        }
    }
}

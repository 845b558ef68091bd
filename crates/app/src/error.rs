use creel_core::draft::FieldError;
use creel_core::error::CoreError;
use creel_core::types::LogId;
use creel_gateway::GatewayError;

use crate::session::SessionError;

/// Application-level error type for the client core.
///
/// Wraps [`CoreError`] and [`GatewayError`] and adds the failures the
/// editor itself produces. Every variant renders into user-facing text
/// via [`AppError::user_messages`]; nothing is allowed to escape as a
/// panic into the view layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// One or more form fields failed validation. Recovered locally,
    /// displayed as a per-field list, never reaches the network.
    #[error("{} form field(s) failed validation", .0.len())]
    Validation(Vec<FieldError>),

    /// A domain-level error from `creel-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure from the record gateway (transport, auth, server).
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The edit target resolved to nothing and the editor is configured
    /// to surface that instead of falling back to a blank form.
    #[error("Fishing log {0} no longer exists.")]
    MissingBaseline(LogId),

    /// An operation arrived in an editor state that does not accept it.
    #[error("Not available while the editor is {state}.")]
    InvalidState {
        /// Name of the state that refused the operation.
        state: &'static str,
    },

    /// The session token could not be used.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AppError {
    /// The messages a view should display for this failure: one line per
    /// field for validation, a single alert line for everything else.
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            AppError::Validation(errors) => {
                errors.iter().map(|e| e.message.clone()).collect()
            }
            other => vec![other.to_string()],
        }
    }
}

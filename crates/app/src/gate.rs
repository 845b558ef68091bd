//! The access gate guarding authenticated routes.
//!
//! A pure function of a [`Session`] snapshot: no cached verdicts, so a
//! sign-out elsewhere in the app takes effect on the very next check.
//! [`gated`] goes one step further and only builds the protected value
//! when the session is admitted, so an unauthenticated caller can never
//! observe the guarded subtree.

use creel_core::types::UserId;

use crate::routes::Route;
use crate::session::Session;

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Render the protected surface.
    Admit,
    /// Do not render; navigate here instead.
    Redirect(Route),
}

/// Decide whether the session may enter the authenticated surface.
pub fn check_access(session: &Session) -> AccessDecision {
    if session.is_authenticated() {
        AccessDecision::Admit
    } else {
        AccessDecision::Redirect(Route::SignIn)
    }
}

/// Route-aware gate: public routes always admit.
pub fn route_access(route: &Route, session: &Session) -> AccessDecision {
    if route.requires_auth() {
        check_access(session)
    } else {
        AccessDecision::Admit
    }
}

/// Build a protected value only for an authenticated session.
///
/// The closure receives the session user id, so anything constructed
/// behind the gate (like the log editor) starts from an authenticated
/// identity. On redirect the closure is never invoked.
pub fn gated<T>(
    session: &Session,
    protected: impl FnOnce(UserId) -> T,
) -> Result<T, Route> {
    match session.user_id {
        Some(user_id) => Ok(protected(user_id)),
        None => Err(Route::SignIn),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> Session {
        Session {
            token: Some("token".to_string()),
            user_id: Some(3),
        }
    }

    #[test]
    fn test_absent_user_redirects_to_sign_in() {
        assert_eq!(
            check_access(&Session::default()),
            AccessDecision::Redirect(Route::SignIn)
        );
    }

    #[test]
    fn test_present_user_admits() {
        assert_eq!(check_access(&signed_in()), AccessDecision::Admit);
    }

    #[test]
    fn test_gate_reflects_session_changes_immediately() {
        // Same call, different snapshots: no stale verdict to carry over.
        assert_eq!(check_access(&signed_in()), AccessDecision::Admit);
        assert_eq!(
            check_access(&Session::default()),
            AccessDecision::Redirect(Route::SignIn)
        );
    }

    #[test]
    fn test_public_routes_bypass_the_gate() {
        let session = Session::default();
        assert_eq!(
            route_access(&Route::Home, &session),
            AccessDecision::Admit
        );
        assert_eq!(
            route_access(&Route::SignIn, &session),
            AccessDecision::Admit
        );
        assert_eq!(
            route_access(&Route::Dashboard, &session),
            AccessDecision::Redirect(Route::SignIn)
        );
    }

    #[test]
    fn test_gated_never_builds_protected_value_when_redirecting() {
        let mut built = false;

        let result = gated(&Session::default(), |_| {
            built = true;
        });

        assert_eq!(result.unwrap_err(), Route::SignIn);
        assert!(!built);
    }

    #[test]
    fn test_gated_passes_the_session_user_id() {
        let result = gated(&signed_in(), |user_id| user_id);
        assert_eq!(result.unwrap(), 3);
    }
}

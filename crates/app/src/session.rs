//! Process-wide session state: the bearer token and the user id derived
//! from it.
//!
//! The store is written only by the sign-in/sign-out flow and read by
//! everything else -- the access gate takes a [`Session`] snapshot, and
//! the record gateway pulls the raw token through the
//! [`TokenProvider`] impl. The user id comes from the token's claims,
//! decoded locally WITHOUT verifying the signature: the client holds no
//! signing secret, and the server re-verifies the token on every
//! request anyway. Expiry is honored locally -- an expired token reads
//! as signed out.

use std::sync::{Arc, RwLock};

use chrono::Utc;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use creel_core::types::UserId;
use creel_gateway::TokenProvider;

/// Claims the fishing-log API embeds in its access tokens.
#[derive(Debug, Deserialize)]
struct Claims {
    /// Subject -- the user's id.
    sub: UserId,
    /// Expiration time (UTC Unix timestamp).
    exp: i64,
}

/// Failures while installing a session token.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The token is not a decodable JWT.
    #[error("Malformed session token: {0}")]
    Malformed(#[from] jsonwebtoken::errors::Error),

    /// The token is already past its expiry.
    #[error("Session token is already expired.")]
    Expired,
}

/// Read-only snapshot of the current session.
///
/// Both fields are absent when signed out or when the stored token has
/// expired since sign-in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// The raw bearer token.
    pub token: Option<String>,
    /// User id derived from the token claims.
    pub user_id: Option<UserId>,
}

impl Session {
    /// Whether the snapshot carries an authenticated user.
    pub const fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

/// The installed token plus what was derived from it.
#[derive(Debug, Clone)]
struct AuthSession {
    token: String,
    user_id: UserId,
    /// UTC Unix timestamp after which the token reads as signed out.
    expires_at: i64,
}

/// Shared, clonable handle to the process-wide session.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<AuthSession>>>,
}

impl SessionStore {
    /// A store with no session installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a token after a successful sign-in.
    ///
    /// Decodes the claims to derive the user id and rejects tokens that
    /// are already expired. Returns the derived user id.
    pub fn sign_in(&self, token: impl Into<String>) -> Result<UserId, SessionError> {
        let token = token.into();
        let claims = decode_claims(&token)?;
        if claims.exp <= Utc::now().timestamp() {
            return Err(SessionError::Expired);
        }

        let user_id = claims.sub;
        *self.write() = Some(AuthSession {
            token,
            user_id,
            expires_at: claims.exp,
        });
        tracing::info!(user_id, "session installed");
        Ok(user_id)
    }

    /// Clear the session (sign-out).
    pub fn sign_out(&self) {
        *self.write() = None;
        tracing::info!("session cleared");
    }

    /// Current snapshot. Evaluated fresh on every call; a token past
    /// its expiry snapshots as signed out.
    pub fn snapshot(&self) -> Session {
        match &*self.read() {
            Some(auth) if auth.expires_at > Utc::now().timestamp() => Session {
                token: Some(auth.token.clone()),
                user_id: Some(auth.user_id),
            },
            _ => Session::default(),
        }
    }

    /// The current user id, if signed in with an unexpired token.
    pub fn user_id(&self) -> Option<UserId> {
        self.snapshot().user_id
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<AuthSession>> {
        self.inner.read().expect("session lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<AuthSession>> {
        self.inner.write().expect("session lock poisoned")
    }

    /// Install a session directly, bypassing claim decoding.
    #[cfg(test)]
    fn install_raw(&self, token: &str, user_id: UserId, expires_at: i64) {
        *self.write() = Some(AuthSession {
            token: token.to_string(),
            user_id,
            expires_at,
        });
    }
}

impl TokenProvider for SessionStore {
    fn bearer_token(&self) -> Option<String> {
        self.snapshot().token
    }
}

/// Decode the claims out of a token without verifying its signature.
///
/// Expiry is checked by the caller against the decoded `exp` so the
/// distinction between "malformed" and "expired" stays visible.
fn decode_claims(token: &str) -> Result<Claims, SessionError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims)
}

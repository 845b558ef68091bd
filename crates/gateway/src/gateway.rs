//! The gateway seam: how the client reaches the fishing-log API.
//!
//! Everything above this crate (the editor engine, the collection view)
//! depends only on [`RecordGateway`], so tests and alternative
//! transports can stand in for the HTTP implementation.

use async_trait::async_trait;

use creel_core::draft::LogPayload;
use creel_core::log::FishingLog;
use creel_core::types::LogId;

use crate::error::GatewayError;

/// Source of the current session's bearer token.
///
/// Implemented by the session store; returning `None` (signed out or
/// expired) makes every authenticated gateway call fail with
/// [`GatewayError::Unauthenticated`] before any request is sent.
pub trait TokenProvider: Send + Sync {
    /// The raw token to attach as `Authorization: Bearer <token>`.
    fn bearer_token(&self) -> Option<String>;
}

/// Typed async interface to the fishing-log API.
#[async_trait]
pub trait RecordGateway: Send + Sync {
    /// Fetch one record by id. `Ok(None)` is the not-found outcome;
    /// transport and server failures are errors.
    async fn fetch_log(&self, id: LogId) -> Result<Option<FishingLog>, GatewayError>;

    /// Fetch the authenticated user's logs.
    async fn list_logs(&self) -> Result<Vec<FishingLog>, GatewayError>;

    /// Create a record; the server assigns the id.
    async fn create_log(&self, payload: &LogPayload) -> Result<FishingLog, GatewayError>;

    /// Update an existing record.
    async fn update_log(
        &self,
        id: LogId,
        payload: &LogPayload,
    ) -> Result<FishingLog, GatewayError>;

    /// Delete a record.
    async fn delete_log(&self, id: LogId) -> Result<(), GatewayError>;
}

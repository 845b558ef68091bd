//! The displayed collection of logs and its confirmed delete flow.
//!
//! The collection view itself lives outside the core; this module owns
//! the contract it must honor: deletion is destructive and requires an
//! explicit confirmation, and after every mutating action the displayed
//! collection must equal the server collection, so the post-delete
//! refresh is part of the operation rather than a courtesy.

use creel_core::log::FishingLog;
use creel_core::types::LogId;
use creel_gateway::{GatewayError, RecordGateway};

use crate::config::AppConfig;

/// Prompt to show before issuing a delete.
pub const CONFIRM_DELETE_PROMPT: &str =
    "Are you sure you want to delete this log? This cannot be undone.";

/// The user's answer to the delete confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

/// Settled result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was deleted and the collection re-synchronized.
    Deleted,
    /// The user declined; nothing was issued.
    Cancelled,
}

/// Where a log card gets its picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// No photo reference; render the placeholder block.
    Placeholder,
    /// Fetch from this URL.
    Remote(String),
}

/// Resolve a log's photo reference against the configured photo base.
pub fn image_source(log: &FishingLog, config: &AppConfig) -> ImageSource {
    match &log.filename {
        Some(filename) => {
            ImageSource::Remote(format!("{}/{filename}", config.photo_base_url))
        }
        None => ImageSource::Placeholder,
    }
}

/// The records currently displayed as cards.
#[derive(Debug, Default)]
pub struct LogCollection {
    logs: Vec<FishingLog>,
}

impl LogCollection {
    /// An empty collection; call [`LogCollection::refresh`] to populate.
    pub fn new() -> Self {
        Self::default()
    }

    /// The records currently displayed.
    pub fn logs(&self) -> &[FishingLog] {
        &self.logs
    }

    /// Re-fetch from the gateway so the displayed collection equals the
    /// server collection.
    pub async fn refresh(&mut self, gateway: &dyn RecordGateway) -> Result<(), GatewayError> {
        self.logs = gateway.list_logs().await?;
        Ok(())
    }

    /// Confirmed, irreversible delete.
    ///
    /// With [`Confirmation::Declined`] nothing is issued and the
    /// collection is unchanged. With [`Confirmation::Accepted`] exactly
    /// one delete call goes out, followed by a mandatory refresh; a
    /// refresh failure is an error, because a display that still shows
    /// the deleted record would be lying about the server state.
    pub async fn delete(
        &mut self,
        gateway: &dyn RecordGateway,
        id: LogId,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome, GatewayError> {
        if confirmation == Confirmation::Declined {
            return Ok(DeleteOutcome::Cancelled);
        }

        gateway.delete_log(id).await?;
        tracing::info!(id, "fishing log deleted");
        self.refresh(gateway).await?;
        Ok(DeleteOutcome::Deleted)
    }
}

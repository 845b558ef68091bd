//! The fishing-log record and the fixed catalogues it draws from.
//!
//! A [`FishingLog`] is one logged catch as the server stores it. The
//! species, bait, and method fields are constrained to the catalogues
//! below; the `validate_*` helpers enforce membership and are reused by
//! the draft validation in [`crate::draft`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{LogId, UserId};

/* --------------------------------------------------------------------------
   Catalogues
   -------------------------------------------------------------------------- */

/// Every species a log may be recorded against.
pub const SPECIES: &[&str] = &[
    "Largemouth Bass",
    "Smallmouth Bass",
    "Carp",
    "Blue Catfish",
    "Channel Catfish",
    "Flathead Catfish",
    "Longnose Gar",
    "Black Crappie",
    "Bluegill",
    "Pumpkinseed Panfish",
    "Yellow Perch",
];

/// Every recognized bait.
pub const BAITS: &[&str] = &[
    "Crank Bait",
    "Flies",
    "Jigs",
    "Plugs",
    "Poppers",
    "Spinners",
    "Spoons",
    "Real",
    "Live",
];

/// Every recognized fishing method.
pub const METHODS: &[&str] = &["Boat", "Casting", "Fly", "Shore", "Trolling"];

/* --------------------------------------------------------------------------
   Catalogue validation
   -------------------------------------------------------------------------- */

/// Validate that `species` is one of the allowed species.
pub fn validate_species(species: &str) -> Result<(), CoreError> {
    if SPECIES.contains(&species) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{species}' is not a recognized species."
        )))
    }
}

/// Validate that `bait` is one of the allowed baits.
pub fn validate_bait(bait: &str) -> Result<(), CoreError> {
    if BAITS.contains(&bait) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{bait}' is not a recognized bait."
        )))
    }
}

/// Validate that `method` is one of the allowed fishing methods.
pub fn validate_method(method: &str) -> Result<(), CoreError> {
    if METHODS.contains(&method) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{method}' is not a recognized fishing method."
        )))
    }
}

/* --------------------------------------------------------------------------
   Record
   -------------------------------------------------------------------------- */

/// One logged catch, as stored server-side.
///
/// Field names match the wire format of the fishing-log API. `filename`
/// is the photo reference; `None` means the card renders a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishingLog {
    /// Server-assigned record id.
    pub fish_id: LogId,
    /// Owning user. Set from the session at creation, immutable after.
    pub user_id: UserId,
    /// One of [`SPECIES`].
    pub species: String,
    /// Length in inches.
    pub fish_length: f64,
    /// Whole-pound part of the weight, if recorded.
    pub pounds: Option<f64>,
    /// Ounce part of the weight, if recorded.
    pub ounces: Option<f64>,
    /// One of [`BAITS`], if recorded.
    pub bait: Option<String>,
    /// One of [`METHODS`], if recorded.
    pub fishing_method: Option<String>,
    /// Photo object name, if a photo was uploaded.
    pub filename: Option<String>,
}

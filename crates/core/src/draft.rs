//! The editable draft of a fishing log and its submission-time validation.
//!
//! A [`LogDraft`] is the fully-initialized working copy backing the log
//! editor form: every editable field is always present as a string
//! (possibly empty), so the form stays a controlled, fully-defined
//! structure for its whole lifetime. Validation runs once at submission
//! and collects every failure instead of stopping at the first; a draft
//! converts into a typed [`LogPayload`] only when validation passes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::log::{validate_bait, validate_method, validate_species, FishingLog};
use crate::types::UserId;

/* --------------------------------------------------------------------------
   Fields
   -------------------------------------------------------------------------- */

/// The editable fields of a log draft.
///
/// The owning user id is deliberately not a member: ownership is fixed
/// when the draft is created and cannot be edited through the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Species,
    FishLength,
    Pounds,
    Ounces,
    Bait,
    FishingMethod,
}

impl Field {
    /// Every editable field, in form order.
    pub const ALL: [Field; 6] = [
        Field::Species,
        Field::FishLength,
        Field::Pounds,
        Field::Ounces,
        Field::Bait,
        Field::FishingMethod,
    ];

    /// Fields that must be non-empty for a draft to submit.
    pub const REQUIRED: [Field; 2] = [Field::Species, Field::FishLength];

    /// Wire name of the field.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Species => "species",
            Field::FishLength => "fish_length",
            Field::Pounds => "pounds",
            Field::Ounces => "ounces",
            Field::Bait => "bait",
            Field::FishingMethod => "fishing_method",
        }
    }

    /// Human-readable label: the wire name with underscores as spaces.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Species => "species",
            Field::FishLength => "fish length",
            Field::Pounds => "pounds",
            Field::Ounces => "ounces",
            Field::Bait => "bait",
            Field::FishingMethod => "fishing method",
        }
    }
}

/* --------------------------------------------------------------------------
   Validation failures
   -------------------------------------------------------------------------- */

/// A single validation failure attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the offending field.
    pub field: &'static str,
    /// Message ready for display next to the field.
    pub message: String,
}

impl FieldError {
    /// Failure for a required field left empty.
    pub fn blank(field: Field) -> Self {
        Self {
            field: field.name(),
            message: format!("{} cannot be left blank.", field.label()),
        }
    }

    /// Failure carrying a catalogue-membership message from [`CoreError`].
    fn invalid(field: Field, err: &CoreError) -> Self {
        Self {
            field: field.name(),
            message: err.to_string(),
        }
    }

    /// Failure for a field that must hold a non-negative number.
    fn not_a_number(field: Field) -> Self {
        Self {
            field: field.name(),
            message: format!("{} must be a non-negative number.", field.label()),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/* --------------------------------------------------------------------------
   Payload
   -------------------------------------------------------------------------- */

/// Typed create/update body produced from a validated draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogPayload {
    pub user_id: UserId,
    pub species: String,
    pub fish_length: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pounds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ounces: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bait: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fishing_method: Option<String>,
}

/* --------------------------------------------------------------------------
   Draft
   -------------------------------------------------------------------------- */

/// Mutable working copy of a log's editable fields.
///
/// Every field is a string so the draft mirrors the form inputs exactly;
/// numeric interpretation happens only in [`LogDraft::to_payload`]. The
/// owner id is private: it is set at construction from the session and
/// there is no [`Field`] variant through which to change it.
#[derive(Debug, Clone, PartialEq)]
pub struct LogDraft {
    user_id: UserId,
    pub species: String,
    pub fish_length: String,
    pub pounds: String,
    pub ounces: String,
    pub bait: String,
    pub fishing_method: String,
}

impl LogDraft {
    /// All-empty draft owned by `user_id`.
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            species: String::new(),
            fish_length: String::new(),
            pounds: String::new(),
            ounces: String::new(),
            bait: String::new(),
            fishing_method: String::new(),
        }
    }

    /// Draft pre-filled from a fetched baseline record.
    ///
    /// Every editable field is overwritten from `log`; the owner stays
    /// `user_id` (the session's), never the fetched record's.
    pub fn from_log(user_id: UserId, log: &FishingLog) -> Self {
        Self {
            user_id,
            species: log.species.clone(),
            fish_length: format_decimal(log.fish_length),
            pounds: log.pounds.map(format_decimal).unwrap_or_default(),
            ounces: log.ounces.map(format_decimal).unwrap_or_default(),
            bait: log.bait.clone().unwrap_or_default(),
            fishing_method: log.fishing_method.clone().unwrap_or_default(),
        }
    }

    /// The owning user id fixed at construction.
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Replace the value of exactly one field; all others are untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Species => &self.species,
            Field::FishLength => &self.fish_length,
            Field::Pounds => &self.pounds,
            Field::Ounces => &self.ounces,
            Field::Bait => &self.bait,
            Field::FishingMethod => &self.fishing_method,
        }
    }

    /// Run every validation rule, collecting all failures.
    ///
    /// An empty vector means the draft may be submitted.
    pub fn validate(&self) -> Vec<FieldError> {
        match self.to_payload() {
            Ok(_) => Vec::new(),
            Err(errors) => errors,
        }
    }

    /// Validate and convert into the typed submission payload.
    ///
    /// Rules, all evaluated (failures are collected, never
    /// short-circuited):
    /// 1. required fields must be non-empty;
    /// 2. non-empty species/bait/method must belong to their catalogue;
    /// 3. non-empty length/pounds/ounces must parse as non-negative
    ///    numbers.
    pub fn to_payload(&self) -> Result<LogPayload, Vec<FieldError>> {
        let mut errors = Vec::new();

        for field in Field::REQUIRED {
            if self.get(field).trim().is_empty() {
                errors.push(FieldError::blank(field));
            }
        }

        let species = self.species.trim();
        if !species.is_empty() {
            if let Err(err) = validate_species(species) {
                errors.push(FieldError::invalid(Field::Species, &err));
            }
        }

        let bait = optional_text(&self.bait);
        if let Some(value) = &bait {
            if let Err(err) = validate_bait(value) {
                errors.push(FieldError::invalid(Field::Bait, &err));
            }
        }

        let fishing_method = optional_text(&self.fishing_method);
        if let Some(value) = &fishing_method {
            if let Err(err) = validate_method(value) {
                errors.push(FieldError::invalid(Field::FishingMethod, &err));
            }
        }

        let fish_length = if self.fish_length.trim().is_empty() {
            None
        } else {
            parse_non_negative(Field::FishLength, &self.fish_length, &mut errors)
        };
        let pounds = optional_number(Field::Pounds, &self.pounds, &mut errors);
        let ounces = optional_number(Field::Ounces, &self.ounces, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LogPayload {
            user_id: self.user_id,
            species: species.to_string(),
            // Required fields are present when no errors were collected.
            fish_length: fish_length.unwrap_or_default(),
            pounds,
            ounces,
            bait,
            fishing_method,
        })
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Species => &mut self.species,
            Field::FishLength => &mut self.fish_length,
            Field::Pounds => &mut self.pounds,
            Field::Ounces => &mut self.ounces,
            Field::Bait => &mut self.bait,
            Field::FishingMethod => &mut self.fishing_method,
        }
    }
}

/* --------------------------------------------------------------------------
   Helpers
   -------------------------------------------------------------------------- */

/// Trimmed value of an optional text field; empty means absent.
fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse an optional numeric field; empty means absent.
fn optional_number(field: Field, value: &str, errors: &mut Vec<FieldError>) -> Option<f64> {
    if value.trim().is_empty() {
        None
    } else {
        parse_non_negative(field, value, errors)
    }
}

/// Parse a non-negative decimal, recording a failure on bad input.
fn parse_non_negative(field: Field, value: &str, errors: &mut Vec<FieldError>) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() && number >= 0.0 => Some(number),
        _ => {
            errors.push(FieldError::not_a_number(field));
            None
        }
    }
}

/// Render a stored decimal back into form text, without a trailing `.0`
/// for whole numbers.
fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

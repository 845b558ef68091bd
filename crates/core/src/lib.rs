//! Domain types for the creel fishing-log client.
//!
//! This crate holds the record type ([`log::FishingLog`]), the fixed
//! species/bait/method catalogues, the editable draft
//! ([`draft::LogDraft`]) with its submission-time validation, and the
//! core error taxonomy ([`error::CoreError`]).

pub mod draft;
pub mod error;
pub mod log;
pub mod types;

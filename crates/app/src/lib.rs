//! Client core for the creel fishing-log application.
//!
//! Ties the domain crate and the record gateway together into the
//! behavior a view layer renders: the process-wide session store, the
//! access gate guarding authenticated routes, the dual-mode log editor
//! ([`editor::LogEditor`]), and the collection contract with its
//! confirmed delete flow. Nothing in this crate draws anything -- every
//! module returns decisions (admit/redirect, validation failures,
//! navigation targets, image sources) for the embedding view to act on.

pub mod collection;
pub mod config;
pub mod editor;
pub mod error;
pub mod gate;
pub mod refresh;
pub mod routes;
pub mod session;

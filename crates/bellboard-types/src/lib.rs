//! Foundation types for bellboard.
//!
//! This crate contains the types shared by all bellboard crates: the error
//! type, the render-backend trait the widgets draw through, the selectable
//! option type, and the panel configuration.

pub mod backend;
pub mod config;
pub mod error;
pub mod option;

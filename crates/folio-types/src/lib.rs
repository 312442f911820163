//! Foundation types shared by every folio crate.
//!
//! Holds the error taxonomy (lookup, filesystem, handler and capability
//! failures) and the TOML-backed terminal configuration.

pub mod config;
pub mod error;

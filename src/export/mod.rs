//! Export of discovered families as JSON catalogs
//!
//! # Modules
//!
//! - [`catalog`]: Sorting and minor-release reduction
//! - [`support`]: Support window classification
//! - [`json`]: JSON document shape and round-trip
//! - [`writer`]: Writes the four catalog files
//! - [`error`]: Export error type

pub mod catalog;
pub mod error;
pub mod json;
pub mod support;
pub mod writer;

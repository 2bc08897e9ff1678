//! Discovers published Nuke releases by probing the installer URL scheme
//! and exports them as JSON catalogs.
//!
//! - [`discovery`]: the probing engine producing release families
//! - [`export`]: sorting, reduction and JSON output of those families
//! - [`collector`]: the end-to-end run used by the binary
//! - [`config`]: constants and the collector configuration

pub mod collector;
pub mod config;
pub mod discovery;
pub mod export;

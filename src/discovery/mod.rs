//! Release discovery engine
//!
//! Finds published versions by probing the installer URL scheme, since no
//! index of releases exists.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │     Url     │────▶│   Prober    │────▶│  Resolver   │
//! │ (calculate) │     │   (HEAD)    │     │ (platforms) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │   Builder   │◀────│   Walker    │
//!                     │ (families)  │     │   (axis)    │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`url`]: Naming epochs and candidate URL calculation
//! - [`prober`]: Prober trait for existence checks
//! - [`probers`]: Concrete prober implementations (HTTP HEAD)
//! - [`resolver`]: Turns a version into a release by probing every platform
//! - [`walker`]: Walks one version axis until a miss
//! - [`builder`]: Groups releases into major-version families
//! - [`error`]: Error types for probing and discovery
//! - [`semver`]: `{major}.{minor}v{patch}` versions
//! - [`types`]: Platforms, releases and families

pub mod builder;
pub mod error;
pub mod prober;
pub mod probers;
pub mod resolver;
pub mod semver;
pub mod types;
pub mod url;
pub mod walker;

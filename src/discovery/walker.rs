//! Axis walks over the version space
//!
//! There is no index of published versions, so a walk keeps incrementing
//! one field until a version cannot be resolved. Each walk costs exactly
//! one resolution past its last release.

use tracing::{debug, info};

use crate::discovery::resolver::ReleaseResolver;
use crate::discovery::semver::{Axis, SemanticVersion};
use crate::discovery::types::Release;

/// First version after the unreleased 10.1 to 10.4 range
pub const GAP_END: SemanticVersion = SemanticVersion::new(10, 5, 1);

/// Last version before the unreleased range
pub const GAP_START: SemanticVersion = SemanticVersion::new(10, 0, 6);

/// Moves a version that falls inside the numbering gap to [`GAP_END`]
pub fn skip_unreleased_gap(version: SemanticVersion) -> SemanticVersion {
    if GAP_START < version && version < GAP_END {
        debug!("Skipping unreleased range: {} -> {}", version, GAP_END);
        GAP_END
    } else {
        version
    }
}

/// Walks `axis` upward from `start` and returns every release found.
///
/// The first candidate is `start` after the gap skip; it is included in the
/// result when it resolves. Callers pass a version one step beyond the
/// release they already hold. The walk stops at the first version that does
/// not resolve.
pub async fn walk<R>(resolver: &R, start: SemanticVersion, axis: Axis) -> Vec<Release>
where
    R: ReleaseResolver + ?Sized,
{
    let mut candidate = Some(skip_unreleased_gap(start));
    let mut releases = Vec::new();

    while let Some(version) = candidate {
        let Some(release) = resolver.resolve(version).await else {
            break;
        };
        releases.push(release);
        candidate = version.incremented(axis);
    }

    if releases.is_empty() {
        debug!("No {} releases from {}", axis.as_str(), start);
    } else {
        info!(
            "Found {} {} release(s) from {}",
            releases.len(),
            axis.as_str(),
            start
        );
    }

    releases
}

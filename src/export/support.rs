//! Support window classification
//!
//! A release stays supported for [`SUPPORT_WINDOW_DAYS`] days after the
//! `last-modified` timestamp captured during discovery.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::config::SUPPORT_WINDOW_DAYS;
use crate::discovery::types::{Family, Release};

/// Parses an HTTP date such as `Tue, 15 Nov 1994 08:12:31 GMT`
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

/// Returns true if `release` is at most [`SUPPORT_WINDOW_DAYS`] whole days old at `now`.
///
/// Releases without a parseable timestamp are unsupported.
pub fn is_supported(release: &Release, now: DateTime<Utc>) -> bool {
    let Some(timestamp) = release.timestamp.as_deref() else {
        warn!("Release {} has no timestamp; marking unsupported", release.version);
        return false;
    };
    let Some(released_at) = parse_http_date(timestamp) else {
        warn!(
            "Release {} has unparseable timestamp {:?}; marking unsupported",
            release.version, timestamp
        );
        return false;
    };

    (now - released_at).num_days() <= SUPPORT_WINDOW_DAYS
}

/// Drops unsupported releases, then families left without releases
pub fn reduce_to_supported(families: &mut Vec<Family>, now: DateTime<Utc>) {
    for family in families.iter_mut() {
        family.retain(|release| is_supported(release, now));
    }
    families.retain(|family| !family.releases().is_empty());
}

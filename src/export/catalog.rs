//! Ordering and reduction of discovered families

use std::collections::HashMap;

use crate::discovery::semver::SemanticVersion;
use crate::discovery::types::Family;

/// Sorts families by major version and their releases by version, newest first
pub fn sort_families(families: &mut [Family]) {
    families.sort_by(|a, b| b.major().cmp(&a.major()));
    for family in families.iter_mut() {
        family.sort_releases_by(|a, b| b.version.cmp(&a.version));
    }
}

/// Reduces every family to the highest patch of each minor version.
///
/// Kept releases stay in their relative order, so sorted input stays sorted.
pub fn reduce_to_minor_releases(families: &mut [Family]) {
    for family in families.iter_mut() {
        let mut latest_by_minor: HashMap<u32, SemanticVersion> = HashMap::new();
        for release in family.releases() {
            let latest = latest_by_minor
                .entry(release.version.minor)
                .or_insert(release.version);
            *latest = (*latest).max(release.version);
        }

        family.retain(|release| {
            latest_by_minor.get(&release.version.minor) == Some(&release.version)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::types::{Release, ReleaseArtifacts};

    fn release(major: u32, minor: u32, patch: u32) -> Release {
        Release::new(
            SemanticVersion::new(major, minor, patch),
            ReleaseArtifacts::default(),
            Some("Mon, 06 Jan 2020 00:00:00 GMT".to_string()),
        )
    }

    fn family(major: u32, versions: &[(u32, u32)]) -> Family {
        Family::new(
            major,
            versions
                .iter()
                .map(|&(minor, patch)| release(major, minor, patch))
                .collect(),
        )
        .unwrap()
    }

    fn versions(family: &Family) -> Vec<String> {
        family
            .releases()
            .iter()
            .map(|r| r.version.to_string())
            .collect()
    }

    #[test]
    fn sort_families_orders_newest_first() {
        let mut families = vec![
            family(9, &[(0, 1), (1, 1), (0, 10), (0, 2)]),
            family(13, &[(0, 1), (2, 5)]),
            family(11, &[(3, 1)]),
        ];

        sort_families(&mut families);

        let majors: Vec<u32> = families.iter().map(Family::major).collect();
        assert_eq!(majors, vec![13, 11, 9]);
        assert_eq!(versions(&families[0]), vec!["13.2v5", "13.0v1"]);
        assert_eq!(
            versions(&families[2]),
            vec!["9.1v1", "9.0v10", "9.0v2", "9.0v1"]
        );
    }

    #[test]
    fn reduce_to_minor_releases_keeps_highest_patch_per_minor() {
        let mut families = vec![family(9, &[(1, 1), (0, 3), (0, 2), (0, 1)])];

        reduce_to_minor_releases(&mut families);

        assert_eq!(versions(&families[0]), vec!["9.1v1", "9.0v3"]);
    }

    #[test]
    fn reduce_to_minor_releases_handles_unsorted_input() {
        let mut families = vec![family(12, &[(0, 1), (1, 2), (0, 4), (1, 1), (0, 2)])];

        reduce_to_minor_releases(&mut families);

        assert_eq!(versions(&families[0]), vec!["12.1v2", "12.0v4"]);
    }
}

//! JSON catalog document
//!
//! ```json
//! {
//!     "13": {
//!         "13.0v1": {
//!             "installer": {
//!                 "mac_arm": null,
//!                 "mac_x86_64": "https://.../Nuke-13.0v1-mac-x86-64-installer.dmg",
//!                 "linux_x86_64": "https://.../Nuke-13.0v1-linux-x86-64-installer.tgz",
//!                 "windows_x86_64": "https://.../Nuke-13.0v1-win-x86-64-installer.zip"
//!             },
//!             "date": "Tue, 20 Apr 2021 09:41:12 GMT",
//!             "supported": false
//!         }
//!     }
//! }
//! ```

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::discovery::semver::SemanticVersion;
use crate::discovery::types::{Family, Release, ReleaseArtifacts};
use crate::export::error::ExportError;
use crate::export::support::is_supported;

/// One release entry, keyed by its version string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseEntry {
    pub installer: ReleaseArtifacts,
    pub date: Option<String>,
    pub supported: bool,
}

/// Releases of one family keyed by version string, in family order
pub type FamilyEntries = IndexMap<String, ReleaseEntry>;

/// Whole catalog keyed by major version, in family order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogDocument(pub IndexMap<String, FamilyEntries>);

impl CatalogDocument {
    /// Builds the document, classifying support at `now`
    pub fn from_families(families: &[Family], now: DateTime<Utc>) -> Self {
        let document: IndexMap<String, FamilyEntries> = families
            .iter()
            .map(|family| {
                let entries: FamilyEntries = family
                    .releases()
                    .iter()
                    .map(|release| {
                        let entry = ReleaseEntry {
                            installer: release.artifacts.clone(),
                            date: release.timestamp.clone(),
                            supported: is_supported(release, now),
                        };
                        (release.version.to_string(), entry)
                    })
                    .collect();
                (family.major().to_string(), entries)
            })
            .collect();

        Self(document)
    }

    /// Rebuilds families from the document. The `supported` flags are dropped.
    pub fn into_families(self) -> Result<Vec<Family>, ExportError> {
        self.0
            .into_iter()
            .map(|(major, entries)| {
                let major: u32 = major
                    .parse()
                    .map_err(|_| ExportError::InvalidMajor(major.clone()))?;
                let releases = entries
                    .into_iter()
                    .map(|(version, entry)| {
                        let version: SemanticVersion = version.parse()?;
                        Ok(Release::new(version, entry.installer, entry.date))
                    })
                    .collect::<Result<Vec<_>, ExportError>>()?;
                Ok(Family::new(major, releases)?)
            })
            .collect()
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }
}

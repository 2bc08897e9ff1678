//! Candidate installer URL calculation
//!
//! Installer file names changed twice over the product's history. The
//! x86_64 token and the separator after the product name are looked up in
//! [`NAMING_EPOCHS`]; versions outside every listed range use the current
//! naming.
//!
//! ```text
//!  .. 12.0v1          Nuke12.0v1-linux-x86-release-64.tgz
//!  12.0v2 .. 12.2v6   Nuke-12.0v2-linux-x86-64-installer.tgz
//!  12.2v7 .. 13.0v0   Nuke12.2v7-linux-x86_64.tgz
//!  13.0v1 .. 13.0v2   Nuke-13.0v1-linux-x86-64-installer.tgz
//!  13.0v3 ..          Nuke13.0v3-linux-x86_64.tgz
//! ```

use std::ops::{Bound, RangeBounds};

use crate::config::DEFAULT_BASE_URL;
use crate::discovery::semver::SemanticVersion;
use crate::discovery::types::{Architecture, OperatingSystem, Platform};

const PRODUCT_NAME: &str = "Nuke";

/// File name conventions for x86_64 installers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Naming {
    pub architecture: &'static str,
    pub separator: &'static str,
}

const LEGACY_NAMING: Naming = Naming {
    architecture: "x86-release-64",
    separator: "",
};

const TEMPORARY_NAMING: Naming = Naming {
    architecture: "x86-64-installer",
    separator: "-",
};

const CURRENT_NAMING: Naming = Naming {
    architecture: "x86_64",
    separator: "",
};

const ARM_ARCHITECTURE: &str = "arm64";

struct NamingEpoch {
    start: Bound<SemanticVersion>,
    end: Bound<SemanticVersion>,
    naming: Naming,
}

impl NamingEpoch {
    fn contains(&self, version: &SemanticVersion) -> bool {
        (self.start, self.end).contains(version)
    }
}

/// Ranges are checked in order; the first match wins.
const NAMING_EPOCHS: [NamingEpoch; 3] = [
    NamingEpoch {
        start: Bound::Unbounded,
        end: Bound::Excluded(SemanticVersion::new(12, 0, 2)),
        naming: LEGACY_NAMING,
    },
    NamingEpoch {
        start: Bound::Excluded(SemanticVersion::new(12, 0, 1)),
        end: Bound::Excluded(SemanticVersion::new(12, 2, 7)),
        naming: TEMPORARY_NAMING,
    },
    NamingEpoch {
        start: Bound::Excluded(SemanticVersion::new(13, 0, 0)),
        end: Bound::Excluded(SemanticVersion::new(13, 0, 3)),
        naming: TEMPORARY_NAMING,
    },
];

/// Returns the naming convention in effect for `version`
pub fn naming_for(version: SemanticVersion) -> Naming {
    NAMING_EPOCHS
        .iter()
        .find(|epoch| epoch.contains(&version))
        .map(|epoch| epoch.naming)
        .unwrap_or(CURRENT_NAMING)
}

/// Builds candidate installer URLs below a releases base URL
#[derive(Debug, Clone)]
pub struct UrlCalculator {
    base_url: String,
}

impl UrlCalculator {
    /// Creates a calculator with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Computes the URL an installer would have. Nothing is fetched, so the
    /// URL may not exist.
    pub fn build_url(
        &self,
        version: SemanticVersion,
        os: OperatingSystem,
        architecture: Architecture,
    ) -> String {
        let naming = naming_for(version);
        let architecture = match architecture {
            Architecture::Arm => ARM_ARCHITECTURE,
            Architecture::X86_64 => naming.architecture,
        };

        format!(
            "{base}/{version}/{PRODUCT_NAME}{separator}{version}-{os}-{architecture}.{extension}",
            base = self.base_url,
            separator = naming.separator,
            os = os.as_str(),
            extension = os.extension(),
        )
    }

    pub fn build_platform_url(&self, version: SemanticVersion, platform: Platform) -> String {
        self.build_url(version, platform.os, platform.architecture)
    }
}

impl Default for UrlCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

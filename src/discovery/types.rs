//! Common types for discovered releases

use serde::{Deserialize, Serialize};

use crate::discovery::error::IncompatibleFamilyError;
use crate::discovery::semver::SemanticVersion;

/// Operating system an installer is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingSystem {
    Mac,
    Linux,
    Windows,
}

impl OperatingSystem {
    /// Token used in installer file names
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Mac => "mac",
            OperatingSystem::Linux => "linux",
            OperatingSystem::Windows => "win",
        }
    }

    /// Installer archive extension
    pub fn extension(&self) -> &'static str {
        match self {
            OperatingSystem::Windows => "zip",
            OperatingSystem::Mac => "dmg",
            OperatingSystem::Linux => "tgz",
        }
    }
}

/// Processor architecture an installer is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    X86_64,
    Arm,
}

/// One operating system / architecture slot probed for every version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
    pub os: OperatingSystem,
    pub architecture: Architecture,
}

impl Platform {
    pub const MAC_X86_64: Platform = Platform::new(OperatingSystem::Mac, Architecture::X86_64);
    pub const MAC_ARM: Platform = Platform::new(OperatingSystem::Mac, Architecture::Arm);
    pub const LINUX_X86_64: Platform = Platform::new(OperatingSystem::Linux, Architecture::X86_64);
    pub const WINDOWS_X86_64: Platform =
        Platform::new(OperatingSystem::Windows, Architecture::X86_64);

    /// Probe order. The first hit in this order supplies a release's timestamp.
    pub const ALL: [Platform; 4] = [
        Platform::LINUX_X86_64,
        Platform::WINDOWS_X86_64,
        Platform::MAC_X86_64,
        Platform::MAC_ARM,
    ];

    pub const fn new(os: OperatingSystem, architecture: Architecture) -> Self {
        Self { os, architecture }
    }
}

/// Installer URLs per platform slot; `None` means the probe missed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseArtifacts {
    pub mac_arm: Option<String>,
    pub mac_x86_64: Option<String>,
    pub linux_x86_64: Option<String>,
    pub windows_x86_64: Option<String>,
}

impl ReleaseArtifacts {
    fn slot_mut(&mut self, platform: Platform) -> Option<&mut Option<String>> {
        match platform {
            Platform::MAC_ARM => Some(&mut self.mac_arm),
            Platform::MAC_X86_64 => Some(&mut self.mac_x86_64),
            Platform::LINUX_X86_64 => Some(&mut self.linux_x86_64),
            Platform::WINDOWS_X86_64 => Some(&mut self.windows_x86_64),
            _ => None,
        }
    }

    /// Returns the URL recorded for `platform`, if any
    pub fn get(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::MAC_ARM => self.mac_arm.as_deref(),
            Platform::MAC_X86_64 => self.mac_x86_64.as_deref(),
            Platform::LINUX_X86_64 => self.linux_x86_64.as_deref(),
            Platform::WINDOWS_X86_64 => self.windows_x86_64.as_deref(),
            _ => None,
        }
    }

    /// Records `url` for `platform`. Platforms outside [`Platform::ALL`] are ignored.
    pub fn insert(&mut self, platform: Platform, url: String) {
        if let Some(slot) = self.slot_mut(platform) {
            *slot = Some(url);
        }
    }
}

/// A version for which at least one installer exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub version: SemanticVersion,
    pub artifacts: ReleaseArtifacts,
    /// `last-modified` value of the first successful probe
    pub timestamp: Option<String>,
}

impl Release {
    pub fn new(
        version: SemanticVersion,
        artifacts: ReleaseArtifacts,
        timestamp: Option<String>,
    ) -> Self {
        Self {
            version,
            artifacts,
            timestamp,
        }
    }
}

/// All releases sharing one major version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    major: u32,
    releases: Vec<Release>,
}

impl Family {
    /// Creates a family, rejecting any release whose major differs from `major`
    pub fn new(major: u32, releases: Vec<Release>) -> Result<Self, IncompatibleFamilyError> {
        let mut family = Self {
            major,
            releases: Vec::with_capacity(releases.len()),
        };
        family.extend(releases)?;
        Ok(family)
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    pub fn push(&mut self, release: Release) -> Result<(), IncompatibleFamilyError> {
        if release.version.major != self.major {
            return Err(IncompatibleFamilyError {
                expected: self.major,
                found: release.version.to_string(),
            });
        }
        self.releases.push(release);
        Ok(())
    }

    pub fn extend(
        &mut self,
        releases: impl IntoIterator<Item = Release>,
    ) -> Result<(), IncompatibleFamilyError> {
        releases.into_iter().try_for_each(|release| self.push(release))
    }

    /// Keeps only the releases for which `keep` returns true
    pub fn retain(&mut self, keep: impl FnMut(&Release) -> bool) {
        self.releases.retain(keep);
    }

    pub fn sort_releases_by(
        &mut self,
        compare: impl FnMut(&Release, &Release) -> std::cmp::Ordering,
    ) {
        self.releases.sort_by(compare);
    }
}

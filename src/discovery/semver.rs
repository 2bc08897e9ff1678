//! Release version numbers in the `{major}.{minor}v{patch}` form

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::discovery::error::VersionParseError;

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)v(\d+)$").expect("version pattern is valid"));

/// Version field that a discovery walk increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Major,
    Minor,
    Patch,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Major => "major",
            Axis::Minor => "minor",
            Axis::Patch => "patch",
        }
    }
}

/// A (major, minor, patch) triple, ordered field by field.
///
/// Field order matters: the derived `Ord` compares major first, then minor,
/// then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemanticVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns a copy with `axis` incremented by one, or `None` on overflow.
    ///
    /// Only the named field changes: bumping the minor of 9.0v3 gives 9.1v3.
    pub fn incremented(self, axis: Axis) -> Option<Self> {
        let mut next = self;
        match axis {
            Axis::Major => next.major = self.major.checked_add(1)?,
            Axis::Minor => next.minor = self.minor.checked_add(1)?,
            Axis::Patch => next.patch = self.patch.checked_add(1)?,
        }
        Some(next)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}v{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VersionParseError(s.to_string());
        let captures = VERSION_PATTERN.captures(s.trim()).ok_or_else(invalid)?;
        let field = |index: usize| -> Result<u32, VersionParseError> {
            captures
                .get(index)
                .and_then(|m| m.as_str().parse().ok())
                .ok_or_else(invalid)
        };

        Ok(Self::new(field(1)?, field(2)?, field(3)?))
    }
}

impl TryFrom<String> for SemanticVersion {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SemanticVersion> for String {
    fn from(version: SemanticVersion) -> Self {
        version.to_string()
    }
}

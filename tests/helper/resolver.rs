//! In-memory resolver test utilities

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use nuke_version_parser::discovery::resolver::ReleaseResolver;
use nuke_version_parser::discovery::semver::SemanticVersion;
use nuke_version_parser::discovery::types::{Release, ReleaseArtifacts};

/// Resolver answering from a fixed set of versions and recording every call
pub struct RecordingResolver {
    existing: HashSet<SemanticVersion>,
    calls: Mutex<Vec<SemanticVersion>>,
}

impl RecordingResolver {
    pub fn new() -> Self {
        Self {
            existing: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_versions(mut self, versions: &[(u32, u32, u32)]) -> Self {
        self.existing.extend(
            versions
                .iter()
                .map(|&(major, minor, patch)| SemanticVersion::new(major, minor, patch)),
        );
        self
    }

    /// Versions passed to `resolve`, in call order
    pub fn calls(&self) -> Vec<SemanticVersion> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReleaseResolver for RecordingResolver {
    async fn resolve(&self, version: SemanticVersion) -> Option<Release> {
        self.calls.lock().unwrap().push(version);
        self.existing.contains(&version).then(|| {
            Release::new(
                version,
                ReleaseArtifacts::default(),
                Some("Thu, 02 May 2019 11:00:00 GMT".to_string()),
            )
        })
    }
}

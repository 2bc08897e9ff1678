//! Family construction from major, minor and patch walks
//!
//! Major releases seed one family each. Within a family the minor walk has
//! to finish before the patch walks can start, but the patch walks of
//! different minors, and whole families, run concurrently.

use std::future::Future;
use std::sync::Arc;

use futures::future::{join_all, try_join_all};
use tracing::{info, warn};

use crate::config::FIRST_KNOWN_VERSION;
use crate::discovery::error::DiscoveryError;
use crate::discovery::resolver::ReleaseResolver;
use crate::discovery::semver::{Axis, SemanticVersion};
use crate::discovery::types::{Family, Release};
use crate::discovery::walker::walk;

/// Discovers every release family reachable from a first known version
pub struct FamilyBuilder {
    resolver: Arc<dyn ReleaseResolver>,
    first_version: SemanticVersion,
}

impl FamilyBuilder {
    pub fn new(resolver: Arc<dyn ReleaseResolver>) -> Self {
        Self {
            resolver,
            first_version: FIRST_KNOWN_VERSION,
        }
    }

    /// Overrides the version the major walk starts from
    pub fn with_first_version(mut self, first_version: SemanticVersion) -> Self {
        self.first_version = first_version;
        self
    }

    /// Discovers all families, one per major version found.
    ///
    /// Releases within a family are in discovery order, not sorted.
    pub async fn discover_all_families(&self) -> Result<Vec<Family>, DiscoveryError> {
        let seeds = walk(self.resolver.as_ref(), self.first_version, Axis::Major).await;
        info!("Found {} major version(s)", seeds.len());

        let families = try_join_all(seeds.into_iter().map(|seed| self.build_family(seed))).await?;

        let release_count: usize = families.iter().map(|f| f.releases().len()).sum();
        info!(
            "Discovered {} release(s) across {} families",
            release_count,
            families.len()
        );
        Ok(families)
    }

    /// Runs [`Self::discover_all_families`] until `cancel` completes.
    ///
    /// Cancellation drops every in-flight probe and returns
    /// [`DiscoveryError::Cancelled`] instead of a partial result.
    pub async fn discover_until<F>(&self, cancel: F) -> Result<Vec<Family>, DiscoveryError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            () = cancel => {
                warn!("Discovery cancelled; discarding partial results");
                Err(DiscoveryError::Cancelled)
            }
            result = self.discover_all_families() => result,
        }
    }

    async fn build_family(&self, seed: Release) -> Result<Family, DiscoveryError> {
        let seed_version = seed.version;
        let major = seed_version.major;
        let mut family = Family::new(major, vec![seed])?;

        let minor_releases = match seed_version.incremented(Axis::Minor) {
            Some(start) => walk(self.resolver.as_ref(), start, Axis::Minor).await,
            None => Vec::new(),
        };

        let patch_starts: Vec<SemanticVersion> = std::iter::once(seed_version)
            .chain(minor_releases.iter().map(|release| release.version))
            .filter_map(|version| version.incremented(Axis::Patch))
            .collect();
        family.extend(minor_releases)?;

        let patch_walks = patch_starts
            .into_iter()
            .map(|start| walk(self.resolver.as_ref(), start, Axis::Patch));
        let patch_releases = join_all(patch_walks).await.into_iter().flatten();
        family.extend(patch_releases)?;

        info!(
            "Family {} has {} release(s)",
            major,
            family.releases().len()
        );
        Ok(family)
    }
}

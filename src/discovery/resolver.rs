//! Release resolution for a single version
//!
//! A version exists when at least one of the platform installers exists.
//! All platform probes for a version run concurrently; a shared semaphore
//! caps the number of probes in flight across the whole discovery run.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

#[cfg(test)]
use mockall::automock;

use crate::config::DEFAULT_MAX_CONCURRENT_PROBES;
use crate::discovery::prober::{ProbeOutcome, Prober};
use crate::discovery::semver::SemanticVersion;
use crate::discovery::types::{Platform, Release, ReleaseArtifacts};
use crate::discovery::url::UrlCalculator;

/// Trait for turning a version into a release, if the version exists
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseResolver: Send + Sync {
    /// Returns the release for `version`, or `None` when no installer was found
    async fn resolve(&self, version: SemanticVersion) -> Option<Release>;
}

/// Resolves a version by probing every slot in [`Platform::ALL`]
pub struct PlatformReleaseResolver {
    prober: Arc<dyn Prober>,
    urls: UrlCalculator,
    permits: Arc<Semaphore>,
}

impl PlatformReleaseResolver {
    pub fn new(prober: Arc<dyn Prober>, urls: UrlCalculator) -> Self {
        Self::with_concurrency(prober, urls, DEFAULT_MAX_CONCURRENT_PROBES)
    }

    /// Creates a resolver allowing at most `max_concurrent_probes` probes in flight
    pub fn with_concurrency(
        prober: Arc<dyn Prober>,
        urls: UrlCalculator,
        max_concurrent_probes: usize,
    ) -> Self {
        Self {
            prober,
            urls,
            permits: Arc::new(Semaphore::new(max_concurrent_probes.max(1))),
        }
    }

    /// Probes one slot. Probe errors count as a miss for that slot only.
    async fn probe_slot(&self, url: &str) -> Option<String> {
        let _permit = self.permits.acquire().await.ok()?;

        match self.prober.probe(url).await {
            Ok(ProbeOutcome::Found { last_modified }) => Some(last_modified),
            Ok(ProbeOutcome::Missing) => None,
            Err(e) => {
                warn!("Treating {} as missing: {}", url, e);
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl ReleaseResolver for PlatformReleaseResolver {
    async fn resolve(&self, version: SemanticVersion) -> Option<Release> {
        let probes = Platform::ALL.into_iter().map(|platform| async move {
            let url = self.urls.build_platform_url(version, platform);
            let last_modified = self.probe_slot(&url).await;
            (platform, url, last_modified)
        });

        // join_all keeps input order, so the timestamp comes from the first
        // slot in probe order that hit, regardless of completion order.
        let mut artifacts = ReleaseArtifacts::default();
        let mut timestamp = None;
        for (platform, url, last_modified) in join_all(probes).await {
            if let Some(last_modified) = last_modified {
                timestamp.get_or_insert(last_modified);
                artifacts.insert(platform, url);
            }
        }

        let Some(timestamp) = timestamp else {
            debug!("No installers found for {}", version);
            return None;
        };

        debug!("Resolved release {}", version);
        Some(Release::new(version, artifacts, Some(timestamp)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::error::ProbeError;
    use crate::discovery::prober::MockProber;

    fn resolver(prober: MockProber) -> PlatformReleaseResolver {
        PlatformReleaseResolver::new(
            Arc::new(prober),
            UrlCalculator::new("https://example.test/releases"),
        )
    }

    #[tokio::test]
    async fn resolve_probes_each_platform_once() {
        let mut prober = MockProber::new();
        prober.expect_probe().times(4).returning(|_| {
            Ok(ProbeOutcome::Found {
                last_modified: "Mon, 04 Dec 2023 09:00:00 GMT".to_string(),
            })
        });

        let release = resolver(prober)
            .resolve(SemanticVersion::new(15, 0, 1))
            .await
            .unwrap();

        assert_eq!(
            release.artifacts,
            ReleaseArtifacts {
                mac_arm: Some(
                    "https://example.test/releases/15.0v1/Nuke15.0v1-mac-arm64.dmg".to_string()
                ),
                mac_x86_64: Some(
                    "https://example.test/releases/15.0v1/Nuke15.0v1-mac-x86_64.dmg".to_string()
                ),
                linux_x86_64: Some(
                    "https://example.test/releases/15.0v1/Nuke15.0v1-linux-x86_64.tgz".to_string()
                ),
                windows_x86_64: Some(
                    "https://example.test/releases/15.0v1/Nuke15.0v1-win-x86_64.zip".to_string()
                ),
            }
        );
        assert_eq!(
            release.timestamp.as_deref(),
            Some("Mon, 04 Dec 2023 09:00:00 GMT")
        );
    }

    #[tokio::test]
    async fn resolve_returns_none_when_every_probe_misses() {
        let mut prober = MockProber::new();
        prober
            .expect_probe()
            .times(4)
            .returning(|_| Ok(ProbeOutcome::Missing));

        let release = resolver(prober).resolve(SemanticVersion::new(99, 0, 1)).await;

        assert_eq!(release, None);
    }

    #[tokio::test]
    async fn resolve_keeps_partial_platforms() {
        let mut prober = MockProber::new();
        prober
            .expect_probe()
            .withf(|url| url.ends_with("-mac-arm64.dmg"))
            .returning(|_| Ok(ProbeOutcome::Missing));
        prober.expect_probe().returning(|url| {
            Ok(ProbeOutcome::Found {
                last_modified: format!("date of {url}"),
            })
        });

        let release = resolver(prober)
            .resolve(SemanticVersion::new(12, 2, 7))
            .await
            .unwrap();

        assert_eq!(release.artifacts.mac_arm, None);
        assert!(release.artifacts.linux_x86_64.is_some());
        assert!(release.artifacts.windows_x86_64.is_some());
        // linux is the first slot in probe order
        assert_eq!(
            release.timestamp,
            Some(
                "date of https://example.test/releases/12.2v7/Nuke12.2v7-linux-x86_64.tgz"
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn resolve_takes_timestamp_from_windows_when_linux_misses() {
        let mut prober = MockProber::new();
        prober
            .expect_probe()
            .withf(|url| url.ends_with(".tgz"))
            .returning(|_| Ok(ProbeOutcome::Missing));
        prober.expect_probe().returning(|url| {
            Ok(ProbeOutcome::Found {
                last_modified: format!("date of {url}"),
            })
        });

        let release = resolver(prober)
            .resolve(SemanticVersion::new(14, 1, 2))
            .await
            .unwrap();

        assert_eq!(release.artifacts.linux_x86_64, None);
        assert_eq!(
            release.timestamp,
            Some(
                "date of https://example.test/releases/14.1v2/Nuke14.1v2-win-x86_64.zip"
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn resolve_treats_probe_errors_as_missing_slots() {
        let mut prober = MockProber::new();
        prober
            .expect_probe()
            .withf(|url| url.ends_with(".dmg"))
            .returning(|url| {
                Err(ProbeError::MalformedResponse {
                    url: url.to_string(),
                })
            });
        prober
            .expect_probe()
            .withf(|url| url.ends_with(".zip"))
            .returning(|url| Err(ProbeError::Timeout(url.to_string())));
        prober.expect_probe().returning(|_| {
            Ok(ProbeOutcome::Found {
                last_modified: "Fri, 01 Mar 2019 12:00:00 GMT".to_string(),
            })
        });

        let release = resolver(prober)
            .resolve(SemanticVersion::new(11, 3, 1))
            .await
            .unwrap();

        assert_eq!(
            release.artifacts,
            ReleaseArtifacts {
                linux_x86_64: Some(
                    "https://example.test/releases/11.3v1/Nuke11.3v1-linux-x86-release-64.tgz"
                        .to_string()
                ),
                ..ReleaseArtifacts::default()
            }
        );
        assert_eq!(
            release.timestamp.as_deref(),
            Some("Fri, 01 Mar 2019 12:00:00 GMT")
        );
    }

    #[tokio::test]
    async fn resolve_returns_none_when_only_errors_occur() {
        let mut prober = MockProber::new();
        prober
            .expect_probe()
            .times(4)
            .returning(|url| Err(ProbeError::Timeout(url.to_string())));

        let release = resolver(prober).resolve(SemanticVersion::new(9, 0, 1)).await;

        assert!(release.is_none());
    }
}

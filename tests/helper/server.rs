//! Mock release host test utilities

use mockito::{Mock, Server, ServerGuard};

use nuke_version_parser::discovery::semver::SemanticVersion;
use nuke_version_parser::discovery::types::Platform;
use nuke_version_parser::discovery::url::UrlCalculator;

/// Mock HTTP host answering HEAD requests for a set of installers.
///
/// Requests without a mock get mockito's 501 response, which probes treat as missing.
pub struct ReleaseServer {
    server: ServerGuard,
    mocks: Vec<Mock>,
}

impl ReleaseServer {
    pub async fn start() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Serves the installer of `version` for `platform` with the given `last-modified`
    pub async fn with_installer(
        mut self,
        version: SemanticVersion,
        platform: Platform,
        last_modified: &str,
    ) -> Self {
        let base = self.server.url();
        let url = UrlCalculator::new(&base).build_platform_url(version, platform);
        let path = url.strip_prefix(&base).unwrap().to_string();

        let mock = self
            .server
            .mock("HEAD", path.as_str())
            .with_status(200)
            .with_header("last-modified", last_modified)
            .create_async()
            .await;
        self.mocks.push(mock);
        self
    }

    /// Serves linux installers for every listed version
    pub async fn with_linux_releases(mut self, releases: &[(SemanticVersion, &str)]) -> Self {
        for (version, last_modified) in releases {
            self = self
                .with_installer(*version, Platform::LINUX_X86_64, last_modified)
                .await;
        }
        self
    }
}

//! HTTP HEAD prober

use std::time::Duration;

use reqwest::header::LAST_MODIFIED;
use tracing::debug;

use crate::discovery::error::ProbeError;
use crate::discovery::prober::{ProbeOutcome, Prober};

/// Prober issuing HEAD requests with a bounded timeout
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Creates a prober whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nuke-version-parser/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> Result<ProbeOutcome, ProbeError> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| ProbeError::from_request(url, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("Found no data for {} (status {})", url, status);
            return Ok(ProbeOutcome::Missing);
        }

        let last_modified = response
            .headers()
            .get(LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ProbeError::MalformedResponse {
                url: url.to_string(),
            })?;

        debug!("Processed {}", url);
        Ok(ProbeOutcome::Found {
            last_modified: last_modified.to_string(),
        })
    }
}

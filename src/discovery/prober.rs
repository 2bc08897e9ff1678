//! Prober trait for checking whether an installer URL exists

#[cfg(test)]
use mockall::automock;

use crate::discovery::error::ProbeError;

/// Result of a single existence check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The URL answered with a success status
    Found { last_modified: String },
    /// The URL answered with any other status
    Missing,
}

/// Trait for checking installer URLs without downloading them
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    /// Checks whether `url` exists
    ///
    /// # Returns
    /// * `Ok(ProbeOutcome::Found)` - 2xx status with a `last-modified` header
    /// * `Ok(ProbeOutcome::Missing)` - any other status
    /// * `Err(ProbeError)` - timeout, network failure, or a 2xx without a usable `last-modified`
    async fn probe(&self, url: &str) -> Result<ProbeOutcome, ProbeError>;
}

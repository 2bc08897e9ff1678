use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Probe timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response from {url}: missing last-modified header")]
    MalformedResponse { url: String },
}

impl ProbeError {
    /// Classifies a reqwest failure for `url`, separating timeouts from other network errors
    pub fn from_request(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProbeError::Timeout(url.to_string())
        } else {
            ProbeError::Network(err)
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Family {expected} cannot hold release {found}: major versions differ")]
pub struct IncompatibleFamilyError {
    pub expected: u32,
    pub found: String,
}

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Discovery was cancelled")]
    Cancelled,

    #[error(transparent)]
    IncompatibleFamily(#[from] IncompatibleFamilyError),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid release version: {0:?} (expected e.g. \"13.0v1\")")]
pub struct VersionParseError(pub String);

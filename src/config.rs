use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::discovery::semver::SemanticVersion;

// =============================================================================
// Discovery constants
// =============================================================================

/// Directory holding one sub-directory per release
pub const DEFAULT_BASE_URL: &str = "https://thefoundry.s3.amazonaws.com/products/nuke/releases";

/// Timeout for a single probe in milliseconds (5 seconds)
pub const PROBE_TIMEOUT_MS: u64 = 5_000;

/// Maximum number of probes in flight at once
pub const DEFAULT_MAX_CONCURRENT_PROBES: usize = 8;

/// Oldest release reachable through the installer URL scheme
pub const FIRST_KNOWN_VERSION: SemanticVersion = SemanticVersion::new(9, 0, 1);

// =============================================================================
// Export constants
// =============================================================================

/// A release is supported for this many days after its timestamp (about 18 months)
pub const SUPPORT_WINDOW_DAYS: i64 = 548;

pub const ALL_RELEASES_FILE: &str = "nuke-all-releases.json";
pub const MINOR_RELEASES_FILE: &str = "nuke-minor-releases.json";
pub const ALL_SUPPORTED_RELEASES_FILE: &str = "nuke-all-supported-releases.json";
pub const MINOR_SUPPORTED_RELEASES_FILE: &str = "nuke-minor-supported-releases.json";

const APP_NAME: &str = "nuke-version-parser";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Collector configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CollectorConfig {
    pub base_url: String,
    /// Probe timeout in milliseconds
    pub probe_timeout_ms: u64,
    pub max_concurrent_probes: usize,
    pub first_version: SemanticVersion,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            probe_timeout_ms: PROBE_TIMEOUT_MS,
            max_concurrent_probes: DEFAULT_MAX_CONCURRENT_PROBES,
            first_version: FIRST_KNOWN_VERSION,
        }
    }
}

impl CollectorConfig {
    /// Loads the configuration from a JSON file, or the defaults when `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.probe_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue(
                "probeTimeoutMs must be greater than 0".to_string(),
            ));
        }
        if self.max_concurrent_probes == 0 {
            return Err(ConfigError::InvalidValue(
                "maxConcurrentProbes must be greater than 0".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue("baseUrl must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Returns the path to the data directory for nuke-version-parser.
/// Uses $XDG_DATA_HOME/nuke-version-parser if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/nuke-version-parser,
/// or ./nuke-version-parser if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default log file.
pub fn log_path() -> PathBuf {
    data_dir().join(format!("{APP_NAME}.log"))
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join(APP_NAME)
}

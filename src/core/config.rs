//! Optional configuration file.
//!
//! Reads `<config_dir>/vaultkv/config.toml` (or the file named by
//! `--config` / `VAULTKV_CONFIG`). Command-line flags and environment
//! variables take precedence over anything set here. Tokens are never read
//! from the file.
//!
//! ```toml
//! skip_tls = false
//! timeout_secs = 30
//! exclude = ["secret/legacy"]
//!
//! [source]
//! address = "https://vault-a.example.com:8200"
//!
//! [target]
//! address = "https://vault-b.example.com:8200"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings loaded from the config file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Instance secrets are read from.
    #[serde(default)]
    pub source: InstanceSettings,
    /// Instance copies are written to.
    #[serde(default)]
    pub target: InstanceSettings,
    /// Accept invalid TLS certificates on both instances.
    #[serde(default)]
    pub skip_tls: bool,
    /// Per-request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Prefixes always excluded from count, find-duplicates and secrets-tree.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Per-instance section.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstanceSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Settings {
    /// Default config file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load settings.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used if present, and empty settings otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed TOML or unknown fields.
    pub fn parse(contents: &str) -> Result<Self> {
        let settings: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        debug!(
            exclude = settings.exclude.len(),
            skip_tls = settings.skip_tls,
            "config loaded"
        );
        Ok(settings)
    }

    /// Request timeout, falling back to the default.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(constants::DEFAULT_TIMEOUT_SECS))
    }
}

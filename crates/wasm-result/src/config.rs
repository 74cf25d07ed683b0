//! Configuration for [`ErrorThrower`](crate::ErrorThrower).
//!
//! Configuration is plain data implementing [`serde::Deserialize`], so an
//! embedder can keep it in its own settings file. [`ThrowerConfig::load`]
//! reads a standalone TOML file.
//!
//! # Example
//!
//! ```
//! # use wasm_result::config::{ReportPolicy, ThrowerConfig};
//! let config = ThrowerConfig::from_toml_str(r#"policy = "first-wins""#).unwrap();
//!
//! assert_eq!(config.policy(), ReportPolicy::FirstWins);
//! assert!(config.prefix_context());
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

/// What a thrower does when an error is reported while one is already recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportPolicy {
    /// The newest report replaces the recorded kind and message.
    #[default]
    Overwrite,

    /// The first report is kept; later reports are ignored.
    FirstWins,
}

/// Settings applied to every report made through a thrower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ThrowerConfig {
    /// Policy for repeated reports within one thrower scope.
    #[serde(default)]
    policy: ReportPolicy,

    /// Whether rendered messages start with `"{context}: "`.
    #[serde(default = "default_prefix_context")]
    prefix_context: bool,
}

fn default_prefix_context() -> bool {
    true
}

impl Default for ThrowerConfig {
    fn default() -> Self {
        Self {
            policy: ReportPolicy::default(),
            prefix_context: default_prefix_context(),
        }
    }
}

impl ThrowerConfig {
    /// Creates a new [`ThrowerConfig`].
    ///
    /// # Arguments
    ///
    /// * `policy` - Policy for repeated reports.
    /// * `prefix_context` - Whether messages are prefixed with the context label.
    pub fn new(policy: ReportPolicy, prefix_context: bool) -> Self {
        Self {
            policy,
            prefix_context,
        }
    }

    /// Returns the repeated-report policy.
    pub fn policy(&self) -> ReportPolicy {
        self.policy
    }

    /// Returns whether messages are prefixed with the context label.
    pub fn prefix_context(&self) -> bool {
        self.prefix_context
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML or does not
    /// match the expected shape.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File doesn't exist
    /// - File cannot be read
    /// - TOML parsing fails
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }

        debug!(path = path.display().to_string(); "Loading thrower configuration");
        let content = fs::read_to_string(path)?;

        Self::from_toml_str(&content)
    }
}

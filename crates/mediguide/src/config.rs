//! Layered configuration
//!
//! Defaults, then an optional JSON file, then environment overrides. Command
//! line flags are applied last by the binary.

use std::path::{Path, PathBuf};

use mediguide_core::RevealConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable naming a JSON config file
pub const CONFIG_PATH_ENV: &str = "MEDIGUIDE_CONFIG";
/// Environment override for the inter-fragment delay
pub const REVEAL_DELAY_ENV: &str = "MEDIGUIDE_REVEAL_DELAY_MS";

/// Runtime settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Reveal pacing
    pub reveal: RevealConfig,
    /// Default tracing filter when RUST_LOG is unset
    pub log_filter: Option<String>,
}

impl Settings {
    /// Load settings from `path` (or `$MEDIGUIDE_CONFIG`) and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Same as [`Settings::load`] with an injectable environment lookup
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut settings = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        settings.apply_env(lookup)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read a JSON settings file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&raw)?;
        debug!(path = %path.display(), "loaded settings file");
        Ok(settings)
    }

    /// Apply environment overrides
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(REVEAL_DELAY_ENV) {
            let delay_ms = raw.trim().parse::<u64>().map_err(|e| {
                Error::Config(format!("{} must be an integer: {}", REVEAL_DELAY_ENV, e))
            })?;
            self.reveal.fragment_delay_ms = delay_ms;
        }
        Ok(())
    }

    /// Override the delay, e.g. from a command line flag
    pub fn with_delay_ms(mut self, delay_ms: Option<u64>) -> Self {
        if let Some(delay_ms) = delay_ms {
            self.reveal.fragment_delay_ms = delay_ms;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.reveal.validate()?;
        Ok(())
    }
}

//! Reveal pacing configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Upper bound for the inter-fragment delay (one minute)
pub const MAX_FRAGMENT_DELAY_MS: u64 = 60_000;

/// Pacing of a reveal. All values are in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Delay between two appended fragments (default: 300ms)
    pub fragment_delay_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            fragment_delay_ms: 300,
        }
    }
}

impl RevealConfig {
    pub fn with_delay_ms(fragment_delay_ms: u64) -> Self {
        Self { fragment_delay_ms }
    }

    pub fn fragment_delay(&self) -> Duration {
        Duration::from_millis(self.fragment_delay_ms)
    }

    /// Check the delay is positive and bounded
    pub fn validate(&self) -> ConfigResult<()> {
        if self.fragment_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay);
        }
        if self.fragment_delay_ms > MAX_FRAGMENT_DELAY_MS {
            return Err(ConfigError::DelayTooLong {
                delay_ms: self.fragment_delay_ms,
                max_ms: MAX_FRAGMENT_DELAY_MS,
            });
        }
        Ok(())
    }
}

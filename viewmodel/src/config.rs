use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Transport bar settings. Every field has a default, so a config file only lists what it changes.
///
/// ```json
/// { "rewind_seconds": 15, "speed": { "max": 2.0 }, "shortcuts": { "play_pause": ["space", "k"] } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Volume change per volume up/down, in `0.0..=1.0` units
    pub volume_step: f64,
    /// Seconds jumped back by rewind
    pub rewind_seconds: f64,
    /// Seconds jumped ahead by forward
    pub forward_seconds: f64,
    /// Cover edge length in logical pixels
    pub cover_size: u32,
    pub speed: SpeedConfig,
    /// Accelerator overrides keyed by action name, replacing that action's defaults
    pub shortcuts: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Speed restored by speed reset
    pub default: f64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            volume_step: 0.1,
            rewind_seconds: 30.0,
            forward_seconds: 30.0,
            cover_size: 46,
            speed: SpeedConfig::default(),
            shortcuts: BTreeMap::new(),
        }
    }
}

impl Default for SpeedConfig {
    fn default() -> Self { Self { min: 0.5, max: 3.5, step: 0.1, default: 1.0 } }
}

impl TransportConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_json(&json)?;
        debug!(path = %path.display(), "loaded transport config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.volume_step > 0.0 && self.volume_step <= 1.0) {
            return Err(ConfigError::Invalid(format!("volume_step must be in (0, 1], got {}", self.volume_step)));
        }
        if !(self.rewind_seconds >= 0.0 && self.forward_seconds >= 0.0) {
            return Err(ConfigError::Invalid("seek steps must not be negative".to_string()));
        }
        if self.cover_size == 0 {
            return Err(ConfigError::Invalid("cover_size must not be zero".to_string()));
        }
        self.speed.validate()
    }
}

impl SpeedConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min > 0.0 && self.min <= self.max) {
            return Err(ConfigError::Invalid(format!("speed range {}..={} is empty or not positive", self.min, self.max)));
        }
        if !(self.step > 0.0) {
            return Err(ConfigError::Invalid(format!("speed step must be positive, got {}", self.step)));
        }
        if !(self.min..=self.max).contains(&self.default) {
            return Err(ConfigError::Invalid(format!("default speed {} outside {}..={}", self.default, self.min, self.max)));
        }
        Ok(())
    }

    /// Clamp to the configured range and round to hundredths, so repeated steps don't drift.
    /// Never panics, even for a range that fails [`SpeedConfig::validate`].
    pub fn normalize(&self, speed: f64) -> f64 { (speed.min(self.max).max(self.min) * 100.0).round() / 100.0 }
}

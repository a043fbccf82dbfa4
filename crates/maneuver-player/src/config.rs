//! Player configuration, loadable from JSON.

use std::path::Path;
use std::time::Duration;

use maneuver_core::traits::Validate;
use maneuver_core::{ManeuverError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Time between two pointer updates, in milliseconds
    pub frame_interval_ms: u64,
    /// Radius of the drawn pointer, in model units
    pub pointer_radius: f64,
    /// Wait before the first update, in milliseconds
    pub initial_delay_ms: u64,
}

impl PlayerConfig {
    pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 33;

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ManeuverError::Config(format!("invalid player config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ManeuverError::Config(format!("cannot encode player config: {}", e)))
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: Self::DEFAULT_FRAME_INTERVAL_MS,
            pointer_radius: 2.0,
            initial_delay_ms: 0,
        }
    }
}

impl Validate for PlayerConfig {
    fn validate(&self) -> Result<()> {
        if self.frame_interval_ms == 0 {
            return Err(ManeuverError::Config(
                "frame_interval_ms must be positive".into(),
            ));
        }
        if !self.pointer_radius.is_finite() || self.pointer_radius <= 0.0 {
            return Err(ManeuverError::Config(format!(
                "pointer_radius must be finite and positive, got {}",
                self.pointer_radius
            )));
        }
        Ok(())
    }
}

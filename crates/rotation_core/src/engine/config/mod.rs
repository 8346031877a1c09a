//! # Rotation Configuration
//!
//! Every tuning constant of the rotation lives here.
//!
//! ## Usage
//! ```rust
//! use rotation_core::engine::config::RotationConfig;
//!
//! let config = RotationConfig::default();
//! assert_eq!(config.squad_size, 7);
//! assert_eq!(config.interval_minutes, 3);
//! ```

mod policy_config;

pub use policy_config::{CapReason, SubstitutionPolicy};

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Outfield players on the pitch at once in 8-a-side.
pub const DEFAULT_SQUAD_SIZE: usize = 7;
/// Minutes between substitution checkpoints.
pub const DEFAULT_INTERVAL_MINUTES: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Rotating players on the pitch (the keeper is extra) (default: 7)
    pub squad_size: usize,
    /// Minutes between checkpoints (default: 3)
    pub interval_minutes: u32,
    /// Matches' worth of minutes credited per keeper stint (default: 2.0)
    pub compensation_factor: f64,
    /// Rate boost for anyone who has kept goal (default: 3.0)
    pub history_rate_multiplier: f64,
    /// Substitution count policy
    pub policy: SubstitutionPolicy,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            squad_size: DEFAULT_SQUAD_SIZE,
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            compensation_factor: 2.0,
            history_rate_multiplier: 3.0,
            policy: SubstitutionPolicy::default(),
        }
    }
}

impl RotationConfig {
    /// Same tuning with a different checkpoint spacing.
    pub fn with_interval(mut self, interval_minutes: u32) -> Self {
        self.interval_minutes = interval_minutes;
        self
    }

    /// Smallest roster that can field a keeper plus a full squad.
    pub fn min_roster(&self) -> usize {
        self.squad_size + 1
    }

    pub fn validate(&self) -> Result<()> {
        if self.squad_size == 0 {
            return Err(ConfigError::EmptySquad);
        }
        if self.interval_minutes == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.policy.sample_size == 0 {
            return Err(ConfigError::ZeroSampleSize);
        }
        for (name, value) in [
            ("strong_gap", self.policy.strong_gap),
            ("moderate_gap", self.policy.moderate_gap),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::NegativeGap { name, value });
            }
        }
        for (name, value) in [
            ("compensation_factor", self.compensation_factor),
            ("history_rate_multiplier", self.history_rate_multiplier),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidFactor { name, value });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: RotationConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }
}

// ========== Tests ==========

//! Top-level tank configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, RetentionConfig, SweepConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TANK_*`)
/// 2. Config file (`tank.toml` or an explicit path)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TankConfig {
    pub retention: RetentionConfig,
    pub sweep: SweepConfig,
    pub observability: ObservabilityConfig,
}

impl TankConfig {
    /// Load configuration: defaults, then `path` if given, then env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file. Keys absent from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `TANK_*` overrides resolved through `lookup`.
    /// Values that fail to parse are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TANK_DECAY_RATE").and_then(|s| s.parse::<f64>().ok()) {
            self.retention.decay_rate = v;
        }
        if let Some(v) = lookup("TANK_REVIEW_BOOST").and_then(|s| s.parse::<f64>().ok()) {
            self.retention.review_boost = v;
        }
        if let Some(v) = lookup("TANK_VIEWS_TARGET").and_then(|s| s.parse::<u32>().ok()) {
            self.retention.views_target = v;
        }
        if let Some(v) = lookup("TANK_RETENTION_FLOOR").and_then(|s| s.parse::<f64>().ok()) {
            self.retention.retention_floor = v;
        }
        if let Some(v) = lookup("TANK_LOG") {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &TankConfig) -> Result<(), ConfigError> {
        let r = &config.retention;

        if !(r.decay_rate.is_finite() && r.decay_rate > 0.0) {
            return Err(invalid("retention.decay_rate", "must be a finite value greater than 0"));
        }
        if !(r.review_boost > 0.0 && r.review_boost <= 1.0) {
            return Err(invalid("retention.review_boost", "must be in (0.0, 1.0]"));
        }
        if r.views_target == 0 {
            return Err(invalid("retention.views_target", "must be at least 1"));
        }
        if !(r.retention_floor > 0.0 && r.retention_floor < 1.0) {
            return Err(invalid("retention.retention_floor", "must be in (0.0, 1.0)"));
        }
        if !(r.strength_epsilon > 0.0 && r.strength_epsilon < r.retention_floor) {
            return Err(invalid(
                "retention.strength_epsilon",
                "must be greater than 0 and below retention_floor",
            ));
        }
        if !(r.missing_elapsed_days.is_finite() && r.missing_elapsed_days > 0.0) {
            return Err(invalid(
                "retention.missing_elapsed_days",
                "must be a finite value greater than 0",
            ));
        }
        if !(0.0..=1.0).contains(&r.initial_strength) {
            return Err(invalid("retention.initial_strength", "must be between 0.0 and 1.0"));
        }
        if r.initial_health > crate::constants::MAX_HEALTH {
            return Err(invalid("retention.initial_health", "must be between 0 and 100"));
        }
        if r.min_weight_g == 0 {
            return Err(invalid("retention.min_weight_g", "must be greater than 0"));
        }
        if r.initial_weight_g < r.min_weight_g {
            return Err(invalid(
                "retention.initial_weight_g",
                "must not be below min_weight_g",
            ));
        }
        if config.observability.log_level.trim().is_empty() {
            return Err(invalid("observability.log_level", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

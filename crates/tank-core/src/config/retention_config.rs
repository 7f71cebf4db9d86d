use serde::{Deserialize, Serialize};

use super::defaults;

/// Tunables of the retention engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Exponential decay rate λ, per day.
    pub decay_rate: f64,
    /// Review boost α, fraction of the remaining headroom recovered.
    pub review_boost: f64,
    /// View count at which engagement saturates to 1.0.
    pub views_target: u32,
    /// Strength θ below which an item is due for review.
    pub retention_floor: f64,
    /// Floor applied to strength before the due-date logarithm.
    pub strength_epsilon: f64,
    /// Elapsed days assumed when `last_update` is absent.
    pub missing_elapsed_days: f64,
    /// Memory strength of a freshly registered item.
    pub initial_strength: f64,
    /// Health of a freshly registered item.
    pub initial_health: u8,
    /// Weight (grams) of a freshly registered item.
    pub initial_weight_g: u32,
    /// Weight gained on a reviewed update.
    pub review_weight_gain: u32,
    /// Weight lost on a passive update.
    pub idle_weight_loss: u32,
    /// Weight floor.
    pub min_weight_g: u32,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            decay_rate: defaults::DEFAULT_DECAY_RATE,
            review_boost: defaults::DEFAULT_REVIEW_BOOST,
            views_target: defaults::DEFAULT_VIEWS_TARGET,
            retention_floor: defaults::DEFAULT_RETENTION_FLOOR,
            strength_epsilon: defaults::DEFAULT_STRENGTH_EPSILON,
            missing_elapsed_days: defaults::DEFAULT_MISSING_ELAPSED_DAYS,
            initial_strength: defaults::DEFAULT_INITIAL_STRENGTH,
            initial_health: defaults::DEFAULT_INITIAL_HEALTH,
            initial_weight_g: defaults::DEFAULT_INITIAL_WEIGHT_G,
            review_weight_gain: defaults::DEFAULT_REVIEW_WEIGHT_GAIN,
            idle_weight_loss: defaults::DEFAULT_IDLE_WEIGHT_LOSS,
            min_weight_g: defaults::DEFAULT_MIN_WEIGHT_G,
        }
    }
}

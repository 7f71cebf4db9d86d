//! Presentation mapping. Reads items, never writes them.

use serde::{Deserialize, Serialize};
use std::fmt;
use tank_core::item::{Health, TrackedItem};

/// Five-stage health banding for display.
///
/// `Dead` and `Frail` share stage 1; the other tiers step up one stage
/// per 20 health points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthTier {
    Dead,
    Frail,
    Weak,
    Normal,
    Lively,
    Thriving,
}

impl HealthTier {
    pub fn from_health(health: Health) -> Self {
        match health.value() {
            0 => HealthTier::Dead,
            1..=19 => HealthTier::Frail,
            20..=39 => HealthTier::Weak,
            40..=59 => HealthTier::Normal,
            60..=79 => HealthTier::Lively,
            _ => HealthTier::Thriving,
        }
    }

    /// Display stage, 1..=5.
    pub fn stage(self) -> u8 {
        match self {
            HealthTier::Dead | HealthTier::Frail => 1,
            HealthTier::Weak => 2,
            HealthTier::Normal => 3,
            HealthTier::Lively => 4,
            HealthTier::Thriving => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthTier::Dead => "dead",
            HealthTier::Frail => "frail",
            HealthTier::Weak => "weak",
            HealthTier::Normal => "normal",
            HealthTier::Lively => "lively",
            HealthTier::Thriving => "thriving",
        }
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Growth stage 1..=5 from weight in grams.
pub fn growth_stage(weight_g: u32) -> u8 {
    match weight_g {
        0..=70 => 1,
        71..=100 => 2,
        101..=140 => 3,
        141..=180 => 4,
        _ => 5,
    }
}

/// Sprite scale for a display stage: 0.6 at stage 1 up to 2.0 at stage 5.
pub fn size_factor(stage: u8) -> f64 {
    let stage = stage.clamp(1, 5);
    0.6 + (stage - 1) as f64 * (1.4 / 4.0)
}

/// Sprite opacity, never fainter than 0.6.
pub fn opacity(health: Health) -> f64 {
    health.ratio().clamp(0.6, 1.0)
}

/// Relative swim speed, never slower than 0.5.
pub fn swim_speed(health: Health) -> f64 {
    health.ratio().max(0.5)
}

/// Everything a renderer needs for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishDisplay {
    pub item_id: String,
    pub subject_id: String,
    pub tier: HealthTier,
    pub stage: u8,
    pub growth_stage: u8,
    pub size_factor: f64,
    pub opacity: f64,
    pub swim_speed: f64,
}

impl FishDisplay {
    pub fn of(item: &TrackedItem) -> Self {
        let tier = HealthTier::from_health(item.health);
        let stage = tier.stage();
        Self {
            item_id: item.id.clone(),
            subject_id: item.subject_id.clone(),
            tier,
            stage,
            growth_stage: growth_stage(item.weight_g),
            size_factor: size_factor(stage),
            opacity: opacity(item.health),
            swim_speed: swim_speed(item.health),
        }
    }
}

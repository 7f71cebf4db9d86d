use serde::{Deserialize, Serialize};
use std::fmt;

use super::Health;
use crate::constants::ALIVE_HEALTH_THRESHOLD;

/// Lifecycle classification of a tracked item.
///
/// Derived only from [`Health`]; carries no state of its own. `Dead` is the
/// bottom of the health range, not a terminal state: a later review can lift
/// the item back to `Weak` or `Alive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FishStatus {
    Alive,
    Weak,
    Dead,
}

impl FishStatus {
    pub fn from_health(health: Health) -> Self {
        match health.value() {
            0 => FishStatus::Dead,
            h if h < ALIVE_HEALTH_THRESHOLD => FishStatus::Weak,
            _ => FishStatus::Alive,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FishStatus::Alive => "alive",
            FishStatus::Weak => "weak",
            FishStatus::Dead => "dead",
        }
    }
}

impl fmt::Display for FishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

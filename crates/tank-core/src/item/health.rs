use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MAX_HEALTH;

/// User-facing health score, an integer in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Health(u8);

impl Health {
    pub const ZERO: Health = Health(0);
    pub const FULL: Health = Health(MAX_HEALTH);

    /// Create a new Health, clamping to [0, 100].
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, MAX_HEALTH as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Health as a fraction in [0.0, 1.0].
    pub fn ratio(self) -> f64 {
        self.0 as f64 / MAX_HEALTH as f64
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<i64> for Health {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Health> for i64 {
    fn from(h: Health) -> Self {
        h.0 as i64
    }
}

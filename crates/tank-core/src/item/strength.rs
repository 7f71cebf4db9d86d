use serde::{Deserialize, Serialize};
use std::fmt;

/// Latent memory strength clamped to [0.0, 1.0].
///
/// Non-finite input is pulled to the nearest boundary; NaN becomes 0.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct MemoryStrength(f64);

impl MemoryStrength {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;

    /// Create a new MemoryStrength, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// True once the strength has collapsed to its floor.
    pub fn is_exhausted(self) -> bool {
        self.0 <= Self::MIN
    }
}

impl Default for MemoryStrength {
    fn default() -> Self {
        Self(crate::config::defaults::DEFAULT_INITIAL_STRENGTH)
    }
}

impl fmt::Display for MemoryStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for MemoryStrength {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<MemoryStrength> for f64 {
    fn from(s: MemoryStrength) -> Self {
        s.0
    }
}

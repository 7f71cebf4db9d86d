use serde::{Deserialize, Serialize};

use super::defaults;

/// Daily sweep configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Fan the sweep out across the rayon pool.
    pub parallel: bool,
    /// Minimum batch size before the sweep goes parallel.
    pub parallel_threshold: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            parallel: defaults::DEFAULT_SWEEP_PARALLEL,
            parallel_threshold: defaults::DEFAULT_SWEEP_PARALLEL_THRESHOLD,
        }
    }
}

//! Compiled defaults for every tunable.

pub const DEFAULT_DECAY_RATE: f64 = 0.20;
pub const DEFAULT_REVIEW_BOOST: f64 = 0.6;
pub const DEFAULT_VIEWS_TARGET: u32 = 10;
pub const DEFAULT_RETENTION_FLOOR: f64 = 0.4;
pub const DEFAULT_STRENGTH_EPSILON: f64 = 1e-6;

/// Elapsed days assumed when an item has never been updated.
pub const DEFAULT_MISSING_ELAPSED_DAYS: f64 = 9999.0;

pub const DEFAULT_INITIAL_STRENGTH: f64 = 0.7;
pub const DEFAULT_INITIAL_HEALTH: u8 = 50;
pub const DEFAULT_INITIAL_WEIGHT_G: u32 = 100;
pub const DEFAULT_REVIEW_WEIGHT_GAIN: u32 = 5;
pub const DEFAULT_IDLE_WEIGHT_LOSS: u32 = 2;
pub const DEFAULT_MIN_WEIGHT_G: u32 = 50;

pub const DEFAULT_SWEEP_PARALLEL: bool = true;
pub const DEFAULT_SWEEP_PARALLEL_THRESHOLD: usize = 64;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;

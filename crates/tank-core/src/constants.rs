/// Tank system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Composite weight on decayed memory strength.
pub const WEIGHT_STRENGTH: f64 = 0.70;

/// Composite weight on view-count engagement.
pub const WEIGHT_ENGAGEMENT: f64 = 0.25;

/// Composite weight on the reviewed-today flag.
pub const WEIGHT_RECENCY: f64 = 0.05;

/// Upper bound of the user-facing health score.
pub const MAX_HEALTH: u8 = 100;

/// Health at or above this is `alive`; below it (and above zero) is `weak`.
pub const ALIVE_HEALTH_THRESHOLD: u8 = 30;

/// Seconds per day, for fractional elapsed-day computation.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Upper bound on a projected review interval, in days.
pub const MAX_DUE_DAYS: i64 = 36_500;

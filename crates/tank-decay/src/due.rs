use chrono::{DateTime, Duration, Utc};
use tank_core::constants::MAX_DUE_DAYS;

/// Whole days until `strength × e^(-λd)` reaches the retention floor θ:
///
/// ```text
/// d = max(1, round(-ln(θ / max(strength, ε)) / λ))
/// ```
///
/// Never less than one day, never more than `MAX_DUE_DAYS`. Rounds half
/// to even, like the health score.
pub fn days_until_due(strength: f64, retention_floor: f64, decay_rate: f64, epsilon: f64) -> i64 {
    let s = if strength.is_nan() { epsilon } else { strength.max(epsilon) };
    let days = (-(retention_floor / s).ln() / decay_rate).round_ties_even();

    if days.is_nan() {
        return 1;
    }
    (days.clamp(1.0, MAX_DUE_DAYS as f64)) as i64
}

/// Project the next review time from `now`.
pub fn project_next_due(
    strength: f64,
    now: DateTime<Utc>,
    retention_floor: f64,
    decay_rate: f64,
    epsilon: f64,
) -> DateTime<Utc> {
    let days = days_until_due(strength, retention_floor, decay_rate, epsilon);
    now.checked_add_signed(Duration::days(days)).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

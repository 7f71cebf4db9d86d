use chrono::{DateTime, Utc};
use tank_core::constants::SECONDS_PER_DAY;

/// Exponential decay: `s × e^(-λ × max(days, 0))`.
///
/// Monotonically non-increasing in `days`. NaN days count as zero,
/// infinite days collapse the strength to 0.0.
pub fn decay(strength: f64, elapsed_days: f64, decay_rate: f64) -> f64 {
    let days = elapsed_days.max(0.0);
    strength * (-decay_rate * days).exp()
}

/// Fractional days between `last_update` and `now`.
///
/// A missing timestamp yields `missing_days`; a clock running backwards
/// yields 0.0.
pub fn elapsed_days(
    last_update: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    missing_days: f64,
) -> f64 {
    match last_update {
        Some(last) => {
            let millis = (now - last).num_milliseconds().max(0) as f64;
            millis / 1000.0 / SECONDS_PER_DAY
        }
        None => missing_days,
    }
}

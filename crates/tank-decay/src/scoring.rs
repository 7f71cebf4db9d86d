use tank_core::constants::{MAX_HEALTH, WEIGHT_ENGAGEMENT, WEIGHT_RECENCY, WEIGHT_STRENGTH};
use tank_core::item::Health;

/// Weighted blend before clamping:
///
/// ```text
/// raw = 0.70 × strength + 0.25 × engagement + 0.05 × recency
/// ```
pub fn raw_composite(strength: f64, engagement: f64, recency: f64) -> f64 {
    WEIGHT_STRENGTH * strength + WEIGHT_ENGAGEMENT * engagement + WEIGHT_RECENCY * recency
}

/// Composite health: `round(100 × clamp(raw, 0, 1))`.
///
/// Rounds half to even, so 24.5 → 24 and 25.5 → 26. A NaN blend scores 0.
pub fn composite(strength: f64, engagement: f64, recency: f64) -> Health {
    let raw = raw_composite(strength, engagement, recency);
    let clamped = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) };
    let scaled = (MAX_HEALTH as f64 * clamped).round_ties_even();
    Health::new(scaled as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_new_item_scores_49() {
        assert_eq!(composite(0.7, 0.0, 0.0).value(), 49);
    }

    #[test]
    fn full_signals_score_100() {
        assert_eq!(composite(1.0, 1.0, 1.0).value(), 100);
    }

    #[test]
    fn empty_signals_score_0() {
        assert_eq!(composite(0.0, 0.0, 0.0).value(), 0);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        assert_eq!(composite(5.0, 5.0, 5.0).value(), 100);
        assert_eq!(composite(-5.0, 0.0, 0.0).value(), 0);
        assert_eq!(composite(f64::NAN, 0.0, 0.0).value(), 0);
    }

    #[test]
    fn half_rounds_to_even() {
        assert_eq!(composite(0.0, 0.0, 1.0).value(), 5);
        // 0.25 × 0.1 = 0.025 → 2.5 → 2
        assert_eq!(composite(0.0, 0.1, 0.0).value(), 2);
        // 0.25 × 0.14 = 0.035 → 3.5 → 4
        assert_eq!(composite(0.0, 0.14, 0.0).value(), 4);
    }
}

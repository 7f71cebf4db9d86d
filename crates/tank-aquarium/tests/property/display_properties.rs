use proptest::prelude::*;
use tank_aquarium::display::*;
use tank_core::item::Health;

proptest! {
    #[test]
    fn stage_is_monotone_in_health(a in 0i64..=100, b in 0i64..=100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let s_lo = HealthTier::from_health(Health::new(lo)).stage();
        let s_hi = HealthTier::from_health(Health::new(hi)).stage();
        prop_assert!(s_lo <= s_hi);
        prop_assert!((1..=5).contains(&s_lo));
    }

    #[test]
    fn growth_stage_is_monotone_in_weight(a in 0u32..1000, extra in 0u32..1000) {
        prop_assert!(growth_stage(a) <= growth_stage(a + extra));
        prop_assert!((1..=5).contains(&growth_stage(a)));
    }

    #[test]
    fn presentation_values_bounded(health in 0i64..=100) {
        let h = Health::new(health);
        prop_assert!((0.6..=1.0).contains(&opacity(h)));
        prop_assert!((0.5..=1.0).contains(&swim_speed(h)));
        let size = size_factor(HealthTier::from_health(h).stage());
        prop_assert!((0.6..=2.0 + 1e-12).contains(&size));
    }
}

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use tank_core::config::RetentionConfig;
use tank_core::item::*;
use tank_decay::factors::{boost, engagement, temporal};
use tank_decay::RetentionEngine;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap()
}

fn make_item(strength: f64, weight_g: u32, minutes_ago: Option<i64>) -> TrackedItem {
    let mut item = TrackedItem::new("prop", t0(), &RetentionConfig::default());
    item.memory_strength = MemoryStrength::new(strength);
    item.weight_g = weight_g;
    item.last_update = minutes_ago.map(|m| t0() - Duration::minutes(m));
    item
}

// ── Bounds ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn update_keeps_every_field_in_range(
        strength in 0.0f64..=1.0,
        weight_g in 0u32..10_000,
        minutes_ago in proptest::option::of(-100_000i64..1_000_000),
        reviewed in any::<bool>(),
        views in -1_000i64..1_000_000,
    ) {
        let engine = RetentionEngine::new();
        let item = make_item(strength, weight_g, minutes_ago);
        let signal = ReviewSignal { now: t0(), reviewed_today: reviewed, view_count: views };
        let updated = engine.update(&item, &signal);

        prop_assert!((0.0..=1.0).contains(&updated.memory_strength.value()));
        prop_assert!(updated.health.value() <= 100);
        prop_assert!(updated.weight_g >= 50);
        prop_assert_eq!(updated.status, FishStatus::from_health(updated.health));
        prop_assert_eq!(updated.last_update, Some(t0()));
    }
}

// ── Status derivation consistency ───────────────────────────────────────

proptest! {
    #[test]
    fn status_bands_match_health(health in 0i64..=100) {
        let status = FishStatus::from_health(Health::new(health));
        prop_assert_eq!(status == FishStatus::Dead, health == 0);
        prop_assert_eq!(status == FishStatus::Weak, health > 0 && health < 30);
        prop_assert_eq!(status == FishStatus::Alive, health >= 30);
    }
}

// ── Decay monotonicity ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn decay_non_increasing_in_days(
        strength in 0.0f64..=1.0,
        d1 in 0.0f64..365.0,
        extra in 0.0f64..365.0,
    ) {
        let a = temporal::decay(strength, d1, 0.2);
        let b = temporal::decay(strength, d1 + extra, 0.2);
        prop_assert!(a >= b, "decay({}, {}) = {} < decay(.., {}) = {}", strength, d1, a, d1 + extra, b);
    }
}

// ── Boost monotonicity & ceiling ─────────────────────────────────────────

proptest! {
    #[test]
    fn boost_never_lowers_and_stays_bounded(
        strength in 0.0f64..=1.0,
        alpha in 0.001f64..=1.0,
    ) {
        let boosted = boost::calculate(strength, alpha);
        prop_assert!(boosted >= strength);
        prop_assert!(boosted <= 1.0);
    }

    #[test]
    fn boost_strictly_increasing_below_ceiling(
        a in 0.0f64..0.99,
        gap in 0.001f64..0.01,
    ) {
        prop_assert!(boost::calculate(a + gap, 0.6) > boost::calculate(a, 0.6));
    }
}

// ── Engagement saturation ────────────────────────────────────────────────

proptest! {
    #[test]
    fn engagement_bounded_and_monotone(views in 0u64..1_000_000, more in 1u64..1000) {
        let e = engagement::normalize_views(views, 10);
        prop_assert!((0.0..=1.0).contains(&e));
        prop_assert!(engagement::normalize_views(views + more, 10) >= e);
        if views >= 10 {
            prop_assert_eq!(e, 1.0);
        }
    }
}

// ── Due-date ordering ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn next_due_at_least_one_day_out(
        strength in 0.0f64..=1.0,
        minutes_ago in proptest::option::of(0i64..1_000_000),
        reviewed in any::<bool>(),
        views in 0i64..100,
    ) {
        let engine = RetentionEngine::new();
        let item = make_item(strength, 100, minutes_ago);
        let signal = ReviewSignal { now: t0(), reviewed_today: reviewed, view_count: views };
        let updated = engine.update(&item, &signal);

        let due = updated.next_due.expect("engine always projects a due time");
        prop_assert!(due >= t0() + Duration::days(1));
        prop_assert!(Some(due) >= updated.last_update);
    }
}

// ── Idempotence of a no-op day ───────────────────────────────────────────

proptest! {
    #[test]
    fn zero_elapsed_passive_update_is_stable(
        strength in 0.0f64..=1.0,
        views in 0i64..100,
    ) {
        let engine = RetentionEngine::new();
        let item = make_item(strength, 100, Some(0));
        let signal = ReviewSignal::passive(t0(), views);

        let once = engine.update(&item, &signal);
        let again = engine.update(&item, &signal);
        prop_assert_eq!(&once, &again);

        let chained = engine.update(&once, &signal);
        prop_assert_eq!(chained.memory_strength, once.memory_strength);
        prop_assert_eq!(chained.health, once.health);
        prop_assert_eq!(chained.next_due, once.next_due);
    }
}

// ── Review never hurts ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn review_scores_at_least_passive(
        strength in 0.0f64..=1.0,
        minutes_ago in 0i64..100_000,
        views in 0i64..50,
    ) {
        let engine = RetentionEngine::new();
        let item = make_item(strength, 100, Some(minutes_ago));

        let passive = engine.update(&item, &ReviewSignal::passive(t0(), views));
        let reviewed = engine.update(&item, &ReviewSignal::reviewed(t0(), views));

        prop_assert!(reviewed.memory_strength >= passive.memory_strength);
        prop_assert!(reviewed.health >= passive.health);
        prop_assert!(reviewed.weight_g > passive.weight_g);
    }
}

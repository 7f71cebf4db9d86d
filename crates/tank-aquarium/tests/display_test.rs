use chrono::Utc;
use tank_aquarium::display::*;
use tank_core::config::RetentionConfig;
use tank_core::item::{Health, TrackedItem};

#[test]
fn tiers_follow_twenty_point_bands() {
    let cases = [
        (0, HealthTier::Dead, 1),
        (1, HealthTier::Frail, 1),
        (19, HealthTier::Frail, 1),
        (20, HealthTier::Weak, 2),
        (39, HealthTier::Weak, 2),
        (40, HealthTier::Normal, 3),
        (59, HealthTier::Normal, 3),
        (60, HealthTier::Lively, 4),
        (79, HealthTier::Lively, 4),
        (80, HealthTier::Thriving, 5),
        (100, HealthTier::Thriving, 5),
    ];
    for (health, tier, stage) in cases {
        let got = HealthTier::from_health(Health::new(health));
        assert_eq!(got, tier, "health {health}");
        assert_eq!(got.stage(), stage, "health {health}");
    }
}

#[test]
fn growth_stage_thresholds() {
    assert_eq!(growth_stage(50), 1);
    assert_eq!(growth_stage(70), 1);
    assert_eq!(growth_stage(71), 2);
    assert_eq!(growth_stage(100), 2);
    assert_eq!(growth_stage(140), 3);
    assert_eq!(growth_stage(180), 4);
    assert_eq!(growth_stage(181), 5);
}

#[test]
fn size_factor_spans_point_six_to_two() {
    assert!((size_factor(1) - 0.6).abs() < 1e-12);
    assert!((size_factor(3) - 1.3).abs() < 1e-12);
    assert!((size_factor(5) - 2.0).abs() < 1e-12);
    assert_eq!(size_factor(0), size_factor(1));
    assert_eq!(size_factor(9), size_factor(5));
}

#[test]
fn opacity_and_speed_have_floors() {
    assert_eq!(opacity(Health::new(0)), 0.6);
    assert_eq!(opacity(Health::new(80)), 0.8);
    assert_eq!(swim_speed(Health::new(10)), 0.5);
    assert_eq!(swim_speed(Health::new(100)), 1.0);
}

#[test]
fn fish_display_reads_item_without_changing_it() {
    let item = TrackedItem::new("video-a", Utc::now(), &RetentionConfig::default());
    let before = item.clone();

    let display = FishDisplay::of(&item);
    assert_eq!(display.tier, HealthTier::Normal);
    assert_eq!(display.stage, 3);
    assert_eq!(display.growth_stage, 2);
    assert_eq!(item, before);

    let json = serde_json::to_value(&display).unwrap();
    assert_eq!(json["tier"], "normal");
}

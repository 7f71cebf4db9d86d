use tank_core::config::{RetentionConfig, SweepConfig, TankConfig};
use tank_core::errors::ConfigError;
use tank_core::item::{FishStatus, MemoryStrength, ReviewSignal, TrackedItem};
use tank_core::traits::IRetentionEngine;
use tracing::{debug, trace};

use crate::due;
use crate::factors::{boost, engagement, temporal};
use crate::scoring;

/// Retention engine: decay → optional review boost → engagement →
/// composite health → status → weight → next-due projection.
///
/// Holds only configuration. Every update is a pure function of the item
/// and the [`ReviewSignal`].
#[derive(Debug, Clone)]
pub struct RetentionEngine {
    config: RetentionConfig,
    sweep: SweepConfig,
}

/// Every intermediate value of one update, for debugging/observability.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBreakdown {
    pub elapsed_days: f64,
    /// Strength after decay, before any boost.
    pub decayed_strength: f64,
    /// Strength written back (boosted when reviewed).
    pub boosted_strength: f64,
    pub engagement: f64,
    pub recency: f64,
    /// Blend before clamping and rounding.
    pub raw_composite: f64,
    pub health: u8,
    pub due_in_days: i64,
}

impl RetentionEngine {
    /// Create an engine with the reference tunables.
    pub fn new() -> Self {
        Self {
            config: RetentionConfig::default(),
            sweep: SweepConfig::default(),
        }
    }

    /// Create from a full tank config, validating it first.
    pub fn from_config(config: &TankConfig) -> Result<Self, ConfigError> {
        TankConfig::validate(config)?;
        Ok(Self {
            config: config.retention.clone(),
            sweep: config.sweep.clone(),
        })
    }

    /// Create with custom retention tunables and the default sweep settings.
    pub fn with_retention(config: RetentionConfig) -> Result<Self, ConfigError> {
        Self::from_config(&TankConfig {
            retention: config,
            ..TankConfig::default()
        })
    }

    pub fn config(&self) -> &RetentionConfig {
        &self.config
    }

    pub fn sweep_config(&self) -> &SweepConfig {
        &self.sweep
    }

    /// Apply one update and return the new item.
    pub fn update(&self, item: &TrackedItem, signal: &ReviewSignal) -> TrackedItem {
        self.update_with_breakdown(item, signal).0
    }

    /// Apply one update and return the new item with its breakdown.
    pub fn update_with_breakdown(
        &self,
        item: &TrackedItem,
        signal: &ReviewSignal,
    ) -> (TrackedItem, UpdateBreakdown) {
        let cfg = &self.config;

        let elapsed_days =
            temporal::elapsed_days(item.last_update, signal.now, cfg.missing_elapsed_days);
        let decayed =
            temporal::decay(item.memory_strength.value(), elapsed_days, cfg.decay_rate);
        // Decay always precedes the boost within one update.
        let strength = if signal.reviewed_today {
            boost::calculate(decayed, cfg.review_boost)
        } else {
            decayed
        };
        let strength = MemoryStrength::new(strength);

        let engagement = engagement::normalize_views(signal.views(), cfg.views_target);
        let recency = if signal.reviewed_today { 1.0 } else { 0.0 };
        let health = scoring::composite(strength.value(), engagement, recency);
        let status = FishStatus::from_health(health);

        let weight_g = self.next_weight(item.weight_g, signal.reviewed_today);

        let due_in_days = due::days_until_due(
            strength.value(),
            cfg.retention_floor,
            cfg.decay_rate,
            cfg.strength_epsilon,
        );
        let next_due = due::project_next_due(
            strength.value(),
            signal.now,
            cfg.retention_floor,
            cfg.decay_rate,
            cfg.strength_epsilon,
        );

        let updated = TrackedItem {
            id: item.id.clone(),
            subject_id: item.subject_id.clone(),
            memory_strength: strength,
            health,
            status,
            weight_g,
            last_update: Some(signal.now),
            next_due: Some(next_due),
        };

        let breakdown = UpdateBreakdown {
            elapsed_days,
            decayed_strength: decayed,
            boosted_strength: strength.value(),
            engagement,
            recency,
            raw_composite: scoring::raw_composite(strength.value(), engagement, recency),
            health: health.value(),
            due_in_days,
        };

        debug!(
            item_id = %item.id,
            reviewed = signal.reviewed_today,
            health = health.value(),
            status = %status,
            weight_g,
            "retention update applied"
        );
        trace!(item_id = %item.id, ?breakdown, "retention breakdown");

        (updated, breakdown)
    }

    fn next_weight(&self, weight_g: u32, reviewed_today: bool) -> u32 {
        let cfg = &self.config;
        let weight = if reviewed_today {
            weight_g.saturating_add(cfg.review_weight_gain)
        } else {
            weight_g.saturating_sub(cfg.idle_weight_loss)
        };
        weight.max(cfg.min_weight_g)
    }
}

impl Default for RetentionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IRetentionEngine for RetentionEngine {
    fn update(&self, item: &TrackedItem, signal: &ReviewSignal) -> TrackedItem {
        RetentionEngine::update(self, item, signal)
    }
}

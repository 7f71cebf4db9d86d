use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FishStatus, Health, ItemRecord, MemoryStrength};
use crate::config::RetentionConfig;
use crate::errors::RecordError;

/// One tracked learning subject (e.g. a watched video) and its retention state.
///
/// Mutated only by the retention engine. `health` and `status` are derived
/// values written by the engine, never set by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedItem {
    /// UUID v4 identifier.
    pub id: String,
    /// The subject this item tracks (e.g. a video id).
    pub subject_id: String,
    /// Latent retention, independent of engagement.
    pub memory_strength: MemoryStrength,
    /// Composite score.
    pub health: Health,
    /// Pure function of `health`.
    pub status: FishStatus,
    /// Gamification stat in grams, never below the configured floor.
    pub weight_g: u32,
    /// Time of the last applied update. `None` means never updated.
    pub last_update: Option<DateTime<Utc>>,
    /// When the strength is projected to cross the retention floor.
    /// `None` means not yet projected (no update applied since registration).
    pub next_due: Option<DateTime<Utc>>,
}

impl TrackedItem {
    /// Register a new subject with the configured initial state.
    pub fn new(subject_id: impl Into<String>, now: DateTime<Utc>, config: &RetentionConfig) -> Self {
        let health = Health::new(config.initial_health as i64);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            subject_id: subject_id.into(),
            memory_strength: MemoryStrength::new(config.initial_strength),
            health,
            status: FishStatus::from_health(health),
            weight_g: config.initial_weight_g.max(config.min_weight_g),
            last_update: Some(now),
            next_due: None,
        }
    }

    /// Coerce a loosely-typed persisted record into a tracked item.
    ///
    /// Numbers are clamped into range, the stored status is ignored and
    /// re-derived from health. Missing identifiers and unparsable
    /// timestamps are rejected.
    pub fn from_record(record: ItemRecord, config: &RetentionConfig) -> Result<Self, RecordError> {
        let id = record
            .id
            .filter(|s| !s.trim().is_empty())
            .ok_or(RecordError::MissingField { field: "id" })?;
        let subject_id = record
            .subject_id
            .filter(|s| !s.trim().is_empty())
            .ok_or(RecordError::MissingField { field: "subject_id" })?;

        let memory_strength =
            MemoryStrength::new(record.memory_strength.unwrap_or(config.initial_strength));
        let health = Health::new(record.health.unwrap_or(config.initial_health as i64));
        let weight_g = record
            .weight_g
            .unwrap_or(config.initial_weight_g as i64)
            .clamp(config.min_weight_g as i64, u32::MAX as i64) as u32;

        Ok(Self {
            id,
            subject_id,
            memory_strength,
            health,
            status: FishStatus::from_health(health),
            weight_g,
            last_update: parse_timestamp("last_update", record.last_update)?,
            next_due: parse_timestamp("next_due", record.next_due)?,
        })
    }

    /// Flatten into the persisted record shape.
    pub fn to_record(&self) -> ItemRecord {
        ItemRecord {
            id: Some(self.id.clone()),
            subject_id: Some(self.subject_id.clone()),
            memory_strength: Some(self.memory_strength.value()),
            health: Some(self.health.value() as i64),
            status: Some(self.status.as_str().to_string()),
            weight_g: Some(self.weight_g as i64),
            last_update: self.last_update.map(|t| t.to_rfc3339()),
            next_due: self.next_due.map(|t| t.to_rfc3339()),
        }
    }

    /// Whether a review is recommended at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self.next_due {
            Some(due) => due <= now,
            None => false,
        }
    }
}

fn parse_timestamp(
    field: &'static str,
    raw: Option<String>,
) -> Result<Option<DateTime<Utc>>, RecordError> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s.trim())
            .map(|t| Some(t.with_timezone(&Utc)))
            .map_err(|_| RecordError::InvalidTimestamp { field, value: s }),
    }
}

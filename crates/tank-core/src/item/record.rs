use serde::{Deserialize, Serialize};

/// Persisted shape of a tracked item as it arrives from storage.
///
/// Every field is optional and loosely typed; [`TrackedItem::from_record`]
/// validates and coerces it.
///
/// [`TrackedItem::from_record`]: super::TrackedItem::from_record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRecord {
    pub id: Option<String>,
    pub subject_id: Option<String>,
    #[serde(alias = "s")]
    pub memory_strength: Option<f64>,
    pub health: Option<i64>,
    /// Informational only; status is re-derived from health on ingest.
    pub status: Option<String>,
    pub weight_g: Option<i64>,
    /// RFC 3339.
    pub last_update: Option<String>,
    /// RFC 3339.
    pub next_due: Option<String>,
}

impl ItemRecord {
    /// Parse a JSON document into a record.
    pub fn from_json(json: &str) -> crate::errors::TankResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

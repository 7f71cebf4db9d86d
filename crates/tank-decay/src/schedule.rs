use chrono::{DateTime, Utc};
use tank_core::item::TrackedItem;

/// Whether the passive daily decay is still owed for `item` at `now`.
///
/// True when the item was never updated, or its last update fell on an
/// earlier UTC calendar date. At most one passive decay per item per day.
pub fn needs_daily_decay(item: &TrackedItem, now: DateTime<Utc>) -> bool {
    match item.last_update {
        None => true,
        Some(last) => last.date_naive() < now.date_naive(),
    }
}

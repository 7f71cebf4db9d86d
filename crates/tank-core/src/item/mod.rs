pub mod health;
pub mod record;
pub mod signal;
pub mod status;
pub mod strength;
pub mod tracked_item;

pub use health::Health;
pub use record::ItemRecord;
pub use signal::ReviewSignal;
pub use status::FishStatus;
pub use strength::MemoryStrength;
pub use tracked_item::TrackedItem;

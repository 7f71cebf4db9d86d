//! # tank-core
//!
//! Foundation crate for the retention tank.
//! Defines the tracked-item model, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod item;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{RetentionConfig, TankConfig};
pub use errors::{TankError, TankResult};
pub use item::{FishStatus, Health, ItemRecord, MemoryStrength, ReviewSignal, TrackedItem};

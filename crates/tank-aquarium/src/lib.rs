//! # tank-aquarium
//!
//! Reference application shell around the retention engine.
//!
//! Owns persistence (an [`IItemStore`], in memory by default), decides when
//! to run passive decay and reviewed updates, sources view counts, and maps
//! health onto presentation tiers. The engine itself stays pure.
//!
//! [`IItemStore`]: tank_core::traits::IItemStore

pub mod aquarium;
pub mod display;
pub mod store;
pub mod tracing_setup;

pub use aquarium::Aquarium;
pub use display::{FishDisplay, HealthTier};
pub use store::InMemoryItemStore;

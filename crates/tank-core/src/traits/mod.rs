pub mod item_store;
pub mod retention_engine;

pub use item_store::IItemStore;
pub use retention_engine::IRetentionEngine;

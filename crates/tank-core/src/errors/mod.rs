//! Error handling for the tank.
//! One error enum per boundary, `thiserror` only.
//!
//! The retention math never fails; errors exist where data enters
//! (config, persisted records) and where the item store is addressed.

pub mod config_error;
pub mod record_error;
pub mod store_error;
pub mod tank_error;

pub use config_error::ConfigError;
pub use record_error::RecordError;
pub use store_error::StoreError;
pub use tank_error::{TankError, TankResult};

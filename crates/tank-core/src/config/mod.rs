//! Configuration for the tank.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod defaults;
pub mod observability_config;
pub mod retention_config;
pub mod sweep_config;
pub mod tank_config;

pub use observability_config::ObservabilityConfig;
pub use retention_config::RetentionConfig;
pub use sweep_config::SweepConfig;
pub use tank_config::TankConfig;

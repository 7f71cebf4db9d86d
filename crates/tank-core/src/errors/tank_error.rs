use super::{ConfigError, RecordError, StoreError};

/// Top-level error for the tank.
#[derive(Debug, thiserror::Error)]
pub enum TankError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("record error: {0}")]
    Record(#[from] RecordError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type TankResult<T> = Result<T, TankError>;

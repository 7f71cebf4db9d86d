//! Pure math primitives the engine composes.

pub mod boost;
pub mod engagement;
pub mod temporal;

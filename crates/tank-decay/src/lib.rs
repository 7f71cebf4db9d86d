//! # tank-decay
//!
//! Retention engine for tracked learning items.
//!
//! An update decays memory strength exponentially with elapsed days, applies
//! a review boost when the item was reviewed today, blends the result with a
//! log-normalized view count into an integer health score, and projects when
//! the strength will cross the retention floor.

pub mod due;
pub mod engine;
pub mod factors;
pub mod schedule;
pub mod scoring;
pub mod sweep;

pub use engine::{RetentionEngine, UpdateBreakdown};
pub use schedule::needs_daily_decay;
pub use sweep::SweepReport;

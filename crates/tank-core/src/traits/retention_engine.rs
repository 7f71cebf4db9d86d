use crate::item::{ReviewSignal, TrackedItem};

/// Pure state transition over one tracked item.
///
/// Implementations hold no mutable state and never fail: out-of-range
/// inputs are clamped. Callers serialize updates per item.
pub trait IRetentionEngine: Send + Sync {
    /// Apply decay, an optional review boost, and rescoring; return the new item.
    fn update(&self, item: &TrackedItem, signal: &ReviewSignal) -> TrackedItem;
}

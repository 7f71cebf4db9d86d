use crate::errors::TankResult;
use crate::item::TrackedItem;

/// Persistence for tracked items and their view counts.
///
/// `with_item_mut` is the per-item exclusive section: no two calls for the
/// same id may overlap. Calls for different ids are independent.
pub trait IItemStore: Send + Sync {
    // --- CRUD ---
    fn create(&self, item: &TrackedItem) -> TankResult<()>;
    fn get(&self, id: &str) -> TankResult<Option<TrackedItem>>;
    fn find_by_subject(&self, subject_id: &str) -> TankResult<Option<TrackedItem>>;
    fn delete(&self, id: &str) -> TankResult<()>;
    fn list(&self) -> TankResult<Vec<TrackedItem>>;
    fn ids(&self) -> TankResult<Vec<String>>;

    /// Run `f` against the stored item under exclusive access and return
    /// the item as written back.
    fn with_item_mut(
        &self,
        id: &str,
        f: &mut dyn FnMut(&mut TrackedItem),
    ) -> TankResult<TrackedItem>;

    // --- Signals ---
    /// Record one watch event for `subject_id`; returns the new count.
    fn record_view(&self, subject_id: &str) -> TankResult<u64>;
    fn view_count(&self, subject_id: &str) -> TankResult<u64>;
}

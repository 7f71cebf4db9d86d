use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tank_core::errors::{StoreError, TankResult};
use tank_core::item::TrackedItem;
use tank_core::traits::IItemStore;

/// In-memory item store.
///
/// Items are sharded in a `DashMap`; the write guard on an entry is the
/// per-item exclusive lock, so updates to different items never contend
/// on a global lock.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: DashMap<String, TrackedItem>,
    /// subject id → item id.
    subjects: DashMap<String, String>,
    /// subject id → recorded watch events.
    views: DashMap<String, u64>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IItemStore for InMemoryItemStore {
    fn create(&self, item: &TrackedItem) -> TankResult<()> {
        match self.subjects.entry(item.subject_id.clone()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyRegistered {
                subject_id: item.subject_id.clone(),
            }
            .into()),
            Entry::Vacant(slot) => {
                slot.insert(item.id.clone());
                self.items.insert(item.id.clone(), item.clone());
                Ok(())
            }
        }
    }

    fn get(&self, id: &str) -> TankResult<Option<TrackedItem>> {
        Ok(self.items.get(id).map(|entry| entry.value().clone()))
    }

    fn find_by_subject(&self, subject_id: &str) -> TankResult<Option<TrackedItem>> {
        let id = match self.subjects.get(subject_id) {
            Some(entry) => entry.value().clone(),
            None => return Ok(None),
        };
        self.get(&id)
    }

    fn delete(&self, id: &str) -> TankResult<()> {
        let (_, item) = self
            .items
            .remove(id)
            .ok_or_else(|| StoreError::ItemNotFound { id: id.to_string() })?;
        self.subjects.remove(&item.subject_id);
        self.views.remove(&item.subject_id);
        Ok(())
    }

    fn list(&self) -> TankResult<Vec<TrackedItem>> {
        let mut items: Vec<TrackedItem> =
            self.items.iter().map(|entry| entry.value().clone()).collect();
        items.sort_by(|a, b| a.subject_id.cmp(&b.subject_id));
        Ok(items)
    }

    fn ids(&self) -> TankResult<Vec<String>> {
        Ok(self.items.iter().map(|entry| entry.key().clone()).collect())
    }

    fn with_item_mut(
        &self,
        id: &str,
        f: &mut dyn FnMut(&mut TrackedItem),
    ) -> TankResult<TrackedItem> {
        let mut guard = self
            .items
            .get_mut(id)
            .ok_or_else(|| StoreError::ItemNotFound { id: id.to_string() })?;
        f(guard.value_mut());
        Ok(guard.value().clone())
    }

    fn record_view(&self, subject_id: &str) -> TankResult<u64> {
        let mut count = self.views.entry(subject_id.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    fn view_count(&self, subject_id: &str) -> TankResult<u64> {
        Ok(self.views.get(subject_id).map(|count| *count).unwrap_or(0))
    }
}

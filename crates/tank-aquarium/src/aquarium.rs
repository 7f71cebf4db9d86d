//! Aquarium: the application shell that owns items and drives the engine.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tank_core::config::TankConfig;
use tank_core::errors::{ConfigError, StoreError, TankError, TankResult};
use tank_core::item::{FishStatus, ReviewSignal, TrackedItem};
use tank_core::traits::IItemStore;
use tank_decay::{RetentionEngine, SweepReport};
use tracing::{info, warn};

use crate::store::InMemoryItemStore;

/// Result of sweeping one item.
enum ItemSweep {
    Decayed(FishStatus, FishStatus),
    Skipped,
    Vanished,
}

/// Holds one tracked item per subject and serializes engine updates per item.
///
/// Every write goes through [`IItemStore::with_item_mut`], so a daily sweep
/// and a watch event arriving together for the same item never overlap.
pub struct Aquarium<S: IItemStore = InMemoryItemStore> {
    store: S,
    engine: RetentionEngine,
}

impl Aquarium<InMemoryItemStore> {
    /// In-memory aquarium with the reference tunables.
    pub fn new() -> Self {
        Self::with_store(InMemoryItemStore::new(), RetentionEngine::new())
    }

    /// In-memory aquarium from a validated config.
    pub fn from_config(config: &TankConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_store(
            InMemoryItemStore::new(),
            RetentionEngine::from_config(config)?,
        ))
    }
}

impl Default for Aquarium<InMemoryItemStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IItemStore> Aquarium<S> {
    pub fn with_store(store: S, engine: RetentionEngine) -> Self {
        Self { store, engine }
    }

    pub fn engine(&self) -> &RetentionEngine {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Start tracking `subject_id`. One item per subject.
    pub fn register(&self, subject_id: &str, now: DateTime<Utc>) -> TankResult<TrackedItem> {
        let item = TrackedItem::new(subject_id, now, self.engine.config());
        if let Err(e) = self.store.create(&item) {
            warn!(subject_id, error = %e, "registration rejected");
            return Err(e);
        }
        info!(item_id = %item.id, subject_id, "item registered");
        Ok(item)
    }

    /// Record a watch event and apply a reviewed-today update with the new
    /// view count.
    ///
    /// The count is bumped under the item's lock, so updates land in the
    /// same order as the counts they were computed from.
    pub fn record_watch(&self, item_id: &str, now: DateTime<Utc>) -> TankResult<TrackedItem> {
        let engine = &self.engine;
        let store = &self.store;
        let mut views = Ok(0);

        let updated = store.with_item_mut(item_id, &mut |item: &mut TrackedItem| {
            views = store.record_view(&item.subject_id);
            if let Ok(count) = views {
                let signal = ReviewSignal::reviewed(now, i64::try_from(count).unwrap_or(i64::MAX));
                *item = engine.update(item, &signal);
            }
        })?;
        let views = views?;

        info!(
            item_id,
            views,
            health = updated.health.value(),
            status = %updated.status,
            "watch recorded"
        );
        Ok(updated)
    }

    /// Passive decay for every item not yet decayed today.
    ///
    /// Each item is decayed under its own lock. Batches at or above
    /// `parallel_threshold` fan out across the rayon pool when the sweep
    /// config allows it.
    pub fn daily_sweep(&self, now: DateTime<Utc>) -> TankResult<SweepReport> {
        let ids = self.store.ids()?;
        let sweep = self.engine.sweep_config();
        let outcomes: Vec<TankResult<ItemSweep>> =
            if sweep.parallel && ids.len() >= sweep.parallel_threshold {
                ids.par_iter().map(|id| self.sweep_item(id, now)).collect()
            } else {
                ids.iter().map(|id| self.sweep_item(id, now)).collect()
            };

        let mut report = SweepReport::default();
        for outcome in outcomes {
            match outcome? {
                ItemSweep::Decayed(before, after) => report.record_decayed(before, after),
                ItemSweep::Skipped => report.record_skipped(),
                ItemSweep::Vanished => {}
            }
        }

        info!(
            examined = report.examined,
            decayed = report.decayed,
            skipped = report.skipped,
            died = report.died,
            weakened = report.weakened,
            parallel = sweep.parallel && ids.len() >= sweep.parallel_threshold,
            "aquarium sweep complete"
        );
        Ok(report)
    }

    fn sweep_item(&self, id: &str, now: DateTime<Utc>) -> TankResult<ItemSweep> {
        let view_counts = |subject: &str| {
            let count = self.store.view_count(subject).unwrap_or(0);
            i64::try_from(count).unwrap_or(i64::MAX)
        };
        let mut transition = None;

        let result = self.store.with_item_mut(id, &mut |item: &mut TrackedItem| {
            transition = self.engine.sweep_one(item, now, &view_counts);
        });

        match result {
            Ok(_) => Ok(match transition {
                Some((before, after)) => ItemSweep::Decayed(before, after),
                None => ItemSweep::Skipped,
            }),
            // Removed between listing and locking.
            Err(TankError::Store(StoreError::ItemNotFound { .. })) => {
                warn!(item_id = %id, "item vanished during sweep");
                Ok(ItemSweep::Vanished)
            }
            Err(e) => Err(e),
        }
    }

    pub fn get(&self, item_id: &str) -> TankResult<Option<TrackedItem>> {
        self.store.get(item_id)
    }

    pub fn find_by_subject(&self, subject_id: &str) -> TankResult<Option<TrackedItem>> {
        self.store.find_by_subject(subject_id)
    }

    /// Stop tracking an item and drop its view history.
    pub fn remove(&self, item_id: &str) -> TankResult<()> {
        self.store.delete(item_id)?;
        info!(item_id, "item removed");
        Ok(())
    }

    /// Snapshot of all items, ordered by subject id.
    pub fn items(&self) -> TankResult<Vec<TrackedItem>> {
        self.store.list()
    }

    /// Items whose projected review time has arrived.
    pub fn due_for_review(&self, now: DateTime<Utc>) -> TankResult<Vec<TrackedItem>> {
        Ok(self
            .store
            .list()?
            .into_iter()
            .filter(|item| item.is_due(now))
            .collect())
    }

    pub fn view_count(&self, subject_id: &str) -> TankResult<u64> {
        self.store.view_count(subject_id)
    }
}

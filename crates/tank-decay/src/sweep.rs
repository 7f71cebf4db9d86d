//! Once-a-day passive decay over a batch of items.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tank_core::item::{FishStatus, ReviewSignal, TrackedItem};
use tracing::info;

use crate::engine::RetentionEngine;
use crate::schedule::needs_daily_decay;

/// Summary of one sweep run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Items looked at.
    pub examined: usize,
    /// Items that received a passive decay.
    pub decayed: usize,
    /// Items already decayed today.
    pub skipped: usize,
    /// Items that crossed into `dead` during this sweep.
    pub died: usize,
    /// Items that dropped from `alive` to `weak` during this sweep.
    pub weakened: usize,
}

impl SweepReport {
    pub fn record_skipped(&mut self) {
        self.examined += 1;
        self.skipped += 1;
    }

    pub fn record_decayed(&mut self, before: FishStatus, after: FishStatus) {
        self.examined += 1;
        self.decayed += 1;
        if before != FishStatus::Dead && after == FishStatus::Dead {
            self.died += 1;
        }
        if before == FishStatus::Alive && after == FishStatus::Weak {
            self.weakened += 1;
        }
    }

    fn record(&mut self, transition: Option<(FishStatus, FishStatus)>) {
        match transition {
            Some((before, after)) => self.record_decayed(before, after),
            None => self.record_skipped(),
        }
    }
}

impl RetentionEngine {
    /// Apply the passive daily decay to every item that still owes one today.
    ///
    /// `view_counts` supplies the current view count for a subject id. Items
    /// are independent; large batches fan out over rayon.
    pub fn sweep<F>(
        &self,
        items: &mut [TrackedItem],
        now: DateTime<Utc>,
        view_counts: F,
    ) -> SweepReport
    where
        F: Fn(&str) -> i64 + Sync,
    {
        let sweep = self.sweep_config();
        let transitions: Vec<Option<(FishStatus, FishStatus)>> =
            if sweep.parallel && items.len() >= sweep.parallel_threshold {
                items
                    .par_iter_mut()
                    .map(|item| self.sweep_one(item, now, &view_counts))
                    .collect()
            } else {
                items
                    .iter_mut()
                    .map(|item| self.sweep_one(item, now, &view_counts))
                    .collect()
            };

        let mut report = SweepReport::default();
        for transition in transitions {
            report.record(transition);
        }

        info!(
            examined = report.examined,
            decayed = report.decayed,
            skipped = report.skipped,
            died = report.died,
            weakened = report.weakened,
            "daily sweep complete"
        );
        report
    }

    /// Gate and decay a single item in place.
    ///
    /// Returns the status before and after, or `None` when the item was
    /// already decayed today.
    pub fn sweep_one<F>(
        &self,
        item: &mut TrackedItem,
        now: DateTime<Utc>,
        view_counts: &F,
    ) -> Option<(FishStatus, FishStatus)>
    where
        F: Fn(&str) -> i64,
    {
        if !needs_daily_decay(item, now) {
            return None;
        }
        let before = item.status;
        let signal = ReviewSignal::passive(now, view_counts(&item.subject_id));
        *item = self.update(item, &signal);
        Some((before, item.status))
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller-supplied inputs for one engine update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSignal {
    /// Wall-clock time of the update.
    pub now: DateTime<Utc>,
    /// The update was triggered by an explicit review today.
    pub reviewed_today: bool,
    /// Recorded watch events for the subject. Negative counts are treated as 0.
    pub view_count: i64,
}

impl ReviewSignal {
    /// Passive once-a-day decay.
    pub fn passive(now: DateTime<Utc>, view_count: i64) -> Self {
        Self {
            now,
            reviewed_today: false,
            view_count,
        }
    }

    /// Explicit review, e.g. a recorded watch event.
    pub fn reviewed(now: DateTime<Utc>, view_count: i64) -> Self {
        Self {
            now,
            reviewed_today: true,
            view_count,
        }
    }

    /// View count with negatives normalized to zero.
    pub fn views(&self) -> u64 {
        self.view_count.max(0) as u64
    }
}

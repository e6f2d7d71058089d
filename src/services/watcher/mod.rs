use std::time::Duration as StdDuration;

use chrono::NaiveDateTime;

use crate::services::schedule::resolver::{resolve_week_index, RolloverRule};
use crate::services::schedule::Schedule;
use crate::utils::date::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchTick {
    pub index: Option<usize>,
    /// True when `index` differs from the previous tick.
    pub changed: bool,
}

/// Re-resolves the current week on every tick and reports changes.
pub struct WeekWatcher {
    last_index: Option<usize>,
    rule: RolloverRule,
    interval: StdDuration,
}

impl WeekWatcher {
    /// Start watching from an already-resolved index.
    pub fn new(initial_index: Option<usize>, interval: StdDuration) -> Self {
        Self {
            last_index: initial_index,
            rule: RolloverRule::default(),
            interval,
        }
    }

    pub fn interval(&self) -> StdDuration {
        self.interval
    }

    pub fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    pub fn tick(&mut self, schedule: &Schedule, clock: &dyn Clock) -> WatchTick {
        self.tick_at(schedule, clock.now())
    }

    pub fn tick_at(&mut self, schedule: &Schedule, now: NaiveDateTime) -> WatchTick {
        let index = resolve_week_index(schedule, now, &self.rule);
        let changed = index != self.last_index;

        if changed {
            log::info!(
                "Current week changed from {:?} to {:?}",
                self.last_index,
                index
            );
            self.last_index = index;
        }

        WatchTick { index, changed }
    }
}

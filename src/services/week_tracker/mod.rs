use std::fmt;

use crate::services::schedule::Schedule;
use crate::services::storage::{KeyValueStore, LAST_SEEN_WEEK_KEY};

/// One-time notice that the current week moved on since the last check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewWeekNotice {
    pub week_index: usize,
    pub week_number: u32,
}

impl fmt::Display for NewWeekNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🎉 New Week Started! Week #{}", self.week_number)
    }
}

/// Remembers which week was last shown and reports when that changes.
pub struct WeekTracker<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> WeekTracker<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Record `current` as seen.
    ///
    /// The first observation is stored silently. Later observations that
    /// differ from the stored index (or replace an unreadable one) produce a
    /// notice. Store errors are logged and never surfaced; a notice is only
    /// returned once the new index has been recorded, so it is never repeated.
    pub fn check_new_week(&self, schedule: &Schedule, current: Option<usize>) -> Option<NewWeekNotice> {
        let index = current?;
        let week = schedule.get(index)?;

        let last_seen = match self.store.get(LAST_SEEN_WEEK_KEY) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Could not read last seen week: {:#}", e);
                return None;
            }
        };

        let changed = match last_seen {
            None => false,
            Some(ref raw) => raw.trim().parse::<usize>().ok() != Some(index),
        };

        if last_seen.is_none() || changed {
            if let Err(e) = self.store.set(LAST_SEEN_WEEK_KEY, &index.to_string()) {
                log::warn!("Could not record last seen week: {:#}", e);
                return None;
            }
        }

        if !changed {
            return None;
        }

        log::info!("New week detected: week #{}", week.week_number);
        Some(NewWeekNotice {
            week_index: index,
            week_number: week.week_number,
        })
    }
}

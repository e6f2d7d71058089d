use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

use super::Schedule;
use crate::utils::date::start_of_day;

/// From this weekday and hour onwards, "now" already counts as the next day.
///
/// Weeks start on Saturday, so by default Friday evening from 18:00 belongs
/// to the week that begins the following morning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolloverRule {
    pub weekday: Weekday,
    pub hour: u32,
}

impl Default for RolloverRule {
    fn default() -> Self {
        Self {
            weekday: Weekday::Fri,
            hour: 18,
        }
    }
}

impl RolloverRule {
    pub fn applies_to(&self, reference: NaiveDateTime) -> bool {
        reference.weekday() == self.weekday && reference.hour() >= self.hour
    }
}

/// The calendar day `reference` counts as under `rule`.
pub fn effective_day(reference: NaiveDateTime, rule: &RolloverRule) -> NaiveDate {
    let day = start_of_day(reference).date();
    if rule.applies_to(reference) {
        day.succ_opt().unwrap_or(day)
    } else {
        day
    }
}

/// Index of the week `reference` falls in, with the default rollover rule.
///
/// `None` means the reference lies before the first week or at/after the end
/// of the last one. Callers show placeholder state in that case.
pub fn get_current_week_index(schedule: &Schedule, reference: NaiveDateTime) -> Option<usize> {
    resolve_week_index(schedule, reference, &RolloverRule::default())
}

pub fn resolve_week_index(
    schedule: &Schedule,
    reference: NaiveDateTime,
    rule: &RolloverRule,
) -> Option<usize> {
    let today = effective_day(reference, rule);
    let index = schedule.index_of_date(today);

    log::debug!(
        "Resolved {} (effective {}) to week index {:?}",
        reference,
        today,
        index
    );

    index
}

use chrono::NaiveDate;

use super::Schedule;
use crate::models::week::WeekRecord;

/// Person and date filters over a schedule. Both are optional and combine
/// with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    pub person: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ScheduleFilter {
    pub fn is_active(&self) -> bool {
        self.person.is_some() || self.date.is_some()
    }

    pub fn matches(&self, week: &WeekRecord) -> bool {
        if let Some(ref person) = self.person {
            if !week.involves(person) {
                return false;
            }
        }

        if let Some(date) = self.date {
            if !week.contains_date(date) {
                return false;
            }
        }

        true
    }

    /// Matching weeks paired with their index in the full schedule.
    pub fn apply<'a>(&self, schedule: &'a Schedule) -> Vec<(usize, &'a WeekRecord)> {
        schedule
            .iter()
            .enumerate()
            .filter(|(_, week)| self.matches(week))
            .collect()
    }
}

// Week module
// One row of the rotation schedule

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::models::holiday::HolidaySet;
use crate::models::rotation::ShiftAssignment;
use crate::utils::date::{add_days, format_date};

/// Days from a week's start to its end (Saturday to Thursday).
pub const WORK_SPAN_DAYS: i64 = 5;

/// Length of one rotation step.
pub const DAYS_PER_WEEK: i64 = 7;

/// A scheduled week. Produced by the schedule generator and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekRecord {
    pub week_number: u32,
    #[serde(serialize_with = "serialize_display_date")]
    pub week_start: NaiveDate,
    #[serde(serialize_with = "serialize_display_date")]
    pub week_end: NaiveDate,
    pub first: String,
    pub second: String,
    pub third: String,
}

impl WeekRecord {
    /// Build the record for `week_start`; `week_end` is derived.
    pub fn new(week_number: u32, week_start: NaiveDate, assignment: &ShiftAssignment) -> Self {
        Self {
            week_number,
            week_start,
            week_end: add_days(week_start, WORK_SPAN_DAYS),
            first: assignment.first.clone(),
            second: assignment.second.clone(),
            third: assignment.third.clone(),
        }
    }

    /// First day that belongs to the following week.
    pub fn next_week_start(&self) -> NaiveDate {
        add_days(self.week_start, DAYS_PER_WEEK)
    }

    /// Half-open containment: `[week_start, week_start + 7)`.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.week_start && date < self.next_week_start()
    }

    /// Date checked against the holiday list. Public holidays are observed
    /// on the Thursday that closes the week, so this is `week_end`.
    pub fn holiday_date(&self) -> NaiveDate {
        self.week_end
    }

    /// Whether this week's Thursday is a listed public holiday.
    pub fn is_holiday_week(&self, holidays: &HolidaySet) -> bool {
        holidays.contains(&format_date(self.holiday_date()))
    }

    pub fn involves(&self, person: &str) -> bool {
        self.first == person || self.second == person || self.third == person
    }

    /// `dd/mm/yyyy - dd/mm/yyyy`
    pub fn date_range_label(&self) -> String {
        format!("{} - {}", format_date(self.week_start), format_date(self.week_end))
    }
}

/// Free-function form of [`WeekRecord::contains_date`].
pub fn week_contains_date(week: &WeekRecord, date: NaiveDate) -> bool {
    week.contains_date(date)
}

fn serialize_display_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_date(*date))
}

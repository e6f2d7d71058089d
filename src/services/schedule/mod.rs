//! Schedule generation.
//!
//! A [`Schedule`] is an ordered, contiguous run of [`WeekRecord`]s. It is
//! either generated from an anchor date and a rotation cycle, or validated
//! when built from weeks supplied by someone else, so every `Schedule` in
//! circulation has non-overlapping weeks.

pub mod filter;
pub mod resolver;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::rotation::RotationCycle;
use crate::models::week::{WeekRecord, DAYS_PER_WEEK, WORK_SPAN_DAYS};
use crate::utils::date::{checked_add_days, format_date};

pub use filter::ScheduleFilter;
pub use resolver::{effective_day, get_current_week_index, RolloverRule};

/// Saturday 3 January 2026, the first day of week 1.
pub const START_DATE: (i32, u32, u32) = (2026, 1, 3);

/// Length of the published schedule.
pub const TOTAL_WEEKS: usize = 52;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("week at position {index} has number {found}, expected {expected}")]
    WeekNumber {
        index: usize,
        expected: u32,
        found: u32,
    },
    #[error("week {week_number} ends on {end}, expected five days after its start")]
    WeekSpan { week_number: u32, end: String },
    #[error("week {week_number} starts on {start}, expected {expected}")]
    NotContiguous {
        week_number: u32,
        start: String,
        expected: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    weeks: Vec<WeekRecord>,
}

impl Schedule {
    /// The published rotation: 52 weeks from 3 January 2026.
    pub fn standard() -> Self {
        let (y, m, d) = START_DATE;
        let anchor = NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);
        generate_schedule(anchor, TOTAL_WEEKS, &RotationCycle::default())
    }

    /// Accept weeks from an untrusted source.
    ///
    /// Checks 1-based sequential numbering, the Saturday-to-Thursday span and
    /// that each week starts exactly seven days after the previous one.
    pub fn from_weeks(weeks: Vec<WeekRecord>) -> Result<Self, ScheduleError> {
        for (index, week) in weeks.iter().enumerate() {
            let expected = u32::try_from(index + 1).unwrap_or(u32::MAX);
            if week.week_number != expected {
                return Err(ScheduleError::WeekNumber {
                    index,
                    expected,
                    found: week.week_number,
                });
            }

            let span_ok = checked_add_days(week.week_start, WORK_SPAN_DAYS) == Some(week.week_end)
                && checked_add_days(week.week_start, DAYS_PER_WEEK).is_some();
            if !span_ok {
                return Err(ScheduleError::WeekSpan {
                    week_number: week.week_number,
                    end: format_date(week.week_end),
                });
            }
        }

        for pair in weeks.windows(2) {
            let expected = checked_add_days(pair[0].week_start, DAYS_PER_WEEK);
            if expected != Some(pair[1].week_start) {
                return Err(ScheduleError::NotContiguous {
                    week_number: pair[1].week_number,
                    start: format_date(pair[1].week_start),
                    expected: expected.map(format_date).unwrap_or_default(),
                });
            }
        }

        Ok(Self { weeks })
    }

    pub fn weeks(&self) -> &[WeekRecord] {
        &self.weeks
    }

    pub fn get(&self, index: usize) -> Option<&WeekRecord> {
        self.weeks.get(index)
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeekRecord> {
        self.weeks.iter()
    }

    /// First scheduled day, if any.
    pub fn start(&self) -> Option<NaiveDate> {
        self.weeks.first().map(|w| w.week_start)
    }

    /// First day after the schedule horizon, if any.
    pub fn end(&self) -> Option<NaiveDate> {
        self.weeks.last().map(WeekRecord::next_week_start)
    }

    /// Index of the week containing `date`.
    pub fn index_of_date(&self, date: NaiveDate) -> Option<usize> {
        self.weeks.iter().position(|w| w.contains_date(date))
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a WeekRecord;
    type IntoIter = std::slice::Iter<'a, WeekRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.weeks.iter()
    }
}

/// Build `total_weeks` consecutive weeks starting at `anchor`.
///
/// Week `i` starts `7 * i` days after `anchor`, ends five days later and is
/// staffed by `cycle.assignment_for(i)`. Deterministic for fixed inputs.
///
/// Generation stops early if a week would run past the end of the calendar
/// or its number would not fit in a `u32`.
pub fn generate_schedule(anchor: NaiveDate, total_weeks: usize, cycle: &RotationCycle) -> Schedule {
    let weeks = (0..total_weeks)
        .map_while(|i| {
            let week_number = u32::try_from(i + 1).ok()?;
            let offset = i64::try_from(i).ok()?.checked_mul(DAYS_PER_WEEK)?;
            let week_start = checked_add_days(anchor, offset)?;
            checked_add_days(week_start, DAYS_PER_WEEK)?;
            Some(WeekRecord::new(week_number, week_start, cycle.assignment_for(i)))
        })
        .collect();

    Schedule { weeks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rotation::ShiftAssignment;
    use crate::utils::date::add_days;
    use pretty_assertions::assert_eq;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 3).unwrap()
    }

    #[test]
    fn test_standard_schedule_shape() {
        let schedule = Schedule::standard();
        assert_eq!(schedule.len(), TOTAL_WEEKS);
        assert_eq!(schedule.start(), Some(anchor()));
        assert_eq!(schedule.end(), Some(add_days(anchor(), 7 * 52)));
        let last = schedule.get(51).unwrap();
        assert_eq!(last.week_number, 52);
        assert_eq!(format_date(last.week_start), "26/12/2026");
    }

    #[test]
    fn test_every_week_starts_on_saturday() {
        for week in &Schedule::standard() {
            assert_eq!(week.week_start.format("%a").to_string(), "Sat");
            assert_eq!(week.week_end.format("%a").to_string(), "Thu");
        }
    }

    #[test]
    fn test_rotation_applied_by_index() {
        let cycle = RotationCycle::default();
        let schedule = generate_schedule(anchor(), 7, &cycle);
        for (i, week) in schedule.iter().enumerate() {
            let expected = cycle.assignment_for(i % 3);
            assert_eq!(
                (week.first.as_str(), week.second.as_str(), week.third.as_str()),
                (expected.first.as_str(), expected.second.as_str(), expected.third.as_str())
            );
        }
    }

    #[test]
    fn test_zero_weeks_is_empty() {
        let schedule = generate_schedule(anchor(), 0, &RotationCycle::default());
        assert!(schedule.is_empty());
        assert_eq!(schedule.start(), None);
        assert_eq!(schedule.end(), None);
    }

    #[test]
    fn test_generation_stops_at_end_of_calendar() {
        let near_end = add_days(NaiveDate::MAX, -20);
        let schedule = generate_schedule(near_end, 10, &RotationCycle::default());

        // Weeks starting at +0 and +7 fit; the one at +14 has no following week
        assert_eq!(schedule.len(), 2);
        assert_eq!(Schedule::from_weeks(schedule.weeks().to_vec()), Ok(schedule));
    }

    #[test]
    fn test_from_weeks_rejects_week_past_end_of_calendar() {
        let start = add_days(NaiveDate::MAX, -5);
        let week = WeekRecord {
            week_number: 1,
            week_start: start,
            week_end: NaiveDate::MAX,
            first: "Ahmed".into(),
            second: "Yousef".into(),
            third: "Omar".into(),
        };
        assert!(matches!(
            Schedule::from_weeks(vec![week]),
            Err(ScheduleError::WeekSpan { week_number: 1, .. })
        ));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let cycle = RotationCycle::default();
        assert_eq!(
            generate_schedule(anchor(), 52, &cycle),
            generate_schedule(anchor(), 52, &cycle)
        );
    }

    #[test]
    fn test_index_of_date() {
        let schedule = Schedule::standard();
        assert_eq!(schedule.index_of_date(anchor()), Some(0));
        assert_eq!(schedule.index_of_date(add_days(anchor(), 13)), Some(1));
        assert_eq!(schedule.index_of_date(add_days(anchor(), -1)), None);
    }

    #[test]
    fn test_from_weeks_accepts_generated() {
        let generated = Schedule::standard();
        let rebuilt = Schedule::from_weeks(generated.weeks().to_vec()).unwrap();
        assert_eq!(rebuilt, generated);
    }

    #[test]
    fn test_from_weeks_rejects_overlap() {
        let a = ShiftAssignment::new("A", "B", "C");
        let weeks = vec![
            WeekRecord::new(1, anchor(), &a),
            WeekRecord::new(2, add_days(anchor(), 3), &a),
        ];
        assert_eq!(
            Schedule::from_weeks(weeks),
            Err(ScheduleError::NotContiguous {
                week_number: 2,
                start: "06/01/2026".to_string(),
                expected: "10/01/2026".to_string(),
            })
        );
    }

    #[test]
    fn test_from_weeks_rejects_bad_numbering() {
        let a = ShiftAssignment::new("A", "B", "C");
        let weeks = vec![WeekRecord::new(2, anchor(), &a)];
        assert!(matches!(
            Schedule::from_weeks(weeks),
            Err(ScheduleError::WeekNumber { index: 0, expected: 1, found: 2 })
        ));
    }

    #[test]
    fn test_from_weeks_rejects_bad_span() {
        let a = ShiftAssignment::new("A", "B", "C");
        let mut week = WeekRecord::new(1, anchor(), &a);
        week.week_end = add_days(anchor(), 6);
        assert!(matches!(
            Schedule::from_weeks(vec![week]),
            Err(ScheduleError::WeekSpan { week_number: 1, .. })
        ));
    }
}

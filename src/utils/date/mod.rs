// Date utility functions
// Formatting, day arithmetic and strict parsing of user supplied dates

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Display format used everywhere a date is shown or compared as text.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Render a date as zero-padded `dd/mm/yyyy`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wardiya::utils::date::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
/// assert_eq!(format_date(date), "03/01/2026");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Offset a date by `days` (may be negative).
///
/// # Panics
///
/// Panics when the result falls outside chrono's calendar (roughly
/// +/-262,000 years). Callers with unbounded offsets use [`checked_add_days`].
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Offset a date by `days`, or `None` when the result is not representable.
pub fn checked_add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

/// Parse a `yyyy-mm-dd` string as produced by date pickers.
///
/// Returns `None` for empty input, anything not shaped like `yyyy-mm-dd`,
/// and dates that do not exist on the calendar (`2026-02-30` is rejected,
/// never rolled over into March).
pub fn parse_date_input(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let mut parts = text.split('-');
    let (year, month, day) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d), None) => (y, m, d),
        _ => return None,
    };

    if !all_digits(year, 4) || !all_digits(month, 2) || !all_digits(day, 2) {
        return None;
    }

    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    if date.year() != year || date.month() != month || date.day() != day {
        return None;
    }

    Some(date)
}

/// Parse a `dd/mm/yyyy` holiday entry. Only the exact zero-padded form that
/// [`format_date`] produces is accepted, since holidays match as text.
pub fn parse_display_date(text: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(text, DISPLAY_FORMAT).ok()?;
    (format_date(date) == text).then_some(date)
}

fn all_digits(part: &str, len: usize) -> bool {
    part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
}

/// Truncate an instant to midnight of the same day.
pub fn start_of_day(instant: NaiveDateTime) -> NaiveDateTime {
    instant.date().and_time(NaiveTime::MIN)
}

/// Source of "now". Core functions take the instant as a parameter; the
/// binary reads it through this trait so tests can pin it.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_pads_day_and_month() {
        assert_eq!(format_date(ymd(2026, 1, 3)), "03/01/2026");
        assert_eq!(format_date(ymd(2026, 12, 25)), "25/12/2026");
    }

    #[test]
    fn test_add_days_crosses_month_and_year() {
        assert_eq!(add_days(ymd(2026, 1, 30), 5), ymd(2026, 2, 4));
        assert_eq!(add_days(ymd(2026, 12, 29), 7), ymd(2027, 1, 5));
        assert_eq!(add_days(ymd(2026, 1, 3), -3), ymd(2025, 12, 31));
    }

    #[test]
    fn test_add_days_leaves_input_untouched() {
        let date = ymd(2026, 3, 1);
        let later = add_days(date, 10);
        assert_eq!(date, ymd(2026, 3, 1));
        assert_eq!(later, ymd(2026, 3, 11));
    }

    #[test]
    fn test_checked_add_days_at_calendar_limits() {
        assert_eq!(checked_add_days(ymd(2026, 1, 3), 7), Some(ymd(2026, 1, 10)));
        assert_eq!(checked_add_days(NaiveDate::MAX, 1), None);
        assert_eq!(checked_add_days(NaiveDate::MIN, -1), None);
        assert_eq!(checked_add_days(ymd(2026, 1, 3), i64::MAX), None);
    }

    #[test]
    fn test_parse_valid_iso_date() {
        assert_eq!(parse_date_input("2026-01-15"), Some(ymd(2026, 1, 15)));
        assert_eq!(parse_date_input("  2024-02-29 "), Some(ymd(2024, 2, 29)));
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "whitespace only")]
    #[test_case("2026-02-30"; "day past month end")]
    #[test_case("2025-02-29"; "non leap year")]
    #[test_case("2026-13-01"; "month out of range")]
    #[test_case("2026-00-10"; "month zero")]
    #[test_case("2026-1-5"; "missing padding")]
    #[test_case("15/01/2026"; "display format is not accepted")]
    #[test_case("2026-01-15-01"; "extra component")]
    #[test_case("2026-0a-15"; "non digit")]
    #[test_case("+2026-01-15"; "sign prefix")]
    fn test_parse_rejects(input: &str) {
        assert_eq!(parse_date_input(input), None);
    }

    #[test]
    fn test_parse_display_date() {
        assert_eq!(parse_display_date("08/01/2026"), Some(ymd(2026, 1, 8)));
        assert_eq!(parse_display_date("8/1/2026"), None);
        assert_eq!(parse_display_date("30/02/2026"), None);
        assert_eq!(parse_display_date("2026-01-08"), None);
    }

    #[test]
    fn test_start_of_day_truncates_time() {
        let instant = ymd(2026, 1, 9).and_hms_opt(19, 30, 15).unwrap();
        assert_eq!(start_of_day(instant), ymd(2026, 1, 9).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_fixed_clock_reports_pinned_instant() {
        let instant = ymd(2026, 1, 3).and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(FixedClock(instant).now(), instant);
    }

    #[test]
    fn test_mock_clock() {
        let instant = ymd(2026, 6, 1).and_hms_opt(12, 0, 0).unwrap();
        let mut clock = MockClock::new();
        clock.expect_now().times(1).return_const(instant);
        assert_eq!(clock.now(), instant);
    }
}

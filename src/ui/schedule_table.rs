use std::fmt::Write;

use super::HOLIDAY_NOTE_AR;
use crate::models::holiday::HolidaySet;
use crate::models::week::WeekRecord;
use crate::utils::date::format_date;

fn holiday_note(week: &WeekRecord, holidays: &HolidaySet, regular: &'static str) -> String {
    if week.is_holiday_week(holidays) {
        format!("🎉 {}", HOLIDAY_NOTE_AR)
    } else {
        regular.to_string()
    }
}

/// Wide table, one row per week. The current week's row is marked with `>`.
pub fn render_schedule_table(
    rows: &[(usize, &WeekRecord)],
    current: Option<usize>,
    holidays: &HolidaySet,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:<9}{:<13}{:<13}{:<8}{:<8}{:<8}{}",
        "Week #", "Start (Sat)", "End (Thu)", "First", "Second", "Third", "Notes"
    );

    for (index, week) in rows {
        let marker = if Some(*index) == current { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {:<9}{:<13}{:<13}{:<8}{:<8}{:<8}{}",
            marker,
            format!("Week {}", week.week_number),
            format_date(week.week_start),
            format_date(week.week_end),
            week.first,
            week.second,
            week.third,
            holiday_note(week, holidays, "Regular OFF"),
        );
    }

    if rows.is_empty() {
        let _ = writeln!(out, "  (no matching weeks)");
    }

    out
}

/// Narrow card list for small terminals.
pub fn render_schedule_cards(
    rows: &[(usize, &WeekRecord)],
    current: Option<usize>,
    holidays: &HolidaySet,
) -> String {
    let mut out = String::new();

    for (index, week) in rows {
        let marker = if Some(*index) == current { " <- current" } else { "" };
        let _ = writeln!(out, "[{}] {}{}", week.week_number, week.date_range_label(), marker);
        let _ = writeln!(out, "  1st {}", week.first);
        let _ = writeln!(out, "  2nd {}", week.second);
        let _ = writeln!(out, "  3rd {}", week.third);
        let _ = writeln!(out, "  {}", holiday_note(week, holidays, "Regular OFF Day"));
    }

    if rows.is_empty() {
        let _ = writeln!(out, "(no matching weeks)");
    }

    out
}

//! Plain-text rendering of the dashboard and the schedule.
//!
//! Everything here returns `String`s so the binary decides where output goes
//! and tests can compare it directly.

pub mod dashboard;
pub mod schedule_table;

/// Arabic note: a public holiday is expected, moved to Thursday.
pub const HOLIDAY_NOTE_AR: &str = "متوقع إجازة رسمية مرحلة للخميس";

pub const HOLIDAY_BADGE: &str = "🎉 Holiday!";
pub const OFF_BADGE: &str = "🌴 OFF";
pub const NOT_AVAILABLE: &str = "Not Available";

pub use dashboard::render_dashboard;
pub use schedule_table::{render_schedule_cards, render_schedule_table};

// Test fixtures - reusable test data
// Provides consistent instants across the integration tests

use chrono::{NaiveDate, NaiveDateTime};

/// Sample instants around the schedule horizon
pub mod instants {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    /// Friday 2 Jan 2026 at noon, the day before week 1
    pub fn day_before_start() -> NaiveDateTime {
        at(2026, 1, 2, 12, 0)
    }

    /// Saturday 3 Jan 2026 at 09:00, first morning of week 1
    pub fn first_morning() -> NaiveDateTime {
        at(2026, 1, 3, 9, 0)
    }

    /// Friday 9 Jan 2026 at 19:00, after the rollover into week 2
    pub fn first_friday_evening() -> NaiveDateTime {
        at(2026, 1, 9, 19, 0)
    }

    /// Saturday 2 Jan 2027, 52 weeks after the anchor
    pub fn past_horizon() -> NaiveDateTime {
        at(2027, 1, 2, 9, 0)
    }
}

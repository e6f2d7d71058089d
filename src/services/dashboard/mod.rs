//! Last / current / next week cards.

use chrono::NaiveDate;

use crate::models::holiday::HolidaySet;
use crate::models::week::WeekRecord;
use crate::services::schedule::Schedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    Last,
    Current,
    Next,
}

impl CardSlot {
    pub fn label(&self) -> &'static str {
        match self {
            CardSlot::Last => "Last Week",
            CardSlot::Current => "Current Week",
            CardSlot::Next => "Next Week",
        }
    }
}

/// One dashboard card. `week` is `None` when the slot points outside the
/// schedule and the card shows "Not Available".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCard<'a> {
    pub slot: CardSlot,
    pub index: Option<usize>,
    pub week: Option<&'a WeekRecord>,
    pub is_current: bool,
    pub is_holiday: bool,
}

/// Pick the three weeks to show.
///
/// Before the schedule starts the first three weeks are shown, after it ends
/// the last three. Otherwise the window is centred on `current`. Only the
/// card holding the resolved current week is flagged as current.
pub fn dashboard_cards<'a>(
    schedule: &'a Schedule,
    current: Option<usize>,
    today: NaiveDate,
    holidays: &HolidaySet,
) -> [DashboardCard<'a>; 3] {
    let len = schedule.len() as i64;
    let before_start = schedule.start().is_some_and(|start| today < start);
    let after_end = current.is_none() && schedule.end().is_some_and(|end| today >= end);

    let centre = if before_start {
        1
    } else if after_end {
        len - 2
    } else {
        current.map_or(-1, |i| i as i64)
    };

    let slots = [CardSlot::Last, CardSlot::Current, CardSlot::Next];
    slots.map(|slot| {
        let offset = match slot {
            CardSlot::Last => -1,
            CardSlot::Current => 0,
            CardSlot::Next => 1,
        };
        let raw = centre + offset;
        let index = (0..len).contains(&raw).then_some(raw as usize);
        let week = index.and_then(|i| schedule.get(i));

        DashboardCard {
            slot,
            index,
            week,
            is_current: index.is_some() && index == current,
            is_holiday: week.is_some_and(|w| w.is_holiday_week(holidays)),
        }
    })
}

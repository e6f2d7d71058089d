use std::fmt::Write;

use super::{HOLIDAY_BADGE, HOLIDAY_NOTE_AR, NOT_AVAILABLE, OFF_BADGE};
use crate::services::dashboard::DashboardCard;

const CARD_RULE: &str = "----------------------------------------";

pub fn render_dashboard(cards: &[DashboardCard<'_>]) -> String {
    let mut out = String::new();
    for card in cards {
        render_card(&mut out, card);
    }
    out
}

fn render_card(out: &mut String, card: &DashboardCard<'_>) {
    let marker = if card.is_current { " *" } else { "" };
    let _ = writeln!(out, "{}", CARD_RULE);
    let _ = writeln!(out, "{}{}", card.slot.label(), marker);

    let Some(week) = card.week else {
        let _ = writeln!(out, "  {}", NOT_AVAILABLE);
        return;
    };

    let _ = writeln!(out, "  {}", week.date_range_label());
    let _ = writeln!(out, "  {:<14}{}", "First Shift", week.first);
    let _ = writeln!(out, "  {:<14}{}", "Second Shift", week.second);
    let _ = writeln!(out, "  {:<14}{}", "Third Shift", week.third);

    if card.is_holiday {
        let _ = writeln!(out, "  {}  {}", OFF_BADGE, HOLIDAY_BADGE);
        let _ = writeln!(out, "  ℹ️ {}", HOLIDAY_NOTE_AR);
    } else {
        let _ = writeln!(out, "  {}", OFF_BADGE);
        let _ = writeln!(out, "  📋 Regular work week");
    }
}

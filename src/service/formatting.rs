use chrono::{Datelike, NaiveDate};

use crate::models::entry::ScheduleEntry;
use crate::service::view::ScheduleView;

const WEEKDAYS: [&str; 7] = [
    "понедельник",
    "вторник",
    "среда",
    "четверг",
    "пятница",
    "суббота",
    "воскресенье",
];

// Genitive, as used after a day number.
const MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// `вторник, 13 января`
pub fn format_day_heading(day: NaiveDate) -> String {
    let weekday = WEEKDAYS[day.weekday().num_days_from_monday() as usize];
    let month = MONTHS[day.month0() as usize];
    format!("{}, {} {}", weekday, day.day(), month)
}

pub fn format_time_range(entry: &ScheduleEntry) -> String {
    format!("{} — {}", entry.start_time, entry.end_time)
}

pub fn session_badge(entry: &ScheduleEntry) -> String {
    if entry.session_type.is_empty() {
        entry.kind().label().to_string()
    } else {
        entry.session_type.clone()
    }
}

fn render_card(title: &str, entry: &ScheduleEntry) -> String {
    format!(
        "{}\n  {}\n  {}\n  {}\n  {}\n",
        title,
        entry.subject,
        format_time_range(entry),
        entry.teacher,
        entry.room
    )
}

fn render_row(entry: &ScheduleEntry) -> String {
    let mut row = format!(
        "  {}  {} [{}]\n      {} · {}",
        format_time_range(entry),
        entry.subject,
        session_badge(entry),
        entry.teacher,
        entry.room
    );
    if !entry.group.is_empty() {
        row.push_str(&format!(" · {}", entry.group));
    }
    row.push('\n');
    row
}

/// Current/next cards only; empty when neither exists.
pub fn render_highlights(view: &ScheduleView<'_>) -> String {
    let mut out = String::new();
    if let Some(current) = view.highlights.current {
        out.push_str(&render_card("● Сейчас идёт", current));
    }
    if let Some(next) = view.highlights.next {
        out.push_str(&render_card("Следующее занятие", next));
    }
    out
}

pub fn render_view(view: &ScheduleView<'_>) -> String {
    let mut out = String::new();
    if let Some(err) = view.degraded {
        out.push_str(&format!(
            "! Живые данные недоступны ({}), показано примерное расписание\n\n",
            err
        ));
    }

    let highlights = render_highlights(view);
    if !highlights.is_empty() {
        out.push_str(&highlights);
        out.push('\n');
    }

    if view.days.is_empty() {
        out.push_str("Занятий нет\n");
        return out;
    }

    for (day, sessions) in &view.days {
        out.push_str(&format!("── {} ──\n", format_day_heading(*day)));
        for entry in sessions {
            out.push_str(&render_row(entry));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_heading_is_russian() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
        assert_eq!(format_day_heading(day), "вторник, 13 января");
        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(format_day_heading(day), "воскресенье, 1 марта");
    }

    #[test]
    fn badge_falls_back_to_kind_label() {
        let entry = ScheduleEntry::default();
        assert_eq!(session_badge(&entry), "Занятие");
        let entry = ScheduleEntry {
            session_type: "Онлайн".to_string(),
            ..Default::default()
        };
        assert_eq!(session_badge(&entry), "Онлайн");
    }

    #[test]
    fn time_range_uses_em_dash() {
        let entry = ScheduleEntry {
            start_time: "09:00".to_string(),
            end_time: "10:30".to_string(),
            ..Default::default()
        };
        assert_eq!(format_time_range(&entry), "09:00 — 10:30");
    }
}

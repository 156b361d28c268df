use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::models::entry::ScheduleEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrentNext<'a> {
    pub current: Option<&'a ScheduleEntry>,
    pub next: Option<&'a ScheduleEntry>,
}

/// Wall-clock time in the zone the schedule is written in.
pub fn local_now(tz: Tz) -> NaiveDateTime {
    Utc::now().with_timezone(&tz).naive_local()
}

/// Looks only at sessions dated `now`'s day, stably sorted by start time.
/// `current` contains now (both bounds inclusive); `next` starts strictly after it.
/// Among overlapping sessions the earliest start wins.
pub fn resolve_current_next<'a>(entries: &[&'a ScheduleEntry], now: NaiveDateTime) -> CurrentNext<'a> {
    let today = now.date();
    let now_time = now.format("%H:%M").to_string();

    let mut todays: Vec<&'a ScheduleEntry> = entries
        .iter()
        .copied()
        .filter(|entry| entry.day() == Some(today))
        .collect();
    todays.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    let current = todays
        .iter()
        .copied()
        .find(|entry| entry.start_time <= now_time && now_time <= entry.end_time);
    let next = todays
        .iter()
        .copied()
        .find(|entry| entry.start_time > now_time);

    CurrentNext { current, next }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn session(start: &str, end: &str, subject: &str) -> ScheduleEntry {
        ScheduleEntry {
            date: "2026-01-13".to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            subject: subject.to_string(),
            ..Default::default()
        }
    }

    fn at(date: (i32, u32, u32), hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn day() -> Vec<ScheduleEntry> {
        vec![session("09:00", "10:30", "first"), session("10:45", "12:15", "second")]
    }

    #[test]
    fn during_first_session() {
        let entries = day();
        let refs: Vec<&ScheduleEntry> = entries.iter().collect();
        let result = resolve_current_next(&refs, at((2026, 1, 13), 9, 30));
        assert_eq!(result.current.map(|e| e.subject.as_str()), Some("first"));
        assert_eq!(result.next.map(|e| e.subject.as_str()), Some("second"));
    }

    #[test]
    fn end_bound_is_inclusive() {
        let entries = day();
        let refs: Vec<&ScheduleEntry> = entries.iter().collect();
        let result = resolve_current_next(&refs, at((2026, 1, 13), 10, 30));
        assert_eq!(result.current.map(|e| e.subject.as_str()), Some("first"));
        assert_eq!(result.next.map(|e| e.subject.as_str()), Some("second"));
    }

    #[test]
    fn in_the_gap_between_sessions() {
        let entries = day();
        let refs: Vec<&ScheduleEntry> = entries.iter().collect();
        let result = resolve_current_next(&refs, at((2026, 1, 13), 10, 31));
        assert_eq!(result.current, None);
        assert_eq!(result.next.map(|e| e.subject.as_str()), Some("second"));
    }

    #[test]
    fn after_last_session() {
        let entries = day();
        let refs: Vec<&ScheduleEntry> = entries.iter().collect();
        let result = resolve_current_next(&refs, at((2026, 1, 13), 13, 0));
        assert_eq!(result, CurrentNext::default());
    }

    #[test]
    fn other_days_are_ignored() {
        let entries = day();
        let refs: Vec<&ScheduleEntry> = entries.iter().collect();
        let result = resolve_current_next(&refs, at((2026, 1, 12), 9, 30));
        assert_eq!(result, CurrentNext::default());
    }

    #[test]
    fn unsorted_input_resolves_nearest_upcoming() {
        let entries = vec![session("14:15", "15:45", "late"), session("10:45", "12:15", "early")];
        let refs: Vec<&ScheduleEntry> = entries.iter().collect();
        let result = resolve_current_next(&refs, at((2026, 1, 13), 8, 0));
        assert_eq!(result.current, None);
        assert_eq!(result.next.map(|e| e.subject.as_str()), Some("early"));
    }

    #[test]
    fn overlapping_sessions_prefer_earliest_start() {
        let entries = vec![session("09:30", "11:00", "later"), session("09:00", "10:30", "earlier")];
        let refs: Vec<&ScheduleEntry> = entries.iter().collect();
        let result = resolve_current_next(&refs, at((2026, 1, 13), 10, 0));
        assert_eq!(result.current.map(|e| e.subject.as_str()), Some("earlier"));
    }

    #[test]
    fn midnight_has_everything_ahead() {
        let entries = day();
        let refs: Vec<&ScheduleEntry> = entries.iter().collect();
        let result = resolve_current_next(&refs, at((2026, 1, 13), 0, 0));
        assert_eq!(result.current, None);
        assert_eq!(result.next.map(|e| e.subject.as_str()), Some("first"));
    }
}

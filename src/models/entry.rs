use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One scheduled class occurrence as delivered by the sheet endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ScheduleEntry {
    #[serde(default)]
    pub date: String,
    #[serde(rename = "time_start", default)]
    pub start_time: String,
    #[serde(rename = "time_end", default)]
    pub end_time: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub teacher: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub group: String,
    #[serde(rename = "type", default)]
    pub session_type: String,
}

impl ScheduleEntry {
    /// Calendar day of the entry, `None` when the date is not `YYYY-MM-DD`.
    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    pub fn kind(&self) -> SessionKind {
        SessionKind::classify(&self.session_type)
    }

    /// Trims every field and re-pads `H:MM` times so string order matches clock order.
    pub fn normalized(self) -> Self {
        Self {
            date: self.date.trim().to_string(),
            start_time: pad_time(&self.start_time),
            end_time: pad_time(&self.end_time),
            subject: self.subject.trim().to_string(),
            teacher: self.teacher.trim().to_string(),
            room: self.room.trim().to_string(),
            group: self.group.trim().to_string(),
            session_type: self.session_type.trim().to_string(),
        }
    }
}

fn pad_time(raw: &str) -> String {
    let trimmed = raw.trim();
    match NaiveTime::parse_from_str(trimmed, "%H:%M") {
        Ok(time) => time.format("%H:%M").to_string(),
        Err(_) => trimmed.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Lecture,
    Seminar,
    Lab,
    Online,
    Other,
}

impl SessionKind {
    pub fn classify(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        match lower.as_str() {
            "лекция" | "lecture" => SessionKind::Lecture,
            "практика" | "семинар" | "seminar" | "practice" => SessionKind::Seminar,
            "лабораторная" | "lab" | "laboratory" => SessionKind::Lab,
            "онлайн" | "online" => SessionKind::Online,
            _ => SessionKind::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionKind::Lecture => "Лекция",
            SessionKind::Seminar => "Практика",
            SessionKind::Lab => "Лабораторная",
            SessionKind::Online => "Онлайн",
            SessionKind::Other => "Занятие",
        }
    }
}

use super::entry::ScheduleEntry;

// Shown whenever live data cannot be fetched.
const FALLBACK_ROWS: [(&str, &str, &str, &str, &str, &str, &str, &str); 6] = [
    ("2026-01-13", "09:00", "10:30", "Математический анализ", "Иванов И.И.", "Ауд. 201", "МТ-101", "Лекция"),
    ("2026-01-13", "10:45", "12:15", "Линейная алгебра", "Петрова А.С.", "Ауд. 305", "МТ-101", "Практика"),
    ("2026-01-13", "12:30", "14:00", "Программирование", "Сидоров В.П.", "Комп. класс 12", "ИТ-102", "Лабораторная"),
    ("2026-01-13", "14:15", "15:45", "Английский язык", "Смирнова Е.А.", "Ауд. 108", "МТ-101", "Практика"),
    ("2026-01-14", "09:00", "10:30", "Физика", "Кузнецов Д.М.", "Ауд. 412", "ИТ-102", "Лекция"),
    ("2026-01-14", "10:45", "12:15", "Базы данных", "Николаева О.В.", "Комп. класс 15", "ИТ-102", "Практика"),
];

pub fn fallback_schedule() -> Vec<ScheduleEntry> {
    FALLBACK_ROWS
        .iter()
        .map(
            |(date, start, end, subject, teacher, room, group, session_type)| ScheduleEntry {
                date: date.to_string(),
                start_time: start.to_string(),
                end_time: end.to_string(),
                subject: subject.to_string(),
                teacher: teacher.to_string(),
                room: room.to_string(),
                group: group.to_string(),
                session_type: session_type.to_string(),
            },
        )
        .collect()
}

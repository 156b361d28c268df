use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use tokio::time::sleep;

use crate::service::formatting::format_time_range;
use crate::service::resolver::local_now;
use crate::service::view::build_view;
use crate::tasks::refresh::ScheduleStore;

pub async fn run_watch_loop(
    store: Arc<ScheduleStore>,
    tz: Tz,
    interval: Duration,
    reload_every: Duration,
) {
    let mut last_reload = Instant::now();
    loop {
        if last_reload.elapsed() >= reload_every {
            store.reload().await;
            last_reload = Instant::now();
        }
        println!("{}", watch_tick(&store, local_now(tz)).await);
        sleep(interval).await;
    }
}

/// One status line for `now`, built from the last applied state.
pub async fn watch_tick(store: &ScheduleStore, now: NaiveDateTime) -> String {
    if store.is_loading().await {
        return format!("[{}] Загрузка…", now.format("%H:%M"));
    }
    let state = store.snapshot().await;
    let view = build_view(&state, now);

    let current = match view.highlights.current {
        Some(entry) => format!("Сейчас: {} ({})", entry.subject, format_time_range(entry)),
        None => "Сейчас занятий нет".to_string(),
    };
    let mut line = format!("[{}] {}", now.format("%H:%M"), current);
    if let Some(entry) = view.highlights.next {
        line.push_str(&format!(
            " | Далее: {} ({}, {})",
            entry.subject,
            format_time_range(entry),
            entry.room
        ));
    }
    if view.degraded.is_some() {
        line.push_str(" | резервные данные");
    }
    line
}

use std::sync::Arc;

use crate::clients::schedule_client::{LoadError, ScheduleSource};
use crate::models::entry::ScheduleEntry;
use crate::models::fallback::fallback_schedule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Live,
    Degraded(LoadError),
}

impl LoadStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, LoadStatus::Degraded(_))
    }
}

#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub sheet: String,
    pub entries: Arc<Vec<ScheduleEntry>>,
    pub status: LoadStatus,
}

pub struct ScheduleLoader {
    source: Arc<dyn ScheduleSource>,
}

impl ScheduleLoader {
    pub fn new(source: Arc<dyn ScheduleSource>) -> Self {
        Self { source }
    }

    /// Never fails: any fetch error swaps in the fallback dataset and marks the outcome degraded.
    pub async fn load(&self, sheet: &str) -> LoadOutcome {
        match self.source.fetch(sheet).await {
            Ok(raw) => {
                let entries = normalize_entries(raw);
                log::info!("Loaded {} sessions from sheet '{}'", entries.len(), sheet);
                LoadOutcome {
                    sheet: sheet.to_string(),
                    entries: Arc::new(entries),
                    status: LoadStatus::Live,
                }
            }
            Err(err) => {
                log::warn!(
                    "Live schedule for sheet '{}' unavailable, using fallback: {}",
                    sheet,
                    err
                );
                LoadOutcome {
                    sheet: sheet.to_string(),
                    entries: Arc::new(fallback_schedule()),
                    status: LoadStatus::Degraded(err),
                }
            }
        }
    }
}

pub fn normalize_entries(raw: Vec<ScheduleEntry>) -> Vec<ScheduleEntry> {
    raw.into_iter()
        .map(ScheduleEntry::normalized)
        .filter(|entry| !entry.date.is_empty() && !entry.start_time.is_empty())
        .collect()
}

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::clients::schedule_client::LoadError;
use crate::models::entry::ScheduleEntry;
use crate::service::grouping::{derive_groups, filter_by_group, group_by_date, DayBuckets, GroupFilter};
use crate::service::loader::{LoadOutcome, LoadStatus};
use crate::service::resolver::{resolve_current_next, CurrentNext};

/// Everything the front end selects or loads. Replaced, never mutated in place.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub sheet: String,
    pub group: GroupFilter,
    pub entries: Arc<Vec<ScheduleEntry>>,
    pub status: LoadStatus,
}

impl ViewState {
    pub fn empty(sheet: &str) -> Self {
        Self {
            sheet: sheet.to_string(),
            group: GroupFilter::All,
            entries: Arc::new(Vec::new()),
            status: LoadStatus::Live,
        }
    }

    pub fn with_group(self, group: GroupFilter) -> Self {
        Self { group, ..self }
    }

    /// Swaps in a freshly loaded list; the group selection survives reloads.
    pub fn with_outcome(self, outcome: LoadOutcome) -> Self {
        Self {
            sheet: outcome.sheet,
            entries: outcome.entries,
            status: outcome.status,
            ..self
        }
    }
}

#[derive(Debug)]
pub struct ScheduleView<'a> {
    pub groups: Vec<GroupFilter>,
    pub days: DayBuckets<'a>,
    pub highlights: CurrentNext<'a>,
    pub degraded: Option<&'a LoadError>,
}

pub fn build_view(state: &ViewState, now: NaiveDateTime) -> ScheduleView<'_> {
    let filtered = filter_by_group(&state.entries, &state.group);
    let degraded = match &state.status {
        LoadStatus::Live => None,
        LoadStatus::Degraded(err) => Some(err),
    };
    ScheduleView {
        groups: derive_groups(&state.entries),
        days: group_by_date(&filtered),
        highlights: resolve_current_next(&filtered, now),
        degraded,
    }
}

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::models::entry::ScheduleEntry;

pub const ALL_GROUPS: &str = "all";

/// Group selection; `All` is the synthetic option that disables filtering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupFilter {
    #[default]
    All,
    Only(String),
}

impl GroupFilter {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL_GROUPS {
            GroupFilter::All
        } else {
            GroupFilter::Only(trimmed.to_string())
        }
    }

    pub fn matches(&self, entry: &ScheduleEntry) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Only(group) => entry.group == *group,
        }
    }
}

impl fmt::Display for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupFilter::All => write!(f, "{}", ALL_GROUPS),
            GroupFilter::Only(group) => write!(f, "{}", group),
        }
    }
}

pub type DayBuckets<'a> = BTreeMap<NaiveDate, Vec<&'a ScheduleEntry>>;

/// `All` first, then every distinct non-empty group in first-seen order.
pub fn derive_groups(entries: &[ScheduleEntry]) -> Vec<GroupFilter> {
    let mut groups = vec![GroupFilter::All];
    for entry in entries {
        if entry.group.trim().is_empty() {
            continue;
        }
        let candidate = GroupFilter::Only(entry.group.clone());
        if !groups.contains(&candidate) {
            groups.push(candidate);
        }
    }
    groups
}

pub fn filter_by_group<'a>(entries: &'a [ScheduleEntry], group: &GroupFilter) -> Vec<&'a ScheduleEntry> {
    entries.iter().filter(|entry| group.matches(entry)).collect()
}

/// Buckets iterate in ascending date order; each bucket is stably sorted by start time.
/// Entries whose date does not parse land in no bucket.
pub fn group_by_date<'a>(entries: &[&'a ScheduleEntry]) -> DayBuckets<'a> {
    let mut buckets: DayBuckets<'a> = BTreeMap::new();
    for entry in entries {
        match entry.day() {
            Some(day) => buckets.entry(day).or_default().push(*entry),
            None => log::debug!("Skipping session with unparseable date '{}'", entry.date),
        }
    }
    for sessions in buckets.values_mut() {
        sessions.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    }
    buckets
}

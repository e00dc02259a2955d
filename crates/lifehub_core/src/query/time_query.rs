//! Time-entry projection: status visibility and duration/start sorting.

use crate::model::time_entry::{TimeEntry, TimerStatus};

/// Which timer states the time-tracking view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEntryVisibility {
    All,
    Running,
    Completed,
}

/// Field the time-tracking view sorts by. Both orders are newest/largest
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeEntrySortKey {
    /// Most recent start first.
    StartTime,
    /// Longest entry first.
    Duration,
}

/// Filter criteria for the time-tracking view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntryQuery {
    pub visibility: TimeEntryVisibility,
    pub sort_by: TimeEntrySortKey,
}

impl Default for TimeEntryQuery {
    fn default() -> Self {
        Self {
            visibility: TimeEntryVisibility::All,
            sort_by: TimeEntrySortKey::StartTime,
        }
    }
}

/// Projects the filtered, sorted view of `entries`.
pub fn project_time_entries(entries: &[TimeEntry], query: &TimeEntryQuery) -> Vec<TimeEntry> {
    let mut matched: Vec<TimeEntry> = entries
        .iter()
        .filter(|entry| match query.visibility {
            TimeEntryVisibility::All => true,
            TimeEntryVisibility::Running => entry.status == TimerStatus::Running,
            TimeEntryVisibility::Completed => entry.status == TimerStatus::Completed,
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| match query.sort_by {
        TimeEntrySortKey::StartTime => b.start_time.cmp(&a.start_time),
        TimeEntrySortKey::Duration => b.duration_minutes.cmp(&a.duration_minutes),
    });

    matched
}

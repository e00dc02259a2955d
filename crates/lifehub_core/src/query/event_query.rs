//! Calendar event projection: text search, date window, start ordering.

use crate::model::event::CalendarEvent;
use crate::model::Timestamp;
use crate::query::{contains_ci, SortOrder};

/// Filter criteria for agenda-style event views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    /// Substring matched against the title only.
    pub search: String,
    /// Inclusive window on `start`; `None` matches all dates.
    pub window: Option<(Timestamp, Timestamp)>,
    pub order: SortOrder,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            window: None,
            order: SortOrder::Asc,
        }
    }
}

/// Projects the filtered view of `events`, ordered by start time.
pub fn project_events(events: &[CalendarEvent], query: &EventQuery) -> Vec<CalendarEvent> {
    let mut matched: Vec<CalendarEvent> = events
        .iter()
        .filter(|event| matches(event, query))
        .cloned()
        .collect();

    matched.sort_by(|a, b| {
        let ordering = a.start.cmp(&b.start);
        match query.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    matched
}

fn matches(event: &CalendarEvent, query: &EventQuery) -> bool {
    if !query.search.is_empty() && !contains_ci(&event.title, &query.search) {
        return false;
    }
    if let Some((from, to)) = query.window {
        if event.start < from || event.start > to {
            return false;
        }
    }
    true
}

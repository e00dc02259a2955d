//! Calendar event entity, draft and patch types.
//!
//! # Invariants
//! - A timed event ends strictly after it starts.
//! - An all-day event's `end` is normalized to 23:59:59 of the start date,
//!   at creation and again whenever a patch touches `start` or `all_day`.

use crate::model::fields::normalize_list;
use crate::model::{Entity, EntityId, Timestamp, ValidationError};
use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scheduled calendar entry, either timed or all-day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub start: Timestamp,
    pub end: Timestamp,
    pub all_day: bool,
    pub location: Option<String>,
    pub attendees: Vec<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
}

/// Validated form payload for scheduling an event. Attendee and tag lists
/// arrive already split from comma-separated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub start: Timestamp,
    pub end: Timestamp,
    pub all_day: bool,
    pub location: Option<String>,
    pub attendees: Vec<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
}

impl EventDraft {
    /// Rejects drafts an event form must not submit. The end-before-start
    /// check is skipped for all-day events, whose end is derived.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if !self.all_day && self.end <= self.start {
            return Err(ValidationError::EndBeforeStart);
        }
        Ok(())
    }
}

/// Partial event update. Double-`Option` fields are clearable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
    pub all_day: Option<bool>,
    pub location: Option<Option<String>>,
    pub attendees: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub category: Option<Option<String>>,
}

impl CalendarEvent {
    /// Builds an event from a validated draft with a fresh id, normalizing
    /// the all-day end time.
    pub fn from_draft(draft: EventDraft) -> Result<Self, ValidationError> {
        draft.validate()?;
        let end = if draft.all_day {
            end_of_day(draft.start)
        } else {
            draft.end
        };
        Ok(Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            start: draft.start,
            end,
            all_day: draft.all_day,
            location: draft.location,
            attendees: normalize_list(&draft.attendees),
            tags: normalize_list(&draft.tags),
            category: draft.category,
        })
    }
}

impl Entity for CalendarEvent {
    type Patch = EventPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn apply_patch(&mut self, patch: EventPatch, _at: Timestamp) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(start) = patch.start {
            self.start = start;
        }
        if let Some(end) = patch.end {
            self.end = end;
        }
        if let Some(all_day) = patch.all_day {
            self.all_day = all_day;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(attendees) = patch.attendees {
            self.attendees = normalize_list(&attendees);
        }
        if let Some(tags) = patch.tags {
            self.tags = normalize_list(&tags);
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if self.all_day {
            self.end = end_of_day(self.start);
        }
    }
}

/// 23:59:59 on the same UTC calendar day as `at`.
pub fn end_of_day(at: Timestamp) -> Timestamp {
    let date = at.date_naive();
    let end = date.and_hms_opt(23, 59, 59).expect("23:59:59 is a valid time");
    chrono::Utc.from_utc_datetime(&end)
}

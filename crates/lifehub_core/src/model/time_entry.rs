//! Time-tracking entry entity, draft and patch types.
//!
//! # Invariants
//! - `duration_minutes` is never negative.
//! - A running entry has no `end_time`; a completed entry keeps the one it
//!   was stopped with.

use crate::model::fields::normalize_list;
use crate::model::{Entity, EntityId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timer lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
    Running,
    Completed,
}

/// One tracked stretch of work against a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: EntityId,
    /// Reference to a task; the entry never owns it and tolerates the task
    /// being deleted later.
    pub task_id: EntityId,
    /// Snapshot of the task title at entry creation.
    pub task_title: String,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    /// Whole minutes, floored from elapsed time at stop.
    pub duration_minutes: i64,
    pub status: TimerStatus,
    pub category: String,
    pub tags: Vec<String>,
}

/// Validated form payload for starting a time entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntryDraft {
    pub task_id: EntityId,
    pub task_title: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl TimeEntryDraft {
    /// Rejects drafts a time-entry form must not submit.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.task_title.trim().is_empty() {
            return Err(ValidationError::MissingField("task_title"));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category"));
        }
        Ok(())
    }
}

/// Partial time-entry update. `end_time` is clearable for restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntryPatch {
    pub task_title: Option<String>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Option<Timestamp>>,
    pub duration_minutes: Option<i64>,
    pub status: Option<TimerStatus>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl TimeEntry {
    /// Builds a running entry from a validated draft with a fresh id.
    pub fn from_draft(draft: TimeEntryDraft, at: Timestamp) -> Result<Self, ValidationError> {
        draft.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            task_id: draft.task_id,
            task_title: draft.task_title,
            start_time: at,
            end_time: None,
            duration_minutes: 0,
            status: TimerStatus::Running,
            category: draft.category,
            tags: normalize_list(&draft.tags),
        })
    }
}

impl Entity for TimeEntry {
    type Patch = TimeEntryPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn apply_patch(&mut self, patch: TimeEntryPatch, _at: Timestamp) {
        if let Some(task_title) = patch.task_title {
            self.task_title = task_title;
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            self.end_time = end_time;
        }
        if let Some(duration_minutes) = patch.duration_minutes {
            self.duration_minutes = duration_minutes.max(0);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(tags) = patch.tags {
            self.tags = normalize_list(&tags);
        }
    }
}

//! Goal and milestone entities, drafts and patches.
//!
//! # Invariants
//! - `progress` stays within 0..=100.
//! - After `GoalService::update_milestone`, `progress` equals
//!   `round(100 * completed / total)` over the goal's milestones.
//! - `status` is never cross-validated against `progress`; any transition is
//!   accepted from any state.

use crate::model::fields::normalize_list;
use crate::model::{Entity, EntityId, Priority, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Life area a goal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    Personal,
    Professional,
    Health,
    Learning,
    Financial,
}

/// Goal lifecycle state. Transitions are informational, not gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Completed,
    Paused,
}

/// One trackable checkpoint toward a goal's completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: EntityId,
    /// Back-reference only; the milestone never owns the goal.
    pub goal_id: EntityId,
    pub title: String,
    pub description: Option<String>,
    pub target_date: Timestamp,
    pub completed_date: Option<Timestamp>,
    pub is_completed: bool,
    /// Display sequence, not necessarily contiguous.
    pub order: i32,
}

/// Milestone payload inside a goal draft; ids are assigned at goal creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneDraft {
    pub title: String,
    pub description: Option<String>,
    pub target_date: Timestamp,
    pub order: i32,
}

/// Partial milestone update. Double-`Option` fields are clearable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestonePatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub target_date: Option<Timestamp>,
    pub completed_date: Option<Option<Timestamp>>,
    pub is_completed: Option<bool>,
    pub order: Option<i32>,
}

impl Milestone {
    /// Applies a partial update in place.
    pub fn apply(&mut self, patch: MilestonePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(target_date) = patch.target_date {
            self.target_date = target_date;
        }
        if let Some(completed_date) = patch.completed_date {
            self.completed_date = completed_date;
        }
        if let Some(is_completed) = patch.is_completed {
            self.is_completed = is_completed;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
    }
}

/// Long-running objective tracked through milestones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub priority: Priority,
    pub status: GoalStatus,
    pub start_date: Timestamp,
    pub target_date: Timestamp,
    pub completed_date: Option<Timestamp>,
    /// Percentage 0..=100. Recomputed by milestone updates; manual overrides
    /// through a goal patch are accepted as-is.
    pub progress: u8,
    pub milestones: Vec<Milestone>,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated form payload for creating a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub priority: Priority,
    pub status: GoalStatus,
    pub start_date: Timestamp,
    pub target_date: Timestamp,
    pub progress: u8,
    pub milestones: Vec<MilestoneDraft>,
    pub tags: Vec<String>,
}

impl GoalDraft {
    /// Rejects drafts a goal form must not submit.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.progress > 100 {
            return Err(ValidationError::OutOfRange {
                field: "progress",
                value: i64::from(self.progress),
            });
        }
        Ok(())
    }
}

/// Partial goal update. Replacing `milestones` wholesale does not trigger a
/// progress recomputation; only `update_milestone` does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<GoalCategory>,
    pub priority: Option<Priority>,
    pub status: Option<GoalStatus>,
    pub start_date: Option<Timestamp>,
    pub target_date: Option<Timestamp>,
    pub completed_date: Option<Option<Timestamp>>,
    pub progress: Option<u8>,
    pub milestones: Option<Vec<Milestone>>,
    pub tags: Option<Vec<String>>,
}

impl Goal {
    /// Builds a goal from a validated draft, assigning ids to the goal and
    /// each of its milestones.
    pub fn from_draft(draft: GoalDraft, at: Timestamp) -> Result<Self, ValidationError> {
        draft.validate()?;
        let goal_id = Uuid::new_v4();
        let milestones = draft
            .milestones
            .into_iter()
            .map(|milestone| Milestone {
                id: Uuid::new_v4(),
                goal_id,
                title: milestone.title,
                description: milestone.description,
                target_date: milestone.target_date,
                completed_date: None,
                is_completed: false,
                order: milestone.order,
            })
            .collect();
        Ok(Self {
            id: goal_id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            priority: draft.priority,
            status: draft.status,
            start_date: draft.start_date,
            target_date: draft.target_date,
            completed_date: None,
            progress: draft.progress,
            milestones,
            tags: normalize_list(&draft.tags),
            created_at: at,
            updated_at: at,
        })
    }
}

/// Percentage of completed milestones, rounded to the nearest integer.
///
/// `None` when the slice is empty; callers keep the goal's current progress
/// in that case, so manually-set progress survives.
pub fn milestone_progress(milestones: &[Milestone]) -> Option<u8> {
    if milestones.is_empty() {
        return None;
    }
    let completed = milestones
        .iter()
        .filter(|milestone| milestone.is_completed)
        .count();
    Some(((completed as f64 / milestones.len() as f64) * 100.0).round() as u8)
}

impl Entity for Goal {
    type Patch = GoalPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn apply_patch(&mut self, patch: GoalPatch, at: Timestamp) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(target_date) = patch.target_date {
            self.target_date = target_date;
        }
        if let Some(completed_date) = patch.completed_date {
            self.completed_date = completed_date;
        }
        if let Some(progress) = patch.progress {
            self.progress = progress;
        }
        if let Some(milestones) = patch.milestones {
            self.milestones = milestones;
        }
        if let Some(tags) = patch.tags {
            self.tags = normalize_list(&tags);
        }
        self.updated_at = at;
    }
}

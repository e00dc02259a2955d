//! Goals use-case service.
//!
//! # Responsibility
//! - Create/update/delete goals and patch individual milestones.
//! - Recompute goal progress whenever a milestone changes through
//!   [`GoalService::update_milestone`].
//!
//! # Invariants
//! - After `update_milestone`, `progress == round(100 * completed / total)`.
//! - A goal patch that sets `progress` directly is accepted as-is and never
//!   re-validated against milestones.

use crate::model::goal::{milestone_progress, Goal, GoalDraft, GoalPatch, MilestonePatch};
use crate::model::{EntityId, ValidationError};
use crate::query::goal_query::{project_goals, GoalQuery};
use crate::service::persist;
use crate::storage::CollectionStore;
use crate::store::memory::MemoryStore;
use chrono::Utc;

/// Goals service over an in-memory store with optional persistence.
pub struct GoalService<'conn> {
    store: MemoryStore<Goal>,
    filter: GoalQuery,
    persistence: Option<CollectionStore<'conn>>,
}

impl<'conn> GoalService<'conn> {
    /// Detached service with no persistence, starting empty.
    pub fn detached() -> GoalService<'static> {
        GoalService {
            store: MemoryStore::new(),
            filter: GoalQuery::default(),
            persistence: None,
        }
    }

    /// Opens the service over a persisted collection; goals start empty on
    /// first run.
    pub fn open(adapter: CollectionStore<'conn>) -> Self {
        let goals = adapter.load().unwrap_or_default();
        Self {
            store: MemoryStore::with_entities(goals),
            filter: GoalQuery::default(),
            persistence: Some(adapter),
        }
    }

    /// Creates a goal (with its milestones) from a validated draft.
    pub fn add(&mut self, draft: GoalDraft) -> Result<Goal, ValidationError> {
        let goal = Goal::from_draft(draft, Utc::now())?;
        self.store.add(goal.clone());
        self.persist();
        Ok(goal)
    }

    /// Patches a goal by id, refreshing `updated_at`. No-op when absent.
    pub fn update(&mut self, id: EntityId, patch: GoalPatch) {
        self.store.patch(id, patch, Utc::now());
        self.persist();
    }

    /// Removes a goal by id. No-op when absent.
    pub fn delete(&mut self, id: EntityId) {
        self.store.remove(id);
        self.persist();
    }

    /// Patches one milestone inside a goal, then recomputes the goal's
    /// progress from milestone completion counts.
    ///
    /// No-op when either id is absent. A goal without milestones is never
    /// touched, so its manually-set progress survives.
    pub fn update_milestone(
        &mut self,
        goal_id: EntityId,
        milestone_id: EntityId,
        patch: MilestonePatch,
    ) {
        let Some(goal) = self.store.get(goal_id) else {
            return;
        };
        let Some(index) = goal
            .milestones
            .iter()
            .position(|milestone| milestone.id == milestone_id)
        else {
            return;
        };

        let mut milestones = goal.milestones.clone();
        milestones[index].apply(patch);
        let progress = milestone_progress(&milestones).unwrap_or(goal.progress);

        self.store.patch(
            goal_id,
            GoalPatch {
                milestones: Some(milestones),
                progress: Some(progress),
                ..GoalPatch::default()
            },
            Utc::now(),
        );
        self.persist();
    }

    pub fn get(&self, id: EntityId) -> Option<&Goal> {
        self.store.get(id)
    }

    /// Full collection in insertion order, ignoring the active filter.
    pub fn all(&self) -> &[Goal] {
        self.store.all()
    }

    pub fn filter(&self) -> &GoalQuery {
        &self.filter
    }

    /// Replaces the active filter.
    pub fn set_filter(&mut self, filter: GoalQuery) {
        self.filter = filter;
    }

    /// Resets the active filter to its defaults.
    pub fn clear_filter(&mut self) {
        self.filter = GoalQuery::default();
    }

    /// Filtered view under the active filter, in insertion order.
    pub fn goals(&self) -> Vec<Goal> {
        project_goals(self.store.all(), &self.filter)
    }

    fn persist(&self) {
        persist(self.persistence.as_ref(), "goals", self.store.all());
    }
}

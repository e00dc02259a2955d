//! Tasks use-case service.

use crate::model::task::{Task, TaskDraft, TaskPatch};
use crate::model::{EntityId, ValidationError};
use crate::query::task_query::{project_tasks, TaskQuery};
use crate::service::persist;
use crate::storage::CollectionStore;
use crate::store::memory::MemoryStore;
use chrono::Utc;

/// Tasks service over an in-memory store with optional persistence.
pub struct TaskService<'conn> {
    store: MemoryStore<Task>,
    filter: TaskQuery,
    persistence: Option<CollectionStore<'conn>>,
}

impl<'conn> TaskService<'conn> {
    /// Detached service with no persistence, starting empty.
    pub fn detached() -> TaskService<'static> {
        TaskService {
            store: MemoryStore::new(),
            filter: TaskQuery::default(),
            persistence: None,
        }
    }

    /// Opens the service over a persisted collection; tasks start empty on
    /// first run.
    pub fn open(adapter: CollectionStore<'conn>) -> Self {
        let tasks = adapter.load().unwrap_or_default();
        Self {
            store: MemoryStore::with_entities(tasks),
            filter: TaskQuery::default(),
            persistence: Some(adapter),
        }
    }

    /// Creates an uncompleted task from a validated draft.
    pub fn create(&mut self, draft: TaskDraft) -> Result<Task, ValidationError> {
        let task = Task::from_draft(draft)?;
        self.store.add(task.clone());
        self.persist();
        Ok(task)
    }

    /// Patches a task by id. No-op when absent.
    pub fn update(&mut self, id: EntityId, patch: TaskPatch) {
        self.store.patch(id, patch, Utc::now());
        self.persist();
    }

    /// Removes a task by id. No-op when absent.
    pub fn delete(&mut self, id: EntityId) {
        self.store.remove(id);
        self.persist();
    }

    /// Flips the completion flag of one task. No-op when absent.
    pub fn toggle_complete(&mut self, id: EntityId) {
        let Some(completed) = self.store.get(id).map(|task| !task.completed) else {
            return;
        };
        self.update(
            id,
            TaskPatch {
                completed: Some(completed),
                ..TaskPatch::default()
            },
        );
    }

    pub fn get(&self, id: EntityId) -> Option<&Task> {
        self.store.get(id)
    }

    /// Full collection in insertion order, ignoring the active filter.
    pub fn all(&self) -> &[Task] {
        self.store.all()
    }

    pub fn filter(&self) -> &TaskQuery {
        &self.filter
    }

    /// Replaces the active filter.
    pub fn set_filter(&mut self, filter: TaskQuery) {
        self.filter = filter;
    }

    /// Resets the active filter to its defaults.
    pub fn clear_filter(&mut self) {
        self.filter = TaskQuery::default();
    }

    /// Filtered, sorted view under the active filter.
    pub fn tasks(&self) -> Vec<Task> {
        project_tasks(self.store.all(), &self.filter)
    }

    fn persist(&self) {
        persist(self.persistence.as_ref(), "tasks", self.store.all());
    }
}

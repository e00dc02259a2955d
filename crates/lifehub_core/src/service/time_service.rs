//! Time-tracking use-case service.
//!
//! # Responsibility
//! - Start, stop and edit timer entries against tasks.
//!
//! # Invariants
//! - Stopping a running entry records `end_time` and the elapsed whole
//!   minutes, floored.
//! - Toggling a completed entry restarts it with a fresh `start_time`, no
//!   `end_time` and zero duration.

use crate::model::time_entry::{TimeEntry, TimeEntryDraft, TimeEntryPatch, TimerStatus};
use crate::model::{EntityId, ValidationError};
use crate::query::time_query::{project_time_entries, TimeEntryQuery};
use crate::service::persist;
use crate::storage::CollectionStore;
use crate::store::memory::MemoryStore;
use chrono::Utc;

/// Time-tracking service over an in-memory store with optional persistence.
pub struct TimeTrackingService<'conn> {
    store: MemoryStore<TimeEntry>,
    filter: TimeEntryQuery,
    persistence: Option<CollectionStore<'conn>>,
}

impl<'conn> TimeTrackingService<'conn> {
    /// Detached service with no persistence, starting empty.
    pub fn detached() -> TimeTrackingService<'static> {
        TimeTrackingService {
            store: MemoryStore::new(),
            filter: TimeEntryQuery::default(),
            persistence: None,
        }
    }

    /// Opens the service over a persisted collection; entries start empty on
    /// first run.
    pub fn open(adapter: CollectionStore<'conn>) -> Self {
        let entries = adapter.load().unwrap_or_default();
        Self {
            store: MemoryStore::with_entities(entries),
            filter: TimeEntryQuery::default(),
            persistence: Some(adapter),
        }
    }

    /// Starts a running entry from a validated draft and returns it.
    pub fn start(&mut self, draft: TimeEntryDraft) -> Result<TimeEntry, ValidationError> {
        let entry = TimeEntry::from_draft(draft, Utc::now())?;
        self.store.add(entry.clone());
        self.persist();
        Ok(entry)
    }

    /// Patches an entry by id. No-op when absent.
    pub fn update(&mut self, id: EntityId, patch: TimeEntryPatch) {
        self.store.patch(id, patch, Utc::now());
        self.persist();
    }

    /// Removes an entry by id. No-op when absent.
    pub fn delete(&mut self, id: EntityId) {
        self.store.remove(id);
        self.persist();
    }

    /// Stops a running entry or restarts a completed one. No-op when absent.
    pub fn toggle_timer(&mut self, id: EntityId) {
        let now = Utc::now();
        let Some(entry) = self.store.get(id) else {
            return;
        };
        let patch = match entry.status {
            TimerStatus::Running => {
                let elapsed_minutes = (now - entry.start_time).num_minutes().max(0);
                TimeEntryPatch {
                    status: Some(TimerStatus::Completed),
                    end_time: Some(Some(now)),
                    duration_minutes: Some(elapsed_minutes),
                    ..TimeEntryPatch::default()
                }
            }
            TimerStatus::Completed => TimeEntryPatch {
                status: Some(TimerStatus::Running),
                start_time: Some(now),
                end_time: Some(None),
                duration_minutes: Some(0),
                ..TimeEntryPatch::default()
            },
        };
        self.store.patch(id, patch, now);
        self.persist();
    }

    pub fn get(&self, id: EntityId) -> Option<&TimeEntry> {
        self.store.get(id)
    }

    /// Full collection in insertion order, ignoring the active filter.
    pub fn all(&self) -> &[TimeEntry] {
        self.store.all()
    }

    pub fn filter(&self) -> &TimeEntryQuery {
        &self.filter
    }

    /// Replaces the active filter.
    pub fn set_filter(&mut self, filter: TimeEntryQuery) {
        self.filter = filter;
    }

    /// Resets the active filter to its defaults.
    pub fn clear_filter(&mut self) {
        self.filter = TimeEntryQuery::default();
    }

    /// Filtered, sorted view under the active filter.
    pub fn entries(&self) -> Vec<TimeEntry> {
        project_time_entries(self.store.all(), &self.filter)
    }

    fn persist(&self) {
        persist(self.persistence.as_ref(), "time_tracking", self.store.all());
    }
}

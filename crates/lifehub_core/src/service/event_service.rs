//! Calendar use-case service.
//!
//! # Invariants
//! - All-day events always end at 23:59:59 of their start date, after
//!   creation and after every patch.

use crate::model::event::{CalendarEvent, EventDraft, EventPatch};
use crate::model::{EntityId, ValidationError};
use crate::query::event_query::{project_events, EventQuery};
use crate::seed;
use crate::service::persist;
use crate::storage::CollectionStore;
use crate::store::memory::MemoryStore;
use chrono::Utc;

/// Calendar service over an in-memory store with optional persistence.
pub struct EventService<'conn> {
    store: MemoryStore<CalendarEvent>,
    filter: EventQuery,
    persistence: Option<CollectionStore<'conn>>,
}

impl<'conn> EventService<'conn> {
    /// Detached service with no persistence, starting empty.
    pub fn detached() -> EventService<'static> {
        EventService {
            store: MemoryStore::new(),
            filter: EventQuery::default(),
            persistence: None,
        }
    }

    /// Opens the service over a persisted collection, seeding starter events
    /// when nothing (or nothing readable) is stored.
    pub fn open(adapter: CollectionStore<'conn>) -> Self {
        let events = adapter
            .load()
            .unwrap_or_else(|| seed::default_events(Utc::now()));
        Self {
            store: MemoryStore::with_entities(events),
            filter: EventQuery::default(),
            persistence: Some(adapter),
        }
    }

    /// Schedules an event from a validated draft and returns it.
    pub fn schedule(&mut self, draft: EventDraft) -> Result<CalendarEvent, ValidationError> {
        let event = CalendarEvent::from_draft(draft)?;
        self.store.add(event.clone());
        self.persist();
        Ok(event)
    }

    /// Patches an event by id, re-normalizing the all-day end time. No-op
    /// when absent.
    pub fn update(&mut self, id: EntityId, patch: EventPatch) {
        self.store.patch(id, patch, Utc::now());
        self.persist();
    }

    /// Removes an event by id. No-op when absent.
    pub fn delete(&mut self, id: EntityId) {
        self.store.remove(id);
        self.persist();
    }

    /// Looks up one event by id.
    pub fn find(&self, id: EntityId) -> Option<&CalendarEvent> {
        self.store.get(id)
    }

    /// Full collection in insertion order, ignoring the active filter.
    pub fn all(&self) -> &[CalendarEvent] {
        self.store.all()
    }

    pub fn filter(&self) -> &EventQuery {
        &self.filter
    }

    /// Replaces the active filter.
    pub fn set_filter(&mut self, filter: EventQuery) {
        self.filter = filter;
    }

    /// Resets the active filter to its defaults.
    pub fn clear_filter(&mut self) {
        self.filter = EventQuery::default();
    }

    /// Filtered view under the active filter, ordered by start time.
    pub fn events(&self) -> Vec<CalendarEvent> {
        project_events(self.store.all(), &self.filter)
    }

    fn persist(&self) {
        persist(self.persistence.as_ref(), "calendar", self.store.all());
    }
}

//! Notes use-case service.
//!
//! # Responsibility
//! - Create/update/delete/pin notes through the store command path.
//! - Hold the active filter and expose the projected notes view.
//!
//! # Invariants
//! - Pinned notes precede unpinned notes in `notes()` output.
//! - Every mutation persists the full collection fire-and-forget.

use crate::model::note::{Note, NoteDraft, NotePatch};
use crate::model::{EntityId, ValidationError};
use crate::query::note_query::{project_notes, NoteQuery};
use crate::seed;
use crate::service::persist;
use crate::storage::CollectionStore;
use crate::store::memory::MemoryStore;
use chrono::Utc;

/// Notes service over an in-memory store with optional persistence.
pub struct NoteService<'conn> {
    store: MemoryStore<Note>,
    filter: NoteQuery,
    persistence: Option<CollectionStore<'conn>>,
}

impl<'conn> NoteService<'conn> {
    /// Detached service with no persistence, starting empty.
    pub fn detached() -> NoteService<'static> {
        NoteService {
            store: MemoryStore::new(),
            filter: NoteQuery::default(),
            persistence: None,
        }
    }

    /// Opens the service over a persisted collection, seeding first-run
    /// defaults when nothing (or nothing readable) is stored.
    pub fn open(adapter: CollectionStore<'conn>) -> Self {
        let notes = adapter
            .load()
            .unwrap_or_else(|| seed::default_notes(Utc::now()));
        Self {
            store: MemoryStore::with_entities(notes),
            filter: NoteQuery::default(),
            persistence: Some(adapter),
        }
    }

    /// Creates a note from a validated draft and returns it.
    pub fn create(&mut self, draft: NoteDraft) -> Result<Note, ValidationError> {
        let note = Note::from_draft(draft, Utc::now())?;
        self.store.add(note.clone());
        self.persist();
        Ok(note)
    }

    /// Patches a note by id, refreshing `updated_at`. No-op when absent.
    pub fn update(&mut self, id: EntityId, patch: NotePatch) {
        self.store.patch(id, patch, Utc::now());
        self.persist();
    }

    /// Removes a note by id. No-op when absent.
    pub fn delete(&mut self, id: EntityId) {
        self.store.remove(id);
        self.persist();
    }

    /// Flips the pin flag of one note. No-op when absent.
    pub fn toggle_pin(&mut self, id: EntityId) {
        let Some(is_pinned) = self.store.get(id).map(|note| !note.is_pinned) else {
            return;
        };
        self.update(
            id,
            NotePatch {
                is_pinned: Some(is_pinned),
                ..NotePatch::default()
            },
        );
    }

    pub fn get(&self, id: EntityId) -> Option<&Note> {
        self.store.get(id)
    }

    /// Full collection in insertion order, ignoring the active filter.
    pub fn all(&self) -> &[Note] {
        self.store.all()
    }

    pub fn filter(&self) -> &NoteQuery {
        &self.filter
    }

    /// Replaces the active filter.
    pub fn set_filter(&mut self, filter: NoteQuery) {
        self.filter = filter;
    }

    /// Resets the active filter to its defaults.
    pub fn clear_filter(&mut self) {
        self.filter = NoteQuery::default();
    }

    /// Filtered, sorted, pinned-first view under the active filter.
    pub fn notes(&self) -> Vec<Note> {
        project_notes(self.store.all(), &self.filter)
    }

    fn persist(&self) {
        persist(self.persistence.as_ref(), "notes", self.store.all());
    }
}

//! Ordered in-memory collection with command-based mutation.
//!
//! # Responsibility
//! - Provide the add/patch/remove/get contract every feature store shares.
//! - Keep mutation deterministic: commands carry their ids and timestamps,
//!   so replaying a command sequence rebuilds the same state.
//!
//! # Invariants
//! - Insertion order is preserved; projections impose their own ordering.
//! - `patch` and `remove` on an absent id leave the collection unchanged.

use crate::model::{Entity, EntityId, Timestamp};

/// Tagged mutation consumed by [`reduce`].
#[derive(Debug, Clone)]
pub enum Command<E: Entity> {
    /// Appends an entity whose id was assigned by its model constructor.
    Add(E),
    /// Applies a partial update; no-op when the id is absent.
    Patch {
        id: EntityId,
        patch: E::Patch,
        at: Timestamp,
    },
    /// Removes by id; no-op when the id is absent.
    Remove(EntityId),
    /// Replaces the whole collection (load and seed paths).
    Replace(Vec<E>),
}

/// Applies one command to the collection.
///
/// Deterministic: the same (state, command) pair always yields the same next
/// state, because commands carry their own ids and timestamps.
pub fn reduce<E: Entity>(entities: &mut Vec<E>, command: Command<E>) {
    match command {
        Command::Add(entity) => entities.push(entity),
        Command::Patch { id, patch, at } => {
            if let Some(entity) = entities.iter_mut().find(|entity| entity.id() == id) {
                entity.apply_patch(patch, at);
            }
        }
        Command::Remove(id) => entities.retain(|entity| entity.id() != id),
        Command::Replace(items) => *entities = items,
    }
}

/// Ordered in-memory entity collection.
#[derive(Debug)]
pub struct MemoryStore<E: Entity> {
    entities: Vec<E>,
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> MemoryStore<E> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Creates a store over an already-loaded collection.
    pub fn with_entities(entities: Vec<E>) -> Self {
        Self { entities }
    }

    /// Runs one command through [`reduce`].
    pub fn apply(&mut self, command: Command<E>) {
        reduce(&mut self.entities, command);
    }

    /// Appends an entity and returns its id.
    pub fn add(&mut self, entity: E) -> EntityId {
        let id = entity.id();
        self.apply(Command::Add(entity));
        id
    }

    /// Patches by id; silent no-op when absent.
    pub fn patch(&mut self, id: EntityId, patch: E::Patch, at: Timestamp) {
        self.apply(Command::Patch { id, patch, at });
    }

    /// Removes by id; silent no-op when absent.
    pub fn remove(&mut self, id: EntityId) {
        self.apply(Command::Remove(id));
    }

    /// Looks up one entity by id.
    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    /// Full collection in insertion order.
    pub fn all(&self) -> &[E] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

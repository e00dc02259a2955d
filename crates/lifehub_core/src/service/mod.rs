//! Feature services: store orchestration and fire-and-forget persistence.
//!
//! # Responsibility
//! - Own each feature's in-memory store and active filter.
//! - Persist the whole collection after every mutation, swallowing adapter
//!   failures.
//!
//! # Invariants
//! - In-memory state stays authoritative for the session; a failed save is
//!   logged and never surfaced to the caller.
//! - Lookup misses on update/delete/toggle operations are silent no-ops.

pub mod dashboard;
pub mod event_service;
pub mod goal_service;
pub mod note_service;
pub mod task_service;
pub mod time_service;

use crate::storage::CollectionStore;
use log::warn;
use serde::Serialize;

/// Fire-and-forget save of one feature collection.
pub(crate) fn persist<T: Serialize>(
    adapter: Option<&CollectionStore<'_>>,
    module: &'static str,
    items: &[T],
) {
    let Some(store) = adapter else {
        return;
    };
    if let Err(err) = store.save(items) {
        warn!(
            "event=collection_save module={module} status=error namespace={} error={err}",
            store.namespace()
        );
    }
}

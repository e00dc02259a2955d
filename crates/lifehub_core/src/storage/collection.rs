//! Typed save/load of one feature collection under its fixed namespace.
//!
//! # Responsibility
//! - Serialize a whole collection to one JSON payload per save.
//! - Treat absent and malformed payloads alike: the caller falls back to
//!   seed/default data.
//!
//! # Invariants
//! - `save` then `load` returns a collection equal in every field, dates
//!   compared as instants.
//! - `load` never propagates an error; failures are logged and read as
//!   absent.

use crate::storage::{StorageError, StorageResult};
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Handle on one namespace of the collection store.
pub struct CollectionStore<'conn> {
    conn: &'conn Connection,
    namespace: &'static str,
}

impl<'conn> CollectionStore<'conn> {
    /// Binds a namespace on a migrated connection.
    pub fn new(conn: &'conn Connection, namespace: &'static str) -> Self {
        Self { conn, namespace }
    }

    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Serializes the whole collection as one JSON payload under the
    /// namespace, replacing any previous payload.
    pub fn save<T: Serialize>(&self, items: &[T]) -> StorageResult<()> {
        let payload = serde_json::to_string(items).map_err(StorageError::Serialize)?;
        self.conn.execute(
            "INSERT INTO collections (namespace, payload, saved_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(namespace) DO UPDATE SET
                payload = excluded.payload,
                saved_at = excluded.saved_at;",
            params![self.namespace, payload],
        )?;
        Ok(())
    }

    /// Loads the stored collection.
    ///
    /// Returns `None` when the namespace has never been saved or the stored
    /// payload no longer parses; both cases are logged and the caller falls
    /// back to its seed/default collection.
    pub fn load<T: DeserializeOwned>(&self) -> Option<Vec<T>> {
        let payload = match self
            .conn
            .query_row(
                "SELECT payload FROM collections WHERE namespace = ?1;",
                [self.namespace],
                |row| row.get::<_, String>(0),
            )
            .optional()
        {
            Ok(Some(payload)) => payload,
            Ok(None) => return None,
            Err(err) => {
                warn!(
                    "event=collection_load module=storage status=error namespace={} error={err}",
                    self.namespace
                );
                return None;
            }
        };

        match serde_json::from_str::<Vec<T>>(&payload) {
            Ok(items) => Some(items),
            Err(err) => {
                warn!(
                    "event=collection_load module=storage status=malformed namespace={} error={err}",
                    self.namespace
                );
                None
            }
        }
    }
}

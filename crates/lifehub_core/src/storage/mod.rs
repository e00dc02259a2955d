//! SQLite-backed key-value persistence for feature collections.
//!
//! # Responsibility
//! - Open and migrate the backing store.
//! - Save/load whole feature collections as JSON payloads, one fixed
//!   namespace per feature.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Dates serialize as RFC 3339 text inside payloads.
//! - In-memory state stays authoritative: adapter failures never surface to
//!   mutation callers.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod collection;
pub mod migrations;
mod open;

pub use collection::CollectionStore;
pub use open::{open_store, open_store_in_memory};

/// Namespace for the notes collection.
pub const NOTES_NAMESPACE: &str = "notes";
/// Namespace for the goals collection.
pub const GOALS_NAMESPACE: &str = "goals";
/// Namespace for the tasks collection.
pub const TASKS_NAMESPACE: &str = "tasks";
/// Namespace for the time-tracking collection.
pub const TIME_ENTRIES_NAMESPACE: &str = "time_entries";
/// Namespace for the calendar collection.
pub const EVENTS_NAMESPACE: &str = "calendar_events";

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer error for bootstrap, save and explicit load operations.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    Serialize(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Serialize(err) => write!(f, "failed to serialize collection payload: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

//! Core domain logic for LifeHub.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod query;
pub mod seed;
pub mod service;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{CalendarEvent, EventDraft, EventPatch};
pub use model::goal::{
    Goal, GoalCategory, GoalDraft, GoalPatch, GoalStatus, Milestone, MilestoneDraft,
    MilestonePatch,
};
pub use model::note::{Note, NoteDraft, NotePatch};
pub use model::task::{Task, TaskDraft, TaskPatch};
pub use model::time_entry::{TimeEntry, TimeEntryDraft, TimeEntryPatch, TimerStatus};
pub use model::{Entity, EntityId, Priority, Timestamp, ValidationError};
pub use query::event_query::EventQuery;
pub use query::goal_query::GoalQuery;
pub use query::note_query::{NoteQuery, NoteSortKey};
pub use query::task_query::{TaskQuery, TaskSortKey, TaskVisibility};
pub use query::time_query::{TimeEntryQuery, TimeEntrySortKey, TimeEntryVisibility};
pub use query::SortOrder;
pub use service::dashboard::{summarize, DashboardSummary};
pub use service::event_service::EventService;
pub use service::goal_service::GoalService;
pub use service::note_service::NoteService;
pub use service::task_service::TaskService;
pub use service::time_service::TimeTrackingService;
pub use storage::{open_store, open_store_in_memory, CollectionStore, StorageError, StorageResult};
pub use store::memory::{reduce, Command, MemoryStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

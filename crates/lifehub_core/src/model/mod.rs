//! Domain model for every feature collection.
//!
//! # Responsibility
//! - Define the entity, draft and patch types consumed by stores and services.
//! - Validate form payloads before they reach a store.
//!
//! # Invariants
//! - Every entity carries a stable `EntityId` assigned at creation.
//! - Drafts are validated; patches are applied field-by-field without
//!   re-validation.
//! - Tag lists are deduplicated preserving first occurrence.

pub mod event;
pub mod fields;
pub mod goal;
pub mod note;
pub mod task;
pub mod time_entry;

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every entity and milestone.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = Uuid;

/// Instant type used across the model. Serialized as RFC 3339 text.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Urgency level shared by goals and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Draft validation failure reported at the form-submission boundary.
///
/// A failed validation leaves every store untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    MissingField(&'static str),
    /// A time range ends at or before its start.
    EndBeforeStart,
    /// A numeric field is outside its allowed range.
    OutOfRange { field: &'static str, value: i64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::EndBeforeStart => write!(f, "end must be after start"),
            Self::OutOfRange { field, value } => {
                write!(f, "value {value} is out of range for `{field}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Capability contract every stored entity satisfies.
pub trait Entity {
    /// Partial update applied through a store command.
    type Patch: Clone + std::fmt::Debug;

    /// Stable id assigned at creation and never reassigned.
    fn id(&self) -> EntityId;

    /// Applies a partial update. Implementations refresh `updated_at` from
    /// `at` when the entity tracks it.
    fn apply_patch(&mut self, patch: Self::Patch, at: Timestamp);
}

//! Note entity, draft and patch types.
//!
//! # Invariants
//! - `title` is never blank for a stored note.
//! - `updated_at` is refreshed on every patch.
//! - Pinned notes precede unpinned notes in any projection (enforced by the
//!   note query, not by storage order).

use crate::model::fields::normalize_list;
use crate::model::{Entity, EntityId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Free-form note with tags, an optional category and a pin flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    /// Display order preserved; duplicates removed at the form boundary.
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub is_pinned: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated form payload for creating a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub is_pinned: bool,
}

impl NoteDraft {
    /// Rejects drafts a note form must not submit.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        Ok(())
    }
}

/// Partial note update. `category` uses a double `Option` so it can be
/// cleared as well as changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<Option<String>>,
    pub is_pinned: Option<bool>,
}

impl Note {
    /// Builds a note from a validated draft with a fresh id.
    pub fn from_draft(draft: NoteDraft, at: Timestamp) -> Result<Self, ValidationError> {
        draft.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            tags: normalize_list(&draft.tags),
            category: draft.category,
            is_pinned: draft.is_pinned,
            created_at: at,
            updated_at: at,
        })
    }
}

impl Entity for Note {
    type Patch = NotePatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn apply_patch(&mut self, patch: NotePatch, at: Timestamp) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            self.tags = normalize_list(&tags);
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(is_pinned) = patch.is_pinned {
            self.is_pinned = is_pinned;
        }
        self.updated_at = at;
    }
}

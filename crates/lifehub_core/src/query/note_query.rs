//! Note projection: text/tag/category filtering, sorting, pin partition.
//!
//! # Invariants
//! - Tag selection is a conjunction: a note matches only when it carries
//!   every selected tag.
//! - Pinned notes precede unpinned notes; within each group the order is
//!   exactly what the sort comparator alone would produce.

use crate::model::note::Note;
use crate::query::{contains_ci, SortOrder};
use std::cmp::Ordering;

/// Field a note projection sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteSortKey {
    /// Case-insensitive lexicographic title order.
    Title,
    CreatedAt,
    UpdatedAt,
}

/// Filter criteria for the notes view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteQuery {
    /// Substring matched against title, content and tags; empty matches all.
    pub search: String,
    /// Every selected tag must be present on a matching note.
    pub selected_tags: Vec<String>,
    /// Exact category equality; `None` matches all.
    pub category: Option<String>,
    pub sort_by: NoteSortKey,
    pub order: SortOrder,
}

impl Default for NoteQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            selected_tags: Vec::new(),
            category: None,
            sort_by: NoteSortKey::UpdatedAt,
            order: SortOrder::Desc,
        }
    }
}

/// Projects the filtered, sorted, pinned-first view of `notes`.
pub fn project_notes(notes: &[Note], query: &NoteQuery) -> Vec<Note> {
    let mut matched: Vec<Note> = notes
        .iter()
        .filter(|note| matches(note, query))
        .cloned()
        .collect();

    matched.sort_by(|a, b| {
        let ordering = compare(a, b, query.sort_by);
        match query.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    // Post-sort stable repartition, not a sort key.
    let (pinned, unpinned): (Vec<Note>, Vec<Note>) =
        matched.into_iter().partition(|note| note.is_pinned);
    let mut projected = pinned;
    projected.extend(unpinned);
    projected
}

fn matches(note: &Note, query: &NoteQuery) -> bool {
    if !query.search.is_empty() {
        let hit = contains_ci(&note.title, &query.search)
            || contains_ci(&note.content, &query.search)
            || note.tags.iter().any(|tag| contains_ci(tag, &query.search));
        if !hit {
            return false;
        }
    }

    if !query
        .selected_tags
        .iter()
        .all(|selected| note.tags.iter().any(|tag| tag == selected))
    {
        return false;
    }

    if let Some(category) = query.category.as_deref() {
        if note.category.as_deref() != Some(category) {
            return false;
        }
    }

    true
}

fn compare(a: &Note, b: &Note, key: NoteSortKey) -> Ordering {
    match key {
        NoteSortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        NoteSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        NoteSortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

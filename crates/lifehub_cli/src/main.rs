//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lifehub_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use lifehub_core::{NoteDraft, NoteService};

fn main() {
    println!("lifehub_core version={}", lifehub_core::core_version());

    let mut notes = NoteService::detached();
    let created = notes
        .create(NoteDraft {
            title: "Smoke note".to_string(),
            ..NoteDraft::default()
        })
        .expect("smoke draft is valid");
    println!("lifehub_core smoke note_id={} notes={}", created.id, notes.all().len());
}

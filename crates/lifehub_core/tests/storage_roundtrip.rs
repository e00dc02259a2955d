use chrono::{Duration, TimeZone, Utc};
use lifehub_core::storage::{
    open_store, open_store_in_memory, CollectionStore, StorageError, EVENTS_NAMESPACE,
    GOALS_NAMESPACE, NOTES_NAMESPACE, TASKS_NAMESPACE, TIME_ENTRIES_NAMESPACE,
};
use lifehub_core::{
    CalendarEvent, EventService, GoalService, Note, NoteDraft, NotePatch, NoteService, Priority,
    TaskDraft, TaskService, TimeEntryDraft, TimeTrackingService,
};
use rusqlite::params;
use uuid::Uuid;

fn sample_notes() -> Vec<Note> {
    let now = Utc::now();
    vec![
        Note {
            id: Uuid::new_v4(),
            title: "First".to_string(),
            content: "alpha".to_string(),
            tags: vec!["x".to_string()],
            category: Some("Work".to_string()),
            is_pinned: true,
            created_at: now - Duration::days(1),
            updated_at: now,
        },
        Note {
            id: Uuid::new_v4(),
            title: "Second".to_string(),
            content: String::new(),
            tags: Vec::new(),
            category: None,
            is_pinned: false,
            created_at: now,
            updated_at: now,
        },
    ]
}

#[test]
fn notes_round_trip_preserves_every_field() {
    let conn = open_store_in_memory().unwrap();
    let adapter = CollectionStore::new(&conn, NOTES_NAMESPACE);
    let notes = sample_notes();

    adapter.save(&notes).unwrap();
    let loaded: Vec<Note> = adapter.load().unwrap();
    assert_eq!(loaded, notes);
}

#[test]
fn empty_collection_round_trips() {
    let conn = open_store_in_memory().unwrap();
    let adapter = CollectionStore::new(&conn, NOTES_NAMESPACE);

    adapter.save::<Note>(&[]).unwrap();
    let loaded: Vec<Note> = adapter.load().unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn missing_namespace_loads_as_absent() {
    let conn = open_store_in_memory().unwrap();
    let adapter = CollectionStore::new(&conn, NOTES_NAMESPACE);
    assert!(adapter.load::<Note>().is_none());
}

#[test]
fn malformed_payload_loads_as_absent() {
    let conn = open_store_in_memory().unwrap();
    conn.execute(
        "INSERT INTO collections (namespace, payload, saved_at) VALUES (?1, ?2, 0);",
        params![NOTES_NAMESPACE, "{not json]"],
    )
    .unwrap();

    let adapter = CollectionStore::new(&conn, NOTES_NAMESPACE);
    assert!(adapter.load::<Note>().is_none());
}

#[test]
fn namespaces_are_isolated() {
    let conn = open_store_in_memory().unwrap();
    let notes_adapter = CollectionStore::new(&conn, NOTES_NAMESPACE);
    let events_adapter = CollectionStore::new(&conn, EVENTS_NAMESPACE);

    notes_adapter.save(&sample_notes()).unwrap();
    assert!(events_adapter.load::<CalendarEvent>().is_none());
}

#[test]
fn saving_twice_replaces_the_previous_payload() {
    let conn = open_store_in_memory().unwrap();
    let adapter = CollectionStore::new(&conn, NOTES_NAMESPACE);
    let notes = sample_notes();

    adapter.save(&notes).unwrap();
    adapter.save(&notes[..1]).unwrap();
    let loaded: Vec<Note> = adapter.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], notes[0]);
}

#[test]
fn event_dates_round_trip_as_instants() {
    let conn = open_store_in_memory().unwrap();
    let adapter = CollectionStore::new(&conn, EVENTS_NAMESPACE);
    let events = vec![CalendarEvent {
        id: Uuid::new_v4(),
        title: "Offsite".to_string(),
        description: Some("all hands".to_string()),
        start: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 6, 1, 23, 59, 59).unwrap(),
        all_day: true,
        location: Some("HQ".to_string()),
        attendees: vec!["ana@example.com".to_string()],
        tags: vec!["team".to_string()],
        category: Some("Work".to_string()),
    }];

    adapter.save(&events).unwrap();
    let loaded: Vec<CalendarEvent> = adapter.load().unwrap();
    assert_eq!(loaded, events);
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lifehub.db");
    let notes = sample_notes();

    {
        let conn = open_store(&path).unwrap();
        CollectionStore::new(&conn, NOTES_NAMESPACE)
            .save(&notes)
            .unwrap();
    }

    let conn = open_store(&path).unwrap();
    let loaded: Vec<Note> = CollectionStore::new(&conn, NOTES_NAMESPACE)
        .load()
        .unwrap();
    assert_eq!(loaded, notes);
}

#[test]
fn future_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lifehub.db");
    {
        let conn = open_store(&path).unwrap();
        conn.execute_batch("PRAGMA user_version = 99;").unwrap();
    }

    match open_store(&path) {
        Err(StorageError::UnsupportedSchemaVersion { db_version: 99, .. }) => {}
        other => panic!("expected unsupported schema version, got {other:?}"),
    }
}

#[test]
fn note_service_seeds_first_run_then_persists_mutations() {
    let conn = open_store_in_memory().unwrap();

    let created_id = {
        let mut service = NoteService::open(CollectionStore::new(&conn, NOTES_NAMESPACE));
        // First run: seeded welcome notes, nothing persisted yet.
        assert_eq!(service.all().len(), 3);
        let created = service
            .create(NoteDraft {
                title: "Persisted".to_string(),
                ..NoteDraft::default()
            })
            .unwrap();
        created.id
    };

    let reopened = NoteService::open(CollectionStore::new(&conn, NOTES_NAMESPACE));
    assert_eq!(reopened.all().len(), 4);
    assert!(reopened.get(created_id).is_some());
}

#[test]
fn all_feature_services_share_one_store_without_collisions() {
    let conn = open_store_in_memory().unwrap();

    let mut notes = NoteService::open(CollectionStore::new(&conn, NOTES_NAMESPACE));
    let mut goals = GoalService::open(CollectionStore::new(&conn, GOALS_NAMESPACE));
    let mut tasks = TaskService::open(CollectionStore::new(&conn, TASKS_NAMESPACE));
    let mut tracking =
        TimeTrackingService::open(CollectionStore::new(&conn, TIME_ENTRIES_NAMESPACE));
    let events = EventService::open(CollectionStore::new(&conn, EVENTS_NAMESPACE));

    // Goals, tasks and time entries start empty; notes and calendar seed.
    assert!(goals.all().is_empty());
    assert!(tasks.all().is_empty());
    assert!(tracking.all().is_empty());
    assert_eq!(notes.all().len(), 3);
    assert_eq!(events.all().len(), 3);

    let first_note = notes.all()[0].id;
    notes.delete(first_note);
    let task = tasks
        .create(TaskDraft {
            title: "wire services".to_string(),
            description: None,
            priority: Priority::High,
            due_date: None,
        })
        .unwrap();
    tracking
        .start(TimeEntryDraft {
            task_id: task.id,
            task_title: task.title.clone(),
            category: "Development".to_string(),
            tags: Vec::new(),
        })
        .unwrap();

    let tasks_again = TaskService::open(CollectionStore::new(&conn, TASKS_NAMESPACE));
    assert_eq!(tasks_again.all().len(), 1);
    let tracking_again =
        TimeTrackingService::open(CollectionStore::new(&conn, TIME_ENTRIES_NAMESPACE));
    assert_eq!(tracking_again.all().len(), 1);
    assert_eq!(tracking_again.all()[0].task_id, task.id);
}

#[test]
fn note_service_updates_are_visible_after_reopen() {
    let conn = open_store_in_memory().unwrap();
    let id = {
        let mut service = NoteService::open(CollectionStore::new(&conn, NOTES_NAMESPACE));
        let created = service
            .create(NoteDraft {
                title: "Before".to_string(),
                ..NoteDraft::default()
            })
            .unwrap();
        service.update(
            created.id,
            NotePatch {
                title: Some("After".to_string()),
                ..NotePatch::default()
            },
        );
        created.id
    };

    let reopened = NoteService::open(CollectionStore::new(&conn, NOTES_NAMESPACE));
    assert_eq!(reopened.get(id).unwrap().title, "After");
}

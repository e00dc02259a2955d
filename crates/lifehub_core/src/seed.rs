//! First-run seed collections.
//!
//! Used when a feature's namespace has never been saved or its payload no
//! longer parses. Only notes and the calendar ship defaults; every other
//! collection starts empty.

use crate::model::event::CalendarEvent;
use crate::model::note::Note;
use crate::model::Timestamp;
use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

/// Default notes shown before the user has saved anything.
pub fn default_notes(now: Timestamp) -> Vec<Note> {
    vec![
        Note {
            id: Uuid::new_v4(),
            title: "Welcome to Notes".to_string(),
            content: "This is your first note! You can create, edit, and organize your \
                      notes with tags and categories."
                .to_string(),
            tags: vec!["welcome".to_string(), "getting-started".to_string()],
            category: Some("General".to_string()),
            is_pinned: true,
            created_at: now - Duration::days(1),
            updated_at: now - Duration::days(1),
        },
        Note {
            id: Uuid::new_v4(),
            title: "Project Ideas".to_string(),
            content: "Here are some project ideas to work on:\n\n1. Build a task management \
                      app\n2. Create a personal blog\n3. Contribute to open source"
                .to_string(),
            tags: vec![
                "projects".to_string(),
                "ideas".to_string(),
                "development".to_string(),
            ],
            category: Some("Work".to_string()),
            is_pinned: false,
            created_at: now - Duration::days(2),
            updated_at: now - Duration::hours(1),
        },
        Note {
            id: Uuid::new_v4(),
            title: "Meeting Notes".to_string(),
            content: "Team meeting notes from today:\n- Discussed new feature requirements\n\
                      - Set deadlines for next sprint\n- Assigned tasks to team members"
                .to_string(),
            tags: vec![
                "meeting".to_string(),
                "work".to_string(),
                "team".to_string(),
            ],
            category: Some("Work".to_string()),
            is_pinned: false,
            created_at: now - Duration::hours(2),
            updated_at: now - Duration::minutes(30),
        },
    ]
}

/// Starter calendar events for an empty calendar.
pub fn default_events(now: Timestamp) -> Vec<CalendarEvent> {
    vec![
        CalendarEvent {
            id: Uuid::new_v4(),
            title: "Team Standup".to_string(),
            description: None,
            start: at_time(now, 0, 9, 0),
            end: at_time(now, 0, 9, 30),
            all_day: false,
            location: None,
            attendees: Vec::new(),
            tags: Vec::new(),
            category: Some("Work".to_string()),
        },
        CalendarEvent {
            id: Uuid::new_v4(),
            title: "Client Call - Project Phoenix".to_string(),
            description: Some("Discuss milestone 2 deliverables.".to_string()),
            start: at_time(now, 0, 14, 0),
            end: at_time(now, 0, 15, 0),
            all_day: false,
            location: Some("Zoom Link".to_string()),
            attendees: Vec::new(),
            tags: Vec::new(),
            category: Some("Client".to_string()),
        },
        CalendarEvent {
            id: Uuid::new_v4(),
            title: "Dentist Appointment".to_string(),
            description: None,
            start: at_time(now, 2, 10, 0),
            end: at_time(now, 2, 10, 45),
            all_day: false,
            location: None,
            attendees: Vec::new(),
            tags: Vec::new(),
            category: Some("Health".to_string()),
        },
    ]
}

fn at_time(now: Timestamp, day_offset: i64, hour: u32, minute: u32) -> Timestamp {
    let date = now.date_naive() + Duration::days(day_offset);
    let naive = date
        .and_hms_opt(hour, minute, 0)
        .expect("seed times are valid");
    Utc.from_utc_datetime(&naive)
}

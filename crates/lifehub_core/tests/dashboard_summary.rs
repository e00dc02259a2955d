use chrono::{Duration, Utc};
use lifehub_core::service::dashboard::summarize;
use lifehub_core::{
    EventDraft, EventService, GoalCategory, GoalDraft, GoalService, GoalStatus, NoteDraft,
    NoteService, Priority, TaskDraft, TaskService,
};

#[test]
fn summary_counts_across_all_collections() {
    let now = Utc::now();

    let mut notes = NoteService::detached();
    notes
        .create(NoteDraft {
            title: "One".to_string(),
            ..NoteDraft::default()
        })
        .unwrap();

    let mut tasks = TaskService::detached();
    let done = tasks
        .create(TaskDraft {
            title: "done".to_string(),
            description: None,
            priority: Priority::High,
            due_date: None,
        })
        .unwrap();
    tasks
        .create(TaskDraft {
            title: "open".to_string(),
            description: None,
            priority: Priority::Low,
            due_date: None,
        })
        .unwrap();
    tasks.toggle_complete(done.id);

    let mut goals = GoalService::detached();
    let base = GoalDraft {
        title: "active".to_string(),
        description: String::new(),
        category: GoalCategory::Personal,
        priority: Priority::Medium,
        status: GoalStatus::InProgress,
        start_date: now,
        target_date: now + Duration::days(30),
        progress: 0,
        milestones: Vec::new(),
        tags: Vec::new(),
    };
    goals.add(base.clone()).unwrap();
    let mut finished = base.clone();
    finished.title = "finished".to_string();
    finished.status = GoalStatus::Completed;
    goals.add(finished).unwrap();
    let mut paused = base;
    paused.title = "paused".to_string();
    paused.status = GoalStatus::Paused;
    goals.add(paused).unwrap();

    let mut events = EventService::detached();
    events
        .schedule(EventDraft {
            title: "past".to_string(),
            description: None,
            start: now - Duration::hours(2),
            end: now - Duration::hours(1),
            all_day: false,
            location: None,
            attendees: Vec::new(),
            tags: Vec::new(),
            category: None,
        })
        .unwrap();
    events
        .schedule(EventDraft {
            title: "upcoming".to_string(),
            description: None,
            start: now + Duration::hours(1),
            end: now + Duration::hours(2),
            all_day: false,
            location: None,
            attendees: Vec::new(),
            tags: Vec::new(),
            category: None,
        })
        .unwrap();

    let summary = summarize(notes.all(), goals.all(), tasks.all(), events.all(), now);
    assert_eq!(summary.total_tasks, 2);
    assert_eq!(summary.completed_tasks, 1);
    assert_eq!(summary.completion_rate, 50);
    assert_eq!(summary.total_notes, 1);
    assert_eq!(summary.upcoming_events, 1);
    assert_eq!(summary.active_goals, 1);
    assert_eq!(summary.completed_goals, 1);
}

#[test]
fn completion_rate_is_zero_without_tasks() {
    let summary = summarize(&[], &[], &[], &[], Utc::now());
    assert_eq!(summary.completion_rate, 0);
    assert_eq!(summary.total_tasks, 0);
}

#[test]
fn completion_rate_rounds_to_nearest_integer() {
    let mut tasks = TaskService::detached();
    for index in 0..3 {
        tasks
            .create(TaskDraft {
                title: format!("task {index}"),
                description: None,
                priority: Priority::Low,
                due_date: None,
            })
            .unwrap();
    }
    let ids: Vec<_> = tasks.all().iter().map(|task| task.id).collect();
    tasks.toggle_complete(ids[0]);
    tasks.toggle_complete(ids[1]);

    let summary = summarize(&[], &[], tasks.all(), &[], Utc::now());
    assert_eq!(summary.completion_rate, 67);
}

use chrono::{Duration, Utc};
use lifehub_core::{
    GoalCategory, GoalDraft, GoalPatch, GoalQuery, GoalService, GoalStatus, MilestoneDraft,
    MilestonePatch, Priority, ValidationError,
};
use uuid::Uuid;

fn draft(title: &str, milestone_count: usize) -> GoalDraft {
    let now = Utc::now();
    GoalDraft {
        title: title.to_string(),
        description: format!("{title} description"),
        category: GoalCategory::Learning,
        priority: Priority::High,
        status: GoalStatus::NotStarted,
        start_date: now,
        target_date: now + Duration::days(90),
        progress: 0,
        milestones: (0..milestone_count)
            .map(|index| MilestoneDraft {
                title: format!("step {index}"),
                description: None,
                target_date: now + Duration::days(30 * (index as i64 + 1)),
                order: index as i32 + 1,
            })
            .collect(),
        tags: vec!["focus".to_string()],
    }
}

fn complete() -> MilestonePatch {
    MilestonePatch {
        is_completed: Some(true),
        completed_date: Some(Some(Utc::now())),
        ..MilestonePatch::default()
    }
}

#[test]
fn milestone_completion_recomputes_progress_in_steps() {
    let mut service = GoalService::detached();
    let goal = service.add(draft("Learn Rust", 2)).unwrap();
    assert_eq!(goal.progress, 0);

    service.update_milestone(goal.id, goal.milestones[0].id, complete());
    assert_eq!(service.get(goal.id).unwrap().progress, 50);

    service.update_milestone(goal.id, goal.milestones[1].id, complete());
    assert_eq!(service.get(goal.id).unwrap().progress, 100);
}

#[test]
fn progress_rounds_to_nearest_integer() {
    let mut service = GoalService::detached();
    let goal = service.add(draft("Thirds", 3)).unwrap();

    service.update_milestone(goal.id, goal.milestones[0].id, complete());
    assert_eq!(service.get(goal.id).unwrap().progress, 33);

    service.update_milestone(goal.id, goal.milestones[1].id, complete());
    assert_eq!(service.get(goal.id).unwrap().progress, 67);
}

#[test]
fn uncompleting_a_milestone_lowers_progress() {
    let mut service = GoalService::detached();
    let goal = service.add(draft("Back and forth", 2)).unwrap();
    service.update_milestone(goal.id, goal.milestones[0].id, complete());
    service.update_milestone(goal.id, goal.milestones[1].id, complete());
    assert_eq!(service.get(goal.id).unwrap().progress, 100);

    service.update_milestone(
        goal.id,
        goal.milestones[0].id,
        MilestonePatch {
            is_completed: Some(false),
            completed_date: Some(None),
            ..MilestonePatch::default()
        },
    );
    let after = service.get(goal.id).unwrap();
    assert_eq!(after.progress, 50);
    assert!(after.milestones[0].completed_date.is_none());
}

#[test]
fn update_milestone_with_unknown_ids_is_a_noop() {
    let mut service = GoalService::detached();
    let goal = service.add(draft("Stable", 2)).unwrap();
    let before = service.get(goal.id).unwrap().clone();

    service.update_milestone(Uuid::new_v4(), goal.milestones[0].id, complete());
    service.update_milestone(goal.id, Uuid::new_v4(), complete());

    assert_eq!(service.get(goal.id).unwrap(), &before);
}

#[test]
fn goal_without_milestones_keeps_manual_progress() {
    let mut service = GoalService::detached();
    let mut no_milestones = draft("Manual", 0);
    no_milestones.progress = 40;
    let goal = service.add(no_milestones).unwrap();

    service.update_milestone(goal.id, Uuid::new_v4(), complete());
    assert_eq!(service.get(goal.id).unwrap().progress, 40);
}

#[test]
fn update_milestone_refreshes_updated_at() {
    let mut service = GoalService::detached();
    let goal = service.add(draft("Timestamps", 1)).unwrap();
    let before = service.get(goal.id).unwrap().updated_at;

    service.update_milestone(goal.id, goal.milestones[0].id, complete());
    assert!(service.get(goal.id).unwrap().updated_at >= before);
}

#[test]
fn manual_progress_override_is_accepted_without_revalidation() {
    let mut service = GoalService::detached();
    let goal = service.add(draft("Override", 2)).unwrap();
    service.update_milestone(goal.id, goal.milestones[0].id, complete());

    service.update(
        goal.id,
        GoalPatch {
            progress: Some(10),
            ..GoalPatch::default()
        },
    );
    assert_eq!(service.get(goal.id).unwrap().progress, 10);
}

#[test]
fn status_and_progress_are_never_cross_validated() {
    let mut service = GoalService::detached();
    let goal = service.add(draft("Loose", 2)).unwrap();

    service.update(
        goal.id,
        GoalPatch {
            status: Some(GoalStatus::Completed),
            ..GoalPatch::default()
        },
    );
    let updated = service.get(goal.id).unwrap();
    assert_eq!(updated.status, GoalStatus::Completed);
    assert_eq!(updated.progress, 0);

    service.update(
        goal.id,
        GoalPatch {
            status: Some(GoalStatus::NotStarted),
            progress: Some(100),
            ..GoalPatch::default()
        },
    );
    assert_eq!(service.get(goal.id).unwrap().status, GoalStatus::NotStarted);
}

#[test]
fn draft_validation_rejects_blank_title_and_excess_progress() {
    let mut service = GoalService::detached();

    let mut blank = draft("ok", 0);
    blank.title = " ".to_string();
    assert_eq!(
        service.add(blank).unwrap_err(),
        ValidationError::MissingField("title")
    );

    let mut excess = draft("ok", 0);
    excess.progress = 150;
    assert!(matches!(
        service.add(excess).unwrap_err(),
        ValidationError::OutOfRange {
            field: "progress",
            value: 150
        }
    ));
    assert!(service.all().is_empty());
}

#[test]
fn goal_filters_combine_category_status_priority_and_search() {
    let mut service = GoalService::detached();
    let mut health = draft("Run a marathon", 0);
    health.category = GoalCategory::Health;
    health.priority = Priority::Medium;
    health.status = GoalStatus::InProgress;
    service.add(health).unwrap();

    let mut learning = draft("Learn typing", 0);
    learning.status = GoalStatus::InProgress;
    service.add(learning).unwrap();

    service.set_filter(GoalQuery {
        category: Some(GoalCategory::Health),
        ..GoalQuery::default()
    });
    assert_eq!(service.goals().len(), 1);
    assert_eq!(service.goals()[0].title, "Run a marathon");

    service.set_filter(GoalQuery {
        status: Some(GoalStatus::InProgress),
        priority: Some(Priority::High),
        ..GoalQuery::default()
    });
    assert_eq!(service.goals().len(), 1);
    assert_eq!(service.goals()[0].title, "Learn typing");

    service.set_filter(GoalQuery {
        search: "MARATHON".to_string(),
        ..GoalQuery::default()
    });
    assert_eq!(service.goals().len(), 1);

    service.clear_filter();
    assert_eq!(service.goals().len(), 2);
}

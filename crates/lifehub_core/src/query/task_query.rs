//! Task projection: completion visibility and priority/due-date sorting.

use crate::model::task::Task;
use crate::model::Priority;
use std::cmp::Ordering;

/// Which completion states the task view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskVisibility {
    All,
    Active,
    Completed,
}

/// Field the task view sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSortKey {
    /// High before medium before low.
    Priority,
    /// Earliest due date first; tasks without one go last.
    DueDate,
}

/// Filter criteria for the tasks view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskQuery {
    pub visibility: TaskVisibility,
    pub sort_by: TaskSortKey,
}

impl Default for TaskQuery {
    fn default() -> Self {
        Self {
            visibility: TaskVisibility::All,
            sort_by: TaskSortKey::Priority,
        }
    }
}

/// Projects the filtered, sorted view of `tasks`.
pub fn project_tasks(tasks: &[Task], query: &TaskQuery) -> Vec<Task> {
    let mut matched: Vec<Task> = tasks
        .iter()
        .filter(|task| match query.visibility {
            TaskVisibility::All => true,
            TaskVisibility::Active => !task.completed,
            TaskVisibility::Completed => task.completed,
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| match query.sort_by {
        TaskSortKey::Priority => priority_rank(a.priority).cmp(&priority_rank(b.priority)),
        TaskSortKey::DueDate => match (a.due_date, b.due_date) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
        },
    });

    matched
}

fn priority_rank(priority: Priority) -> u8 {
    match priority {
        Priority::High => 0,
        Priority::Medium => 1,
        Priority::Low => 2,
    }
}

//! Cross-feature dashboard summary.

use crate::model::event::CalendarEvent;
use crate::model::goal::{Goal, GoalStatus};
use crate::model::note::Note;
use crate::model::task::Task;
use crate::model::Timestamp;

/// Aggregate counts shown on the productivity overview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// Percentage of completed tasks, rounded; 0 when there are no tasks.
    pub completion_rate: u8,
    pub total_notes: usize,
    /// Events starting strictly after `now`.
    pub upcoming_events: usize,
    pub active_goals: usize,
    pub completed_goals: usize,
}

/// Computes the overview across all feature collections.
pub fn summarize(
    notes: &[Note],
    goals: &[Goal],
    tasks: &[Task],
    events: &[CalendarEvent],
    now: Timestamp,
) -> DashboardSummary {
    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|task| task.completed).count();
    let completion_rate = if total_tasks == 0 {
        0
    } else {
        ((completed_tasks as f64 / total_tasks as f64) * 100.0).round() as u8
    };

    DashboardSummary {
        total_tasks,
        completed_tasks,
        completion_rate,
        total_notes: notes.len(),
        upcoming_events: events.iter().filter(|event| event.start > now).count(),
        active_goals: goals
            .iter()
            .filter(|goal| goal.status == GoalStatus::InProgress)
            .count(),
        completed_goals: goals
            .iter()
            .filter(|goal| goal.status == GoalStatus::Completed)
            .count(),
    }
}

//! Goal projection: category/status/priority/text filtering.
//!
//! Goals keep their insertion order; the goals view has no sort control.

use crate::model::goal::{Goal, GoalCategory, GoalStatus};
use crate::model::Priority;
use crate::query::contains_ci;

/// Filter criteria for the goals view. Unset fields match all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalQuery {
    pub category: Option<GoalCategory>,
    pub status: Option<GoalStatus>,
    pub priority: Option<Priority>,
    /// Substring matched against the title only.
    pub search: String,
}

/// Projects the filtered view of `goals`, preserving insertion order.
pub fn project_goals(goals: &[Goal], query: &GoalQuery) -> Vec<Goal> {
    goals
        .iter()
        .filter(|goal| matches(goal, query))
        .cloned()
        .collect()
}

fn matches(goal: &Goal, query: &GoalQuery) -> bool {
    if let Some(category) = query.category {
        if goal.category != category {
            return false;
        }
    }
    if let Some(status) = query.status {
        if goal.status != status {
            return false;
        }
    }
    if let Some(priority) = query.priority {
        if goal.priority != priority {
            return false;
        }
    }
    if !query.search.is_empty() && !contains_ci(&goal.title, &query.search) {
        return false;
    }
    true
}

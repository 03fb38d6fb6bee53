//! Goal progress computation.

use crate::models::GoalProgress;

/// Compare a computed weight against an optional goal, in grams.
///
/// Absence of a goal propagates as `None`; a goal of exactly zero is a
/// legal aspirational target and produces a real result. The percentage is
/// clamped to 100 so exceeding the goal never reports over-100 progress;
/// `is_over_goal` carries that information instead, and `delta` is always
/// the non-negative distance from the goal.
pub fn goal_progress(current: f64, goal: Option<f64>) -> Option<GoalProgress> {
    let goal = goal?;

    let percentage = if goal > 0.0 {
        (current / goal * 100.0).min(100.0)
    } else {
        // Zero goal: any weight is at or past it.
        100.0
    };

    Some(GoalProgress {
        percentage,
        is_over_goal: current > goal,
        delta: (current - goal).abs(),
    })
}

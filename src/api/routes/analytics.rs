use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::{round1, ApiError};
use crate::calculate::{compare_lists, goal_progress, weight_distribution};
use crate::models::{GoalProgress, ListComparison, WeightBucket};
use crate::storage::read_weight_goal;

use super::CatalogSnapshot;

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    /// Library-wide unit-weight histogram over the whole catalog
    pub distribution: Vec<WeightBucket>,

    /// Cross-list ranking, extremes, averages and trend
    pub comparison: ListComparison,

    /// Progress of the lightest list's base weight against the base goal
    pub base_goal: Option<GoalProgress>,

    /// Progress of the lightest list's total weight against the total goal
    pub total_goal: Option<GoalProgress>,

    /// Mean entry count across all lists, empty lists included
    pub average_items_per_list: Option<f64>,
}

fn rounded(progress: GoalProgress) -> GoalProgress {
    GoalProgress {
        percentage: round1(progress.percentage),
        ..progress
    }
}

/// Library-wide analytics: distribution, comparison, goal progress.
pub async fn library_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, ApiError> {
    let snapshot = CatalogSnapshot::load(&state.storage)?;

    let distribution = weight_distribution(&snapshot.gear);

    let average_items_per_list = if snapshot.lists.is_empty() {
        None
    } else {
        let total_items: u32 = snapshot.lists.iter().map(|l| l.items.len() as u32).sum();
        Some(round1(f64::from(total_items) / snapshot.lists.len() as f64))
    };

    let mut comparison = compare_lists(snapshot.ranked_entries()?);
    comparison.average_base_weight = comparison.average_base_weight.map(round1);

    // Goals are measured against the owner's best (lightest) list.
    let goal = read_weight_goal(&state.storage)?.unwrap_or_default();
    let (base_goal, total_goal) = match &comparison.lightest {
        Some(lightest) => (
            goal_progress(lightest.stats.base_weight, goal.base_weight_goal).map(rounded),
            goal_progress(lightest.stats.total_weight, goal.total_weight_goal).map(rounded),
        ),
        None => (None, None),
    };

    Ok(Json(AnalyticsResponse {
        distribution,
        comparison,
        base_goal,
        total_goal,
        average_items_per_list,
    }))
}

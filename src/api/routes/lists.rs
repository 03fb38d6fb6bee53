use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::{round1, ApiError};
use crate::calculate::{aggregate_list, category_breakdown, goal_progress};
use crate::models::{CategoryWeight, GoalProgress, ListStats};
use crate::storage::read_weight_goal;

use super::CatalogSnapshot;

#[derive(Debug, Serialize)]
pub struct ListSummary {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub stats: ListStats,
}

#[derive(Debug, Serialize)]
pub struct ListsResponse {
    pub lists: Vec<ListSummary>,
}

/// Summary stats for every pack list.
pub async fn list_summaries(
    State(state): State<AppState>,
) -> Result<Json<ListsResponse>, ApiError> {
    let snapshot = CatalogSnapshot::load(&state.storage)?;
    let index = snapshot.gear_index();

    let mut lists: Vec<ListSummary> = Vec::with_capacity(snapshot.lists.len());
    for list in &snapshot.lists {
        let stats = aggregate_list(list, &index)?;
        lists.push(ListSummary {
            id: list.id.to_string(),
            name: list.name.clone(),
            created_at: list.created_at.to_rfc3339(),
            stats,
        });
    }
    lists.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Json(ListsResponse { lists }))
}

#[derive(Debug, Serialize)]
pub struct ListDetailResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub stats: ListStats,
    pub categories: Vec<CategoryWeight>,
    pub base_goal: Option<GoalProgress>,
    pub total_goal: Option<GoalProgress>,
}

fn rounded(progress: GoalProgress) -> GoalProgress {
    GoalProgress {
        percentage: round1(progress.percentage),
        ..progress
    }
}

/// One pack list with category breakdown and goal progress.
pub async fn list_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListDetailResponse>, ApiError> {
    let snapshot = CatalogSnapshot::load(&state.storage)?;
    let index = snapshot.gear_index();

    let list = snapshot
        .lists
        .iter()
        .find(|l| l.id.as_str() == id)
        .ok_or_else(|| ApiError::NotFound(format!("pack list {id}")))?;

    let stats = aggregate_list(list, &index)?;
    let mut categories = category_breakdown(list, &index, &snapshot.categories)?;
    for slice in &mut categories {
        slice.percent_of_total = round1(slice.percent_of_total);
    }

    let goal = read_weight_goal(&state.storage)?.unwrap_or_default();
    let base_goal = goal_progress(stats.base_weight, goal.base_weight_goal).map(rounded);
    let total_goal = goal_progress(stats.total_weight, goal.total_weight_goal).map(rounded);

    Ok(Json(ListDetailResponse {
        id: list.id.to_string(),
        name: list.name.clone(),
        description: list.description.clone(),
        created_at: list.created_at.to_rfc3339(),
        stats,
        categories,
        base_goal,
        total_goal,
    }))
}

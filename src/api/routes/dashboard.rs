use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::compare_lists;

use super::CatalogSnapshot;

#[derive(Debug, Serialize)]
pub struct LightestList {
    pub id: String,
    pub name: String,
    pub base_weight: f64,
    pub total_weight: f64,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub gear_count: u32,
    pub category_count: u32,
    pub list_count: u32,
    pub lightest_list: Option<LightestList>,
}

/// Dashboard summary: entity counts and the lightest non-empty list.
pub async fn dashboard_summary(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let snapshot = CatalogSnapshot::load(&state.storage)?;

    let comparison = compare_lists(snapshot.ranked_entries()?);
    let lightest_list = comparison.lightest.map(|l| LightestList {
        id: l.list_id.to_string(),
        name: l.name,
        base_weight: l.stats.base_weight,
        total_weight: l.stats.total_weight,
    });

    Ok(Json(DashboardResponse {
        gear_count: snapshot.gear.len() as u32,
        category_count: snapshot.categories.len() as u32,
        list_count: snapshot.lists.len() as u32,
        lightest_list,
    }))
}

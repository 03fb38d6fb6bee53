use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{ApiError, Pagination, PaginationMeta};

use super::CatalogSnapshot;

#[derive(Debug, Deserialize)]
pub struct GearParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GearItemRow {
    pub id: String,
    pub name: String,
    pub weight: f64,
    pub quantity: u32,
    pub is_worn: bool,
    pub is_consumable: bool,
    pub category_id: String,
    pub category_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GearResponse {
    pub items: Vec<GearItemRow>,
    pub pagination: PaginationMeta,
}

/// Paginated gear catalog listing with resolved category names.
pub async fn list_gear(
    State(state): State<AppState>,
    Query(params): Query<GearParams>,
) -> Result<Json<GearResponse>, ApiError> {
    let snapshot = CatalogSnapshot::load(&state.storage)?;

    let category_names: HashMap<&str, &str> = snapshot
        .categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let mut gear = snapshot.gear;
    if let Some(ref filter) = params.category {
        let wanted = filter.to_lowercase();
        gear.retain(|g| {
            category_names
                .get(g.category_id.as_str())
                .map(|name| name.to_lowercase() == wanted)
                .unwrap_or(false)
        });
    }
    gear.sort_by(|a, b| a.name.cmp(&b.name));

    let pagination = Pagination::new(params.page, params.page_size);
    let total = gear.len() as u32;
    let meta = PaginationMeta::new(&pagination, total);

    let items: Vec<GearItemRow> = gear
        .into_iter()
        .skip(pagination.offset() as usize)
        .take(pagination.page_size as usize)
        .map(|g| GearItemRow {
            id: g.id.to_string(),
            name: g.name,
            weight: g.weight,
            quantity: g.quantity,
            is_worn: g.is_worn,
            is_consumable: g.is_consumable,
            category_id: g.category_id.to_string(),
            category_name: category_names
                .get(g.category_id.as_str())
                .map(|n| n.to_string()),
        })
        .collect();

    Ok(Json(GearResponse {
        items,
        pagination: meta,
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::routes::tests::{get_json, setup_test_state, write_jsonl};
    use crate::api::build_router;
    use crate::models::{Category, GearItem};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_gear() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());
        let catalog_dir = tmp.path().join("catalog");

        let shelter = Category::new("Shelter".to_string(), "#4f8a5b".to_string());
        let tent = GearItem::new("Tent".to_string(), 880.0, shelter.id.clone());
        let stove = GearItem::new("Stove".to_string(), 85.0, shelter.id.clone());

        write_jsonl(&catalog_dir.join("categories.jsonl"), &[&shelter]);
        write_jsonl(&catalog_dir.join("gear_items.jsonl"), &[&tent, &stove]);

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/gear").await;

        assert_eq!(status, StatusCode::OK);
        let items = json["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        // Sorted by name.
        assert_eq!(items[0]["name"], "Stove");
        assert_eq!(items[0]["category_name"], "Shelter");
        assert_eq!(json["pagination"]["total_items"], 2);
    }

    #[tokio::test]
    async fn test_list_gear_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/gear").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["items"].as_array().unwrap().is_empty());
        assert_eq!(json["pagination"]["total_items"], 0);
    }

    #[tokio::test]
    async fn test_list_gear_category_filter() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());
        let catalog_dir = tmp.path().join("catalog");

        let shelter = Category::new("Shelter".to_string(), "#4f8a5b".to_string());
        let cooking = Category::new("Cooking".to_string(), "#b3552e".to_string());
        let tent = GearItem::new("Tent".to_string(), 880.0, shelter.id.clone());
        let stove = GearItem::new("Stove".to_string(), 85.0, cooking.id.clone());

        write_jsonl(&catalog_dir.join("categories.jsonl"), &[&shelter, &cooking]);
        write_jsonl(&catalog_dir.join("gear_items.jsonl"), &[&tent, &stove]);

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/gear?category=cooking").await;

        assert_eq!(status, StatusCode::OK);
        let items = json["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Stove");
    }

    #[tokio::test]
    async fn test_list_gear_pagination() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_test_state(tmp.path());
        let catalog_dir = tmp.path().join("catalog");

        let shelter = Category::new("Shelter".to_string(), "#4f8a5b".to_string());
        let items: Vec<GearItem> = (0..5)
            .map(|i| GearItem::new(format!("Item {i}"), 100.0, shelter.id.clone()))
            .collect();
        let refs: Vec<&GearItem> = items.iter().collect();

        write_jsonl(&catalog_dir.join("categories.jsonl"), &[&shelter]);
        write_jsonl(&catalog_dir.join("gear_items.jsonl"), &refs);

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/gear?page=2&page_size=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
        assert_eq!(json["pagination"]["total_pages"], 3);
        assert_eq!(json["pagination"]["has_prev"], true);
    }
}

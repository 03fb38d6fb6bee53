//! Per-category weight breakdown for one pack list.

use std::collections::HashMap;

use crate::models::{Category, CategoryWeight, PackList};

use super::{effective_weight, CalculateError, GearIndex};

/// Group a list's included entries by category.
///
/// Each distinct category present among included entries yields one record
/// with its weight, entry count, and share of the list's total weight.
/// The category weights always sum to exactly the list's total weight.
/// With a zero total every share is 0, never NaN. Records are sorted by
/// weight descending, ties broken by category name ascending so output is
/// deterministic.
pub fn category_breakdown(
    list: &PackList,
    gear: &GearIndex,
    categories: &[Category],
) -> Result<Vec<CategoryWeight>, CalculateError> {
    let cats_by_id: HashMap<&str, &Category> =
        categories.iter().map(|c| (c.id.as_str(), c)).collect();

    // category id -> (weight, entry count)
    let mut slices: HashMap<&str, (f64, u32)> = HashMap::new();
    let mut total_weight = 0.0;

    for entry in &list.items {
        let item =
            gear.get(&entry.gear_item_id)
                .ok_or_else(|| CalculateError::MissingGearItem {
                    list: list.name.clone(),
                    gear_item: entry.gear_item_id.clone(),
                })?;

        if !entry.is_included {
            continue;
        }

        let category =
            cats_by_id
                .get(item.category_id.as_str())
                .ok_or_else(|| CalculateError::MissingCategory {
                    gear_item: item.name.clone(),
                    category: item.category_id.clone(),
                })?;

        let weight = effective_weight(entry, item);
        let slice = slices.entry(category.id.as_str()).or_default();
        slice.0 += weight;
        slice.1 += 1;
        total_weight += weight;
    }

    let mut breakdown: Vec<CategoryWeight> = slices
        .into_iter()
        .map(|(cat_id, (weight, item_count))| {
            let category = cats_by_id[cat_id];
            let percent_of_total = if total_weight > 0.0 {
                weight / total_weight * 100.0
            } else {
                0.0
            };
            CategoryWeight {
                category_id: category.id.clone(),
                name: category.name.clone(),
                color: category.color.clone(),
                weight,
                item_count,
                percent_of_total,
            }
        })
        .collect();

    breakdown.sort_by(|a, b| b.weight.total_cmp(&a.weight).then_with(|| a.name.cmp(&b.name)));

    Ok(breakdown)
}

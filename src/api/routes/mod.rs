pub mod analytics;
pub mod dashboard;
pub mod gear;
pub mod lists;

use crate::api::{dedup_by_id, ApiError};
use crate::calculate::{aggregate_list, GearIndex};
use crate::models::{Category, GearItem, PackList, RankedList};
use crate::storage::{EntityType, JsonlReader, StorageConfig};

/// One consistent snapshot of the stored entity graph.
///
/// Every handler reads a fresh snapshot and recomputes from it rather than
/// patching a previous result; incremental patching is how drift bugs
/// start.
pub struct CatalogSnapshot {
    pub gear: Vec<GearItem>,
    pub categories: Vec<Category>,
    pub lists: Vec<PackList>,
}

impl CatalogSnapshot {
    /// Load and dedup the full catalog from storage.
    pub fn load(storage: &StorageConfig) -> Result<Self, ApiError> {
        let gear = JsonlReader::<GearItem>::for_entity(storage, EntityType::GearItem).read_all()?;
        let categories =
            JsonlReader::<Category>::for_entity(storage, EntityType::Category).read_all()?;
        let lists = JsonlReader::<PackList>::for_entity(storage, EntityType::PackList).read_all()?;

        Ok(Self {
            gear: dedup_by_id(gear, |g| g.id.as_str()),
            categories: dedup_by_id(categories, |c| c.id.as_str()),
            lists: dedup_by_id(lists, |l| l.id.as_str()),
        })
    }

    /// Build the gear lookup index for this snapshot.
    pub fn gear_index(&self) -> GearIndex<'_> {
        GearIndex::from_items(&self.gear)
    }

    /// Aggregate every list into a tagged stats entry for ranking.
    pub fn ranked_entries(&self) -> Result<Vec<RankedList>, ApiError> {
        let index = self.gear_index();
        self.lists
            .iter()
            .map(|list| {
                let stats = aggregate_list(list, &index)?;
                Ok(RankedList {
                    list_id: list.id.clone(),
                    name: list.name.clone(),
                    created_at: list.created_at,
                    stats,
                })
            })
            .collect()
    }
}

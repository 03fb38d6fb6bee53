//! Pack list model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, GearItemId, PackListId};

/// A reference from a pack list to a catalog gear item.
///
/// The entry's quantity overrides (does not multiply) the gear item's
/// catalog quantity for this list. Excluded entries stay on the list for
/// record keeping but contribute zero weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackListItem {
    /// Catalog item this entry refers to
    pub gear_item_id: GearItemId,

    /// Quantity carried on this trip
    pub quantity: u32,

    /// Whether the entry counts toward the list's weight totals
    pub is_included: bool,
}

impl PackListItem {
    pub fn new(gear_item_id: GearItemId) -> Self {
        Self {
            gear_item_id,
            quantity: 1,
            is_included: true,
        }
    }

    /// Builder method to set the quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Builder method to exclude the entry from weight totals.
    pub fn excluded(mut self) -> Self {
        self.is_included = false;
        self
    }
}

/// A trip-specific subset of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackList {
    /// Unique identifier (derived from name)
    pub id: PackListId,

    /// List name (e.g. "GR20 June 2026")
    pub name: String,

    /// Optional trip notes
    pub description: Option<String>,

    /// Entries referencing catalog items; order carries no meaning
    pub items: Vec<PackListItem>,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl PackList {
    /// Create a new PackList with auto-generated ID.
    pub fn new(name: String) -> Self {
        let id = EntityId::generate(&["pack_list", &name]);
        Self {
            id,
            name,
            description: None,
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// Builder method to set the entries.
    pub fn with_items(mut self, items: Vec<PackListItem>) -> Self {
        self.items = items;
        self
    }

    /// Builder method to override the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

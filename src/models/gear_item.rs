//! Gear item model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CategoryId, EntityId, GearItemId};

/// A single piece of owned gear in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearItem {
    /// Unique identifier (derived from name + category)
    pub id: GearItemId,

    /// Item name
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Weight in grams per single unit. Zero is a valid weight
    /// (a digital map weighs nothing).
    pub weight: f64,

    /// Default quantity when referenced without an override
    pub quantity: u32,

    /// Worn on the body rather than carried in the pack
    pub is_worn: bool,

    /// Used up during the trip (food, fuel, ...)
    pub is_consumable: bool,

    /// Category this item belongs to
    pub category_id: CategoryId,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl GearItem {
    /// Create a new GearItem with auto-generated ID.
    pub fn new(name: String, weight: f64, category_id: CategoryId) -> Self {
        let id = EntityId::generate(&["gear", &name, category_id.as_str()]);
        Self {
            id,
            name,
            description: None,
            weight,
            quantity: 1,
            is_worn: false,
            is_consumable: false,
            category_id,
            created_at: Utc::now(),
        }
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    /// Builder method to set the default quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Builder method to mark the item as worn.
    pub fn worn(mut self) -> Self {
        self.is_worn = true;
        self
    }

    /// Builder method to mark the item as consumable.
    pub fn consumable(mut self) -> Self {
        self.is_consumable = true;
        self
    }
}

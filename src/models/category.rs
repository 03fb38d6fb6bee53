//! Gear category model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CategoryId, EntityId};

/// A gear category (shelter, sleep system, cooking, ...).
///
/// Many gear items reference one category. Categories are never created
/// implicitly; they exist only when written to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier (derived from name)
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Display color (e.g. "#4f8a5b")
    pub color: String,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new Category with auto-generated ID.
    pub fn new(name: String, color: String) -> Self {
        let id = EntityId::generate(&["category", &name]);
        Self {
            id,
            name,
            color,
            created_at: Utc::now(),
        }
    }
}

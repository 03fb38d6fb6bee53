//! Derived statistics models.
//!
//! Plain records produced by the weight aggregation engine, suitable for
//! direct JSON serialization. All weights are grams; percentages are plain
//! numbers, never pre-formatted strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CategoryId, PackListId};

/// Weight roll-up for one pack list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListStats {
    /// Sum of effective weights of included entries
    pub total_weight: f64,

    /// Included entries that are neither worn nor consumable
    pub base_weight: f64,

    /// Included entries flagged worn
    pub worn_weight: f64,

    /// Included entries flagged consumable
    pub consumable_weight: f64,

    /// Number of entries on the list, included or not
    pub item_count: u32,
}

/// Per-category slice of a pack list's weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWeight {
    pub category_id: CategoryId,

    pub name: String,

    pub color: String,

    /// Summed effective weight of included entries in this category
    pub weight: f64,

    /// Number of included entries (list rows, not catalog quantities)
    pub item_count: u32,

    /// Share of the list's total weight; 0 when the total is 0
    pub percent_of_total: f64,
}

/// One fixed weight range of the library-wide histogram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightBucket {
    /// Human-readable range label (e.g. "100-250g")
    pub label: String,

    /// Inclusive lower bound in grams
    pub min_weight: f64,

    /// Exclusive upper bound in grams; None for the open-ended last bucket
    pub max_weight: Option<f64>,

    /// Catalog items whose unit weight falls in this range
    pub count: u32,
}

/// Progress against a weight goal.
///
/// Only produced when a goal is actually set; an unset goal propagates as
/// absence, never as zero progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Progress toward the goal, clamped to at most 100
    pub percentage: f64,

    /// Whether the current weight exceeds the goal
    pub is_over_goal: bool,

    /// Absolute distance from the goal; sign is carried by `is_over_goal`
    pub delta: f64,
}

/// A pack list's stats tagged with its identity, for ranking and trends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedList {
    pub list_id: PackListId,

    pub name: String,

    pub created_at: DateTime<Utc>,

    pub stats: ListStats,
}

/// Comparison of all of an owner's pack lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListComparison {
    /// All lists, lightest base weight first; creation-time tie-break
    pub ranking: Vec<RankedList>,

    /// Lightest list among those with non-zero base weight
    pub lightest: Option<RankedList>,

    /// Heaviest list among those with non-zero base weight
    pub heaviest: Option<RankedList>,

    /// Mean base weight over lists with non-zero base weight
    pub average_base_weight: Option<f64>,

    /// Heaviest minus lightest base weight
    pub spread: Option<f64>,

    /// All lists ordered by creation time ascending, for charting
    pub trend: Vec<RankedList>,
}

impl ListComparison {
    /// Get a ranked entry by list ID.
    pub fn get(&self, list_id: &PackListId) -> Option<&RankedList> {
        self.ranking.iter().find(|r| &r.list_id == list_id)
    }
}

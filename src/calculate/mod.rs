//! Pack weight aggregation engine.
//!
//! Computes derived weight metrics from catalog and pack list data:
//! - Per-list weight roll-ups (total / base / worn / consumable)
//! - Category breakdowns with share-of-total
//! - Library-wide weight distribution histogram
//! - Goal progress
//! - Cross-list ranking and comparison
//!
//! Every function here is pure: no I/O, no shared state, one consistent
//! entity-graph snapshot in, plain records out. All weights are grams.
//! The only error path is a dangling reference in the supplied graph,
//! which is a contract violation by the caller.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{CategoryId, GearItem, GearItemId, PackListItem};

mod aggregate;
mod breakdown;
mod distribution;
mod goal;
mod ranking;

pub use aggregate::aggregate_list;
pub use breakdown::category_breakdown;
pub use distribution::{weight_distribution, BUCKET_COUNT};
pub use goal::goal_progress;
pub use ranking::compare_lists;

/// Errors raised by the aggregation engine.
///
/// Degenerate inputs (empty lists, zero totals, all-excluded lists) are
/// never errors; only an unresolved reference in the entity graph is.
#[derive(Debug, Error)]
pub enum CalculateError {
    #[error("pack list '{list}' references unknown gear item {gear_item}")]
    MissingGearItem { list: String, gear_item: GearItemId },

    #[error("gear item '{gear_item}' references unknown category {category}")]
    MissingCategory {
        gear_item: String,
        category: CategoryId,
    },
}

/// How a gear item contributes to a list's weight totals.
///
/// Worn and consumable are independent flags; an item carrying both is
/// excluded from base weight on the strength of either flag and counts
/// toward both the worn and consumable sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightClass {
    Base,
    Worn,
    Consumable,
    WornConsumable,
}

impl WeightClass {
    /// Classify a gear item by its flags.
    pub fn of(item: &GearItem) -> Self {
        match (item.is_worn, item.is_consumable) {
            (false, false) => WeightClass::Base,
            (true, false) => WeightClass::Worn,
            (false, true) => WeightClass::Consumable,
            (true, true) => WeightClass::WornConsumable,
        }
    }

    /// Whether the item contributes to base weight.
    pub fn is_base(self) -> bool {
        self == WeightClass::Base
    }

    /// Whether the item contributes to worn weight.
    pub fn counts_as_worn(self) -> bool {
        matches!(self, WeightClass::Worn | WeightClass::WornConsumable)
    }

    /// Whether the item contributes to consumable weight.
    pub fn counts_as_consumable(self) -> bool {
        matches!(self, WeightClass::Consumable | WeightClass::WornConsumable)
    }
}

/// A pack list entry's contribution to weight totals.
///
/// Zero when the entry is excluded; otherwise unit weight times the
/// entry's own quantity override. A malformed quantity of zero is
/// sanitized to one — this is a read path over already-validated storage.
/// Negative weights are propagated as-is so an upstream data bug stays
/// visible instead of being silently coerced away.
pub fn effective_weight(entry: &PackListItem, item: &GearItem) -> f64 {
    if !entry.is_included {
        return 0.0;
    }
    item.weight * f64::from(entry.quantity.max(1))
}

/// Id-keyed lookup view over a materialized gear catalog.
pub struct GearIndex<'a> {
    by_id: HashMap<&'a str, &'a GearItem>,
}

impl<'a> GearIndex<'a> {
    /// Build an index over a catalog slice.
    pub fn from_items(items: &'a [GearItem]) -> Self {
        Self {
            by_id: items.iter().map(|i| (i.id.as_str(), i)).collect(),
        }
    }

    /// Look up a gear item by ID.
    pub fn get(&self, id: &GearItemId) -> Option<&'a GearItem> {
        self.by_id.get(id.as_str()).copied()
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(weight: f64, worn: bool, consumable: bool) -> GearItem {
        let mut it = GearItem::new("test".to_string(), weight, "cat".into());
        it.is_worn = worn;
        it.is_consumable = consumable;
        it
    }

    #[test]
    fn test_weight_class_of() {
        assert_eq!(WeightClass::of(&item(100.0, false, false)), WeightClass::Base);
        assert_eq!(WeightClass::of(&item(100.0, true, false)), WeightClass::Worn);
        assert_eq!(
            WeightClass::of(&item(100.0, false, true)),
            WeightClass::Consumable
        );
        assert_eq!(
            WeightClass::of(&item(100.0, true, true)),
            WeightClass::WornConsumable
        );
    }

    #[test]
    fn test_worn_consumable_excluded_from_base_counts_as_both() {
        let class = WeightClass::of(&item(100.0, true, true));
        assert!(!class.is_base());
        assert!(class.counts_as_worn());
        assert!(class.counts_as_consumable());
    }

    #[test]
    fn test_effective_weight_basic() {
        let it = item(250.0, false, false);
        let entry = PackListItem::new(it.id.clone()).with_quantity(2);
        assert_eq!(effective_weight(&entry, &it), 500.0);
    }

    #[test]
    fn test_effective_weight_excluded_is_zero() {
        let it = item(250.0, false, false);
        let entry = PackListItem::new(it.id.clone()).excluded();
        assert_eq!(effective_weight(&entry, &it), 0.0);
    }

    #[test]
    fn test_effective_weight_zero_quantity_sanitized_to_one() {
        let it = item(250.0, false, false);
        let entry = PackListItem::new(it.id.clone()).with_quantity(0);
        assert_eq!(effective_weight(&entry, &it), 250.0);
    }

    #[test]
    fn test_effective_weight_list_quantity_overrides_catalog_quantity() {
        // Catalog quantity is a default, never a multiplier.
        let it = item(100.0, false, false).with_quantity(4);
        let entry = PackListItem::new(it.id.clone()).with_quantity(2);
        assert_eq!(effective_weight(&entry, &it), 200.0);
    }

    #[test]
    fn test_effective_weight_zero_weight_item() {
        let it = item(0.0, false, false);
        let entry = PackListItem::new(it.id.clone()).with_quantity(3);
        assert_eq!(effective_weight(&entry, &it), 0.0);
    }

    #[test]
    fn test_effective_weight_negative_weight_propagates() {
        let it = item(-50.0, false, false);
        let entry = PackListItem::new(it.id.clone());
        assert_eq!(effective_weight(&entry, &it), -50.0);
    }

    #[test]
    fn test_gear_index_lookup() {
        let items = vec![item(100.0, false, false), item(200.0, true, false)];
        let index = GearIndex::from_items(&items);
        // Both test items share a name+category, hence an id; the index
        // keys by id so it collapses them.
        assert!(!index.is_empty());
        assert!(index.get(&items[0].id).is_some());
        assert!(index.get(&"missing".into()).is_none());
    }
}

//! Per-list weight roll-up.

use crate::models::{ListStats, PackList};

use super::{effective_weight, CalculateError, GearIndex, WeightClass};

/// Reduce one pack list into its weight totals and item count.
///
/// Single pass over the entries. Excluded entries contribute zero to every
/// sum but still count toward `item_count`, which matches the user's
/// reading of "how many rows are on this list". An empty or all-excluded
/// list is a valid input and produces all-zero sums.
pub fn aggregate_list(list: &PackList, gear: &GearIndex) -> Result<ListStats, CalculateError> {
    let mut stats = ListStats {
        item_count: list.items.len() as u32,
        ..Default::default()
    };

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

        let weight = effective_weight(entry, item);
        stats.total_weight += weight;

        let class = WeightClass::of(item);
        if class.is_base() {
            stats.base_weight += weight;
        }
        if class.counts_as_worn() {
            stats.worn_weight += weight;
        }
        if class.counts_as_consumable() {
            stats.consumable_weight += weight;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GearItem, PackListItem};
    use pretty_assertions::assert_eq;

    fn catalog() -> Vec<GearItem> {
        vec![
            GearItem::new("Tent".to_string(), 500.0, "shelter".into()),
            GearItem::new("Rain jacket".to_string(), 200.0, "clothing".into()).worn(),
            GearItem::new("Trail mix".to_string(), 300.0, "food".into()).consumable(),
            GearItem::new("Sunglasses strap".to_string(), 15.0, "clothing".into())
                .worn()
                .consumable(),
        ]
    }

    fn entry(item: &GearItem) -> PackListItem {
        PackListItem::new(item.id.clone())
    }

    #[test]
    fn test_aggregate_end_to_end_scenario() {
        let items = catalog();
        let gear = GearIndex::from_items(&items);
        let list = PackList::new("Weekend".to_string()).with_items(vec![
            entry(&items[0]),
            entry(&items[1]).with_quantity(2),
            entry(&items[2]).excluded(),
        ]);

        let stats = aggregate_list(&list, &gear).unwrap();
        assert_eq!(stats.total_weight, 900.0);
        assert_eq!(stats.base_weight, 500.0);
        assert_eq!(stats.worn_weight, 400.0);
        assert_eq!(stats.consumable_weight, 0.0);
        assert_eq!(stats.item_count, 3);
    }

    #[test]
    fn test_aggregate_empty_list() {
        let items = catalog();
        let gear = GearIndex::from_items(&items);
        let list = PackList::new("Empty".to_string());

        let stats = aggregate_list(&list, &gear).unwrap();
        assert_eq!(stats, ListStats::default());
    }

    #[test]
    fn test_aggregate_all_excluded_list() {
        let items = catalog();
        let gear = GearIndex::from_items(&items);
        let list = PackList::new("Parked".to_string())
            .with_items(vec![entry(&items[0]).excluded(), entry(&items[1]).excluded()]);

        let stats = aggregate_list(&list, &gear).unwrap();
        assert_eq!(stats.item_count, 2);
        assert_eq!(stats.total_weight, 0.0);
        assert_eq!(stats.base_weight, 0.0);
    }

    #[test]
    fn test_aggregate_worn_consumable_item_counts_for_both() {
        let items = catalog();
        let gear = GearIndex::from_items(&items);
        let list =
            PackList::new("Edge".to_string()).with_items(vec![entry(&items[3]).with_quantity(2)]);

        let stats = aggregate_list(&list, &gear).unwrap();
        assert_eq!(stats.total_weight, 30.0);
        assert_eq!(stats.base_weight, 0.0);
        assert_eq!(stats.worn_weight, 30.0);
        assert_eq!(stats.consumable_weight, 30.0);
    }

    #[test]
    fn test_aggregate_idempotent() {
        let items = catalog();
        let gear = GearIndex::from_items(&items);
        let list = PackList::new("Weekend".to_string())
            .with_items(vec![entry(&items[0]), entry(&items[1]), entry(&items[2])]);

        let first = aggregate_list(&list, &gear).unwrap();
        let second = aggregate_list(&list, &gear).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_aggregate_exclusion_removes_exactly_that_item() {
        let items = catalog();
        let gear = GearIndex::from_items(&items);

        let included = PackList::new("A".to_string())
            .with_items(vec![entry(&items[0]), entry(&items[2]).with_quantity(2)]);
        let excluded = PackList::new("A".to_string()).with_items(vec![
            entry(&items[0]),
            entry(&items[2]).with_quantity(2).excluded(),
        ]);

        let before = aggregate_list(&included, &gear).unwrap();
        let after = aggregate_list(&excluded, &gear).unwrap();

        // Trail mix at quantity 2 is 600g; nothing else moves.
        assert_eq!(before.total_weight - after.total_weight, 600.0);
        assert_eq!(before.base_weight, after.base_weight);
        assert_eq!(before.item_count, after.item_count);
    }

    #[test]
    fn test_aggregate_missing_gear_item_is_error() {
        let items = catalog();
        let gear = GearIndex::from_items(&items);
        let list = PackList::new("Broken".to_string())
            .with_items(vec![PackListItem::new("does-not-exist".into())]);

        let err = aggregate_list(&list, &gear).unwrap_err();
        assert!(matches!(err, CalculateError::MissingGearItem { .. }));
    }

    #[test]
    fn test_aggregate_excluded_entry_still_requires_resolution() {
        // The graph contract covers every entry, included or not.
        let gear_items: Vec<GearItem> = vec![];
        let gear = GearIndex::from_items(&gear_items);
        let list = PackList::new("Broken".to_string())
            .with_items(vec![PackListItem::new("ghost".into()).excluded()]);

        assert!(aggregate_list(&list, &gear).is_err());
    }
}

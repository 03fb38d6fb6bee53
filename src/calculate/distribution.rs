//! Library-wide weight distribution histogram.

use crate::models::{GearItem, WeightBucket};

/// Number of fixed histogram buckets.
pub const BUCKET_COUNT: usize = 6;

/// Bucket bounds in grams: inclusive lower, exclusive upper (None = open).
const BUCKET_BOUNDS: [(f64, Option<f64>); BUCKET_COUNT] = [
    (0.0, Some(50.0)),
    (50.0, Some(100.0)),
    (100.0, Some(250.0)),
    (250.0, Some(500.0)),
    (500.0, Some(1000.0)),
    (1000.0, None),
];

fn bucket_label(min: f64, max: Option<f64>) -> String {
    match max {
        Some(max) => format!("{}-{}g", min as u32, max as u32),
        None => format!("{}g+", min as u32),
    }
}

/// Count catalog items per fixed weight range.
///
/// Operates on unit weights, not quantity-multiplied weights, and on the
/// flat catalog rather than any pack list. Always returns all six buckets
/// in range order, zero counts included, so consumers can render a
/// complete axis. An item sitting exactly on a boundary belongs to the
/// bucket whose lower bound equals that value.
pub fn weight_distribution(items: &[GearItem]) -> Vec<WeightBucket> {
    let mut counts = [0u32; BUCKET_COUNT];

    for item in items {
        // First bucket whose upper bound clears the weight; the open
        // last bucket catches everything else.
        let slot = BUCKET_BOUNDS
            .iter()
            .position(|(_, max)| max.map_or(true, |m| item.weight < m))
            .unwrap_or(BUCKET_COUNT - 1);
        counts[slot] += 1;
    }

    BUCKET_BOUNDS
        .iter()
        .zip(counts)
        .map(|(&(min, max), count)| WeightBucket {
            label: bucket_label(min, max),
            min_weight: min,
            max_weight: max,
            count,
        })
        .collect()
}

//! Cross-list ranking and comparison.

use crate::models::{ListComparison, RankedList};

/// Rank and compare an owner's pack lists by base weight.
///
/// The ranking orders all lists ascending by base weight, earlier creation
/// first on ties, so repeated runs are deterministic. Extremes, spread and
/// the average are computed over lists with non-zero base weight only —
/// a brand-new empty list stays in the ranking but does not drag the
/// average down or claim "lightest". The trend series is the same entries
/// ordered by creation time ascending, independent of the ranking order.
pub fn compare_lists(entries: Vec<RankedList>) -> ListComparison {
    let mut ranking = entries.clone();
    ranking.sort_by(|a, b| {
        a.stats
            .base_weight
            .total_cmp(&b.stats.base_weight)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });

    let nonzero: Vec<&RankedList> = ranking
        .iter()
        .filter(|r| r.stats.base_weight > 0.0)
        .collect();

    let lightest = nonzero.first().map(|r| (*r).clone());
    let heaviest = nonzero.last().map(|r| (*r).clone());

    let average_base_weight = if nonzero.is_empty() {
        None
    } else {
        let sum: f64 = nonzero.iter().map(|r| r.stats.base_weight).sum();
        Some(sum / nonzero.len() as f64)
    };

    let spread = match (&lightest, &heaviest) {
        (Some(light), Some(heavy)) => Some(heavy.stats.base_weight - light.stats.base_weight),
        _ => None,
    };

    let mut trend = entries;
    trend.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    ListComparison {
        ranking,
        lightest,
        heaviest,
        average_base_weight,
        spread,
        trend,
    }
}

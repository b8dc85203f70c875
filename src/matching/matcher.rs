use rand::seq::SliceRandom;

use crate::dataset::parser::Record;

/// How many records a query-less dispatch picks when nothing eligible is
/// selected.
pub const FALLBACK_PICK_DEFAULT: usize = 5;

/// Filter and rank `records` against a free-text query.
///
/// A record matches when any of its field values contains `query` as a
/// case-insensitive substring. Matches are ordered by score (the number of
/// fields containing the query) descending; ties keep input order.
///
/// Pure function: the result is always a subset of `records`.
#[tracing::instrument(skip(records))]
pub fn find_matches(records: &[Record], query: &str) -> Vec<Record> {
    let needle = query.to_lowercase();
    let mut scored: Vec<(usize, &Record)> = records
        .iter()
        .filter_map(|record| {
            let score = record
                .values()
                .filter(|value| value.to_lowercase().contains(&needle))
                .count();
            (score > 0).then_some((score, record))
        })
        .collect();

    // Stable sort, so equal scores keep their relative input order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, record)| record.clone()).collect()
}

/// Select `min(count, records.len())` distinct records uniformly at random.
///
/// Uses a Fisher-Yates shuffle over indices; the result contains no
/// duplicates and nothing outside the input set.
pub fn pick_random(records: &[Record], count: usize) -> Vec<Record> {
    let mut indices: Vec<usize> = (0..records.len()).collect();
    indices.shuffle(&mut rand::rng());
    indices.truncate(count.min(records.len()));
    indices.into_iter().map(|i| records[i].clone()).collect()
}

/// Pick-count policy for a query-less dispatch: one record per eligible
/// selected node, or [`FALLBACK_PICK_DEFAULT`] when nothing eligible is
/// selected.
pub fn fallback_pick_count(eligible_selected: usize) -> usize {
    if eligible_selected == 0 {
        FALLBACK_PICK_DEFAULT
    } else {
        eligible_selected
    }
}

#[cfg(test)]
#[path = "../../tests/unit/matching/matcher.rs"]
mod tests;

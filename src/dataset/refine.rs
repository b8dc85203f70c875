use crate::dataset::parser::Record;

/// Normalize scraped cook-time text.
///
/// The upstream dataset concatenates the unit with the word "cook"
/// (`"25 minscook"`, `"1 hrcook"`); this strips the suffix and collapses
/// whitespace runs.
pub fn clean_time_text(raw: &str) -> String {
    let replaced = raw.replace("minscook", "mins").replace("hrcook", "hr");
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Force `Dietary Requirements` to `"Pescatarian"` for records whose
/// description mentions pescatarian, case-insensitively.
///
/// Records without a `Dietary Requirements` key are left untouched so the
/// header-set invariant holds for arbitrary datasets.
pub fn apply_pescatarian_override(records: &mut [Record]) {
    for record in records.iter_mut() {
        let mentions = record
            .get("Description")
            .is_some_and(|d| d.to_lowercase().contains("pescatarian"));
        if mentions && record.get("Dietary Requirements").is_some() {
            record.insert("Dietary Requirements", "Pescatarian");
        }
    }
}

/// Refinement pass run between parsing and matching.
///
/// Cleans `Time` values and applies the pescatarian dietary override.
pub fn refine_records(records: &mut [Record]) {
    for record in records.iter_mut() {
        let cleaned = record.get("Time").map(clean_time_text);
        if let Some(cleaned) = cleaned {
            record.insert("Time", cleaned);
        }
    }
    apply_pescatarian_override(records);
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/refine.rs"]
mod tests;

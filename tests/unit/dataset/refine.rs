use super::*;

#[test]
fn time_suffixes_are_stripped() {
    assert_eq!(clean_time_text("25 minscook"), "25 mins");
    assert_eq!(clean_time_text("1 hrcook 10 minscook"), "1 hr 10 mins");
    assert_eq!(clean_time_text("  40   mins  "), "40 mins");
    assert_eq!(clean_time_text(""), "");
}

#[test]
fn pescatarian_override_is_case_insensitive() {
    let mut record = Record::new();
    record.insert("Description", "A light PESCATARIAN supper");
    record.insert("Dietary Requirements", "High Protein, Quick");
    let mut records = vec![record];
    apply_pescatarian_override(&mut records);
    assert_eq!(records[0].get("Dietary Requirements"), Some("Pescatarian"));
}

#[test]
fn override_needs_existing_dietary_key() {
    let mut record = Record::new();
    record.insert("Description", "pescatarian friendly");
    let mut records = vec![record];
    apply_pescatarian_override(&mut records);
    assert_eq!(records[0].get("Dietary Requirements"), None);
    assert_eq!(records[0].len(), 1);
}

#[test]
fn unrelated_records_are_untouched() {
    let mut record = Record::new();
    record.insert("Description", "A hearty beef stew");
    record.insert("Dietary Requirements", "High Protein");
    let mut records = vec![record];
    apply_pescatarian_override(&mut records);
    assert_eq!(
        records[0].get("Dietary Requirements"),
        Some("High Protein")
    );
}

#[test]
fn refine_cleans_time_in_place() {
    let mut record = Record::new();
    record.insert("Time", "30 minscook");
    record.insert("Description", "quick dinner");
    let mut records = vec![record];
    refine_records(&mut records);
    assert_eq!(records[0].get("Time"), Some("30 mins"));
}

use super::*;

#[test]
fn short_descriptions_pass_through_unchanged() {
    assert_eq!(truncate_description("A quiet waterfall."), "A quiet waterfall.");
    assert_eq!(truncate_description(""), "");
}

#[test]
fn exactly_one_hundred_characters_gets_no_ellipsis() {
    let exact = "x".repeat(100);
    assert_eq!(truncate_description(&exact), exact);
}

#[test]
fn longer_descriptions_are_cut_at_one_hundred_characters() {
    let long = "y".repeat(101);
    let preview = truncate_description(&long);
    assert_eq!(preview.chars().count(), 103);
    assert!(preview.ends_with("..."));
    assert!(preview.starts_with(&"y".repeat(100)));
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let long = "ह".repeat(150);
    let preview = truncate_description(&long);
    assert_eq!(preview.chars().count(), 103);
    assert!(preview.starts_with(&"ह".repeat(100)));
}

#[test]
fn static_asset_url_prefixes_relative_paths() {
    assert_eq!(static_asset_url("uploads/falls.jpg"), "/static/uploads/falls.jpg");
}

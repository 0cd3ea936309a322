#![allow(clippy::unwrap_used)]

use std::io::Write;
use tempfile::NamedTempFile;

use super::*;

fn write_keywords(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

// ── Keyword file ──────────────────────────────────────────────

#[test]
fn test_load_adds_keywords() {
    let f = write_keywords("Food & Drinks,samosa\nTravel,toll\n");
    let table = load_keyword_file(f.path(), KeywordTable::default()).unwrap();
    assert!(table.keywords(Category::FoodAndDrinks).contains(&"samosa".to_string()));
    assert!(table.keywords(Category::Travel).contains(&"toll".to_string()));
    // built-ins are kept
    assert!(table.keywords(Category::FoodAndDrinks).contains(&"tea".to_string()));
}

#[test]
fn test_load_skips_header_and_comments() {
    let f = write_keywords("category,keyword\n# local additions\nhealthcare,physio\n");
    let table = load_keyword_file(f.path(), KeywordTable::empty()).unwrap();
    assert_eq!(table.keyword_count(), 1);
    assert_eq!(table.keywords(Category::Healthcare), &["physio".to_string()]);
}

#[test]
fn test_load_trims_and_lowercases() {
    let f = write_keywords("  Personal ,  Yoga  \n");
    let table = load_keyword_file(f.path(), KeywordTable::empty()).unwrap();
    assert_eq!(table.keywords(Category::Personal), &["yoga".to_string()]);
}

#[test]
fn test_load_skips_blank_and_missing_keyword() {
    let f = write_keywords("Shopping,\n,\nShopping,mall\nEducation\n");
    let table = load_keyword_file(f.path(), KeywordTable::empty()).unwrap();
    assert_eq!(table.keyword_count(), 1);
    assert_eq!(table.keywords(Category::Shopping), &["mall".to_string()]);
}

#[test]
fn test_load_ignores_other_category() {
    let f = write_keywords("Other,misc\n");
    let table = load_keyword_file(f.path(), KeywordTable::empty()).unwrap();
    assert_eq!(table.keyword_count(), 0);
}

#[test]
fn test_load_unknown_category_is_error() {
    let f = write_keywords("Travel,toll\nGroceries,milk\n");
    let err = load_keyword_file(f.path(), KeywordTable::empty()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("unknown category 'Groceries'"), "{msg}");
    assert!(msg.contains(":2:"), "{msg}");
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    assert!(load_keyword_file(&missing, KeywordTable::empty()).is_err());
}

// ── Resolution ────────────────────────────────────────────────

#[test]
fn test_load_keywords_explicit_path() {
    let f = write_keywords("Travel,toll\n");
    let table = load_keywords(Some(f.path())).unwrap();
    assert!(table.keywords(Category::Travel).contains(&"toll".to_string()));
    assert!(table.keywords(Category::Travel).contains(&"hotel".to_string()));
}

#[test]
fn test_load_keywords_explicit_missing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("keywords.csv");
    let err = load_keywords(Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("Keyword file not found"));
}

#[test]
fn test_default_keyword_path_file_name() {
    if let Some(path) = default_keyword_path() {
        assert_eq!(path.file_name().unwrap(), "keywords.csv");
    }
}

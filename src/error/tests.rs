//! Unit tests for error types

use super::*;

#[test]
fn test_unexpected_page_display() {
    let err = NbaError::unexpected_page("found multiple/no salary table");
    assert_eq!(
        err.to_string(),
        "Unexpected page content: found multiple/no salary table"
    );
}

#[test]
fn test_invalid_year_from_parse_int() {
    let parse_err = "not-a-year".parse::<u16>().unwrap_err();
    let err: NbaError = parse_err.into();
    assert!(err.to_string().starts_with("Failed to parse year"));
}

#[test]
fn test_storage_from_anyhow() {
    let err: NbaError = anyhow::anyhow!("db gone").into();
    assert_eq!(err.to_string(), "Storage error: db gone");
}

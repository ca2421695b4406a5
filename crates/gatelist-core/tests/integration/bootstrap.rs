//! Integration tests for bootstrapping a missing whitelist file.

use gatelist_core::template::DEFAULT_TEMPLATE;
use std::fs;

use crate::common::Fixture;

#[test]
fn test_reload_creates_missing_file_from_template() {
    let fixture = Fixture::missing();
    let mut whitelist = fixture.engine();
    assert!(!whitelist.exists());

    let outcome = whitelist.reload().expect("reload should bootstrap the file");

    assert!(whitelist.exists());
    let written = fs::read_to_string(fixture.file.path()).unwrap();
    assert_eq!(written, DEFAULT_TEMPLATE);
    assert!(outcome.current.is_empty());
    assert!(outcome.is_first_load());
}

#[test]
fn test_bootstrapped_file_reloads_empty() {
    let fixture = Fixture::missing();
    let mut whitelist = fixture.engine();
    whitelist.reload().unwrap();

    let outcome = whitelist.reload().unwrap();

    assert!(outcome.current.is_empty());
    assert!(outcome.previous.is_none());
    assert_eq!(outcome.stats.comments, outcome.stats.lines);
}

#[test]
fn test_initialize_is_repeatable() {
    let fixture = Fixture::missing();
    let whitelist = fixture.engine();

    whitelist.initialize().unwrap();
    let first = fs::read_to_string(fixture.file.path()).unwrap();
    whitelist.initialize().unwrap();
    let second = fs::read_to_string(fixture.file.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_existing_file_is_not_rewritten_by_reload() {
    let fixture = Fixture::with_lines(&["76561190000000001"]);
    let mut whitelist = fixture.engine();

    whitelist.reload().unwrap();

    let content = fs::read_to_string(fixture.file.path()).unwrap();
    assert_eq!(content, "76561190000000001\n");
}

//! Integration tests for whitelist line handling.

use gatelist_core::Identity;

use crate::common::{Fixture, ids};

#[test]
fn test_mixed_file_scenario() {
    let fixture = Fixture::with_lines(&[
        "#comment",
        "76561190000000001",
        "76561190000000001",
        "bad-id",
        "",
        "765611900000  # inline",
    ]);
    let mut whitelist = fixture.engine();

    let outcome = whitelist.reload().unwrap();

    assert_eq!(outcome.current.to_sorted_vec(), ids(&[76561190000000001]));
    assert!(!whitelist.contains(Identity::new(765611900000)));
    assert_eq!(outcome.stats.duplicates, 1);
    assert_eq!(outcome.stats.rejected, 1);
}

#[test]
fn test_commented_identities_never_load() {
    let fixture = Fixture::with_lines(&["#1", "2#", "3 #x", "# 4", "5"]);
    let mut whitelist = fixture.engine();

    let outcome = whitelist.reload().unwrap();

    assert_eq!(outcome.current.to_sorted_vec(), ids(&[5]));
}

#[test]
fn test_repeated_identities_load_once() {
    let fixture = Fixture::with_lines(&["9", "8", "9", "9", "8"]);
    let mut whitelist = fixture.engine();

    let outcome = whitelist.reload().unwrap();

    assert_eq!(outcome.current.len(), 2);
    assert_eq!(outcome.stats.accepted, 2);
    assert_eq!(outcome.stats.duplicates, 3);
}

#[test]
fn test_trace_entries_does_not_change_result() {
    let fixture = Fixture::with_lines(&["1", "nope", "2"]);
    let mut plain = fixture.engine();
    let mut traced = fixture.engine().with_trace_entries(true);

    let plain = plain.reload().unwrap();
    let traced = traced.reload().unwrap();

    assert_eq!(*plain.current, *traced.current);
    assert_eq!(plain.stats, traced.stats);
}

#[test]
fn test_crlf_file_parses() {
    let fixture = Fixture::missing();
    std::fs::write(fixture.file.path(), "1\r\n2\r\n").unwrap();
    let mut whitelist = fixture.engine();

    let outcome = whitelist.reload().unwrap();

    assert_eq!(outcome.current.to_sorted_vec(), ids(&[1, 2]));
}

#[test]
fn test_non_utf8_comment_does_not_affect_other_lines() {
    let fixture = Fixture::missing();
    std::fs::write(fixture.file.path(), b"# J\xf6rg\n76561190000000001\n").unwrap();
    let mut whitelist = fixture.engine();

    let outcome = whitelist.reload().expect("stray bytes should not fail the reload");

    assert_eq!(outcome.current.to_sorted_vec(), ids(&[76561190000000001]));
    assert_eq!(outcome.stats.comments, 1);
}

#[test]
fn test_non_utf8_identity_line_is_rejected_alone() {
    let fixture = Fixture::missing();
    std::fs::write(fixture.file.path(), b"1\n7656119\xff\n2\n").unwrap();
    let mut whitelist = fixture.engine();

    let outcome = whitelist.reload().unwrap();

    assert_eq!(outcome.current.to_sorted_vec(), ids(&[1, 2]));
    assert_eq!(outcome.stats.rejected, 1);
}

#[test]
fn test_byte_order_mark_keeps_first_identity() {
    let fixture = Fixture::missing();
    std::fs::write(
        fixture.file.path(),
        "\u{FEFF}76561190000000001\n76561190000000002\n",
    )
    .unwrap();
    let mut whitelist = fixture.engine();

    let outcome = whitelist.reload().unwrap();

    assert_eq!(
        outcome.current.to_sorted_vec(),
        ids(&[76561190000000001, 76561190000000002])
    );
}

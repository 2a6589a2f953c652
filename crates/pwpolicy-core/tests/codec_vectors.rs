//! Policy string codec vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use pwpolicy_core::policy::{parse, serialize};

mod vector_loader;
use vector_loader::{load, ParseVector, SerializeVector};

#[test]
fn parse_vectors() {
    let files = [
        "parse_empty.json",
        "parse_two_known.json",
        "parse_unknown_dropped.json",
        "parse_empty_value.json",
        "parse_bare_id.json",
        "parse_duplicate_kept.json",
        "parse_unclosed_paren.json",
        "parse_nested_parens.json",
        "parse_whitespace_and_empty_segments.json",
        "parse_value_whitespace_kept.json",
    ];

    for f in files {
        let v: ParseVector = load(f);
        let rows = parse(&v.input, &v.catalog());
        assert_eq!(rows, v.expect, "vector={}", v.description);

        if let Some(s) = &v.reserialized {
            assert_eq!(&serialize(&rows), s, "vector={}", v.description);
        }
    }
}

#[test]
fn serialize_vectors() {
    let files = [
        "serialize_empty.json",
        "serialize_two_rows.json",
        "serialize_empty_value.json",
    ];

    for f in files {
        let v: SerializeVector = load(f);
        assert_eq!(serialize(&v.rows), v.expect, "vector={}", v.description);
    }
}

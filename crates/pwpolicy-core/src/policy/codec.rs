//! Policy string codec (panic-free, total).
//!
//! Wire format: `id1(value1) and id2(value2) and ...`
//!
//! Rules:
//! - Segments are joined by the literal token `" and "`.
//! - `id` is the text before the first `(`; `value` is the text between the
//!   first `(` and the last `)`.
//! - There is no escaping. A value containing `)` or `" and "` does not
//!   survive a round trip; the server parser has the same limitation.
//!
//! Round trip is one-directional: `parse(&serialize(rows), catalog) == rows`
//! holds for rows whose ids are in `catalog` and whose values contain no
//! `(`, `)` or `" and "`. `serialize(&parse(s, catalog)) == s` only holds when
//! every id in `s` is known and no segment is malformed.

use std::collections::HashMap;

use super::catalog::PolicyCatalog;
use super::row::PolicyRow;

/// Token between two policy segments.
pub const SEGMENT_SEPARATOR: &str = " and ";

/// Parse a policy string into rows, keeping only kinds present in `catalog`.
///
/// Never fails. An empty string yields no rows. Unknown ids are skipped
/// (the server may have dropped a policy kind since the string was stored).
/// Duplicates are kept as-is.
pub fn parse(policy: &str, catalog: &PolicyCatalog) -> Vec<PolicyRow> {
    let mut rows = Vec::new();
    for segment in policy.split(SEGMENT_SEPARATOR) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let (id, value) = split_segment(segment);
        if !catalog.contains(id) {
            tracing::debug!(%id, "unknown policy kind dropped");
            continue;
        }
        rows.push(PolicyRow::new(id, value));
    }
    rows
}

/// Serialize rows into a policy string, preserving row order.
///
/// Empty values are written as `id()`. `serialize(&[])` is `""`.
pub fn serialize(rows: &[PolicyRow]) -> String {
    rows.iter()
        .map(|r| format!("{}({})", r.id, r.value))
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// Serialize rows taking values from a form keyed by policy id.
///
/// Row order decides segment order. A row whose id has no entry in `values`
/// keeps its own value.
pub fn serialize_with_values(rows: &[PolicyRow], values: &HashMap<String, String>) -> String {
    rows.iter()
        .map(|r| {
            let value = values.get(&r.id).unwrap_or(&r.value);
            format!("{}({})", r.id, value)
        })
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

/// Ids in `policy` that `parse` would drop because `catalog` lacks them.
pub fn unknown_ids<'a>(policy: &'a str, catalog: &PolicyCatalog) -> Vec<&'a str> {
    policy
        .split(SEGMENT_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| split_segment(s).0)
        .filter(|id| !catalog.contains(id))
        .collect()
}

/// Split one trimmed segment into `(id, value)`.
fn split_segment(segment: &str) -> (&str, &str) {
    let Some(open) = segment.find('(') else {
        // bare id, no parentheses
        return (segment, "");
    };

    let id = segment[..open].trim();
    let rest = &segment[open + 1..];
    let value = match rest.rfind(')') {
        Some(close) => &rest[..close],
        None => rest,
    };
    (id, value)
}

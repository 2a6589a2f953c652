//! Password-policy model and wire codec.
//!
//! - `definition`: policy kinds advertised by the server (read-only).
//! - `catalog`: runtime lookup over those kinds, keyed by id.
//! - `row`: one editable `{id, value}` pair.
//! - `codec`: `parse` / `serialize` between the flat policy string and rows.
//!
//! Nothing here panics or fails on malformed policy strings: unknown or
//! broken segments are dropped, so a client that lags behind the server's
//! set of policy kinds still loads the rest of the policy.

pub mod catalog;
pub mod codec;
pub mod definition;
pub mod row;

pub use catalog::PolicyCatalog;
pub use codec::{parse, serialize, serialize_with_values, unknown_ids, SEGMENT_SEPARATOR};
pub use definition::PolicyDefinition;
pub use row::PolicyRow;

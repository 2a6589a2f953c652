use serde::{Deserialize, Serialize};

/// One active policy in an editable policy list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyRow {
    /// Id of a `PolicyDefinition`.
    pub id: String,
    /// Current value; may be empty (`id()` on the wire).
    #[serde(default)]
    pub value: String,
}

impl PolicyRow {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

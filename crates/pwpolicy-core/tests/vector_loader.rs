//! JSON test vector loader shared by the codec tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::Deserialize;

use pwpolicy_core::policy::{PolicyCatalog, PolicyDefinition, PolicyRow};

/// `parse` vector: input string, catalog ids, expected rows.
#[derive(Debug, Deserialize)]
pub struct ParseVector {
    pub description: String,
    pub catalog: Vec<String>,
    pub input: String,
    pub expect: Vec<PolicyRow>,
    /// Expected `serialize(parse(input))`, when it is worth pinning.
    #[serde(default)]
    pub reserialized: Option<String>,
}

impl ParseVector {
    pub fn catalog(&self) -> PolicyCatalog {
        self.catalog
            .iter()
            .map(|id| PolicyDefinition::new(id.as_str(), id.as_str()))
            .collect()
    }
}

/// `serialize` vector: rows and the exact expected wire string.
#[derive(Debug, Deserialize)]
pub struct SerializeVector {
    pub description: String,
    pub rows: Vec<PolicyRow>,
    pub expect: String,
}

pub fn load<T: for<'de> Deserialize<'de>>(name: &str) -> T {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

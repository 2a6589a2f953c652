//! Runtime catalog of known policy kinds.
//!
//! The set of kinds is fetched from the server at runtime, so it is modeled
//! as a plain list plus an id index. Only presence lookups are needed.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::definition::PolicyDefinition;
use super::row::PolicyRow;

/// Known policy kinds in server order, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct PolicyCatalog {
    defs: Vec<PolicyDefinition>,
    by_id: HashMap<String, usize>,
}

impl PolicyCatalog {
    /// Build a catalog. If an id appears more than once the first entry wins.
    pub fn new(defs: impl IntoIterator<Item = PolicyDefinition>) -> Self {
        let mut out = Self::default();
        for def in defs {
            if out.by_id.contains_key(&def.id) {
                tracing::debug!(id = %def.id, "duplicate policy definition ignored");
                continue;
            }
            out.by_id.insert(def.id.clone(), out.defs.len());
            out.defs.push(def);
        }
        out
    }

    pub fn get(&self, id: &str) -> Option<&PolicyDefinition> {
        self.by_id.get(id).and_then(|&i| self.defs.get(i))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PolicyDefinition> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Kinds not yet used by `rows`, in catalog order.
    ///
    /// A used kind is hidden even when it has `multiple_supported`; adding it
    /// again is still allowed, this only drives the "add policy" list.
    pub fn available<'a>(&'a self, rows: &'a [PolicyRow]) -> impl Iterator<Item = &'a PolicyDefinition> {
        self.defs
            .iter()
            .filter(move |d| !rows.iter().any(|r| r.id == d.id))
    }
}

impl FromIterator<PolicyDefinition> for PolicyCatalog {
    fn from_iter<I: IntoIterator<Item = PolicyDefinition>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Serialize for PolicyCatalog {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        self.defs.serialize(s)
    }
}

impl<'de> Deserialize<'de> for PolicyCatalog {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let defs = Vec::<PolicyDefinition>::deserialize(d)?;
        Ok(Self::new(defs))
    }
}

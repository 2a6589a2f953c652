//! Password-policy editor state for one realm.
//!
//! Holds the rows between load and save. The codec stays stateless; this is
//! the caller-owned side: add/remove/edit, dirty tracking, reload, and the
//! value checks the codec deliberately does not perform.

use std::sync::Arc;

use pwpolicy_core::error::{PolicyError, Result};
use pwpolicy_core::policy::{parse, serialize, PolicyCatalog, PolicyDefinition, PolicyRow};

pub struct PolicyEditor {
    catalog: Arc<PolicyCatalog>,
    /// Last saved (or loaded) policy string.
    saved: String,
    rows: Vec<PolicyRow>,
    dirty: bool,
}

impl PolicyEditor {
    /// Parse `policy` against `catalog`; the result is the clean baseline.
    pub fn load(policy: &str, catalog: Arc<PolicyCatalog>) -> Self {
        let rows = parse(policy, &catalog);
        Self {
            catalog,
            saved: policy.to_string(),
            rows,
            dirty: false,
        }
    }

    pub fn rows(&self) -> &[PolicyRow] {
        &self.rows
    }

    pub fn saved(&self) -> &str {
        &self.saved
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Nothing selected and nothing stored: the "no policies yet" state.
    pub fn is_empty_state(&self) -> bool {
        self.rows.is_empty() && self.saved.is_empty()
    }

    /// Kinds that can still be added.
    pub fn available(&self) -> Vec<&PolicyDefinition> {
        self.catalog.available(&self.rows).collect()
    }

    /// Append a policy with its default value.
    pub fn add(&mut self, id: &str) -> Result<&PolicyRow> {
        let def = self.definition(id)?;
        if !def.multiple_supported && self.rows.iter().any(|r| r.id == id) {
            return Err(PolicyError::BadRequest(format!("policy already present: {id}")));
        }

        let row = PolicyRow::new(def.id.clone(), def.default_value.clone());
        self.rows.push(row);
        self.dirty = true;

        let last = self.rows.len() - 1;
        Ok(&self.rows[last])
    }

    /// Remove every row of kind `id`.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        if self.rows.len() == before {
            return Err(PolicyError::NotFound(format!("policy not selected: {id}")));
        }
        self.dirty = true;
        Ok(())
    }

    /// Set the value of kind `id`. Form values are keyed by id, so every row
    /// of that kind gets the value. `int` values are stored trimmed.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        let value = self.normalize(id, value.into());
        let mut hit = false;
        for row in self.rows.iter_mut().filter(|r| r.id == id) {
            row.value.clone_from(&value);
            hit = true;
        }
        if !hit {
            return Err(PolicyError::NotFound(format!("policy not selected: {id}")));
        }
        self.dirty = true;
        Ok(())
    }

    /// Replace all rows at once (e.g. a submitted form). Ids must be known
    /// and non-repeatable kinds may appear once. `int` values are stored trimmed.
    pub fn replace_rows(&mut self, rows: Vec<PolicyRow>) -> Result<()> {
        for (i, row) in rows.iter().enumerate() {
            let def = self.definition(&row.id)?;
            if !def.multiple_supported && rows[..i].iter().any(|r| r.id == row.id) {
                return Err(PolicyError::BadRequest(format!(
                    "policy listed more than once: {}",
                    row.id
                )));
            }
        }
        self.rows = rows
            .into_iter()
            .map(|r| {
                let value = self.normalize(&r.id, r.value);
                PolicyRow::new(r.id, value)
            })
            .collect();
        self.dirty = true;
        Ok(())
    }

    /// Check values against their kind; `int` kinds need a non-negative
    /// integer exactly as it will be written to the wire.
    pub fn validate(&self) -> Result<()> {
        for row in &self.rows {
            let def = self.definition(&row.id)?;
            if def.is_int() && row.value.parse::<u64>().is_err() {
                return Err(PolicyError::BadRequest(format!(
                    "{} requires a non-negative integer, got {:?}",
                    def.display_name, row.value
                )));
            }
        }
        Ok(())
    }

    /// Validate and serialize; the result becomes the new baseline.
    pub fn save(&mut self) -> Result<String> {
        self.validate()?;
        let policy = serialize(&self.rows);
        self.saved.clone_from(&policy);
        self.dirty = false;
        Ok(policy)
    }

    /// Drop unsaved edits.
    pub fn reload(&mut self) {
        self.rows = parse(&self.saved, &self.catalog);
        self.dirty = false;
    }

    fn normalize(&self, id: &str, value: String) -> String {
        match self.catalog.get(id) {
            Some(def) if def.is_int() => value.trim().to_string(),
            _ => value,
        }
    }

    fn definition(&self, id: &str) -> Result<&PolicyDefinition> {
        self.catalog
            .get(id)
            .ok_or_else(|| PolicyError::NotFound(format!("unknown policy kind: {id}")))
    }
}

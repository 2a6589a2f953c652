use std::collections::HashSet;
use std::net::SocketAddr;

use serde::Deserialize;

use pwpolicy_core::error::{PolicyError, Result};
use pwpolicy_core::policy::PolicyDefinition;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    pub version: u32,

    #[serde(default)]
    pub console: ConsoleSection,

    /// Policy kinds this deployment supports (server-info).
    pub catalog: Vec<PolicyDefinition>,

    #[serde(default)]
    pub realms: Vec<RealmSeed>,
}

impl ConsoleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PolicyError::UnsupportedVersion);
        }
        if self.catalog.is_empty() {
            return Err(PolicyError::BadRequest("catalog must not be empty".into()));
        }

        self.console.validate()?;

        let mut ids = HashSet::new();
        for def in &self.catalog {
            validate_policy_id(&def.id)?;
            if !ids.insert(def.id.as_str()) {
                return Err(PolicyError::BadRequest(format!(
                    "catalog has duplicate policy id: {}",
                    def.id
                )));
            }
        }

        let mut realms = HashSet::new();
        for r in &self.realms {
            if r.id.trim().is_empty() {
                return Err(PolicyError::BadRequest("realm id must not be empty".into()));
            }
            if !realms.insert(r.id.as_str()) {
                return Err(PolicyError::BadRequest(format!("duplicate realm id: {}", r.id)));
            }
        }

        Ok(())
    }
}

/// Policy ids end up inside the wire format, so they may not carry its syntax.
fn validate_policy_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(PolicyError::BadRequest("catalog policy id must not be empty".into()));
    }
    if id.chars().any(|c| c == '(' || c == ')' || c.is_whitespace()) {
        return Err(PolicyError::BadRequest(format!(
            "catalog policy id must not contain parentheses or whitespace: {id:?}"
        )));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ConsoleSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ConsoleSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            PolicyError::BadRequest(format!(
                "console.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

/// Realm present at startup, with its stored policy string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RealmSeed {
    pub id: String,
    #[serde(default)]
    pub password_policy: Option<String>,
}

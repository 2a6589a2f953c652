//! Realm storage seam.
//!
//! The console only needs the realm's password-policy field, so the store
//! trait is scoped to that. `MemoryRealmStore` is seeded from config.

pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use pwpolicy_core::error::Result;

pub use memory::MemoryRealmStore;

/// The slice of a realm representation the console reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealmPolicy {
    pub realm: String,
    #[serde(default)]
    pub password_policy: Option<String>,
}

impl RealmPolicy {
    /// Policy string, with an absent field read as empty.
    pub fn policy_str(&self) -> &str {
        self.password_policy.as_deref().unwrap_or_default()
    }
}

#[async_trait]
pub trait RealmStore: Send + Sync {
    /// Realm names, sorted.
    async fn realms(&self) -> Vec<String>;

    /// `NotFound` for unknown realms.
    async fn realm_policy(&self, realm: &str) -> Result<RealmPolicy>;

    /// Replace the realm's policy string. An empty string clears it.
    async fn update_password_policy(&self, realm: &str, policy: String) -> Result<RealmPolicy>;
}

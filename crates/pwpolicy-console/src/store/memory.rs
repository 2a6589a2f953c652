use async_trait::async_trait;
use dashmap::DashMap;

use pwpolicy_core::error::{PolicyError, Result};

use super::{RealmPolicy, RealmStore};

/// In-process realm store.
#[derive(Default)]
pub struct MemoryRealmStore {
    realms: DashMap<String, RealmPolicy>,
}

impl MemoryRealmStore {
    pub fn new() -> Self {
        Self {
            realms: DashMap::new(),
        }
    }

    pub fn insert(&self, realm: impl Into<String>, password_policy: Option<String>) {
        let realm = realm.into();
        self.realms.insert(
            realm.clone(),
            RealmPolicy {
                realm,
                password_policy,
            },
        );
    }
}

#[async_trait]
impl RealmStore for MemoryRealmStore {
    async fn realms(&self) -> Vec<String> {
        let mut out: Vec<String> = self.realms.iter().map(|e| e.key().clone()).collect();
        out.sort();
        out
    }

    async fn realm_policy(&self, realm: &str) -> Result<RealmPolicy> {
        self.realms
            .get(realm)
            .map(|e| e.value().clone())
            .ok_or_else(|| PolicyError::NotFound(format!("unknown realm: {realm}")))
    }

    async fn update_password_policy(&self, realm: &str, policy: String) -> Result<RealmPolicy> {
        let mut entry = self
            .realms
            .get_mut(realm)
            .ok_or_else(|| PolicyError::NotFound(format!("unknown realm: {realm}")))?;

        entry.password_policy = if policy.is_empty() { None } else { Some(policy) };
        Ok(entry.value().clone())
    }
}

//! Shared application state for the pwPolicy console.
//!
//! The catalog is compiled once at startup and shared read-only; realm data
//! lives behind the `RealmStore` seam.

use std::sync::Arc;

use pwpolicy_core::error::Result;
use pwpolicy_core::policy::{unknown_ids, PolicyCatalog};

use crate::config::ConsoleConfig;
use crate::obs::ConsoleMetrics;
use crate::store::{MemoryRealmStore, RealmStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ConsoleConfig,
    catalog: Arc<PolicyCatalog>,
    store: Arc<dyn RealmStore>,
    metrics: ConsoleMetrics,
}

impl AppState {
    /// Build state with an in-memory store seeded from `cfg.realms`.
    pub fn new(cfg: ConsoleConfig) -> Result<Self> {
        let store = MemoryRealmStore::new();
        for r in &cfg.realms {
            store.insert(r.id.clone(), r.password_policy.clone());
        }
        Self::with_store(cfg, Arc::new(store))
    }

    pub fn with_store(cfg: ConsoleConfig, store: Arc<dyn RealmStore>) -> Result<Self> {
        cfg.validate()?;
        let catalog = Arc::new(PolicyCatalog::new(cfg.catalog.iter().cloned()));

        // Seeded policies may predate the current catalog; they still load,
        // minus the unknown kinds.
        for r in &cfg.realms {
            let policy = r.password_policy.as_deref().unwrap_or_default();
            let unknown = unknown_ids(policy, &catalog);
            if !unknown.is_empty() {
                tracing::warn!(realm = %r.id, ?unknown, "realm policy references kinds missing from catalog");
            }
        }

        tracing::info!(kinds = catalog.len(), realms = cfg.realms.len(), "console state ready");

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                catalog,
                store,
                metrics: ConsoleMetrics::default(),
            }),
        })
    }

    pub fn cfg(&self) -> &ConsoleConfig {
        &self.inner.cfg
    }

    pub fn catalog(&self) -> Arc<PolicyCatalog> {
        Arc::clone(&self.inner.catalog)
    }

    pub fn store(&self) -> Arc<dyn RealmStore> {
        Arc::clone(&self.inner.store)
    }

    pub fn metrics(&self) -> &ConsoleMetrics {
        &self.inner.metrics
    }
}

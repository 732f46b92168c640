//! Session handle pool
//!
//! A lightweight factory that owns shared configuration and lends fresh
//! handles. Leases do not share a transport: each lease builds its own
//! and closes it on drop. They do share the pool's metadata bag, which
//! is passed by reference into every lease for process-wide caches such
//! as a token cache.

use std::ops::Deref;
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

use crate::rest::RestClient;
use crate::settings::Settings;

/// The pool. Cloning shares the configuration and the metadata bag.
#[derive(Debug, Clone)]
pub struct ClientPool {
    settings: Settings,
    metadata: Arc<DashMap<String, Value>>,
}

impl ClientPool {
    /// Build a pool around validated settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings, metadata: Arc::new(DashMap::new()) }
    }

    /// The process-wide metadata bag shared by every lease.
    pub fn metadata(&self) -> &DashMap<String, Value> {
        &self.metadata
    }

    /// Lend a fresh scoped handle. The handle closes itself when the
    /// guard drops. Each lease gets its own per-handle metadata bag;
    /// the pool's bag rides along by reference.
    pub fn lease(&self) -> PooledClient {
        PooledClient {
            client: RestClient::new(self.settings.clone()),
            shared: Arc::clone(&self.metadata),
        }
    }
}

/// A scoped lease over a [`RestClient`]. Dereferences to the handle and
/// closes it on drop.
#[derive(Debug)]
pub struct PooledClient {
    client: RestClient,
    shared: Arc<DashMap<String, Value>>,
}

impl PooledClient {
    /// The pool-wide metadata bag this lease was lent from.
    pub fn pool_metadata(&self) -> &DashMap<String, Value> {
        &self.shared
    }
}

impl Deref for PooledClient {
    type Target = RestClient;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl Drop for PooledClient {
    fn drop(&mut self) {
        self.client.close();
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for pool leasing.
    use serde_json::json;

    use super::*;

    /// Validates `ClientPool::lease` behavior for scoped closing.
    ///
    /// Assertions:
    /// - Confirms a lease is open while in scope.
    /// - Confirms dropping the guard closes its handle.
    #[test]
    fn test_lease_closes_on_drop() {
        let pool = ClientPool::new(Settings::new("key").unwrap());
        let lease = pool.lease();
        assert!(!lease.is_closed());
        drop(lease);

        // A second lease is unaffected by the first one's close.
        assert!(!pool.lease().is_closed());
    }

    /// Validates metadata sharing semantics between pool and leases.
    ///
    /// Assertions:
    /// - Confirms a value written to a lease's pool bag is visible from
    ///   the pool and from later leases.
    /// - Confirms per-handle bags are not shared between leases.
    #[test]
    fn test_shared_metadata_bag() {
        let pool = ClientPool::new(Settings::new("key").unwrap());

        let lease = pool.lease();
        lease.pool_metadata().insert("token".into(), json!("cached"));
        lease.metadata().insert("private".into(), json!(1));
        drop(lease);

        assert_eq!(pool.metadata().get("token").map(|v| v.clone()), Some(json!("cached")));
        let next = pool.lease();
        assert_eq!(next.pool_metadata().get("token").map(|v| v.clone()), Some(json!("cached")));
        assert!(next.metadata().get("private").is_none());
    }
}

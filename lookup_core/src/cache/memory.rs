//! In-process cache for tests and ephemeral runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{CacheEntry, CacheStore, Clock};
use crate::error::Result;

/// Records kept in a map for the life of the process.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    /// Empty cache stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Number of stored records, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn read(&self, key: &str) -> Option<CacheEntry> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    async fn write(&self, key: &str, payload: &serde_json::Value) -> Result<()> {
        let entry = CacheEntry {
            key: key.to_string(),
            fetched_at_ms: self.clock.now_ms(),
            payload: payload.clone(),
        };
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_read_after_write_within_ttl() {
        let clock = Arc::new(ManualClock::new(1_000));
        let cache = MemoryCache::new(clock.clone());
        let ttl = Duration::from_secs(60);

        let payload = json!({ "latest": "14.1.1", "nested": [1, 2, { "a": null }] });
        cache.write("dd_versions", &payload).await.unwrap();

        clock.advance(Duration::from_secs(59));
        let entry = cache.read("dd_versions").await.unwrap();
        assert!(entry.is_fresh(clock.now_ms(), ttl));
        assert_eq!(entry.payload, payload);
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let clock = Arc::new(ManualClock::new(1_000));
        let cache = MemoryCache::new(clock.clone());
        let ttl = Duration::from_secs(60);

        cache.write("dd_versions", &json!("14.1.1")).await.unwrap();
        clock.advance(Duration::from_secs(60));

        let entry = cache.read("dd_versions").await.unwrap();
        assert!(!entry.is_fresh(clock.now_ms(), ttl));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_write_survives_poisoned_lock() {
        let cache = Arc::new(MemoryCache::new(Arc::new(ManualClock::new(1_000))));

        let poisoner = Arc::clone(&cache);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.entries.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(cache.entries.is_poisoned());

        cache.write("dd_versions", &json!("14.1.1")).await.unwrap();
        assert_eq!(cache.read("dd_versions").await.unwrap().payload, json!("14.1.1"));
        assert_eq!(cache.len(), 1);
    }
}

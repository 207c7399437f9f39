//! Cache Store - durable key/value records over JSON payloads.
//!
//! The store only remembers when each payload was written. Freshness is
//! decided by the caller, which knows which TTL tier a key belongs to; an
//! expired entry must be treated exactly like a missing one.
//!
//! Every write replaces the whole record for its key, so concurrent queries
//! can read and write without further coordination.

mod clock;
mod file;
mod memory;

pub use clock::*;
pub use file::*;
pub use memory::*;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::Result;

/// One stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub key: String,
    /// Write time, milliseconds since the Unix epoch.
    pub fetched_at_ms: u64,
    pub payload: serde_json::Value,
}

impl CacheEntry {
    /// An entry is valid iff `now - fetched_at < ttl`.
    ///
    /// Entries stamped in the future (clock moved backwards) count as fresh.
    pub fn is_fresh(&self, now_ms: u64, ttl: Duration) -> bool {
        let age = now_ms.saturating_sub(self.fetched_at_ms);
        u128::from(age) < ttl.as_millis()
    }

    /// Age of the entry relative to `now_ms`.
    pub fn age(&self, now_ms: u64) -> Duration {
        Duration::from_millis(now_ms.saturating_sub(self.fetched_at_ms))
    }
}

/// Storage seam for cached documents.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch the record for `key`.
    ///
    /// Missing, unreadable and corrupt records all come back as `None`.
    async fn read(&self, key: &str) -> Option<CacheEntry>;

    /// Store `payload` under `key`, stamped with the store's current time.
    async fn write(&self, key: &str, payload: &serde_json::Value) -> Result<()>;
}

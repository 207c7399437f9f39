//! File-backed cache: one JSON record per key.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::{CacheEntry, CacheStore, Clock};
use crate::error::{LookupError, Result};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a uniquely named temporary file that is then renamed over
/// the target, so a reader sees either the old record or the new one.
pub struct FileCache {
    dir: PathBuf,
    clock: Arc<dyn Clock>,
}

impl FileCache {
    /// Cache rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            dir: dir.into(),
            clock,
        }
    }

    /// Path of the record for `key`.
    ///
    /// Characters outside `[A-Za-z0-9_.-]` are replaced so that champion
    /// ids and locales can never escape the cache directory.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let file = file.trim_start_matches('.');
        self.dir.join(format!("{file}.json"))
    }
}

#[async_trait]
impl CacheStore for FileCache {
    async fn read(&self, key: &str) -> Option<CacheEntry> {
        let path = self.path_for(key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    debug!(key, error = %e, "cache record unreadable");
                }
                return None;
            }
        };

        match serde_json::from_slice::<CacheEntry>(&bytes) {
            Ok(entry) if entry.key == key => Some(entry),
            Ok(entry) => {
                debug!(key, stored = %entry.key, "cache record key mismatch");
                None
            }
            Err(e) => {
                debug!(key, error = %e, "corrupt cache record");
                None
            }
        }
    }

    async fn write(&self, key: &str, payload: &serde_json::Value) -> Result<()> {
        let io_err = |source| LookupError::Cache {
            key: key.to_string(),
            source,
        };

        tokio::fs::create_dir_all(&self.dir).await.map_err(io_err)?;

        let entry = CacheEntry {
            key: key.to_string(),
            fetched_at_ms: self.clock.now_ms(),
            payload: payload.clone(),
        };
        let bytes = serde_json::to_vec(&entry).map_err(|e| LookupError::Decode {
            what: format!("cache record {key}"),
            source: e,
        })?;

        let target = self.path_for(key);
        let tmp = self.dir.join(format!(".{}.tmp", Uuid::new_v4()));
        tokio::fs::write(&tmp, &bytes).await.map_err(io_err)?;
        if let Err(e) = tokio::fs::rename(&tmp, &target).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(io_err(e));
        }

        debug!(key, path = %target.display(), "cache record written");
        Ok(())
    }
}

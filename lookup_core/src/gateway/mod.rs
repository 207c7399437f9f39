//! Remote Data Gateway - fetches JSON documents from the versioned store.
//!
//! A non-success status or a transport failure is the only error signal;
//! there is no partial-body handling.

mod http;

pub use http::*;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

/// Outcome of a fetch that must not abort the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FetchOutcome {
    Document(serde_json::Value),
    Failed(FetchFailure),
}

/// Tagged failure carried by [`FetchOutcome::Failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchFailure {
    pub url: String,
    pub status: Option<u16>,
    pub message: String,
}

#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// GET `url` and decode the body as JSON.
    async fn fetch(&self, url: &str) -> Result<serde_json::Value>;

    /// Like [`fetch`](Self::fetch), but failures come back as a value.
    async fn fetch_tolerant(&self, url: &str) -> FetchOutcome {
        match self.fetch(url).await {
            Ok(doc) => FetchOutcome::Document(doc),
            Err(e) => FetchOutcome::Failed(FetchFailure {
                url: url.to_string(),
                status: e.status(),
                message: e.to_string(),
            }),
        }
    }
}

//! `reqwest`-backed gateway.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use super::RemoteGateway;
use crate::error::{LookupError, Result};

pub struct HttpGateway {
    client: reqwest::Client,
}

impl HttpGateway {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("runeterra-lookup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LookupError::Config(format!("http client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    async fn fetch(&self, url: &str) -> Result<serde_json::Value> {
        info!(url, "fetching document");

        let transport = |e: reqwest::Error| LookupError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Remote {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let doc = response
            .json::<serde_json::Value>()
            .await
            .map_err(transport)?;
        debug!(url, "document decoded");
        Ok(doc)
    }
}

//! Data Access Layer - read-through catalogs over the cache and the gateway.
//!
//! Every accessor follows the same policy:
//! 1. **Cache**: return the cached document if it is fresh and decodes
//! 2. **Version**: otherwise resolve the current release (itself cached)
//! 3. **Fetch**: download the versioned, localized document
//! 4. **Write-through**: store it with a fresh timestamp and return it
//!
//! Failures never escape: they are logged and the catalog comes back absent,
//! so the caller answers "not found" instead of erroring.

mod catalog;

pub use catalog::*;

use game_data::{ChampionDetail, ChampionDocument, ChampionIndex, ItemTable, RuneTrees, SpellTable};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::cache::{CacheStore, Clock};
use crate::config::LookupConfig;
use crate::error::{LookupError, Result};
use crate::gateway::{FetchOutcome, RemoteGateway};

/// Read-through access to the Data Dragon catalogs.
pub struct DataDragon {
    config: Arc<LookupConfig>,
    cache: Arc<dyn CacheStore>,
    gateway: Arc<dyn RemoteGateway>,
    clock: Arc<dyn Clock>,
}

impl DataDragon {
    pub fn new(
        config: Arc<LookupConfig>,
        cache: Arc<dyn CacheStore>,
        gateway: Arc<dyn RemoteGateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            cache,
            gateway,
            clock,
        }
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Current release token, cached under its own (shorter) TTL.
    pub async fn latest_version(&self) -> Result<String> {
        let ttl = TtlTier::Version.ttl(&self.config.ttl);
        if let Some(version) = self.cached::<String>(VERSION_KEY, ttl).await {
            return Ok(version);
        }

        let url = versions_url(&self.config.base_url);
        let doc = self.gateway.fetch(&url).await?;
        let versions: Vec<String> = decode(doc, "version list")?;
        let latest = versions
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::Missing(format!("release in {url}")))?;

        self.write_through(VERSION_KEY, &serde_json::Value::String(latest.clone()))
            .await;
        debug!(version = %latest, "resolved current release");
        Ok(latest)
    }

    pub async fn champion_index(&self) -> Option<ChampionIndex> {
        let catalog = Catalog::ChampionIndex;
        absorb(&catalog, self.load(&catalog).await)
    }

    /// Full record for a champion id taken from the index.
    pub async fn champion_detail(&self, id: &str) -> Option<ChampionDetail> {
        let catalog = Catalog::ChampionDetail(id.to_string());
        let detail = self
            .load::<ChampionDocument>(&catalog)
            .await
            .and_then(|doc| {
                doc.into_champion(id)
                    .ok_or_else(|| LookupError::Missing(format!("champion {id} in its document")))
            });
        absorb(&catalog, detail)
    }

    pub async fn item_table(&self) -> Option<ItemTable> {
        let catalog = Catalog::Items;
        absorb(&catalog, self.load(&catalog).await)
    }

    pub async fn spell_table(&self) -> Option<SpellTable> {
        let catalog = Catalog::SummonerSpells;
        absorb(&catalog, self.load(&catalog).await)
    }

    /// Rune trees, trying each locale of the chain in turn.
    ///
    /// The first locale that yields a usable document wins; it is cached
    /// under the preferred-locale key. Absent only when every attempt fails.
    pub async fn rune_trees(&self) -> Option<RuneTrees> {
        let catalog = Catalog::RuneTrees;
        let key = catalog.cache_key(&self.config.locale);
        let ttl = catalog.tier().ttl(&self.config.ttl);

        if let Some(trees) = self.cached::<RuneTrees>(&key, ttl).await {
            return Some(trees);
        }

        let version = absorb(&catalog, self.latest_version().await)?;

        for locale in self.config.locale_chain() {
            let url = catalog.url(&self.config.base_url, &version, locale);
            match self.gateway.fetch_tolerant(&url).await {
                FetchOutcome::Document(doc) => match decode::<RuneTrees>(doc.clone(), catalog.label()) {
                    Ok(trees) => {
                        self.write_through(&key, &doc).await;
                        return Some(trees);
                    }
                    Err(e) => warn!(locale, error = %e, "rune trees undecodable, trying next locale"),
                },
                FetchOutcome::Failed(failure) => {
                    warn!(locale, url = %failure.url, error = %failure.message, "rune trees unavailable, trying next locale");
                }
            }
        }

        warn!("rune trees unavailable in every locale");
        None
    }

    async fn load<T: DeserializeOwned>(&self, catalog: &Catalog) -> Result<T> {
        let key = catalog.cache_key(&self.config.locale);
        let ttl = catalog.tier().ttl(&self.config.ttl);

        if let Some(value) = self.cached::<T>(&key, ttl).await {
            return Ok(value);
        }

        let version = self.latest_version().await?;
        let url = catalog.url(&self.config.base_url, &version, &self.config.locale);
        let doc = self.gateway.fetch(&url).await?;
        let value = decode::<T>(doc.clone(), catalog.label())?;
        self.write_through(&key, &doc).await;
        Ok(value)
    }

    /// Fresh, decodable cached value for `key`, if any.
    async fn cached<T: DeserializeOwned>(&self, key: &str, ttl: Duration) -> Option<T> {
        let entry = self.cache.read(key).await?;
        let now = self.clock.now_ms();
        if !entry.is_fresh(now, ttl) {
            debug!(key, age_secs = entry.age(now).as_secs(), "cache entry stale");
            return None;
        }

        match serde_json::from_value(entry.payload) {
            Ok(value) => {
                debug!(key, "cache hit");
                Some(value)
            }
            Err(e) => {
                warn!(key, error = %e, "cached payload undecodable, refetching");
                None
            }
        }
    }

    async fn write_through(&self, key: &str, payload: &serde_json::Value) {
        if let Err(e) = self.cache.write(key, payload).await {
            warn!(key, error = %e, "cache write failed");
        }
    }
}

fn decode<T: DeserializeOwned>(doc: serde_json::Value, what: &str) -> Result<T> {
    serde_json::from_value(doc).map_err(|source| LookupError::Decode {
        what: what.to_string(),
        source,
    })
}

fn absorb<T>(catalog: &Catalog, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(catalog = catalog.label(), error = %e, "catalog unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{ManualClock, MemoryCache};
    use crate::testing::{fixture_gateway, FixtureGateway, BASE_URL};
    use serde_json::json;

    struct Harness {
        clock: Arc<ManualClock>,
        cache: Arc<MemoryCache>,
        gateway: Arc<FixtureGateway>,
        data: DataDragon,
    }

    fn harness_with(gateway: FixtureGateway, config: LookupConfig) -> Harness {
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let cache = Arc::new(MemoryCache::new(clock.clone()));
        let gateway = Arc::new(gateway);
        let data = DataDragon::new(
            Arc::new(config),
            cache.clone(),
            gateway.clone(),
            clock.clone(),
        );
        Harness {
            clock,
            cache,
            gateway,
            data,
        }
    }

    fn harness() -> Harness {
        harness_with(fixture_gateway(), crate::testing::config())
    }

    #[tokio::test]
    async fn test_version_is_fetched_once_while_fresh() {
        let h = harness();

        assert!(h.data.champion_index().await.is_some());
        assert!(h.data.item_table().await.is_some());
        assert!(h.data.spell_table().await.is_some());

        assert_eq!(h.gateway.count_matching("versions.json"), 1);
        assert!(h
            .gateway
            .calls()
            .iter()
            .filter(|u| !u.contains("versions.json"))
            .all(|u| u.contains("/cdn/14.2.1/")));
    }

    #[tokio::test]
    async fn test_catalog_served_from_cache_within_ttl() {
        let h = harness();

        h.data.champion_index().await.unwrap();
        h.clock.advance(Duration::from_secs(23 * 3600));
        h.data.champion_index().await.unwrap();

        assert_eq!(h.gateway.count_matching("champion.json"), 1);
    }

    #[tokio::test]
    async fn test_catalog_refetched_after_ttl() {
        let h = harness();

        h.data.champion_index().await.unwrap();
        h.clock.advance(Duration::from_secs(24 * 3600));
        h.data.champion_index().await.unwrap();

        assert_eq!(h.gateway.count_matching("champion.json"), 2);
        // the release token expired too (6h) and was re-resolved
        assert_eq!(h.gateway.count_matching("versions.json"), 2);
    }

    #[tokio::test]
    async fn test_detail_outlives_catalog_tier() {
        let h = harness();

        h.data.champion_detail("Jinx").await.unwrap();
        h.clock.advance(Duration::from_secs(6 * 24 * 3600));
        let jinx = h.data.champion_detail("Jinx").await.unwrap();

        assert_eq!(jinx.name, "Jinx");
        assert_eq!(h.gateway.count_matching("champion/Jinx.json"), 1);
    }

    #[tokio::test]
    async fn test_write_through_stores_payload() {
        let h = harness();
        h.data.item_table().await.unwrap();

        let entry = h.cache.read("items_pt_BR").await.unwrap();
        assert_eq!(entry.fetched_at_ms, h.clock.now_ms());
        assert!(entry.payload["data"]["3031"].is_object());
        let version = h.cache.read(VERSION_KEY).await.unwrap();
        assert_eq!(version.payload, json!("14.2.1"));
    }

    #[tokio::test]
    async fn test_undecodable_cache_entry_is_refetched() {
        let h = harness();
        h.cache
            .write("champs_pt_BR", &json!({ "data": "not a map" }))
            .await
            .unwrap();

        let index = h.data.champion_index().await.unwrap();
        assert!(!index.is_empty());
        assert_eq!(h.gateway.count_matching("champion.json"), 1);
    }

    #[tokio::test]
    async fn test_remote_failure_is_absent() {
        let h = harness_with(FixtureGateway::new(), crate::testing::config());
        assert!(h.data.champion_index().await.is_none());
        assert!(h.data.rune_trees().await.is_none());
        assert!(h.cache.is_empty());
    }

    #[tokio::test]
    async fn test_missing_champion_record_is_absent() {
        let h = harness();
        assert!(h.data.champion_detail("Teemo").await.is_none());
    }

    #[tokio::test]
    async fn test_empty_version_list_is_absent() {
        let gateway = fixture_gateway().with(&versions_url(BASE_URL), json!([]));
        let h = harness_with(gateway, crate::testing::config());
        assert!(h.data.latest_version().await.is_err());
        assert!(h.data.item_table().await.is_none());
    }

    #[tokio::test]
    async fn test_rune_trees_preferred_locale() {
        let h = harness();
        let trees = h.data.rune_trees().await.unwrap();

        assert_eq!(trees.trees().next().unwrap().name, "Precisão");
        assert_eq!(h.gateway.count_matching("/en_US/"), 0);
    }

    #[tokio::test]
    async fn test_rune_trees_fall_back_to_default_locale() {
        let gateway = fixture_gateway().without(&format!(
            "{BASE_URL}/cdn/14.2.1/data/pt_BR/runesReforged.json"
        ));
        let h = harness_with(gateway, crate::testing::config());

        let trees = h.data.rune_trees().await.unwrap();
        assert_eq!(trees.trees().next().unwrap().name, "Precision");

        // cached under the preferred key, holding the fallback document only
        let entry = h.cache.read("runesReforged_pt_BR").await.unwrap();
        assert_eq!(entry.payload[0]["name"], json!("Precision"));
        assert_eq!(entry.payload.as_array().unwrap().len(), 2);

        // second call is a cache hit
        h.data.rune_trees().await.unwrap();
        assert_eq!(h.gateway.count_matching("runesReforged.json"), 2);
    }

    #[tokio::test]
    async fn test_rune_trees_absent_when_every_locale_fails() {
        let gateway = fixture_gateway()
            .without(&format!("{BASE_URL}/cdn/14.2.1/data/pt_BR/runesReforged.json"))
            .without(&format!("{BASE_URL}/cdn/14.2.1/data/en_US/runesReforged.json"));
        let h = harness_with(gateway, crate::testing::config());

        assert!(h.data.rune_trees().await.is_none());
        assert!(h.cache.read("runesReforged_pt_BR").await.is_none());
    }
}

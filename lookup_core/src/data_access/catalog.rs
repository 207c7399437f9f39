//! Catalog identities: cache keys, document paths and freshness tiers.

use std::time::Duration;

use crate::config::TtlConfig;

/// Cache key of the current release token.
pub const VERSION_KEY: &str = "dd_versions";

/// Freshness tier of a cached document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtlTier {
    /// Release token.
    Version,
    /// Champion index, items, summoner spells.
    Catalog,
    /// Per-champion detail and rune trees.
    Detail,
}

impl TtlTier {
    pub fn ttl(&self, config: &TtlConfig) -> Duration {
        let secs = match self {
            TtlTier::Version => config.version_secs,
            TtlTier::Catalog => config.catalog_secs,
            TtlTier::Detail => config.detail_secs,
        };
        Duration::from_secs(secs)
    }
}

/// A versioned, localized document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Catalog {
    ChampionIndex,
    ChampionDetail(String),
    Items,
    SummonerSpells,
    RuneTrees,
}

impl Catalog {
    pub fn tier(&self) -> TtlTier {
        match self {
            Catalog::ChampionIndex | Catalog::Items | Catalog::SummonerSpells => TtlTier::Catalog,
            Catalog::ChampionDetail(_) | Catalog::RuneTrees => TtlTier::Detail,
        }
    }

    /// Cache key; always built from the preferred locale, even when the
    /// document itself came from a fallback locale.
    pub fn cache_key(&self, locale: &str) -> String {
        match self {
            Catalog::ChampionIndex => format!("champs_{locale}"),
            Catalog::ChampionDetail(id) => format!("champ_{locale}_{id}"),
            Catalog::Items => format!("items_{locale}"),
            Catalog::SummonerSpells => format!("spells_{locale}"),
            Catalog::RuneTrees => format!("runesReforged_{locale}"),
        }
    }

    /// Path of the document below `data/<locale>/`.
    pub fn document_path(&self) -> String {
        match self {
            Catalog::ChampionIndex => "champion.json".to_string(),
            Catalog::ChampionDetail(id) => format!("champion/{id}.json"),
            Catalog::Items => "item.json".to_string(),
            Catalog::SummonerSpells => "summoner.json".to_string(),
            Catalog::RuneTrees => "runesReforged.json".to_string(),
        }
    }

    pub fn url(&self, base_url: &str, version: &str, locale: &str) -> String {
        format!(
            "{}/cdn/{}/data/{}/{}",
            base_url.trim_end_matches('/'),
            version,
            locale,
            self.document_path()
        )
    }

    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Catalog::ChampionIndex => "champion index",
            Catalog::ChampionDetail(_) => "champion detail",
            Catalog::Items => "item table",
            Catalog::SummonerSpells => "summoner spells",
            Catalog::RuneTrees => "rune trees",
        }
    }
}

/// URL of the release list.
pub fn versions_url(base_url: &str) -> String {
    format!("{}/api/versions.json", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        let ttl = TtlConfig::default();
        assert_eq!(TtlTier::Version.ttl(&ttl), Duration::from_secs(6 * 3600));
        assert_eq!(Catalog::Items.tier().ttl(&ttl), Duration::from_secs(24 * 3600));
        assert_eq!(Catalog::SummonerSpells.tier(), TtlTier::Catalog);
        assert_eq!(
            Catalog::ChampionDetail("Jinx".into()).tier().ttl(&ttl),
            Duration::from_secs(7 * 24 * 3600)
        );
        assert_eq!(Catalog::RuneTrees.tier(), TtlTier::Detail);
    }

    #[test]
    fn test_cache_keys() {
        assert_eq!(Catalog::ChampionIndex.cache_key("pt_BR"), "champs_pt_BR");
        assert_eq!(
            Catalog::ChampionDetail("Jinx".into()).cache_key("pt_BR"),
            "champ_pt_BR_Jinx"
        );
        assert_eq!(Catalog::RuneTrees.cache_key("en_US"), "runesReforged_en_US");
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            Catalog::ChampionDetail("Ahri".into()).url("https://dd.test/", "14.1.1", "pt_BR"),
            "https://dd.test/cdn/14.1.1/data/pt_BR/champion/Ahri.json"
        );
        assert_eq!(versions_url("https://dd.test"), "https://dd.test/api/versions.json");
    }
}

//! Engine configuration.
//!
//! Loaded from an optional TOML file; `DD_LANG` and `RUNETERRA_CACHE_DIR`
//! override the file when set.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{LookupError, Result};

pub const DEFAULT_BASE_URL: &str = "https://ddragon.leagueoflegends.com";
pub const DEFAULT_LOCALE: &str = "pt_BR";
pub const FALLBACK_LOCALE: &str = "en_US";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Preferred locale for catalog documents.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Locale tried when a document is missing in the preferred one.
    #[serde(default = "default_fallback_locale")]
    pub fallback_locale: String,

    /// Data Dragon root, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory holding one JSON record per cache key.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Hard cap on answer length, in characters.
    #[serde(default = "default_max_answer_len")]
    pub max_answer_len: usize,

    /// Minimum spacing between mention-triggered queries of one user.
    #[serde(default = "default_mention_cooldown")]
    pub mention_cooldown_ms: u64,

    #[serde(default)]
    pub ttl: TtlConfig,
}

/// Freshness tiers, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtlConfig {
    /// Current release token.
    #[serde(default = "default_version_ttl")]
    pub version_secs: u64,

    /// Champion index, item table, summoner spells.
    #[serde(default = "default_catalog_ttl")]
    pub catalog_secs: u64,

    /// Per-champion detail and rune trees.
    #[serde(default = "default_detail_ttl")]
    pub detail_secs: u64,
}

impl Default for TtlConfig {
    fn default() -> Self {
        Self {
            version_secs: default_version_ttl(),
            catalog_secs: default_catalog_ttl(),
            detail_secs: default_detail_ttl(),
        }
    }
}

fn default_locale() -> String { DEFAULT_LOCALE.to_string() }
fn default_fallback_locale() -> String { FALLBACK_LOCALE.to_string() }
fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }
fn default_cache_dir() -> PathBuf { PathBuf::from("cache") }
fn default_request_timeout() -> u64 { 10 }
fn default_max_answer_len() -> usize { 1800 }
fn default_mention_cooldown() -> u64 { 1200 }
fn default_version_ttl() -> u64 { 6 * 60 * 60 } // 6h
fn default_catalog_ttl() -> u64 { 24 * 60 * 60 } // 24h
fn default_detail_ttl() -> u64 { 7 * 24 * 60 * 60 } // 7d

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            fallback_locale: default_fallback_locale(),
            base_url: default_base_url(),
            cache_dir: default_cache_dir(),
            request_timeout_secs: default_request_timeout(),
            max_answer_len: default_max_answer_len(),
            mention_cooldown_ms: default_mention_cooldown(),
            ttl: TtlConfig::default(),
        }
    }
}

impl LookupConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| LookupError::Config(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise start from defaults, then
    /// apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) if p.exists() => {
                let text = std::fs::read_to_string(p)
                    .map_err(|e| LookupError::Config(format!("{}: {}", p.display(), e)))?;
                Self::from_toml_str(&text)?
            }
            _ => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `DD_LANG` / `RUNETERRA_CACHE_DIR` from the given lookup.
    pub fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = var("DD_LANG").filter(|v| !v.trim().is_empty()) {
            self.locale = locale.trim().to_string();
        }
        if let Some(dir) = var("RUNETERRA_CACHE_DIR").filter(|v| !v.trim().is_empty()) {
            self.cache_dir = PathBuf::from(dir.trim());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.locale.is_empty() {
            return Err(LookupError::Config("locale must not be empty".to_string()));
        }
        // room for at least a name line plus the ellipsis
        if self.max_answer_len < 16 {
            return Err(LookupError::Config(format!(
                "max_answer_len {} is too small",
                self.max_answer_len
            )));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn mention_cooldown(&self) -> Duration {
        Duration::from_millis(self.mention_cooldown_ms)
    }

    /// Locales to try for documents with localization gaps, preferred first.
    pub fn locale_chain(&self) -> Vec<&str> {
        let mut chain = vec![self.locale.as_str()];
        if self.fallback_locale != self.locale && !self.fallback_locale.is_empty() {
            chain.push(self.fallback_locale.as_str());
        }
        chain
    }
}

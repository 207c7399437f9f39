//! # Lookup Core
//!
//! The engine behind the Runeterra assistant. It answers questions about
//! champions, items, runes, summoner spells and regions from Data Dragon
//! snapshots, kept in a local TTL cache.
//!
//! ## Core Components
//!
//! - **cache**: Keyed JSON records with fetch timestamps (file or memory backed)
//! - **gateway**: HTTP access to the versioned data store
//! - **data_access**: Read-through catalogs with per-tier freshness
//! - **resolver**: Staged fuzzy name matching over a catalog
//! - **formatter**: Bounded, markup-free answer text
//! - **intent**: Keyword classification of free questions
//! - **dispatch**: Commands, mentions and the per-user cooldown
//!
//! ## Design Philosophy
//!
//! - **Deterministic**: The same query against the same snapshot gives the same answer
//! - **Forgiving**: Upstream trouble degrades to "not found", never to an error reply
//! - **Cache-First**: Remote fetches only happen when the cached copy is stale

pub mod cache;
pub mod config;
pub mod data_access;
pub mod dispatch;
pub mod error;
pub mod formatter;
pub mod gateway;
pub mod intent;
pub mod resolver;

#[cfg(test)]
mod testing;

pub use cache::{CacheEntry, CacheStore, Clock, FileCache, ManualClock, MemoryCache, SystemClock};
pub use config::LookupConfig;
pub use data_access::DataDragon;
pub use dispatch::{Answer, Assistant, Command, Inbound};
pub use error::{LookupError, Result};
pub use formatter::AnswerFormatter;
pub use gateway::{FetchOutcome, HttpGateway, RemoteGateway};
pub use intent::{classify, ResolutionQuery};
pub use resolver::{normalize, resolve, resolve_region, resolve_rune};

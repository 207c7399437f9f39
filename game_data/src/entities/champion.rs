//! Champion definitions.

use serde::{Deserialize, Serialize};

/// A champion as listed in the champion index document.
///
/// The index is small and cheap to fetch; it is what name resolution runs
/// against. The full record is fetched separately by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionSummary {
    /// Data Dragon id, e.g. `"MissFortune"`.
    pub id: String,
    /// Numeric key as a string, e.g. `"21"`.
    pub key: String,
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub tags: Vec<String>,
}

/// A named ability: the passive or one of the active spells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ability {
    pub name: String,
    /// Description with upstream markup.
    pub description: String,
}

/// The full champion record from the per-champion document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionDetail {
    pub id: String,
    pub name: String,
    pub title: String,
    pub tags: Vec<String>,
    pub lore: String,
    pub blurb: String,
    pub passive: Option<Ability>,
    /// Active abilities in slot order (Q, W, E, R).
    pub spells: Vec<Ability>,
}

impl ChampionDetail {
    /// Long lore when present, otherwise the short blurb.
    pub fn lore_or_blurb(&self) -> &str {
        if self.lore.is_empty() {
            &self.blurb
        } else {
            &self.lore
        }
    }
}

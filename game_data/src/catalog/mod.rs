//! Catalog documents - the top-level shapes of each Data Dragon file.
//!
//! Map-shaped documents decode into [`IndexMap`] so entries keep document
//! order; resolution is "first match wins" over that order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::entities::{ChampionDetail, ChampionSummary, Item, RuneTree, SummonerSpell};

/// `champion.json`: every champion, summary fields only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionIndex {
    pub version: String,
    pub data: IndexMap<String, ChampionSummary>,
}

impl ChampionIndex {
    pub fn champions(&self) -> impl Iterator<Item = &ChampionSummary> {
        self.data.values()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// `champion/<id>.json`: a single champion's full record, keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionDocument {
    pub data: IndexMap<String, ChampionDetail>,
}

impl ChampionDocument {
    /// Take the record for `id` out of the document.
    pub fn into_champion(mut self, id: &str) -> Option<ChampionDetail> {
        self.data.shift_remove(id)
    }
}

/// `item.json`: every item keyed by numeric id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawItemTable")]
pub struct ItemTable {
    pub data: IndexMap<String, Item>,
}

#[derive(Deserialize)]
struct RawItemTable {
    #[serde(default)]
    data: IndexMap<String, Item>,
}

impl From<RawItemTable> for ItemTable {
    fn from(raw: RawItemTable) -> Self {
        let data = raw
            .data
            .into_iter()
            .map(|(id, mut item)| {
                item.id = id.clone();
                (id, item)
            })
            .collect();
        Self { data }
    }
}

impl ItemTable {
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.data.values()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// `summoner.json`: every summoner spell keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellTable {
    pub data: IndexMap<String, SummonerSpell>,
}

impl SpellTable {
    pub fn spells(&self) -> impl Iterator<Item = &SummonerSpell> {
        self.data.values()
    }
}

/// `runesReforged.json`: a bare array of rune trees.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuneTrees(pub Vec<RuneTree>);

impl RuneTrees {
    pub fn trees(&self) -> impl Iterator<Item = &RuneTree> {
        self.0.iter()
    }
}

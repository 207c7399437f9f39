//! Entity definitions for the game-data corpus.

mod champion;
mod item;
mod rune;
mod spell;

pub use champion::*;
pub use item::*;
pub use rune::*;
pub use spell::*;

use serde::{Deserialize, Serialize};

use crate::lore::Region;

/// Kinds of entities a query can be resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Region,
    Champion,
    Item,
    Rune,
    SummonerSpell,
}

impl EntityType {
    /// Catalog order used when a query carries no usable type signal.
    pub const FALLBACK_ORDER: [EntityType; 4] = [
        EntityType::Champion,
        EntityType::Item,
        EntityType::Rune,
        EntityType::SummonerSpell,
    ];

    /// Short lowercase label, used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            EntityType::Region => "region",
            EntityType::Champion => "champion",
            EntityType::Item => "item",
            EntityType::Rune => "rune",
            EntityType::SummonerSpell => "summoner_spell",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A resolved entity, ready to be rendered into an answer.
#[derive(Debug, Clone, Serialize)]
pub enum Entity {
    Champion(ChampionDetail),
    Item(Item),
    SummonerSpell(SummonerSpell),
    Rune(Rune),
    RuneTree(RuneTree),
    Region(Region),
}

impl Entity {
    /// The entity type reported on answers built from this entity.
    ///
    /// Rune trees report [`EntityType::Rune`]; both come from the same document.
    pub fn entity_type(&self) -> EntityType {
        match self {
            Entity::Champion(_) => EntityType::Champion,
            Entity::Item(_) => EntityType::Item,
            Entity::SummonerSpell(_) => EntityType::SummonerSpell,
            Entity::Rune(_) | Entity::RuneTree(_) => EntityType::Rune,
            Entity::Region(_) => EntityType::Region,
        }
    }

    /// Upstream identifier of the entity.
    pub fn id(&self) -> String {
        match self {
            Entity::Champion(c) => c.id.clone(),
            Entity::Item(i) => i.id.clone(),
            Entity::SummonerSpell(s) => s.id.clone(),
            Entity::Rune(r) => r.id.to_string(),
            Entity::RuneTree(t) => t.id.to_string(),
            Entity::Region(r) => r.key.to_string(),
        }
    }

    /// Human-facing name of the entity.
    pub fn display_name(&self) -> &str {
        match self {
            Entity::Champion(c) => &c.name,
            Entity::Item(i) => &i.name,
            Entity::SummonerSpell(s) => &s.name,
            Entity::Rune(r) => &r.name,
            Entity::RuneTree(t) => &t.name,
            Entity::Region(r) => r.name,
        }
    }

    /// Raw description, which may still contain upstream markup.
    pub fn description_html(&self) -> &str {
        match self {
            Entity::Champion(c) => c.lore_or_blurb(),
            Entity::Item(i) => &i.description,
            Entity::SummonerSpell(s) => &s.description,
            Entity::Rune(r) => r.description(),
            Entity::RuneTree(t) => t.description(),
            Entity::Region(r) => r.lore,
        }
    }
}

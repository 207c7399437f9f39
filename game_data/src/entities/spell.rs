//! Summoner spell definitions.

use serde::{Deserialize, Serialize};

/// A summoner spell (Flash, Ignite, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummonerSpell {
    /// Data Dragon id, e.g. `"SummonerFlash"`.
    pub id: String,
    pub key: String,
    pub name: String,
    pub description: String,
}

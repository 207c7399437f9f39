//! Shared fixtures for unit tests: an in-memory gateway serving a small
//! Data Dragon snapshot.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::LookupConfig;
use crate::error::{LookupError, Result};
use crate::gateway::RemoteGateway;

pub const BASE_URL: &str = "https://dd.test";
pub const VERSION: &str = "14.2.1";

/// Serves canned documents by exact URL and records every request.
#[derive(Default)]
pub struct FixtureGateway {
    docs: HashMap<String, Value>,
    calls: Mutex<Vec<String>>,
}

impl FixtureGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, doc: Value) -> Self {
        self.docs.insert(url.to_string(), doc);
        self
    }

    pub fn without(mut self, url: &str) -> Self {
        self.docs.remove(url);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count_matching(&self, fragment: &str) -> usize {
        self.calls().iter().filter(|u| u.contains(fragment)).count()
    }
}

#[async_trait]
impl RemoteGateway for FixtureGateway {
    async fn fetch(&self, url: &str) -> Result<Value> {
        self.calls.lock().unwrap().push(url.to_string());
        self.docs.get(url).cloned().ok_or_else(|| LookupError::Remote {
            status: 404,
            url: url.to_string(),
        })
    }
}

pub fn config() -> LookupConfig {
    LookupConfig {
        base_url: BASE_URL.to_string(),
        ..Default::default()
    }
}

fn data_url(locale: &str, path: &str) -> String {
    format!("{BASE_URL}/cdn/{VERSION}/data/{locale}/{path}")
}

/// A gateway holding the full fixture snapshot.
pub fn fixture_gateway() -> FixtureGateway {
    FixtureGateway::new()
        .with(&format!("{BASE_URL}/api/versions.json"), json!([VERSION, "14.1.1"]))
        .with(&data_url("pt_BR", "champion.json"), champion_index())
        .with(&data_url("pt_BR", "champion/Jinx.json"), jinx_detail())
        .with(&data_url("pt_BR", "champion/MissFortune.json"), miss_fortune_detail())
        .with(&data_url("pt_BR", "champion/Ahri.json"), ahri_detail())
        .with(&data_url("pt_BR", "item.json"), item_table())
        .with(&data_url("pt_BR", "summoner.json"), spell_table())
        .with(&data_url("pt_BR", "runesReforged.json"), rune_trees_pt())
        .with(&data_url("en_US", "runesReforged.json"), rune_trees_en())
}

pub fn champion_index() -> Value {
    json!({
        "type": "champion",
        "version": VERSION,
        "data": {
            "Ahri": { "id": "Ahri", "key": "103", "name": "Ahri", "title": "a Raposa de Nove Caudas",
                      "blurb": "Ligada à magia...", "tags": ["Mage", "Assassin"] },
            "Jinx": { "id": "Jinx", "key": "222", "name": "Jinx", "title": "o Gatilho Desenfreado",
                      "blurb": "Uma criminosa maníaca...", "tags": ["Marksman"] },
            "MissFortune": { "id": "MissFortune", "key": "21", "name": "Miss Fortune",
                             "title": "a Caçadora de Recompensas", "blurb": "Uma capitã...",
                             "tags": ["Marksman"] }
        }
    })
}

pub fn jinx_detail() -> Value {
    json!({
        "data": {
            "Jinx": {
                "id": "Jinx",
                "name": "Jinx",
                "title": "o Gatilho Desenfreado",
                "tags": ["Marksman"],
                "lore": "Uma criminosa maníaca e impulsiva de Zaun.",
                "blurb": "Uma criminosa...",
                "passive": { "name": "Ficando Animada!",
                             "description": "Jinx recebe <attention>Velocidade de Movimento</attention> ao abater.<br>Dura 6s." },
                "spells": [
                    { "name": "Troca-Troca!", "description": "Alterna entre Pow-Pow e Fishbones." },
                    { "name": "Zap!", "description": "Dispara uma onda de choque." },
                    { "name": "Mordida Flamejante!", "description": "Lança granadas &quot;mordedoras&quot;." },
                    { "name": "Super Mega Míssil da Morte!", "description": "Dispara um míssil pelo mapa." }
                ]
            }
        }
    })
}

pub fn miss_fortune_detail() -> Value {
    json!({
        "data": {
            "MissFortune": {
                "id": "MissFortune",
                "name": "Miss Fortune",
                "title": "a Caçadora de Recompensas",
                "tags": ["Marksman"],
                "lore": "",
                "blurb": "Uma capitã de Águas de Sentina.",
                "passive": { "name": "Amor e Ódio", "description": "Causa dano extra." },
                "spells": [
                    { "name": "Dose Dupla", "description": "Atira duas vezes." }
                ]
            }
        }
    })
}

pub fn ahri_detail() -> Value {
    json!({
        "data": {
            "Ahri": {
                "id": "Ahri",
                "name": "Ahri",
                "title": "a Raposa de Nove Caudas",
                "tags": ["Mage", "Assassin"],
                "lore": "Ligada à magia latente de Runeterra.",
                "spells": []
            }
        }
    })
}

pub fn item_table() -> Value {
    json!({
        "type": "item",
        "data": {
            "1001": { "name": "Botas", "description": "<mainText><stats>Velocidade</stats></mainText>",
                      "plaintext": "Aumenta levemente a velocidade", "gold": { "total": 300 }, "tags": ["Boots"] },
            "3031": { "name": "Gume do Infinito",
                      "description": "<mainText><stats><attention>65</attention> de Dano de Ataque</stats><br><br>Aumenta o dano crítico.</mainText>",
                      "plaintext": "", "gold": { "total": 3400 }, "tags": ["Damage", "CriticalStrike"] },
            "3153": { "name": "Lâmina do Rei Destruído", "description": "Drena vida.",
                      "plaintext": "", "gold": { "total": 3200 }, "tags": ["Damage"] }
        }
    })
}

pub fn spell_table() -> Value {
    json!({
        "type": "summoner",
        "data": {
            "SummonerBarrier": { "id": "SummonerBarrier", "key": "21", "name": "Barreira",
                                 "description": "Protege seu campeão por 2s." },
            "SummonerExhaust": { "id": "SummonerExhaust", "key": "3", "name": "Exaustão",
                                 "description": "Reduz a velocidade do alvo." },
            "SummonerFlash": { "id": "SummonerFlash", "key": "4", "name": "Flash",
                               "description": "Teleporta seu campeão uma curta distância." },
            "SummonerHeal": { "id": "SummonerHeal", "key": "7", "name": "Curar",
                              "description": "Restaura Vida." }
        }
    })
}

pub fn rune_trees_pt() -> Value {
    json!([
        { "id": 8000, "key": "Precision", "name": "Precisão", "slots": [
            { "runes": [ { "id": 8008, "key": "LethalTempo", "name": "Ritmo Fatal",
                           "shortDesc": "Ganha velocidade de ataque.", "longDesc": "Ganha <b>velocidade</b> de ataque ao atacar." } ] }
        ]},
        { "id": 8100, "key": "Domination", "name": "Dominação", "slots": [
            { "runes": [ { "id": 8112, "key": "Electrocute", "name": "Eletrocutar",
                           "shortDesc": "Três ataques causam dano adicional.", "longDesc": "" } ] }
        ]}
    ])
}

pub fn rune_trees_en() -> Value {
    json!([
        { "id": 8000, "key": "Precision", "name": "Precision", "slots": [
            { "runes": [ { "id": 8008, "key": "LethalTempo", "name": "Lethal Tempo",
                           "shortDesc": "Gain attack speed.", "longDesc": "Gain attack speed." } ] }
        ]},
        { "id": 8100, "key": "Domination", "name": "Domination", "slots": [
            { "runes": [ { "id": 8112, "key": "Electrocute", "name": "Electrocute",
                           "shortDesc": "Three hits deal bonus damage.", "longDesc": "" } ] }
        ]}
    ])
}

//! Rune tree definitions.

use serde::{Deserialize, Serialize};

/// A single rune inside a slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rune {
    pub id: u32,
    pub key: String,
    pub name: String,
    pub short_desc: String,
    pub long_desc: String,
}

impl Rune {
    /// Long description, or the short one when upstream left it out.
    pub fn description(&self) -> &str {
        pick_description(&self.long_desc, &self.short_desc)
    }
}

/// One row of choices inside a rune tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuneSlot {
    pub runes: Vec<Rune>,
}

/// A rune tree (Precision, Domination, ...) with its slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuneTree {
    pub id: u32,
    pub key: String,
    pub name: String,
    pub short_desc: String,
    pub long_desc: String,
    pub slots: Vec<RuneSlot>,
}

impl RuneTree {
    /// Long description, or the short one when upstream left it out.
    pub fn description(&self) -> &str {
        pick_description(&self.long_desc, &self.short_desc)
    }

    /// Iterate over every rune in slot order.
    pub fn runes(&self) -> impl Iterator<Item = &Rune> {
        self.slots.iter().flat_map(|slot| slot.runes.iter())
    }
}

fn pick_description<'a>(long: &'a str, short: &'a str) -> &'a str {
    if long.is_empty() {
        short
    } else {
        long
    }
}

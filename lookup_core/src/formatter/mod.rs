//! Answer Formatter - renders a resolved entity into bounded text.
//!
//! Each entity kind has a fixed template. Markup is stripped and oversized
//! fields are clipped before assembly, and the one elastic field of each
//! template absorbs whatever budget is left (see [`Layout`]).

mod layout;
mod markup;

pub use layout::Layout;
pub use markup::*;

use game_data::{ChampionDetail, Entity, Item, Region, Rune, RuneTree, SummonerSpell};

/// Cap on champion lore (or blurb).
pub const LORE_CAP: usize = 700;
/// Cap on each champion passive/ability description.
pub const ABILITY_CAP: usize = 260;
/// Cap on item descriptions.
pub const ITEM_DESCRIPTION_CAP: usize = 900;
/// Cap on summoner spell and rune descriptions.
pub const DESCRIPTION_CAP: usize = 1400;

const ABILITY_KEYS: [&str; 4] = ["Q", "W", "E", "R"];
const NO_VALUE: &str = "—";

#[derive(Debug, Clone, Copy)]
pub struct AnswerFormatter {
    max_len: usize,
}

impl AnswerFormatter {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    /// A fixed message clipped to the answer bound.
    pub fn message(&self, text: &str) -> String {
        clip(text, self.max_len)
    }

    pub fn format(&self, entity: &Entity) -> String {
        let layout = match entity {
            Entity::Champion(champion) => champion_layout(champion),
            Entity::Item(item) => item_layout(item),
            Entity::SummonerSpell(spell) => spell_layout(spell),
            Entity::Rune(rune) => rune_layout(rune),
            Entity::RuneTree(tree) => rune_tree_layout(tree),
            Entity::Region(region) => region_layout(region),
        };
        layout.render(self.max_len)
    }
}

fn champion_layout(champion: &ChampionDetail) -> Layout {
    let header = if champion.title.is_empty() {
        champion.name.clone()
    } else {
        format!("{} — {}", champion.name, champion.title)
    };
    let classes = if champion.tags.is_empty() {
        NO_VALUE.to_string()
    } else {
        champion.tags.join(", ")
    };

    let passive = champion.passive.as_ref().map(|p| {
        format!(
            "Passiva: {} — {}",
            p.name,
            clip(&html_to_text(&p.description), ABILITY_CAP)
        )
    });

    let abilities: Vec<String> = ABILITY_KEYS
        .iter()
        .zip(&champion.spells)
        .map(|(key, ability)| {
            format!(
                "{key}: {} — {}",
                ability.name,
                clip(&html_to_text(&ability.description), ABILITY_CAP)
            )
        })
        .collect();

    Layout::new()
        .lines([header, format!("Classes: {classes}")])
        .elastic(html_to_text(champion.lore_or_blurb()), LORE_CAP)
        .lines(passive)
        .section("Habilidades:", abilities)
}

fn item_layout(item: &Item) -> Layout {
    let cost = if item.gold.total == 0 {
        String::new()
    } else {
        format!("Custo: {}", item.gold.total)
    };
    let tags = if item.tags.is_empty() {
        String::new()
    } else {
        format!("Tags: {}", item.tags.join(", "))
    };
    let description = collapse_blank_lines(&html_to_text(&item.description));

    Layout::new()
        .lines([item.name.clone(), cost, tags])
        .line(html_to_text(&item.plaintext))
        .elastic(description, ITEM_DESCRIPTION_CAP)
}

fn spell_layout(spell: &SummonerSpell) -> Layout {
    Layout::new()
        .line(spell.name.clone())
        .elastic(html_to_text(&spell.description), DESCRIPTION_CAP)
}

fn rune_layout(rune: &Rune) -> Layout {
    Layout::new()
        .line(rune.name.clone())
        .elastic(html_to_text(rune.description()), DESCRIPTION_CAP)
}

fn rune_tree_layout(tree: &RuneTree) -> Layout {
    Layout::new()
        .line(tree.name.clone())
        .elastic(html_to_text(tree.description()), DESCRIPTION_CAP)
}

fn region_layout(region: &Region) -> Layout {
    Layout::new()
        .line(region.name)
        .elastic(region.lore, usize::MAX)
}

//! Rune matching over the reforged rune trees.

use game_data::{Entity, Rune, RuneTree};

use super::normalize;

/// A rune tree or a single rune inside one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuneMatch<'a> {
    Tree(&'a RuneTree),
    Rune(&'a Rune),
}

impl RuneMatch<'_> {
    pub fn name(&self) -> &str {
        match self {
            RuneMatch::Tree(tree) => &tree.name,
            RuneMatch::Rune(rune) => &rune.name,
        }
    }

    pub fn to_entity(&self) -> Entity {
        match self {
            RuneMatch::Tree(tree) => Entity::RuneTree((*tree).clone()),
            RuneMatch::Rune(rune) => Entity::Rune((*rune).clone()),
        }
    }
}

fn loosely_matches(name: &str, query: &str) -> bool {
    let name = normalize(name);
    !name.is_empty() && (name == query || name.contains(query) || query.contains(name.as_str()))
}

/// Walk the trees in order, checking each tree's own name before its runes.
///
/// Containment runs both ways, so "runa eletrocutar" finds Eletrocutar.
pub fn resolve_rune<'a, I>(trees: I, query: &str) -> Option<RuneMatch<'a>>
where
    I: IntoIterator<Item = &'a RuneTree>,
{
    let query = normalize(query);
    if query.is_empty() {
        return None;
    }

    for tree in trees {
        if loosely_matches(&tree.name, &query) {
            return Some(RuneMatch::Tree(tree));
        }
        if let Some(rune) = tree.runes().find(|r| loosely_matches(&r.name, &query)) {
            return Some(RuneMatch::Rune(rune));
        }
    }
    None
}

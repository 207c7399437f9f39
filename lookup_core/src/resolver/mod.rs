//! Entity Resolver - deterministic fuzzy name matching against a catalog.
//!
//! Matching runs in stages of decreasing strictness; the first stage that
//! finds anything wins, and within a stage the first entry in document order
//! wins:
//! 1. **Exact**: normalized name equals the query; failing that, identifier
//! 2. **Name contains**: normalized name contains the query
//! 3. **Secondary contains**: title / plaintext / description contains the query
//! 4. **Token subset**: the name contains every whitespace token of the query
//!
//! Finding nothing is a normal outcome, not an error.

mod runes;
mod text;

pub use runes::*;
pub use text::*;

use game_data::{region_by_key, ChampionSummary, Item, Region, SummonerSpell, REGIONS};

/// Something that can be matched by name.
pub trait Searchable {
    fn display_name(&self) -> &str;

    /// Upstream identifier, matched exactly in the first stage.
    fn identifier(&self) -> &str {
        ""
    }

    /// Secondary text searched in the third stage.
    fn secondary_text(&self) -> Option<&str> {
        None
    }
}

impl Searchable for ChampionSummary {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn identifier(&self) -> &str {
        &self.id
    }

    fn secondary_text(&self) -> Option<&str> {
        Some(&self.title)
    }
}

impl Searchable for Item {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn identifier(&self) -> &str {
        &self.id
    }

    fn secondary_text(&self) -> Option<&str> {
        Some(&self.plaintext)
    }
}

impl Searchable for SummonerSpell {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn identifier(&self) -> &str {
        &self.id
    }

    fn secondary_text(&self) -> Option<&str> {
        Some(&self.description)
    }
}

/// The stage that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchStage {
    Exact,
    NameContains,
    SecondaryContains,
    TokenSubset,
}

impl MatchStage {
    pub const ALL: [MatchStage; 4] = [
        MatchStage::Exact,
        MatchStage::NameContains,
        MatchStage::SecondaryContains,
        MatchStage::TokenSubset,
    ];
}

/// A match together with the stage that found it.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a, T> {
    pub entry: &'a T,
    pub stage: MatchStage,
}

struct Prepared<'a, T> {
    entry: &'a T,
    name: String,
    id: String,
    secondary: Option<String>,
}

impl<T> Prepared<'_, T> {
    fn matches(&self, stage: MatchStage, query: &str, tokens: &[&str]) -> bool {
        match stage {
            MatchStage::Exact => self.name == query,
            MatchStage::NameContains => self.name.contains(query),
            MatchStage::SecondaryContains => self
                .secondary
                .as_deref()
                .is_some_and(|s| !s.is_empty() && s.contains(query)),
            MatchStage::TokenSubset => tokens.iter().all(|t| self.name.contains(t)),
        }
    }
}

/// Resolve `query` against `candidates`, reporting which stage matched.
pub fn resolve_explained<'a, T, I>(candidates: I, query: &str) -> Option<Resolution<'a, T>>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let query = normalize(query);
    if query.is_empty() {
        return None;
    }
    let tokens: Vec<&str> = query.split_whitespace().collect();

    let prepared: Vec<Prepared<'a, T>> = candidates
        .into_iter()
        .map(|entry| Prepared {
            entry,
            name: normalize(entry.display_name()),
            id: normalize(entry.identifier()),
            secondary: entry.secondary_text().map(normalize),
        })
        .collect();

    MatchStage::ALL.into_iter().find_map(|stage| {
        let mut found = prepared.iter().find(|p| p.matches(stage, &query, &tokens));
        // names across the whole catalog first, then identifiers
        if found.is_none() && stage == MatchStage::Exact {
            found = prepared.iter().find(|p| !p.id.is_empty() && p.id == query);
        }
        found.map(|p| Resolution {
            entry: p.entry,
            stage,
        })
    })
}

/// Resolve `query` against `candidates`.
pub fn resolve<'a, T, I>(candidates: I, query: &str) -> Option<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    resolve_explained(candidates, query).map(|r| r.entry)
}

/// Queries shorter than this never match as a fragment of a region name.
const MIN_REGION_FRAGMENT: usize = 3;

/// Resolve a region from the static lore table.
///
/// Precedence: exact key, key contains the query, query contains the key.
/// The last stage lets phrases like "fala de noxus" find Noxus.
pub fn resolve_region(query: &str) -> Option<&'static Region> {
    let q = normalize(query);
    if q.is_empty() {
        return None;
    }

    region_by_key(&q)
        .or_else(|| {
            if q.chars().count() < MIN_REGION_FRAGMENT {
                return None;
            }
            REGIONS.iter().find(|r| r.key.contains(q.as_str()))
        })
        .or_else(|| REGIONS.iter().find(|r| q.contains(r.key)))
}

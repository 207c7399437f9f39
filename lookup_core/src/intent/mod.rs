//! Intent Classifier - turns free text into a query plan.
//!
//! A region name anywhere in the query wins outright. Otherwise keyword
//! signals pick the entity types to try first; the rest follow in the
//! fixed fallback order, so a misclassified query still reaches the catalog
//! that can answer it.

mod keywords;

pub use keywords::*;

use game_data::EntityType;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::resolver::{normalize, resolve_region};

/// Random id correlating the log lines of one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QueryId(Uuid);

impl QueryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QueryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One classified query. Created once, discarded after answering.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionQuery {
    pub id: QueryId,
    pub raw_text: String,
    pub normalized_text: String,
    /// Normalized text with stop words removed; what resolvers match on.
    pub search_text: String,
    /// Signalled types in fixed order; `[Region]` alone when a region matched.
    pub candidate_types: Vec<EntityType>,
}

impl ResolutionQuery {
    /// Empty, `help` or `ajuda`.
    pub fn is_help(&self) -> bool {
        matches!(self.normalized_text.as_str(), "" | "help" | "ajuda")
    }

    pub fn is_region(&self) -> bool {
        self.candidate_types.first() == Some(&EntityType::Region)
    }

    /// Types to try, in order: signalled ones, then the remaining fallbacks.
    pub fn attempt_order(&self) -> Vec<EntityType> {
        if self.is_region() {
            return vec![EntityType::Region];
        }
        let mut order = self.candidate_types.clone();
        order.extend(
            EntityType::FALLBACK_ORDER
                .iter()
                .filter(|t| !self.candidate_types.contains(t)),
        );
        order
    }
}

/// Classify a raw query.
pub fn classify(raw: &str) -> ResolutionQuery {
    let normalized_text = normalize(raw);
    let search_text = strip_stop_words(&normalized_text);

    let candidate_types = if normalized_text.is_empty() {
        Vec::new()
    } else if resolve_region(&normalized_text).is_some() {
        vec![EntityType::Region]
    } else {
        signalled_types(&normalized_text)
    };

    ResolutionQuery {
        id: QueryId::new(),
        raw_text: raw.to_string(),
        normalized_text,
        search_text,
        candidate_types,
    }
}

//! # Game Data
//!
//! Typed snapshots of the Data Dragon documents the lookup engine consumes,
//! plus the static region lore table. This crate performs no I/O: it only
//! describes the shapes of champions, items, summoner spells and rune trees
//! as they arrive from upstream, keeping just the fields that answers use.

pub mod catalog;
pub mod entities;
pub mod lore;

pub use catalog::*;
pub use entities::*;
pub use lore::*;

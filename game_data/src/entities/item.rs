//! Item definitions.

use serde::{Deserialize, Serialize};

/// Gold cost block of an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemGold {
    pub base: u32,
    pub total: u32,
    pub sell: u32,
    pub purchasable: bool,
}

/// An item from the item table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Numeric id. Upstream carries it only as the map key; the table
    /// fills it in after decoding.
    pub id: String,
    pub name: String,
    /// Description with upstream markup.
    pub description: String,
    /// One-line plain summary, often empty.
    pub plaintext: String,
    pub gold: ItemGold,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_gold_defaults() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "name": "Gume do Infinito",
            "gold": { "total": 3400 }
        }))
        .unwrap();

        assert_eq!(item.gold.total, 3400);
        assert_eq!(item.gold.base, 0);
        assert!(item.id.is_empty());
    }
}

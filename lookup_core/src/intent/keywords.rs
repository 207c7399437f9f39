//! Keyword signals and stop words, all in normalized form.

use game_data::EntityType;

/// Substrings that signal each type, in classification order.
pub const SIGNALS: [(EntityType, &[&str]); 4] = [
    (EntityType::Champion, &["quem e", "campeao", "champ", "personagem"]),
    (EntityType::Item, &["item", "itens", "gume", "lamina", "cajado"]),
    (
        EntityType::Rune,
        &["runa", "runas", "colheita", "eletrocutar", "precisao", "domina"],
    ),
    (
        EntityType::SummonerSpell,
        &["feiti", "flash", "ignite", "barreira", "curar", "teleporte"],
    ),
];

/// Multi-word stop phrases, removed before single words.
const STOP_PHRASES: &[&[&str]] = &[&["quem", "e"], &["por", "favor"]];

const STOP_WORDS: &[&str] = &[
    "fala", "sobre", "do", "da", "de", "a", "o", "os", "as", "um", "uma", "no", "na", "nos",
    "nas", "pfv", "pls", "item", "itens", "campeao", "campeoes", "champ", "personagem", "runa",
    "runas", "feitico", "feiticos", "regiao",
];

/// Types whose signal keywords occur in `normalized`, in fixed order.
pub fn signalled_types(normalized: &str) -> Vec<EntityType> {
    SIGNALS
        .iter()
        .filter(|(_, words)| words.iter().any(|w| normalized.contains(w)))
        .map(|(t, _)| *t)
        .collect()
}

/// Drop stop phrases and stop words. Falls back to the input when nothing
/// would be left.
pub fn strip_stop_words(normalized: &str) -> String {
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let mut kept = Vec::with_capacity(tokens.len());

    let mut i = 0;
    while i < tokens.len() {
        if let Some(phrase) = STOP_PHRASES.iter().find(|&&p| tokens[i..].starts_with(p)) {
            i += phrase.len();
            continue;
        }
        if !STOP_WORDS.contains(&tokens[i]) {
            kept.push(tokens[i]);
        }
        i += 1;
    }

    if kept.is_empty() {
        normalized.to_string()
    } else {
        kept.join(" ")
    }
}

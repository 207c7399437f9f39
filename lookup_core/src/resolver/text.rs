//! Text normalization shared by resolution and classification.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical decomposition, diacritics stripped, lowercased, trimmed.
///
/// `"Ahrí"`, `"AHRI"` and `" ahri "` all normalize to `"ahri"`.
pub fn normalize(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_case() {
        assert_eq!(normalize("Ahrí"), "ahri");
        assert_eq!(normalize("  Dominação "), "dominacao");
        assert_eq!(normalize("Lâmina do Rei Destruído"), "lamina do rei destruido");
        assert_eq!(normalize("QUEM É JINX"), "quem e jinx");
    }

    #[test]
    fn test_keeps_punctuation() {
        assert_eq!(normalize("Kai'Sa"), "kai'sa");
        assert_eq!(normalize("Dr. Mundo"), "dr. mundo");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}

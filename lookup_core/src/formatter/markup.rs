//! Upstream markup cleanup and character-based clipping.

use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line break pattern"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank run pattern"));

pub const ELLIPSIS: &str = "...";

/// Strip tags, turning line-break tags into newlines and decoding the few
/// entities Data Dragon emits.
pub fn html_to_text(html: &str) -> String {
    let text = LINE_BREAK.replace_all(html, "\n");
    let text = TAG.replace_all(&text, "");
    // &amp; last, so "&amp;quot;" stays literal
    text.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}

/// Collapse runs of three or more newlines into a single blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n\n").into_owned()
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cut `text` to at most `max` characters, ending in an ellipsis when cut.
pub fn clip(text: &str, max: usize) -> String {
    if char_len(text) <= max {
        return text.to_string();
    }
    let ellipsis_len = char_len(ELLIPSIS);
    if max <= ellipsis_len {
        return text.chars().take(max).collect();
    }
    let mut out: String = text.chars().take(max - ellipsis_len).collect();
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text() {
        assert_eq!(
            html_to_text("<mainText><stats><attention>65</attention> de Dano</stats><br><br>Crítico.</mainText>"),
            "65 de Dano\n\nCrítico."
        );
        assert_eq!(html_to_text("a<BR/>b<br />c"), "a\nb\nc");
        assert_eq!(html_to_text("&quot;Zap!&quot; &#39;x&#39; A &amp; B"), "\"Zap!\" 'x' A & B");
        assert_eq!(html_to_text("&amp;quot;"), "&quot;");
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb\n\nc"), "a\n\nb\n\nc");
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("curto", 10), "curto");
        assert_eq!(clip("abcdefghij", 10), "abcdefghij");
        assert_eq!(clip("abcdefghijk", 10), "abcdefg...");
        assert_eq!(clip("abcdef", 2), "ab");
    }

    #[test]
    fn test_clip_counts_chars_not_bytes() {
        let clipped = clip("ççççççççç", 6);
        assert_eq!(clipped, "ççç...");
        assert_eq!(char_len(&clipped), 6);
    }
}

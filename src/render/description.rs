//! Flavor text block under the badges
//!
//! Flavor text is plain (no escapes) and may be Japanese or Korean, so
//! lines are measured in terminal columns rather than characters.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Narrowest wrap width, so short titles don't produce a thin column
pub const MIN_WRAP_WIDTH: usize = 40;

/// Word-wrap `text` to `max(reference_width, MIN_WRAP_WIDTH)` columns and
/// center every line against `reference_width`.
///
/// Words wider than the wrap width, such as unspaced CJK runs, are broken
/// at character boundaries.
#[must_use]
pub fn render_description(text: &str, reference_width: usize) -> Vec<String> {
    let wrap = reference_width.max(MIN_WRAP_WIDTH);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for piece in text.split_whitespace().flat_map(|word| split_to_width(word, wrap)) {
        let piece_width = piece.width();
        if current_width > 0 && current_width + 1 + piece_width > wrap {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(piece);
        current_width += piece_width;
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
        .into_iter()
        .map(|line| {
            let offset = reference_width.saturating_sub(line.width()) / 2;
            format!("{}{line}", " ".repeat(offset))
        })
        .collect()
}

/// Break `word` into runs of at most `width` columns.
fn split_to_width(word: &str, width: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut columns = 0;

    for (idx, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if columns > 0 && columns + w > width {
            pieces.push(&word[start..idx]);
            start = idx;
            columns = 0;
        }
        columns += w;
    }
    pieces.push(&word[start..]);

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_line() {
        let lines = render_description("It can freely detach its jaw.", 0);
        assert_eq!(lines, vec!["It can freely detach its jaw."]);
    }

    #[test]
    fn test_wraps_at_min_width() {
        let text = "A strange seed was planted on its back at birth. The plant sprouts and grows with this Pokémon.";
        let lines = render_description(text, 10);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= MIN_WRAP_WIDTH, "{line:?}");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_lines_are_centered() {
        let lines = render_description("Hi there", 48);
        assert_eq!(lines, vec![format!("{}Hi there", " ".repeat(20))]);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(render_description("", 40).is_empty());
        assert!(render_description("  \n ", 40).is_empty());
    }

    #[test]
    fn test_long_word_is_broken() {
        let long = "x".repeat(50);
        let lines = render_description(&format!("a {long} b"), 0);
        assert_eq!(lines, vec!["a".to_string(), "x".repeat(40), "x".repeat(10) + " b"]);
    }

    #[test]
    fn test_cjk_wraps_by_columns() {
        let seed = "たね".repeat(15);
        let pokemon = "ポケモン".repeat(5);
        let lines = render_description(&format!("{seed}\u{3000}{pokemon}"), 0);

        for line in &lines {
            assert!(line.width() <= MIN_WRAP_WIDTH, "{} columns: {line}", line.width());
        }
        assert_eq!(lines.concat(), format!("{seed}{pokemon}"));
    }

    #[test]
    fn test_cjk_centered_by_columns() {
        // 4 glyphs, 8 columns: (48 - 8) / 2 = 20
        let lines = render_description("ポケモン", 48);
        assert_eq!(lines, vec![format!("{}ポケモン", " ".repeat(20))]);
    }
}

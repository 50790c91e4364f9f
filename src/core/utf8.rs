//! Unicode helpers
//!
//! Caret movement and rendering both work in document char offsets, but a
//! caret must land on grapheme boundaries and the screen deals in display
//! columns. These helpers convert between char columns within a line,
//! grapheme boundaries, and visual columns (tabs expanded, wide chars
//! double width).

use unicode_segmentation::UnicodeSegmentation;

/// Count grapheme clusters in a string
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Display width of a single char. Control chars report 0, ASCII 1, wide
/// CJK and most emoji 2.
pub fn char_width(c: char) -> usize {
    unicode_width::UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Display width of a grapheme cluster
pub fn grapheme_width(g: &str) -> usize {
    g.chars().map(char_width).sum()
}

/// Char column of the grapheme boundary at or before `char_col`,
/// excluding `char_col` itself. The caret's "one step left".
pub fn prev_grapheme_start(text: &str, char_col: usize) -> usize {
    let mut start = 0;
    let mut prev = 0;
    for g in text.graphemes(true) {
        if start >= char_col {
            break;
        }
        prev = start;
        start += g.chars().count();
    }
    prev
}

/// Char column just past the grapheme containing `char_col`. The caret's
/// "one step right". Saturates at the line length.
pub fn next_grapheme_end(text: &str, char_col: usize) -> usize {
    let mut start = 0;
    for g in text.graphemes(true) {
        let end = start + g.chars().count();
        if end > char_col {
            return end;
        }
        start = end;
    }
    start
}

/// Visual column of a char offset within a line, expanding tabs
pub fn visual_col(text: &str, char_col: usize, tab_width: usize) -> usize {
    let mut visual_x = 0;
    let mut chars_seen = 0;
    for g in text.graphemes(true) {
        if chars_seen >= char_col {
            break;
        }
        if g == "\t" {
            visual_x = (visual_x / tab_width + 1) * tab_width;
        } else {
            visual_x += grapheme_width(g);
        }
        chars_seen += g.chars().count();
    }
    visual_x
}

/// Total visual width of a line with tabs expanded
pub fn visual_width(text: &str, tab_width: usize) -> usize {
    visual_col(text, usize::MAX, tab_width)
}

/// Char column whose grapheme covers a visual x position; the inverse of
/// `visual_col`, used for mouse clicks. Past the end of the line this is
/// the line length.
pub fn char_col_from_visual(text: &str, target_visual_x: usize, tab_width: usize) -> usize {
    let mut visual_x = 0;
    let mut chars_seen = 0;
    for g in text.graphemes(true) {
        let width = if g == "\t" {
            (visual_x / tab_width + 1) * tab_width - visual_x
        } else {
            grapheme_width(g)
        };
        if visual_x + width > target_visual_x {
            return chars_seen;
        }
        visual_x += width;
        chars_seen += g.chars().count();
    }
    chars_seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grapheme_count() {
        assert_eq!(grapheme_count("Hello"), 5);
        assert_eq!(grapheme_count("👋🌍"), 2);
        // "e" + combining acute is one grapheme
        assert_eq!(grapheme_count("e\u{0301}"), 1);
    }

    #[test]
    fn test_prev_grapheme_start() {
        assert_eq!(prev_grapheme_start("abc", 2), 1);
        assert_eq!(prev_grapheme_start("abc", 1), 0);
        assert_eq!(prev_grapheme_start("abc", 0), 0);
        // combining pair counts 2 chars but is one step
        let text = "ae\u{0301}b";
        assert_eq!(prev_grapheme_start(text, 3), 1);
    }

    #[test]
    fn test_next_grapheme_end() {
        assert_eq!(next_grapheme_end("abc", 0), 1);
        assert_eq!(next_grapheme_end("abc", 2), 3);
        assert_eq!(next_grapheme_end("abc", 3), 3);
        let text = "ae\u{0301}b";
        assert_eq!(next_grapheme_end(text, 1), 3);
    }

    #[test]
    fn test_visual_col_with_tabs() {
        // 'a' [0,1), tab to column 4, 'b' [4,5)
        let text = "a\tb";
        assert_eq!(visual_col(text, 0, 4), 0);
        assert_eq!(visual_col(text, 1, 4), 1);
        assert_eq!(visual_col(text, 2, 4), 4);
        assert_eq!(visual_col(text, 3, 4), 5);
        assert_eq!(visual_width(text, 4), 5);
    }

    #[test]
    fn test_visual_col_wide_chars() {
        let text = "A👋B";
        assert_eq!(visual_col(text, 1, 4), 1);
        assert_eq!(visual_col(text, 2, 4), 3);
        assert_eq!(visual_width(text, 4), 4);
    }

    #[test]
    fn test_char_col_from_visual() {
        let text = "a\tb";
        assert_eq!(char_col_from_visual(text, 0, 4), 0);
        assert_eq!(char_col_from_visual(text, 1, 4), 1);
        assert_eq!(char_col_from_visual(text, 3, 4), 1);
        assert_eq!(char_col_from_visual(text, 4, 4), 2);
        assert_eq!(char_col_from_visual(text, 40, 4), 3);

        let wide = "A👋B";
        assert_eq!(char_col_from_visual(wide, 1, 4), 1);
        assert_eq!(char_col_from_visual(wide, 2, 4), 1);
        assert_eq!(char_col_from_visual(wide, 3, 4), 2);
    }
}

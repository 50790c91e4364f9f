//! Text styling model
//!
//! Per-char formatting for the document:
//! - `TextStyle`: the attribute set a single char carries
//! - `StylePatch`: a partial attribute update (only the set fields change)
//! - `StyleRun`: a maximal span of chars sharing one style
//! - `StyleTable`: run-length storage covering the whole document

use serde::{Deserialize, Serialize};

/// Font size assigned to text that was never explicitly sized
pub const DEFAULT_FONT_SIZE: u16 = 12;

// =============================================================================
// COLOR
// =============================================================================

/// A foreground color a char range can carry.
///
/// The named variants are the 16 standard terminal colors; `Rgb` covers
/// truecolor values entered as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Parse a user-typed color: a standard color name ("red",
    /// "bright blue", "bright-blue") or a hex value ("#ff8800").
    pub fn parse(input: &str) -> Option<Color> {
        let s = input.trim().to_lowercase();

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb { r, g, b });
        }

        let name = s.replace('-', " ");
        let color = match name.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright black" | "gray" | "grey" => Color::BrightBlack,
            "bright red" => Color::BrightRed,
            "bright green" => Color::BrightGreen,
            "bright yellow" => Color::BrightYellow,
            "bright blue" => Color::BrightBlue,
            "bright magenta" => Color::BrightMagenta,
            "bright cyan" => Color::BrightCyan,
            "bright white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

// =============================================================================
// TEXT STYLE AND PATCHES
// =============================================================================

/// The full attribute set one char carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold weight
    pub bold: bool,
    /// Italic slant
    pub italic: bool,
    /// Underline
    pub underline: bool,
    /// Font size in points
    pub size: u16,
    /// Foreground color; `None` means the default text color
    pub color: Option<Color>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            size: DEFAULT_FONT_SIZE,
            color: None,
        }
    }
}

/// A partial attribute update; `None` fields are left as they were
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StylePatch {
    /// New bold state, if changing
    pub bold: Option<bool>,
    /// New italic state, if changing
    pub italic: Option<bool>,
    /// New underline state, if changing
    pub underline: Option<bool>,
    /// New font size, if changing
    pub size: Option<u16>,
    /// New foreground color, if changing
    pub color: Option<Color>,
}

impl StylePatch {
    /// Patch that sets or clears bold
    pub fn bold(on: bool) -> Self {
        Self {
            bold: Some(on),
            ..Self::default()
        }
    }

    /// Patch that sets or clears italic
    pub fn italic(on: bool) -> Self {
        Self {
            italic: Some(on),
            ..Self::default()
        }
    }

    /// Patch that sets or clears underline
    pub fn underline(on: bool) -> Self {
        Self {
            underline: Some(on),
            ..Self::default()
        }
    }

    /// Patch that changes the font size
    pub fn size(points: u16) -> Self {
        Self {
            size: Some(points),
            ..Self::default()
        }
    }

    /// Patch that changes the foreground color
    pub fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    /// Apply this patch to a style in place
    pub fn apply_to(&self, style: &mut TextStyle) {
        if let Some(b) = self.bold {
            style.bold = b;
        }
        if let Some(i) = self.italic {
            style.italic = i;
        }
        if let Some(u) = self.underline {
            style.underline = u;
        }
        if let Some(s) = self.size {
            style.size = s;
        }
        if let Some(c) = self.color {
            style.color = Some(c);
        }
    }

    /// Return a copy of `style` with this patch applied
    pub fn applied(&self, style: TextStyle) -> TextStyle {
        let mut out = style;
        self.apply_to(&mut out);
        out
    }
}

// =============================================================================
// RUN-LENGTH STYLE TABLE
// =============================================================================

/// A maximal span of chars sharing one style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRun {
    /// Number of chars covered
    pub len: usize,
    /// Style those chars carry
    pub style: TextStyle,
}

impl StyleRun {
    /// Create a run
    pub fn new(len: usize, style: TextStyle) -> Self {
        Self { len, style }
    }
}

/// Run-length style storage for a whole document.
///
/// Invariant: the run lengths sum to exactly the document's char count,
/// no run has length zero, and adjacent runs never share a style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    runs: Vec<StyleRun>,
    len: usize,
}

impl StyleTable {
    /// Empty table (for an empty document)
    pub fn new() -> Self {
        Self::default()
    }

    /// Table covering `len` chars with one uniform style
    pub fn uniform(len: usize, style: TextStyle) -> Self {
        if len == 0 {
            return Self::new();
        }
        Self {
            runs: vec![StyleRun::new(len, style)],
            len,
        }
    }

    /// Rebuild a table from a run list, validating against a char count
    pub fn from_runs(runs: Vec<StyleRun>, expected_len: usize) -> Result<Self, String> {
        let len: usize = runs.iter().map(|r| r.len).sum();
        if len != expected_len {
            return Err(format!(
                "style runs cover {} chars but the text has {}",
                len, expected_len
            ));
        }
        let mut table = Self { runs, len };
        table.coalesce();
        Ok(table)
    }

    /// Total chars covered
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no chars are covered
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The run list
    pub fn runs(&self) -> &[StyleRun] {
        &self.runs
    }

    /// Style at a char position; default when out of range
    pub fn style_at(&self, pos: usize) -> TextStyle {
        let mut start = 0;
        for run in &self.runs {
            if pos < start + run.len {
                return run.style;
            }
            start += run.len;
        }
        TextStyle::default()
    }

    /// True when every char in `start..end` satisfies the predicate.
    /// An empty range has no chars, so the answer is false.
    pub fn range_has(&self, start: usize, end: usize, pred: impl Fn(&TextStyle) -> bool) -> bool {
        if start >= end || end > self.len {
            return false;
        }
        let mut run_start = 0;
        for run in &self.runs {
            let run_end = run_start + run.len;
            if run_end > start && run_start < end && !pred(&run.style) {
                return false;
            }
            run_start = run_end;
            if run_start >= end {
                break;
            }
        }
        true
    }

    /// Capture the runs covering `start..end`, clipped to that range
    pub fn slice(&self, start: usize, end: usize) -> Vec<StyleRun> {
        let mut out = Vec::new();
        if start >= end {
            return out;
        }
        let mut run_start = 0;
        for run in &self.runs {
            let run_end = run_start + run.len;
            let lo = run_start.max(start);
            let hi = run_end.min(end);
            if lo < hi {
                out.push(StyleRun::new(hi - lo, run.style));
            }
            run_start = run_end;
            if run_start >= end {
                break;
            }
        }
        out
    }

    /// Record an insertion of `len` chars at `pos`, all styled `style`
    pub fn insert(&mut self, pos: usize, len: usize, style: TextStyle) {
        self.insert_runs(pos, &[StyleRun::new(len, style)]);
    }

    /// Record an insertion of pre-styled runs at `pos`
    pub fn insert_runs(&mut self, pos: usize, runs: &[StyleRun]) {
        let added: usize = runs.iter().map(|r| r.len).sum();
        if added == 0 {
            return;
        }
        let idx = self.split_at(pos);
        self.runs
            .splice(idx..idx, runs.iter().copied().filter(|r| r.len > 0));
        self.len += added;
        self.coalesce();
    }

    /// Record a deletion of `len` chars at `pos`, clamped to the table
    pub fn remove(&mut self, pos: usize, len: usize) {
        if len == 0 || pos >= self.len {
            return;
        }
        let end = (pos + len).min(self.len);
        let start_idx = self.split_at(pos);
        let end_idx = self.split_at(end);
        self.runs.drain(start_idx..end_idx);
        self.len -= end - pos;
        self.coalesce();
    }

    /// Apply a patch to every char in `start..end`
    pub fn apply(&mut self, start: usize, end: usize, patch: &StylePatch) {
        if start >= end {
            return;
        }
        let end = end.min(self.len);
        let start_idx = self.split_at(start);
        let end_idx = self.split_at(end);
        for run in &mut self.runs[start_idx..end_idx] {
            patch.apply_to(&mut run.style);
        }
        self.coalesce();
    }

    /// Replace the styles over the span covered by `runs`, starting at
    /// `start`. The span length is the sum of the run lengths; the text
    /// itself is untouched, so the table's total length does not change.
    pub fn overwrite(&mut self, start: usize, runs: &[StyleRun]) {
        let span: usize = runs.iter().map(|r| r.len).sum();
        if span == 0 {
            return;
        }
        self.remove(start, span);
        self.insert_runs(start, runs);
    }

    /// Ensure a run boundary exists at `pos`; returns the index of the
    /// first run starting at or after `pos`.
    fn split_at(&mut self, pos: usize) -> usize {
        let mut start = 0;
        for (i, run) in self.runs.iter_mut().enumerate() {
            if start == pos {
                return i;
            }
            if pos < start + run.len {
                let left = pos - start;
                let right = run.len - left;
                run.len = left;
                let style = run.style;
                self.runs.insert(i + 1, StyleRun::new(right, style));
                return i + 1;
            }
            start += run.len;
        }
        self.runs.len()
    }

    /// Merge adjacent runs with equal styles and drop empty runs
    fn coalesce(&mut self) {
        self.runs.retain(|r| r.len > 0);
        let mut i = 0;
        while i + 1 < self.runs.len() {
            if self.runs[i].style == self.runs[i + 1].style {
                self.runs[i].len += self.runs[i + 1].len;
                self.runs.remove(i + 1);
            } else {
                i += 1;
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn bold() -> TextStyle {
        TextStyle {
            bold: true,
            ..TextStyle::default()
        }
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(Color::parse("red"), Some(Color::Red));
        assert_eq!(Color::parse("  Bright Blue "), Some(Color::BrightBlue));
        assert_eq!(Color::parse("bright-cyan"), Some(Color::BrightCyan));
        assert_eq!(Color::parse("gray"), Some(Color::BrightBlack));
        assert_eq!(Color::parse("mauve"), None);
        assert_eq!(Color::parse(""), None);
    }

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(
            Color::parse("#ff8800"),
            Some(Color::Rgb {
                r: 0xff,
                g: 0x88,
                b: 0x00
            })
        );
        assert_eq!(Color::parse("#FFFFFF"), Some(Color::Rgb { r: 255, g: 255, b: 255 }));
        assert_eq!(Color::parse("#fff"), None);
        assert_eq!(Color::parse("#gg0000"), None);
    }

    #[test]
    fn test_patch_applies_only_set_fields() {
        let mut style = TextStyle::default();
        StylePatch::bold(true).apply_to(&mut style);
        assert!(style.bold);
        assert!(!style.italic);
        assert_eq!(style.size, DEFAULT_FONT_SIZE);

        StylePatch::size(24).apply_to(&mut style);
        assert!(style.bold);
        assert_eq!(style.size, 24);
    }

    #[test]
    fn test_uniform_table() {
        let table = StyleTable::uniform(10, TextStyle::default());
        assert_eq!(table.len(), 10);
        assert_eq!(table.runs().len(), 1);
        assert_eq!(table.style_at(9), TextStyle::default());
    }

    #[test]
    fn test_empty_table() {
        let table = StyleTable::new();
        assert!(table.is_empty());
        assert_eq!(table.style_at(0), TextStyle::default());
        assert!(!table.range_has(0, 0, |s| s.bold));
    }

    #[test]
    fn test_apply_splits_runs() {
        let mut table = StyleTable::uniform(10, TextStyle::default());
        table.apply(3, 7, &StylePatch::bold(true));

        assert_eq!(table.len(), 10);
        assert_eq!(table.runs().len(), 3);
        assert!(!table.style_at(2).bold);
        assert!(table.style_at(3).bold);
        assert!(table.style_at(6).bold);
        assert!(!table.style_at(7).bold);
    }

    #[test]
    fn test_apply_coalesces_equal_neighbors() {
        let mut table = StyleTable::uniform(10, TextStyle::default());
        table.apply(0, 5, &StylePatch::bold(true));
        table.apply(5, 10, &StylePatch::bold(true));
        assert_eq!(table.runs().len(), 1);
        assert!(table.range_has(0, 10, |s| s.bold));
    }

    #[test]
    fn test_range_has_is_per_char() {
        let mut table = StyleTable::uniform(10, TextStyle::default());
        table.apply(0, 4, &StylePatch::bold(true));
        assert!(table.range_has(0, 4, |s| s.bold));
        assert!(!table.range_has(0, 5, |s| s.bold));
        assert!(!table.range_has(4, 10, |s| s.bold));
    }

    #[test]
    fn test_insert_keeps_coverage() {
        let mut table = StyleTable::uniform(5, bold());
        table.insert(2, 3, TextStyle::default());

        assert_eq!(table.len(), 8);
        assert!(table.style_at(1).bold);
        assert!(!table.style_at(2).bold);
        assert!(!table.style_at(4).bold);
        assert!(table.style_at(5).bold);
    }

    #[test]
    fn test_insert_at_ends() {
        let mut table = StyleTable::uniform(3, bold());
        table.insert(0, 2, TextStyle::default());
        table.insert(5, 2, TextStyle::default());
        assert_eq!(table.len(), 7);
        assert!(!table.style_at(0).bold);
        assert!(table.style_at(2).bold);
        assert!(!table.style_at(6).bold);
    }

    #[test]
    fn test_remove_spanning_runs() {
        let mut table = StyleTable::uniform(10, TextStyle::default());
        table.apply(3, 7, &StylePatch::bold(true));
        table.remove(2, 6);

        assert_eq!(table.len(), 4);
        // chars 0,1 then old 8,9 remain, all unstyled, so one run
        assert_eq!(table.runs().len(), 1);
        assert!(!table.style_at(0).bold);
    }

    #[test]
    fn test_slice_and_overwrite_round_trip() {
        let mut table = StyleTable::uniform(10, TextStyle::default());
        table.apply(2, 8, &StylePatch::italic(true));

        let before = table.slice(1, 9);
        let original = table.clone();

        table.apply(1, 9, &StylePatch::bold(true));
        assert!(table.range_has(1, 9, |s| s.bold));

        table.overwrite(1, &before);
        assert_eq!(table, original);
    }

    #[test]
    fn test_from_runs_validates_coverage() {
        let runs = vec![StyleRun::new(4, TextStyle::default()), StyleRun::new(2, bold())];
        assert!(StyleTable::from_runs(runs.clone(), 6).is_ok());
        assert!(StyleTable::from_runs(runs, 7).is_err());
    }

    #[test]
    fn test_style_inheritance_position() {
        let mut table = StyleTable::uniform(4, TextStyle::default());
        table.apply(0, 4, &StylePatch::color(Color::Red));
        assert_eq!(table.style_at(3).color, Some(Color::Red));
        // past the end reports the default, not the last run
        assert_eq!(table.style_at(4).color, None);
    }
}

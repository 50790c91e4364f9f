//! View state
//!
//! The single viewport onto the document: caret position, preferred visual
//! column for vertical movement, scroll offsets, and the text area's
//! dimensions. Horizontal movement is grapheme-aware so the caret always
//! lands on a boundary a user would recognize as "one step".

use crate::core::document::Document;
use crate::core::utf8;

/// Caret, scroll state, and viewport dimensions
#[derive(Debug, Clone)]
pub struct View {
    /// Caret as a char offset into the document
    pub caret: usize,
    /// Visual column vertical movement tries to return to
    goal_col: Option<usize>,
    /// Top visible document line
    pub scroll_line: usize,
    /// Leftmost visible visual column
    pub scroll_col: usize,
    /// Text area width in cells
    pub width: usize,
    /// Text area height in rows
    pub height: usize,
    /// Tab stop width for this view
    pub tab_width: usize,
}

impl View {
    /// Create a view at the top of the document
    pub fn new(tab_width: usize) -> Self {
        Self {
            caret: 0,
            goal_col: None,
            scroll_line: 0,
            scroll_col: 0,
            width: 80,
            height: 24,
            tab_width,
        }
    }

    /// Set the text area dimensions
    pub fn set_dimensions(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Line index and char column of the caret
    pub fn line_col(&self, doc: &Document) -> (usize, usize) {
        let line = doc.char_to_line(self.caret);
        (line, self.caret - doc.line_start(line))
    }

    /// Clamp the caret into the document after an external mutation
    pub fn clamp(&mut self, doc: &Document) {
        self.caret = self.caret.min(doc.char_count());
    }

    /// Jump the caret to a char offset
    pub fn move_to(&mut self, doc: &Document, pos: usize) {
        self.caret = pos.min(doc.char_count());
        self.goal_col = None;
        self.scroll_to_caret(doc);
    }

    /// Move one grapheme left, crossing line boundaries
    pub fn move_left(&mut self, doc: &Document) {
        let (line, col) = self.line_col(doc);
        if col > 0 {
            let text = doc.line(line).unwrap_or_default();
            self.caret = doc.line_start(line) + utf8::prev_grapheme_start(&text, col);
        } else if line > 0 {
            // onto the newline, which is the end of the previous line
            self.caret -= 1;
        }
        self.goal_col = None;
        self.scroll_to_caret(doc);
    }

    /// Move one grapheme right, crossing line boundaries
    pub fn move_right(&mut self, doc: &Document) {
        let (line, col) = self.line_col(doc);
        let len = doc.line_len(line);
        if col < len {
            let text = doc.line(line).unwrap_or_default();
            self.caret = doc.line_start(line) + utf8::next_grapheme_end(&text, col);
        } else if self.caret < doc.char_count() {
            self.caret += 1;
        }
        self.goal_col = None;
        self.scroll_to_caret(doc);
    }

    /// Move up one line, honoring the goal column
    pub fn move_up(&mut self, doc: &Document) {
        self.move_vertical(doc, -1);
    }

    /// Move down one line, honoring the goal column
    pub fn move_down(&mut self, doc: &Document) {
        self.move_vertical(doc, 1);
    }

    /// Move up one screenful
    pub fn page_up(&mut self, doc: &Document) {
        self.move_vertical(doc, -(self.page_size() as isize));
    }

    /// Move down one screenful
    pub fn page_down(&mut self, doc: &Document) {
        self.move_vertical(doc, self.page_size() as isize);
    }

    fn page_size(&self) -> usize {
        self.height.saturating_sub(1).max(1)
    }

    fn move_vertical(&mut self, doc: &Document, delta: isize) {
        let (line, col) = self.line_col(doc);
        if self.goal_col.is_none() {
            let text = doc.line(line).unwrap_or_default();
            self.goal_col = Some(utf8::visual_col(&text, col, self.tab_width));
        }
        let goal = self.goal_col.unwrap_or(0);

        let last_line = doc.line_count().saturating_sub(1) as isize;
        let target = (line as isize + delta).clamp(0, last_line) as usize;
        let text = doc.line(target).unwrap_or_default();
        let target_col = utf8::char_col_from_visual(&text, goal, self.tab_width);
        self.caret = doc.line_start(target) + target_col;
        self.scroll_to_caret(doc);
    }

    /// Move to the start of the caret's line
    pub fn move_line_start(&mut self, doc: &Document) {
        let (line, _) = self.line_col(doc);
        self.caret = doc.line_start(line);
        self.goal_col = None;
        self.scroll_to_caret(doc);
    }

    /// Move to the end of the caret's line
    pub fn move_line_end(&mut self, doc: &Document) {
        let (line, _) = self.line_col(doc);
        self.caret = doc.line_start(line) + doc.line_len(line);
        self.goal_col = None;
        self.scroll_to_caret(doc);
    }

    /// Move to the start of the document
    pub fn move_doc_start(&mut self, doc: &Document) {
        self.move_to(doc, 0);
    }

    /// Move to the end of the document
    pub fn move_doc_end(&mut self, doc: &Document) {
        self.move_to(doc, doc.char_count());
    }

    /// Scroll the viewport without moving the caret (mouse wheel)
    pub fn scroll_by(&mut self, doc: &Document, delta: isize) {
        let last_line = doc.line_count().saturating_sub(1) as isize;
        self.scroll_line = (self.scroll_line as isize + delta).clamp(0, last_line) as usize;
    }

    /// Adjust scroll offsets so the caret is visible
    pub fn scroll_to_caret(&mut self, doc: &Document) {
        let (line, col) = self.line_col(doc);

        if line < self.scroll_line {
            self.scroll_line = line;
        }
        if self.height > 0 && line >= self.scroll_line + self.height {
            self.scroll_line = line + 1 - self.height;
        }

        let text = doc.line(line).unwrap_or_default();
        let visual = utf8::visual_col(&text, col, self.tab_width);
        if visual < self.scroll_col {
            self.scroll_col = visual;
        }
        if self.width > 0 && visual >= self.scroll_col + self.width {
            self.scroll_col = visual + 1 - self.width;
        }
    }

    /// Char offset under a text-area cell (mouse click). Coordinates are
    /// relative to the text area origin. Clicks past the last line land at
    /// the end of the document.
    pub fn char_at(&self, doc: &Document, screen_col: usize, screen_row: usize) -> usize {
        let line = self.scroll_line + screen_row;
        if line >= doc.line_count() {
            return doc.char_count();
        }
        let text = doc.line(line).unwrap_or_default();
        let col = utf8::char_col_from_visual(&text, self.scroll_col + screen_col, self.tab_width);
        (doc.line_start(line) + col).min(doc.char_count())
    }

    /// Screen position of the caret relative to the text area origin, or
    /// `None` when it is scrolled out of view
    pub fn caret_screen_pos(&self, doc: &Document) -> Option<(usize, usize)> {
        let (line, col) = self.line_col(doc);
        if line < self.scroll_line || line >= self.scroll_line + self.height {
            return None;
        }
        let text = doc.line(line).unwrap_or_default();
        let visual = utf8::visual_col(&text, col, self.tab_width);
        if visual < self.scroll_col || visual >= self.scroll_col + self.width {
            return None;
        }
        Some((visual - self.scroll_col, line - self.scroll_line))
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new(4)
    }
}

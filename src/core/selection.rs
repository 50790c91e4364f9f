//! Selection model
//!
//! A single anchor/cursor span over document char offsets. The anchor is
//! where the selection started; the cursor follows the caret, so the two
//! can be in either order. Formatting and clipboard commands operate on
//! the normalized `start()..end()` range.

use std::cmp::{max, min};

/// A span of selected text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Where the selection started
    pub anchor: usize,
    /// Where the selection currently ends (the caret side)
    pub cursor: usize,
}

impl Selection {
    /// Collapsed selection at a single position
    pub fn point(pos: usize) -> Self {
        Self {
            anchor: pos,
            cursor: pos,
        }
    }

    /// Selection from anchor to cursor
    pub fn new(anchor: usize, cursor: usize) -> Self {
        Self { anchor, cursor }
    }

    /// True when nothing is actually selected
    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }

    /// Smaller end of the span
    pub fn start(&self) -> usize {
        min(self.anchor, self.cursor)
    }

    /// Larger end of the span
    pub fn end(&self) -> usize {
        max(self.anchor, self.cursor)
    }

    /// Length of the span in chars
    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// True when a char offset falls inside the span
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start() && pos < self.end()
    }

    /// Move the cursor side, keeping the anchor
    pub fn extend_to(&mut self, new_cursor: usize) {
        self.cursor = new_cursor;
    }

    /// Shift the span to account for text inserted at `insert_pos`
    pub fn adjust_for_insert(&mut self, insert_pos: usize, insert_len: usize) {
        if insert_pos <= self.anchor {
            self.anchor += insert_len;
        }
        if insert_pos <= self.cursor {
            self.cursor += insert_len;
        }
    }

    /// Shift or shrink the span to account for a deletion
    pub fn adjust_for_delete(&mut self, delete_start: usize, delete_len: usize) {
        let delete_end = delete_start + delete_len;

        if delete_end <= self.anchor {
            self.anchor -= delete_len;
        } else if delete_start < self.anchor {
            self.anchor = delete_start;
        }

        if delete_end <= self.cursor {
            self.cursor -= delete_len;
        } else if delete_start < self.cursor {
            self.cursor = delete_start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_empty() {
        let sel = Selection::point(5);
        assert!(sel.is_empty());
        assert_eq!(sel.len(), 0);
        assert!(!sel.contains(5));
    }

    #[test]
    fn test_normalized_ends() {
        let sel = Selection::new(8, 3);
        assert_eq!(sel.start(), 3);
        assert_eq!(sel.end(), 8);
        assert_eq!(sel.len(), 5);
        assert!(sel.contains(3));
        assert!(sel.contains(7));
        assert!(!sel.contains(8));
    }

    #[test]
    fn test_extend() {
        let mut sel = Selection::point(4);
        sel.extend_to(9);
        assert_eq!(sel.anchor, 4);
        assert_eq!(sel.cursor, 9);
        sel.extend_to(1);
        assert_eq!(sel.start(), 1);
        assert_eq!(sel.end(), 4);
    }

    #[test]
    fn test_adjust_for_insert() {
        let mut sel = Selection::new(5, 10);
        sel.adjust_for_insert(2, 3);
        assert_eq!(sel.anchor, 8);
        assert_eq!(sel.cursor, 13);

        // Insertion after the span leaves it alone
        sel.adjust_for_insert(20, 4);
        assert_eq!(sel.anchor, 8);
        assert_eq!(sel.cursor, 13);
    }

    #[test]
    fn test_adjust_for_delete_before_and_overlapping() {
        let mut sel = Selection::new(10, 15);
        sel.adjust_for_delete(0, 4);
        assert_eq!(sel.anchor, 6);
        assert_eq!(sel.cursor, 11);

        // Deletion overlapping the anchor clamps it to the cut
        sel.adjust_for_delete(4, 4);
        assert_eq!(sel.anchor, 4);
        assert_eq!(sel.cursor, 7);
    }
}

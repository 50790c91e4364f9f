//! Undo history
//!
//! Command-pattern undo: every document mutation is captured as an
//! invertible `EditOp` descriptor with a forward `apply` and an exact
//! `revert`. `History` owns the undo and redo stacks of op groups. A fresh
//! edit clears the redo stack, and consecutive single-char typing edits
//! merge into one group so undo peels back a typing burst at once rather
//! than one char at a time.

use std::collections::VecDeque;

use crate::core::document::{Document, StyledText};
use crate::core::style::StyleRun;

/// Oldest groups fall off once the stack reaches this depth
pub const MAX_UNDO_DEPTH: usize = 10_000;

/// Maximum single-char edits merged into one typing group
const TYPING_BATCH_SIZE: usize = 100;

// ==================== Edit Descriptors ====================

/// An invertible document mutation
#[derive(Debug, Clone, PartialEq)]
pub enum EditOp {
    /// Styled text inserted at a char offset
    Insert { pos: usize, text: StyledText },
    /// Styled text removed starting at a char offset
    Delete { pos: usize, text: StyledText },
    /// Style runs replaced over a span; `before` and `after` cover the
    /// same number of chars starting at `start`
    Restyle {
        start: usize,
        before: Vec<StyleRun>,
        after: Vec<StyleRun>,
    },
}

fn run_span(runs: &[StyleRun]) -> usize {
    runs.iter().map(|r| r.len).sum()
}

impl EditOp {
    /// Apply the op forward
    pub fn apply(&self, doc: &mut Document) {
        match self {
            EditOp::Insert { pos, text } => doc.splice_in(*pos, text),
            EditOp::Delete { pos, text } => {
                doc.splice_out(*pos, *pos + text.char_len());
            }
            EditOp::Restyle { start, after, .. } => doc.set_styles(*start, after),
        }
    }

    /// Apply the exact inverse
    pub fn revert(&self, doc: &mut Document) {
        match self {
            EditOp::Insert { pos, text } => {
                doc.splice_out(*pos, *pos + text.char_len());
            }
            EditOp::Delete { pos, text } => doc.splice_in(*pos, text),
            EditOp::Restyle { start, before, .. } => doc.set_styles(*start, before),
        }
    }

    /// Where the caret lands after applying this op
    pub fn caret_after_apply(&self) -> usize {
        match self {
            EditOp::Insert { pos, text } => pos + text.char_len(),
            EditOp::Delete { pos, .. } => *pos,
            EditOp::Restyle { start, after, .. } => start + run_span(after),
        }
    }

    /// Where the caret lands after reverting this op
    pub fn caret_after_revert(&self) -> usize {
        match self {
            EditOp::Insert { pos, .. } => *pos,
            EditOp::Delete { pos, text } => pos + text.char_len(),
            EditOp::Restyle { start, before, .. } => start + run_span(before),
        }
    }
}

/// A group of ops undone/redone together
#[derive(Debug, Clone, Default)]
pub struct UndoGroup {
    /// The ops in application order
    pub ops: Vec<EditOp>,
}

/// Decide whether `curr` continues the typing run ending in `prev`.
/// Only adjacent single-char inserts or deletes merge, and a newline
/// always starts a new group.
fn should_group(prev: &EditOp, curr: &EditOp) -> bool {
    match (prev, curr) {
        (
            EditOp::Insert {
                pos: prev_pos,
                text: prev_text,
            },
            EditOp::Insert {
                pos: curr_pos,
                text: curr_text,
            },
        ) => {
            curr_text.char_len() == 1
                && !curr_text.text.contains('\n')
                && *curr_pos == prev_pos + prev_text.char_len()
        }
        (
            EditOp::Delete { pos: prev_pos, .. },
            EditOp::Delete {
                pos: curr_pos,
                text: curr_text,
            },
        ) => {
            // Same position is delete-forward; ending where the previous
            // delete started is backspace.
            curr_text.char_len() == 1
                && (*curr_pos == *prev_pos || curr_pos + curr_text.char_len() == *prev_pos)
        }
        _ => false,
    }
}

// ==================== History ====================

/// The undo and redo stacks
#[derive(Debug, Default)]
pub struct History {
    /// A deque so capping the depth drops from the old end cheaply
    undo_stack: VecDeque<UndoGroup>,
    /// Redo stack
    redo_stack: VecDeque<UndoGroup>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an op to the document and record it. `merge` marks typing
    /// edits that may join the previous group.
    pub fn apply(&mut self, doc: &mut Document, op: EditOp, merge: bool) {
        op.apply(doc);
        self.push(op, merge);
    }

    /// Apply several ops as one undo group (replacing a selection is a
    /// delete plus an insert, undone together).
    pub fn apply_group(&mut self, doc: &mut Document, ops: Vec<EditOp>) {
        if ops.is_empty() {
            return;
        }
        for op in &ops {
            op.apply(doc);
        }
        self.redo_stack.clear();
        self.undo_stack.push_back(UndoGroup { ops });
        if self.undo_stack.len() > MAX_UNDO_DEPTH {
            self.undo_stack.pop_front();
        }
    }

    /// Record an already-applied op
    fn push(&mut self, op: EditOp, merge: bool) {
        self.redo_stack.clear();

        if merge {
            if let Some(group) = self.undo_stack.back_mut() {
                let continues = group.ops.len() < TYPING_BATCH_SIZE
                    && group.ops.last().is_some_and(|prev| should_group(prev, &op));
                if continues {
                    group.ops.push(op);
                    return;
                }
            }
        }

        self.undo_stack.push_back(UndoGroup { ops: vec![op] });
        if self.undo_stack.len() > MAX_UNDO_DEPTH {
            self.undo_stack.pop_front();
        }
    }

    /// Undo the most recent group. Returns the caret position to restore,
    /// or `None` when there is nothing to undo.
    pub fn undo(&mut self, doc: &mut Document) -> Option<usize> {
        let group = self.undo_stack.pop_back()?;
        let mut caret = 0;
        for op in group.ops.iter().rev() {
            op.revert(doc);
            caret = op.caret_after_revert();
        }
        self.redo_stack.push_back(group);
        Some(caret)
    }

    /// Redo the most recently undone group. Returns the caret position to
    /// restore, or `None` when there is nothing to redo.
    pub fn redo(&mut self, doc: &mut Document) -> Option<usize> {
        let group = self.redo_stack.pop_back()?;
        let mut caret = 0;
        for op in &group.ops {
            op.apply(doc);
            caret = op.caret_after_apply();
        }
        self.undo_stack.push_back(group);
        Some(caret)
    }

    /// True when undo has something to pop
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// True when redo has something to pop
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undoable groups
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Drop both stacks (used when the document is replaced wholesale)
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::{StylePatch, TextStyle};

    fn insert_op(pos: usize, text: &str) -> EditOp {
        EditOp::Insert {
            pos,
            text: StyledText::plain(text, TextStyle::default()),
        }
    }

    #[test]
    fn test_undo_redo_single_insert() {
        let mut doc = Document::new();
        let mut history = History::new();

        history.apply(&mut doc, insert_op(0, "hello"), false);
        assert_eq!(doc.text(), "hello");

        let caret = history.undo(&mut doc);
        assert_eq!(doc.text(), "");
        assert_eq!(caret, Some(0));

        let caret = history.redo(&mut doc);
        assert_eq!(doc.text(), "hello");
        assert_eq!(caret, Some(5));
    }

    #[test]
    fn test_fresh_edit_clears_redo() {
        let mut doc = Document::new();
        let mut history = History::new();

        history.apply(&mut doc, insert_op(0, "one"), false);
        history.undo(&mut doc);
        assert!(history.can_redo());

        history.apply(&mut doc, insert_op(0, "two"), false);
        assert!(!history.can_redo());
        assert_eq!(doc.text(), "two");
    }

    #[test]
    fn test_typing_merges_into_one_group() {
        let mut doc = Document::new();
        let mut history = History::new();

        for (i, ch) in ["h", "e", "y"].iter().enumerate() {
            history.apply(&mut doc, insert_op(i, ch), true);
        }
        assert_eq!(doc.text(), "hey");
        assert_eq!(history.undo_depth(), 1);

        history.undo(&mut doc);
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn test_newline_breaks_typing_group() {
        let mut doc = Document::new();
        let mut history = History::new();

        history.apply(&mut doc, insert_op(0, "a"), true);
        history.apply(&mut doc, insert_op(1, "\n"), true);
        history.apply(&mut doc, insert_op(2, "b"), true);

        assert_eq!(history.undo_depth(), 3);
        history.undo(&mut doc);
        assert_eq!(doc.text(), "a\n");
    }

    #[test]
    fn test_backspace_run_merges() {
        let mut doc = Document::new();
        let mut history = History::new();

        history.apply(&mut doc, insert_op(0, "abc"), false);
        // Backspace three times from the end
        for pos in [2, 1, 0] {
            let removed = doc.text_range(pos, pos + 1);
            let op = EditOp::Delete {
                pos,
                text: StyledText::plain(removed, TextStyle::default()),
            };
            history.apply(&mut doc, op, true);
        }
        assert_eq!(doc.text(), "");
        assert_eq!(history.undo_depth(), 2);

        history.undo(&mut doc);
        assert_eq!(doc.text(), "abc");
    }

    #[test]
    fn test_group_undoes_as_one_step() {
        let mut doc = Document::new();
        let mut history = History::new();
        history.apply(&mut doc, insert_op(0, "old"), false);

        // Replace "old" with "new" in one group
        let removed = StyledText::plain("old", TextStyle::default());
        history.apply_group(
            &mut doc,
            vec![
                EditOp::Delete {
                    pos: 0,
                    text: removed,
                },
                insert_op(0, "new"),
            ],
        );
        assert_eq!(doc.text(), "new");
        assert_eq!(history.undo_depth(), 2);

        history.undo(&mut doc);
        assert_eq!(doc.text(), "old");

        history.redo(&mut doc);
        assert_eq!(doc.text(), "new");
    }

    #[test]
    fn test_restyle_revert_restores_runs() {
        let mut doc = Document::new();
        let mut history = History::new();
        history.apply(&mut doc, insert_op(0, "styled text"), false);

        let before = doc.styles().slice(0, 6);
        let after: Vec<StyleRun> = before
            .iter()
            .map(|r| StyleRun::new(r.len, StylePatch::bold(true).applied(r.style)))
            .collect();
        history.apply(
            &mut doc,
            EditOp::Restyle {
                start: 0,
                before,
                after,
            },
            false,
        );
        assert!(doc.style_at(0).bold);
        assert!(!doc.style_at(6).bold);

        history.undo(&mut doc);
        assert!(!doc.style_at(0).bold);
        assert_eq!(doc.text(), "styled text");

        history.redo(&mut doc);
        assert!(doc.style_at(5).bold);
    }

    #[test]
    fn test_depth_cap_drops_oldest() {
        let mut doc = Document::new();
        let mut history = History::new();

        for _ in 0..(MAX_UNDO_DEPTH + 25) {
            let pos = doc.char_count();
            history.apply(&mut doc, insert_op(pos, "x"), false);
        }
        assert_eq!(history.undo_depth(), MAX_UNDO_DEPTH);
    }

    #[test]
    fn test_clear_drops_both_stacks() {
        let mut doc = Document::new();
        let mut history = History::new();
        history.apply(&mut doc, insert_op(0, "x"), false);
        history.undo(&mut doc);

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}

//! Caret movement and selection growth

use crate::core::app::App;
use crate::core::command::Command;
use crate::core::dispatcher::DispatchResult;
use crate::core::selection::Selection;

/// Collapse any selection and drop the pending typing style before a
/// plain caret move
fn leave_selection(app: &mut App) {
    app.clear_selection();
    app.reset_typing_style();
}

/// Anchor a selection at the caret if none is active yet
fn begin_extend(app: &mut App) {
    app.reset_typing_style();
    if app.selection.is_none() {
        app.selection = Some(Selection::point(app.view.caret));
    }
}

/// Grow the active selection to the caret's new position
fn finish_extend(app: &mut App) {
    let pos = app.view.caret;
    if let Some(sel) = &mut app.selection {
        sel.extend_to(pos);
    }
}

/// Move caret left one grapheme
#[derive(Clone)]
pub struct CaretLeft;

impl Command for CaretLeft {
    fn execute(&self, app: &mut App) -> DispatchResult {
        leave_selection(app);
        app.view.move_left(&app.document);
        DispatchResult::Success
    }
}

/// Move caret right one grapheme
#[derive(Clone)]
pub struct CaretRight;

impl Command for CaretRight {
    fn execute(&self, app: &mut App) -> DispatchResult {
        leave_selection(app);
        app.view.move_right(&app.document);
        DispatchResult::Success
    }
}

/// Move caret up one line, keeping the visual goal column
#[derive(Clone)]
pub struct CaretUp;

impl Command for CaretUp {
    fn execute(&self, app: &mut App) -> DispatchResult {
        leave_selection(app);
        app.view.move_up(&app.document);
        DispatchResult::Success
    }
}

/// Move caret down one line, keeping the visual goal column
#[derive(Clone)]
pub struct CaretDown;

impl Command for CaretDown {
    fn execute(&self, app: &mut App) -> DispatchResult {
        leave_selection(app);
        app.view.move_down(&app.document);
        DispatchResult::Success
    }
}

/// Move caret to the start of the current line
#[derive(Clone)]
pub struct LineStart;

impl Command for LineStart {
    fn execute(&self, app: &mut App) -> DispatchResult {
        leave_selection(app);
        app.view.move_line_start(&app.document);
        DispatchResult::Success
    }
}

/// Move caret to the end of the current line
#[derive(Clone)]
pub struct LineEnd;

impl Command for LineEnd {
    fn execute(&self, app: &mut App) -> DispatchResult {
        leave_selection(app);
        app.view.move_line_end(&app.document);
        DispatchResult::Success
    }
}

/// Move caret up one screenful
#[derive(Clone)]
pub struct PageUp;

impl Command for PageUp {
    fn execute(&self, app: &mut App) -> DispatchResult {
        leave_selection(app);
        app.view.page_up(&app.document);
        DispatchResult::Success
    }
}

/// Move caret down one screenful
#[derive(Clone)]
pub struct PageDown;

impl Command for PageDown {
    fn execute(&self, app: &mut App) -> DispatchResult {
        leave_selection(app);
        app.view.page_down(&app.document);
        DispatchResult::Success
    }
}

/// Move caret to the start of the document
#[derive(Clone)]
pub struct DocumentStart;

impl Command for DocumentStart {
    fn execute(&self, app: &mut App) -> DispatchResult {
        leave_selection(app);
        app.view.move_doc_start(&app.document);
        DispatchResult::Success
    }
}

/// Move caret to the end of the document
#[derive(Clone)]
pub struct DocumentEnd;

impl Command for DocumentEnd {
    fn execute(&self, app: &mut App) -> DispatchResult {
        leave_selection(app);
        app.view.move_doc_end(&app.document);
        DispatchResult::Success
    }
}

/// Extend the selection one grapheme left
#[derive(Clone)]
pub struct SelectLeft;

impl Command for SelectLeft {
    fn execute(&self, app: &mut App) -> DispatchResult {
        begin_extend(app);
        app.view.move_left(&app.document);
        finish_extend(app);
        DispatchResult::Success
    }
}

/// Extend the selection one grapheme right
#[derive(Clone)]
pub struct SelectRight;

impl Command for SelectRight {
    fn execute(&self, app: &mut App) -> DispatchResult {
        begin_extend(app);
        app.view.move_right(&app.document);
        finish_extend(app);
        DispatchResult::Success
    }
}

/// Extend the selection one line up
#[derive(Clone)]
pub struct SelectUp;

impl Command for SelectUp {
    fn execute(&self, app: &mut App) -> DispatchResult {
        begin_extend(app);
        app.view.move_up(&app.document);
        finish_extend(app);
        DispatchResult::Success
    }
}

/// Extend the selection one line down
#[derive(Clone)]
pub struct SelectDown;

impl Command for SelectDown {
    fn execute(&self, app: &mut App) -> DispatchResult {
        begin_extend(app);
        app.view.move_down(&app.document);
        finish_extend(app);
        DispatchResult::Success
    }
}

/// Select the whole document
#[derive(Clone)]
pub struct SelectAll;

impl Command for SelectAll {
    fn execute(&self, app: &mut App) -> DispatchResult {
        app.reset_typing_style();
        let len = app.document.char_count();
        app.selection = Some(Selection::new(0, len));
        app.view.move_to(&app.document, len);
        DispatchResult::Success
    }
}

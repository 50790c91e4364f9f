//! Text entry, deletion, and the clipboard trio

use crate::core::app::App;
use crate::core::command::Command;
use crate::core::dispatcher::DispatchResult;
use crate::core::history::EditOp;

/// Insert a line break at the caret
#[derive(Clone)]
pub struct InsertNewline;

impl Command for InsertNewline {
    fn execute(&self, app: &mut App) -> DispatchResult {
        app.insert_char('\n');
        DispatchResult::Success
    }
}

/// Insert a tab character at the caret
#[derive(Clone)]
pub struct InsertTab;

impl Command for InsertTab {
    fn execute(&self, app: &mut App) -> DispatchResult {
        app.insert_char('\t');
        DispatchResult::Success
    }
}

/// Delete the selection, or the character before the caret
#[derive(Clone)]
pub struct DeleteBackward;

impl Command for DeleteBackward {
    fn execute(&self, app: &mut App) -> DispatchResult {
        if app.delete_selection() {
            return DispatchResult::Success;
        }
        let caret = app.view.caret;
        if caret == 0 {
            return DispatchResult::Success;
        }
        let removed = app.document.styled_range(caret - 1, caret);
        app.history.apply(
            &mut app.document,
            EditOp::Delete {
                pos: caret - 1,
                text: removed,
            },
            true,
        );
        app.view.move_to(&app.document, caret - 1);
        DispatchResult::Success
    }
}

/// Delete the selection, or the character after the caret
#[derive(Clone)]
pub struct DeleteForward;

impl Command for DeleteForward {
    fn execute(&self, app: &mut App) -> DispatchResult {
        if app.delete_selection() {
            return DispatchResult::Success;
        }
        let caret = app.view.caret;
        if caret >= app.document.char_count() {
            return DispatchResult::Success;
        }
        let removed = app.document.styled_range(caret, caret + 1);
        app.history.apply(
            &mut app.document,
            EditOp::Delete {
                pos: caret,
                text: removed,
            },
            true,
        );
        app.view.move_to(&app.document, caret);
        DispatchResult::Success
    }
}

/// Move the selection to the clipboard
#[derive(Clone)]
pub struct Cut;

impl Command for Cut {
    fn execute(&self, app: &mut App) -> DispatchResult {
        let Some((start, end)) = app.selection_range() else {
            return DispatchResult::Success;
        };
        let text = app.document.styled_range(start, end);
        app.clipboard.set(text);
        app.delete_selection();
        DispatchResult::Success
    }
}

/// Copy the selection to the clipboard
#[derive(Clone)]
pub struct Copy;

impl Command for Copy {
    fn execute(&self, app: &mut App) -> DispatchResult {
        if let Some((start, end)) = app.selection_range() {
            let text = app.document.styled_range(start, end);
            app.clipboard.set(text);
        }
        DispatchResult::Success
    }
}

/// Insert the clipboard contents at the caret
#[derive(Clone)]
pub struct Paste;

impl Command for Paste {
    fn execute(&self, app: &mut App) -> DispatchResult {
        if let Some(text) = app.clipboard.get().cloned() {
            app.insert_styled(text);
        }
        DispatchResult::Success
    }
}

use crate::core::app::App;
use crate::core::command::Command;
use crate::core::dispatcher::DispatchResult;

/// Undo the last edit group
#[derive(Clone)]
pub struct Undo;

impl Command for Undo {
    fn execute(&self, app: &mut App) -> DispatchResult {
        match app.history.undo(&mut app.document) {
            Some(caret) => {
                app.selection = None;
                app.typing_style = None;
                app.view.move_to(&app.document, caret);
                DispatchResult::Success
            }
            None => DispatchResult::Info("Nothing to undo".to_string()),
        }
    }
}

/// Redo the most recently undone edit group
#[derive(Clone)]
pub struct Redo;

impl Command for Redo {
    fn execute(&self, app: &mut App) -> DispatchResult {
        match app.history.redo(&mut app.document) {
            Some(caret) => {
                app.selection = None;
                app.typing_style = None;
                app.view.move_to(&app.document, caret);
                DispatchResult::Success
            }
            None => DispatchResult::Info("Nothing to redo".to_string()),
        }
    }
}

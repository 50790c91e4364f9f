//! New, open, and save

use crate::core::app::App;
use crate::core::command::Command;
use crate::core::dispatcher::{DispatchResult, InputAction};
use crate::core::history::EditOp;

/// Start a fresh unnamed document. The cleared text stays undoable.
#[derive(Clone)]
pub struct NewDocument;

impl Command for NewDocument {
    fn execute(&self, app: &mut App) -> DispatchResult {
        let len = app.document.char_count();
        if len > 0 {
            let removed = app.document.styled_range(0, len);
            app.history.apply(
                &mut app.document,
                EditOp::Delete {
                    pos: 0,
                    text: removed,
                },
                false,
            );
        }
        app.selection = None;
        app.typing_style = None;
        app.document.filename = None;
        app.document.modified = false;
        app.view.move_to(&app.document, 0);
        app.message = Some("New document".to_string());
        DispatchResult::Success
    }
}

/// Open a file (prompts for a path)
#[derive(Clone)]
pub struct OpenFile;

impl Command for OpenFile {
    fn execute(&self, _app: &mut App) -> DispatchResult {
        DispatchResult::NeedsInput {
            prompt: "Open file: ".to_string(),
            prefill: String::new(),
            action: InputAction::OpenFile,
        }
    }
}

/// Save the document. Always prompts for the path, pre-filled with the
/// current filename when there is one.
#[derive(Clone)]
pub struct SaveDocument;

impl Command for SaveDocument {
    fn execute(&self, app: &mut App) -> DispatchResult {
        let prefill = app
            .document
            .filename
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        DispatchResult::NeedsInput {
            prompt: "Save as: ".to_string(),
            prefill,
            action: InputAction::SaveAs,
        }
    }
}

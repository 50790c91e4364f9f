//! Session-level commands: quitting and menu activation

use crate::core::app::App;
use crate::core::command::Command;
use crate::core::dispatcher::{DispatchResult, InputAction};

/// Exit the application, confirming first when the document has
/// unsaved changes
#[derive(Clone)]
pub struct Quit;

impl Command for Quit {
    fn execute(&self, app: &mut App) -> DispatchResult {
        if app.document.modified {
            DispatchResult::NeedsInput {
                prompt: "Unsaved changes. Quit anyway? (y/n): ".to_string(),
                prefill: String::new(),
                action: InputAction::ConfirmQuit,
            }
        } else {
            DispatchResult::Exit
        }
    }
}

/// Open the menu bar for keyboard navigation (F10)
#[derive(Clone)]
pub struct OpenMenu;

impl Command for OpenMenu {
    fn execute(&self, app: &mut App) -> DispatchResult {
        app.menu_bar.open_menu(0);
        DispatchResult::Success
    }
}

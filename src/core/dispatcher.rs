//! Command dispatch
//!
//! The dispatcher is one of the explicit event-to-handler tables: a typed
//! char goes straight into the document, and everything else is a command
//! name looked up in the registry. Command logic lives in the structs under
//! `core::commands`; the dispatcher only routes and reports.

use crate::core::app::App;

/// A prompt-driven operation waiting for user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Open the file named by the input
    OpenFile,
    /// Save to the path named by the input
    SaveAs,
    /// Apply the font size named by the input
    FontSize,
    /// Apply the font color named by the input
    FontColor,
    /// Quit if the input confirms discarding unsaved changes
    ConfirmQuit,
}

/// What a handler wants done after it ran
#[derive(Debug, PartialEq)]
pub enum DispatchResult {
    /// Done, nothing further to report
    Success,
    /// No handler claimed the input
    NotHandled,
    /// Tear down the session and leave the main loop
    Exit,
    /// Command needs user input before completing. `prefill` seeds the
    /// prompt's input field (Save pre-fills the current filename).
    NeedsInput {
        prompt: String,
        prefill: String,
        action: InputAction,
    },
    /// Informational message for the status line
    Info(String),
    /// Modal error dialog to display
    Alert { title: String, message: String },
}

/// Dispatch a typed char or a named command against the application.
///
/// Typed chars insert at the caret (replacing any selection) with the
/// pending typing style. Named commands are looked up in the registry;
/// unknown names are logged to stderr and reported as `NotHandled`.
pub fn dispatch(
    app: &mut App,
    command_name: Option<&str>,
    insert_char: Option<char>,
) -> DispatchResult {
    if let Some(c) = insert_char {
        app.insert_char(c);
        return DispatchResult::Success;
    }

    if let Some(command_str) = command_name {
        if let Some(command_obj) = app.command_registry.get(command_str).cloned() {
            return command_obj.execute(app);
        }
        eprintln!("Command not found in registry: {}", command_str);
        return DispatchResult::NotHandled;
    }

    DispatchResult::NotHandled
}

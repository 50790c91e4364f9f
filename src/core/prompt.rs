//! Modal prompt state and completion handling
//!
//! One prompt at a time: the status row becomes a minibuffer that owns
//! keyboard input until the user confirms or cancels. Confirmed input is
//! routed through handle_prompt_action, which carries out the pending
//! InputAction against the application.

use crate::core::app::App;
use crate::core::dialog::Dialog;
use crate::core::dispatcher::InputAction;
use crate::core::document::Document;
use crate::core::input::{InputEvent, Key};
use crate::core::style::{Color, StylePatch};

/// Result of feeding a key to an active prompt
#[derive(Debug, Clone, PartialEq)]
pub enum PromptResult {
    /// Keep prompting
    Continue,
    /// Enter was pressed; carries the final input
    Confirmed(String),
    /// User cancelled
    Cancelled,
}

/// State for an active minibuffer prompt
pub struct PromptState {
    /// The prompt text shown before the input
    pub prompt: String,
    /// What the user has typed so far
    pub input: String,
    /// Cursor position within input (byte offset)
    pub cursor: usize,
    /// What to do with the confirmed input
    pub action: InputAction,
}

impl PromptState {
    pub fn new(prompt: &str, action: InputAction) -> Self {
        Self {
            prompt: prompt.to_string(),
            input: String::new(),
            cursor: 0,
            action,
        }
    }

    /// Create a prompt with pre-filled input (Save pre-fills the filename)
    pub fn with_input(prompt: &str, input: &str, action: InputAction) -> Self {
        Self {
            prompt: prompt.to_string(),
            input: input.to_string(),
            cursor: input.len(),
            action,
        }
    }

    /// Process a key event while the prompt owns input
    pub fn handle_key(&mut self, event: &InputEvent) -> PromptResult {
        match &event.key {
            Key::Enter => PromptResult::Confirmed(self.input.clone()),
            Key::Esc | Key::Ctrl('g') => PromptResult::Cancelled,
            Key::Backspace => {
                self.delete_backward();
                PromptResult::Continue
            }
            Key::Delete => {
                self.delete_forward();
                PromptResult::Continue
            }
            Key::Left => {
                self.cursor_left();
                PromptResult::Continue
            }
            Key::Right => {
                self.cursor_right();
                PromptResult::Continue
            }
            Key::Home | Key::Ctrl('a') => {
                self.cursor = 0;
                PromptResult::Continue
            }
            Key::End | Key::Ctrl('e') => {
                self.cursor = self.input.len();
                PromptResult::Continue
            }
            Key::Char(c) if !event.ctrl && !event.alt => {
                self.insert_char(*c);
                PromptResult::Continue
            }
            _ => PromptResult::Continue,
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.input.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn delete_backward(&mut self) {
        if self.cursor > 0 {
            let prev_char = self.input[..self.cursor].chars().last().unwrap();
            self.cursor -= prev_char.len_utf8();
            self.input.remove(self.cursor);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.input.len() {
            self.input.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            let prev_char = self.input[..self.cursor].chars().last().unwrap();
            self.cursor -= prev_char.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.input.len() {
            let next_char = self.input[self.cursor..].chars().next().unwrap();
            self.cursor += next_char.len_utf8();
        }
    }
}

/// Handle a completed prompt action at the core level.
/// Returns true if exit is requested.
pub fn handle_prompt_action(
    app: &mut App,
    action: InputAction,
    input: String,
) -> Result<bool, Box<dyn std::error::Error>> {
    match action {
        InputAction::OpenFile => {
            if !input.is_empty() {
                let path = std::path::PathBuf::from(&input);
                match Document::from_file(&path) {
                    Ok(doc) => {
                        app.replace_document(doc);
                        app.message = Some(format!("Opened {}", input));
                    }
                    Err(e) => {
                        // Load failures go to stderr only; the editor
                        // keeps its prior state.
                        eprintln!("jot: open {}: {}", input, e);
                    }
                }
            }
        }
        InputAction::SaveAs => {
            if !input.is_empty() {
                let path = std::path::PathBuf::from(&input);
                match app.document.save_as(&path) {
                    Ok(()) => {
                        app.message = Some(format!("Wrote {}", input));
                    }
                    Err(e) => {
                        eprintln!("jot: save {}: {}", input, e);
                    }
                }
            }
        }
        InputAction::FontSize => match input.trim().parse::<u16>() {
            Ok(size) if (1..=512).contains(&size) => {
                app.apply_patch(StylePatch::size(size));
                app.message = Some(format!("Font size: {}", size));
            }
            _ => {
                app.dialog = Some(Dialog::new(
                    "Invalid font size",
                    &format!("'{}' is not a font size (expected 1-512)", input),
                ));
            }
        },
        InputAction::FontColor => match Color::parse(input.trim()) {
            Some(color) => {
                app.apply_patch(StylePatch::color(color));
                app.message = Some(format!("Font color: {}", input.trim()));
            }
            None => {
                app.dialog = Some(Dialog::new(
                    "Invalid color",
                    &format!("'{}' is not a color name or #RRGGBB value", input),
                ));
            }
        },
        InputAction::ConfirmQuit => {
            let answer = input.trim().to_ascii_lowercase();
            if answer == "y" || answer == "yes" {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

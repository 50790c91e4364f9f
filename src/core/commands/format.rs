//! Style toggles and the size/color prompts

use crate::core::app::App;
use crate::core::command::Command;
use crate::core::dispatcher::{DispatchResult, InputAction};
use crate::core::style::StylePatch;

/// Toggle bold over the selection or the pending typing style.
/// The new state is the inverse of what is already there.
#[derive(Clone)]
pub struct ToggleBold;

impl Command for ToggleBold {
    fn execute(&self, app: &mut App) -> DispatchResult {
        let on = !app.reference_style().bold;
        app.apply_patch(StylePatch::bold(on));
        DispatchResult::Success
    }
}

/// Toggle italic over the selection or the pending typing style
#[derive(Clone)]
pub struct ToggleItalic;

impl Command for ToggleItalic {
    fn execute(&self, app: &mut App) -> DispatchResult {
        let on = !app.reference_style().italic;
        app.apply_patch(StylePatch::italic(on));
        DispatchResult::Success
    }
}

/// Toggle underline over the selection or the pending typing style
#[derive(Clone)]
pub struct ToggleUnderline;

impl Command for ToggleUnderline {
    fn execute(&self, app: &mut App) -> DispatchResult {
        let on = !app.reference_style().underline;
        app.apply_patch(StylePatch::underline(on));
        DispatchResult::Success
    }
}

/// Set the font size (prompts)
#[derive(Clone)]
pub struct SetFontSize;

impl Command for SetFontSize {
    fn execute(&self, _app: &mut App) -> DispatchResult {
        DispatchResult::NeedsInput {
            prompt: "Font size: ".to_string(),
            prefill: String::new(),
            action: InputAction::FontSize,
        }
    }
}

/// Set the font color (prompts)
#[derive(Clone)]
pub struct SetFontColor;

impl Command for SetFontColor {
    fn execute(&self, _app: &mut App) -> DispatchResult {
        DispatchResult::NeedsInput {
            prompt: "Font color: ".to_string(),
            prefill: String::new(),
            action: InputAction::FontColor,
        }
    }
}

//! Toolbar data model
//!
//! A single row of formatting buttons below the menu bar. Like the menu,
//! each button names a registry command; rendering and active-state
//! highlighting live in terminal/renderers/toolbar_renderer.rs.

/// Height of the toolbar in cells
pub const TOOLBAR_HEIGHT_CELLS: usize = 1;

/// A clickable toolbar button
#[derive(Clone, Debug)]
pub struct ToolbarButton {
    /// Button label (shown between brackets)
    pub label: &'static str,
    /// Registry command this button fires
    pub command: &'static str,
}

impl ToolbarButton {
    pub const fn new(label: &'static str, command: &'static str) -> Self {
        Self { label, command }
    }
}

/// The formatting toolbar
#[derive(Clone, Debug)]
pub struct Toolbar {
    pub buttons: Vec<ToolbarButton>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self {
            buttons: vec![
                ToolbarButton::new("B", "toggle-bold"),
                ToolbarButton::new("I", "toggle-italic"),
                ToolbarButton::new("U", "toggle-underline"),
                ToolbarButton::new("Size", "set-font-size"),
                ToolbarButton::new("Color", "set-font-color"),
            ],
        }
    }

    /// Toolbar layout (label, x_start, x_end) for rendering and clicks.
    /// Each button renders as "[label]" with one cell of spacing.
    pub fn layout(&self) -> Vec<(&'static str, usize, usize)> {
        let mut result = Vec::new();
        let mut x = 1;
        for button in &self.buttons {
            let width = button.label.len() + 2; // brackets
            result.push((button.label, x, x + width));
            x += width + 1;
        }
        result
    }

    /// Hit test a click column against the button layout
    pub fn command_at(&self, x: usize) -> Option<&'static str> {
        for (button, (_, start, end)) in self.buttons.iter().zip(self.layout()) {
            if x >= start && x < end {
                return Some(button.command);
            }
        }
        None
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new()
    }
}

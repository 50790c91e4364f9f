//! Modal message dialog data model
//!
//! A dialog owns all input until dismissed. It carries no buttons and no
//! result; any key or click closes it. Rendering lives in
//! terminal/renderers/dialog_renderer.rs.

/// A modal message box
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    /// Message split into display lines
    pub fn lines(&self) -> Vec<&str> {
        self.message.lines().collect()
    }

    /// Inner width needed to show title, message, and the dismiss hint
    pub fn content_width(&self) -> usize {
        self.lines()
            .iter()
            .map(|l| l.len())
            .chain([self.title.len(), Self::DISMISS_HINT.len()])
            .max()
            .unwrap_or(0)
    }

    pub const DISMISS_HINT: &'static str = "Press any key";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_dimensions() {
        let dialog = Dialog::new("Invalid color", "'#zz' is not a color name or #RRGGBB value");
        assert_eq!(dialog.lines().len(), 1);
        assert_eq!(dialog.content_width(), dialog.message.len());

        let tall = Dialog::new("Oops", "line one\nline two");
        assert_eq!(tall.lines(), vec!["line one", "line two"]);
        assert_eq!(tall.content_width(), Dialog::DISMISS_HINT.len());
    }
}

//! Internal clipboard
//!
//! Holds the most recent cut or copied snippet with its styling. The
//! terminal has no portable system clipboard, so cut/copy/paste work
//! against this application-private slot.

use crate::core::document::StyledText;

/// Maximum clip size in bytes; larger cuts are silently not stored
const MAX_CLIP_SIZE: usize = 10 * 1024 * 1024;

/// Single-slot styled clipboard
#[derive(Debug, Default)]
pub struct Clipboard {
    content: Option<StyledText>,
}

impl Clipboard {
    /// Create an empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snippet, replacing the previous one. Empty or oversized
    /// snippets leave the clipboard unchanged.
    pub fn set(&mut self, text: StyledText) {
        if text.is_empty() {
            return;
        }
        if text.text.len() > MAX_CLIP_SIZE {
            eprintln!(
                "Warning: refusing to store {} byte clip (limit {})",
                text.text.len(),
                MAX_CLIP_SIZE
            );
            return;
        }
        self.content = Some(text);
    }

    /// The stored snippet, if any
    pub fn get(&self) -> Option<&StyledText> {
        self.content.as_ref()
    }

    /// True when nothing has been cut or copied yet
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::TextStyle;

    #[test]
    fn test_set_and_get() {
        let mut clip = Clipboard::new();
        assert!(clip.is_empty());

        clip.set(StyledText::plain("hello", TextStyle::default()));
        assert_eq!(clip.get().map(|t| t.text.as_str()), Some("hello"));
    }

    #[test]
    fn test_empty_set_keeps_previous() {
        let mut clip = Clipboard::new();
        clip.set(StyledText::plain("keep me", TextStyle::default()));
        clip.set(StyledText::default());
        assert_eq!(clip.get().map(|t| t.text.as_str()), Some("keep me"));
    }

    #[test]
    fn test_styles_survive_storage() {
        let mut clip = Clipboard::new();
        let styled = StyledText::plain(
            "bold",
            TextStyle {
                bold: true,
                ..TextStyle::default()
            },
        );
        clip.set(styled.clone());
        assert_eq!(clip.get(), Some(&styled));
    }
}

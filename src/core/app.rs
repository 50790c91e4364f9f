//! The root application object.
//!
//! All editor state hangs off [`App`]: the document and its undo history,
//! the view, selection and clipboard, and the chrome models for menus,
//! toolbar, prompts, and dialogs. Handlers receive `&mut App` and nothing
//! else, so every state transition is reachable from here.

use crate::core::clipboard::Clipboard;
use crate::core::dialog::Dialog;
use crate::core::document::{Document, StyledText};
use crate::core::history::{EditOp, History};
use crate::core::menu::MenuBar;
use crate::core::prompt::PromptState;
use crate::core::selection::Selection;
use crate::core::style::{StylePatch, StyleRun, TextStyle};
use crate::core::toolbar::Toolbar;
use crate::core::view::View;
use std::collections::HashMap;

/// The single instance of editor state. There is exactly one document and
/// one view of it; the `Option` fields are modal surfaces that exist only
/// while active.
pub struct App {
    /// The open document (text plus style runs)
    pub document: Document,
    /// Caret, scroll state, and viewport geometry
    pub view: View,
    /// Undo and redo stacks of invertible edit descriptors
    pub history: History,
    /// Active selection span (None when nothing is selected)
    pub selection: Option<Selection>,
    /// App-private styled clipboard
    pub clipboard: Clipboard,
    /// Pending style for the next typed character. Set when a formatting
    /// command runs with an empty selection; cleared by caret movement.
    pub typing_style: Option<TextStyle>,
    /// Menu bar model
    pub menu_bar: MenuBar,
    /// Formatting toolbar model
    pub toolbar: Toolbar,
    /// Active minibuffer prompt (owns input while present)
    pub prompt: Option<PromptState>,
    /// Active modal dialog (owns input while present, dismissed by any key)
    pub dialog: Option<Dialog>,
    /// Name-to-handler table populated by `commands::register_all`
    pub command_registry: HashMap<String, Box<dyn crate::core::command::Command>>,
    /// One-shot message shown in the status line on the next repaint
    pub message: Option<String>,
}

impl App {
    /// Creates a new `App` with an empty, unnamed document.
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            view: View::default(),
            history: History::new(),
            selection: None,
            clipboard: Clipboard::new(),
            typing_style: None,
            menu_bar: MenuBar::new(),
            toolbar: Toolbar::new(),
            prompt: None,
            dialog: None,
            command_registry: HashMap::new(),
            message: None,
        }
    }

    /// Initialize an App with config settings and an optional initial file.
    ///
    /// Applies the configured tab width, registers all commands, and loads
    /// the first file named on the command line. A file that cannot be read
    /// is reported on stderr and the editor starts empty.
    pub fn initialize_with_config(
        config: &crate::config::Config,
        files: &[std::path::PathBuf],
    ) -> Self {
        use crate::config::ConfigValue;

        let mut app = Self::new();

        if let Some(ConfigValue::Int(tab_width)) = config.settings.get("tab_width") {
            app.view.tab_width = *tab_width as usize;
        }

        crate::core::commands::register_all(&mut app);

        if let Some(file_path) = files.first() {
            match Document::from_file(file_path) {
                Ok(doc) => app.replace_document(doc),
                Err(e) => eprintln!("jot: {}: {}", file_path.display(), e),
            }
        }

        app
    }

    /// Swap in a freshly loaded document, dropping all per-document state
    pub fn replace_document(&mut self, doc: Document) {
        self.document = doc;
        self.history.clear();
        self.selection = None;
        self.typing_style = None;
        self.view.scroll_line = 0;
        self.view.scroll_col = 0;
        self.view.move_to(&self.document, 0);
    }

    /// Style the next typed character will carry. A pending typing style
    /// wins; otherwise typing inherits from the character before the caret.
    pub fn caret_style(&self) -> TextStyle {
        if let Some(style) = self.typing_style {
            return style;
        }
        if self.document.is_empty() {
            TextStyle::default()
        } else if self.view.caret > 0 {
            self.document.style_at(self.view.caret - 1)
        } else {
            self.document.style_at(0)
        }
    }

    /// Attribute state a formatting toggle reads before flipping. Over a
    /// selection each flag is on only when every selected char carries it,
    /// so toggling a mixed span first makes it uniform. With no selection,
    /// the caret style.
    pub fn reference_style(&self) -> TextStyle {
        match self.selection_range() {
            Some((start, end)) => {
                let styles = self.document.styles();
                TextStyle {
                    bold: styles.range_has(start, end, |s| s.bold),
                    italic: styles.range_has(start, end, |s| s.italic),
                    underline: styles.range_has(start, end, |s| s.underline),
                    ..self.document.style_at(start)
                }
            }
            None => self.caret_style(),
        }
    }

    /// Normalized non-empty selection span
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.selection.and_then(|sel| {
            if sel.is_empty() {
                None
            } else {
                Some((sel.start(), sel.end()))
            }
        })
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Grow the selection toward `pos`, anchoring at the caret if none exists
    pub fn select_to(&mut self, pos: usize) {
        match &mut self.selection {
            Some(sel) => sel.extend_to(pos),
            None => self.selection = Some(Selection::new(self.view.caret, pos)),
        }
    }

    /// Insert a typed character at the caret, replacing any selection.
    /// Consecutive typed characters merge into one undo group.
    pub fn insert_char(&mut self, c: char) {
        let style = self.caret_style();
        let text = StyledText::plain(c.to_string(), style);

        if let Some((start, end)) = self.selection_range() {
            let removed = self.document.styled_range(start, end);
            self.history.apply_group(
                &mut self.document,
                vec![
                    EditOp::Delete {
                        pos: start,
                        text: removed,
                    },
                    EditOp::Insert { pos: start, text },
                ],
            );
            self.selection = None;
            self.view.move_to(&self.document, start + 1);
        } else {
            let pos = self.view.caret;
            self.history
                .apply(&mut self.document, EditOp::Insert { pos, text }, true);
            self.view.move_to(&self.document, pos + 1);
        }
    }

    /// Insert a styled block at the caret (the paste path), replacing any
    /// selection. One undo group either way.
    pub fn insert_styled(&mut self, text: StyledText) {
        if text.is_empty() {
            return;
        }
        let added = text.char_len();

        if let Some((start, end)) = self.selection_range() {
            let removed = self.document.styled_range(start, end);
            self.history.apply_group(
                &mut self.document,
                vec![
                    EditOp::Delete {
                        pos: start,
                        text: removed,
                    },
                    EditOp::Insert { pos: start, text },
                ],
            );
            self.selection = None;
            self.view.move_to(&self.document, start + added);
        } else {
            let pos = self.view.caret;
            self.history
                .apply(&mut self.document, EditOp::Insert { pos, text }, false);
            self.view.move_to(&self.document, pos + added);
        }
    }

    /// Delete the selection as its own undo step. Returns false when there
    /// is no selection to delete.
    pub fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection_range() else {
            return false;
        };
        let removed = self.document.styled_range(start, end);
        self.history.apply(
            &mut self.document,
            EditOp::Delete {
                pos: start,
                text: removed,
            },
            false,
        );
        self.selection = None;
        self.view.move_to(&self.document, start);
        true
    }

    /// Apply a formatting patch: restyles the selection as an undoable
    /// edit, or folds into the pending typing style when nothing is
    /// selected.
    pub fn apply_patch(&mut self, patch: StylePatch) {
        match self.selection_range() {
            Some((start, end)) => {
                let before = self.document.styles().slice(start, end);
                let after: Vec<StyleRun> = before
                    .iter()
                    .map(|r| StyleRun::new(r.len, patch.applied(r.style)))
                    .collect();
                self.history.apply(
                    &mut self.document,
                    EditOp::Restyle {
                        start,
                        before,
                        after,
                    },
                    false,
                );
            }
            None => {
                self.typing_style = Some(patch.applied(self.caret_style()));
            }
        }
    }

    /// Drop the pending typing style (caret moved away)
    pub fn reset_typing_style(&mut self) {
        self.typing_style = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new() {
        let app = App::new();
        assert!(app.document.is_empty());
        assert_eq!(app.view.caret, 0);
        assert!(app.selection.is_none());
        assert!(!app.document.modified);
    }

    #[test]
    fn test_insert_replaces_selection_in_one_undo() {
        let mut app = App::new();
        app.insert_char('a');
        app.insert_char('b');
        app.selection = Some(Selection::new(0, 2));

        app.insert_char('z');
        assert_eq!(app.document.text(), "z");
        assert_eq!(app.view.caret, 1);
        assert!(app.selection.is_none());

        // One undo restores both sides of the replacement
        let caret = app.history.undo(&mut app.document);
        assert_eq!(app.document.text(), "ab");
        assert_eq!(caret, Some(2));
    }

    #[test]
    fn test_pending_typing_style() {
        let mut app = App::new();
        app.apply_patch(StylePatch::bold(true));
        assert!(app.typing_style.is_some());

        app.insert_char('x');
        assert!(app.document.style_at(0).bold);

        // The pending style persists across typed characters
        app.insert_char('y');
        assert!(app.document.style_at(1).bold);

        app.reset_typing_style();
        app.insert_char('z');
        // Inherits from the bold character before the caret
        assert!(app.document.style_at(2).bold);
    }

    #[test]
    fn test_restyle_selection_is_undoable() {
        let mut app = App::new();
        for c in "plain".chars() {
            app.insert_char(c);
        }
        app.selection = Some(Selection::new(0, 5));
        app.apply_patch(StylePatch::italic(true));
        assert!(app.document.style_at(2).italic);

        app.history.undo(&mut app.document);
        assert!(!app.document.style_at(2).italic);
    }

    #[test]
    fn test_replace_document_resets_state() {
        let mut app = App::new();
        app.insert_char('a');
        app.selection = Some(Selection::new(0, 1));

        app.replace_document(Document::new());
        assert!(app.document.is_empty());
        assert_eq!(app.view.caret, 0);
        assert!(app.selection.is_none());
        assert!(!app.history.can_undo());
    }

    #[test]
    fn test_caret_style_inherits() {
        let mut app = App::new();
        assert_eq!(app.caret_style(), TextStyle::default());

        app.apply_patch(StylePatch::bold(true));
        app.insert_char('a');
        app.reset_typing_style();
        assert!(app.caret_style().bold);
    }
}

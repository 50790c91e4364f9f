//! Command implementations for the jot notepad
//!
//! This module contains all editor commands organized into logical
//! sub-modules:
//!
//! - **movement**: Caret navigation and selection (caret-left, select-all, etc.)
//! - **edit**: Basic text editing and clipboard (delete-backward, cut, paste, etc.)
//! - **format**: Character formatting (toggle-bold, set-font-size, etc.)
//! - **file**: File operations (new-document, open-file, save-document)
//! - **undo**: Undo/redo operations
//! - **control**: Application control (quit, open-menu)
//!
//! All commands implement the [`Command`](crate::core::command::Command)
//! trait, which defines a uniform interface for command execution. The
//! registry built by [`register_all`] is the single mapping from command
//! names (used by key bindings, menu items, and toolbar buttons) to
//! handlers.

pub mod control;
pub mod edit;
pub mod file;
pub mod format;
pub mod movement;
pub mod undo;

/// Build the name-to-handler registry and install it on the app
pub fn register_all(app: &mut crate::core::app::App) {
    use crate::core::command::Command;
    use std::collections::HashMap;

    use self::control::*;
    use self::edit::*;
    use self::file::*;
    use self::format::*;
    use self::movement::*;
    use self::undo::*;

    let mut registry: HashMap<String, Box<dyn Command>> = HashMap::new();

    // Caret movement
    registry.insert("caret-left".to_string(), Box::new(CaretLeft));
    registry.insert("caret-right".to_string(), Box::new(CaretRight));
    registry.insert("caret-up".to_string(), Box::new(CaretUp));
    registry.insert("caret-down".to_string(), Box::new(CaretDown));
    registry.insert("line-start".to_string(), Box::new(LineStart));
    registry.insert("line-end".to_string(), Box::new(LineEnd));
    registry.insert("page-up".to_string(), Box::new(PageUp));
    registry.insert("page-down".to_string(), Box::new(PageDown));
    registry.insert("document-start".to_string(), Box::new(DocumentStart));
    registry.insert("document-end".to_string(), Box::new(DocumentEnd));

    // Selection
    registry.insert("select-left".to_string(), Box::new(SelectLeft));
    registry.insert("select-right".to_string(), Box::new(SelectRight));
    registry.insert("select-up".to_string(), Box::new(SelectUp));
    registry.insert("select-down".to_string(), Box::new(SelectDown));
    registry.insert("select-all".to_string(), Box::new(SelectAll));

    // Text entry and deletion
    registry.insert("insert-newline".to_string(), Box::new(InsertNewline));
    registry.insert("insert-tab".to_string(), Box::new(InsertTab));
    registry.insert("delete-backward".to_string(), Box::new(DeleteBackward));
    registry.insert("delete-forward".to_string(), Box::new(DeleteForward));

    // Clipboard
    registry.insert("cut".to_string(), Box::new(Cut));
    registry.insert("copy".to_string(), Box::new(Copy));
    registry.insert("paste".to_string(), Box::new(Paste));

    // Styling
    registry.insert("toggle-bold".to_string(), Box::new(ToggleBold));
    registry.insert("toggle-italic".to_string(), Box::new(ToggleItalic));
    registry.insert("toggle-underline".to_string(), Box::new(ToggleUnderline));
    registry.insert("set-font-size".to_string(), Box::new(SetFontSize));
    registry.insert("set-font-color".to_string(), Box::new(SetFontColor));

    // Files
    registry.insert("new-document".to_string(), Box::new(NewDocument));
    registry.insert("open-file".to_string(), Box::new(OpenFile));
    registry.insert("save-document".to_string(), Box::new(SaveDocument));

    // History
    registry.insert("undo".to_string(), Box::new(Undo));
    registry.insert("redo".to_string(), Box::new(Redo));

    // Session
    registry.insert("quit".to_string(), Box::new(Quit));
    registry.insert("open-menu".to_string(), Box::new(OpenMenu));

    app.command_registry = registry;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::App;
    use crate::core::dispatcher::{DispatchResult, dispatch};
    use crate::core::selection::Selection;
    use crate::core::style::StylePatch;

    fn app_with_text(text: &str) -> App {
        let mut app = App::new();
        register_all(&mut app);
        for c in text.chars() {
            app.insert_char(c);
        }
        app
    }

    #[test]
    fn test_registry_covers_menu_and_toolbar() {
        let app = app_with_text("");
        for menu in &app.menu_bar.menus {
            for cmd in menu
                .items
                .iter()
                .filter_map(|i| match i {
                    crate::core::menu::MenuItem::Action { command, .. } => Some(*command),
                    _ => None,
                })
            {
                assert!(app.command_registry.contains_key(cmd), "unregistered {}", cmd);
            }
        }
        for button in &app.toolbar.buttons {
            assert!(
                app.command_registry.contains_key(button.command),
                "unregistered {}",
                button.command
            );
        }
    }

    #[test]
    fn test_cut_paste_preserves_styling() {
        let mut app = app_with_text("red and blue");
        app.selection = Some(Selection::new(0, 3));
        app.apply_patch(StylePatch::bold(true));

        app.selection = Some(Selection::new(0, 3));
        dispatch(&mut app, Some("cut"), None);
        assert_eq!(app.document.text(), " and blue");
        assert!(!app.document.style_at(0).bold);

        app.view.move_to(&app.document, 9);
        dispatch(&mut app, Some("paste"), None);
        assert_eq!(app.document.text(), " and bluered");
        assert!(app.document.style_at(9).bold);
        assert!(app.document.style_at(11).bold);
    }

    #[test]
    fn test_copy_leaves_document_alone() {
        let mut app = app_with_text("hello");
        app.selection = Some(Selection::new(0, 5));
        dispatch(&mut app, Some("copy"), None);
        assert_eq!(app.document.text(), "hello");
        assert!(!app.clipboard.is_empty());
    }

    #[test]
    fn test_toggle_bold_reads_state_first() {
        let mut app = app_with_text("word");
        app.selection = Some(Selection::new(0, 4));
        dispatch(&mut app, Some("toggle-bold"), None);
        assert!(app.document.style_at(0).bold);

        // A second toggle over the same span turns it back off
        app.selection = Some(Selection::new(0, 4));
        dispatch(&mut app, Some("toggle-bold"), None);
        assert!(!app.document.style_at(0).bold);
    }

    #[test]
    fn test_toggle_over_mixed_span_sets_first() {
        let mut app = app_with_text("word");
        app.selection = Some(Selection::new(0, 2));
        dispatch(&mut app, Some("toggle-bold"), None);

        // Half bold, half plain: the toggle makes the whole span bold
        app.selection = Some(Selection::new(0, 4));
        dispatch(&mut app, Some("toggle-bold"), None);
        assert!(app.document.style_at(0).bold);
        assert!(app.document.style_at(3).bold);

        app.selection = Some(Selection::new(0, 4));
        dispatch(&mut app, Some("toggle-bold"), None);
        assert!(!app.document.style_at(0).bold);
        assert!(!app.document.style_at(3).bold);
    }

    #[test]
    fn test_new_document_is_undoable() {
        let mut app = app_with_text("precious text");
        app.document.filename = Some(std::path::PathBuf::from("keep.txt"));

        dispatch(&mut app, Some("new-document"), None);
        assert_eq!(app.document.text(), "");
        assert!(app.document.filename.is_none());
        assert!(!app.document.modified);

        dispatch(&mut app, Some("undo"), None);
        assert_eq!(app.document.text(), "precious text");
    }

    #[test]
    fn test_save_prefills_filename() {
        let mut app = app_with_text("x");
        app.document.filename = Some(std::path::PathBuf::from("notes.jot"));
        let result = dispatch(&mut app, Some("save-document"), None);
        match result {
            DispatchResult::NeedsInput { prefill, .. } => assert_eq!(prefill, "notes.jot"),
            other => panic!("expected NeedsInput, got {:?}", other),
        }
    }

    #[test]
    fn test_quit_with_unsaved_changes_confirms() {
        let mut app = app_with_text("dirty");
        let result = dispatch(&mut app, Some("quit"), None);
        assert!(matches!(result, DispatchResult::NeedsInput { .. }));
    }

    #[test]
    fn test_delete_backward_merges_for_undo() {
        let mut app = app_with_text("abc");
        dispatch(&mut app, Some("delete-backward"), None);
        dispatch(&mut app, Some("delete-backward"), None);
        assert_eq!(app.document.text(), "a");
        assert_eq!(app.view.caret, 1);

        dispatch(&mut app, Some("undo"), None);
        assert_eq!(app.document.text(), "abc");
    }

    #[test]
    fn test_select_all_then_type_replaces() {
        let mut app = app_with_text("old text");
        dispatch(&mut app, Some("select-all"), None);
        dispatch(&mut app, None, Some('n'));
        assert_eq!(app.document.text(), "n");
    }

    #[test]
    fn test_shift_movement_grows_selection() {
        let mut app = app_with_text("abcd");
        app.view.move_to(&app.document, 0);
        dispatch(&mut app, Some("select-right"), None);
        dispatch(&mut app, Some("select-right"), None);
        assert_eq!(app.selection_range(), Some((0, 2)));

        // Plain movement collapses it
        dispatch(&mut app, Some("caret-right"), None);
        assert!(app.selection.is_none());
    }
}

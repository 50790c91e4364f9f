// jot Configuration
// Edit this file to customize the notepad, then rebuild.

use crate::config::Config;

/// Compiled-in bindings and settings. Edit and rebuild to customize.
pub fn configure(config: &mut Config) {
    // =========================================================================
    // KEYBINDINGS
    // =========================================================================
    // File operations
    config.bind("^N", "new-document");
    config.bind("^O", "open-file");
    config.bind("^S", "save-document");
    config.bind("^Q", "quit");

    // Undo and clipboard
    config.bind("^Z", "undo");
    config.bind("^Y", "redo");
    config.bind("^X", "cut");
    config.bind("^C", "copy");
    config.bind("^V", "paste");
    config.bind("^A", "select-all");

    // Formatting. ^I is indistinguishable from Tab in a terminal, so
    // italic rides on M-i instead.
    config.bind("^B", "toggle-bold");
    config.bind("M-i", "toggle-italic");
    config.bind("^U", "toggle-underline");

    // Caret movement
    config.bind("Left", "caret-left");
    config.bind("Right", "caret-right");
    config.bind("Up", "caret-up");
    config.bind("Down", "caret-down");
    config.bind("Home", "line-start");
    config.bind("End", "line-end");
    config.bind("PageUp", "page-up");
    config.bind("PageDown", "page-down");
    config.bind("C-Home", "document-start");
    config.bind("C-End", "document-end");

    // Selection with shifted movement
    config.bind("S-Left", "select-left");
    config.bind("S-Right", "select-right");
    config.bind("S-Up", "select-up");
    config.bind("S-Down", "select-down");

    // Editing
    config.bind("Enter", "insert-newline");
    config.bind("Tab", "insert-tab");
    config.bind("Backspace", "delete-backward");
    config.bind("Delete", "delete-forward");

    // Menu
    config.bind("F10", "open-menu");

    // =========================================================================
    // EDITOR SETTINGS
    // =========================================================================
    config.set("tab_width", 4); // Number of columns per tab stop
    config.set("theme", "dark"); // Color theme: "dark" or "light"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_user_configuration_defaults() {
        let mut config = Config::new();
        configure(&mut config);

        // File and clipboard chords
        assert_eq!(
            config.keybindings.get("^N"),
            Some(&"new-document".to_string())
        );
        assert_eq!(config.keybindings.get("^O"), Some(&"open-file".to_string()));
        assert_eq!(
            config.keybindings.get("^S"),
            Some(&"save-document".to_string())
        );
        assert_eq!(config.keybindings.get("^Q"), Some(&"quit".to_string()));
        assert_eq!(config.keybindings.get("^Z"), Some(&"undo".to_string()));
        assert_eq!(config.keybindings.get("^Y"), Some(&"redo".to_string()));
        assert_eq!(config.keybindings.get("^X"), Some(&"cut".to_string()));
        assert_eq!(config.keybindings.get("^C"), Some(&"copy".to_string()));
        assert_eq!(config.keybindings.get("^V"), Some(&"paste".to_string()));

        // Formatting chords
        assert_eq!(
            config.keybindings.get("^B"),
            Some(&"toggle-bold".to_string())
        );
        assert_eq!(
            config.keybindings.get("M-i"),
            Some(&"toggle-italic".to_string())
        );
        assert_eq!(
            config.keybindings.get("^U"),
            Some(&"toggle-underline".to_string())
        );

        // Movement and selection
        assert_eq!(config.keybindings.get("Left"), Some(&"caret-left".to_string()));
        assert_eq!(
            config.keybindings.get("S-Left"),
            Some(&"select-left".to_string())
        );
        assert_eq!(
            config.keybindings.get("PageDown"),
            Some(&"page-down".to_string())
        );

        // Settings
        assert_eq!(config.get_int("tab_width"), Some(4));
        assert_eq!(config.get_string("theme"), Some("dark"));
    }
}

//! Menu system
//!
//! Menu data model: the bar, its dropdowns, and keyboard/selection state.
//! Each item names a registry command, so the menu is a pure mapping table;
//! rendering is handled by terminal/renderers/menu_renderer.rs.

/// Rows the bar occupies at the top of the screen
pub const MENU_BAR_HEIGHT_CELLS: usize = 1;

/// One row of a dropdown
#[derive(Clone, Debug)]
pub enum MenuItem {
    /// Runs a registry command; the hotkey string is display-only
    Action {
        label: &'static str,
        command: &'static str,
        hotkey: Option<&'static str>,
    },
    /// Horizontal rule between item groups
    Separator,
}

impl MenuItem {
    pub const fn action(
        label: &'static str,
        command: &'static str,
        hotkey: Option<&'static str>,
    ) -> Self {
        MenuItem::Action {
            label,
            command,
            hotkey,
        }
    }

    pub const fn separator() -> Self {
        MenuItem::Separator
    }
}

/// One titled dropdown
#[derive(Clone, Debug)]
pub struct Menu {
    /// Title shown on the bar
    pub title: &'static str,
    /// Rows of the dropdown, top to bottom
    pub items: Vec<MenuItem>,
    /// Highlighted row while this dropdown is open
    pub selected: Option<usize>,
}

impl Menu {
    pub fn new(title: &'static str, items: Vec<MenuItem>) -> Self {
        Self {
            title,
            items,
            selected: None,
        }
    }

    /// Move selection down, skipping separators
    pub fn select_next(&mut self) {
        self.step_selection(true);
    }

    /// Move selection up, skipping separators
    pub fn select_prev(&mut self) {
        self.step_selection(false);
    }

    /// Bounded wrap-around walk to the nearest action item. A menu of
    /// only separators leaves the highlight where it was.
    fn step_selection(&mut self, forward: bool) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let mut idx = self.selected.unwrap_or(0);
        for _ in 0..len {
            idx = if forward {
                (idx + 1) % len
            } else {
                (idx + len - 1) % len
            };
            if !matches!(self.items[idx], MenuItem::Separator) {
                self.selected = Some(idx);
                return;
            }
        }
    }

    /// The command of the highlighted item, if it is an action
    pub fn selected_command(&self) -> Option<&'static str> {
        match self.selected.and_then(|idx| self.items.get(idx)) {
            Some(MenuItem::Action { command, .. }) => Some(*command),
            _ => None,
        }
    }

    /// Rows as (label, hotkey, is_separator) tuples for the renderer
    pub fn render_items(&self) -> Vec<(&'static str, Option<&'static str>, bool)> {
        self.items
            .iter()
            .map(|item| match item {
                MenuItem::Action { label, hotkey, .. } => (*label, *hotkey, false),
                MenuItem::Separator => ("", None, true),
            })
            .collect()
    }

    /// Width of this dropdown in cells: widest row plus borders and padding
    pub fn render_width(&self) -> usize {
        let widest = self
            .items
            .iter()
            .map(|item| match item {
                MenuItem::Action { label, hotkey, .. } => {
                    // Two spaces between label and its hotkey hint
                    label.len() + hotkey.map_or(0, |h| h.len() + 2)
                }
                MenuItem::Separator => 3,
            })
            .max()
            .unwrap_or(10);
        widest + 4
    }
}

/// The bar across the top plus which dropdown is open
#[derive(Clone, Debug)]
pub struct MenuBar {
    /// Top-level menus, left to right
    pub menus: Vec<Menu>,
    /// Index of the open dropdown, None when the bar is idle
    pub active_menu: Option<usize>,
}

impl MenuBar {
    /// Create the notepad menu bar
    pub fn new() -> Self {
        Self {
            menus: vec![Self::file_menu(), Self::edit_menu()],
            active_menu: None,
        }
    }

    fn file_menu() -> Menu {
        Menu::new(
            "File",
            vec![
                MenuItem::action("New", "new-document", Some("^N")),
                MenuItem::action("Open", "open-file", Some("^O")),
                MenuItem::action("Save", "save-document", Some("^S")),
                MenuItem::separator(),
                MenuItem::action("Quit", "quit", Some("^Q")),
            ],
        )
    }

    fn edit_menu() -> Menu {
        Menu::new(
            "Edit",
            vec![
                MenuItem::action("Undo", "undo", Some("^Z")),
                MenuItem::action("Redo", "redo", Some("^Y")),
                MenuItem::separator(),
                MenuItem::action("Cut", "cut", Some("^X")),
                MenuItem::action("Copy", "copy", Some("^C")),
                MenuItem::action("Paste", "paste", Some("^V")),
            ],
        )
    }

    /// Open a menu by index; the first action item starts highlighted
    pub fn open_menu(&mut self, index: usize) {
        if index >= self.menus.len() {
            return;
        }
        if let Some(old) = self.active_menu {
            self.menus[old].selected = None;
        }
        self.active_menu = Some(index);
        self.menus[index].selected = Some(0);
    }

    /// Close whatever is open and drop its highlight
    pub fn close(&mut self) {
        if let Some(idx) = self.active_menu {
            self.menus[idx].selected = None;
        }
        self.active_menu = None;
    }

    /// Move to the next menu (right arrow)
    pub fn next_menu(&mut self) {
        self.rotate(1);
    }

    /// Move to the previous menu (left arrow)
    pub fn prev_menu(&mut self) {
        self.rotate(-1);
    }

    fn rotate(&mut self, dir: isize) {
        if let Some(idx) = self.active_menu {
            let len = self.menus.len() as isize;
            let next = (idx as isize + dir).rem_euclid(len) as usize;
            self.open_menu(next);
        }
    }

    /// Mutable access to the open dropdown
    pub fn active(&mut self) -> Option<&mut Menu> {
        self.active_menu.map(|idx| &mut self.menus[idx])
    }

    /// Take the selected command and close the bar
    pub fn execute_selected(&mut self) -> Option<&'static str> {
        let cmd = self
            .active_menu
            .and_then(|idx| self.menus[idx].selected_command());
        self.close();
        cmd
    }

    /// True while a dropdown is showing
    pub fn is_open(&self) -> bool {
        self.active_menu.is_some()
    }

    /// Menu bar layout (title, x_start, x_end) for rendering and clicks.
    /// Titles render with one cell of padding each side and one cell
    /// between entries.
    pub fn layout(&self) -> Vec<(&'static str, usize, usize)> {
        let mut x = 1;
        self.menus
            .iter()
            .map(|menu| {
                let start = x;
                let end = start + menu.title.len() + 2;
                x = end + 1;
                (menu.title, start, end)
            })
            .collect()
    }
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_navigation() {
        let mut bar = MenuBar::new();
        assert!(!bar.is_open());

        bar.open_menu(0);
        assert!(bar.is_open());
        assert_eq!(bar.active_menu, Some(0));

        bar.next_menu();
        assert_eq!(bar.active_menu, Some(1)); // Edit

        bar.prev_menu();
        assert_eq!(bar.active_menu, Some(0)); // File

        // Wraps around both ends
        bar.prev_menu();
        assert_eq!(bar.active_menu, Some(1));
        bar.next_menu();
        assert_eq!(bar.active_menu, Some(0));

        bar.close();
        assert!(!bar.is_open());
    }

    #[test]
    fn test_selection_skips_separators() {
        let mut bar = MenuBar::new();
        bar.open_menu(0);

        let menu = bar.active().unwrap();
        assert_eq!(menu.selected, Some(0));
        menu.select_next();
        menu.select_next();
        assert_eq!(menu.selected, Some(2)); // Save
        menu.select_next();
        assert_eq!(menu.selected, Some(4)); // Quit, separator skipped

        // Backwards over the same separator
        menu.select_prev();
        assert_eq!(menu.selected, Some(2));
    }

    #[test]
    fn test_execute_selected_closes_bar() {
        let mut bar = MenuBar::new();
        bar.open_menu(0);

        let cmd = bar.execute_selected();
        assert_eq!(cmd, Some("new-document"));
        assert!(!bar.is_open());
    }

    #[test]
    fn test_menu_commands_exist() {
        let bar = MenuBar::new();
        let commands: Vec<&str> = bar
            .menus
            .iter()
            .flat_map(|m| m.items.iter())
            .filter_map(|i| match i {
                MenuItem::Action { command, .. } => Some(*command),
                MenuItem::Separator => None,
            })
            .collect();

        for expected in [
            "new-document",
            "open-file",
            "save-document",
            "undo",
            "redo",
            "cut",
            "copy",
            "paste",
        ] {
            assert!(commands.contains(&expected), "missing {}", expected);
        }
    }
}

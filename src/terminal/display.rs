//! Screen buffer management and frame composition
//!
//! The display owns a pair of cell buffers. Each frame is composed into the
//! back buffer from the application state, diffed against the front buffer
//! by the renderer, then the buffers are swapped. The display itself holds
//! no editor state; it only paints what the [`App`](crate::core::app::App) says.

use std::error::Error;

use crate::config::Config;
use crate::core::app::App;
use crate::core::menu::MENU_BAR_HEIGHT_CELLS;
use crate::core::toolbar::TOOLBAR_HEIGHT_CELLS;
use crate::terminal::capabilities::DisplayMode;
use crate::terminal::color::Color;
use crate::terminal::renderers::{
    DialogRenderer, MenuRenderer, StatusRenderer, TextRenderer, ToolbarRenderer,
};
use crate::terminal::theme::Theme;

/// First screen row of the text area (menu bar and toolbar sit above it)
pub const TEXT_TOP_ROW: usize = MENU_BAR_HEIGHT_CELLS + TOOLBAR_HEIGHT_CELLS;

/// Rows available to the text area for a terminal of the given height.
/// One row at the bottom is reserved for the status line.
pub fn text_area_rows(height: u16) -> usize {
    (height as usize).saturating_sub(TEXT_TOP_ROW + 1)
}

/// One screen cell: a character plus its colors and attributes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Continuation cell of a preceding wide character; never painted
    pub hidden: bool,
}

impl Cell {
    pub fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self {
            ch,
            fg,
            bg,
            bold: false,
            italic: false,
            underline: false,
            hidden: false,
        }
    }

    pub fn styled(ch: char, fg: Color, bg: Color, bold: bool, italic: bool, underline: bool) -> Self {
        Self {
            ch,
            fg,
            bg,
            bold,
            italic,
            underline,
            hidden: false,
        }
    }

    pub fn hidden() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
            italic: false,
            underline: false,
            hidden: true,
        }
    }

    pub fn empty() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
            bold: false,
            italic: false,
            underline: false,
            hidden: false,
        }
    }
}

/// A full screen worth of cells in row-major order
#[derive(Clone, Debug)]
pub struct ScreenBuffer {
    pub cells: Vec<Cell>,

    pub width: u16,

    pub height: u16,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::empty(); size],
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let size = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(size, Cell::empty());
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::empty();
        }
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    pub fn set_cell(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    pub fn get_cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    pub fn get_cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(move |idx| &mut self.cells[idx])
    }
}

/// Owns the screen buffers and composes each frame from application state
pub struct Display {
    pub terminal_size: (u16, u16),
    /// Set when the back buffer differs from what is on screen
    pub dirty: bool,
    /// Forces a full clear-and-repaint on the next flush (set after resize)
    pub needs_full_redraw: bool,
    pub front_buffer: ScreenBuffer,
    pub back_buffer: ScreenBuffer,
    pub theme: Theme,
    /// Hardware cursor position for the next frame, or None to hide it
    pub cursor_pos: Option<(u16, u16)>,
    pub display_mode: DisplayMode,
}

impl Display {
    pub fn new(width: u16, height: u16, theme: Theme, display_mode: DisplayMode) -> Self {
        Self {
            terminal_size: (width, height),
            dirty: true,
            needs_full_redraw: true,
            front_buffer: ScreenBuffer::new(width, height),
            back_buffer: ScreenBuffer::new(width, height),
            theme,
            cursor_pos: None,
            display_mode,
        }
    }

    /// Build a display sized to the current terminal, themed per config
    pub fn new_terminal(config: &Config) -> Result<Self, Box<dyn Error>> {
        let (width, height) = crossterm::terminal::size()?;
        let theme = config
            .get_string("theme")
            .and_then(Theme::by_name)
            .unwrap_or_default();
        let display_mode = if config.get_bool("ascii").unwrap_or(false) {
            DisplayMode::Ascii
        } else {
            DisplayMode::detect()
        };
        Ok(Self::new(width, height, theme, display_mode))
    }

    pub fn width(&self) -> u16 {
        self.terminal_size.0
    }

    pub fn height(&self) -> u16 {
        self.terminal_size.1
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        if width == 0 || height == 0 {
            return;
        }
        self.terminal_size = (width, height);
        self.front_buffer.resize(width, height);
        self.back_buffer.resize(width, height);
        self.needs_full_redraw = true;
        self.dirty = true;
    }

    /// Compose a full frame into the back buffer.
    ///
    /// Paint order matters: the dropdown menu overlays the toolbar and text,
    /// and a dialog overlays everything.
    pub fn render(&mut self, app: &App) {
        self.back_buffer.clear();

        TextRenderer::render(self, app);
        ToolbarRenderer::render(self, app);
        MenuRenderer::render_bar(self, app);
        StatusRenderer::render(self, app);
        if app.menu_bar.is_open() {
            MenuRenderer::render_dropdown(self, app);
        }
        if let Some(dialog) = &app.dialog {
            DialogRenderer::render(self, dialog);
        }

        self.cursor_pos = self.compute_cursor(app);
        self.dirty = true;
    }

    /// Where the hardware cursor goes for this frame, if anywhere.
    ///
    /// The cursor marks the caret in the text area, or the insertion point
    /// while a prompt is active. Menus and dialogs hide it.
    fn compute_cursor(&self, app: &App) -> Option<(u16, u16)> {
        if app.dialog.is_some() || app.menu_bar.is_open() {
            return None;
        }
        let (width, height) = self.terminal_size;
        if let Some(state) = &app.prompt {
            let x = state.prompt.chars().count() + state.input[..state.cursor].chars().count();
            let x = (x as u16).min(width.saturating_sub(1));
            return Some((x, height.saturating_sub(1)));
        }
        let (col, row) = app.view.caret_screen_pos(&app.document)?;
        if row >= text_area_rows(height) {
            return None;
        }
        let x = (col as u16).min(width.saturating_sub(1));
        Some((x, (row + TEXT_TOP_ROW) as u16))
    }

    /// Promote the back buffer to front after it has been flushed
    pub fn swap_buffers(&mut self) {
        std::mem::swap(&mut self.front_buffer, &mut self.back_buffer);
        self.back_buffer.clear();
        self.dirty = false;
        self.needs_full_redraw = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_display() -> Display {
        Display::new(80, 24, Theme::dark(), DisplayMode::TrueColor)
    }

    #[test]
    fn test_buffer_indexing() {
        let mut buffer = ScreenBuffer::new(10, 5);
        buffer.set_cell(3, 2, Cell::new('x', Color::Red, Color::Reset));
        assert_eq!(buffer.get_cell(3, 2).unwrap().ch, 'x');
        assert_eq!(buffer.get_cell(9, 4).unwrap().ch, ' ');
        // Out of bounds is a no-op, not a panic
        buffer.set_cell(10, 0, Cell::new('y', Color::Reset, Color::Reset));
        assert!(buffer.get_cell(10, 0).is_none());
        assert!(buffer.get_cell(0, 5).is_none());
    }

    #[test]
    fn test_buffer_resize_clears() {
        let mut buffer = ScreenBuffer::new(4, 4);
        buffer.set_cell(0, 0, Cell::new('x', Color::Reset, Color::Reset));
        buffer.resize(8, 8);
        assert_eq!(buffer.cells.len(), 64);
        assert_eq!(buffer.get_cell(0, 0).unwrap().ch, ' ');
    }

    #[test]
    fn test_swap_buffers_resets_flags() {
        let mut display = test_display();
        display
            .back_buffer
            .set_cell(0, 0, Cell::new('a', Color::Reset, Color::Reset));
        display.dirty = true;
        display.needs_full_redraw = true;
        display.swap_buffers();
        assert_eq!(display.front_buffer.get_cell(0, 0).unwrap().ch, 'a');
        assert_eq!(display.back_buffer.get_cell(0, 0).unwrap().ch, ' ');
        assert!(!display.dirty);
        assert!(!display.needs_full_redraw);
    }

    #[test]
    fn test_update_size_ignores_zero() {
        let mut display = test_display();
        display.update_size(0, 24);
        assert_eq!(display.terminal_size, (80, 24));
        display.update_size(100, 30);
        assert_eq!(display.terminal_size, (100, 30));
        assert_eq!(display.front_buffer.width, 100);
        assert!(display.needs_full_redraw);
    }

    #[test]
    fn test_layout_rows() {
        assert_eq!(TEXT_TOP_ROW, 2);
        // 24 rows: menu, toolbar, 21 text rows, status
        assert_eq!(text_area_rows(24), 21);
        assert_eq!(text_area_rows(3), 0);
    }
}

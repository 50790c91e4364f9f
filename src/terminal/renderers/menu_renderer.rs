//! Menu bar and dropdown rendering

use crate::core::app::App;
use crate::core::menu::MENU_BAR_HEIGHT_CELLS;
use crate::terminal::color::Color;
use crate::terminal::display::{Cell, Display};

/// Renders the menu bar and the open dropdown
pub struct MenuRenderer;

impl MenuRenderer {
    /// Render the bar of menu titles across row 0
    pub fn render_bar(display: &mut Display, app: &App) {
        let width = display.terminal_size.0;
        let bar_fg: Color = display.theme.chrome_fg().into();
        let bar_bg: Color = display.theme.chrome_bg().into();
        let active_fg: Color = display.theme.active_fg().into();
        let active_bg: Color = display.theme.active_bg().into();

        let buffer = &mut display.back_buffer;
        for x in 0..width {
            buffer.set_cell(x, 0, Cell::new(' ', bar_fg, bar_bg));
        }

        for (i, (title, start, end)) in app.menu_bar.layout().iter().enumerate() {
            let is_active = app.menu_bar.active_menu == Some(i);
            let fg = if is_active { active_fg } else { bar_fg };
            let bg = if is_active { active_bg } else { bar_bg };

            // One cell of padding on either side of the title
            for x in *start..*end {
                if (x as u16) < width {
                    buffer.set_cell(x as u16, 0, Cell::new(' ', fg, bg));
                }
            }
            for (j, ch) in title.chars().enumerate() {
                let x = start + 1 + j;
                if (x as u16) < width {
                    buffer.set_cell(x as u16, 0, Cell::new(ch, fg, bg));
                }
            }
        }
    }

    /// Render the open menu's dropdown below the bar. Items carry their
    /// hotkey right-aligned; separators span the dropdown width.
    pub fn render_dropdown(display: &mut Display, app: &App) {
        let Some(active_idx) = app.menu_bar.active_menu else {
            return;
        };
        let (width, height) = display.terminal_size;
        let item_fg: Color = display.theme.chrome_fg().into();
        let item_bg: Color = display.theme.chrome_bg().into();
        let active_fg: Color = display.theme.active_fg().into();
        let active_bg: Color = display.theme.active_bg().into();
        let hotkey_fg: Color = display.theme.muted().into();

        let layout = app.menu_bar.layout();
        let Some((_, start_x, _)) = layout.get(active_idx) else {
            return;
        };
        let start_x = *start_x;
        let menu = &app.menu_bar.menus[active_idx];
        let menu_width = menu.render_width();

        let buffer = &mut display.back_buffer;
        for (item_idx, (label, hotkey, is_sep)) in menu.render_items().iter().enumerate() {
            let y = (MENU_BAR_HEIGHT_CELLS + item_idx) as u16;
            if y >= height {
                break;
            }

            let is_selected = menu.selected == Some(item_idx);
            let fg = if is_selected { active_fg } else { item_fg };
            let bg = if is_selected { active_bg } else { item_bg };

            for x in start_x..(start_x + menu_width).min(width as usize) {
                buffer.set_cell(x as u16, y, Cell::new(' ', fg, bg));
            }

            if *is_sep {
                for x in start_x..(start_x + menu_width).min(width as usize) {
                    buffer.set_cell(x as u16, y, Cell::new('─', fg, bg));
                }
                continue;
            }

            for (j, ch) in label.chars().enumerate() {
                let x = start_x + 1 + j;
                if x < (width as usize) && x < start_x + menu_width {
                    buffer.set_cell(x as u16, y, Cell::new(ch, fg, bg));
                }
            }

            if let Some(hk) = hotkey {
                let hk_fg = if is_selected { active_fg } else { hotkey_fg };
                let hk_start = (start_x + menu_width).saturating_sub(hk.len() + 1);
                for (j, ch) in hk.chars().enumerate() {
                    let x = hk_start + j;
                    if x < (width as usize) && x >= start_x {
                        buffer.set_cell(x as u16, y, Cell::new(ch, hk_fg, bg));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::capabilities::DisplayMode;
    use crate::terminal::theme::Theme;

    fn fixture() -> (App, Display) {
        let app = App::new();
        let display = Display::new(60, 20, Theme::dark(), DisplayMode::TrueColor);
        (app, display)
    }

    fn row_text(display: &Display, y: u16) -> String {
        (0..display.terminal_size.0)
            .filter_map(|x| display.back_buffer.get_cell(x, y))
            .map(|c| c.ch)
            .collect()
    }

    #[test]
    fn test_bar_shows_titles() {
        let (app, mut display) = fixture();
        MenuRenderer::render_bar(&mut display, &app);
        let row = row_text(&display, 0);
        assert!(row.contains("File"));
        assert!(row.contains("Edit"));
    }

    #[test]
    fn test_dropdown_shows_items_and_hotkeys() {
        let (mut app, mut display) = fixture();
        app.menu_bar.open_menu(0);
        MenuRenderer::render_dropdown(&mut display, &app);
        let first = row_text(&display, 1);
        assert!(first.contains("New"));
        assert!(first.contains("^N"));
        // Separator row sits between Save and Quit
        let sep = row_text(&display, 4);
        assert!(sep.contains('─'));
    }

    #[test]
    fn test_active_title_highlighted() {
        let (mut app, mut display) = fixture();
        app.menu_bar.open_menu(1);
        MenuRenderer::render_bar(&mut display, &app);
        let active_bg: Color = display.theme.active_bg().into();
        // "Edit" starts after "File" plus padding; probe its first cell
        let layout = app.menu_bar.layout();
        let (_, start, _) = layout[1];
        let cell = display.back_buffer.get_cell(start as u16, 0).unwrap();
        assert_eq!(cell.bg, active_bg);
    }
}

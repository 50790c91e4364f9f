//! Formatting toolbar rendering
//!
//! One row of bracketed buttons under the menu bar. The three attribute
//! buttons light up when their attribute is active at the caret (uniform
//! over the selection), so the toolbar doubles as a format indicator.

use crate::core::app::App;
use crate::core::menu::MENU_BAR_HEIGHT_CELLS;
use crate::terminal::color::Color;
use crate::terminal::display::{Cell, Display};

/// Renders the toolbar row
pub struct ToolbarRenderer;

impl ToolbarRenderer {
    pub fn render(display: &mut Display, app: &App) {
        let width = display.terminal_size.0;
        let y = MENU_BAR_HEIGHT_CELLS as u16;
        let bar_fg: Color = display.theme.chrome_fg().into();
        let bar_bg: Color = display.theme.chrome_bg().into();
        let active_fg: Color = display.theme.active_fg().into();
        let active_bg: Color = display.theme.active_bg().into();

        let style = app.reference_style();

        let buffer = &mut display.back_buffer;
        for x in 0..width {
            buffer.set_cell(x, y, Cell::new(' ', bar_fg, bar_bg));
        }

        for (button, (label, start, end)) in
            app.toolbar.buttons.iter().zip(app.toolbar.layout())
        {
            let is_active = match button.command {
                "toggle-bold" => style.bold,
                "toggle-italic" => style.italic,
                "toggle-underline" => style.underline,
                _ => false,
            };
            let fg = if is_active { active_fg } else { bar_fg };
            let bg = if is_active { active_bg } else { bar_bg };

            if (start as u16) < width {
                buffer.set_cell(start as u16, y, Cell::new('[', fg, bg));
            }
            for (j, ch) in label.chars().enumerate() {
                let x = start + 1 + j;
                if (x as u16) < width {
                    // The label previews the attribute it toggles
                    let cell = Cell::styled(
                        ch,
                        fg,
                        bg,
                        button.command == "toggle-bold",
                        button.command == "toggle-italic",
                        button.command == "toggle-underline",
                    );
                    buffer.set_cell(x as u16, y, cell);
                }
            }
            let close = end - 1;
            if (close as u16) < width {
                buffer.set_cell(close as u16, y, Cell::new(']', fg, bg));
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

    fn row_text(display: &Display) -> String {
        (0..display.terminal_size.0)
            .filter_map(|x| display.back_buffer.get_cell(x, 1))
            .map(|c| c.ch)
            .collect()
    }

    #[test]
    fn test_all_buttons_drawn() {
        let (app, mut display) = fixture();
        ToolbarRenderer::render(&mut display, &app);
        let row = row_text(&display);
        assert!(row.contains("[B]"));
        assert!(row.contains("[I]"));
        assert!(row.contains("[U]"));
        assert!(row.contains("[Size]"));
        assert!(row.contains("[Color]"));
    }

    #[test]
    fn test_bold_button_lights_up() {
        let (mut app, mut display) = fixture();
        let toggled = crate::core::style::StylePatch::bold(true);
        app.typing_style = Some(toggled.applied(app.reference_style()));
        ToolbarRenderer::render(&mut display, &app);
        let active_bg: Color = display.theme.active_bg().into();
        let (_, start, _) = app.toolbar.layout()[0];
        let cell = display.back_buffer.get_cell(start as u16, 1).unwrap();
        assert_eq!(cell.bg, active_bg);
    }
}

//! Text area rendering
//!
//! Paints the visible slice of the document with its character styles.
//! Bold, italic, and underline become cell attributes; the font color
//! becomes the cell foreground. Font size has no cell equivalent, so it
//! only shows up in the status line.

use unicode_width::UnicodeWidthChar;

use crate::core::app::App;
use crate::terminal::color::Color;
use crate::terminal::display::{Cell, Display, TEXT_TOP_ROW, text_area_rows};

/// Renders the document text area
pub struct TextRenderer;

impl TextRenderer {
    pub fn render(display: &mut Display, app: &App) {
        let (width, height) = display.terminal_size;
        let text_width = width as usize;
        let rows = text_area_rows(height);

        let default_fg: Color = display.theme.fg().into();
        let default_bg: Color = display.theme.bg().into();
        let sel_fg: Color = display.theme.selection_fg().into();
        let sel_bg: Color = display.theme.selection_bg().into();

        let buffer = &mut display.back_buffer;
        let doc = &app.document;
        let view = &app.view;
        let selection = app.selection_range();
        let scroll = view.scroll_col;

        for screen_row in 0..rows {
            let y = (TEXT_TOP_ROW + screen_row) as u16;
            for x in 0..width {
                buffer.set_cell(x, y, Cell::new(' ', default_fg, default_bg));
            }

            let line = view.scroll_line + screen_row;
            if line >= doc.line_count() {
                continue;
            }

            let line_start = doc.line_start(line);
            let line_len = doc.line_len(line);
            let styled = doc.styled_range(line_start, line_start + line_len);

            // Walk the style runs in step with the chars
            let runs = &styled.runs;
            let mut run_idx = 0usize;
            let mut remaining = runs.first().map(|r| r.len).unwrap_or(0);

            let mut visual_x = 0usize;
            for (i, ch) in styled.text.chars().enumerate() {
                while remaining == 0 && run_idx + 1 < runs.len() {
                    run_idx += 1;
                    remaining = runs[run_idx].len;
                }
                let style = runs
                    .get(run_idx)
                    .map(|r| r.style)
                    .unwrap_or_default();
                remaining = remaining.saturating_sub(1);

                let selected = selection
                    .map(|(s, e)| {
                        let pos = line_start + i;
                        pos >= s && pos < e
                    })
                    .unwrap_or(false);
                let fg = if selected {
                    sel_fg
                } else {
                    style.color.map(Color::from).unwrap_or(default_fg)
                };
                let bg = if selected { sel_bg } else { default_bg };

                if ch == '\t' {
                    let spaces = view.tab_width - (visual_x % view.tab_width);
                    for k in 0..spaces {
                        let vx = visual_x + k;
                        if vx >= scroll && vx < scroll + text_width {
                            let cell =
                                Cell::styled(' ', fg, bg, false, false, style.underline);
                            buffer.set_cell((vx - scroll) as u16, y, cell);
                        }
                    }
                    visual_x += spaces;
                    continue;
                }

                let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
                if char_width == 0 {
                    continue;
                }
                if visual_x >= scroll && visual_x + char_width <= scroll + text_width {
                    let screen_x = (visual_x - scroll) as u16;
                    let cell = Cell::styled(
                        ch,
                        fg,
                        bg,
                        style.bold,
                        style.italic,
                        style.underline,
                    );
                    buffer.set_cell(screen_x, y, cell);
                    if char_width == 2 {
                        buffer.set_cell(screen_x + 1, y, Cell::hidden());
                    }
                }
                visual_x += char_width;
            }

            // A selection spanning the newline shows one highlighted cell
            // past the end of the line
            if let Some((s, e)) = selection {
                let newline_pos = line_start + line_len;
                if line + 1 < doc.line_count()
                    && newline_pos >= s
                    && newline_pos < e
                    && visual_x >= scroll
                    && visual_x < scroll + text_width
                {
                    let cell = Cell::new(' ', sel_fg, sel_bg);
                    buffer.set_cell((visual_x - scroll) as u16, y, cell);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::{Color as StyleColor, StyleRun, TextStyle};
    use crate::terminal::capabilities::DisplayMode;
    use crate::terminal::theme::Theme;

    fn fixture(text: &str) -> (App, Display) {
        let mut app = App::new();
        app.view.set_dimensions(20, 5);
        for c in text.chars() {
            app.insert_char(c);
        }
        let display = Display::new(20, 8, Theme::dark(), DisplayMode::TrueColor);
        (app, display)
    }

    fn row_text(display: &Display, y: u16) -> String {
        (0..display.terminal_size.0)
            .filter_map(|x| display.back_buffer.get_cell(x, y))
            .filter(|c| !c.hidden)
            .map(|c| c.ch)
            .collect()
    }

    #[test]
    fn test_plain_text_lands_in_text_rows() {
        let (app, mut display) = fixture("alpha\nbeta");
        TextRenderer::render(&mut display, &app);
        assert!(row_text(&display, TEXT_TOP_ROW as u16).starts_with("alpha"));
        assert!(row_text(&display, TEXT_TOP_ROW as u16 + 1).starts_with("beta"));
    }

    #[test]
    fn test_bold_run_sets_cell_attribute() {
        let (mut app, mut display) = fixture("abc");
        let bold = TextStyle {
            bold: true,
            ..TextStyle::default()
        };
        app.document.set_styles(0, &[StyleRun::new(2, bold)]);
        TextRenderer::render(&mut display, &app);
        let y = TEXT_TOP_ROW as u16;
        assert!(display.back_buffer.get_cell(0, y).unwrap().bold);
        assert!(display.back_buffer.get_cell(1, y).unwrap().bold);
        assert!(!display.back_buffer.get_cell(2, y).unwrap().bold);
    }

    #[test]
    fn test_colored_text_overrides_theme_fg() {
        let (mut app, mut display) = fixture("abc");
        let red = TextStyle {
            color: Some(StyleColor::Red),
            ..TextStyle::default()
        };
        app.document.set_styles(0, &[StyleRun::new(3, red)]);
        TextRenderer::render(&mut display, &app);
        let y = TEXT_TOP_ROW as u16;
        assert_eq!(display.back_buffer.get_cell(0, y).unwrap().fg, Color::Red);
    }

    #[test]
    fn test_selection_paints_background() {
        let (mut app, mut display) = fixture("abcdef");
        app.view.move_to(&app.document, 0);
        app.select_to(3);
        app.view.move_to(&app.document, 3);
        TextRenderer::render(&mut display, &app);
        let y = TEXT_TOP_ROW as u16;
        let sel_bg: Color = display.theme.selection_bg().into();
        assert_eq!(display.back_buffer.get_cell(0, y).unwrap().bg, sel_bg);
        assert_eq!(display.back_buffer.get_cell(2, y).unwrap().bg, sel_bg);
        assert_ne!(display.back_buffer.get_cell(4, y).unwrap().bg, sel_bg);
    }

    #[test]
    fn test_tab_expands_to_stop() {
        let (app, mut display) = fixture("\tx");
        TextRenderer::render(&mut display, &app);
        let y = TEXT_TOP_ROW as u16;
        // tab_width defaults to 4
        assert_eq!(display.back_buffer.get_cell(4, y).unwrap().ch, 'x');
    }

    #[test]
    fn test_wide_char_gets_continuation_cell() {
        let (app, mut display) = fixture("你a");
        TextRenderer::render(&mut display, &app);
        let y = TEXT_TOP_ROW as u16;
        assert_eq!(display.back_buffer.get_cell(0, y).unwrap().ch, '你');
        assert!(display.back_buffer.get_cell(1, y).unwrap().hidden);
        assert_eq!(display.back_buffer.get_cell(2, y).unwrap().ch, 'a');
    }
}

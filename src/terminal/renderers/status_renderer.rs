//! Status line rendering
//!
//! Bottom row of the screen. Normally shows the document name on the left
//! and caret position, character count, and font size on the right, with
//! transient messages in between. While a prompt is active it becomes the
//! prompt's input line instead.

use crate::core::app::App;
use crate::terminal::color::Color;
use crate::terminal::display::{Cell, Display};

/// Renders the status line
pub struct StatusRenderer;

impl StatusRenderer {
    pub fn render(display: &mut Display, app: &App) {
        let (width, height) = display.terminal_size;
        if height == 0 {
            return;
        }
        let y = height - 1;
        let fg: Color = display.theme.status_fg().into();
        let bg: Color = display.theme.status_bg().into();

        let line = match &app.prompt {
            Some(state) => format!("{}{}", state.prompt, state.input),
            None => Self::status_line(app, width as usize),
        };

        let buffer = &mut display.back_buffer;
        for (x, ch) in line
            .chars()
            .chain(std::iter::repeat(' '))
            .take(width as usize)
            .enumerate()
        {
            buffer.set_cell(x as u16, y, Cell::new(ch, fg, bg));
        }
    }

    fn status_line(app: &App, width: usize) -> String {
        let (line, col) = app.view.line_col(&app.document);
        let name = app
            .document
            .filename
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "[No Name]".to_string());
        let modified = if app.document.modified { " [+]" } else { "" };

        let mut out = format!(" {}{}", name, modified);
        if let Some(message) = &app.message {
            out.push_str("  ");
            out.push_str(message);
        }

        let right = format!(
            "Ln {}, Col {} | {} chars | {}pt ",
            line + 1,
            col + 1,
            app.document.char_count(),
            app.caret_style().size
        );
        let used = out.chars().count();
        let rlen = right.chars().count();
        if used + rlen < width {
            out.push_str(&" ".repeat(width - used - rlen));
            out.push_str(&right);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dispatcher::InputAction;
    use crate::core::prompt::PromptState;
    use crate::terminal::capabilities::DisplayMode;
    use crate::terminal::theme::Theme;

    fn fixture() -> (App, Display) {
        let mut app = App::new();
        app.view.set_dimensions(80, 21);
        let display = Display::new(80, 24, Theme::dark(), DisplayMode::TrueColor);
        (app, display)
    }

    fn status_text(display: &Display) -> String {
        let y = display.terminal_size.1 - 1;
        (0..display.terminal_size.0)
            .filter_map(|x| display.back_buffer.get_cell(x, y))
            .map(|c| c.ch)
            .collect()
    }

    #[test]
    fn test_char_count_tracks_document() {
        let (mut app, mut display) = fixture();
        StatusRenderer::render(&mut display, &app);
        assert!(status_text(&display).contains("0 chars"));

        for c in "hello".chars() {
            app.insert_char(c);
        }
        StatusRenderer::render(&mut display, &app);
        let row = status_text(&display);
        assert!(row.contains("5 chars"));
        assert!(row.contains("[+]"));
        assert!(row.contains("Ln 1, Col 6"));
    }

    #[test]
    fn test_unnamed_document_label() {
        let (app, mut display) = fixture();
        StatusRenderer::render(&mut display, &app);
        let row = status_text(&display);
        assert!(row.contains("[No Name]"));
        assert!(!row.contains("[+]"));
    }

    #[test]
    fn test_prompt_takes_over_row() {
        let (mut app, mut display) = fixture();
        app.prompt = Some(PromptState::with_input(
            "Save as: ",
            "notes.jot",
            InputAction::SaveAs,
        ));
        StatusRenderer::render(&mut display, &app);
        let row = status_text(&display);
        assert!(row.starts_with("Save as: notes.jot"));
        assert!(!row.contains("chars"));
    }

    #[test]
    fn test_font_size_shown() {
        let (app, mut display) = fixture();
        StatusRenderer::render(&mut display, &app);
        assert!(status_text(&display).contains("12pt"));
    }
}

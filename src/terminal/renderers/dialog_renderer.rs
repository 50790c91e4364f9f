//! Modal dialog rendering
//!
//! Draws a bordered box centered over the text area with the dialog title
//! embedded in the top border and the dismiss hint at the bottom.

use crate::core::dialog::Dialog;
use crate::terminal::color::Color;
use crate::terminal::display::{Cell, Display};

/// Renders a modal message box
pub struct DialogRenderer;

impl DialogRenderer {
    pub fn render(display: &mut Display, dialog: &Dialog) {
        let (width, height) = display.terminal_size;
        let fg: Color = display.theme.dialog_fg().into();
        let bg: Color = display.theme.dialog_bg().into();
        let border: Color = display.theme.dialog_border().into();
        let hint_fg: Color = display.theme.muted().into();

        let lines = dialog.lines();
        let box_w = (dialog.content_width() + 4).min(width as usize);
        let box_h = lines.len() + 4;
        let x0 = (width as usize).saturating_sub(box_w) / 2;
        let y0 = (height as usize).saturating_sub(box_h) / 2;

        let buffer = &mut display.back_buffer;
        let put = |buffer: &mut crate::terminal::display::ScreenBuffer,
                   x: usize,
                   y: usize,
                   ch: char,
                   color: Color| {
            buffer.set_cell(x as u16, y as u16, Cell::new(ch, color, bg));
        };

        // Top border with the title embedded
        let title: String = format!("\u{250c}\u{2500} {} ", dialog.title)
            .chars()
            .take(box_w.saturating_sub(1))
            .collect();
        let mut x = 0;
        for ch in title.chars() {
            put(buffer, x0 + x, y0, ch, border);
            x += 1;
        }
        while x + 1 < box_w {
            put(buffer, x0 + x, y0, '\u{2500}', border);
            x += 1;
        }
        put(buffer, x0 + box_w.saturating_sub(1), y0, '\u{2510}', border);

        // Message lines, then a blank spacer, then the dismiss hint
        let inner = box_w.saturating_sub(4);
        for (row, content) in lines
            .iter()
            .copied()
            .chain(["", Dialog::DISMISS_HINT])
            .enumerate()
        {
            let y = y0 + 1 + row;
            let color = if content == Dialog::DISMISS_HINT {
                hint_fg
            } else {
                fg
            };
            put(buffer, x0, y, '\u{2502}', border);
            for i in 1..box_w.saturating_sub(1) {
                put(buffer, x0 + i, y, ' ', fg);
            }
            let pad = if content == Dialog::DISMISS_HINT {
                inner.saturating_sub(content.len()) / 2
            } else {
                0
            };
            for (j, ch) in content.chars().take(inner).enumerate() {
                put(buffer, x0 + 2 + pad + j, y, ch, color);
            }
            put(buffer, x0 + box_w.saturating_sub(1), y, '\u{2502}', border);
        }

        // Bottom border
        let y_bottom = y0 + box_h - 1;
        put(buffer, x0, y_bottom, '\u{2514}', border);
        for i in 1..box_w.saturating_sub(1) {
            put(buffer, x0 + i, y_bottom, '\u{2500}', border);
        }
        put(buffer, x0 + box_w.saturating_sub(1), y_bottom, '\u{2518}', border);
    }
}

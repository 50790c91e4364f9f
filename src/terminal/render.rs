//! Flushing a finished frame to the terminal
//!
//! Everything above this layer paints into the [`Display`] buffers; this is
//! the only place that writes escape codes to stdout.

use std::io::{Stdout, Write};

use crate::terminal::capabilities::DisplayMode;
use crate::terminal::display::Display;

/// Write the back buffer to the terminal, diffing against the front buffer
/// so only changed cells are repainted. A full redraw clears the screen
/// first. Colors and attributes are only re-emitted when they differ from
/// the last cell written, which keeps the byte stream small.
pub fn render_display_to_terminal(
    display: &Display,
    stdout: &mut Stdout,
) -> Result<(), Box<dyn std::error::Error>> {
    // Keep the cursor hidden while cells land out of order
    write!(stdout, "\x1b[?25l")?;

    let needs_full = display.needs_full_redraw;
    if needs_full {
        write!(stdout, "\x1b[2J\x1b[H")?; // Clear screen and move cursor to top-left
    }

    // back_buffer has the NEW frame, front_buffer the one currently on screen
    let front_buffer = &display.front_buffer;
    let back_buffer = &display.back_buffer;

    let use_color = display.display_mode != DisplayMode::Ascii;
    let mut last_fg = String::new();
    let mut last_bg = String::new();
    // (bold, italic, underline) as last emitted; a frame starts after \x1b[0m
    let mut last_attrs = (false, false, false);
    let mut cursor_moved = false;

    for y in 0..display.terminal_size.1 {
        for x in 0..display.terminal_size.0 {
            let new_cell = match back_buffer.get_cell(x, y) {
                Some(cell) => cell,
                None => continue,
            };

            // If not a full redraw, skip cells that did not change
            if !needs_full {
                if let Some(old) = front_buffer.get_cell(x, y) {
                    if old == new_cell {
                        continue;
                    }
                }
            }

            if new_cell.hidden {
                continue;
            }

            // Jump to the cell; 1-based coordinates
            write!(stdout, "\x1b[{};{}H", y + 1, x + 1)?;
            cursor_moved = true;

            if use_color {
                // Apply fallback for non-TrueColor terminals
                let (fg, bg) = match display.display_mode {
                    DisplayMode::TrueColor => (new_cell.fg, new_cell.bg),
                    _ => (
                        new_cell.fg.to_ansi_fallback(),
                        new_cell.bg.to_ansi_fallback(),
                    ),
                };
                let fg_code = fg.to_ansi_fg_code();
                let bg_code = bg.to_ansi_bg_code();

                if fg_code != last_fg || bg_code != last_bg {
                    write!(stdout, "\x1b[{}m\x1b[{}m", fg_code, bg_code)?;
                    last_fg = fg_code;
                    last_bg = bg_code;
                }

                let attrs = (new_cell.bold, new_cell.italic, new_cell.underline);
                if attrs != last_attrs {
                    if attrs.0 != last_attrs.0 {
                        write!(stdout, "\x1b[{}m", if attrs.0 { "1" } else { "22" })?;
                    }
                    if attrs.1 != last_attrs.1 {
                        write!(stdout, "\x1b[{}m", if attrs.1 { "3" } else { "23" })?;
                    }
                    if attrs.2 != last_attrs.2 {
                        write!(stdout, "\x1b[{}m", if attrs.2 { "4" } else { "24" })?;
                    }
                    last_attrs = attrs;
                }
            }

            write!(stdout, "{}", new_cell.ch)?;
        }
    }

    // Reset colors and attributes after the last painted cell
    if cursor_moved && use_color {
        write!(stdout, "\x1b[0m")?;
    }

    // Position the hardware cursor and show it, or hide it for this frame
    if let Some((cx, cy)) = display.cursor_pos {
        use crossterm::{QueueableCommand, cursor};
        stdout.queue(cursor::MoveTo(cx, cy))?;
        stdout.queue(cursor::Show)?;
    } else {
        use crossterm::{QueueableCommand, cursor};
        stdout.queue(cursor::Hide)?;
    }

    stdout.flush()?;

    Ok(())
}

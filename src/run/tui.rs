//! The terminal session: setup, main loop, teardown.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::core::app::App;
use crate::core::input::KeyMap;
use crate::terminal;
use crate::terminal::display::text_area_rows;

/// Run the editor until quit. Single-threaded: one loop polls input,
/// routes the event, and repaints when something changed.
pub fn run_terminal_mode(
    files: &[PathBuf],
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut keymap = KeyMap::new();
    for (chord, command) in &config.keybindings {
        keymap.bind(chord, command);
    }

    let mut app = App::initialize_with_config(config, files);

    let mut display = terminal::display::Display::new_terminal(config)?;
    let (cols, rows) = display.terminal_size;
    app.view.set_dimensions(cols as usize, text_area_rows(rows));

    let _raw_mode = terminal::raw::RawMode::new()?;

    display.render(&app);
    let mut stdout = io::stdout();
    terminal::render::render_display_to_terminal(&display, &mut stdout)?;
    display.swap_buffers();

    let mut event_handler = terminal::events::EventHandler::new();
    loop {
        // Wait up to 10ms for input to stay responsive without spinning
        if event_handler.poll(Duration::from_millis(10))? {
            let event = event_handler.read()?;
            let exit = terminal::event_handler::process_terminal_event(
                &mut app,
                &mut display,
                &keymap,
                event,
            )?;
            if exit {
                break;
            }
        }

        if display.dirty {
            display.render(&app);
            let mut stdout = io::stdout();
            terminal::render::render_display_to_terminal(&display, &mut stdout)?;
            display.swap_buffers();
        }
    }
    Ok(())
}

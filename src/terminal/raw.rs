//! Terminal setup and teardown
//!
//! Raw mode, the alternate screen, and mouse capture are entered together
//! and must be undone together, including when the process panics mid-frame.

use std::io::stdout;
use std::panic::{self, PanicHookInfo};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};

static TERMINAL_INITIALIZED: AtomicBool = AtomicBool::new(false);

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// RAII guard for the terminal session. Construction switches to raw mode
/// and the alternate screen; dropping it puts everything back.
pub struct RawMode {
    original_hook: Option<PanicHook>,
}

impl RawMode {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        enable_raw_mode()?;

        let mut out = stdout();
        execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            Clear(ClearType::All)
        )?;

        TERMINAL_INITIALIZED.store(true, Ordering::SeqCst);

        // Restore the terminal before the panic message prints, so it lands
        // on a readable screen instead of inside the alternate buffer
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(|info| {
            restore_terminal();
            eprintln!("{}", info);
        }));

        Ok(Self {
            original_hook: Some(original_hook),
        })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        restore_terminal();
        if let Some(hook) = self.original_hook.take() {
            panic::set_hook(hook);
        }
    }
}

fn restore_terminal() {
    if TERMINAL_INITIALIZED.swap(false, Ordering::SeqCst) {
        let mut out = stdout();
        // Clear and home the cursor first: terminals without real alternate
        // screen support would otherwise keep frame artifacts
        let _ = execute!(
            out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Entering actual raw mode would wreck the test runner's terminal, so
    // only the drop path with no terminal state is exercised here.

    #[test]
    fn test_drop_without_init_is_harmless() {
        let guard = RawMode {
            original_hook: None,
        };
        drop(guard);
        assert!(!TERMINAL_INITIALIZED.load(Ordering::SeqCst));
    }
}

//! Reads crossterm events and converts them to editor-native input types

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::input::{InputEvent, Key, MouseButton, MouseEvent, MouseEventKind};

/// Everything the main loop can receive
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    Input(InputEvent),
    Resize(u16, u16),
    Mouse(MouseEvent),
    None,
}

pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Wait up to `timeout` for an event to arrive
    pub fn poll(&self, timeout: Duration) -> Result<bool, Box<dyn std::error::Error>> {
        Ok(event::poll(timeout)?)
    }

    /// Read the next event. The main loop calls poll() first, so the inner
    /// zero-timeout poll keeps this from ever blocking.
    pub fn read(&mut self) -> Result<EditorEvent, Box<dyn std::error::Error>> {
        if event::poll(Duration::from_millis(0))? {
            return Ok(match event::read()? {
                Event::Key(key_event) => match convert_key(key_event) {
                    Some(input) => EditorEvent::Input(input),
                    None => EditorEvent::None,
                },
                Event::Resize(cols, rows) => EditorEvent::Resize(cols, rows),
                Event::Mouse(mouse_event) => match convert_mouse(mouse_event) {
                    Some(mouse) => EditorEvent::Mouse(mouse),
                    None => EditorEvent::None,
                },
                _ => EditorEvent::None,
            });
        }
        Ok(EditorEvent::None)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a crossterm key event. Returns None for key releases and for
/// keys the editor does not handle.
fn convert_key(key_event: event::KeyEvent) -> Option<InputEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let modifiers = key_event.modifiers;
    let mut shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    let key = match key_event.code {
        KeyCode::Char(c) => {
            if ctrl && !alt {
                Key::Ctrl(c)
            } else if alt && !ctrl {
                Key::Alt(c)
            } else {
                Key::Char(c)
            }
        }
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => {
            shift = true;
            Key::Tab
        }
        KeyCode::Delete => Key::Delete,
        KeyCode::F(n) => Key::F(n),
        KeyCode::Esc => Key::Esc,
        _ => return None,
    };

    Some(InputEvent {
        key,
        shift,
        alt,
        ctrl,
    })
}

/// Convert a crossterm mouse event. Horizontal scroll has no equivalent
/// here and is dropped.
fn convert_mouse(mouse_event: event::MouseEvent) -> Option<MouseEvent> {
    let kind = match mouse_event.kind {
        event::MouseEventKind::Down(btn) => MouseEventKind::Down(convert_button(btn)),
        event::MouseEventKind::Up(btn) => MouseEventKind::Up(convert_button(btn)),
        event::MouseEventKind::Drag(btn) => MouseEventKind::Drag(convert_button(btn)),
        event::MouseEventKind::Moved => MouseEventKind::Moved,
        event::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        event::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        event::MouseEventKind::ScrollLeft | event::MouseEventKind::ScrollRight => return None,
    };

    Some(MouseEvent {
        column: mouse_event.column,
        row: mouse_event.row,
        kind,
        shift: mouse_event.modifiers.contains(KeyModifiers::SHIFT),
    })
}

fn convert_button(btn: event::MouseButton) -> MouseButton {
    match btn {
        event::MouseButton::Left => MouseButton::Left,
        event::MouseButton::Right => MouseButton::Right,
        event::MouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    #[test]
    fn test_plain_and_modified_chars() {
        let plain = convert_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty())).unwrap();
        assert_eq!(plain.key, Key::Char('a'));
        assert!(!plain.ctrl);

        let ctrl = convert_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)).unwrap();
        assert_eq!(ctrl.key, Key::Ctrl('s'));

        let alt = convert_key(KeyEvent::new(KeyCode::Char('i'), KeyModifiers::ALT)).unwrap();
        assert_eq!(alt.key, Key::Alt('i'));
    }

    #[test]
    fn test_backtab_is_shift_tab() {
        let event = convert_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)).unwrap();
        assert_eq!(event.key, Key::Tab);
        assert!(event.shift);
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(convert_key(release).is_none());
    }

    #[test]
    fn test_unhandled_keys_dropped() {
        assert!(convert_key(KeyEvent::new(KeyCode::Insert, KeyModifiers::empty())).is_none());
    }

    #[test]
    fn test_mouse_conversion() {
        let down = event::MouseEvent {
            kind: event::MouseEventKind::Down(event::MouseButton::Left),
            column: 10,
            row: 3,
            modifiers: KeyModifiers::SHIFT,
        };
        let converted = convert_mouse(down).unwrap();
        assert_eq!(converted.kind, MouseEventKind::Down(MouseButton::Left));
        assert_eq!((converted.column, converted.row), (10, 3));
        assert!(converted.shift);

        let sideways = event::MouseEvent {
            kind: event::MouseEventKind::ScrollLeft,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        };
        assert!(convert_mouse(sideways).is_none());
    }
}

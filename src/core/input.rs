use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Native key representation for jot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Alt(char),
    F(u8),
    Esc,
    Enter,
    Backspace,
    Tab,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Ctrl(c) => write!(f, "^{}", c.to_ascii_uppercase()),
            Key::Alt(c) => write!(f, "M-{}", c),
            Key::F(n) => write!(f, "F{}", n),
            Key::Esc => write!(f, "ESC"),
            Key::Enter => write!(f, "RET"),
            Key::Backspace => write!(f, "BS"),
            Key::Tab => write!(f, "TAB"),
            Key::Delete => write!(f, "DEL"),
            Key::Home => write!(f, "Home"),
            Key::End => write!(f, "End"),
            Key::PageUp => write!(f, "PgUp"),
            Key::PageDown => write!(f, "PgDn"),
            Key::Up => write!(f, "Up"),
            Key::Down => write!(f, "Down"),
            Key::Left => write!(f, "Left"),
            Key::Right => write!(f, "Right"),
        }
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Ctrl notation: ^X or C-x
        if s.starts_with('^') && s.chars().count() == 2 {
            let c = s.chars().nth(1).unwrap();
            return Ok(Key::Ctrl(c.to_ascii_lowercase()));
        }

        if let Some(rest) = s.strip_prefix("C-") {
            if rest.chars().count() == 1 {
                let c = rest.chars().next().unwrap();
                return Ok(Key::Ctrl(c.to_ascii_lowercase()));
            }
        }

        // Alt/Meta notation: M-x
        if let Some(rest) = s.strip_prefix("M-") {
            if rest.chars().count() == 1 {
                let c = rest.chars().next().unwrap();
                return Ok(Key::Alt(c.to_ascii_lowercase()));
            }
        }

        match s.to_ascii_uppercase().as_str() {
            "ENTER" | "RET" => Ok(Key::Enter),
            "TAB" => Ok(Key::Tab),
            "BACKSPACE" | "BS" => Ok(Key::Backspace),
            "ESC" => Ok(Key::Esc),
            "DELETE" | "DEL" => Ok(Key::Delete),
            "HOME" => Ok(Key::Home),
            "END" => Ok(Key::End),
            "PAGEUP" | "PGUP" => Ok(Key::PageUp),
            "PAGEDOWN" | "PGDN" => Ok(Key::PageDown),
            "UP" => Ok(Key::Up),
            "DOWN" => Ok(Key::Down),
            "LEFT" => Ok(Key::Left),
            "RIGHT" => Ok(Key::Right),
            _ => {
                // Function keys F1-F24
                if let Some(num) = s.strip_prefix('F') {
                    if let Ok(f_num) = num.parse::<u8>() {
                        if (1..=24).contains(&f_num) {
                            return Ok(Key::F(f_num));
                        }
                    }
                }

                // Single raw character, case preserved
                if s.chars().count() == 1 {
                    let c = s.chars().next().unwrap();
                    return Ok(Key::Char(c));
                }

                Err(format!("Unknown key: {}", s))
            }
        }
    }
}

/// Native input event representation for jot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
}

/// Which physical button a mouse event carries
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What the mouse did
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    Drag(MouseButton),
    Moved,
    ScrollDown,
    ScrollUp,
}

/// Native mouse event representation for jot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MouseEvent {
    pub column: u16,
    pub row: u16,
    pub kind: MouseEventKind,
    pub shift: bool,
}

/// Normalized key input for binding table lookups
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub key: Key,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyInput {
    /// Normalize an event for table lookup. Character keys are lowercased
    /// so caps lock state never changes which binding matches.
    pub fn from_event(event: &InputEvent) -> Self {
        let normalized_key = match &event.key {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            Key::Alt(c) => Key::Alt(c.to_ascii_lowercase()),
            Key::Ctrl(c) => Key::Ctrl(c.to_ascii_lowercase()),
            other => other.clone(),
        };

        Self {
            key: normalized_key,
            shift: event.shift,
            ctrl: event.ctrl,
            alt: event.alt,
        }
    }

    /// Parse a binding string like "^S", "M-i", "S-Left", "C-Home", or "F10"
    pub fn parse(s: &str) -> Option<Self> {
        let mut key_str = s;
        let mut shift = false;
        let mut ctrl = false;

        if let Some(rest) = key_str.strip_prefix("S-") {
            shift = true;
            key_str = rest;
        }

        // C- on a named key sets the modifier flag. C-x on a single
        // character stays with Key::from_str, which folds it into Ctrl.
        if let Some(rest) = key_str.strip_prefix("C-") {
            if rest.chars().count() > 1 {
                ctrl = true;
                key_str = rest;
            }
        }

        Key::from_str(key_str).ok().map(|k| {
            let ctrl = ctrl || matches!(k, Key::Ctrl(_));
            let alt = matches!(k, Key::Alt(_));
            Self {
                key: k,
                shift,
                ctrl,
                alt,
            }
        })
    }
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shift {
            write!(f, "S-")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Result of a key lookup in the binding table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyLookup {
    /// Found a command binding
    Command(String),
    /// Plain character, should be inserted as text
    InsertChar(char),
    /// No binding and not insertable
    Unbound,
}

/// Flat key-to-command binding table.
///
/// Every chord maps directly to one command name; there are no
/// multi-key sequences.
pub struct KeyMap {
    bindings: HashMap<KeyInput, String>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind a chord string to a command name. Unparseable chords are
    /// reported and skipped so one typo doesn't kill the whole table.
    pub fn bind(&mut self, chord: &str, command: &str) {
        match KeyInput::parse(chord) {
            Some(key) => {
                self.bindings.insert(key, command.to_string());
            }
            None => {
                eprintln!("jot: ignoring unparseable key binding '{}'", chord);
            }
        }
    }

    /// Look up an event. Unbound plain characters become self-insert,
    /// using the original (case-preserved) character.
    pub fn lookup(&self, event: &InputEvent) -> KeyLookup {
        let key = KeyInput::from_event(event);
        if let Some(cmd) = self.bindings.get(&key) {
            return KeyLookup::Command(cmd.clone());
        }

        if let Key::Char(c) = &event.key {
            if !event.ctrl && !event.alt {
                return KeyLookup::InsertChar(*c);
            }
        }

        KeyLookup::Unbound
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

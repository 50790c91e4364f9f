//! Color themes for the notepad chrome
//!
//! Palette-first design: colors are defined once per theme, then mapped to
//! UI roles via accessor methods. Document text colors are user data and
//! never come from here; the theme only paints the surrounding chrome.

/// Theme colors are always concrete RGB; degradation happens at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
}

macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        Color::Rgb {
            r: $r,
            g: $g,
            b: $b,
        }
    };
}

/// The semantic color set a theme defines
#[derive(Clone, Debug)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    /// Accent used for the status line
    pub primary: Color,
    /// Selection and active-item background
    pub selection: Color,
    /// Menu bar and toolbar background
    pub chrome: Color,
    /// Dimmed text (hotkey hints, inactive labels)
    pub muted: Color,
    /// Error dialogs
    pub error: Color,
}

impl Palette {
    pub fn new(
        bg: (u8, u8, u8),
        fg: (u8, u8, u8),
        primary: (u8, u8, u8),
        selection: (u8, u8, u8),
        chrome: (u8, u8, u8),
        muted: (u8, u8, u8),
        error: (u8, u8, u8),
    ) -> Self {
        Self {
            bg: rgb!(bg.0, bg.1, bg.2),
            fg: rgb!(fg.0, fg.1, fg.2),
            primary: rgb!(primary.0, primary.1, primary.2),
            selection: rgb!(selection.0, selection.1, selection.2),
            chrome: rgb!(chrome.0, chrome.1, chrome.2),
            muted: rgb!(muted.0, muted.1, muted.2),
            error: rgb!(error.0, error.1, error.2),
        }
    }
}

/// A color theme for the notepad
#[derive(Clone, Debug)]
pub struct Theme {
    pub name: String,
    pub palette: Palette,
}

impl Theme {
    pub fn new(name: impl Into<String>, palette: Palette) -> Self {
        Self {
            name: name.into(),
            palette,
        }
    }

    // =========================================================================
    // ROLE ACCESSORS
    // =========================================================================

    /// Text area background
    pub fn bg(&self) -> Color {
        self.palette.bg
    }

    /// Default text color
    pub fn fg(&self) -> Color {
        self.palette.fg
    }

    /// Background behind selected text
    pub fn selection_bg(&self) -> Color {
        self.palette.selection
    }

    /// Selected text keeps the normal foreground
    pub fn selection_fg(&self) -> Color {
        self.palette.fg
    }

    /// Menu bar and toolbar background
    pub fn chrome_bg(&self) -> Color {
        self.palette.chrome
    }

    /// Menu bar and toolbar foreground
    pub fn chrome_fg(&self) -> Color {
        self.palette.fg
    }

    /// Highlighted menu item / active toolbar button background
    pub fn active_bg(&self) -> Color {
        self.palette.selection
    }

    /// Highlighted menu item / active toolbar button foreground
    pub fn active_fg(&self) -> Color {
        self.palette.fg
    }

    /// Status line background
    pub fn status_bg(&self) -> Color {
        self.palette.primary
    }

    /// Status line text, inverted against the accent
    pub fn status_fg(&self) -> Color {
        self.palette.bg
    }

    /// Hotkey hints and secondary labels
    pub fn muted(&self) -> Color {
        self.palette.muted
    }

    /// Dialog box background
    pub fn dialog_bg(&self) -> Color {
        self.palette.chrome
    }

    /// Dialog message text
    pub fn dialog_fg(&self) -> Color {
        self.palette.fg
    }

    /// Dialog border and title
    pub fn dialog_border(&self) -> Color {
        self.palette.error
    }

    // =========================================================================
    // BUILT-IN THEMES
    // =========================================================================

    pub fn dark() -> Self {
        Self::new(
            "dark",
            Palette::new(
                (30, 30, 38),
                (220, 220, 215),
                (120, 160, 240),
                (62, 68, 90),
                (42, 42, 54),
                (130, 135, 150),
                (224, 100, 100),
            ),
        )
    }

    pub fn light() -> Self {
        Self::new(
            "light",
            Palette::new(
                (250, 250, 248),
                (40, 42, 48),
                (52, 100, 200),
                (200, 214, 235),
                (232, 232, 228),
                (130, 132, 138),
                (190, 50, 50),
            ),
        )
    }

    /// Look up a theme by name, used by the `theme` config setting
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_lookup() {
        assert_eq!(Theme::by_name("dark").unwrap().name, "dark");
        assert_eq!(Theme::by_name("light").unwrap().name, "light");
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn test_status_colors_contrast() {
        let theme = Theme::dark();
        // The status line inverts: accent background, page-colored text
        assert_eq!(theme.status_fg(), theme.bg());
        assert_ne!(theme.status_bg(), theme.bg());
    }
}

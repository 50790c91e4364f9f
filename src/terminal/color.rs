//! Cell colors and their SGR escape parameters
//!
//! Document colors (`core::style::Color`) and theme colors convert into
//! this type at the rendering boundary; the renderer then asks each value
//! for its escape code.

/// What a cell can be painted with: the terminal default, one of the 16
/// ANSI colors, or a 24-bit value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// ANSI SGR parameter for this color as a foreground
    pub fn to_ansi_fg_code(self) -> String {
        self.sgr_param(30, 39, 38)
    }

    /// ANSI SGR parameter for this color as a background
    pub fn to_ansi_bg_code(self) -> String {
        self.sgr_param(40, 49, 48)
    }

    /// Shared engine for the fg/bg parameter strings. `base` is 30 for
    /// foreground and 40 for background; bright variants sit 60 above
    /// their dim hue, and true color rides the 38/48 extended form.
    fn sgr_param(self, base: u16, reset: u16, extended: u16) -> String {
        let (hue, bright) = match self {
            Color::Reset => return reset.to_string(),
            Color::Rgb { r, g, b } => return format!("{};2;{};{};{}", extended, r, g, b),
            Color::Black => (0, false),
            Color::Red => (1, false),
            Color::Green => (2, false),
            Color::Yellow => (3, false),
            Color::Blue => (4, false),
            Color::Magenta => (5, false),
            Color::Cyan => (6, false),
            Color::White => (7, false),
            Color::BrightBlack => (0, true),
            Color::BrightRed => (1, true),
            Color::BrightGreen => (2, true),
            Color::BrightYellow => (3, true),
            Color::BrightBlue => (4, true),
            Color::BrightMagenta => (5, true),
            Color::BrightCyan => (6, true),
            Color::BrightWhite => (7, true),
        };
        (base + hue + if bright { 60 } else { 0 }).to_string()
    }

    /// Nearest 16-color approximation for terminals without true color.
    /// The channel bits map straight onto the ANSI hue index: red is
    /// bit 0, green bit 1, blue bit 2.
    pub fn to_ansi_fallback(self) -> Self {
        const DIM: [Color; 8] = [
            Color::Black,
            Color::Red,
            Color::Green,
            Color::Yellow,
            Color::Blue,
            Color::Magenta,
            Color::Cyan,
            Color::White,
        ];
        const BRIGHT: [Color; 8] = [
            Color::BrightBlack,
            Color::BrightRed,
            Color::BrightGreen,
            Color::BrightYellow,
            Color::BrightBlue,
            Color::BrightMagenta,
            Color::BrightCyan,
            Color::BrightWhite,
        ];

        let Color::Rgb { r, g, b } = self else {
            return self;
        };

        let threshold = 85;
        let idx = usize::from(r > threshold)
            | (usize::from(g > threshold) << 1)
            | (usize::from(b > threshold) << 2);
        let bright = (r as u32 + g as u32 + b as u32) / 3 > 127;

        if bright { BRIGHT[idx] } else { DIM[idx] }
    }
}

impl From<crate::terminal::theme::Color> for Color {
    fn from(theme_color: crate::terminal::theme::Color) -> Self {
        match theme_color {
            crate::terminal::theme::Color::Rgb { r, g, b } => Color::Rgb { r, g, b },
        }
    }
}

/// Document text colors map one-to-one onto terminal colors; the named
/// variants already are the standard ANSI palette.
impl From<crate::core::style::Color> for Color {
    fn from(style_color: crate::core::style::Color) -> Self {
        use crate::core::style::Color as Style;
        match style_color {
            Style::Black => Color::Black,
            Style::Red => Color::Red,
            Style::Green => Color::Green,
            Style::Yellow => Color::Yellow,
            Style::Blue => Color::Blue,
            Style::Magenta => Color::Magenta,
            Style::Cyan => Color::Cyan,
            Style::White => Color::White,
            Style::BrightBlack => Color::BrightBlack,
            Style::BrightRed => Color::BrightRed,
            Style::BrightGreen => Color::BrightGreen,
            Style::BrightYellow => Color::BrightYellow,
            Style::BrightBlue => Color::BrightBlue,
            Style::BrightMagenta => Color::BrightMagenta,
            Style::BrightCyan => Color::BrightCyan,
            Style::BrightWhite => Color::BrightWhite,
            Style::Rgb { r, g, b } => Color::Rgb { r, g, b },
        }
    }
}

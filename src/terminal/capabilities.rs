//! Terminal capability detection for graceful degradation
//!
//! Chooses how much color and styling the terminal can take. Detection is
//! environment-variable based; the `--ascii` flag overrides it entirely.

use std::env;

/// How much styling the terminal gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// 24-bit color
    TrueColor,
    /// Standard ANSI 16-color support
    Ansi,
    /// ASCII-only mode with no color or styling
    Ascii,
}

impl DisplayMode {
    /// Pick a mode from the real process environment
    pub fn detect() -> Self {
        Self::detect_from(|key| env::var(key).ok())
    }

    /// Detection against an injectable environment, for testability
    fn detect_from<F>(env_var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if has_true_color_support(&env_var) {
            return DisplayMode::TrueColor;
        }
        if has_ansi_support(&env_var) {
            return DisplayMode::Ansi;
        }
        DisplayMode::Ascii
    }
}

/// Check if the terminal supports true color (24-bit)
fn has_true_color_support<F>(env_var: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(colorterm) = env_var("COLORTERM") {
        if colorterm.contains("truecolor") || colorterm.contains("24bit") {
            return true;
        }
    }

    if let Some(term) = env_var("TERM") {
        if term.contains("24bit")
            || term.contains("truecolor")
            || term.starts_with("xterm-kitty")
            || term.starts_with("screen")
            || term.starts_with("tmux")
        {
            return true;
        }
    }

    env_var("TERM_PROGRAM").is_some_and(|tp| {
        tp == "iTerm.app" || tp == "Hyper" || tp == "wezterm" || tp == "vscode"
    })
}

/// Check if the terminal supports basic ANSI codes
fn has_ansi_support<F>(env_var: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    #[cfg(windows)]
    {
        // Modern Windows terminals announce themselves; legacy consoles
        // get no escape codes
        if let Some(term_program) = env_var("TERM_PROGRAM") {
            return term_program == "vscode" || term_program.contains("windows");
        }
        env_var("ConEmuANSI").as_deref() == Some("ON")
            || env_var("CMDEXTVERSION").is_some()
            || env_var("WT_SESSION").is_some()
    }

    #[cfg(not(windows))]
    {
        // Anything with a sane TERM handles at least 16 colors
        match env_var("TERM") {
            Some(term) => !term.is_empty() && term != "dumb",
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn mock_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_colorterm_wins() {
        let env = mock_env(&[("COLORTERM", "truecolor"), ("TERM", "xterm-256color")]);
        assert_eq!(DisplayMode::detect_from(env), DisplayMode::TrueColor);
    }

    #[test]
    fn test_term_program_truecolor() {
        let env = mock_env(&[("TERM_PROGRAM", "wezterm"), ("TERM", "xterm-256color")]);
        assert_eq!(DisplayMode::detect_from(env), DisplayMode::TrueColor);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_plain_xterm_is_ansi() {
        let env = mock_env(&[("TERM", "xterm-256color")]);
        assert_eq!(DisplayMode::detect_from(env), DisplayMode::Ansi);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_dumb_terminal_is_ascii() {
        let env = mock_env(&[("TERM", "dumb")]);
        assert_eq!(DisplayMode::detect_from(env), DisplayMode::Ascii);
    }
}

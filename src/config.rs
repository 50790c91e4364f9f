//! Build-time configuration model
//!
//! jot has no config files: `user_config::configure` fills this structure
//! in code and the binary is rebuilt to change it. Key chords map to
//! command registry names; loose settings are typed key/value pairs.

use std::collections::HashMap;

/// A single typed setting
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

/// Everything the user can customize
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Chord string ("^S", "M-i") to command registry name
    pub keybindings: HashMap<String, String>,
    /// Loose settings ("tab_width", "theme", "ascii")
    pub settings: HashMap<String, ConfigValue>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a key chord to a command. Rebinding a chord replaces the
    /// earlier target.
    pub fn bind(&mut self, chord: &str, command: &str) {
        self.keybindings
            .insert(chord.to_string(), command.to_string());
    }

    /// Store a setting, converting from any supported value type
    pub fn set<V: Into<ConfigValue>>(&mut self, key: &str, value: V) {
        self.settings.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.settings.get(key)
    }

    /// Boolean setting, or None when missing or differently typed
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        if let Some(ConfigValue::Bool(value)) = self.get(key) {
            Some(*value)
        } else {
            None
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        if let Some(ConfigValue::Int(value)) = self.get(key) {
            Some(*value)
        } else {
            None
        }
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        if let Some(ConfigValue::String(value)) = self.get(key) {
            Some(value.as_str())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = Config::new();
        assert!(config.keybindings.is_empty());
        assert!(config.settings.is_empty());
    }

    #[test]
    fn test_bind_routes_chord_to_command() {
        let mut config = Config::new();
        config.bind("^B", "toggle-bold");
        assert_eq!(
            config.keybindings.get("^B"),
            Some(&"toggle-bold".to_string())
        );

        config.bind("^B", "toggle-italic");
        assert_eq!(
            config.keybindings.get("^B"),
            Some(&"toggle-italic".to_string()),
        );
        assert_eq!(config.keybindings.len(), 1);
    }

    #[test]
    fn test_typed_getters() {
        let mut config = Config::new();
        config.set("ascii", true);
        config.set("tab_width", 4);
        config.set("theme", "light");

        assert_eq!(config.get_bool("ascii"), Some(true));
        assert_eq!(config.get_int("tab_width"), Some(4));
        assert_eq!(config.get_string("theme"), Some("light"));
        assert!(config.get("missing").is_none());
    }

    #[test]
    fn test_getters_refuse_wrong_type() {
        let mut config = Config::new();
        config.set("tab_width", 4);
        assert_eq!(config.get_bool("tab_width"), None);
        assert_eq!(config.get_string("tab_width"), None);
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(ConfigValue::from(true), ConfigValue::Bool(true));
        assert_eq!(ConfigValue::from(8i64), ConfigValue::Int(8));
        assert_eq!(
            ConfigValue::from("dark"),
            ConfigValue::String("dark".to_string())
        );
        assert_eq!(
            ConfigValue::from(String::from("mono")),
            ConfigValue::String("mono".to_string())
        );
    }
}

//! Command-line argument parsing.
//!
//! Two flags and a file argument, parsed by hand. Not worth a dependency.

use crate::config::{Config, ConfigValue};
use std::path::PathBuf;

/// Everything collected from the command line.
#[derive(Debug, Default)]
pub struct Cli {
    /// File(s) to open; only the first is loaded on startup
    pub files: Vec<PathBuf>,

    /// Force ASCII mode (no colors or text attributes)
    pub ascii: bool,

    /// Theme name passed with `--theme`
    pub theme: Option<String>,
}

impl Cli {
    /// Parse the real process arguments.
    pub fn parse() -> Result<Self, Box<dyn std::error::Error>> {
        Self::parse_from(std::env::args().skip(1))
    }

    fn parse_from<I>(args: I) -> Result<Self, Box<dyn std::error::Error>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cli = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-a" | "--ascii" => cli.ascii = true,
                "-t" | "--theme" => match args.next() {
                    Some(t) => cli.theme = Some(t),
                    None => return Err("--theme requires a value".into()),
                },
                "-h" | "--help" => {
                    println!("jot - a small rich-text notepad for the terminal");
                    println!();
                    println!("Usage: jot [OPTIONS] [FILE]");
                    println!();
                    println!("Options:");
                    println!("  -h, --help        Show this help message");
                    println!("  -V, --version     Show the version");
                    println!("  -t, --theme NAME  Set color theme (dark, light)");
                    println!("  -a, --ascii       Disable colors and text attributes");
                    std::process::exit(0);
                }
                "-V" | "--version" => {
                    println!("jot {}", env!("CARGO_PKG_VERSION"));
                    std::process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    return Err(format!("Unknown flag: {}. Use --help for usage.", arg).into());
                }
                _ => {
                    cli.files.push(PathBuf::from(arg));
                }
            }
        }

        Ok(cli)
    }

    /// Push flag values into the config, overriding its defaults.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(theme) = &self.theme {
            config.set("theme", ConfigValue::String(theme.clone()));
        }
        if self.ascii {
            config.set("ascii", ConfigValue::Bool(true));
        }
    }
}

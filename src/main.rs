//! jot - a small rich-text notepad for the terminal
//!
//! This is the main entry point. It parses CLI arguments, builds the
//! compiled-in configuration, and hands off to the terminal runner.

mod cli;
mod config;
mod core;
mod run;
mod terminal;
mod user_config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse()?;

    // Compiled-in defaults, then user_config tweaks, then CLI flags on top
    let mut config = config::Config::default();
    user_config::configure(&mut config);
    cli.apply_to_config(&mut config);

    // Resolve file arguments up front. Paths that cannot be edited are
    // reported on stderr and skipped rather than aborting the session.
    let mut files = Vec::new();
    for path in &cli.files {
        match run::validate_file_path(path) {
            Ok(resolved) => files.push(resolved),
            Err(err) => eprintln!("jot: skipping {}: {}", path.display(), err),
        }
    }

    run::run_terminal_mode(&files, &config)?;

    Ok(())
}

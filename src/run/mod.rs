//! Application execution for jot.
//!
//! The editor always runs in terminal mode; this module owns the runtime
//! loop plus path validation for files named on the command line.

mod tui;

use std::path::{Path, PathBuf};

pub use tui::run_terminal_mode;

/// Validate and canonicalize a file path, blocking special files that
/// would hang or crash the editor.
pub fn validate_file_path(path: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let canonical = match path.canonicalize() {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            // File doesn't exist yet; validate the parent directory instead
            if let Some(parent) = path.parent() {
                let parent = if parent.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    parent
                };
                let canonical_parent = parent
                    .canonicalize()
                    .map_err(|_| "Invalid parent directory")?;
                match path.file_name() {
                    Some(filename) => canonical_parent.join(filename),
                    None => return Err("Invalid file path: missing filename".into()),
                }
            } else {
                return Err("Invalid file path: missing filename".into());
            }
        }
        Err(e) => return Err(format!("Invalid path: {}", e).into()),
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if let Ok(metadata) = std::fs::metadata(&canonical) {
            let ft = metadata.file_type();
            if ft.is_char_device() {
                return Err("Cannot open character device files (e.g., /dev/zero)".into());
            }
            if ft.is_block_device() {
                return Err("Cannot open block device files".into());
            }
            if ft.is_fifo() {
                return Err("Cannot open FIFO/named pipe files".into());
            }
            if ft.is_socket() {
                return Err("Cannot open socket files".into());
            }
        }
    }

    #[cfg(windows)]
    {
        let path_str = canonical.to_string_lossy();
        if path_str.starts_with(r"\\.\pipe\") || path_str.starts_with(r"\\?\pipe\") {
            return Err("Cannot open Windows named pipes".into());
        }
    }

    Ok(canonical)
}

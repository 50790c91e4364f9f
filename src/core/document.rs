//! Styled document model
//!
//! `Document` owns the text rope, the run-length style table, and the file
//! identity (filename + modified flag). The methods here are the raw splice
//! layer: they mutate text and styles together but record no undo state.
//! Undoable editing goes through the edit descriptors in `core::history`,
//! which call down into these.

use ropey::Rope;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::core::style::{StyleRun, StyleTable, TextStyle};

/// Extension of the attribute-preserving native format
pub const NATIVE_EXTENSION: &str = "jot";

/// Version written into native files
const NATIVE_FORMAT_VERSION: u32 = 1;

/// Files larger than this get a slow-load warning on stderr
const HUGE_FILE_THRESHOLD: u64 = 500 * 1024 * 1024;

// ==================== Styled Text ====================

/// A snippet of text together with its style runs.
///
/// Clipboard content and edit descriptors use this so that deleted or
/// copied text can be restored with its formatting intact.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledText {
    /// The chars
    pub text: String,
    /// Style runs covering exactly those chars
    pub runs: Vec<StyleRun>,
}

impl StyledText {
    /// Styled text where every char carries the same style
    pub fn plain(text: impl Into<String>, style: TextStyle) -> Self {
        let text = text.into();
        let chars = text.chars().count();
        let runs = if chars == 0 {
            Vec::new()
        } else {
            vec![StyleRun::new(chars, style)]
        };
        Self { text, runs }
    }

    /// Length in chars
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// True when there is no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// ==================== Native File Format ====================

/// On-disk form of the attribute-preserving `.jot` format
#[derive(Serialize, Deserialize)]
struct NativeFile {
    version: u32,
    text: String,
    runs: Vec<StyleRun>,
}

/// True when a path names the native styled format
pub fn is_native_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(NATIVE_EXTENSION))
}

// ==================== Document ====================

/// The styled document: text rope + style table + file identity
#[derive(Debug)]
pub struct Document {
    /// The text itself; a rope keeps edits cheap anywhere in the file
    rope: Rope,
    /// Per-char formatting, always covering the rope exactly
    styles: StyleTable,
    /// Filename (if loaded from or saved to a file)
    pub filename: Option<PathBuf>,
    /// Dirty flag (true if the document has unsaved changes)
    pub modified: bool,
}

impl Document {
    /// Create an empty untitled document
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            styles: StyleTable::new(),
            filename: None,
            modified: false,
        }
    }

    /// Load a document from a file.
    ///
    /// The native `.jot` extension is parsed as the styled format; anything
    /// else is read as plain UTF-8 text (with a lossy fallback for invalid
    /// bytes) carrying the default style throughout.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let validated_path = Self::validate_file_path(path)?;

        let metadata = fs::metadata(&validated_path)
            .map_err(|e| format!("Failed to read file metadata: {}", e))?;
        if metadata.len() > HUGE_FILE_THRESHOLD {
            eprintln!(
                "Warning: File is very large ({:.1}MB). Loading may be slow.",
                metadata.len() as f64 / (1024.0 * 1024.0)
            );
        }

        if is_native_path(&validated_path) {
            let content = fs::read_to_string(&validated_path)
                .map_err(|e| format!("Failed to read file: {}", e))?;
            let native: NativeFile = serde_json::from_str(&content)
                .map_err(|e| format!("Malformed {} file: {}", NATIVE_EXTENSION, e))?;
            if native.version > NATIVE_FORMAT_VERSION {
                return Err(format!(
                    "Unsupported {} format version {}",
                    NATIVE_EXTENSION, native.version
                )
                .into());
            }
            let rope = Rope::from_str(&native.text);
            let styles = StyleTable::from_runs(native.runs, rope.len_chars())?;
            return Ok(Self {
                rope,
                styles,
                filename: Some(validated_path),
                modified: false,
            });
        }

        // Plain text: stream the file straight into the rope, falling back
        // to lossy conversion when the bytes are not valid UTF-8.
        let file =
            fs::File::open(&validated_path).map_err(|e| format!("Failed to open file: {}", e))?;
        let reader = std::io::BufReader::new(file);
        let rope = match Rope::from_reader(reader) {
            Ok(r) => r,
            Err(_) => {
                let bytes =
                    fs::read(&validated_path).map_err(|e| format!("Failed to read file: {}", e))?;
                eprintln!(
                    "Warning: {} is not valid UTF-8; loading lossily",
                    validated_path.display()
                );
                Rope::from_str(&String::from_utf8_lossy(&bytes))
            }
        };

        let styles = StyleTable::uniform(rope.len_chars(), TextStyle::default());
        Ok(Self {
            rope,
            styles,
            filename: Some(validated_path),
            modified: false,
        })
    }

    /// Absolutize the path and reject anything that is not a regular file
    fn validate_file_path(path: &Path) -> Result<PathBuf, String> {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|e| format!("Failed to get current directory: {}", e))?
                .join(path)
        };

        if !path.exists() {
            return Err(format!("File does not exist: {}", path.display()));
        }

        if path.is_dir() {
            return Err(format!(
                "Path is a directory, not a file: {}",
                path.display()
            ));
        }

        // Device files (Unix only) can hang the editor on open
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            let metadata = std::fs::metadata(&path).map_err(|e| e.to_string())?;
            let file_type = metadata.file_type();
            if file_type.is_block_device()
                || file_type.is_char_device()
                || file_type.is_fifo()
                || file_type.is_socket()
            {
                return Err(format!(
                    "Cannot open device/special file: {}",
                    path.display()
                ));
            }
        }

        Ok(path)
    }

    // ==================== Reading ====================

    /// Total length in chars; this is the status bar's character count
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if the document is empty
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Number of lines (a trailing newline opens a final empty line)
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Text of a line without its trailing newline
    pub fn line(&self, idx: usize) -> Option<String> {
        if idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(idx);
        let mut text: String = line.into();
        while text.ends_with('\n') || text.ends_with('\r') {
            text.pop();
        }
        Some(text)
    }

    /// Char offset where a line starts
    pub fn line_start(&self, idx: usize) -> usize {
        let idx = idx.min(self.rope.len_lines().saturating_sub(1));
        self.rope.line_to_char(idx)
    }

    /// Length of a line in chars, excluding the trailing newline
    pub fn line_len(&self, idx: usize) -> usize {
        self.line(idx).map(|l| l.chars().count()).unwrap_or(0)
    }

    /// Line index containing a char offset
    pub fn char_to_line(&self, pos: usize) -> usize {
        self.rope.char_to_line(pos.min(self.rope.len_chars()))
    }

    /// Whole content as a string
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// A char range as a string
    pub fn text_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.rope.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    /// The underlying rope
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// The style table
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Style at a char offset
    pub fn style_at(&self, pos: usize) -> TextStyle {
        self.styles.style_at(pos)
    }

    /// Capture the styled text over a char range
    pub fn styled_range(&self, start: usize, end: usize) -> StyledText {
        StyledText {
            text: self.text_range(start, end),
            runs: self.styles.slice(start, end),
        }
    }

    // ==================== Raw Mutations ====================

    /// Splice styled text in at a char offset. No undo bookkeeping.
    pub fn splice_in(&mut self, pos: usize, text: &StyledText) {
        if text.is_empty() {
            return;
        }
        let pos = pos.min(self.rope.len_chars());
        self.rope.insert(pos, &text.text);
        self.styles.insert_runs(pos, &text.runs);
        self.modified = true;
    }

    /// Splice a char range out, returning it with its styling. No undo
    /// bookkeeping.
    pub fn splice_out(&mut self, start: usize, end: usize) -> StyledText {
        let end = end.min(self.rope.len_chars());
        if start >= end {
            return StyledText::default();
        }
        let removed = self.styled_range(start, end);
        self.rope.remove(start..end);
        self.styles.remove(start, end - start);
        self.modified = true;
        removed
    }

    /// Replace the style runs starting at `start`. The covered span is the
    /// sum of the run lengths; the text itself is untouched.
    pub fn set_styles(&mut self, start: usize, runs: &[StyleRun]) {
        self.styles.overwrite(start, runs);
        self.modified = true;
    }

    // ==================== Loading and saving ====================

    /// Save to the current filename
    pub fn save(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let path = self
            .filename
            .clone()
            .ok_or("No filename set for document")?;
        self.write_to(&path)?;
        self.modified = false;
        Ok(())
    }

    /// Save to a specific file, adopting it as the current filename on
    /// success only
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        self.write_to(path)?;
        self.filename = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Write the document to `path` atomically: temp file in the target
    /// directory, flush, sync, then rename over the destination.
    fn write_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut temp_file = NamedTempFile::new_in(parent.unwrap_or(Path::new(".")))?;

        if is_native_path(path) {
            let native = NativeFile {
                version: NATIVE_FORMAT_VERSION,
                text: self.rope.to_string(),
                runs: self.styles.runs().to_vec(),
            };
            let json = serde_json::to_string_pretty(&native)?;
            temp_file.write_all(json.as_bytes())?;
        } else {
            // Plain text loses styling; write chunk by chunk to avoid a
            // large intermediate allocation.
            for chunk in self.rope.chunks() {
                temp_file.write_all(chunk.as_bytes())?;
            }
        }
        temp_file.flush()?;

        // Data must reach the disk before the rename makes it visible
        temp_file.as_file().sync_all()?;
        temp_file.persist(path)?;
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== Tests ====================

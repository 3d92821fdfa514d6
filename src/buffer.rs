//! Line-based text buffer with file load/save.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The text being edited, as a list of lines.
///
/// Columns are char indices, not byte offsets; the buffer converts
/// internally so multi-byte UTF-8 content edits correctly. The buffer always
/// holds at least one (possibly empty) line.
#[derive(Debug, Clone)]
pub struct Buffer {
    lines: Vec<String>,
    path: Option<PathBuf>,
    modified: bool,
}

impl Buffer {
    /// Create an empty buffer with no associated file.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            path: None,
            modified: false,
        }
    }

    /// Create a buffer from a string, splitting on newlines.
    pub fn from_str(content: &str) -> Self {
        Self {
            lines: split_lines(content),
            path: None,
            modified: false,
        }
    }

    /// Load a buffer from a file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self {
            lines: split_lines(&content),
            path: Some(path.to_path_buf()),
            modified: false,
        })
    }

    /// Write the full contents to `path`, then bind the buffer to it.
    pub fn save_to_file(&mut self, path: &Path) -> Result<()> {
        fs::write(path, self.contents())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        self.path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// The file this buffer is bound to, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Bind the buffer to a file path without saving.
    pub fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    /// Whether the buffer has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Length of a line in chars. Missing lines count as empty.
    pub fn line_len(&self, index: usize) -> usize {
        self.lines.get(index).map_or(0, |l| l.chars().count())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The full contents, lines joined with `\n`.
    pub fn contents(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Insert a char at (line, col). Out-of-range positions are ignored.
    pub fn insert_char(&mut self, line: usize, col: usize, ch: char) {
        if let Some(l) = self.lines.get_mut(line) {
            if let Some(byte) = char_to_byte(l, col) {
                l.insert(byte, ch);
                self.modified = true;
            }
        }
    }

    /// Insert a string at (line, col). The text must not contain newlines.
    pub fn insert_str(&mut self, line: usize, col: usize, text: &str) {
        debug_assert!(!text.contains('\n'));
        if let Some(l) = self.lines.get_mut(line) {
            if let Some(byte) = char_to_byte(l, col) {
                l.insert_str(byte, text);
                self.modified = true;
            }
        }
    }

    /// Remove the char at (line, col). Returns it if one was removed.
    pub fn delete_char(&mut self, line: usize, col: usize) -> Option<char> {
        let l = self.lines.get_mut(line)?;
        let byte = char_to_byte(l, col)?;
        if byte >= l.len() {
            return None;
        }
        self.modified = true;
        Some(l.remove(byte))
    }

    /// Split a line at (line, col), pushing the tail down as a new line.
    pub fn split_line(&mut self, line: usize, col: usize) {
        if let Some(l) = self.lines.get_mut(line) {
            if let Some(byte) = char_to_byte(l, col) {
                let tail = l.split_off(byte);
                self.lines.insert(line + 1, tail);
                self.modified = true;
            }
        }
    }

    /// Join `line` with the line below it. Returns false at the last line.
    pub fn join_with_next(&mut self, line: usize) -> bool {
        if line + 1 >= self.lines.len() {
            return false;
        }
        let next = self.lines.remove(line + 1);
        self.lines[line].push_str(&next);
        self.modified = true;
        true
    }

    /// Append a line at the end of the buffer.
    pub fn append_line(&mut self, content: String) {
        self.lines.push(content);
        self.modified = true;
    }

    /// Remove a line, keeping the one-line invariant.
    pub fn remove_line(&mut self, index: usize) -> Option<String> {
        if index >= self.lines.len() {
            return None;
        }
        let removed = self.lines.remove(index);
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.modified = true;
        Some(removed)
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Split text into lines without producing a phantom line for a trailing
/// newline. An empty input is a single empty line.
fn split_lines(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
    if lines.len() > 1 && lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Byte offset of char index `col` in `line`. `col == len` maps to the end;
/// anything past that is None.
fn char_to_byte(line: &str, col: usize) -> Option<usize> {
    if col == 0 {
        return Some(0);
    }
    let mut count = 0;
    for (byte, _) in line.char_indices() {
        if count == col {
            return Some(byte);
        }
        count += 1;
    }
    if count == col {
        // col is exactly one past the last char: the end of the line
        Some(line.len())
    } else {
        None
    }
}

//! Single-line minibuffer prompt for file paths.

use crossterm::event::{KeyCode, KeyModifiers};

/// What the prompt's input will be used for once confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    Open,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::SaveAs => "Save as:",
            PromptKind::Open => "Open:",
        }
    }
}

/// An active minibuffer prompt: a label, an input value, and a char-indexed
/// cursor inside it.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    value: String,
    cursor: usize,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply an editing key. Returns false for keys the prompt does not
    /// handle (Enter and Esc belong to the caller).
    pub fn apply_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char(c)
                if modifiers == KeyModifiers::NONE || modifiers == KeyModifiers::SHIFT =>
            {
                let byte = self.byte_at(self.cursor);
                self.value.insert(byte, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let byte = self.byte_at(self.cursor);
                    self.value.remove(byte);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.value.chars().count() {
                    let byte = self.byte_at(self.cursor);
                    self.value.remove(byte);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }

    fn byte_at(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(byte, _)| byte)
    }
}

//! Editor state and key dispatch.

use crate::buffer::Buffer;
use crate::chiasmus;
use crate::config::Config;
use crate::cursor::Cursor;
use crate::marks::LineMarks;
use crate::prompt::{Prompt, PromptKind};
use crate::ui;
use crate::viewport::Viewport;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::Frame;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// The complete editor state - everything needed to represent the current
/// editing session.
pub struct Editor {
    pub config: Config,
    pub buffer: Buffer,
    pub cursor: Cursor,
    pub viewport: Viewport,
    /// Lines appended by chiasmation, rendered in the mirror tint
    pub marks: LineMarks,
    /// Active minibuffer prompt, if any
    pub prompt: Option<Prompt>,
    status_message: String,
    should_quit: bool,
    quit_pending: bool,
}

impl Editor {
    /// Create an editor with an empty buffer for a terminal of the given size.
    pub fn new(config: Config, width: u16, height: u16) -> Self {
        let scroll_offset = config.editor.scroll_offset;
        Self {
            config,
            buffer: Buffer::new(),
            cursor: Cursor::new(),
            viewport: Viewport::new(width, height.saturating_sub(1), scroll_offset),
            marks: LineMarks::new(),
            prompt: None,
            status_message: String::new(),
            should_quit: false,
            quit_pending: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport.resize(width, height.saturating_sub(1));
    }

    pub fn render(&mut self, frame: &mut Frame) {
        ui::render(self, frame);
    }

    /// Dispatch a key press.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        if self.prompt.is_some() {
            self.handle_prompt_key(code, modifiers);
            return Ok(());
        }

        let is_quit_key = matches!(
            (code, modifiers),
            (KeyCode::Char('q'), KeyModifiers::CONTROL)
        );

        match (code, modifiers) {
            (KeyCode::Char('q'), KeyModifiers::CONTROL) => self.request_quit(),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => self.save(),
            (KeyCode::Char('o'), KeyModifiers::CONTROL) => {
                self.prompt = Some(Prompt::new(PromptKind::Open));
            }
            (KeyCode::Char('g'), KeyModifiers::CONTROL) => self.chiasmate(),

            (KeyCode::Char(c), m)
                if m == KeyModifiers::NONE || m == KeyModifiers::SHIFT =>
            {
                self.insert_char(c);
            }
            (KeyCode::Tab, KeyModifiers::NONE) => self.insert_tab(),
            (KeyCode::Enter, KeyModifiers::NONE) => self.insert_newline(),
            (KeyCode::Backspace, KeyModifiers::NONE) => self.delete_prev_char(),
            (KeyCode::Delete, KeyModifiers::NONE) => self.delete_next_char(),

            (KeyCode::Home, KeyModifiers::CONTROL) => self.cursor.move_to_buffer_start(),
            (KeyCode::End, KeyModifiers::CONTROL) => self.cursor.move_to_buffer_end(&self.buffer),
            (KeyCode::Home, KeyModifiers::NONE) => self.cursor.move_to_line_start(),
            (KeyCode::End, KeyModifiers::NONE) => self.cursor.move_to_line_end(&self.buffer),
            (KeyCode::Left, KeyModifiers::CONTROL) => self.cursor.move_word_left(&self.buffer),
            (KeyCode::Right, KeyModifiers::CONTROL) => self.cursor.move_word_right(&self.buffer),
            (KeyCode::Left, KeyModifiers::NONE) => self.cursor.move_left(&self.buffer),
            (KeyCode::Right, KeyModifiers::NONE) => self.cursor.move_right(&self.buffer),
            (KeyCode::Up, KeyModifiers::NONE) => self.cursor.move_up(&self.buffer),
            (KeyCode::Down, KeyModifiers::NONE) => self.cursor.move_down(&self.buffer),
            (KeyCode::PageUp, KeyModifiers::NONE) => self.move_page_up(),
            (KeyCode::PageDown, KeyModifiers::NONE) => self.move_page_down(),

            _ => {}
        }

        // Anything other than the quit key cancels a pending quit confirmation
        if !is_quit_key {
            self.quit_pending = false;
        }

        Ok(())
    }

    fn handle_prompt_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    self.confirm_prompt(&prompt);
                }
            }
            KeyCode::Esc => {
                self.prompt = None;
                self.set_status("Canceled");
            }
            _ => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.apply_key(code, modifiers);
                }
            }
        }
    }

    fn confirm_prompt(&mut self, prompt: &Prompt) {
        let value = prompt.value().trim();
        if value.is_empty() {
            self.set_status("Canceled");
            return;
        }
        match prompt.kind {
            PromptKind::SaveAs => {
                let path = force_txt_extension(Path::new(value));
                self.save_to(&path);
            }
            PromptKind::Open => self.open_file(Path::new(value)),
        }
    }

    /// Append a reversed copy of the buffer's lines, tinted.
    pub fn chiasmate(&mut self) {
        let lines = self.buffer.lines().to_vec();
        let mirrored = chiasmus::generate_chiasmus(&lines, &[]);
        let start = self.buffer.line_count();
        for line in mirrored.into_iter().skip(start) {
            self.buffer.append_line(line);
        }
        let end = self.buffer.line_count();
        self.marks.mark(start..end);
        tracing::info!("Chiasmate: appended {} mirrored lines", end - start);
        self.set_status(format!("Appended {} mirrored lines", end - start));
    }

    /// Save to the bound path, or prompt for one.
    pub fn save(&mut self) {
        match self.buffer.path().map(Path::to_path_buf) {
            Some(path) => self.save_to(&path),
            None => self.prompt = Some(Prompt::new(PromptKind::SaveAs)),
        }
    }

    fn save_to(&mut self, path: &Path) {
        match self.buffer.save_to_file(path) {
            Ok(()) => {
                tracing::info!("Saved {}", path.display());
                self.set_status(format!("Saved {}", path.display()));
            }
            Err(e) => {
                tracing::warn!("Save failed: {:#}", e);
                self.set_status(format!("Save failed: {e:#}"));
            }
        }
    }

    /// Load a file into a fresh buffer. A nonexistent path becomes a new,
    /// unsaved buffer bound to it.
    pub fn open_file(&mut self, path: &Path) {
        if path.exists() {
            match Buffer::load_from_file(path) {
                Ok(buffer) => {
                    self.buffer = buffer;
                    self.reset_view();
                    tracing::info!("Opened {}", path.display());
                    self.set_status(format!("Opened {}", path.display()));
                }
                Err(e) => {
                    tracing::warn!("Open failed: {:#}", e);
                    self.set_status(format!("Open failed: {e:#}"));
                }
            }
        } else {
            let mut buffer = Buffer::new();
            buffer.set_path(path.to_path_buf());
            self.buffer = buffer;
            self.reset_view();
            self.set_status(format!("New file {}", path.display()));
        }
    }

    /// Quit, asking for confirmation when there are unsaved changes.
    pub fn request_quit(&mut self) {
        if self.buffer.is_modified() && !self.quit_pending {
            self.quit_pending = true;
            self.set_status("Unsaved changes - press Ctrl+Q again to quit");
        } else {
            self.should_quit = true;
        }
    }

    fn reset_view(&mut self) {
        self.cursor = Cursor::new();
        self.marks.clear();
        self.viewport.top_line = 0;
        self.viewport.left_col = 0;
        self.quit_pending = false;
    }

    fn insert_char(&mut self, c: char) {
        self.buffer.insert_char(self.cursor.line, self.cursor.col, c);
        self.cursor.col += 1;
    }

    fn insert_tab(&mut self) {
        let spaces = " ".repeat(self.config.editor.tab_size);
        self.buffer
            .insert_str(self.cursor.line, self.cursor.col, &spaces);
        self.cursor.col += self.config.editor.tab_size;
    }

    fn insert_newline(&mut self) {
        self.buffer.split_line(self.cursor.line, self.cursor.col);
        self.marks.adjust_for_insert(self.cursor.line + 1);
        self.cursor.line += 1;
        self.cursor.col = 0;
    }

    fn delete_prev_char(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
            self.buffer.delete_char(self.cursor.line, self.cursor.col);
        } else if self.cursor.line > 0 {
            let prev_len = self.buffer.line_len(self.cursor.line - 1);
            let joined_line = self.cursor.line;
            if self.buffer.join_with_next(self.cursor.line - 1) {
                self.marks.adjust_for_remove(joined_line);
                self.cursor.line -= 1;
                self.cursor.col = prev_len;
            }
        }
    }

    fn delete_next_char(&mut self) {
        if self.cursor.col < self.buffer.line_len(self.cursor.line) {
            self.buffer.delete_char(self.cursor.line, self.cursor.col);
        } else if self.buffer.join_with_next(self.cursor.line) {
            self.marks.adjust_for_remove(self.cursor.line + 1);
        }
    }

    fn move_page_up(&mut self) {
        for _ in 0..self.viewport.height() {
            self.cursor.move_up(&self.buffer);
        }
    }

    fn move_page_down(&mut self) {
        for _ in 0..self.viewport.height() {
            self.cursor.move_down(&self.buffer);
        }
    }
}

/// Ensure the chosen save path carries a `.txt` suffix. Paths already ending
/// in `.txt` (any case) are kept as-is.
fn force_txt_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("txt") => path.to_path_buf(),
        _ => {
            let mut name = path
                .file_name()
                .map(OsString::from)
                .unwrap_or_default();
            name.push(".txt");
            path.with_file_name(name)
        }
    }
}

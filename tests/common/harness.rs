//! Test harness driving the editor through a virtual terminal.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use giasmus::config::Config;
use giasmus::editor::Editor;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Drives an [`Editor`] against a `TestBackend` so tests can send keys and
/// assert on the rendered screen.
pub struct EditorTestHarness {
    editor: Editor,
    terminal: Terminal<TestBackend>,
}

impl EditorTestHarness {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::with_config(Config::default(), width, height)
    }

    pub fn with_config(config: Config, width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;
        let editor = Editor::new(config, width, height);
        Ok(Self { editor, terminal })
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Send a key press and re-render.
    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        self.editor.handle_key(code, modifiers)?;
        self.render()
    }

    /// Type a string char by char (no modifiers) and re-render.
    pub fn type_text(&mut self, text: &str) -> Result<()> {
        for c in text.chars() {
            self.editor.handle_key(KeyCode::Char(c), KeyModifiers::NONE)?;
        }
        self.render()
    }

    pub fn render(&mut self) -> Result<()> {
        self.terminal.draw(|frame| self.editor.render(frame))?;
        Ok(())
    }

    /// The rendered screen buffer.
    pub fn buffer(&self) -> &ratatui::buffer::Buffer {
        self.terminal.backend().buffer()
    }

    /// The rendered screen as one string, rows joined with newlines.
    pub fn screen_to_string(&self) -> String {
        let buffer = self.buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                match buffer.cell((x, y)) {
                    Some(cell) => screen.push_str(cell.symbol()),
                    None => screen.push(' '),
                }
            }
            screen.push('\n');
        }
        screen
    }

    /// Style of the cell at (x, y), if it exists.
    pub fn cell_style(&self, x: u16, y: u16) -> Option<ratatui::style::Style> {
        self.buffer().cell((x, y)).map(|cell| cell.style())
    }

    pub fn assert_screen_contains(&self, needle: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(needle),
            "Expected screen to contain {needle:?}, got:\n{screen}"
        );
    }

    pub fn assert_screen_not_contains(&self, needle: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(needle),
            "Expected screen to NOT contain {needle:?}, got:\n{screen}"
        );
    }
}

//! Frame rendering: text area with gutter, status bar, prompt.

use crate::editor::Editor;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

/// Draw the whole frame. Updates the viewport to follow the cursor first,
/// so this takes the editor mutably.
pub fn render(editor: &mut Editor, frame: &mut Frame) {
    let area = frame.area();
    if area.height == 0 || area.width == 0 {
        return;
    }
    let text_area = Rect::new(area.x, area.y, area.width, area.height - 1);
    let status_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let gutter_width = gutter_width(editor);
    let content_width = text_area.width.saturating_sub(gutter_width);
    editor.viewport.resize(content_width, text_area.height);

    let cursor_line = editor.buffer.line(editor.cursor.line).unwrap_or("");
    let cursor_screen_col = display_col(cursor_line, editor.cursor.col);
    let line_count = editor.buffer.line_count();
    editor
        .viewport
        .ensure_visible(editor.cursor.line, cursor_screen_col, line_count);

    let [r, g, b] = editor.config.colors.mirror_tint;
    let mirror_style = Style::new().fg(Color::Rgb(r, g, b));

    let top = editor.viewport.top_line;
    let left = editor.viewport.left_col;
    let rows = text_area.height as usize;

    let mut lines: Vec<Line> = Vec::with_capacity(rows);
    for index in top..(top + rows).min(line_count) {
        let content = editor.buffer.line(index).unwrap_or("");
        let visible = clip_columns(content, left, content_width as usize);

        let mut spans = Vec::new();
        if gutter_width > 0 {
            let label_style = if index == editor.cursor.line {
                Style::new().white()
            } else {
                Style::new().dark_gray()
            };
            spans.push(Span::styled(
                format!("{:>width$} ", index + 1, width = gutter_width as usize - 1),
                label_style,
            ));
        }
        let content_style = if editor.marks.is_marked(index) {
            mirror_style
        } else {
            Style::new()
        };
        spans.push(Span::styled(visible, content_style));
        lines.push(Line::from(spans));
    }
    frame.render_widget(Text::from(lines), text_area);

    if let Some(prompt) = &editor.prompt {
        let label = prompt.kind.label();
        let line = Line::from(vec![
            Span::styled(format!("{label} "), Style::new().bold()),
            Span::raw(prompt.value().to_string()),
        ]);
        frame.render_widget(Paragraph::new(line).style(Style::new().reversed()), status_area);

        let input_col = label.chars().count() + 1 + display_col(prompt.value(), prompt.cursor());
        let x = status_area.x + (input_col as u16).min(status_area.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, status_area.y));
    } else {
        frame.render_widget(
            Paragraph::new(status_text(editor)).style(Style::new().reversed()),
            status_area,
        );

        let x = text_area.x + gutter_width + cursor_screen_col.saturating_sub(left) as u16;
        let y = text_area.y + (editor.cursor.line - top) as u16;
        frame.set_cursor_position(Position::new(
            x.min(text_area.right().saturating_sub(1)),
            y,
        ));
    }
}

fn status_text(editor: &Editor) -> String {
    let name = editor
        .buffer
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "[untitled]".to_string());
    let modified = if editor.buffer.is_modified() { " *" } else { "" };

    let mut status = format!(
        "{}{} - Ln {}, Col {}",
        name,
        modified,
        editor.cursor.line + 1,
        editor.cursor.col + 1
    );
    if !editor.status_message().is_empty() {
        status.push_str(" - ");
        status.push_str(editor.status_message());
    }
    status
}

/// Gutter width in columns (line-number digits plus a separator space), or
/// zero when line numbers are disabled.
fn gutter_width(editor: &Editor) -> u16 {
    if !editor.config.editor.line_numbers {
        return 0;
    }
    let digits = editor.buffer.line_count().to_string().len().max(3);
    digits as u16 + 1
}

/// Display width of the first `char_col` chars of `line`.
fn display_col(line: &str, char_col: usize) -> usize {
    line.chars()
        .take(char_col)
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

/// The slice of `line` visible in a window starting at display column
/// `left` and `width` columns wide.
fn clip_columns(line: &str, left: usize, width: usize) -> String {
    let mut out = String::new();
    let mut col = 0;
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if col + w > left + width {
            break;
        }
        if col >= left {
            out.push(ch);
        }
        col += w;
    }
    out
}

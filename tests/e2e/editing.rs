use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

/// Test basic typing shows up on screen
#[test]
fn test_typing_renders() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("Hello from the editor").unwrap();
    harness.assert_screen_contains("Hello from the editor");
}

/// Test the status bar shows the cursor position and modified marker
#[test]
fn test_status_bar_contents() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.render().unwrap();
    harness.assert_screen_contains("[untitled] - Ln 1, Col 1");

    harness.type_text("ab").unwrap();
    harness.assert_screen_contains("[untitled] * - Ln 1, Col 3");
}

/// Test backspace across a line boundary joins lines on screen
#[test]
fn test_backspace_joins_lines() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("one").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.type_text("two").unwrap();

    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    harness
        .send_key(KeyCode::Backspace, KeyModifiers::NONE)
        .unwrap();

    harness.assert_screen_contains("onetwo");
    assert_eq!(harness.editor().buffer.contents(), "onetwo");
}

/// Test line numbers are rendered in the gutter
#[test]
fn test_line_numbers_rendered() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("a").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.type_text("b").unwrap();

    let screen = harness.screen_to_string();
    assert!(screen.contains("  1 a"), "screen:\n{screen}");
    assert!(screen.contains("  2 b"), "screen:\n{screen}");
}

/// Test line numbers can be disabled in config
#[test]
fn test_line_numbers_disabled() {
    let mut config = giasmus::config::Config::default();
    config.editor.line_numbers = false;
    let mut harness = EditorTestHarness::with_config(config, 80, 24).unwrap();

    harness.type_text("a").unwrap();
    let screen = harness.screen_to_string();
    assert!(screen.starts_with('a'), "screen:\n{screen}");
}

/// Test the viewport scrolls to follow the cursor past the bottom
#[test]
fn test_viewport_scrolls_with_cursor() {
    let mut harness = EditorTestHarness::new(80, 6).unwrap();

    for i in 0..20 {
        harness.type_text(&format!("line-{i}")).unwrap();
        if i < 19 {
            harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
        }
    }

    // The last line must be visible, the first scrolled away
    harness.assert_screen_contains("line-19");
    harness.assert_screen_not_contains("line-0 ");
}

/// Test Ctrl+Home jumps back to the top
#[test]
fn test_ctrl_home_scrolls_to_top() {
    let mut harness = EditorTestHarness::new(80, 6).unwrap();

    for i in 0..20 {
        harness.type_text(&format!("line-{i}")).unwrap();
        if i < 19 {
            harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
        }
    }
    harness.send_key(KeyCode::Home, KeyModifiers::CONTROL).unwrap();

    harness.assert_screen_contains("line-0");
    harness.assert_screen_not_contains("line-19");
}

/// Test quitting with unsaved changes needs confirmation
#[test]
fn test_quit_confirmation_flow() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("unsaved").unwrap();

    harness
        .send_key(KeyCode::Char('q'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(!harness.editor().should_quit());
    harness.assert_screen_contains("Unsaved changes");

    harness
        .send_key(KeyCode::Char('q'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.editor().should_quit());
}

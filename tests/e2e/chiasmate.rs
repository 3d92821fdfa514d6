use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

/// Test that chiasmation appends the lines in reversed order on screen
#[test]
fn test_chiasmate_appends_reversed_lines() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();

    harness.type_text("first line").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.type_text("second line").unwrap();

    harness
        .send_key(KeyCode::Char('g'), KeyModifiers::CONTROL)
        .unwrap();

    assert_eq!(
        harness.editor().buffer.contents(),
        "first line\nsecond line\nsecond line\nfirst line"
    );
    harness.assert_screen_contains("Appended 2 mirrored lines");
}

/// Test that the appended lines are rendered in the mirror tint
#[test]
fn test_chiasmate_lines_are_tinted() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();

    harness.type_text("abc").unwrap();
    harness
        .send_key(KeyCode::Char('g'), KeyModifiers::CONTROL)
        .unwrap();

    // Rows: line 1 is the original, line 2 the mirrored copy. The gutter is
    // "  1 " (4 columns), so content starts at column 4.
    let original_style = harness.cell_style(4, 0).unwrap();
    let mirrored_style = harness.cell_style(4, 1).unwrap();

    assert_ne!(original_style.fg, Some(Color::Rgb(128, 128, 128)));
    assert_eq!(
        mirrored_style.fg,
        Some(Color::Rgb(128, 128, 128)),
        "Mirrored line should carry the default #808080 tint"
    );
}

/// Test that the tint color follows the configuration
#[test]
fn test_chiasmate_tint_from_config() {
    let mut config = giasmus::config::Config::default();
    config.colors.mirror_tint = [200, 100, 50];
    let mut harness = EditorTestHarness::with_config(config, 80, 24).unwrap();

    harness.type_text("abc").unwrap();
    harness
        .send_key(KeyCode::Char('g'), KeyModifiers::CONTROL)
        .unwrap();

    let mirrored_style = harness.cell_style(4, 1).unwrap();
    assert_eq!(mirrored_style.fg, Some(Color::Rgb(200, 100, 50)));
}

/// Test chiasmating twice mirrors the already-mirrored text again
#[test]
fn test_chiasmate_twice() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();

    harness.type_text("x").unwrap();
    harness
        .send_key(KeyCode::Char('g'), KeyModifiers::CONTROL)
        .unwrap();
    harness
        .send_key(KeyCode::Char('g'), KeyModifiers::CONTROL)
        .unwrap();

    assert_eq!(harness.editor().buffer.contents(), "x\nx\nx\nx");
}

/// Test that editing after chiasmation keeps the tint on the mirrored text
#[test]
fn test_tint_survives_edits_above() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();

    harness.type_text("top").unwrap();
    harness
        .send_key(KeyCode::Char('g'), KeyModifiers::CONTROL)
        .unwrap();

    // Insert a new line at the top; the mirrored line moves down one row
    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.render().unwrap();

    assert!(!harness.editor().marks.is_marked(1));
    assert!(harness.editor().marks.is_marked(2));
}

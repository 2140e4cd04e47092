//! Rendering tests using ratatui's TestBackend
//!
//! These tests verify what the form shows for each stage of a session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hours_estimator::App;
use ratatui::{backend::TestBackend, Terminal};

fn render(app: &App) -> String {
    let backend = TestBackend::new(90, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_initial_form() {
    let app = App::new();
    let screen = render(&app);

    assert!(screen.contains("Sound Construction Hours Estimator"));
    assert!(screen.contains("Project Category"));
    assert!(screen.contains("Residential Construction"));
    assert!(screen.contains("Commercial Construction"));
    assert!(screen.contains("Renovation Projects"));
    assert!(screen.contains("Select a project category first"));
    assert!(screen.contains("Standard"));
    assert!(screen.contains("Estimate Project Hours"));
    assert!(screen.contains("No estimate yet"));
    assert!(screen.contains("Select a project category to begin"));
}

#[test]
fn test_task_list_narrows_to_category() {
    let mut app = App::new();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    let screen = render(&app);

    assert!(screen.contains("Office Building Framing"));
    assert!(screen.contains("Warehouse Structure"));
    assert!(!screen.contains("Kitchen Remodel"));
    assert!(!screen.contains("House Foundation"));
    assert!(!screen.contains("Select a project category first"));
}

#[test]
fn test_result_panel_after_estimate() {
    let mut app = App::new();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('e'));
    let screen = render(&app);

    assert!(screen.contains("Estimated Project Hours: 80"));
    assert!(screen.contains("Estimate based on project complexity and size"));
    assert!(screen.contains("80 h base × 1 (standard) × 1 complexity = 80.0 h"));
}

#[test]
fn test_committed_choice_is_marked() {
    let mut app = App::new();
    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Enter);
    let screen = render(&app);

    assert!(screen.contains("● Renovation Projects"));
    assert!(screen.contains("● Standard"));
}

#[test]
fn test_help_overlay_rendered() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('?'));
    let screen = render(&app);

    assert!(screen.contains("Hours Estimator Help"));
    assert!(screen.contains("Navigation"));
    assert!(screen.contains("Close help"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let app = App::new();
    let backend = TestBackend::new(10, 5);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
}

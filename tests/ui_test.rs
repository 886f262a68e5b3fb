//! UI rendering tests
//!
//! Renders the show and episode panes into a test backend and checks
//! the produced frames: row counts, ordering, placeholder image, and
//! clear-then-repopulate idempotence.

use ratatui::{backend::TestBackend, Terminal};
use showtui::app::ListState;
use showtui::models::{Episode, Show, DEFAULT_SHOW_IMAGE};
use showtui::ui;

// =============================================================================
// Helpers
// =============================================================================

fn show(id: u64, name: &str) -> Show {
    Show {
        id,
        name: name.into(),
        summary: format!("<p>Summary of {}</p>", name),
        image: DEFAULT_SHOW_IMAGE.into(),
    }
}

fn episode(id: u64, name: &str, season: u32, number: u32) -> Episode {
    Episode {
        id,
        name: name.into(),
        season,
        number,
    }
}

fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

/// Flatten the rendered frame into one string for content checks
fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

// =============================================================================
// Show Pane Tests
// =============================================================================

#[test]
fn test_show_pane_renders_one_row_per_show() {
    let shows = vec![show(1, "Batman"), show(2, "Girls"), show(3, "Gravity Falls")];
    let mut list = ListState::default();
    list.set_len(shows.len());

    let mut terminal = terminal(120, 30);
    terminal
        .draw(|frame| ui::shows::render(frame, frame.area(), &shows, &list))
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("SHOWS (3)"));
    assert!(text.contains("Batman"));
    assert!(text.contains("Girls"));
    assert!(text.contains("Gravity Falls"));
    // One episodes control per display unit
    assert_eq!(text.matches("[e] episodes").count(), 3);
}

#[test]
fn test_show_pane_preserves_input_order() {
    let shows = vec![show(30, "Zebra"), show(10, "Apple"), show(20, "Mango")];
    let mut list = ListState::default();
    list.set_len(shows.len());

    let mut terminal = terminal(120, 30);
    terminal
        .draw(|frame| ui::shows::render(frame, frame.area(), &shows, &list))
        .unwrap();

    let text = buffer_text(&terminal);
    let zebra = text.find("Zebra").unwrap();
    let apple = text.find("Apple").unwrap();
    let mango = text.find("Mango").unwrap();
    assert!(zebra < apple && apple < mango);
}

#[test]
fn test_show_pane_empty_state() {
    let mut terminal = terminal(80, 24);
    terminal
        .draw(|frame| ui::shows::render(frame, frame.area(), &[], &ListState::default()))
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("SHOWS (0)"));
    assert!(text.contains("Press / and type to search"));
}

#[test]
fn test_show_pane_shows_placeholder_image_url() {
    let shows = vec![show(1, "Batman")];
    let mut list = ListState::default();
    list.set_len(1);

    let mut terminal = terminal(120, 30);
    terminal
        .draw(|frame| ui::shows::render(frame, frame.area(), &shows, &list))
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains(DEFAULT_SHOW_IMAGE));
}

#[test]
fn test_show_pane_marks_selected_row() {
    let shows = vec![show(1, "Batman"), show(2, "Girls")];
    let mut list = ListState::default();
    list.set_len(2);
    list.down();

    let mut terminal = terminal(120, 30);
    terminal
        .draw(|frame| ui::shows::render(frame, frame.area(), &shows, &list))
        .unwrap();

    let text = buffer_text(&terminal);
    assert_eq!(text.matches('▸').count(), 1);
}

#[test]
fn test_show_pane_render_is_idempotent() {
    let shows = vec![show(1, "Batman"), show(2, "Girls")];
    let mut list = ListState::default();
    list.set_len(2);

    let mut terminal = terminal(120, 30);
    terminal
        .draw(|frame| ui::shows::render(frame, frame.area(), &shows, &list))
        .unwrap();
    let first = terminal.backend().buffer().clone();

    // Rendering the same input again replaces, never accumulates
    terminal
        .draw(|frame| ui::shows::render(frame, frame.area(), &shows, &list))
        .unwrap();
    let second = terminal.backend().buffer().clone();

    assert_eq!(first, second);
}

// =============================================================================
// Episode Pane Tests
// =============================================================================

#[test]
fn test_episode_pane_formats_lines() {
    let episodes = vec![
        episode(10, "Pilot", 1, 1),
        episode(11, "The Kingsroad", 1, 2),
    ];

    let mut terminal = terminal(80, 24);
    terminal
        .draw(|frame| ui::episodes::render(frame, frame.area(), &episodes))
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("EPISODES (2)"));
    assert!(text.contains("Pilot (season 1, number 1)"));
    assert!(text.contains("The Kingsroad (season 1, number 2)"));
}

#[test]
fn test_episode_pane_one_line_per_episode() {
    let episodes: Vec<Episode> = (1..=5)
        .map(|n| episode(n, &format!("Episode {}", n), 1, n as u32))
        .collect();

    let mut terminal = terminal(80, 24);
    terminal
        .draw(|frame| ui::episodes::render(frame, frame.area(), &episodes))
        .unwrap();

    let text = buffer_text(&terminal);
    assert_eq!(text.matches("(season 1, number").count(), 5);
}

#[test]
fn test_episode_pane_empty_state() {
    let mut terminal = terminal(80, 24);
    terminal
        .draw(|frame| ui::episodes::render(frame, frame.area(), &[]))
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("EPISODES (0)"));
    assert!(text.contains("No episodes listed"));
}

#[test]
fn test_episode_pane_replaces_prior_contents() {
    let mut terminal = terminal(80, 24);

    let first = vec![episode(10, "Pilot", 1, 1), episode(11, "Second", 1, 2)];
    terminal
        .draw(|frame| ui::episodes::render(frame, frame.area(), &first))
        .unwrap();

    let replacement = vec![episode(20, "Other Pilot", 1, 1)];
    terminal
        .draw(|frame| ui::episodes::render(frame, frame.area(), &replacement))
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Other Pilot (season 1, number 1)"));
    assert!(!text.contains("Second"));
    assert!(text.contains("EPISODES (1)"));
}

// =============================================================================
// Layout Smoke Tests
// =============================================================================

#[test]
fn test_panes_render_at_minimum_terminal_size() {
    let shows = vec![show(1, "Batman")];
    let mut list = ListState::default();
    list.set_len(1);
    let episodes = vec![episode(10, "Pilot", 1, 1)];

    // 80x24 is the smallest supported terminal
    let mut terminal = terminal(80, 24);
    terminal
        .draw(|frame| {
            let area = frame.area();
            let left = ratatui::layout::Rect::new(0, 0, area.width / 2, area.height);
            let right = ratatui::layout::Rect::new(
                area.width / 2,
                0,
                area.width - area.width / 2,
                area.height,
            );
            ui::shows::render(frame, left, &shows, &list);
            ui::episodes::render(frame, right, &episodes);
        })
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Batman"));
    assert!(text.contains("Pilot"));
}

//! App state and interaction logic
//!
//! Holds the state behind both panes, turns key events into actions,
//! and applies fetch completions delivered by the event loop.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;

use crate::api::TvMazeClient;
use crate::models::{Episode, Show};

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Episode Pane Visibility
// =============================================================================

/// Visibility of the episode pane.
///
/// Starts `Hidden`; a completed search forces `Hidden` just before its
/// results render, and only a successful episode lookup makes it
/// `Visible`. A failed fetch leaves it exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EpisodePane {
    #[default]
    Hidden,
    Visible,
}

impl EpisodePane {
    pub fn is_visible(self) -> bool {
        matches!(self, EpisodePane::Visible)
    }
}

// =============================================================================
// Search Input State
// =============================================================================

/// Search box state: the query text and cursor position
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub cursor: usize,
}

impl SearchState {
    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.query.remove(self.cursor);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.query.len() {
            self.query.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.query.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.query.len();
    }

    /// Clear query
    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }
}

// =============================================================================
// List Selection State
// =============================================================================

/// Selection state for the show list
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Update length when new results come in, clamping the selection
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

// =============================================================================
// Actions and Events
// =============================================================================

/// A key press that requires a network call. The event loop dispatches
/// these; `handle_key` itself never touches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit the current query text to show search
    SubmitSearch(String),
    /// Look up the episode list for a show id
    FetchEpisodes(u64),
}

/// Completion of an in-flight fetch, delivered over the event channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ShowsLoaded(Vec<Show>),
    EpisodesLoaded(Vec<Episode>),
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug, Default)]
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Search box state
    pub search: SearchState,
    /// Shows currently rendered in the show pane, in API order.
    /// The selection index maps a rendered row back to its record.
    pub shows: Vec<Show>,
    /// Show list selection
    pub show_list: ListState,
    /// Episodes currently rendered in the episode pane, in API order
    pub episodes: Vec<Episode>,
    /// Episode pane visibility
    pub episode_pane: EpisodePane,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            ..Self::default()
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// The show the selection currently points at
    pub fn selected_show(&self) -> Option<&Show> {
        self.shows.get(self.show_list.selected)
    }

    /// Replace the show pane contents wholesale.
    ///
    /// Hides the episode pane first, regardless of its current state:
    /// new search results never render next to a stale episode list.
    pub fn set_shows(&mut self, shows: Vec<Show>) {
        self.episode_pane = EpisodePane::Hidden;
        self.show_list.set_len(shows.len());
        self.shows = shows;
    }

    /// Replace the episode pane contents wholesale and reveal the pane
    pub fn set_episodes(&mut self, episodes: Vec<Episode>) {
        self.episodes = episodes;
        self.episode_pane = EpisodePane::Visible;
    }

    /// Apply a fetch completion. Completions are applied in arrival
    /// order; when requests overlap, the last one to land wins its pane.
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::ShowsLoaded(shows) => self.set_shows(shows),
            AppEvent::EpisodesLoaded(episodes) => self.set_episodes(episodes),
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a keyboard event, returning an action for the event loop
    /// to dispatch when the key requires a network call.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Global quit shortcut
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        match self.input_mode {
            InputMode::Editing => self.handle_editing_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    /// Keys in editing (text input) mode
    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                None
            }
            KeyCode::Enter => {
                // Submit the query verbatim, empty string included
                self.input_mode = InputMode::Normal;
                Some(Action::SubmitSearch(self.search.query.clone()))
            }
            KeyCode::Char(c) => {
                self.search.insert(c);
                None
            }
            KeyCode::Backspace => {
                self.search.backspace();
                None
            }
            KeyCode::Delete => {
                self.search.delete();
                None
            }
            KeyCode::Left => {
                self.search.cursor_left();
                None
            }
            KeyCode::Right => {
                self.search.cursor_right();
                None
            }
            KeyCode::Home => {
                self.search.cursor_home();
                None
            }
            KeyCode::End => {
                self.search.cursor_end();
                None
            }
            _ => None,
        }
    }

    /// Keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                None
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.input_mode = InputMode::Editing;
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.show_list.up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.show_list.down();
                None
            }
            KeyCode::Home => {
                self.show_list.first();
                None
            }
            KeyCode::End => {
                self.show_list.last();
                None
            }
            KeyCode::Enter | KeyCode::Char('e') => self
                .selected_show()
                .map(|show| Action::FetchEpisodes(show.id)),
            _ => None,
        }
    }
}

// =============================================================================
// Fetch Dispatch
// =============================================================================

/// Spawn a show search. The completion, if any, arrives on `tx`.
///
/// A failed call sends nothing: the panes keep their prior contents and
/// no error surfaces in the TUI. Overlapping requests are neither
/// cancelled nor versioned; whichever completion lands last wins.
pub fn spawn_search(client: Arc<TvMazeClient>, term: String, tx: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        if let Ok(shows) = client.search_shows(&term).await {
            let _ = tx.send(AppEvent::ShowsLoaded(shows));
        }
    });
}

/// Spawn an episode lookup for a show id. Same completion and failure
/// behavior as [`spawn_search`].
pub fn spawn_episode_lookup(
    client: Arc<TvMazeClient>,
    show_id: u64,
    tx: UnboundedSender<AppEvent>,
) {
    tokio::spawn(async move {
        if let Ok(episodes) = client.episodes(show_id).await {
            let _ = tx.send(AppEvent::EpisodesLoaded(episodes));
        }
    });
}

// =============================================================================
// Unit Tests
// =============================================================================

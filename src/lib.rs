//! showtui - terminal UI for the TVMaze show directory
//!
//! Search the directory, pick a show, pull up its episode list.
//!
//! # Modules
//!
//! - `models` - show and episode records
//! - `api` - TVMaze client
//! - `ui` - TUI panes and theme
//! - `app` - application state and interaction logic
//! - `cli` / `commands` - scriptable command line surface

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use api::TvMazeClient;
pub use app::{Action, App, AppEvent, EpisodePane, InputMode};
pub use models::{Episode, Show, DEFAULT_SHOW_IMAGE};

//! Terminal UI components
//!
//! Built with ratatui. Two panes: the show list and the episode list,
//! each drawn wholesale from current state on every frame.

pub mod episodes;
pub mod shows;
pub mod theme;

pub use theme::Theme;

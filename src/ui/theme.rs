//! Broadcast amber theme for showtui
//!
//! Color palette and style helpers for the TUI. Warm phosphor tones,
//! one accent for the selection marker.

use ratatui::style::{Color, Modifier, Style};

/// Color palette and style helpers
pub struct Theme;

impl Theme {
    // -------------------------------------------------------------------------
    // Palette
    // -------------------------------------------------------------------------

    /// Background: near-black with a hint of blue
    pub const BACKGROUND: Color = Color::Rgb(0x10, 0x10, 0x16);

    /// Primary: amber phosphor
    pub const PRIMARY: Color = Color::Rgb(0xff, 0xb0, 0x00);

    /// Secondary: pale gold
    pub const SECONDARY: Color = Color::Rgb(0xe8, 0xd9, 0x8b);

    /// Accent: signal green, for the selection marker
    pub const ACCENT: Color = Color::Rgb(0x6f, 0xd3, 0x6f);

    /// Text: warm off-white
    pub const TEXT: Color = Color::Rgb(0xd8, 0xd4, 0xc8);

    /// Dim: muted slate
    pub const DIM: Color = Color::Rgb(0x55, 0x55, 0x60);

    /// Border: dim amber
    pub const BORDER: Color = Color::Rgb(0x8a, 0x64, 0x10);

    /// Border when focused or freshly revealed: full amber
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // -------------------------------------------------------------------------
    // Style helpers
    // -------------------------------------------------------------------------

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Dimmed/muted text
    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Pane title text
    pub fn title() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent style for selection markers
    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted row text (inverted on primary)
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Key binding hints
    pub fn keybind() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Search input text
    pub fn input() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Default pane border
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Focused pane border
    pub fn border_focused() -> Style {
        Style::default().fg(Self::BORDER_FOCUSED)
    }

    /// Bottom status bar
    pub fn status_bar() -> Style {
        Style::default().fg(Self::DIM).bg(Self::BACKGROUND)
    }
}

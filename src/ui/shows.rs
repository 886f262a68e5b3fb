//! Show pane
//!
//! Renders one row per show in response order, drawn wholesale from the
//! current result set on every frame. The row index is the handle back
//! to the show record: the highlighted row is the one an episode lookup
//! will target.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::ListState;
use crate::models::Show;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, shows: &[Show], list: &ListState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(
            format!(" SHOWS ({}) ", shows.len()),
            Theme::title(),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if shows.is_empty() {
        let empty = Paragraph::new("Press / and type to search the directory")
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = shows
        .iter()
        .enumerate()
        .map(|(i, show)| {
            let is_selected = i == list.selected;
            let marker = if is_selected { "▸ " } else { "  " };

            let name_line = Line::from(vec![
                Span::styled(
                    marker,
                    if is_selected {
                        Theme::accent()
                    } else {
                        Theme::dimmed()
                    },
                ),
                Span::styled(
                    &show.name,
                    if is_selected {
                        Theme::highlighted()
                    } else {
                        Theme::text()
                    },
                ),
                Span::styled(format!("  #{}", show.id), Theme::dimmed()),
            ]);

            // Summary arrives as HTML from the directory; it is shown as-is
            let summary_line = Line::from(Span::styled(
                format!("    {}", show.summary),
                Theme::dimmed(),
            ));

            let image_line = Line::from(vec![
                Span::styled(format!("    {}", show.image), Theme::dimmed()),
                Span::raw("  "),
                Span::styled("[e] episodes", Theme::keybind()),
            ]);

            ListItem::new(vec![name_line, summary_line, image_line])
        })
        .collect();

    let list_widget = List::new(items).style(Theme::text());
    frame.render_widget(list_widget, inner);
}

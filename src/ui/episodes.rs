//! Episode pane
//!
//! One line per episode in response order. Only drawn while the pane is
//! visible; contents are replaced wholesale on every lookup.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::models::Episode;
use crate::ui::Theme;

pub fn render(frame: &mut Frame, area: Rect, episodes: &[Episode]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .title(Span::styled(
            format!(" EPISODES ({}) ", episodes.len()),
            Theme::title(),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if episodes.is_empty() {
        let empty = Paragraph::new("No episodes listed")
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = episodes
        .iter()
        .map(|episode| {
            ListItem::new(Line::from(vec![
                Span::styled("· ", Theme::dimmed()),
                Span::styled(episode.to_string(), Theme::text()),
            ]))
        })
        .collect();

    let list_widget = List::new(items).style(Theme::text());
    frame.render_widget(list_widget, inner);
}

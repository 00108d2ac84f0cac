//! Status Bar View Component
//!
//! Renders the current route (or last message) and keyboard shortcuts.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        let mut status = vec![Span::styled(
            format!("[{}] ", self.model.focus_label),
            Style::default().fg(Color::Cyan),
        )];
        if let Some(message) = &self.model.message {
            status.push(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Yellow),
            ));
        } else if let Some(route) = &self.model.current_route {
            status.push(Span::raw("→ "));
            status.push(Span::styled(
                route.as_str(),
                Style::default().fg(Color::Green),
            ));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help = Line::from(vec![
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[←/→]", key),
            Span::raw("slide "),
            Span::styled("[1-9]", key),
            Span::raw("jump "),
            Span::styled("[tab]", key),
            Span::raw("focus "),
            Span::styled("[⏎]", key),
            Span::raw("open"),
        ]);
        Paragraph::new(help).render(chunks[1], buf);
    }
}

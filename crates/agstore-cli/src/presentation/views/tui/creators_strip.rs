use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::CreatorViewModel;

pub struct CreatorsStripView<'a> {
    creators: &'a [CreatorViewModel],
}

impl<'a> CreatorsStripView<'a> {
    pub fn new(creators: &'a [CreatorViewModel]) -> Self {
        Self { creators }
    }
}

impl<'a> Widget for CreatorsStripView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Featured creators ");

        let mut spans = Vec::new();
        for (i, creator) in self.creators.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" · "));
            }
            spans.push(Span::styled(
                creator.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" ({})", creator.num_agents),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        if spans.is_empty() {
            spans.push(Span::styled(
                "No featured creators",
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::HeroViewModel;

/// Page header with the (placeholder) search line.
pub struct HeroView<'a> {
    model: &'a HeroViewModel,
}

impl<'a> HeroView<'a> {
    pub fn new(model: &'a HeroViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeroView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    "━━ ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    self.model.title.as_str(),
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "  {} agents · {} creators",
                        self.model.agent_count, self.model.creator_count
                    ),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]),
            Line::from(self.model.subtitle.as_str()),
            Line::from(vec![
                Span::styled("[/] ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    self.model.search_placeholder.as_str(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];

        Paragraph::new(lines).render(area, buf);
    }
}

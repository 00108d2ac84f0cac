//! One featured listing rendered as a card.

use num_format::Locale;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::{format_runs, rating_label};
use crate::presentation::view_models::FeaturedSlideViewModel;

pub struct FeaturedCardView<'a> {
    slide: &'a FeaturedSlideViewModel,
    active: bool,
    locale: Locale,
}

impl<'a> FeaturedCardView<'a> {
    pub fn new(slide: &'a FeaturedSlideViewModel, active: bool, locale: Locale) -> Self {
        Self {
            slide,
            active,
            locale,
        }
    }
}

impl<'a> Widget for FeaturedCardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", self.slide.agent_name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));

        let mut lines = vec![Line::from(vec![
            Span::styled("by ", Style::default().add_modifier(Modifier::DIM)),
            Span::styled(
                self.slide.creator_name.as_str(),
                Style::default().fg(Color::LightBlue),
            ),
        ])];

        if !self.slide.sub_heading.is_empty() {
            lines.push(Line::from(Span::styled(
                self.slide.sub_heading.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }

        lines.push(Line::from(self.slide.description.as_str()));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("runs ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format_runs(self.slide.runs, &self.locale)),
            Span::raw("   "),
            Span::styled(
                rating_label(self.slide.rating),
                Style::default().fg(Color::Yellow),
            ),
        ]));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

//! Top agents table.

use num_format::Locale;
use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
};

use super::section_border;
use crate::presentation::formatters::{format_runs, rating_label};
use crate::presentation::view_models::AgentRowViewModel;

pub struct AgentTableView<'a> {
    rows: &'a [AgentRowViewModel],
    locale: Locale,
    focused: bool,
}

impl<'a> AgentTableView<'a> {
    pub fn new(rows: &'a [AgentRowViewModel], locale: Locale, focused: bool) -> Self {
        Self {
            rows,
            locale,
            focused,
        }
    }

    /// Build the table for stateful rendering by the component.
    pub fn build_table(&self) -> Table<'a> {
        let header = Row::new(vec!["#", "Agent", "Creator", "Runs", "Rating", "Description"])
            .style(
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            );

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.rank.to_string()),
                    Cell::from(row.agent_name.clone()),
                    Cell::from(Span::styled(
                        row.creator.clone(),
                        Style::default().fg(Color::LightBlue),
                    )),
                    Cell::from(format_runs(row.runs, &self.locale)),
                    Cell::from(Span::styled(
                        rating_label(row.rating),
                        Style::default().fg(Color::Yellow),
                    )),
                    Cell::from(row.description.clone()),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(section_border(self.focused))
            .title(format!(" Top agents ({}) ", self.rows.len()));

        Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Length(20),
                Constraint::Length(16),
                Constraint::Length(11),
                Constraint::Length(7),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::Rgb(30, 40, 60))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ")
    }
}

//! Agent Table Component
//!
//! Encapsulates table selection state and input handling.

use crossterm::event::{KeyCode, KeyEvent};
use num_format::Locale;
use ratatui::{Frame, layout::Rect, widgets::TableState};

use crate::presentation::view_models::AgentRowViewModel;
use crate::presentation::views::tui::AgentTableView;

/// Actions the table emits to its parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentTableAction {
    /// Open the selected agent's detail route
    Open { creator: String, slug: String },
}

pub struct AgentTableComponent {
    /// Selection state - PRIVATE
    state: TableState,
}

impl AgentTableComponent {
    pub fn new() -> Self {
        Self {
            state: TableState::default(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Handle keyboard input
    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        rows: &[AgentRowViewModel],
    ) -> Option<AgentTableAction> {
        let data_len = rows.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next(data_len);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous(data_len);
                None
            }
            KeyCode::Home => {
                if data_len > 0 {
                    self.state.select(Some(0));
                }
                None
            }
            KeyCode::End => {
                if data_len > 0 {
                    self.state.select(Some(data_len - 1));
                }
                None
            }
            KeyCode::Enter => {
                let row = rows.get(self.state.selected()?)?;
                Some(AgentTableAction::Open {
                    creator: row.creator.clone(),
                    slug: row.slug.clone(),
                })
            }
            _ => None,
        }
    }

    /// Render the table. Performs index safety check before rendering.
    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        rows: &[AgentRowViewModel],
        locale: Locale,
        focused: bool,
    ) {
        // Index Safety: Clamp selection to data bounds
        if let Some(selected) = self.state.selected() {
            if rows.is_empty() {
                self.state.select(None);
            } else if selected >= rows.len() {
                self.state.select(Some(rows.len() - 1));
            }
        }

        let table = AgentTableView::new(rows, locale, focused).build_table();
        f.render_stateful_widget(table, area, &mut self.state);
    }

    fn next(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }
        let next = match self.state.selected() {
            Some(i) => (i + 1).min(data_len - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self, data_len: usize) {
        if data_len == 0 {
            return;
        }
        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(prev));
    }
}

impl Default for AgentTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_agents;
    use agstore_runtime::sample_catalog;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn rows() -> Vec<AgentRowViewModel> {
        present_agents(&sample_catalog().agents, None).agents
    }

    #[test]
    fn test_selection_clamps_at_edges() {
        let rows = rows();
        let mut table = AgentTableComponent::new();

        table.handle_input(key(KeyCode::Up), &rows);
        assert_eq!(table.selected(), Some(0));

        table.handle_input(key(KeyCode::End), &rows);
        assert_eq!(table.selected(), Some(rows.len() - 1));
        table.handle_input(key(KeyCode::Char('j')), &rows);
        assert_eq!(table.selected(), Some(rows.len() - 1));

        table.handle_input(key(KeyCode::Home), &rows);
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_enter_requires_selection() {
        let rows = rows();
        let mut table = AgentTableComponent::new();
        assert_eq!(table.handle_input(key(KeyCode::Enter), &rows), None);

        table.handle_input(key(KeyCode::Down), &rows);
        table.handle_input(key(KeyCode::Down), &rows);
        assert_eq!(
            table.handle_input(key(KeyCode::Enter), &rows),
            Some(AgentTableAction::Open {
                creator: rows[1].creator.clone(),
                slug: rows[1].slug.clone(),
            })
        );
    }

    #[test]
    fn test_render_clamps_stale_selection() {
        let rows = rows();
        let mut table = AgentTableComponent::new();
        table.handle_input(key(KeyCode::End), &rows);

        let mut terminal = Terminal::new(TestBackend::new(100, 10)).unwrap();
        terminal
            .draw(|f| table.render(f, f.area(), &rows[..2], Locale::en, true))
            .unwrap();
        assert_eq!(table.selected(), Some(1));

        terminal
            .draw(|f| table.render(f, f.area(), &[], Locale::en, true))
            .unwrap();
        assert_eq!(table.selected(), None);
    }
}

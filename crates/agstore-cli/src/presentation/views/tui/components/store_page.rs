//! Store Page Component
//!
//! Top-level page for `agstore browse`. Routes input to the focused section
//! and turns section actions into page actions for the renderer.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use num_format::Locale;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::{AgentTableAction, AgentTableComponent, FeaturedAction, FeaturedSectionComponent};
use crate::presentation::view_models::{StatusBarViewModel, StoreScreenViewModel};
use crate::presentation::views::tui::{CreatorsStripView, HeroView, StatusBarView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Featured,
    Agents,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Featured => Focus::Agents,
            Focus::Agents => Focus::Featured,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Focus::Featured => "featured",
            Focus::Agents => "agents",
        }
    }
}

/// Actions the page emits to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// Push the agent's detail route into the navigation sink
    Navigate { creator: String, slug: String },
    /// A control without behavior yet (search, filter, ...)
    Placeholder(&'static str),
    Quit,
}

pub struct StorePageComponent {
    featured: FeaturedSectionComponent,
    agents: AgentTableComponent,
    focus: Focus,
    message: Option<String>,
}

impl StorePageComponent {
    pub fn new(screen: &StoreScreenViewModel, transition: Duration, visible_cards: usize) -> Self {
        Self {
            featured: FeaturedSectionComponent::new(
                screen.featured.len(),
                transition,
                visible_cards,
            ),
            agents: AgentTableComponent::new(),
            focus: Focus::Featured,
            message: None,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn featured(&self) -> &FeaturedSectionComponent {
        &self.featured
    }

    pub fn is_animating(&self) -> bool {
        self.featured.is_animating()
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        screen: &StoreScreenViewModel,
    ) -> Option<StoreAction> {
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(StoreAction::Quit),
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                return None;
            }
            KeyCode::Char('/') => return Some(self.placeholder("search")),
            KeyCode::Char('f') => return Some(self.placeholder("filter")),
            KeyCode::Char('b') => return Some(self.placeholder("become a creator")),
            KeyCode::Char('p') => return Some(self.placeholder("creator profile")),
            _ => {}
        }

        // Slide keys reach the carousel regardless of focus
        let carousel_key = matches!(
            key.code,
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h' | 'l' | '1'..='9')
        );

        if carousel_key || self.focus == Focus::Featured {
            return self
                .featured
                .handle_input(key, &screen.featured)
                .map(|FeaturedAction::Open { creator, slug }| StoreAction::Navigate {
                    creator,
                    slug,
                });
        }

        self.agents
            .handle_input(key, &screen.agents)
            .map(|AgentTableAction::Open { creator, slug }| StoreAction::Navigate {
                creator,
                slug,
            })
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, screen: &StoreScreenViewModel) {
        if self.featured.handle_mouse(mouse, &screen.featured) {
            self.focus = Focus::Featured;
        }
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        screen: &StoreScreenViewModel,
        current_route: Option<&str>,
        locale: Locale,
    ) {
        let chunks = Layout::vertical([
            Constraint::Length(4),  // Hero
            Constraint::Length(12), // Featured carousel
            Constraint::Min(6),     // Top agents
            Constraint::Length(3),  // Creators
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

        f.render_widget(HeroView::new(&screen.hero), chunks[0]);

        self.featured.render(
            f,
            chunks[1],
            &screen.featured,
            locale,
            self.focus == Focus::Featured,
        );
        self.agents.render(
            f,
            chunks[2],
            &screen.agents,
            locale,
            self.focus == Focus::Agents,
        );

        f.render_widget(CreatorsStripView::new(&screen.creators), chunks[3]);

        let status = StatusBarViewModel {
            current_route: current_route.map(str::to_string),
            message: self.message.clone(),
            focus_label: self.focus.label(),
        };
        f.render_widget(StatusBarView::new(&status), chunks[4]);
    }

    fn placeholder(&mut self, control: &'static str) -> StoreAction {
        self.message = Some(format!("{} is not available yet", control));
        StoreAction::Placeholder(control)
    }
}

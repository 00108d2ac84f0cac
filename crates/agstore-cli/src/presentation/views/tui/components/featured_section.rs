//! Featured Section Component
//!
//! Owns the carousel (slide index + animated viewport) for the featured
//! strip. Arrow keys and digit keys move the index; clicks on the arrows or
//! an indicator mark do the same. Enter emits the selected listing upward.

use std::time::{Duration, Instant};

use agstore_core::indicator::mark_at;
use agstore_core::{AnimatedViewport, Carousel, IndicatorMark, indicator_marks};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use num_format::Locale;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};
use tracing::debug;

use crate::presentation::view_models::FeaturedSlideViewModel;
use crate::presentation::views::tui::{FeaturedStripView, IndicatorStripView, section_border};

/// Actions the featured section emits to its parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeaturedAction {
    /// Open the listing's detail route
    Open { creator: String, slug: String },
}

pub struct FeaturedSectionComponent {
    carousel: Carousel<AnimatedViewport>,
    visible_cards: usize,
    /// Hit areas from the last render
    prev_area: Rect,
    next_area: Rect,
    indicator_area: Rect,
    /// Marks as last drawn; they narrow while the active one grows
    marks: Vec<IndicatorMark>,
}

impl FeaturedSectionComponent {
    pub fn new(len: usize, transition: Duration, visible_cards: usize) -> Self {
        Self {
            carousel: Carousel::new(len, AnimatedViewport::new()).with_transition(transition),
            visible_cards: visible_cards.max(1),
            prev_area: Rect::default(),
            next_area: Rect::default(),
            indicator_area: Rect::default(),
            marks: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.carousel.current()
    }

    pub fn is_animating(&self) -> bool {
        self.carousel.viewport().is_animating(Instant::now())
    }

    /// Handle keyboard input
    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        slides: &[FeaturedSlideViewModel],
    ) -> Option<FeaturedAction> {
        self.sync_len(slides.len());

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.carousel.retreat();
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.carousel.advance();
                None
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Err(e) = self.carousel.select(index) {
                    debug!("ignoring slide key: {}", e);
                }
                None
            }
            KeyCode::Enter => self.selected_action(slides),
            _ => None,
        }
    }

    /// Handle a mouse event. Returns `true` when it changed the slide.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, slides: &[FeaturedSlideViewModel]) -> bool {
        self.sync_len(slides.len());

        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        let position = Position::new(mouse.column, mouse.row);

        if self.prev_area.contains(position) {
            return self.carousel.retreat().is_some();
        }
        if self.next_area.contains(position) {
            return self.carousel.advance().is_some();
        }
        if self.indicator_area.contains(position) {
            if let Some(index) = mark_at(&self.marks, mouse.column - self.indicator_area.x) {
                return self.carousel.select(index).is_ok();
            }
        }
        false
    }

    /// Render the section. The slide count is re-checked against `slides` first.
    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        slides: &[FeaturedSlideViewModel],
        locale: Locale,
        focused: bool,
    ) {
        self.sync_len(slides.len());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(section_border(focused))
            .title(" Featured agents ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        if slides.is_empty() {
            self.prev_area = Rect::default();
            self.next_area = Rect::default();
            self.indicator_area = Rect::default();
            self.marks.clear();
            f.render_widget(
                Paragraph::new(Span::styled(
                    "No featured agents",
                    Style::default().add_modifier(Modifier::DIM),
                )),
                inner,
            );
            return;
        }

        let rows = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(inner);
        let now = Instant::now();
        let viewport = self.carousel.viewport();
        let start = viewport.position_at(now).round() as usize;
        let progress = viewport.progress_at(now);

        f.render_widget(
            FeaturedStripView::new(
                slides,
                start,
                self.visible_cards,
                self.carousel.current(),
                locale,
            ),
            rows[0],
        );

        let controls = Layout::horizontal([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(rows[1]);

        let arrow = Style::default().fg(Color::LightCyan);
        f.render_widget(Paragraph::new(Span::styled(" ◀ ", arrow)), controls[0]);
        f.render_widget(Paragraph::new(Span::styled(" ▶ ", arrow)), controls[2]);

        self.marks = indicator_marks(self.carousel.current(), self.carousel.len(), progress);
        let strip = IndicatorStripView::new(&self.marks);
        self.indicator_area = strip.strip_area(controls[1]);
        self.prev_area = controls[0];
        self.next_area = controls[2];
        f.render_widget(strip, controls[1]);
    }

    fn selected_action(&self, slides: &[FeaturedSlideViewModel]) -> Option<FeaturedAction> {
        let slide = slides.get(self.carousel.current()?)?;
        Some(FeaturedAction::Open {
            creator: slide.creator_name.clone(),
            slug: slide.slug.clone(),
        })
    }

    // Index Safety: the catalog may be replaced between frames
    fn sync_len(&mut self, len: usize) {
        if self.carousel.len() != len {
            self.carousel.resize(len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::catalog::present_slides;
    use agstore_runtime::sample_catalog;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn slides() -> Vec<FeaturedSlideViewModel> {
        present_slides(&sample_catalog().featured[..3])
    }

    fn component(len: usize) -> FeaturedSectionComponent {
        FeaturedSectionComponent::new(len, Duration::ZERO, 2)
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_arrow_keys_wrap_around() {
        let slides = slides();
        let mut section = component(slides.len());

        section.handle_input(key(KeyCode::Right), &slides);
        assert_eq!(section.current(), Some(1));
        section.handle_input(key(KeyCode::Right), &slides);
        section.handle_input(key(KeyCode::Right), &slides);
        assert_eq!(section.current(), Some(0));
        section.handle_input(key(KeyCode::Left), &slides);
        assert_eq!(section.current(), Some(2));
    }

    #[test]
    fn test_digit_selects_slide_and_ignores_out_of_range() {
        let slides = slides();
        let mut section = component(slides.len());

        section.handle_input(key(KeyCode::Char('3')), &slides);
        assert_eq!(section.current(), Some(2));
        section.handle_input(key(KeyCode::Char('9')), &slides);
        assert_eq!(section.current(), Some(2));
    }

    #[test]
    fn test_enter_opens_current_slide() {
        let slides = slides();
        let mut section = component(slides.len());
        section.handle_input(key(KeyCode::Char('2')), &slides);

        let action = section.handle_input(key(KeyCode::Enter), &slides);
        assert_eq!(
            action,
            Some(FeaturedAction::Open {
                creator: slides[1].creator_name.clone(),
                slug: slides[1].slug.clone(),
            })
        );
    }

    #[test]
    fn test_empty_section_is_inert() {
        let mut section = component(0);
        assert_eq!(section.handle_input(key(KeyCode::Right), &[]), None);
        assert_eq!(section.handle_input(key(KeyCode::Enter), &[]), None);
        assert_eq!(section.current(), None);

        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|f| section.render(f, f.area(), &[], Locale::en, true))
            .unwrap();
        let text = screen(&terminal);
        assert!(text.contains("No featured agents"));
        assert!(!text.contains('•'));
    }

    #[test]
    fn test_render_shows_window_and_indicators() {
        let slides = slides();
        let mut section = component(slides.len());
        section.handle_input(key(KeyCode::Right), &slides);

        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        terminal
            .draw(|f| section.render(f, f.area(), &slides, Locale::en, true))
            .unwrap();
        let text = screen(&terminal);

        // Window of two cards starting at slide 1
        assert!(text.contains(&slides[1].agent_name));
        assert!(text.contains(&slides[2].agent_name));
        assert!(!text.contains(&slides[0].agent_name));
        assert!(text.contains("• ━━━ •"));
    }

    #[test]
    fn test_click_on_indicator_selects_slide() {
        let slides = slides();
        let mut section = component(slides.len());

        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        terminal
            .draw(|f| section.render(f, f.area(), &slides, Locale::en, true))
            .unwrap();

        // Marks render as "━━━ • •"; the last dot is six cells in.
        let strip = section.indicator_area;
        assert!(section.handle_mouse(click(strip.x + 6, strip.y), &slides));
        assert_eq!(section.current(), Some(2));

        assert!(!section.handle_mouse(click(strip.x + 3, strip.y), &slides));
        assert_eq!(section.current(), Some(2));
    }

    #[test]
    fn test_click_during_transition_hits_drawn_mark() {
        let slides = slides();
        let mut section = FeaturedSectionComponent::new(slides.len(), Duration::from_secs(60), 2);
        section.handle_input(key(KeyCode::Right), &slides);
        assert!(section.is_animating());

        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        terminal
            .draw(|f| section.render(f, f.area(), &slides, Locale::en, true))
            .unwrap();

        // The active mark has barely started growing: three one-cell marks.
        let strip = section.indicator_area;
        assert_eq!(strip.width, 5);
        assert!(section.handle_mouse(click(strip.x + 4, strip.y), &slides));
        assert_eq!(section.current(), Some(2));
    }

    #[test]
    fn test_click_on_arrows_moves_slide() {
        let slides = slides();
        let mut section = component(slides.len());

        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        terminal
            .draw(|f| section.render(f, f.area(), &slides, Locale::en, true))
            .unwrap();

        let prev = section.prev_area;
        assert!(section.handle_mouse(click(prev.x + 1, prev.y), &slides));
        assert_eq!(section.current(), Some(2));

        let next = section.next_area;
        assert!(section.handle_mouse(click(next.x + 1, next.y), &slides));
        assert_eq!(section.current(), Some(0));
    }

    #[test]
    fn test_shrinking_catalog_clamps_index() {
        let slides = slides();
        let mut section = component(slides.len());
        section.handle_input(key(KeyCode::Char('3')), &slides);

        let fewer = &slides[..1];
        section.handle_input(key(KeyCode::Null), fewer);
        assert_eq!(section.current(), Some(0));
    }
}

//! TUI Renderer for the browse command
//!
//! Owns the terminal and the event loop. Input is routed to the
//! `StorePageComponent`; page actions are resolved here:
//! - `Navigate` pushes the detail route into the navigation sink
//! - `Placeholder` only logs
//! - `Quit` ends the loop and hands the history back to the caller

use std::io;
use std::time::Duration;

use agstore_core::{History, NavigationSink};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use num_format::Locale;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::presentation::view_models::StoreScreenViewModel;
use crate::presentation::views::tui::{StoreAction, StorePageComponent};

/// Poll interval while a slide transition is running
const ANIMATION_TICK: Duration = Duration::from_millis(50);
/// Poll interval when idle
const IDLE_TICK: Duration = Duration::from_millis(250);

pub struct TuiRenderer {
    screen: StoreScreenViewModel,
    page: StorePageComponent,
    history: History,
    locale: Locale,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(
        screen: StoreScreenViewModel,
        locale: Locale,
        transition: Duration,
        visible_cards: usize,
    ) -> Self {
        let page = StorePageComponent::new(&screen, transition, visible_cards);
        Self {
            screen,
            page,
            history: History::new(),
            locale,
            should_quit: false,
        }
    }

    /// Run the event loop until the user quits. Returns the visited routes.
    pub fn run(mut self) -> Result<History> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;

        result.map(|_| self.history)
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            let tick = if self.page.is_animating() {
                ANIMATION_TICK
            } else {
                IDLE_TICK
            };
            if event::poll(tick)? {
                self.handle_event(event::read()?);
            }
        }
        Ok(())
    }

    pub(crate) fn render(&mut self, f: &mut Frame) {
        self.page
            .render(f, &self.screen, self.history.current(), self.locale);
    }

    pub(crate) fn handle_event(&mut self, event: Event) {
        match event {
            // Only handle key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = self.page.handle_input(key, &self.screen) {
                    self.dispatch(action);
                }
            }
            Event::Mouse(mouse) => self.page.handle_mouse(mouse, &self.screen),
            Event::Resize(width, height) => debug!(width, height, "terminal resized"),
            _ => {}
        }
    }

    fn dispatch(&mut self, action: StoreAction) {
        match action {
            StoreAction::Navigate { creator, slug } => {
                self.history.open_agent(&creator, &slug);
            }
            StoreAction::Placeholder(control) => {
                info!(control, "placeholder control activated");
            }
            StoreAction::Quit => self.should_quit = true,
        }
    }

    pub(crate) fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_store_screen;
    use agstore_runtime::sample_catalog;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn renderer() -> TuiRenderer {
        let screen = present_store_screen(&sample_catalog());
        TuiRenderer::new(screen, Locale::en, Duration::ZERO, 3)
    }

    #[test]
    fn test_enter_records_route_in_history() {
        let mut tui = renderer();
        tui.handle_event(press(KeyCode::Enter));

        assert_eq!(
            tui.history().current(),
            Some("/store/agent/WordCraft AI/seo-optimizer-pro")
        );
        assert_eq!(tui.history().len(), 1);
    }

    #[test]
    fn test_wrap_then_open_last_slide() {
        let mut tui = renderer();
        tui.handle_event(press(KeyCode::Left));
        tui.handle_event(press(KeyCode::Enter));

        assert_eq!(
            tui.history().current(),
            Some("/store/agent/Notably/meeting-scribe")
        );
    }

    #[test]
    fn test_placeholder_does_not_navigate() {
        let mut tui = renderer();
        tui.handle_event(press(KeyCode::Char('/')));
        assert!(tui.history().is_empty());
        assert!(!tui.should_quit());
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut tui = renderer();
        tui.handle_event(press(KeyCode::Char('q')));
        assert!(tui.should_quit());
    }

    #[test]
    fn test_status_bar_shows_last_route() {
        let mut tui = renderer();
        tui.handle_event(press(KeyCode::Char('2')));
        tui.handle_event(press(KeyCode::Enter));

        let mut terminal = Terminal::new(TestBackend::new(120, 34)).unwrap();
        terminal.draw(|f| tui.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let text: String = buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>() + "\n")
            .collect();
        assert!(text.contains("/store/agent/Mailwise Labs/inbox-zero"));
    }
}

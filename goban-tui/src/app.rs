use std::io;

use goban::{EmptyHistory, GameRecord, History, NavEvent, Navigator, Transition};
use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout},
    text::Line,
    DefaultTerminal, Frame,
};
use tracing::{debug, info};

use crate::{
    board::BoardView,
    config::{Glyphs, ReplayConfig},
};

const HELP: &str = "←/k previous · →/j next · q quit";

pub struct App {
    record: GameRecord,
    navigator: Navigator,
    glyphs: Glyphs,
    board_view: BoardView,
}

impl App {
    pub fn new(
        record: GameRecord,
        history: History,
        config: ReplayConfig,
    ) -> Result<Self, EmptyHistory> {
        let navigator = Navigator::new(history, config.boundary)?;
        let mut app = Self {
            record,
            navigator,
            glyphs: config.glyphs,
            board_view: BoardView::default(),
        };
        app.on_state_change();
        Ok(app)
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        info!(turns = self.navigator.len(), "starting viewer");
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            let Some(nav_event) = self.update()? else {
                continue;
            };
            match self.navigator.handle(nav_event) {
                Transition::Exit => break,
                Transition::Moved(_) => self.on_state_change(),
                Transition::Stay => {}
            }
        }
        info!(cursor = self.navigator.cursor(), "leaving viewer");
        Ok(())
    }

    /// Blocks until the next terminal event and translates it.
    pub fn update(&mut self) -> io::Result<Option<NavEvent>> {
        let event = event::read()?;
        let nav_event = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => key_to_event(key.code),
            _ => None,
        };
        if let Some(nav_event) = nav_event {
            debug!(?nav_event, "key pressed");
        }
        Ok(nav_event)
    }

    fn on_state_change(&mut self) {
        self.board_view
            .on_state_change(&self.navigator, &self.record, &self.glyphs);
    }

    fn draw(&self, frame: &mut Frame) {
        let vertical = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]);
        let [board, help] = vertical.areas(frame.area());
        frame.render_widget(self.board_view.draw(), board);
        frame.render_widget(Line::raw(HELP).centered(), help);
    }
}

pub fn key_to_event(code: KeyCode) -> Option<NavEvent> {
    match code {
        KeyCode::Left | KeyCode::Char('k') => Some(NavEvent::Previous),
        KeyCode::Right | KeyCode::Char('j') => Some(NavEvent::Next),
        KeyCode::Char('q' | 'c') | KeyCode::Esc => Some(NavEvent::Exit),
        _ => None,
    }
}

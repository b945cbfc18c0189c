//! Main TUI application state and logic

use crate::session::{LineKind, Outcome, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused (for scrolling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Console,
    Types,
    Layout,
}

impl FocusedPane {
    /// Move focus to the next pane (console -> types -> layout)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Console => FocusedPane::Types,
            FocusedPane::Types => FocusedPane::Layout,
            FocusedPane::Layout => FocusedPane::Console,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Console => FocusedPane::Layout,
            FocusedPane::Types => FocusedPane::Console,
            FocusedPane::Layout => FocusedPane::Types,
        }
    }
}

/// Lines scrolled per PageUp/PageDown press
const SCROLL_STEP: usize = 5;

/// The main application state
pub struct App {
    /// The session driving the registry and transcript
    pub session: Session,

    /// Current content of the command input line
    pub input: String,

    /// Submitted commands, oldest first
    pub history: Vec<String>,

    /// Position while browsing history (None = editing a fresh line)
    pub history_index: Option<usize>,

    /// Saved fresh line while browsing history
    draft: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub console_scroll: usize,
    pub types_scroll: usize,
    pub layout_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message came from an error line
    pub last_was_error: bool,

    /// Interactive input line counter (script preload has its own numbering)
    line_no: usize,
}

impl App {
    /// Create a new app around a (possibly script-preloaded) session
    pub fn new(session: Session) -> Self {
        App {
            session,
            input: String::new(),
            history: Vec::new(),
            history_index: None,
            draft: String::new(),
            focused_pane: FocusedPane::Console,
            console_scroll: usize::MAX, // clamped to the bottom on first render
            types_scroll: 0,
            layout_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_was_error: false,
            line_no: 0,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, then the input line, then the status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let pane_area = main_chunks[0];
        let input_area = main_chunks[1];
        let status_area = main_chunks[2];

        // Left column: console; right column: types over layout
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[1]);

        super::panes::render_console_pane(
            frame,
            columns[0],
            self.session.transcript(),
            self.focused_pane == FocusedPane::Console,
            &mut self.console_scroll,
        );

        super::panes::render_types_pane(
            frame,
            right_rows[0],
            self.session.registry(),
            self.focused_pane == FocusedPane::Types,
            &mut self.types_scroll,
        );

        super::panes::render_layout_pane(
            frame,
            right_rows[1],
            self.session.last_layout(),
            self.session.word_size(),
            self.focused_pane == FocusedPane::Layout,
            &mut self.layout_scroll,
        );

        super::panes::render_input_line(frame, input_area, &self.input);

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.session.word_size(),
            self.session.registry().len(),
            self.last_was_error,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Up => self.history_prev(),
            KeyCode::Down => self.history_next(),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll_mut();
                *scroll = scroll.saturating_sub(SCROLL_STEP);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll_mut();
                *scroll = scroll.saturating_add(SCROLL_STEP);
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn focused_scroll_mut(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Console => &mut self.console_scroll,
            FocusedPane::Types => &mut self.types_scroll,
            FocusedPane::Layout => &mut self.layout_scroll,
        }
    }

    /// Submit the current input line to the session
    fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        self.history_index = None;
        self.draft.clear();

        if line.trim().is_empty() {
            return;
        }
        self.history.push(line.clone());

        self.line_no += 1;
        let outcome = self.session.run_line(self.line_no, &line);

        // Follow the transcript tail and surface the result in the status bar
        self.console_scroll = usize::MAX;
        if let Some(last) = self.session.transcript().last() {
            self.status_message = last.text.clone();
            self.last_was_error = last.kind == LineKind::Error;
        }

        if outcome == Outcome::Quit {
            self.should_quit = true;
        }
    }

    fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match self.history_index {
            None => {
                self.draft = self.input.clone();
                self.history_index = Some(self.history.len() - 1);
            }
            Some(0) => {}
            Some(i) => self.history_index = Some(i - 1),
        }
        if let Some(i) = self.history_index {
            self.input = self.history[i].clone();
        }
    }

    fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(i) if i + 1 < self.history.len() => {
                self.history_index = Some(i + 1);
                self.input = self.history[i + 1].clone();
            }
            Some(_) => {
                self.history_index = None;
                self.input = std::mem::take(&mut self.draft);
            }
        }
    }
}

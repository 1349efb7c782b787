//! TUI application state and logic

use crate::core::{Index, Space};
use crate::navigation::{Entry, Window, span};
use crate::search::{Direction, SearchConfig, SearchController, uniform_below};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use num_traits::Zero;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Rows taken by the header, input box, status bar and list borders
const CHROME_ROWS: u16 = 11;

/// Application state
pub struct App {
    pub session: SearchController,
    /// Index shown in the first list row
    pub top: Index,
    /// Number of list rows that fit on screen
    pub rows: usize,
    pub input_mode: InputMode,
    pub query: String,
    /// Query repeated by `n` and `N`
    pub last_query: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(config: &SearchConfig) -> Self {
        // Separate stream from the session's random search
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ 0x5eed),
            None => StdRng::from_os_rng(),
        };

        Self {
            session: SearchController::new(config),
            top: Index::zero(),
            rows: 20,
            input_mode: InputMode::Browse,
            query: String::new(),
            last_query: String::new(),
            messages: vec![Message {
                text: "Press / to search, j/k to step, r for a random word".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            rng,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Entry {
        self.session.current()
    }

    /// The rows currently on screen, starting at `top`
    #[must_use]
    pub fn view(&self) -> Window {
        span(&self.top, self.rows).unwrap_or_default()
    }

    /// Visible rows from the current entry downward
    fn displayed_from_current(&self) -> Window {
        let current = &self.current().index;
        let view = self.view();
        match view.iter().position(|entry| entry.index == *current) {
            Some(offset) => view.into_iter().skip(offset).collect(),
            None => span(current, self.rows).unwrap_or_default(),
        }
    }

    /// Resize the list and keep the current entry visible
    pub fn set_rows(&mut self, rows: usize) {
        self.rows = rows.max(1);
        self.follow();
    }

    /// Scroll so the current entry is on screen
    fn follow(&mut self) {
        let current = self.current().index.clone();
        if current < self.top {
            self.top = current;
        } else if &current - &self.top >= Index::from(self.rows) {
            self.top = current - (self.rows - 1);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn step_next(&mut self) {
        if self.session.step_next().is_none() {
            self.add_message("Already at the last word", MessageStyle::Error);
        }
        self.follow();
    }

    pub fn step_previous(&mut self) {
        if self.session.step_previous().is_none() {
            self.add_message("Already at the first word", MessageStyle::Error);
        }
        self.follow();
    }

    fn jump(&mut self, index: Index) {
        if let Err(err) = self.session.jump_to_index(index) {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
        self.follow();
    }

    pub fn page_down(&mut self) {
        let last = Space::global().last();
        let target = (&self.current().index + self.rows).min(last);
        self.jump(target);
    }

    pub fn page_up(&mut self) {
        let current = &self.current().index;
        let rows = Index::from(self.rows);
        let target = if *current > rows {
            current - rows
        } else {
            Index::zero()
        };
        self.jump(target);
    }

    pub fn jump_first(&mut self) {
        self.jump(Index::zero());
    }

    pub fn jump_last(&mut self) {
        self.jump(Space::global().last());
    }

    pub fn jump_random(&mut self) {
        let index = uniform_below(&mut self.rng, Space::global().total());
        self.jump(index);
    }

    /// Jump to the literal word for the query being typed
    fn jump_to_query(&mut self) {
        if self.query.is_empty() {
            return;
        }
        let query = self.query.clone();
        if let Err(err) = self.session.jump_to_literal(&query) {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
        self.follow();
    }

    /// Search `query` from the current entry
    pub fn search(&mut self, query: &str, direction: Direction) {
        if query.is_empty() {
            self.add_message("Nothing to search for", MessageStyle::Error);
            return;
        }
        let displayed = self.displayed_from_current();
        let query = query.to_string();
        match self.session.search(&query, direction, &displayed, false) {
            Some(entry) => {
                self.add_message(
                    &format!("Found '{query}' {direction}: {}", entry.word),
                    MessageStyle::Success,
                );
            }
            None => {
                self.add_message(
                    &format!("No '{query}' found {direction}"),
                    MessageStyle::Error,
                );
            }
        }
        self.last_query = query;
        self.follow();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Browse => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Down | KeyCode::Char('j') => self.step_next(),
                KeyCode::Up | KeyCode::Char('k') => self.step_previous(),
                KeyCode::PageDown => self.page_down(),
                KeyCode::PageUp => self.page_up(),
                KeyCode::Home => self.jump_first(),
                KeyCode::End => self.jump_last(),
                KeyCode::Char('r') => self.jump_random(),
                KeyCode::Char('/') => {
                    self.input_mode = InputMode::Search;
                    self.query.clear();
                }
                KeyCode::Char('n') => {
                    let query = self.last_query.clone();
                    self.search(&query, Direction::Higher);
                }
                KeyCode::Char('N') => {
                    let query = self.last_query.clone();
                    self.search(&query, Direction::Lower);
                }
                _ => {}
            },
            InputMode::Search => match key.code {
                KeyCode::Esc => self.input_mode = InputMode::Browse,
                KeyCode::Enter | KeyCode::Down => {
                    let query = self.query.clone();
                    self.search(&query, Direction::Higher);
                }
                KeyCode::Up => {
                    let query = self.query.clone();
                    self.search(&query, Direction::Lower);
                }
                KeyCode::Backspace => {
                    self.query.pop();
                    self.jump_to_query();
                }
                KeyCode::Char(c) => {
                    self.query.push(c);
                    self.jump_to_query();
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let height = terminal.size()?.height;
        app.set_rows(usize::from(height.saturating_sub(CHROME_ROWS)));
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

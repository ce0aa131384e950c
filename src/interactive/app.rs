//! TUI application state and event loop

use crate::core::Word;
use crate::game::{GameSession, GameStatus, Key, RevealTimer, SessionError};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Poll timeout while no reveal deadline is armed
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub session: GameSession,
    reveal: RevealTimer,
    pub should_quit: bool,
}

impl App {
    /// Create the app with a fresh game session
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyWordPool`] if `pool` is empty.
    pub fn new(pool: Vec<Word>, rng: StdRng) -> Result<Self, SessionError> {
        Ok(Self {
            session: GameSession::new(pool, rng)?,
            reveal: RevealTimer::new(),
            should_quit: false,
        })
    }

    /// Handle a physical key event from crossterm
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if self.session.status() != GameStatus::Playing => {
                self.new_game();
            }
            KeyCode::Enter => self.press(Key::Enter, now),
            KeyCode::Backspace => self.press(Key::Backspace, now),
            KeyCode::Char(ch) => {
                if let Some(routed) = Key::from_char(ch) {
                    self.press(routed, now);
                }
            }
            _ => {}
        }
    }

    /// Route a normalized key into the session
    ///
    /// Arms the reveal timer when a submission starts a new staged reveal.
    pub fn press(&mut self, key: Key, now: Instant) {
        let generation_before = self.session.generation();
        self.session.handle_key(key);

        // A generation bump means a row was submitted; the arm replaces any
        // deadline left over from the previous row
        if self.session.generation() != generation_before && self.session.is_revealing() {
            self.reveal.arm(self.session.generation(), now);
        }
    }

    /// Advance the staged reveal if its deadline has passed
    pub fn on_tick(&mut self, now: Instant) {
        if self.reveal.fire(self.session.generation(), now) {
            self.session.advance_reveal();
            if self.session.is_revealing() {
                self.reveal.arm(self.session.generation(), now);
            }
        }
    }

    /// Start a fresh play-through
    pub fn new_game(&mut self) {
        self.reveal.cancel();
        self.session.reset();
    }

    /// Event-loop poll timeout: the next reveal deadline, or an idle default
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.reveal.due_in(now).unwrap_or(IDLE_POLL)
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

    // Run app
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
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key_event(key, Instant::now());
        }

        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

//! # knowledge-quiz
//!
//! A terminal multiple-choice quiz with a results screen.
//!
//! The quiz and results screens are addressed by URL-style routes and the
//! quiz hands its answers to the results screen through the `ans` query
//! parameter, e.g. `/result?ans=%5B%22Meow-Meow%22%2Cnull%5D`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use knowledge_quiz::{Quiz, QuizError, QuizOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::new(QuizOptions::default())?;
//!     quiz.run().await
//! }
//! ```

mod app;
mod config;
pub mod cue;
mod data;
mod error;
pub mod logging;
mod models;
pub mod navigation;
pub mod quiz;
pub mod results;
pub mod terminal;
mod ui;

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use tracing::info;

pub use app::{App, QuizScreen, ResultsScreen, Screen};
pub use config::QuizOptions;
pub use data::{builtin_bank, builtin_questions};
pub use error::{BankError, QuizError, RouteError};
pub use models::{Question, QuestionBank};
pub use navigation::Route;

/// Redraw interval; also drives the confetti.
const FRAME_INTERVAL: Duration = Duration::from_millis(20);

/// A quiz session that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a session on the built-in questions.
    ///
    /// Must be called inside a tokio runtime: starting on a results route
    /// mounts the results screen, which starts its timers immediately.
    pub fn new(options: QuizOptions) -> Result<Self, QuizError> {
        Ok(Self {
            app: App::new(&options)?,
        })
    }

    /// Run the quiz in the terminal.
    ///
    /// This takes over the terminal, displays the quiz UI, and returns when
    /// the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        let result = run_event_loop(guard.terminal_mut(), &mut self.app).await;
        drop(guard);
        info!(route = %self.app.route(), "quiz closed");
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
) -> Result<(), QuizError> {
    let mut events = EventStream::new();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            _ = frames.tick() => app.on_frame(),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if handle_input(app, key.code) {
                        break;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(app.screen(), Screen::Results(_)) {
        handle_result_input(app, key)
    } else {
        handle_quiz_input(app, key)
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    let Screen::Quiz(quiz) = app.screen_mut() else {
        return false;
    };

    let mut handoff = None;
    match key {
        KeyCode::Up | KeyCode::Char('k') => quiz.focus_previous(),
        KeyCode::Down | KeyCode::Char('j') => quiz.focus_next(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            quiz.select_focused();
        }
        KeyCode::Char(digit @ '1'..='9') => {
            quiz.select(digit as usize - '1' as usize);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if quiz.controller().is_last() {
                handoff = quiz.submit();
            } else {
                quiz.next();
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            quiz.previous();
        }
        KeyCode::Char('s') | KeyCode::Char('S') => handoff = quiz.submit(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }

    if let Some(route) = handoff {
        app.follow(route);
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

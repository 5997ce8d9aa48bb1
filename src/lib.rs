//! # quiz-game
//!
//! A terminal quiz game backed by the quizzer HTTP API.
//!
//! Questions come from `GET /api/random-question` and answers are checked
//! with `GET /api/question/{id}/answer/{index}`. The player moves through
//! the choices with the arrow keys, answers with enter and quits with `q`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_game::{GameError, QuizGame};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), GameError> {
//!     let game = QuizGame::new("http://127.0.0.1:5000/api")?;
//!     let score = game.run().await?;
//!     println!("Final score: {}", score);
//!     Ok(())
//! }
//! ```

mod app;
pub mod client;
pub mod models;
pub mod protocol;
pub mod terminal;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub use app::{App, Pending};
pub use client::{ClientError, Outcome, QuizClient, Request, Worker, WorkerStopped};
pub use models::{GameState, MalformedQuestion, Question};

/// How long the end screen stays up before the program exits.
pub const GAME_OVER_DELAY: Duration = Duration::from_secs(3);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for game operations.
#[derive(Debug)]
pub enum GameError {
    /// A call to the quizzer API failed.
    Client(ClientError),
    /// IO error while driving the terminal.
    Io(io::Error),
    /// The network worker went away mid-game.
    WorkerStopped,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::Client(e) => write!(f, "{}", e),
            GameError::Io(e) => write!(f, "IO error: {}", e),
            GameError::WorkerStopped => write!(f, "{}", WorkerStopped),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Client(e) => Some(e),
            GameError::Io(e) => Some(e),
            GameError::WorkerStopped => None,
        }
    }
}

impl From<ClientError> for GameError {
    fn from(err: ClientError) -> Self {
        GameError::Client(err)
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        GameError::Io(err)
    }
}

impl From<WorkerStopped> for GameError {
    fn from(_: WorkerStopped) -> Self {
        GameError::WorkerStopped
    }
}

/// Player input, decoupled from the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Down,
    Up,
    Confirm,
}

impl Command {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        // Raw mode swallows SIGINT; treat ctrl-c like closing the window.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::Down | KeyCode::Char('j') => Some(Command::Down),
            KeyCode::Up | KeyCode::Char('k') => Some(Command::Up),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Confirm),
            _ => None,
        }
    }
}

/// A quiz game session against one quizzer API.
pub struct QuizGame {
    client: QuizClient,
}

impl QuizGame {
    /// Create a game for the API rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, GameError> {
        Ok(Self::with_client(QuizClient::new(base_url)?))
    }

    pub fn with_client(client: QuizClient) -> Self {
        Self { client }
    }

    /// Fetch the first question, then run the game in the terminal until the
    /// player quits. Returns the final score.
    ///
    /// Any API failure ends the game immediately with that error; the
    /// terminal is restored before returning either way.
    pub async fn run(self) -> Result<u32, GameError> {
        let question = self.client.fetch_random_question().await?;
        let mut app = App::new(question);
        let mut worker = Worker::spawn(self.client);

        let mut session = terminal::Session::start()?;
        run_event_loop(&mut session, &mut app, &mut worker).await?;

        tracing::info!(score = app.score(), "game over");
        session.draw(|frame| ui::render(frame, &app))?;
        tokio::time::sleep(GAME_OVER_DELAY).await;

        Ok(app.score())
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    worker: &mut Worker,
) -> Result<(), GameError> {
    while !app.is_over() {
        while let Some(outcome) = worker.try_next()? {
            if let Some(request) = app.apply(outcome)? {
                worker.submit(request)?;
            }
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(command) = Command::from_key(key) {
                tracing::debug!(?command, "input");
                if let Some(request) = handle_command(app, command) {
                    worker.submit(request)?;
                }
            }
        }
    }

    Ok(())
}

/// Apply a command to the game. Returns the request it triggers, if any.
pub fn handle_command(app: &mut App, command: Command) -> Option<Request> {
    match command {
        Command::Quit => {
            app.quit();
            None
        }
        Command::Down => {
            app.select_next_option();
            None
        }
        Command::Up => {
            app.select_previous_option();
            None
        }
        Command::Confirm => app.submit_answer(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_app() -> App {
        let choices = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        App::new(Question::new("q1", "Pick one", choices, 1).unwrap())
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Command::from_key(key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(Command::from_key(key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(Command::from_key(key(KeyCode::Down)), Some(Command::Down));
        assert_eq!(Command::from_key(key(KeyCode::Char('j'))), Some(Command::Down));
        assert_eq!(Command::from_key(key(KeyCode::Up)), Some(Command::Up));
        assert_eq!(Command::from_key(key(KeyCode::Enter)), Some(Command::Confirm));
        assert_eq!(Command::from_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Command::from_key(ctrl_c), Some(Command::Quit));

        let ctrl_j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL);
        assert_eq!(Command::from_key(ctrl_j), None);
    }

    #[test]
    fn test_handle_command() {
        let mut app = sample_app();

        assert_eq!(handle_command(&mut app, Command::Down), None);
        assert_eq!(handle_command(&mut app, Command::Down), None);
        assert_eq!(handle_command(&mut app, Command::Up), None);
        assert_eq!(app.selected_option(), 1);

        assert_eq!(
            handle_command(&mut app, Command::Confirm),
            Some(Request::CheckAnswer {
                question_id: "q1".to_string(),
                selected_index: 1,
            })
        );

        assert_eq!(handle_command(&mut app, Command::Quit), None);
        assert!(app.is_over());
    }

    #[test]
    fn test_error_display() {
        let err = GameError::from(ClientError::BadRequest("no questions available".to_string()));
        assert_eq!(err.to_string(), "Bad request: no questions available");
        assert_eq!(
            GameError::from(WorkerStopped).to_string(),
            "Network worker stopped unexpectedly"
        );
    }
}

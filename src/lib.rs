//! # quiz-maker
//!
//! Author multiple-choice quizzes, share them as self-contained links and
//! take them in the terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_maker::{App, Config, FileStore, QuizError, QuizRepository};
//!
//! fn main() -> Result<(), QuizError> {
//!     let config = Config::from_env();
//!     let store = FileStore::in_dir(&config.data_dir)?;
//!     let mut app = App::new(QuizRepository::new(Box::new(store)), config.base_url);
//!
//!     quiz_maker::run(&mut app)
//! }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod models;
pub mod scoring;
pub mod session;
pub mod share;
pub mod stats;
pub mod storage;
pub mod terminal;
mod ui;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};

pub use app::App;
pub use config::Config;
pub use editor::{QuestionDraft, QuizDraft};
pub use error::{QuizError, Result, ShareError, StorageError, ValidationError};
pub use models::{Question, Quiz, QuizAttempt, QuizResult};
pub use share::{decode_quiz_data, encode_quiz_data, generate_shareable_link};
pub use storage::{FileStore, KeyValueStore, MemoryStore, QuizRepository};

/// How long to wait for input before redrawing the countdown.
const TICK_RATE: Duration = Duration::from_millis(200);

/// Run the app in the terminal until the user quits.
///
/// This takes over the terminal and restores it on return, also when the
/// event loop fails.
pub fn run(app: &mut App) -> Result<()> {
    let mut term = terminal::init()?;
    let result = run_event_loop(&mut term, app);
    terminal::restore()?;
    result
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll with a timeout so the countdown keeps moving
        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::handle_key(app, key) {
                        break;
                    }
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        app.on_tick(Instant::now());
        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

mod attempt;
mod question;
mod quiz;

pub use attempt::{QuizAttempt, QuizResult};
pub use question::{Question, DEFAULT_OPTION_COUNT};
pub use quiz::{Quiz, ANONYMOUS_AUTHOR};

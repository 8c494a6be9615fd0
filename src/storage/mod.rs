//! Persistence: key-value stores and the quiz repository built on them.

mod repository;
mod store;

pub use repository::{ATTEMPTS_STORAGE_KEY, QUIZ_STORAGE_KEY, QuizRepository, TEMP_QUIZ_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore, STORE_FILE_NAME};

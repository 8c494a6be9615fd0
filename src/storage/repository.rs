//! Quiz and attempt persistence on top of a [`KeyValueStore`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::StorageError;
use crate::models::{Quiz, QuizAttempt};

use super::store::{KeyValueStore, MemoryStore};

pub const QUIZ_STORAGE_KEY: &str = "quiz_maker_quizzes";
pub const ATTEMPTS_STORAGE_KEY: &str = "quiz_maker_attempts";
pub const TEMP_QUIZ_KEY: &str = "quiz_maker_temp_quiz";

/// Reads and writes quizzes and attempts.
///
/// `local` outlives the process; `session` holds the shared quiz currently
/// being taken and is dropped with the repository.
pub struct QuizRepository {
    local: Box<dyn KeyValueStore>,
    session: Box<dyn KeyValueStore>,
}

impl QuizRepository {
    pub fn new(local: Box<dyn KeyValueStore>) -> Self {
        Self {
            local,
            session: Box::new(MemoryStore::new()),
        }
    }

    /// Repository with nothing on disk.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn quizzes(&self) -> Result<Vec<Quiz>, StorageError> {
        read_list(self.local.as_ref(), QUIZ_STORAGE_KEY)
    }

    pub fn quiz_by_id(&self, id: &str) -> Result<Option<Quiz>, StorageError> {
        Ok(self.quizzes()?.into_iter().find(|quiz| quiz.id == id))
    }

    /// Insert `quiz`, replacing a stored quiz with the same id in place.
    pub fn save_quiz(&mut self, quiz: &Quiz) -> Result<(), StorageError> {
        let mut quizzes = self.quizzes()?;
        match quizzes.iter_mut().find(|existing| existing.id == quiz.id) {
            Some(existing) => *existing = quiz.clone(),
            None => quizzes.push(quiz.clone()),
        }
        write_json(self.local.as_mut(), QUIZ_STORAGE_KEY, &quizzes)?;
        info!(quiz_id = %quiz.id, title = %quiz.title, "quiz saved");
        Ok(())
    }

    /// Remove a quiz along with every attempt made on it.
    ///
    /// Returns `false` when no quiz had that id.
    pub fn delete_quiz(&mut self, id: &str) -> Result<bool, StorageError> {
        let mut quizzes = self.quizzes()?;
        let before = quizzes.len();
        quizzes.retain(|quiz| quiz.id != id);
        let removed = quizzes.len() != before;
        write_json(self.local.as_mut(), QUIZ_STORAGE_KEY, &quizzes)?;

        let mut attempts = self.attempts()?;
        let attempts_before = attempts.len();
        attempts.retain(|attempt| attempt.quiz_id != id);
        write_json(self.local.as_mut(), ATTEMPTS_STORAGE_KEY, &attempts)?;

        info!(
            quiz_id = %id,
            removed,
            attempts_removed = attempts_before - attempts.len(),
            "quiz deleted"
        );
        Ok(removed)
    }

    pub fn attempts(&self) -> Result<Vec<QuizAttempt>, StorageError> {
        read_list(self.local.as_ref(), ATTEMPTS_STORAGE_KEY)
    }

    pub fn attempts_for_quiz(&self, quiz_id: &str) -> Result<Vec<QuizAttempt>, StorageError> {
        let mut attempts = self.attempts()?;
        attempts.retain(|attempt| attempt.quiz_id == quiz_id);
        Ok(attempts)
    }

    pub fn save_attempt(&mut self, attempt: &QuizAttempt) -> Result<(), StorageError> {
        let mut attempts = self.attempts()?;
        attempts.push(attempt.clone());
        write_json(self.local.as_mut(), ATTEMPTS_STORAGE_KEY, &attempts)?;
        info!(
            quiz_id = %attempt.quiz_id,
            participant = %attempt.participant_name,
            score = attempt.score,
            "attempt saved"
        );
        Ok(())
    }

    /// Keep a decoded shared quiz for the duration of the session.
    pub fn save_temp_quiz(&mut self, quiz: &Quiz) -> Result<(), StorageError> {
        write_json(self.session.as_mut(), TEMP_QUIZ_KEY, quiz)
    }

    pub fn temp_quiz(&self) -> Result<Option<Quiz>, StorageError> {
        let Some(raw) = self.session.get(TEMP_QUIZ_KEY)? else {
            return Ok(None);
        };
        Ok(serde_json::from_str(&raw).ok())
    }

    pub fn clear_temp_quiz(&mut self) -> Result<(), StorageError> {
        self.session.remove(TEMP_QUIZ_KEY)
    }

    /// Look a quiz up among stored quizzes, then the session's shared quiz.
    pub fn resolve_quiz(&self, id: &str) -> Result<Option<Quiz>, StorageError> {
        if let Some(quiz) = self.quiz_by_id(id)? {
            return Ok(Some(quiz));
        }
        Ok(self.temp_quiz()?.filter(|quiz| quiz.id == id))
    }

    /// Save a shared quiz permanently.
    ///
    /// Returns `false` when a quiz with that id was already stored and has
    /// been overwritten.
    pub fn import_quiz(&mut self, quiz: &Quiz) -> Result<bool, StorageError> {
        let is_new = self.quiz_by_id(&quiz.id)?.is_none();
        self.save_quiz(quiz)?;
        Ok(is_new)
    }
}

fn read_list<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(err) => {
            warn!(key, error = %err, "stored list is unreadable, ignoring it");
            Ok(Vec::new())
        }
    }
}

fn write_json<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    debug!(key, bytes = json.len(), "writing key");
    store.set(key, json)
}

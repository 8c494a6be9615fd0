use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::percentage;

/// One participant's run through a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub id: String,
    pub quiz_id: String,
    pub participant_name: String,
    /// `None` marks a question left unanswered.
    pub answers: Vec<Option<usize>>,
    pub score: usize,
    pub completed_at: DateTime<Utc>,
    /// Seconds.
    pub time_taken: u64,
}

impl QuizAttempt {
    pub fn percentage(&self, total_questions: usize) -> u32 {
        percentage(self.score, total_questions)
    }
}

/// Outcome of scoring a set of answers. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub score: usize,
    pub total_questions: usize,
    pub percentage: u32,
    pub correct_answers: Vec<usize>,
    pub user_answers: Vec<Option<usize>>,
    pub time_taken: u64,
}

impl QuizResult {
    pub fn user_answer(&self, index: usize) -> Option<usize> {
        self.user_answers.get(index).copied().flatten()
    }

    pub fn is_correct(&self, index: usize) -> bool {
        let user = self.user_answer(index);
        user.is_some() && user == self.correct_answers.get(index).copied()
    }
}

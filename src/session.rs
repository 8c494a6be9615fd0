//! One participant taking one quiz.

use std::time::Instant;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::{Question, Quiz, QuizAttempt, QuizResult};
use crate::scoring::calculate_score;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the participant's name.
    NameEntry,
    Answering,
    Submitted,
}

pub struct TakeSession {
    quiz: Quiz,
    phase: Phase,
    participant_name: String,
    current: usize,
    answers: Vec<Option<usize>>,
    started_at: Option<Instant>,
}

impl TakeSession {
    pub fn new(quiz: Quiz) -> Self {
        let answers = vec![None; quiz.total_questions()];
        Self {
            quiz,
            phase: Phase::NameEntry,
            participant_name: String::new(),
            current: 0,
            answers,
            started_at: None,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn participant_name(&self) -> &str {
        &self.participant_name
    }

    /// Begin answering. The clock starts now.
    pub fn start(&mut self, name: &str, now: Instant) -> Result<(), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        self.participant_name = name.to_string();
        self.phase = Phase::Answering;
        self.started_at = Some(now);
        info!(quiz_id = %self.quiz.id, participant = %self.participant_name, "quiz started");
        Ok(())
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.current)
    }

    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(self.current).copied().flatten()
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn select_answer(&mut self, option_index: usize) {
        if self.phase != Phase::Answering {
            return;
        }
        let Some(option_count) = self.current_question().map(|q| q.options.len()) else {
            return;
        };
        if option_index < option_count {
            self.answers[self.current] = Some(option_index);
        }
    }

    pub fn next_question(&mut self) {
        if self.current + 1 < self.quiz.total_questions() {
            self.current += 1;
        }
    }

    pub fn previous_question(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn is_first_question(&self) -> bool {
        self.current == 0
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.quiz.total_questions()
    }

    /// Fraction of the way through the quiz, counting the current question.
    pub fn progress(&self) -> f64 {
        let total = self.quiz.total_questions();
        if total == 0 {
            return 0.0;
        }
        (self.current + 1) as f64 / total as f64
    }

    pub fn elapsed_secs(&self, now: Instant) -> u64 {
        self.started_at
            .map(|start| now.saturating_duration_since(start).as_secs())
            .unwrap_or(0)
    }

    /// Seconds left on the clock, for quizzes with a time limit.
    pub fn remaining(&self, now: Instant) -> Option<u64> {
        let limit = self.quiz.time_limit_secs()?;
        Some(limit.saturating_sub(self.elapsed_secs(now)))
    }

    /// Returns true when the time limit ran out and the quiz should be submitted.
    pub fn tick(&self, now: Instant) -> bool {
        self.phase == Phase::Answering && self.remaining(now) == Some(0)
    }

    /// Score the answers and build the attempt record.
    ///
    /// Only the first call yields a result; the session is closed afterwards.
    pub fn submit(&mut self, now: Instant) -> Option<(QuizAttempt, QuizResult)> {
        if self.phase == Phase::Submitted {
            return None;
        }
        self.phase = Phase::Submitted;

        let time_taken = self.elapsed_secs(now);
        let mut result = calculate_score(&self.answers, &self.quiz.correct_answers());
        result.time_taken = time_taken;

        let attempt = QuizAttempt {
            id: Uuid::new_v4().to_string(),
            quiz_id: self.quiz.id.clone(),
            participant_name: self.participant_name.clone(),
            answers: self.answers.clone(),
            score: result.score,
            completed_at: Utc::now(),
            time_taken,
        };

        info!(
            quiz_id = %self.quiz.id,
            participant = %self.participant_name,
            score = result.score,
            total = result.total_questions,
            time_taken,
            "quiz submitted"
        );
        Some((attempt, result))
    }

    /// Reset for another attempt, keeping the participant's name.
    pub fn restart(&mut self) {
        self.phase = Phase::NameEntry;
        self.current = 0;
        self.answers = vec![None; self.quiz.total_questions()];
        self.started_at = None;
    }
}

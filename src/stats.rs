//! Aggregated results shown on the dashboard and in the quiz list.

use std::collections::HashSet;

use crate::models::QuizAttempt;
use crate::scoring::percentage;

/// Number of attempts the dashboard lists.
pub const RECENT_ATTEMPTS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct QuizStats {
    pub total_attempts: usize,
    pub unique_participants: usize,
    /// Mean score, rounded to two decimals.
    pub average_score: f64,
    /// Mean seconds taken, rounded.
    pub average_time: u64,
    pub best_score: usize,
    pub average_percentage: u32,
}

impl QuizStats {
    pub fn from_attempts(attempts: &[QuizAttempt], total_questions: usize) -> Self {
        let total_attempts = attempts.len();
        if total_attempts == 0 {
            return Self {
                total_attempts,
                unique_participants: 0,
                average_score: 0.0,
                average_time: 0,
                best_score: 0,
                average_percentage: 0,
            };
        }

        let unique_participants = attempts
            .iter()
            .map(|a| a.participant_name.as_str())
            .collect::<HashSet<_>>()
            .len();

        let score_sum: usize = attempts.iter().map(|a| a.score).sum();
        let average_score = (score_sum as f64 / total_attempts as f64 * 100.0).round() / 100.0;

        let time_sum: u64 = attempts.iter().map(|a| a.time_taken).sum();
        let average_time = (time_sum as f64 / total_attempts as f64).round() as u64;

        let best_score = attempts.iter().map(|a| a.score).max().unwrap_or(0);

        let average_percentage = if total_questions == 0 {
            0
        } else {
            (average_score / total_questions as f64 * 100.0).round() as u32
        };

        Self {
            total_attempts,
            unique_participants,
            average_score,
            average_time,
            best_score,
            average_percentage,
        }
    }
}

/// Newest attempts first, at most `limit` of them.
pub fn recent_attempts(attempts: &[QuizAttempt], limit: usize) -> Vec<&QuizAttempt> {
    let mut sorted: Vec<&QuizAttempt> = attempts.iter().collect();
    sorted.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    sorted.truncate(limit);
    sorted
}

/// Share of attempts that got each question right, as percentages.
pub fn question_success_rates(attempts: &[QuizAttempt], correct_answers: &[usize]) -> Vec<u32> {
    correct_answers
        .iter()
        .enumerate()
        .map(|(index, correct)| {
            let right = attempts
                .iter()
                .filter(|a| a.answers.get(index).copied().flatten() == Some(*correct))
                .count();
            percentage(right, attempts.len())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn attempt(name: &str, score: usize, time_taken: u64, minutes_ago: i64) -> QuizAttempt {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        QuizAttempt {
            id: format!("{name}-{minutes_ago}"),
            quiz_id: "quiz".into(),
            participant_name: name.into(),
            answers: vec![Some(0), Some(1), None],
            score,
            completed_at: base - Duration::minutes(minutes_ago),
            time_taken,
        }
    }

    #[test]
    fn test_empty_stats_are_zero() {
        let stats = QuizStats::from_attempts(&[], 5);
        assert_eq!(stats.total_attempts, 0);
        assert_eq!(stats.average_score, 0.0);
        assert_eq!(stats.average_time, 0);
        assert_eq!(stats.best_score, 0);
        assert_eq!(stats.average_percentage, 0);
    }

    #[test]
    fn test_stats_aggregate() {
        let attempts = vec![
            attempt("ann", 3, 30, 5),
            attempt("bob", 1, 61, 4),
            attempt("ann", 2, 40, 3),
        ];
        let stats = QuizStats::from_attempts(&attempts, 3);
        assert_eq!(stats.total_attempts, 3);
        assert_eq!(stats.unique_participants, 2);
        assert_eq!(stats.average_score, 2.0);
        assert_eq!(stats.average_time, 44);
        assert_eq!(stats.best_score, 3);
        assert_eq!(stats.average_percentage, 67);
    }

    #[test]
    fn test_average_score_rounds_to_two_decimals() {
        let attempts = vec![
            attempt("a", 1, 0, 1),
            attempt("b", 1, 0, 2),
            attempt("c", 2, 0, 3),
        ];
        let stats = QuizStats::from_attempts(&attempts, 4);
        assert_eq!(stats.average_score, 1.33);
        assert_eq!(stats.average_percentage, 33);
    }

    #[test]
    fn test_recent_attempts_newest_first() {
        let attempts: Vec<_> = (0..15).map(|i| attempt("p", 1, 1, i)).collect();
        let recent = recent_attempts(&attempts, RECENT_ATTEMPTS_LIMIT);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].id, "p-0");
        assert_eq!(recent[9].id, "p-9");
    }

    #[test]
    fn test_question_success_rates() {
        let attempts = vec![attempt("a", 2, 0, 1), attempt("b", 2, 0, 2)];
        assert_eq!(question_success_rates(&attempts, &[0, 2, 1]), vec![100, 0, 0]);
        assert_eq!(question_success_rates(&[], &[0]), vec![0]);
    }
}

//! Scoring arithmetic and small formatting helpers shared by the UI and CLI.

use crate::models::QuizResult;

/// Rounded percentage of `score` out of `total`. Zero when there is nothing to score.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

/// Score `user_answers` against `correct_answers` position by position.
///
/// Missing and unanswered positions count as wrong. `time_taken` is left at
/// zero for the caller to fill in.
pub fn calculate_score(user_answers: &[Option<usize>], correct_answers: &[usize]) -> QuizResult {
    let score = correct_answers
        .iter()
        .enumerate()
        .filter(|(index, correct)| user_answers.get(*index).copied().flatten() == Some(**correct))
        .count();
    let total_questions = correct_answers.len();

    QuizResult {
        score,
        total_questions,
        percentage: percentage(score, total_questions),
        correct_answers: correct_answers.to_vec(),
        user_answers: user_answers.to_vec(),
        time_taken: 0,
    }
}

/// Format seconds as `MM:SS`.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Coarse grade used to color scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => Self::High,
            60..=79 => Self::Medium,
            _ => Self::Low,
        }
    }
}

pub fn score_message(percentage: u32) -> &'static str {
    match percentage {
        90.. => "Outstanding!",
        80..=89 => "Great job!",
        70..=79 => "Good work!",
        60..=69 => "Not bad!",
        _ => "Keep practicing!",
    }
}

/// Cut `text` to `max_length` characters and append `...` when it is longer.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_length).collect();
    format!("{}...", truncated.trim_end())
}

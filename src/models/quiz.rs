use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Question;

/// Author recorded on quizzes built locally.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// A titled collection of questions plus the flags that control how it is taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_author")]
    pub created_by: String,
    /// Time limit in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    #[serde(default)]
    pub show_correct_answers: bool,
    #[serde(default)]
    pub allow_retake: bool,
}

fn default_author() -> String {
    ANONYMOUS_AUTHOR.to_string()
}

impl Quiz {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: String::new(),
            questions,
            created_at: Utc::now(),
            created_by: default_author(),
            time_limit: None,
            show_correct_answers: true,
            allow_retake: true,
        }
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn correct_answers(&self) -> Vec<usize> {
        self.questions.iter().map(|q| q.correct_answer).collect()
    }

    /// Time limit in minutes. A limit of 0 means the quiz is untimed.
    pub fn time_limit_minutes(&self) -> Option<u32> {
        self.time_limit.filter(|minutes| *minutes > 0)
    }

    /// Time limit converted to seconds.
    pub fn time_limit_secs(&self) -> Option<u64> {
        self.time_limit_minutes().map(|minutes| u64::from(minutes) * 60)
    }
}

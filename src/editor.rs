//! Quiz authoring: the editable draft behind the create/edit form.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::{ANONYMOUS_AUTHOR, DEFAULT_OPTION_COUNT, Question, Quiz};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestionDraft {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

impl QuestionDraft {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question: String::new(),
            options: vec![String::new(); DEFAULT_OPTION_COUNT],
            correct_answer: 0,
            explanation: String::new(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.question.trim().is_empty() && self.options.iter().all(|o| !o.trim().is_empty())
    }

    fn to_question(&self) -> Question {
        let explanation = self.explanation.trim();
        Question {
            id: self.id.clone(),
            question: self.question.clone(),
            options: self.options.clone(),
            correct_answer: self.correct_answer,
            explanation: (!explanation.is_empty()).then(|| explanation.to_string()),
        }
    }
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Question> for QuestionDraft {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.clone(),
            question: question.question.clone(),
            options: question.options.clone(),
            correct_answer: question.correct_answer,
            explanation: question.explanation.clone().unwrap_or_default(),
        }
    }
}

/// A quiz under construction. Nothing is validated until [`QuizDraft::finish`].
///
/// Also the format of quiz files accepted by `quiz-maker create --from`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuizDraft {
    pub title: String,
    pub description: String,
    /// Minutes.
    pub time_limit: Option<u32>,
    pub show_correct_answers: bool,
    pub allow_retake: bool,
    pub questions: Vec<QuestionDraft>,
    /// Set when editing a stored quiz so saving replaces it.
    #[serde(skip)]
    existing: Option<(String, DateTime<Utc>, String)>,
}

impl Default for QuizDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            time_limit: None,
            show_correct_answers: true,
            allow_retake: true,
            questions: Vec::new(),
            existing: None,
        }
    }
}

impl QuizDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft that edits `quiz` in place when finished.
    pub fn from_quiz(quiz: &Quiz) -> Self {
        Self {
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            time_limit: quiz.time_limit_minutes(),
            show_correct_answers: quiz.show_correct_answers,
            allow_retake: quiz.allow_retake,
            questions: quiz.questions.iter().map(QuestionDraft::from).collect(),
            existing: Some((quiz.id.clone(), quiz.created_at, quiz.created_by.clone())),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.existing.is_some()
    }

    /// Append a blank question and return its index.
    pub fn add_question(&mut self) -> usize {
        self.questions.push(QuestionDraft::new());
        self.questions.len() - 1
    }

    pub fn delete_question(&mut self, question_id: &str) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != question_id);
        self.questions.len() != before
    }

    pub fn question_mut(&mut self, question_id: &str) -> Option<&mut QuestionDraft> {
        self.questions.iter_mut().find(|q| q.id == question_id)
    }

    pub fn update_question_text(&mut self, question_id: &str, text: impl Into<String>) {
        if let Some(question) = self.question_mut(question_id) {
            question.question = text.into();
        }
    }

    pub fn update_option(&mut self, question_id: &str, option_index: usize, value: impl Into<String>) {
        if let Some(option) = self
            .question_mut(question_id)
            .and_then(|q| q.options.get_mut(option_index))
        {
            *option = value.into();
        }
    }

    pub fn set_correct_answer(&mut self, question_id: &str, option_index: usize) {
        if let Some(question) = self.question_mut(question_id) {
            if option_index < question.options.len() {
                question.correct_answer = option_index;
            }
        }
    }

    pub fn update_explanation(&mut self, question_id: &str, text: impl Into<String>) {
        if let Some(question) = self.question_mut(question_id) {
            question.explanation = text.into();
        }
    }

    /// Set the limit from form input. Blank, zero or non-numeric input clears it.
    pub fn set_time_limit(&mut self, input: &str) {
        self.time_limit = input.trim().parse::<u32>().ok().filter(|minutes| *minutes > 0);
    }

    /// Validate the draft and build the quiz it describes.
    pub fn finish(&self, now: DateTime<Utc>) -> Result<Quiz, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.questions.is_empty() {
            return Err(ValidationError::NoQuestions);
        }
        if !self.questions.iter().all(QuestionDraft::is_complete) {
            return Err(ValidationError::IncompleteQuestions);
        }
        if self
            .questions
            .iter()
            .any(|q| q.correct_answer >= q.options.len())
        {
            return Err(ValidationError::InvalidCorrectAnswer);
        }

        let (id, created_at, created_by) = match &self.existing {
            Some((id, created_at, created_by)) => (id.clone(), *created_at, created_by.clone()),
            None => (Uuid::new_v4().to_string(), now, ANONYMOUS_AUTHOR.to_string()),
        };

        Ok(Quiz {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            questions: self.questions.iter().map(QuestionDraft::to_question).collect(),
            created_at,
            created_by,
            time_limit: self.time_limit.filter(|minutes| *minutes > 0),
            show_correct_answers: self.show_correct_answers,
            allow_retake: self.allow_retake,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> QuizDraft {
        let mut draft = QuizDraft::new();
        draft.title = "Colors".into();
        let index = draft.add_question();
        let id = draft.questions[index].id.clone();
        draft.update_question_text(&id, "Color of the sky?");
        for (i, text) in ["Blue", "Green", "Red", "Yellow"].iter().enumerate() {
            draft.update_option(&id, i, *text);
        }
        draft
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = QuizDraft::new();
        assert!(draft.show_correct_answers);
        assert!(draft.allow_retake);
        assert!(draft.time_limit.is_none());
        assert!(!draft.is_editing());
    }

    #[test]
    fn test_add_question_has_four_blank_options() {
        let mut draft = QuizDraft::new();
        let index = draft.add_question();
        let question = &draft.questions[index];
        assert_eq!(question.options.len(), 4);
        assert!(question.options.iter().all(String::is_empty));
        assert_eq!(question.correct_answer, 0);
    }

    #[test]
    fn test_finish_validation_order() {
        let mut draft = QuizDraft::new();
        assert_eq!(draft.finish(Utc::now()), Err(ValidationError::MissingTitle));

        draft.title = "   ".into();
        assert_eq!(draft.finish(Utc::now()), Err(ValidationError::MissingTitle));

        draft.title = "T".into();
        assert_eq!(draft.finish(Utc::now()), Err(ValidationError::NoQuestions));

        draft.add_question();
        assert_eq!(
            draft.finish(Utc::now()),
            Err(ValidationError::IncompleteQuestions)
        );
    }

    #[test]
    fn test_finish_rejects_blank_option() {
        let mut draft = complete_draft();
        let id = draft.questions[0].id.clone();
        draft.update_option(&id, 2, "  ");
        assert_eq!(
            draft.finish(Utc::now()),
            Err(ValidationError::IncompleteQuestions)
        );
    }

    #[test]
    fn test_finish_builds_quiz() {
        let mut draft = complete_draft();
        let id = draft.questions[0].id.clone();
        draft.set_correct_answer(&id, 0);
        draft.set_correct_answer(&id, 9);
        draft.set_time_limit("15");
        draft.allow_retake = false;

        let now = Utc::now();
        let quiz = draft.finish(now).unwrap();
        assert_eq!(quiz.title, "Colors");
        assert_eq!(quiz.created_by, "Anonymous");
        assert_eq!(quiz.created_at, now);
        assert_eq!(quiz.time_limit, Some(15));
        assert!(!quiz.allow_retake);
        assert_eq!(quiz.questions[0].correct_answer, 0);
        assert_eq!(quiz.questions[0].explanation, None);
    }

    #[test]
    fn test_set_time_limit_clears_on_bad_input() {
        let mut draft = QuizDraft::new();
        draft.set_time_limit("5");
        assert_eq!(draft.time_limit, Some(5));
        draft.set_time_limit("");
        assert_eq!(draft.time_limit, None);
        draft.set_time_limit("5");
        draft.set_time_limit("0");
        assert_eq!(draft.time_limit, None);
        draft.set_time_limit("abc");
        assert_eq!(draft.time_limit, None);
    }

    #[test]
    fn test_draft_from_json_file_format() {
        let json = r#"{
            "title": "From file",
            "timeLimit": 3,
            "questions": [
                {"question": "Pick b", "options": ["a", "b"], "correctAnswer": 1, "explanation": "b is b"}
            ]
        }"#;
        let draft: QuizDraft = serde_json::from_str(json).unwrap();
        assert!(draft.show_correct_answers);
        assert!(!draft.questions[0].id.is_empty());

        let quiz = draft.finish(Utc::now()).unwrap();
        assert_eq!(quiz.time_limit, Some(3));
        assert_eq!(quiz.questions[0].options.len(), 2);
        assert_eq!(quiz.questions[0].explanation.as_deref(), Some("b is b"));
    }

    #[test]
    fn test_zero_time_limit_in_file_is_untimed() {
        let json = r#"{
            "title": "Untimed",
            "timeLimit": 0,
            "questions": [
                {"question": "Pick a", "options": ["a", "b"], "correctAnswer": 0}
            ]
        }"#;
        let draft: QuizDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.time_limit, Some(0));

        let quiz = draft.finish(Utc::now()).unwrap();
        assert_eq!(quiz.time_limit, None);
    }

    #[test]
    fn test_finish_rejects_out_of_range_correct_answer() {
        let mut draft = complete_draft();
        draft.questions[0].correct_answer = 4;
        assert_eq!(
            draft.finish(Utc::now()),
            Err(ValidationError::InvalidCorrectAnswer)
        );
    }

    #[test]
    fn test_delete_question() {
        let mut draft = complete_draft();
        let id = draft.questions[0].id.clone();
        assert!(draft.delete_question(&id));
        assert!(!draft.delete_question(&id));
        assert!(draft.questions.is_empty());
    }

    #[test]
    fn test_edit_keeps_identity() {
        let original = complete_draft().finish(Utc::now()).unwrap();
        let mut draft = QuizDraft::from_quiz(&original);
        assert!(draft.is_editing());
        draft.title = "Colours".into();

        let edited = draft.finish(Utc::now()).unwrap();
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.created_at, original.created_at);
        assert_eq!(edited.title, "Colours");
    }
}

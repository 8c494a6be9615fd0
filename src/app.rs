use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{error, info, warn};

use crate::editor::QuizDraft;
use crate::error::QuizError;
use crate::models::{Quiz, QuizAttempt, QuizResult};
use crate::session::{Phase, TakeSession};
use crate::share::{decode_link, generate_shareable_link};
use crate::stats::QuizStats;
use crate::storage::QuizRepository;

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

pub const HOME_ITEMS: [&str; 4] = ["Create a quiz", "My quizzes", "Open a shared link", "Quit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    created_at: Instant,
}

/// A stored quiz with the figures shown next to it in the list.
#[derive(Debug, Clone)]
pub struct QuizSummary {
    pub quiz: Quiz,
    pub stats: QuizStats,
}

pub struct QuizListState {
    pub quizzes: Vec<QuizSummary>,
    pub selected: usize,
    /// Waiting for the user to confirm deleting the selected quiz.
    pub confirm_delete: bool,
}

impl QuizListState {
    pub fn selected_quiz(&self) -> Option<&Quiz> {
        self.quizzes.get(self.selected).map(|s| &s.quiz)
    }
}

/// One focusable input on the create/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Description,
    TimeLimit,
    ShowAnswers,
    AllowRetake,
    Question(usize),
    Option(usize, usize),
    Explanation(usize),
}

impl EditorField {
    pub fn question_index(self) -> Option<usize> {
        match self {
            Self::Question(q) | Self::Option(q, _) | Self::Explanation(q) => Some(q),
            _ => None,
        }
    }

    pub fn is_text(self) -> bool {
        !matches!(self, Self::ShowAnswers | Self::AllowRetake)
    }
}

pub struct EditorState {
    pub draft: QuizDraft,
    pub focus: usize,
    pub time_limit_input: String,
}

impl EditorState {
    pub fn new(draft: QuizDraft) -> Self {
        let time_limit_input = draft.time_limit.map(|m| m.to_string()).unwrap_or_default();
        Self {
            draft,
            focus: 0,
            time_limit_input,
        }
    }

    /// All inputs in display order.
    pub fn fields(&self) -> Vec<EditorField> {
        let mut fields = vec![
            EditorField::Title,
            EditorField::Description,
            EditorField::TimeLimit,
            EditorField::ShowAnswers,
            EditorField::AllowRetake,
        ];
        for (q, question) in self.draft.questions.iter().enumerate() {
            fields.push(EditorField::Question(q));
            fields.extend((0..question.options.len()).map(|o| EditorField::Option(q, o)));
            fields.push(EditorField::Explanation(q));
        }
        fields
    }

    pub fn focused(&self) -> EditorField {
        self.fields()
            .get(self.focus)
            .copied()
            .unwrap_or(EditorField::Title)
    }

    pub fn focus_next(&mut self) {
        let count = self.fields().len();
        self.focus = (self.focus + 1) % count;
    }

    pub fn focus_previous(&mut self) {
        let count = self.fields().len();
        self.focus = (self.focus + count - 1) % count;
    }

    fn focus_field(&mut self, field: EditorField) {
        if let Some(index) = self.fields().iter().position(|f| *f == field) {
            self.focus = index;
        }
    }

    fn text_mut(&mut self, field: EditorField) -> Option<&mut String> {
        match field {
            EditorField::Title => Some(&mut self.draft.title),
            EditorField::Description => Some(&mut self.draft.description),
            EditorField::TimeLimit => Some(&mut self.time_limit_input),
            EditorField::Question(q) => self.draft.questions.get_mut(q).map(|d| &mut d.question),
            EditorField::Option(q, o) => self
                .draft
                .questions
                .get_mut(q)
                .and_then(|d| d.options.get_mut(o)),
            EditorField::Explanation(q) => {
                self.draft.questions.get_mut(q).map(|d| &mut d.explanation)
            }
            EditorField::ShowAnswers | EditorField::AllowRetake => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let field = self.focused();
        if field == EditorField::TimeLimit && !c.is_ascii_digit() {
            return;
        }
        if let Some(text) = self.text_mut(field) {
            text.push(c);
        }
        if field == EditorField::TimeLimit {
            self.draft.set_time_limit(&self.time_limit_input);
        }
    }

    pub fn delete_char(&mut self) {
        let field = self.focused();
        if let Some(text) = self.text_mut(field) {
            text.pop();
        }
        if field == EditorField::TimeLimit {
            self.draft.set_time_limit(&self.time_limit_input);
        }
    }

    /// Toggle a checkbox, or mark the focused option as the correct answer.
    pub fn activate(&mut self) {
        match self.focused() {
            EditorField::ShowAnswers => {
                self.draft.show_correct_answers = !self.draft.show_correct_answers;
            }
            EditorField::AllowRetake => self.draft.allow_retake = !self.draft.allow_retake,
            EditorField::Option(q, o) => {
                if let Some(question) = self.draft.questions.get_mut(q) {
                    question.correct_answer = o;
                }
            }
            _ => {}
        }
    }

    pub fn add_question(&mut self) {
        let index = self.draft.add_question();
        self.focus_field(EditorField::Question(index));
    }

    /// Delete the question the focus is in.
    pub fn delete_focused_question(&mut self) {
        let Some(index) = self.focused().question_index() else {
            return;
        };
        let Some(id) = self.draft.questions.get(index).map(|q| q.id.clone()) else {
            return;
        };
        self.draft.delete_question(&id);
        let count = self.fields().len();
        self.focus = self.focus.min(count - 1);
    }
}

pub struct TakeState {
    pub session: TakeSession,
    pub name_input: String,
    /// Taken from a shared link rather than local storage.
    pub shared: bool,
}

pub struct ResultsState {
    pub quiz: Quiz,
    pub result: QuizResult,
    pub participant_name: String,
    pub scroll: u16,
    pub share_link: Option<String>,
}

pub struct DashboardState {
    pub quiz: Quiz,
    pub attempts: Vec<QuizAttempt>,
    pub stats: QuizStats,
    pub share_link: Option<String>,
    pub scroll: u16,
}

pub struct OpenSharedState {
    pub input: String,
}

pub enum Screen {
    Home { selected: usize },
    QuizList(QuizListState),
    Editor(EditorState),
    Take(TakeState),
    Results(ResultsState),
    Dashboard(DashboardState),
    OpenShared(OpenSharedState),
}

pub struct App {
    pub screen: Screen,
    repo: QuizRepository,
    base_url: String,
    notification: Option<Notification>,
    should_quit: bool,
}

impl App {
    pub fn new(repo: QuizRepository, base_url: impl Into<String>) -> Self {
        Self {
            screen: Screen::Home { selected: 0 },
            repo,
            base_url: base_url.into(),
            notification: None,
            should_quit: false,
        }
    }

    pub fn repo(&self) -> &QuizRepository {
        &self.repo
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notification = Some(Notification {
            message: message.into(),
            level,
            created_at: Instant::now(),
        });
    }

    fn report(&mut self, err: QuizError) {
        error!(error = %err, "operation failed");
        self.notify(NotificationLevel::Error, err.to_string());
    }

    /// Advance timers: expire notifications and auto-submit timed-out quizzes.
    pub fn on_tick(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.created_at) >= NOTIFICATION_TTL)
        {
            self.notification = None;
        }

        let timed_out = matches!(&self.screen, Screen::Take(take) if take.session.tick(now));
        if timed_out {
            info!("time limit reached");
            self.notify(NotificationLevel::Info, "Time's up! Your answers were submitted.");
            self.submit_quiz(now);
        }
    }

    pub fn go_home(&mut self) {
        self.leave_take_screen();
        self.screen = Screen::Home { selected: 0 };
    }

    pub fn open_quiz_list(&mut self) {
        self.leave_take_screen();
        match self.load_summaries() {
            Ok(quizzes) => {
                self.screen = Screen::QuizList(QuizListState {
                    quizzes,
                    selected: 0,
                    confirm_delete: false,
                });
            }
            Err(err) => self.report(err),
        }
    }

    fn load_summaries(&self) -> Result<Vec<QuizSummary>, QuizError> {
        let attempts = self.repo.attempts()?;
        let summaries = self
            .repo
            .quizzes()?
            .into_iter()
            .map(|quiz| {
                let for_quiz: Vec<_> = attempts
                    .iter()
                    .filter(|a| a.quiz_id == quiz.id)
                    .cloned()
                    .collect();
                let stats = QuizStats::from_attempts(&for_quiz, quiz.total_questions());
                QuizSummary { quiz, stats }
            })
            .collect();
        Ok(summaries)
    }

    pub fn open_editor(&mut self, quiz_id: Option<&str>) {
        let draft = match quiz_id {
            None => QuizDraft::new(),
            Some(id) => match self.repo.quiz_by_id(id) {
                Ok(Some(quiz)) => QuizDraft::from_quiz(&quiz),
                Ok(None) => return self.report(QuizError::NotFound(id.to_string())),
                Err(err) => return self.report(err.into()),
            },
        };
        self.screen = Screen::Editor(EditorState::new(draft));
    }

    /// Validate and store the quiz being edited, then show the list.
    pub fn save_editor(&mut self) {
        let Screen::Editor(editor) = &self.screen else {
            return;
        };
        let editing = editor.draft.is_editing();
        let quiz = match editor.draft.finish(Utc::now()) {
            Ok(quiz) => quiz,
            Err(err) => {
                warn!(error = %err, "quiz draft rejected");
                return self.notify(NotificationLevel::Error, err.to_string());
            }
        };

        if let Err(err) = self.repo.save_quiz(&quiz) {
            return self.report(err.into());
        }
        let message = if editing {
            "Quiz updated successfully!"
        } else {
            "Quiz created successfully!"
        };
        self.open_quiz_list();
        self.notify(NotificationLevel::Success, message);
    }

    /// Start taking a stored quiz, or the shared quiz held for this session.
    pub fn open_take(&mut self, quiz_id: &str) {
        let stored = match self.repo.quiz_by_id(quiz_id) {
            Ok(stored) => stored,
            Err(err) => return self.report(err.into()),
        };
        let (quiz, shared) = match stored {
            Some(quiz) => (quiz, false),
            None => match self.repo.resolve_quiz(quiz_id) {
                Ok(Some(quiz)) => (quiz, true),
                Ok(None) => {
                    self.go_home();
                    return self.notify(
                        NotificationLevel::Error,
                        "Quiz not found or the link is invalid.",
                    );
                }
                Err(err) => return self.report(err.into()),
            },
        };
        self.start_take(quiz, shared, String::new());
    }

    fn start_take(&mut self, quiz: Quiz, shared: bool, name_input: String) {
        self.screen = Screen::Take(TakeState {
            session: TakeSession::new(quiz),
            name_input,
            shared,
        });
    }

    pub fn open_shared_prompt(&mut self) {
        self.screen = Screen::OpenShared(OpenSharedState {
            input: String::new(),
        });
    }

    /// Decode a pasted link and take the quiz it carries.
    pub fn open_shared_link(&mut self, input: &str) {
        let quiz = match decode_link(input) {
            Ok(quiz) => quiz,
            Err(err) => {
                self.go_home();
                return self.report(err.into());
            }
        };
        info!(quiz_id = %quiz.id, title = %quiz.title, "opened shared quiz");
        if let Err(err) = self.repo.save_temp_quiz(&quiz) {
            return self.report(err.into());
        }
        self.open_take(&quiz.id);
    }

    /// Keep the shared quiz on the take screen in local storage.
    pub fn import_current_shared(&mut self) {
        let Screen::Take(take) = &mut self.screen else {
            return;
        };
        if !take.shared {
            return;
        }
        let quiz = take.session.quiz().clone();
        match self.repo.import_quiz(&quiz) {
            Ok(_) => {
                take.shared = false;
                if let Err(err) = self.repo.clear_temp_quiz() {
                    return self.report(err.into());
                }
                self.notify(NotificationLevel::Success, "Quiz saved to My quizzes");
            }
            Err(err) => self.report(err.into()),
        }
    }

    pub fn start_answering(&mut self) {
        let Screen::Take(take) = &mut self.screen else {
            return;
        };
        if let Err(err) = take.session.start(&take.name_input, Instant::now()) {
            self.notify(NotificationLevel::Error, err.to_string());
        }
    }

    pub fn submit_quiz(&mut self, now: Instant) {
        let Screen::Take(take) = &mut self.screen else {
            return;
        };
        if take.session.phase() != Phase::Answering {
            return;
        }
        let Some((attempt, result)) = take.session.submit(now) else {
            return;
        };
        let quiz = take.session.quiz().clone();
        let participant_name = take.session.participant_name().to_string();

        if let Err(err) = self.repo.save_attempt(&attempt) {
            self.report(err.into());
        }
        self.leave_take_screen();
        self.screen = Screen::Results(ResultsState {
            quiz,
            result,
            participant_name,
            scroll: 0,
            share_link: None,
        });
    }

    /// Take the quiz on the results screen again, if it allows retakes.
    pub fn retake(&mut self) {
        let Screen::Results(results) = &self.screen else {
            return;
        };
        if !results.quiz.allow_retake {
            return self.notify(NotificationLevel::Info, "This quiz cannot be retaken.");
        }
        let quiz = results.quiz.clone();
        let name = results.participant_name.clone();
        let stored = matches!(self.repo.quiz_by_id(&quiz.id), Ok(Some(_)));
        self.start_take(quiz, !stored, name);
    }

    pub fn open_dashboard(&mut self, quiz_id: &str) {
        let quiz = match self.repo.quiz_by_id(quiz_id) {
            Ok(Some(quiz)) => quiz,
            Ok(None) => return self.report(QuizError::NotFound(quiz_id.to_string())),
            Err(err) => return self.report(err.into()),
        };
        let attempts = match self.repo.attempts_for_quiz(quiz_id) {
            Ok(attempts) => attempts,
            Err(err) => return self.report(err.into()),
        };
        let stats = QuizStats::from_attempts(&attempts, quiz.total_questions());
        self.screen = Screen::Dashboard(DashboardState {
            quiz,
            attempts,
            stats,
            share_link: None,
            scroll: 0,
        });
    }

    /// Build a share link for the quiz on screen and show it.
    pub fn share_current(&mut self) {
        let quiz = match &self.screen {
            Screen::QuizList(list) => list.selected_quiz(),
            Screen::Results(results) => Some(&results.quiz),
            Screen::Dashboard(dashboard) => Some(&dashboard.quiz),
            _ => None,
        };
        let Some(quiz) = quiz else {
            return;
        };

        let link = match generate_shareable_link(&self.base_url, quiz) {
            Ok(link) => link,
            Err(err) => return self.report(err.into()),
        };
        info!(quiz_id = %quiz.id, link_len = link.len(), "share link generated");

        if matches!(self.screen, Screen::QuizList(_)) {
            return self.notify(NotificationLevel::Success, link);
        }
        match &mut self.screen {
            Screen::Results(results) => results.share_link = Some(link),
            Screen::Dashboard(dashboard) => dashboard.share_link = Some(link),
            _ => {}
        }
        self.notify(NotificationLevel::Success, "Share link ready");
    }

    pub fn request_delete(&mut self) {
        if let Screen::QuizList(list) = &mut self.screen {
            if list.selected_quiz().is_some() {
                list.confirm_delete = true;
            }
        }
    }

    pub fn cancel_delete(&mut self) {
        if let Screen::QuizList(list) = &mut self.screen {
            list.confirm_delete = false;
        }
    }

    pub fn confirm_delete(&mut self) {
        let Screen::QuizList(list) = &self.screen else {
            return;
        };
        let Some(id) = list.selected_quiz().map(|q| q.id.clone()) else {
            return;
        };
        let selected = list.selected;

        match self.repo.delete_quiz(&id) {
            Ok(_) => {
                self.open_quiz_list();
                if let Screen::QuizList(list) = &mut self.screen {
                    list.selected = selected.min(list.quizzes.len().saturating_sub(1));
                }
                self.notify(NotificationLevel::Success, "Quiz deleted successfully");
            }
            Err(err) => self.report(err.into()),
        }
    }

    /// Drop the session's shared quiz when leaving the take screen for it.
    fn leave_take_screen(&mut self) {
        let Screen::Take(take) = &self.screen else {
            return;
        };
        if take.shared {
            if let Err(err) = self.repo.clear_temp_quiz() {
                self.report(err.into());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;
    use crate::share::generate_shareable_link;

    fn sample_quiz() -> Quiz {
        let options = || vec!["w".to_string(), "x".into(), "y".into(), "z".into()];
        Quiz::new(
            "Sample",
            vec![
                Question::new("one?", options(), 1),
                Question::new("two?", options(), 2),
            ],
        )
    }

    fn app_with(quiz: &Quiz) -> App {
        let mut repo = QuizRepository::in_memory();
        repo.save_quiz(quiz).unwrap();
        App::new(repo, "https://quiz.test/")
    }

    #[test]
    fn test_take_and_submit_saves_attempt() {
        let quiz = sample_quiz();
        let mut app = app_with(&quiz);
        app.open_take(&quiz.id);

        let Screen::Take(take) = &mut app.screen else {
            panic!("expected take screen");
        };
        take.name_input = "Grace".into();
        app.start_answering();

        let Screen::Take(take) = &mut app.screen else {
            panic!("expected take screen");
        };
        take.session.select_answer(1);
        app.submit_quiz(Instant::now());

        let Screen::Results(results) = &app.screen else {
            panic!("expected results screen");
        };
        assert_eq!(results.result.score, 1);
        assert_eq!(results.participant_name, "Grace");
        assert_eq!(app.repo().attempts_for_quiz(&quiz.id).unwrap().len(), 1);
    }

    #[test]
    fn test_start_without_name_notifies() {
        let quiz = sample_quiz();
        let mut app = app_with(&quiz);
        app.open_take(&quiz.id);
        app.start_answering();

        let note = app.notification().unwrap();
        assert_eq!(note.level, NotificationLevel::Error);
        assert_eq!(note.message, "Please enter your name");
    }

    #[test]
    fn test_unknown_quiz_goes_home() {
        let mut app = App::new(QuizRepository::in_memory(), "https://quiz.test/");
        app.open_take("missing");
        assert!(matches!(app.screen, Screen::Home { .. }));
        assert_eq!(
            app.notification().unwrap().message,
            "Quiz not found or the link is invalid."
        );
    }

    #[test]
    fn test_shared_link_opens_temp_quiz_and_clears_it() {
        let quiz = sample_quiz();
        let link = generate_shareable_link("https://quiz.test/", &quiz).unwrap();
        let mut app = App::new(QuizRepository::in_memory(), "https://quiz.test/");

        app.open_shared_link(&link);
        let Screen::Take(take) = &app.screen else {
            panic!("expected take screen");
        };
        assert!(take.shared);
        assert!(app.repo().temp_quiz().unwrap().is_some());

        app.go_home();
        assert!(app.repo().temp_quiz().unwrap().is_none());
        assert!(app.repo().quizzes().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_shared_link_reports_error() {
        let mut app = App::new(QuizRepository::in_memory(), "https://quiz.test/");
        app.open_shared_link("https://quiz.test/#/quiz/shared?data=broken");
        assert!(matches!(app.screen, Screen::Home { .. }));
        assert_eq!(
            app.notification().unwrap().message,
            "The shared quiz link is invalid or corrupted."
        );
    }

    #[test]
    fn test_import_shared_quiz() {
        let quiz = sample_quiz();
        let link = generate_shareable_link("https://quiz.test/", &quiz).unwrap();
        let mut app = App::new(QuizRepository::in_memory(), "https://quiz.test/");
        app.open_shared_link(&link);
        app.import_current_shared();

        assert_eq!(app.repo().quizzes().unwrap(), vec![quiz]);
        assert!(app.repo().temp_quiz().unwrap().is_none());
    }

    #[test]
    fn test_timeout_auto_submits() {
        let mut quiz = sample_quiz();
        quiz.time_limit = Some(1);
        let mut app = app_with(&quiz);
        app.open_take(&quiz.id);
        if let Screen::Take(take) = &mut app.screen {
            take.name_input = "Lin".into();
        }
        app.start_answering();

        app.on_tick(Instant::now() + Duration::from_secs(61));
        assert!(matches!(app.screen, Screen::Results(_)));
        assert_eq!(app.repo().attempts().unwrap().len(), 1);
    }

    #[test]
    fn test_editor_save_validates_then_stores() {
        let mut app = App::new(QuizRepository::in_memory(), "https://quiz.test/");
        app.open_editor(None);
        app.save_editor();
        assert_eq!(
            app.notification().unwrap().message,
            "Please enter a quiz title"
        );

        let Screen::Editor(editor) = &mut app.screen else {
            panic!("expected editor screen");
        };
        "Quick".chars().for_each(|c| editor.insert_char(c));
        editor.add_question();
        "Pick y".chars().for_each(|c| editor.insert_char(c));
        for option in ["w", "x", "y", "z"] {
            editor.focus_next();
            option.chars().for_each(|c| editor.insert_char(c));
        }
        editor.focus_previous();
        editor.activate();
        assert_eq!(editor.draft.questions[0].correct_answer, 2);

        app.save_editor();
        assert!(matches!(app.screen, Screen::QuizList(_)));
        let stored = app.repo().quizzes().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "Quick");
        assert_eq!(stored[0].questions[0].options[3], "z");
    }

    #[test]
    fn test_editor_time_limit_accepts_digits_only() {
        let mut editor = EditorState::new(QuizDraft::new());
        editor.focus_field(EditorField::TimeLimit);
        "1a5".chars().for_each(|c| editor.insert_char(c));
        assert_eq!(editor.time_limit_input, "15");
        assert_eq!(editor.draft.time_limit, Some(15));
        editor.delete_char();
        editor.delete_char();
        assert_eq!(editor.draft.time_limit, None);
    }

    #[test]
    fn test_editor_delete_focused_question() {
        let mut editor = EditorState::new(QuizDraft::new());
        editor.add_question();
        editor.add_question();
        assert_eq!(editor.focused(), EditorField::Question(1));
        editor.delete_focused_question();
        assert_eq!(editor.draft.questions.len(), 1);
        assert!(editor.focus < editor.fields().len());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let quiz = sample_quiz();
        let mut app = app_with(&quiz);
        app.open_quiz_list();
        app.request_delete();
        let Screen::QuizList(list) = &app.screen else {
            panic!("expected list screen");
        };
        assert!(list.confirm_delete);

        app.confirm_delete();
        assert!(app.repo().quizzes().unwrap().is_empty());
        let Screen::QuizList(list) = &app.screen else {
            panic!("expected list screen");
        };
        assert!(!list.confirm_delete);
        assert!(list.quizzes.is_empty());
    }

    #[test]
    fn test_retake_respects_flag() {
        let mut quiz = sample_quiz();
        quiz.allow_retake = false;
        let mut app = app_with(&quiz);
        app.open_take(&quiz.id);
        if let Screen::Take(take) = &mut app.screen {
            take.name_input = "Kim".into();
        }
        app.start_answering();
        app.submit_quiz(Instant::now());

        app.retake();
        assert!(matches!(app.screen, Screen::Results(_)));
    }

    #[test]
    fn test_dashboard_share_link() {
        let quiz = sample_quiz();
        let mut app = app_with(&quiz);
        app.open_dashboard(&quiz.id);
        app.share_current();
        let Screen::Dashboard(dashboard) = &app.screen else {
            panic!("expected dashboard screen");
        };
        let link = dashboard.share_link.as_deref().unwrap();
        assert!(link.starts_with("https://quiz.test/#/quiz/shared?data="));
    }

    #[test]
    fn test_notification_expires() {
        let mut app = App::new(QuizRepository::in_memory(), "https://quiz.test/");
        app.notify(NotificationLevel::Info, "hello");
        app.on_tick(Instant::now());
        assert!(app.notification().is_some());
        app.on_tick(Instant::now() + NOTIFICATION_TTL);
        assert!(app.notification().is_none());
    }
}

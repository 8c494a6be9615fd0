//! Non-interactive subcommands.
//!
//! Each command works directly against the repository and returns the text
//! to print, except `take`, which hands control to the terminal UI.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use tracing::info;

use crate::app::App;
use crate::editor::QuizDraft;
use crate::error::{QuizError, Result, StorageError};
use crate::models::Quiz;
use crate::scoring::format_time;
use crate::share::{decode_link, extract_quiz_id, generate_shareable_link};
use crate::stats::QuizStats;
use crate::storage::QuizRepository;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List saved quizzes
    List,
    /// Show a quiz with its questions and results
    Show { id: String },
    /// Print the shareable link for a quiz
    Share { id: String },
    /// Save a quiz from a shared link (or the data it carries)
    Import { link: String },
    /// Write a quiz as JSON
    Export {
        id: String,
        /// File to write instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Create a quiz from a JSON draft
    Create {
        #[arg(long)]
        from: PathBuf,
    },
    /// Delete a quiz and all of its attempts
    Delete { id: String },
    /// Take a quiz by id or shared link
    Take { target: String },
}

/// Result of executing a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// Text to print.
    Output(String),
    /// Start the terminal UI on the take screen for this id or link.
    Take(String),
}

/// Execute a command against the repository.
pub fn execute_command(
    repo: &mut QuizRepository,
    base_url: &str,
    command: Command,
) -> Result<CommandResult> {
    let output = match command {
        Command::List => cmd_list(repo)?,
        Command::Show { id } => cmd_show(repo, &id)?,
        Command::Share { id } => cmd_share(repo, base_url, &id)?,
        Command::Import { link } => cmd_import(repo, &link)?,
        Command::Export { id, output } => cmd_export(repo, &id, output)?,
        Command::Create { from } => cmd_create(repo, from)?,
        Command::Delete { id } => cmd_delete(repo, &id)?,
        Command::Take { target } => return Ok(CommandResult::Take(target)),
    };
    Ok(CommandResult::Output(output))
}

/// Point the app at whatever `take` was given: a stored quiz id, a
/// `#/quiz/<id>` link or a shared-quiz link.
pub fn open_target(app: &mut App, target: &str) {
    let target = target.trim();
    let stored = matches!(app.repo().quiz_by_id(target), Ok(Some(_)));
    if stored {
        app.open_take(target);
    } else if let Some(id) = extract_quiz_id(target) {
        let id = id.to_string();
        app.open_take(&id);
    } else {
        app.open_shared_link(target);
    }
}

fn find_quiz(repo: &QuizRepository, id: &str) -> Result<Quiz> {
    repo.quiz_by_id(id)?
        .ok_or_else(|| QuizError::NotFound(id.to_string()))
}

fn cmd_list(repo: &QuizRepository) -> Result<String> {
    let quizzes = repo.quizzes()?;
    if quizzes.is_empty() {
        return Ok("No quizzes yet. Create one with `quiz-maker create --from FILE`.".to_string());
    }

    let attempts = repo.attempts()?;
    let lines: Vec<String> = quizzes
        .iter()
        .map(|quiz| {
            let count = attempts.iter().filter(|a| a.quiz_id == quiz.id).count();
            format!(
                "{}  {}  ({} questions, {} attempts)",
                quiz.id,
                quiz.title,
                quiz.total_questions(),
                count
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

fn cmd_show(repo: &QuizRepository, id: &str) -> Result<String> {
    let quiz = find_quiz(repo, id)?;
    let attempts = repo.attempts_for_quiz(id)?;
    let stats = QuizStats::from_attempts(&attempts, quiz.total_questions());

    let yes_no = |flag: bool| if flag { "yes" } else { "no" };
    let time_limit = quiz
        .time_limit_minutes()
        .map(|m| format!("{} minutes", m))
        .unwrap_or_else(|| "none".to_string());

    let mut lines = vec![quiz.title.clone()];
    if !quiz.description.is_empty() {
        lines.push(quiz.description.clone());
    }
    lines.extend([
        String::new(),
        format!("id:            {}", quiz.id),
        format!(
            "created:       {} by {}",
            quiz.created_at.format("%Y-%m-%d %H:%M"),
            quiz.created_by
        ),
        format!("time limit:    {}", time_limit),
        format!("show answers:  {}", yes_no(quiz.show_correct_answers)),
        format!("allow retake:  {}", yes_no(quiz.allow_retake)),
        String::new(),
        format!(
            "attempts: {}  participants: {}  average: {}%  avg time: {}  best: {}/{}",
            stats.total_attempts,
            stats.unique_participants,
            stats.average_percentage,
            format_time(stats.average_time),
            stats.best_score,
            quiz.total_questions()
        ),
    ]);

    for (index, question) in quiz.questions.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("{}. {}", index + 1, question.question));
        for (option_index, option) in question.options.iter().enumerate() {
            let marker = if option_index == question.correct_answer {
                "*"
            } else {
                " "
            };
            lines.push(format!("   {} {}", marker, option));
        }
        if let Some(explanation) = question.explanation() {
            lines.push(format!("   ({})", explanation));
        }
    }

    Ok(lines.join("\n"))
}

fn cmd_share(repo: &QuizRepository, base_url: &str, id: &str) -> Result<String> {
    let quiz = find_quiz(repo, id)?;
    Ok(generate_shareable_link(base_url, &quiz)?)
}

fn cmd_import(repo: &mut QuizRepository, link: &str) -> Result<String> {
    let quiz = decode_link(link)?;
    let added = repo.import_quiz(&quiz)?;
    info!(quiz_id = %quiz.id, added, "imported shared quiz");

    let verb = if added { "Imported" } else { "Updated" };
    Ok(format!("{} \"{}\" ({})", verb, quiz.title, quiz.id))
}

fn cmd_export(repo: &QuizRepository, id: &str, output: Option<PathBuf>) -> Result<String> {
    let quiz = find_quiz(repo, id)?;
    let json = serde_json::to_string_pretty(&quiz).map_err(|source| StorageError::Encode {
        key: quiz.id.clone(),
        source,
    })?;

    match output {
        Some(path) => {
            fs::write(&path, json)?;
            Ok(format!("Exported \"{}\" to {}", quiz.title, path.display()))
        }
        None => Ok(json),
    }
}

fn cmd_create(repo: &mut QuizRepository, from: PathBuf) -> Result<String> {
    let content = fs::read_to_string(&from)?;
    let draft: QuizDraft =
        serde_json::from_str(&content).map_err(|source| QuizError::Parse {
            path: from.clone(),
            source,
        })?;

    let quiz = draft.finish(Utc::now())?;
    repo.save_quiz(&quiz)?;
    info!(quiz_id = %quiz.id, questions = quiz.total_questions(), "created quiz");

    Ok(format!("Created \"{}\" ({})", quiz.title, quiz.id))
}

fn cmd_delete(repo: &mut QuizRepository, id: &str) -> Result<String> {
    if !repo.delete_quiz(id)? {
        return Err(QuizError::NotFound(id.to_string()));
    }
    Ok(format!("Deleted quiz {}", id))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::app::Screen;
    use crate::models::Question;
    use crate::share::encode_quiz_data;

    const BASE_URL: &str = "https://quiz.example/";

    fn sample_quiz() -> Quiz {
        Quiz::new(
            "Capitals",
            vec![
                Question::new(
                    "Capital of France?",
                    vec!["Paris".into(), "Lyon".into(), "Nice".into(), "Lille".into()],
                    0,
                )
                .with_explanation("Paris has been the capital since 987."),
            ],
        )
    }

    fn repo_with(quiz: &Quiz) -> QuizRepository {
        let mut repo = QuizRepository::in_memory();
        repo.save_quiz(quiz).unwrap();
        repo
    }

    fn output(result: Result<CommandResult>) -> String {
        match result.unwrap() {
            CommandResult::Output(text) => text,
            other => panic!("expected output, got {:?}", other),
        }
    }

    #[test]
    fn test_list_empty() {
        let mut repo = QuizRepository::in_memory();
        let text = output(execute_command(&mut repo, BASE_URL, Command::List));
        assert!(text.starts_with("No quizzes yet"));
    }

    #[test]
    fn test_list_shows_counts() {
        let quiz = sample_quiz();
        let mut repo = repo_with(&quiz);
        let text = output(execute_command(&mut repo, BASE_URL, Command::List));
        assert!(text.contains(&quiz.id));
        assert!(text.contains("Capitals"));
        assert!(text.contains("1 questions, 0 attempts"));
    }

    #[test]
    fn test_show_marks_correct_option() {
        let quiz = sample_quiz();
        let mut repo = repo_with(&quiz);
        let text = output(execute_command(
            &mut repo,
            BASE_URL,
            Command::Show {
                id: quiz.id.clone(),
            },
        ));
        assert!(text.contains("1. Capital of France?"));
        assert!(text.contains("* Paris"));
        assert!(text.contains("(Paris has been the capital since 987.)"));
        assert!(text.contains("time limit:    none"));
    }

    #[test]
    fn test_show_hides_blank_explanation_and_zero_limit() {
        let mut quiz = sample_quiz();
        quiz.questions[0].explanation = Some(String::new());
        quiz.time_limit = Some(0);
        let mut repo = repo_with(&quiz);
        let text = output(execute_command(
            &mut repo,
            BASE_URL,
            Command::Show {
                id: quiz.id.clone(),
            },
        ));
        assert!(!text.contains("()"));
        assert!(text.contains("time limit:    none"));
        assert!(text.ends_with("     Lille"));
    }

    #[test]
    fn test_show_unknown_quiz() {
        let mut repo = QuizRepository::in_memory();
        let err = execute_command(
            &mut repo,
            BASE_URL,
            Command::Show {
                id: "missing".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, QuizError::NotFound(id) if id == "missing"));
    }

    #[test]
    fn test_share_then_import_elsewhere() {
        let quiz = sample_quiz();
        let mut repo = repo_with(&quiz);
        let link = output(execute_command(
            &mut repo,
            BASE_URL,
            Command::Share {
                id: quiz.id.clone(),
            },
        ));
        assert!(link.starts_with("https://quiz.example/#/quiz/shared?data="));

        let mut other = QuizRepository::in_memory();
        let text = output(execute_command(
            &mut other,
            BASE_URL,
            Command::Import { link: link.clone() },
        ));
        assert!(text.starts_with("Imported \"Capitals\""));
        assert_eq!(other.quiz_by_id(&quiz.id).unwrap(), Some(quiz));

        let again = output(execute_command(&mut other, BASE_URL, Command::Import { link }));
        assert!(again.starts_with("Updated"));
    }

    #[test]
    fn test_import_rejects_garbage() {
        let mut repo = QuizRepository::in_memory();
        let err = execute_command(
            &mut repo,
            BASE_URL,
            Command::Import {
                link: "not-a-quiz".into(),
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "The shared quiz link is invalid or corrupted.");
        assert!(repo.quizzes().unwrap().is_empty());
    }

    #[test]
    fn test_export_to_file() {
        let quiz = sample_quiz();
        let mut repo = repo_with(&quiz);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.json");

        let text = output(execute_command(
            &mut repo,
            BASE_URL,
            Command::Export {
                id: quiz.id.clone(),
                output: Some(path.clone()),
            },
        ));
        assert!(text.starts_with("Exported \"Capitals\""));

        let written: Quiz = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(written, quiz);
    }

    #[test]
    fn test_create_from_draft_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "title": "Colors",
                "timeLimit": 5,
                "questions": [
                    {{"question": "Sky?", "options": ["Blue", "Red", "Green", "Pink"], "correctAnswer": 0}}
                ]
            }}"#
        )
        .unwrap();

        let mut repo = QuizRepository::in_memory();
        let text = output(execute_command(
            &mut repo,
            BASE_URL,
            Command::Create {
                from: file.path().to_path_buf(),
            },
        ));
        assert!(text.starts_with("Created \"Colors\""));

        let quizzes = repo.quizzes().unwrap();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].time_limit, Some(5));
        assert!(quizzes[0].show_correct_answers);
    }

    #[test]
    fn test_create_rejects_incomplete_draft() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title": "Colors", "questions": [{{"question": "Sky?", "options": ["Blue", "", "", ""]}}]}}"#
        )
        .unwrap();

        let mut repo = QuizRepository::in_memory();
        let err = execute_command(
            &mut repo,
            BASE_URL,
            Command::Create {
                from: file.path().to_path_buf(),
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Please complete all questions and options");
    }

    #[test]
    fn test_create_reports_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let mut repo = QuizRepository::in_memory();
        let err = execute_command(
            &mut repo,
            BASE_URL,
            Command::Create {
                from: file.path().to_path_buf(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, QuizError::Parse { .. }));
    }

    #[test]
    fn test_delete() {
        let quiz = sample_quiz();
        let mut repo = repo_with(&quiz);
        let text = output(execute_command(
            &mut repo,
            BASE_URL,
            Command::Delete {
                id: quiz.id.clone(),
            },
        ));
        assert_eq!(text, format!("Deleted quiz {}", quiz.id));

        let err = execute_command(&mut repo, BASE_URL, Command::Delete { id: quiz.id }).unwrap_err();
        assert!(matches!(err, QuizError::NotFound(_)));
    }

    #[test]
    fn test_take_defers_to_tui() {
        let mut repo = QuizRepository::in_memory();
        let result = execute_command(
            &mut repo,
            BASE_URL,
            Command::Take {
                target: "abc".into(),
            },
        )
        .unwrap();
        assert_eq!(result, CommandResult::Take("abc".into()));
    }

    #[test]
    fn test_open_target_by_id_and_links() {
        let quiz = sample_quiz();

        let mut app = App::new(repo_with(&quiz), BASE_URL);
        open_target(&mut app, &quiz.id);
        assert!(matches!(&app.screen, Screen::Take(take) if !take.shared));

        let mut app = App::new(repo_with(&quiz), BASE_URL);
        open_target(&mut app, &format!("{}#/quiz/{}", BASE_URL, quiz.id));
        assert!(matches!(&app.screen, Screen::Take(take) if !take.shared));

        let mut app = App::new(QuizRepository::in_memory(), BASE_URL);
        let data = encode_quiz_data(&quiz).unwrap();
        open_target(&mut app, &data);
        assert!(matches!(&app.screen, Screen::Take(take) if take.shared));
    }
}

//! Keyboard handling for each screen.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, EditorField, HOME_ITEMS, Screen};
use crate::session::Phase;

/// Apply a key press. Returns true if the app should exit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return true;
    }

    match app.screen {
        Screen::Home { .. } => handle_home_input(app, key.code),
        Screen::QuizList(_) => handle_list_input(app, key.code),
        Screen::Editor(_) => handle_editor_input(app, key),
        Screen::Take(_) => handle_take_input(app, key),
        Screen::Results(_) => handle_results_input(app, key.code),
        Screen::Dashboard(_) => handle_dashboard_input(app, key.code),
        Screen::OpenShared(_) => handle_open_shared_input(app, key.code),
    }
    app.should_quit()
}

/// Bracketed paste goes to whichever text input has focus.
pub fn handle_paste(app: &mut App, text: &str) {
    let text = text.trim_end_matches(['\r', '\n']);
    match &mut app.screen {
        Screen::OpenShared(state) => state.input.push_str(text.trim()),
        Screen::Editor(editor) => text.chars().for_each(|c| editor.insert_char(c)),
        Screen::Take(take) if take.session.phase() == Phase::NameEntry => {
            take.name_input.push_str(text);
        }
        _ => {}
    }
}

fn handle_home_input(app: &mut App, key: KeyCode) {
    let Screen::Home { selected } = &mut app.screen else {
        return;
    };
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            *selected = (*selected + HOME_ITEMS.len() - 1) % HOME_ITEMS.len();
        }
        KeyCode::Down | KeyCode::Char('j') => *selected = (*selected + 1) % HOME_ITEMS.len(),
        KeyCode::Enter => {
            let choice = *selected;
            match choice {
                0 => app.open_editor(None),
                1 => app.open_quiz_list(),
                2 => app.open_shared_prompt(),
                _ => app.quit(),
            }
        }
        KeyCode::Char('c') => app.open_editor(None),
        KeyCode::Char('l') => app.open_quiz_list(),
        KeyCode::Char('o') => app.open_shared_prompt(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn handle_list_input(app: &mut App, key: KeyCode) {
    let Screen::QuizList(list) = &mut app.screen else {
        return;
    };

    if list.confirm_delete {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            _ => app.cancel_delete(),
        }
        return;
    }

    let count = list.quizzes.len();
    let selected_id = list.selected_quiz().map(|q| q.id.clone());
    match key {
        KeyCode::Up | KeyCode::Char('k') => list.selected = list.selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => {
            if list.selected + 1 < count {
                list.selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char('t') => {
            if let Some(id) = selected_id {
                app.open_take(&id);
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = selected_id {
                app.open_dashboard(&id);
            }
        }
        KeyCode::Char('e') => {
            if let Some(id) = selected_id {
                app.open_editor(Some(&id));
            }
        }
        KeyCode::Char('s') => app.share_current(),
        KeyCode::Char('x') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('n') => app.open_editor(None),
        KeyCode::Esc | KeyCode::Char('h') => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_editor_input(app: &mut App, key: KeyEvent) {
    let Screen::Editor(editor) = &mut app.screen else {
        return;
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => app.save_editor(),
            KeyCode::Char('n') => editor.add_question(),
            KeyCode::Char('d') => editor.delete_focused_question(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => editor.focus_next(),
        KeyCode::BackTab | KeyCode::Up => editor.focus_previous(),
        KeyCode::Enter => match editor.focused() {
            EditorField::ShowAnswers | EditorField::AllowRetake | EditorField::Option(..) => {
                editor.activate();
            }
            _ => editor.focus_next(),
        },
        KeyCode::Char(' ') if !editor.focused().is_text() => editor.activate(),
        KeyCode::Char(c) => editor.insert_char(c),
        KeyCode::Backspace => editor.delete_char(),
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
}

fn handle_take_input(app: &mut App, key: KeyEvent) {
    let Screen::Take(take) = &mut app.screen else {
        return;
    };

    match take.session.phase() {
        Phase::NameEntry => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                if key.code == KeyCode::Char('s') {
                    app.import_current_shared();
                }
                return;
            }
            match key.code {
                KeyCode::Char(c) => take.name_input.push(c),
                KeyCode::Backspace => {
                    take.name_input.pop();
                }
                KeyCode::Enter => app.start_answering(),
                KeyCode::Esc => app.go_home(),
                _ => {}
            }
        }
        Phase::Answering => {
            let session = &mut take.session;
            let option_count = session.current_question().map_or(0, |q| q.options.len());
            match key.code {
                KeyCode::Down | KeyCode::Char('j') if option_count > 0 => {
                    let next = session.current_answer().map_or(0, |a| (a + 1) % option_count);
                    session.select_answer(next);
                }
                KeyCode::Up | KeyCode::Char('k') if option_count > 0 => {
                    let previous = session
                        .current_answer()
                        .map_or(option_count - 1, |a| (a + option_count - 1) % option_count);
                    session.select_answer(previous);
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    session.select_answer(index);
                }
                KeyCode::Left | KeyCode::Char('h') => session.previous_question(),
                KeyCode::Right | KeyCode::Char('l') => session.next_question(),
                KeyCode::Enter => {
                    if session.is_last_question() {
                        app.submit_quiz(Instant::now());
                    } else {
                        session.next_question();
                    }
                }
                KeyCode::Esc => app.go_home(),
                _ => {}
            }
        }
        Phase::Submitted => {}
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) {
    let Screen::Results(results) = &mut app.screen else {
        return;
    };
    match key {
        KeyCode::Down | KeyCode::Char('j') => results.scroll = results.scroll.saturating_add(1),
        KeyCode::Up | KeyCode::Char('k') => results.scroll = results.scroll.saturating_sub(1),
        KeyCode::Char('s') => app.share_current(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.retake(),
        KeyCode::Char('l') => app.open_quiz_list(),
        KeyCode::Esc | KeyCode::Char('h') => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    let Screen::Dashboard(dashboard) = &mut app.screen else {
        return;
    };
    let quiz_id = dashboard.quiz.id.clone();
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            dashboard.scroll = dashboard.scroll.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            dashboard.scroll = dashboard.scroll.saturating_sub(1);
        }
        KeyCode::Char('s') => app.share_current(),
        KeyCode::Char('p') => app.open_take(&quiz_id),
        KeyCode::Char('e') => app.open_editor(Some(&quiz_id)),
        KeyCode::Esc | KeyCode::Char('b') => app.open_quiz_list(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}

fn handle_open_shared_input(app: &mut App, key: KeyCode) {
    let Screen::OpenShared(state) = &mut app.screen else {
        return;
    };
    match key {
        KeyCode::Char(c) => state.input.push(c),
        KeyCode::Backspace => {
            state.input.pop();
        }
        KeyCode::Enter => {
            let input = std::mem::take(&mut state.input);
            app.open_shared_link(&input);
        }
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
}

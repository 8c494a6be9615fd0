use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::{EditorField, EditorState};

use super::{OPTION_LABELS, controls};

pub fn render(frame: &mut Frame, area: Rect, editor: &EditorState) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let title = if editor.draft.is_editing() {
        "EDIT QUIZ"
    } else {
        "CREATE NEW QUIZ"
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(title, Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("  Questions ({})", editor.draft.questions.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(header, chunks[0]);

    render_form(frame, chunks[1], editor);

    frame.render_widget(
        controls(
            "tab/↑↓ move  ·  enter mark correct / toggle  ·  ctrl+n add question  ·  ctrl+d delete question  ·  ctrl+s save  ·  esc cancel",
        ),
        chunks[2],
    );
}

fn render_form(frame: &mut Frame, area: Rect, editor: &EditorState) {
    let focused = editor.focused();
    let mut lines: Vec<Line> = Vec::new();
    let mut focused_line = 0;

    for field in editor.fields() {
        if let EditorField::Question(q) = field {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Question {}", q + 1),
                Style::default().fg(Color::Cyan).bold(),
            )));
        }
        if field == focused {
            focused_line = lines.len();
        }
        lines.push(field_line(editor, field, field == focused));
    }

    if editor.draft.questions.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(
            "No questions added yet. Press ctrl+n to add your first question.".fg(Color::DarkGray),
        ));
    }

    let visible = area.height.saturating_sub(2) as usize;
    let scroll = (focused_line + 2).saturating_sub(visible);

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn field_line<'a>(editor: &'a EditorState, field: EditorField, is_focused: bool) -> Line<'a> {
    let draft = &editor.draft;
    let label_style = if is_focused {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_style = Style::default().fg(Color::Yellow);
    let marker = Span::styled(if is_focused { "> " } else { "  " }, label_style);

    let (label, value): (String, String) = match field {
        EditorField::Title => ("Quiz Title *".into(), draft.title.clone()),
        EditorField::Description => ("Description".into(), draft.description.clone()),
        EditorField::TimeLimit => {
            let value = if editor.time_limit_input.is_empty() && !is_focused {
                "No limit".to_string()
            } else {
                editor.time_limit_input.clone()
            };
            ("Time Limit (minutes)".into(), value)
        }
        EditorField::ShowAnswers => {
            return checkbox_line(
                marker,
                "Show correct answers after submission",
                draft.show_correct_answers,
                label_style,
            );
        }
        EditorField::AllowRetake => {
            return checkbox_line(
                marker,
                "Allow retaking the quiz",
                draft.allow_retake,
                label_style,
            );
        }
        EditorField::Question(q) => (
            "Question *".into(),
            draft.questions.get(q).map(|d| d.question.clone()).unwrap_or_default(),
        ),
        EditorField::Option(q, o) => {
            let Some(question) = draft.questions.get(q) else {
                return Line::from("");
            };
            let radio = if question.correct_answer == o { "(•)" } else { "( )" };
            let label = OPTION_LABELS.get(o).copied().unwrap_or('?');
            (
                format!("  {} {}.", radio, label),
                question.options.get(o).cloned().unwrap_or_default(),
            )
        }
        EditorField::Explanation(q) => (
            "Explanation".into(),
            draft.questions.get(q).map(|d| d.explanation.clone()).unwrap_or_default(),
        ),
    };

    let mut spans = vec![
        marker,
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(value, value_style),
    ];
    if is_focused && field.is_text() {
        spans.push(Span::styled("_", value_style));
    }
    Line::from(spans)
}

fn checkbox_line<'a>(marker: Span<'a>, label: &'a str, checked: bool, style: Style) -> Line<'a> {
    let box_text = if checked { "[x] " } else { "[ ] " };
    Line::from(vec![
        marker,
        Span::styled(box_text, style),
        Span::styled(label, style),
    ])
}

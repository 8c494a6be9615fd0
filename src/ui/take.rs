use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::TakeState;
use crate::scoring::format_time;
use crate::session::{Phase, TakeSession};

use super::{OPTION_LABELS, controls, progress_bar};

const PROGRESS_WIDTH: usize = 30;
/// Countdown turns red below this many seconds.
const LOW_TIME_SECS: u64 = 60;

pub fn render(frame: &mut Frame, area: Rect, take: &TakeState) {
    match take.session.phase() {
        Phase::NameEntry => render_name_entry(frame, area, take),
        Phase::Answering | Phase::Submitted => render_question(frame, area, &take.session),
    }
}

fn render_name_entry(frame: &mut Frame, area: Rect, take: &TakeState) {
    let quiz = take.session.quiz();
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(16),
        Constraint::Fill(1),
    ])
    .split(area);

    let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
    let time_limit = quiz
        .time_limit_minutes()
        .map(|m| format!("{} minutes", m))
        .unwrap_or_else(|| "None".to_string());

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            quiz.title.clone(),
            Style::default().fg(Color::Cyan).bold(),
        )),
    ];
    if !quiz.description.is_empty() {
        content.push(Line::from(quiz.description.clone().fg(Color::Gray)));
    }
    content.extend([
        Line::from(""),
        Line::from(format!("Questions: {}", quiz.total_questions()).fg(Color::DarkGray)),
        Line::from(format!("Time limit: {}", time_limit).fg(Color::DarkGray)),
        Line::from(
            format!("Show answers: {}", yes_no(quiz.show_correct_answers)).fg(Color::DarkGray),
        ),
        Line::from(format!("Allow retake: {}", yes_no(quiz.allow_retake)).fg(Color::DarkGray)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter your name: ", Style::default().fg(Color::White)),
            Span::styled(take.name_input.as_str(), Style::default().fg(Color::Yellow)),
            Span::styled("_", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
    ]);

    let hint = if take.shared {
        "[Enter] start quiz  ·  [Ctrl+S] save to my quizzes  ·  [Esc] back"
    } else {
        "[Enter] start quiz  ·  [Esc] back"
    };
    content.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}

fn render_question(frame: &mut Frame, area: Rect, session: &TakeSession) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], session);
    render_progress(frame, chunks[1], session);

    let Some(question) = session.current_question() else {
        frame.render_widget(
            Paragraph::new("This quiz has no questions.").fg(Color::DarkGray),
            chunks[2],
        );
        return;
    };

    let text = Paragraph::new(question.question.as_str())
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(text, chunks[2]);

    render_options(frame, chunks[3], &question.options, session.current_answer());

    let hint = if session.is_last_question() {
        "j/k choose  ·  1-9 pick  ·  h previous  ·  enter submit quiz  ·  esc leave"
    } else {
        "j/k choose  ·  1-9 pick  ·  h/l previous/next  ·  enter next  ·  esc leave"
    };
    frame.render_widget(controls(hint), chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect, session: &TakeSession) {
    let columns =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).split(area);

    let title = Paragraph::new(session.quiz().title.as_str())
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(title, columns[0]);

    if let Some(remaining) = session.remaining(Instant::now()) {
        let color = if remaining < LOW_TIME_SECS {
            Color::Red
        } else {
            Color::Gray
        };
        let timer = Paragraph::new(format!("⏱ {}", format_time(remaining)))
            .alignment(Alignment::Right)
            .fg(color)
            .bold();
        frame.render_widget(timer, columns[1]);
    }
}

fn render_progress(frame: &mut Frame, area: Rect, session: &TakeSession) {
    let progress = Line::from(vec![
        Span::styled(
            progress_bar(session.progress(), PROGRESS_WIDTH),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!(
                "  Question {} of {}",
                session.current_index() + 1,
                session.quiz().total_questions()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(progress), area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String], selected: Option<usize>) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = selected == Some(index);
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::NONE)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

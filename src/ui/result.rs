use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::ResultsState;
use crate::models::{Question, QuizResult};
use crate::scoring::{format_time, score_message};

use super::{band_color, controls, max_scroll};

pub fn render(frame: &mut Frame, area: Rect, results: &ResultsState) {
    let share_height = if results.share_link.is_some() { 3 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(share_height),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], results);
    render_review(frame, chunks[1], results);

    if let Some(link) = &results.share_link {
        render_share_link(frame, chunks[2], link);
    }

    let hint = if results.quiz.allow_retake {
        "j/k scroll  ·  s share  ·  r retake  ·  l my quizzes  ·  esc home  ·  q quit"
    } else {
        "j/k scroll  ·  s share  ·  l my quizzes  ·  esc home  ·  q quit"
    };
    frame.render_widget(controls(hint), chunks[3]);
}

fn render_score_summary(frame: &mut Frame, area: Rect, results: &ResultsState) {
    let result = &results.result;
    let color = band_color(result.percentage);

    let content = vec![
        Line::from(Span::styled(
            "Quiz Completed!",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(
            format!("Here are your results, {}", results.participant_name).fg(Color::Gray),
        ),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}", result.score, result.total_questions),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            format!("{}%", result.percentage),
            Style::default().fg(color).bold(),
        )),
        Line::from(score_message(result.percentage).fg(color)),
        Line::from(format!("Time taken: {}", format_time(result.time_taken)).fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_review(frame: &mut Frame, area: Rect, results: &ResultsState) {
    if !results.quiz.show_correct_answers {
        let widget = Paragraph::new("Correct answers are hidden for this quiz.")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    }

    let lines: Vec<Line> = results
        .quiz
        .questions
        .iter()
        .enumerate()
        .flat_map(|(index, question)| review_lines(index, question, &results.result))
        .collect();

    let scroll = max_scroll(results.scroll, &lines);
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll, 0));
    frame.render_widget(widget, area);
}

fn review_lines<'a>(index: usize, question: &'a Question, result: &QuizResult) -> Vec<Line<'a>> {
    let is_correct = result.is_correct(index);
    let (symbol, color) = if is_correct {
        ("✓", Color::Green)
    } else {
        ("✗", Color::Red)
    };

    let answer_text = result
        .user_answer(index)
        .and_then(|answer| question.option(answer))
        .unwrap_or("Not answered");

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", symbol), Style::default().fg(color).bold()),
            Span::styled(
                format!("{}. ", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(question.question.as_str(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("   Your answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(answer_text, Style::default().fg(color)),
        ]),
    ];

    if !is_correct {
        let correct = question.option(question.correct_answer).unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled("   Correct answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(correct, Style::default().fg(Color::Green)),
        ]));
    }

    if let Some(explanation) = question.explanation() {
        lines.push(Line::from(vec![
            Span::styled("   Explanation: ", Style::default().fg(Color::DarkGray)),
            Span::styled(explanation, Style::default().fg(Color::Gray).italic()),
        ]));
    }

    lines.push(Line::from(""));
    lines
}

pub(super) fn render_share_link(frame: &mut Frame, area: Rect, link: &str) {
    let widget = Paragraph::new(link)
        .fg(Color::Yellow)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Share link ")
                .borders(Borders::TOP)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

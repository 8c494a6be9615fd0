use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::{QuizListState, QuizSummary};
use crate::scoring::truncate_text;

use super::controls;

const DESCRIPTION_PREVIEW_LENGTH: usize = 70;

pub fn render(frame: &mut Frame, area: Rect, list: &QuizListState) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled("MY QUIZZES", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("  ({})", list.quizzes.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(header, chunks[0]);

    if list.quizzes.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from("No quizzes yet".fg(Color::Gray)),
            Line::from("Press n to create your first quiz".fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, chunks[1]);
    } else {
        render_quizzes(frame, chunks[1], list);
    }

    let footer = if list.confirm_delete {
        Paragraph::new("Delete this quiz and all its attempts? This cannot be undone.  y yes  ·  n no")
            .alignment(Alignment::Center)
            .fg(Color::Red)
            .bold()
    } else {
        controls(
            "j/k navigate  ·  enter take  ·  d dashboard  ·  s share  ·  e edit  ·  x delete  ·  n new  ·  esc home",
        )
    };
    frame.render_widget(footer, chunks[2]);
}

fn render_quizzes(frame: &mut Frame, area: Rect, list: &QuizListState) {
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0;

    for (index, summary) in list.quizzes.iter().enumerate() {
        let is_selected = index == list.selected;
        if is_selected {
            selected_line = lines.len();
        }
        lines.extend(quiz_lines(summary, is_selected));
        lines.push(Line::from(""));
    }

    // keep the selected entry on screen
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = (selected_line + 4).saturating_sub(visible);

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

fn quiz_lines(summary: &QuizSummary, is_selected: bool) -> Vec<Line<'static>> {
    let quiz = &summary.quiz;
    let title_style = if is_selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };
    let marker = if is_selected { "> " } else { "  " };
    let count = quiz.total_questions();

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, title_style),
        Span::styled(quiz.title.clone(), title_style),
        Span::styled(
            format!("  {} question{}", count, plural(count)),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    if !quiz.description.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {}", truncate_text(&quiz.description, DESCRIPTION_PREVIEW_LENGTH)),
            Style::default().fg(Color::Gray),
        )));
    }

    let stats = &summary.stats;
    let mut meta = format!(
        "  Created {}  ·  {} attempt{}  ·  {} participant{}  ·  avg {:.2}",
        quiz.created_at.format("%Y-%m-%d"),
        stats.total_attempts,
        plural(stats.total_attempts),
        stats.unique_participants,
        plural(stats.unique_participants),
        stats.average_score,
    );
    if let Some(minutes) = quiz.time_limit_minutes() {
        meta.push_str(&format!("  ·  {} min", minutes));
    }
    lines.push(Line::from(Span::styled(
        meta,
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

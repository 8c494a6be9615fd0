//! Per-quiz dashboard: settings, aggregate stats and recent attempts.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::app::DashboardState;
use crate::scoring::format_time;
use crate::stats::{RECENT_ATTEMPTS_LIMIT, question_success_rates, recent_attempts};

use super::{band_color, controls, max_scroll, progress_bar, result::render_share_link};

const RATE_BAR_WIDTH: usize = 15;

/// Render the dashboard view.
pub fn render(frame: &mut Frame, area: Rect, dashboard: &DashboardState) {
    let share_height = if dashboard.share_link.is_some() { 3 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title and settings
        Constraint::Length(5), // Stat cards
        Constraint::Fill(1),   // Attempts and question breakdown
        Constraint::Length(share_height),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], dashboard);
    render_stat_cards(frame, chunks[1], dashboard);

    let body = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    render_recent_attempts(frame, body[0], dashboard);
    render_question_rates(frame, body[1], dashboard);

    if let Some(link) = &dashboard.share_link {
        render_share_link(frame, chunks[3], link);
    }

    frame.render_widget(
        controls("j/k scroll  ·  s share  ·  p preview  ·  e edit  ·  esc back  ·  q quit"),
        chunks[4],
    );
}

fn render_header(frame: &mut Frame, area: Rect, dashboard: &DashboardState) {
    let quiz = &dashboard.quiz;
    let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
    let time_limit = quiz
        .time_limit_minutes()
        .map(|m| format!("{}m", m))
        .unwrap_or_else(|| "None".to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled(quiz.title.as_str(), Style::default().fg(Color::Cyan).bold()),
            Span::styled(
                format!("  {} questions", quiz.total_questions()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Time limit: ", Style::default().fg(Color::DarkGray)),
            Span::styled(time_limit, Style::default().fg(Color::Gray)),
            Span::styled("   Show answers: ", Style::default().fg(Color::DarkGray)),
            Span::styled(yes_no(quiz.show_correct_answers), Style::default().fg(Color::Gray)),
            Span::styled("   Allow retake: ", Style::default().fg(Color::DarkGray)),
            Span::styled(yes_no(quiz.allow_retake), Style::default().fg(Color::Gray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_stat_cards(frame: &mut Frame, area: Rect, dashboard: &DashboardState) {
    let stats = &dashboard.stats;
    let cards = [
        ("Attempts", stats.total_attempts.to_string(), Color::White),
        (
            "Participants",
            stats.unique_participants.to_string(),
            Color::White,
        ),
        (
            "Average",
            format!("{}%", stats.average_percentage),
            band_color(stats.average_percentage),
        ),
        ("Avg time", format_time(stats.average_time), Color::White),
        (
            "Best score",
            format!("{}/{}", stats.best_score, dashboard.quiz.total_questions()),
            Color::Green,
        ),
    ];

    let columns = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(area);

    for ((label, value, color), column) in cards.into_iter().zip(columns.iter()) {
        let widget = Paragraph::new(vec![
            Line::from(Span::styled(value, Style::default().fg(color).bold())),
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(widget, *column);
    }
}

fn render_recent_attempts(frame: &mut Frame, area: Rect, dashboard: &DashboardState) {
    let total_questions = dashboard.quiz.total_questions();
    let recent = recent_attempts(&dashboard.attempts, RECENT_ATTEMPTS_LIMIT);
    let mut lines: Vec<Line> = Vec::new();

    for attempt in &recent {
        let pct = attempt.percentage(total_questions);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:>4}%  ", pct),
                Style::default().fg(band_color(pct)).bold(),
            ),
            Span::styled(
                format!("{:<16}", attempt.participant_name),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{} out of {} correct", attempt.score, total_questions),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "       {}  ·  {}",
                format_time(attempt.time_taken),
                attempt.completed_at.format("%Y-%m-%d %H:%M")
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if dashboard.attempts.len() > RECENT_ATTEMPTS_LIMIT {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Showing {} of {} attempts",
                RECENT_ATTEMPTS_LIMIT,
                dashboard.attempts.len()
            ),
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No attempts yet",
            Style::default().fg(Color::DarkGray).italic(),
        )));
        lines.push(Line::from(Span::styled(
            "Share the quiz to collect results",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let scroll = max_scroll(dashboard.scroll, &lines);
    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Recent Attempts ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .scroll((scroll, 0));

    frame.render_widget(widget, area);
}

fn render_question_rates(frame: &mut Frame, area: Rect, dashboard: &DashboardState) {
    let rates = question_success_rates(&dashboard.attempts, &dashboard.quiz.correct_answers());
    let mut lines: Vec<Line> = Vec::new();

    if !dashboard.attempts.is_empty() {
        for (index, rate) in rates.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Q{:<3}", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    progress_bar(*rate as f64 / 100.0, RATE_BAR_WIDTH),
                    Style::default().fg(band_color(*rate)),
                ),
                Span::styled(format!(" {:>3}%", rate), Style::default().fg(Color::Gray)),
            ]));
        }
    }

    let scroll = max_scroll(dashboard.scroll, &lines);
    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Correct per Question ")
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .scroll((scroll, 0));

    frame.render_widget(widget, area);
}

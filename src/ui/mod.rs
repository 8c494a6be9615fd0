mod dashboard;
mod editor;
mod home;
mod open_shared;
mod quiz_list;
mod result;
mod take;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::{App, NotificationLevel, Screen};
use crate::scoring::ScoreBand;

/// Letters shown in front of answer options.
pub(crate) const OPTION_LABELS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);
    let main = chunks[0];

    match &app.screen {
        Screen::Home { selected } => home::render(frame, main, *selected),
        Screen::QuizList(list) => quiz_list::render(frame, main, list),
        Screen::Editor(editor) => editor::render(frame, main, editor),
        Screen::Take(take) => take::render(frame, main, take),
        Screen::Results(results) => result::render(frame, main, results),
        Screen::Dashboard(dashboard) => dashboard::render(frame, main, dashboard),
        Screen::OpenShared(state) => open_shared::render(frame, main, state),
    }

    render_notification(frame, chunks[1], app);
}

fn render_notification(frame: &mut Frame, area: Rect, app: &App) {
    let Some(notification) = app.notification() else {
        return;
    };
    let color = match notification.level {
        NotificationLevel::Info => Color::Cyan,
        NotificationLevel::Success => Color::Green,
        NotificationLevel::Error => Color::Red,
    };
    let widget = Paragraph::new(format!(" {} ", notification.message))
        .alignment(Alignment::Center)
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

pub(crate) fn band_color(percentage: u32) -> Color {
    match ScoreBand::from_percentage(percentage) {
        ScoreBand::High => Color::Green,
        ScoreBand::Medium => Color::Yellow,
        ScoreBand::Low => Color::Red,
    }
}

pub(crate) fn controls(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray)
}

/// Keep a scroll offset within the content so scrolling back up responds at once.
pub(crate) fn max_scroll(scroll: u16, lines: &[Line]) -> u16 {
    let last = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
    scroll.min(last)
}

pub(crate) fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0)) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

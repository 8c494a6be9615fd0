use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::OpenSharedState;

use super::controls;

pub fn render(frame: &mut Frame, area: Rect, state: &OpenSharedState) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let title = Paragraph::new("OPEN A SHARED QUIZ")
        .alignment(Alignment::Center)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(title, chunks[0]);

    let hint = Paragraph::new("Paste a quiz link (or its data) and press enter.")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(hint, chunks[1]);

    let input = Paragraph::new(Line::from(vec![
        Span::styled(state.input.as_str(), Style::default().fg(Color::Yellow)),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]))
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Link ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(input, chunks[2]);

    frame.render_widget(controls("enter open  ·  esc back"), chunks[3]);
}

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::HOME_ITEMS;

use super::controls;

pub fn render(frame: &mut Frame, area: Rect, selected: usize) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(14),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(48),
        Constraint::Fill(1),
    ])
    .split(chunks[1]);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ MAKER",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Build quizzes · Share links · Track results".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(""),
    ];

    for (index, item) in HOME_ITEMS.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        content.push(Line::from(vec![
            Span::styled(format!("{} ", marker), style),
            Span::styled(*item, style),
        ]));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, columns[1]);

    frame.render_widget(
        controls("j/k navigate  ·  enter select  ·  q quit"),
        chunks[3],
    );
}

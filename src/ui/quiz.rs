use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, Pending};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let question = app.current_question();

    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_question_text(frame, chunks[0], question.question_text());
    render_options(frame, chunks[1], question.choices(), app.selected_option());
    render_status(frame, chunks[2], app.pending());
    render_score(frame, chunks[3], app.score());
    render_controls(frame, chunks[4]);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, choices: &[String], selected: usize) {
    let lines: Vec<Line> = choices
        .iter()
        .enumerate()
        .map(|(index, choice)| {
            let style = if index == selected {
                Style::default().fg(Color::Green).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if index == selected { ">" } else { " " };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(format!("{}. ", index + 1), style),
                Span::styled(choice.as_str(), style),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, pending: Option<Pending>) {
    let text = match pending {
        Some(Pending::Verdict) => "Checking answer...",
        Some(Pending::Question) => "Correct! Loading next question...",
        None => "",
    };
    let widget = Paragraph::new(text).fg(Color::Yellow);
    frame.render_widget(widget, area);
}

fn render_score(frame: &mut Frame, area: Rect, score: u32) {
    let widget = Paragraph::new(format!("Score: {}", score))
        .fg(Color::Blue)
        .bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter answer  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

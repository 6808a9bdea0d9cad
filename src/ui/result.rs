use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::ResultsScreen;
use crate::results::{ConfettiField, Verdict};

pub fn render(frame: &mut Frame, area: Rect, screen: &ResultsScreen) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
    ])
    .split(area);
    let card = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(44),
        Constraint::Fill(1),
    ])
    .split(chunks[1])[1];

    render_card(frame, card, screen);

    if let Some(confetti) = screen.confetti() {
        render_confetti(frame, area, confetti);
    }
}

fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Positive => Color::Green,
        Verdict::Negative => Color::Yellow,
    }
}

fn render_card(frame: &mut Frame, area: Rect, screen: &ResultsScreen) {
    let evaluation = screen.evaluation();
    let color = verdict_color(evaluation.verdict);

    let content = vec![
        Line::from(""),
        Line::from(evaluation.verdict.emoji()),
        Line::from(Span::styled(
            evaluation.verdict.headline(),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}%", screen.counter()),
            Style::default().fg(Color::LightBlue).bold(),
        )),
        Line::from(Span::styled(
            format!("{} / {} correct", evaluation.score, evaluation.total),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ Start Again ]",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("r restart  ·  q quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_confetti(frame: &mut Frame, area: Rect, confetti: &ConfettiField) {
    let buffer = frame.buffer_mut();
    for piece in confetti.visible() {
        let x = area.x + (piece.x * f32::from(area.width)) as u16;
        let y = area.y + (piece.y * f32::from(area.height)) as u16;
        if let Some(cell) = buffer.cell_mut((x, y)) {
            cell.set_char(piece.glyph).set_fg(piece.color);
        }
    }
}

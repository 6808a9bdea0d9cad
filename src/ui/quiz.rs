use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::QuizScreen;
use crate::quiz::QuizController;

const OPTION_LABELS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];
const PROGRESS_SEGMENT: &str = "━━━━━━";
/// Horizontal distance a question slides in from.
const SLIDE_COLUMNS: f32 = 8.0;

pub fn render(frame: &mut Frame, area: Rect, screen: &QuizScreen) {
    let quiz = screen.controller();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Length(1), // Subtitle
        Constraint::Length(1),
        Constraint::Length(1), // Progress
        Constraint::Length(1),
        Constraint::Fill(1),   // Question and options
        Constraint::Length(1), // Best of luck
        Constraint::Length(1), // Controls
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], chunks[1]);
    render_progress(frame, chunks[3], quiz);
    render_question(
        frame,
        slide_in(chunks[5], screen.transition_progress()),
        screen,
    );

    if quiz.current_index() == 0 {
        render_best_of_luck(frame, chunks[6]);
    }
    render_controls(frame, chunks[7], quiz);
}

fn render_header(frame: &mut Frame, title_area: Rect, subtitle_area: Rect) {
    let title = Paragraph::new("Test Your Knowledge")
        .alignment(Alignment::Center)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(title, title_area);

    let subtitle = Paragraph::new("Answer all questions to see your results")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(subtitle, subtitle_area);
}

fn render_progress(frame: &mut Frame, area: Rect, quiz: &QuizController) {
    let mut spans = Vec::with_capacity(quiz.question_count() * 2 + 1);
    for index in 0..quiz.question_count() {
        let color = if index <= quiz.current_index() {
            Color::White
        } else {
            Color::DarkGray
        };
        spans.push(Span::styled(PROGRESS_SEGMENT, Style::default().fg(color)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!(" {}/{}", quiz.current_index() + 1, quiz.question_count()),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Shift `area` right while a question is sliding in.
fn slide_in(area: Rect, progress: f32) -> Rect {
    let offset = (((1.0 - progress) * SLIDE_COLUMNS).round() as u16).min(area.width);
    Rect {
        x: area.x + offset,
        width: area.width - offset,
        ..area
    }
}

fn render_question(frame: &mut Frame, area: Rect, screen: &QuizScreen) {
    let quiz = screen.controller();
    let question = quiz.current_question();
    let chosen = quiz.current_answer_index();

    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2 + 2);
    lines.push(Line::from(Span::styled(
        format!("{}. {}", quiz.current_index() + 1, question.prompt),
        Style::default().fg(Color::White).bold(),
    )));
    lines.push(Line::from(""));

    for (index, option) in question.options.iter().enumerate() {
        let is_focused = index == screen.focused_option();
        let style = if chosen == Some(index) {
            Style::default().fg(Color::White).bg(Color::Blue).bold()
        } else if is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_focused { ">" } else { " " };
        let label = OPTION_LABELS.get(index).copied().unwrap_or(' ');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), Style::default().fg(Color::Cyan)),
            Span::styled(format!(" {}. {} ", label, option), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::new(2, 2, 1, 0)),
    );
    frame.render_widget(widget, area);
}

fn render_best_of_luck(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("🐾 Best of luck!")
        .alignment(Alignment::Left)
        .fg(Color::Yellow);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, quiz: &QuizController) {
    let enabled = Style::default().fg(Color::Gray);
    let disabled = Style::default().fg(Color::DarkGray);
    let dim = |allowed: bool| if allowed { enabled } else { disabled };

    let forward = if quiz.is_last() {
        Span::styled("→ submit", dim(quiz.can_submit()))
    } else {
        Span::styled("→ next", dim(quiz.can_go_next()))
    };

    let line = Line::from(vec![
        Span::styled("← back", dim(quiz.can_go_previous())),
        Span::styled("  ·  ", disabled),
        forward,
        Span::styled("  ·  j/k move  ·  enter choose  ·  q quit", disabled),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

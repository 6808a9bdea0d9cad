mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen() {
        Screen::Quiz(screen) => quiz::render(frame, area, screen),
        Screen::Results(screen) => result::render(frame, area, screen),
    }
}

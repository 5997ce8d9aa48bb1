mod game_over;
mod quiz;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::GameState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Black), area);

    match app.state {
        GameState::Running => quiz::render(frame, area, app),
        GameState::GameOver => game_over::render(frame, area, app.score()),
    }
}

use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_overview_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up => app.select_previous_filter_field(),
        KeyCode::Down => app.select_next_filter_field(),
        KeyCode::Left => app.cycle_filter_value(false),
        KeyCode::Right => app.cycle_filter_value(true),
        _ => {}
    }
}

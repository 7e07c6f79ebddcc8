use crate::app::state::App;
use crossterm::event::KeyCode;

const PAGE_ROWS: usize = 5;

pub fn handle_vehicles_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up => app.select_previous_vehicle(),
        KeyCode::Down => app.select_next_vehicle(),
        KeyCode::PageUp => app.jump_vehicles(false, PAGE_ROWS),
        KeyCode::PageDown => app.jump_vehicles(true, PAGE_ROWS),
        KeyCode::Home => app.selected_vehicle_index = 0,
        KeyCode::End => {
            app.selected_vehicle_index = app.visible_vehicle_indices.len().saturating_sub(1);
        }
        KeyCode::Char('/') => app.search_active = true,
        KeyCode::Esc => app.toggle_screen(),
        _ => {}
    }
}

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.search_active = false;
            app.search_query.clear();
        }
        KeyCode::Enter => {
            app.search_active = false;
        }
        KeyCode::Backspace => {
            app.search_query.pop();
        }
        KeyCode::Char(ch) => {
            app.search_query.push(ch);
        }
        _ => return,
    }

    app.selected_vehicle_index = 0;
    app.apply_search();
}

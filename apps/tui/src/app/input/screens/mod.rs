use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod help;
mod overview;
mod vehicles;

pub async fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if app.search_active {
        vehicles::handle_search_input(app, key);
        return;
    }

    if handle_global_input(app, key).await {
        return;
    }

    match app.screen {
        AppScreen::Overview => overview::handle_overview_input(app, key),
        AppScreen::Vehicles => vehicles::handle_vehicles_input(app, key),
    }
}

/// Keys that behave the same on every screen. Returns whether the key was
/// consumed.
async fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Tab => app.toggle_screen(),
        KeyCode::Char('r') => app.refresh().await,
        KeyCode::Char('c') => app.clear_filters(),
        KeyCode::Char('[') => app.nudge_min_utilization(false),
        KeyCode::Char(']') => app.nudge_min_utilization(true),
        _ => return false,
    }
    true
}

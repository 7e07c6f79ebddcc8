// App module for the fleet dashboard
// Holds application state, snapshot actions and keyboard handling

pub mod actions;
pub mod input;
pub mod state;

pub use actions::AppActions;
pub use input::handle_input;
pub use state::{App, AppScreen, FilterField};

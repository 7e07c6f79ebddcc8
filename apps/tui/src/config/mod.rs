mod env;

pub use env::{init_app_config, FleetConfig};

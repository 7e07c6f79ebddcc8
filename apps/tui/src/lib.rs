// Library surface shared by the binary and the integration tests
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod event;
pub mod fleet;
pub mod terminal;
pub mod ui;

pub use domain::{MaintenanceStatus, Ownership, Shift, VehicleClass, VehicleStatus};
pub use fleet::{FilterCriteria, FleetError, FleetQueryEngine, FleetSnapshot, SyntheticFleet};

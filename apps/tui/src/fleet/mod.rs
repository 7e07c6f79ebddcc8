pub mod engine;
pub mod error;
pub mod generator;
pub mod models;
pub mod queries;
pub mod snapshot;

pub use engine::FleetQueryEngine;
pub use error::FleetError;
pub use generator::SyntheticFleet;
pub use models::{FilterCriteria, FleetDashboard, VehicleRecord};
pub use snapshot::FleetSnapshot;

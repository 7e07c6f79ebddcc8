#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use fleet_dashboard::domain::{MaintenanceStatus, Shift, VehicleClass, VehicleStatus};
use fleet_dashboard::fleet::models::{Location, VehicleRecord};

pub fn vehicle(id: &str, status: VehicleStatus, utilization: f64) -> VehicleRecord {
    VehicleRecord {
        id: id.to_string(),
        name: format!("Vehicle {id}"),
        vehicle_class: VehicleClass::Scorpio,
        status,
        utilization_percent: utilization,
        fuel_percent: 75.0,
        odometer_km: 40_000,
        last_update: Utc
            .with_ymd_and_hms(2024, 6, 1, 8, 0, 0)
            .single()
            .unwrap_or_default(),
        vendor_name: "Sanjay".to_string(),
        shift: Shift::A,
        trip_count: 3,
        idle_time_score: 1.0,
        maintenance_status: MaintenanceStatus::Good,
        age_years: 3,
        downtime_hours: 1.0,
        location: Location {
            lat: 28.6139,
            lng: 77.2090,
        },
    }
}

/// A, B, C, D from the four-vehicle reference fleet.
pub fn reference_fleet() -> Vec<VehicleRecord> {
    vec![
        vehicle("A", VehicleStatus::Active, 80.0),
        vehicle("B", VehicleStatus::Idle, 40.0),
        vehicle("C", VehicleStatus::Maintenance, 0.0),
        vehicle("D", VehicleStatus::Active, 60.0),
    ]
}

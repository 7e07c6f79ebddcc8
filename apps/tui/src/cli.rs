use crate::config::FleetConfig;
use crate::domain::{MaintenanceStatus, Ownership, Shift, VehicleClass, VehicleStatus};
use crate::fleet::FilterCriteria;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fleet_dashboard", version, about = "Fleet utilization dashboard")]
pub struct CliArgs {
    /// Print dashboard stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Load the fleet snapshot from a JSON file instead of generating one
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Write the loaded snapshot to a JSON file
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Synthetic fleet size
    #[arg(long, value_name = "N")]
    pub size: Option<usize>,

    /// Seed for the synthetic fleet generator
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Number of vehicles in the idle-time ranking
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Only vehicles of this class (Scorpio, Bolero, Safari, "Mini Van")
    #[arg(long, value_name = "CLASS", value_parser = parse_vehicle_class)]
    pub class: Option<VehicleClass>,

    /// Only vehicles with this status (active, idle, maintenance)
    #[arg(long, value_name = "STATUS", value_parser = parse_vehicle_status)]
    pub status: Option<VehicleStatus>,

    /// Only vehicles operated by this vendor
    #[arg(long, value_name = "NAME")]
    pub vendor: Option<String>,

    /// Only vehicles on this shift (A, B, C)
    #[arg(long, value_name = "SHIFT", value_parser = parse_shift)]
    pub shift: Option<Shift>,

    /// Only vehicles in this condition (excellent, good, fair, repair)
    #[arg(long, value_name = "STATUS", value_parser = parse_maintenance_status)]
    pub maintenance: Option<MaintenanceStatus>,

    /// Only company-owned (own) or third-party (vendor) vehicles
    #[arg(long, value_name = "OWNERSHIP", value_parser = parse_ownership)]
    pub ownership: Option<Ownership>,

    /// Minimum utilization percentage (inclusive)
    #[arg(long = "min-util", value_name = "PERCENT", value_parser = parse_percent)]
    pub min_util: Option<f64>,

    /// Maximum utilization percentage (inclusive)
    #[arg(long = "max-util", value_name = "PERCENT", value_parser = parse_percent)]
    pub max_util: Option<f64>,
}

impl CliArgs {
    /// Applies the flags on top of an environment-derived configuration.
    pub fn override_config(&self, mut config: FleetConfig) -> FleetConfig {
        if let Some(path) = &self.data {
            config.data_path = Some(path.clone());
        }
        if let Some(size) = self.size {
            config.fleet_size = size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(top) = self.top {
            config.idle_top_n = top;
        }
        config.debug |= self.debug;
        config
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            vehicle_class: self.class,
            status: self.status,
            vendor: self.vendor.clone(),
            shift: self.shift,
            maintenance_status: self.maintenance,
            ownership: self.ownership,
            utilization_min: self.min_util,
            utilization_max: self.max_util,
        }
    }
}

fn unknown(kind: &str, value: &str, expected: &[&str]) -> String {
    format!("unknown {kind} {value:?}, expected one of: {}", expected.join(", "))
}

fn parse_vehicle_class(value: &str) -> Result<VehicleClass, String> {
    VehicleClass::parse(value)
        .ok_or_else(|| unknown("vehicle class", value, &VehicleClass::ALL.map(VehicleClass::label)))
}

fn parse_vehicle_status(value: &str) -> Result<VehicleStatus, String> {
    VehicleStatus::parse(value)
        .ok_or_else(|| unknown("status", value, &VehicleStatus::ALL.map(VehicleStatus::as_str)))
}

fn parse_shift(value: &str) -> Result<Shift, String> {
    Shift::parse(value).ok_or_else(|| unknown("shift", value, &Shift::ALL.map(Shift::label)))
}

fn parse_maintenance_status(value: &str) -> Result<MaintenanceStatus, String> {
    MaintenanceStatus::parse(value).ok_or_else(|| {
        unknown(
            "maintenance status",
            value,
            &MaintenanceStatus::ALL.map(MaintenanceStatus::as_str),
        )
    })
}

fn parse_ownership(value: &str) -> Result<Ownership, String> {
    Ownership::parse(value)
        .ok_or_else(|| unknown("ownership", value, &Ownership::ALL.map(Ownership::as_str)))
}

fn parse_percent(value: &str) -> Result<f64, String> {
    let percent: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("{value:?} is not a number"))?;
    if (0.0..=100.0).contains(&percent) {
        Ok(percent)
    } else {
        Err(format!("{percent} is outside 0-100"))
    }
}

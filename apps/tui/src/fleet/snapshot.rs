use crate::domain::{roster_vendor, MaintenanceStatus, Shift, VehicleClass, VehicleStatus};
use crate::fleet::error::FleetError;
use crate::fleet::models::{Location, VehicleRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::Arc;

/// The on-disk form of a vehicle, with enumerations as free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVehicleRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub status: String,
    pub utilization: f64,
    pub location: Location,
    pub fuel: f64,
    pub mileage: u64,
    pub last_update: DateTime<Utc>,
    pub vendor: String,
    pub shift: String,
    #[serde(default)]
    pub trip_count: u32,
    pub idle_time: f64,
    pub maintenance_status: String,
    pub age: u32,
    pub downtime: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    vehicles: Vec<RawVehicleRecord>,
}

fn parse_field<T>(
    record: &str,
    field: &'static str,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, FleetError> {
    parse(value).ok_or_else(|| FleetError::UnknownValue {
        record: record.to_string(),
        field,
        value: value.to_string(),
    })
}

fn check_range(
    record: &str,
    field: &'static str,
    value: f64,
    max: Option<f64>,
) -> Result<f64, FleetError> {
    let in_range = value.is_finite() && value >= 0.0 && max.map_or(true, |max| value <= max);
    if in_range {
        Ok(value)
    } else {
        Err(FleetError::OutOfRange {
            record: record.to_string(),
            field,
            value,
        })
    }
}

impl TryFrom<RawVehicleRecord> for VehicleRecord {
    type Error = FleetError;

    fn try_from(raw: RawVehicleRecord) -> Result<Self, Self::Error> {
        let id = raw.id.as_str();
        parse_field(id, "vendor", &raw.vendor, roster_vendor)?;
        Ok(Self {
            vehicle_class: parse_field(id, "type", &raw.vehicle_type, VehicleClass::parse)?,
            status: parse_field(id, "status", &raw.status, VehicleStatus::parse)?,
            shift: parse_field(id, "shift", &raw.shift, Shift::parse)?,
            maintenance_status: parse_field(
                id,
                "maintenanceStatus",
                &raw.maintenance_status,
                MaintenanceStatus::parse,
            )?,
            utilization_percent: check_range(id, "utilization", raw.utilization, Some(100.0))?,
            fuel_percent: check_range(id, "fuel", raw.fuel, Some(100.0))?,
            idle_time_score: check_range(id, "idleTime", raw.idle_time, None)?,
            downtime_hours: check_range(id, "downtime", raw.downtime, None)?,
            odometer_km: raw.mileage,
            last_update: raw.last_update,
            vendor_name: raw.vendor,
            trip_count: raw.trip_count,
            age_years: raw.age,
            location: raw.location,
            name: raw.name,
            id: raw.id,
        })
    }
}

impl From<&VehicleRecord> for RawVehicleRecord {
    fn from(record: &VehicleRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            vehicle_type: record.vehicle_class.label().to_string(),
            status: record.status.as_str().to_string(),
            utilization: record.utilization_percent,
            location: record.location,
            fuel: record.fuel_percent,
            mileage: record.odometer_km,
            last_update: record.last_update,
            vendor: record.vendor_name.clone(),
            shift: record.shift.label().to_string(),
            trip_count: record.trip_count,
            idle_time: record.idle_time_score,
            maintenance_status: record.maintenance_status.as_str().to_string(),
            age: record.age_years,
            downtime: record.downtime_hours,
        }
    }
}

/// An immutable, validated set of vehicle records.
///
/// Cloning shares the underlying records, so one snapshot can be handed to
/// any number of readers (including across threads) without locking.
#[derive(Debug, Clone)]
pub struct FleetSnapshot {
    records: Arc<[VehicleRecord]>,
    created_at: DateTime<Utc>,
}

impl FleetSnapshot {
    /// Builds a snapshot from already-typed records, rejecting duplicate ids.
    pub fn new(records: Vec<VehicleRecord>) -> Result<Self, FleetError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(FleetError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self {
            records: records.into(),
            created_at: Utc::now(),
        })
    }

    pub fn empty() -> Self {
        Self {
            records: Arc::from(Vec::new()),
            created_at: Utc::now(),
        }
    }

    /// Validates every raw record; the first integrity violation aborts the
    /// load.
    pub fn from_raw(raw: Vec<RawVehicleRecord>) -> Result<Self, FleetError> {
        let records = raw
            .into_iter()
            .map(VehicleRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(records)
    }

    /// Accepts either `{"vehicles": [...]}` or a bare array of vehicles.
    pub fn from_json(json: &str) -> Result<Self, FleetError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let raw = if value.is_array() {
            serde_json::from_value::<Vec<RawVehicleRecord>>(value)?
        } else {
            serde_json::from_value::<SnapshotFile>(value)?.vehicles
        };
        Self::from_raw(raw)
    }

    pub async fn load_json(path: impl AsRef<Path>) -> Result<Self, FleetError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        let snapshot = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.display(),
            vehicles = snapshot.len(),
            "loaded fleet snapshot"
        );
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, FleetError> {
        let file = SnapshotFile {
            vehicles: self.records.iter().map(RawVehicleRecord::from).collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub async fn write_json(&self, path: impl AsRef<Path>) -> Result<(), FleetError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(path, self.to_json()?).await?;
        tracing::debug!(path = %path.display(), vehicles = self.len(), "exported fleet snapshot");
        Ok(())
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Distinct vendor names, sorted.
    pub fn vendor_names(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .records
            .iter()
            .map(|record| record.vendor_name.as_str())
            .collect();
        names.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::SyntheticFleet;

    fn raw_vehicle(id: &str) -> RawVehicleRecord {
        RawVehicleRecord {
            id: id.to_string(),
            name: format!("Vehicle {id}"),
            vehicle_type: "Mini Van".to_string(),
            status: "active".to_string(),
            utilization: 72.0,
            location: Location {
                lat: 28.61,
                lng: 77.21,
            },
            fuel: 80.0,
            mileage: 31_000,
            last_update: Utc::now(),
            vendor: "Sanjay".to_string(),
            shift: "Shift A".to_string(),
            trip_count: 4,
            idle_time: 2.5,
            maintenance_status: "good".to_string(),
            age: 3,
            downtime: 1.25,
        }
    }

    #[test]
    fn from_raw_accepts_valid_records() -> Result<(), FleetError> {
        let snapshot = FleetSnapshot::from_raw(vec![raw_vehicle("VH001"), raw_vehicle("VH002")])?;
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.records()[0].vehicle_class, VehicleClass::MiniVan);
        assert_eq!(snapshot.records()[1].shift, Shift::A);
        Ok(())
    }

    #[test]
    fn unknown_status_is_a_data_integrity_error() {
        let mut raw = raw_vehicle("VH009");
        raw.status = "parked".to_string();

        let err = FleetSnapshot::from_raw(vec![raw]).unwrap_err();
        assert!(err.is_data_integrity());
        assert!(matches!(
            err,
            FleetError::UnknownValue { ref record, field: "status", ref value }
                if record == "VH009" && value == "parked"
        ));
    }

    #[test]
    fn out_of_range_utilization_is_rejected() {
        let mut raw = raw_vehicle("VH010");
        raw.utilization = 120.0;
        let err = FleetSnapshot::from_raw(vec![raw]).unwrap_err();
        assert!(matches!(err, FleetError::OutOfRange { field: "utilization", .. }));

        let mut raw = raw_vehicle("VH011");
        raw.downtime = f64::NAN;
        let err = FleetSnapshot::from_raw(vec![raw]).unwrap_err();
        assert!(matches!(err, FleetError::OutOfRange { field: "downtime", .. }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = FleetSnapshot::from_raw(vec![raw_vehicle("VH001"), raw_vehicle("VH001")])
            .unwrap_err();
        assert!(matches!(err, FleetError::DuplicateId(ref id) if id == "VH001"));
    }

    #[test]
    fn json_accepts_wrapped_and_bare_arrays() -> Result<(), FleetError> {
        let vehicles = vec![raw_vehicle("VH001")];
        let bare = serde_json::to_string(&vehicles)?;
        let wrapped = serde_json::to_string(&SnapshotFile { vehicles })?;

        assert_eq!(FleetSnapshot::from_json(&bare)?.len(), 1);
        assert_eq!(FleetSnapshot::from_json(&wrapped)?.len(), 1);
        Ok(())
    }

    #[test]
    fn malformed_json_is_not_a_data_integrity_error() {
        let err = FleetSnapshot::from_json("{\"vehicles\": 3}").unwrap_err();
        assert!(matches!(err, FleetError::Json(_)));
        assert!(!err.is_data_integrity());
    }

    #[test]
    fn off_roster_vendor_is_rejected() {
        let mut raw = raw_vehicle("VH012");
        raw.vendor = "Acme Rentals".to_string();

        let err = FleetSnapshot::from_raw(vec![raw]).unwrap_err();
        assert!(err.is_data_integrity());
        assert!(matches!(
            err,
            FleetError::UnknownValue { ref record, field: "vendor", ref value }
                if record == "VH012" && value == "Acme Rentals"
        ));
    }

    #[test]
    fn export_round_trips_through_loader() -> Result<(), FleetError> {
        let snapshot = SyntheticFleet::new(150).with_seed(2).generate()?;
        let reloaded = FleetSnapshot::from_json(&snapshot.to_json()?)?;
        assert_eq!(reloaded.records(), snapshot.records());
        Ok(())
    }

    #[tokio::test]
    async fn write_and_load_json_file() -> Result<(), Box<dyn std::error::Error>> {
        let path = std::env::temp_dir().join(format!(
            "fleet-snapshot-{}-{}.json",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let snapshot = FleetSnapshot::from_raw(vec![raw_vehicle("VH042")])?;

        snapshot.write_json(&path).await?;
        let loaded = FleetSnapshot::load_json(&path).await?;
        tokio::fs::remove_file(&path).await?;

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.records()[0].id, "VH042");
        Ok(())
    }

    #[test]
    fn vendor_names_are_distinct_and_sorted() -> Result<(), FleetError> {
        let mut other = raw_vehicle("VH002");
        other.vendor = "John".to_string();
        let snapshot =
            FleetSnapshot::from_raw(vec![raw_vehicle("VH001"), other, raw_vehicle("VH003")])?;
        assert_eq!(snapshot.vendor_names(), vec!["John", "Sanjay"]);
        Ok(())
    }

    #[test]
    fn clones_share_records() -> Result<(), FleetError> {
        let snapshot = FleetSnapshot::from_raw(vec![raw_vehicle("VH001")])?;
        let shared = snapshot.clone();
        assert!(std::ptr::eq(snapshot.records(), shared.records()));
        Ok(())
    }
}

use crate::domain::{ownership_of, MaintenanceStatus, Ownership, Shift, VehicleClass, VehicleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// One vehicle in a snapshot. Records are validated when the snapshot is
/// built and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub id: String,
    pub name: String,
    pub vehicle_class: VehicleClass,
    pub status: VehicleStatus,
    /// Within `[0, 100]`.
    pub utilization_percent: f64,
    /// Within `[0, 100]`.
    pub fuel_percent: f64,
    pub odometer_km: u64,
    pub last_update: DateTime<Utc>,
    pub vendor_name: String,
    pub shift: Shift,
    pub trip_count: u32,
    /// Idle hours over the reporting window.
    pub idle_time_score: f64,
    pub maintenance_status: MaintenanceStatus,
    pub age_years: u32,
    pub downtime_hours: f64,
    pub location: Location,
}

impl VehicleRecord {
    pub fn ownership(&self) -> Ownership {
        ownership_of(&self.vendor_name)
    }
}

/// A whole-number percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// Rounds half away from zero and clamps into range. Non-finite input maps
    /// to zero.
    pub fn from_rounded(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    /// `part / whole * 100`, rounded. Zero when `whole` is zero.
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        Self::from_rounded(part as f64 / whole as f64 * 100.0)
    }

    /// Rounded mean of percentage values. Zero when `count` is zero.
    pub fn mean(sum: f64, count: usize) -> Self {
        if count == 0 {
            return Self::ZERO;
        }
        Self::from_rounded(sum / count as f64)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn complement(self) -> Self {
        Self(100 - self.0)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub active: usize,
    pub idle: usize,
    pub maintenance: usize,
}

impl StatusCounts {
    pub const fn count(&self, status: VehicleStatus) -> usize {
        match status {
            VehicleStatus::Active => self.active,
            VehicleStatus::Idle => self.idle,
            VehicleStatus::Maintenance => self.maintenance,
        }
    }

    pub fn record(&mut self, status: VehicleStatus) {
        match status {
            VehicleStatus::Active => self.active += 1,
            VehicleStatus::Idle => self.idle += 1,
            VehicleStatus::Maintenance => self.maintenance += 1,
        }
    }

    pub const fn total(&self) -> usize {
        self.active + self.idle + self.maintenance
    }
}

/// Fleet-wide KPIs. The `Default` value is the defined result for an empty
/// record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FleetMetrics {
    pub total_count: usize,
    pub status_counts: StatusCounts,
    pub mean_utilization: Percentage,
    pub mean_fuel: Percentage,
    pub total_odometer_km: u64,
    /// Share of vehicles that are active.
    pub utilization_rate: Percentage,
}

impl FleetMetrics {
    pub const fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Active versus everything else. For a non-empty set the two shares always
/// sum to exactly 100; an empty set reports zero for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UtilizationSplit {
    pub active_share: Percentage,
    pub idle_or_other_share: Percentage,
}

impl UtilizationSplit {
    pub const EMPTY: Self = Self {
        active_share: Percentage::ZERO,
        idle_or_other_share: Percentage::ZERO,
    };

    pub fn from_active_share(active_share: Percentage) -> Self {
        Self {
            active_share,
            idle_or_other_share: active_share.complement(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OwnershipSplits {
    pub own: UtilizationSplit,
    pub vendor: UtilizationSplit,
}

impl OwnershipSplits {
    pub const fn get(&self, ownership: Ownership) -> UtilizationSplit {
        match ownership {
            Ownership::Own => self.own,
            Ownership::Vendor => self.vendor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAverage<K> {
    pub category: K,
    pub mean_utilization: Percentage,
    pub vehicle_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorRanking {
    pub vendor_name: String,
    pub mean_utilization: Percentage,
    pub vehicle_count: usize,
}

impl From<CategoryAverage<String>> for VendorRanking {
    fn from(group: CategoryAverage<String>) -> Self {
        Self {
            vendor_name: group.category,
            mean_utilization: group.mean_utilization,
            vehicle_count: group.vehicle_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdleTimeEntry {
    pub vehicle_id: String,
    /// Idle hours on a 0-100 scale (tenths of an hour).
    pub idle_score: u32,
}

/// A duration shown as `hours:minutes`, held in whole minutes so the minute
/// part never reaches 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(into = "String")]
pub struct DowntimeDuration {
    total_minutes: u32,
}

impl DowntimeDuration {
    pub fn from_hours(hours: f64) -> Self {
        if !hours.is_finite() || hours <= 0.0 {
            return Self::default();
        }
        Self {
            total_minutes: (hours * 60.0).round() as u32,
        }
    }

    pub const fn from_minutes(total_minutes: u32) -> Self {
        Self { total_minutes }
    }

    pub const fn hours(self) -> u32 {
        self.total_minutes / 60
    }

    pub const fn minutes(self) -> u32 {
        self.total_minutes % 60
    }

    pub const fn total_minutes(self) -> u32 {
        self.total_minutes
    }
}

impl fmt::Display for DowntimeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours(), self.minutes())
    }
}

impl From<DowntimeDuration> for String {
    fn from(duration: DowntimeDuration) -> Self {
        duration.to_string()
    }
}

/// Maintenance KPIs. The `Default` value is the defined result for an empty
/// record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MaintenanceSummary {
    pub mean_downtime: DowntimeDuration,
    /// Vehicles whose maintenance status is `Repair`.
    pub overdue_count: usize,
    /// Vehicles in `Fair` condition or older than five years.
    pub due_soon_count: usize,
    /// Vehicles currently out of service for maintenance.
    pub unplanned_breakdowns: usize,
    pub compliance: Percentage,
    pub mean_age_years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DispatchSummary {
    pub active_count: usize,
    pub dispatch_coverage: Percentage,
    pub available_per_request: f64,
    pub available_per_peak_request: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramBucket {
    pub lower: u8,
    pub upper: u8,
    pub count: usize,
}

impl HistogramBucket {
    pub fn label(&self) -> String {
        format!("{}-{}", self.lower, self.upper)
    }
}

/// Optional per-field constraints over a snapshot. An absent field does not
/// constrain; present fields are combined with logical AND. Utilization
/// bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FilterCriteria {
    pub vehicle_class: Option<VehicleClass>,
    pub status: Option<VehicleStatus>,
    pub vendor: Option<String>,
    pub shift: Option<Shift>,
    pub maintenance_status: Option<MaintenanceStatus>,
    pub ownership: Option<Ownership>,
    pub utilization_min: Option<f64>,
    pub utilization_max: Option<f64>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_class(mut self, class: VehicleClass) -> Self {
        self.vehicle_class = Some(class);
        self
    }

    pub const fn with_status(mut self, status: VehicleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub const fn with_shift(mut self, shift: Shift) -> Self {
        self.shift = Some(shift);
        self
    }

    pub const fn with_maintenance_status(mut self, status: MaintenanceStatus) -> Self {
        self.maintenance_status = Some(status);
        self
    }

    pub const fn with_ownership(mut self, ownership: Ownership) -> Self {
        self.ownership = Some(ownership);
        self
    }

    pub const fn with_utilization_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.utilization_min = min;
        self.utilization_max = max;
        self
    }

    pub fn matches(&self, record: &VehicleRecord) -> bool {
        self.vehicle_class
            .map_or(true, |class| record.vehicle_class == class)
            && self.status.map_or(true, |status| record.status == status)
            && self
                .vendor
                .as_deref()
                .map_or(true, |vendor| record.vendor_name == vendor)
            && self.shift.map_or(true, |shift| record.shift == shift)
            && self
                .maintenance_status
                .map_or(true, |status| record.maintenance_status == status)
            && self
                .ownership
                .map_or(true, |ownership| record.ownership() == ownership)
            && self
                .utilization_min
                .map_or(true, |min| record.utilization_percent >= min)
            && self
                .utilization_max
                .map_or(true, |max| record.utilization_percent <= max)
    }

    /// Number of fields that constrain the result.
    pub fn active_count(&self) -> usize {
        [
            self.vehicle_class.is_some(),
            self.status.is_some(),
            self.vendor.is_some(),
            self.shift.is_some(),
            self.maintenance_status.is_some(),
            self.ownership.is_some(),
            self.utilization_min.is_some(),
            self.utilization_max.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Human-readable `field=value` pairs for the present constraints.
    pub fn describe(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(class) = self.vehicle_class {
            parts.push(format!("class={}", class.label()));
        }
        if let Some(status) = self.status {
            parts.push(format!("status={}", status.label()));
        }
        if let Some(vendor) = &self.vendor {
            parts.push(format!("vendor={vendor}"));
        }
        if let Some(shift) = self.shift {
            parts.push(format!("shift={}", shift.label()));
        }
        if let Some(status) = self.maintenance_status {
            parts.push(format!("maintenance={}", status.label()));
        }
        if let Some(ownership) = self.ownership {
            parts.push(format!("ownership={}", ownership.as_str()));
        }
        if let Some(min) = self.utilization_min {
            parts.push(format!("util>={min}"));
        }
        if let Some(max) = self.utilization_max {
            parts.push(format!("util<={max}"));
        }
        parts
    }
}

/// Every aggregate for one filter, computed from the same filtered set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetDashboard {
    pub criteria: FilterCriteria,
    pub metrics: FleetMetrics,
    pub utilization_split: UtilizationSplit,
    pub ownership_splits: OwnershipSplits,
    pub by_class: Vec<CategoryAverage<VehicleClass>>,
    pub by_shift: Vec<CategoryAverage<Shift>>,
    pub vendor_ranking: Vec<VendorRanking>,
    pub idle_ranking: Vec<IdleTimeEntry>,
    pub maintenance: MaintenanceSummary,
    pub dispatch: DispatchSummary,
    pub histogram: Vec<HistogramBucket>,
}

impl FleetDashboard {
    pub const fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

//! Pure filters and aggregations over a slice of vehicle records.
//!
//! None of these fail. Every mean or ratio checks its denominator and an
//! empty input produces the zero value of the result type.

use crate::domain::{MaintenanceStatus, Ownership, Shift, VehicleClass, VehicleStatus};
use crate::fleet::models::{
    CategoryAverage, DispatchSummary, DowntimeDuration, FilterCriteria, FleetMetrics,
    HistogramBucket, IdleTimeEntry, MaintenanceSummary, OwnershipSplits, Percentage,
    StatusCounts, UtilizationSplit, VehicleRecord, VendorRanking,
};
use std::collections::HashMap;
use std::hash::Hash;

pub const DEFAULT_IDLE_TOP_N: usize = 20;

/// Vehicles older than this are due for service regardless of condition.
const SERVICE_AGE_YEARS: u32 = 5;
const REQUEST_WINDOW: f64 = 100.0;
const PEAK_REQUEST_WINDOW: f64 = 20.0;
const HISTOGRAM_BUCKET_WIDTH: u8 = 10;
const HISTOGRAM_BUCKETS: usize = 10;

/// Returns the records matching every present constraint, in snapshot order.
pub fn filter_vehicles(snapshot: &[VehicleRecord], criteria: &FilterCriteria) -> Vec<VehicleRecord> {
    snapshot
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

pub fn compute_fleet_metrics(records: &[VehicleRecord]) -> FleetMetrics {
    if records.is_empty() {
        return FleetMetrics::default();
    }

    let mut status_counts = StatusCounts::default();
    let mut utilization_sum = 0.0;
    let mut fuel_sum = 0.0;
    let mut total_odometer_km = 0_u64;

    for record in records {
        status_counts.record(record.status);
        utilization_sum += record.utilization_percent;
        fuel_sum += record.fuel_percent;
        total_odometer_km = total_odometer_km.saturating_add(record.odometer_km);
    }

    let total_count = records.len();
    FleetMetrics {
        total_count,
        status_counts,
        mean_utilization: Percentage::mean(utilization_sum, total_count),
        mean_fuel: Percentage::mean(fuel_sum, total_count),
        total_odometer_km,
        utilization_rate: Percentage::of(status_counts.active, total_count),
    }
}

/// Active share and its complement. The second share is derived from the
/// first so the pair sums to 100 after rounding.
pub fn compute_utilization_split(records: &[VehicleRecord]) -> UtilizationSplit {
    if records.is_empty() {
        return UtilizationSplit::EMPTY;
    }
    let active = count_status(records, VehicleStatus::Active);
    UtilizationSplit::from_active_share(Percentage::of(active, records.len()))
}

/// Utilization split for company-owned and for third-party vehicles.
pub fn compute_ownership_splits(records: &[VehicleRecord]) -> OwnershipSplits {
    let split_for = |ownership: Ownership| {
        let subset: Vec<VehicleRecord> = records
            .iter()
            .filter(|record| record.ownership() == ownership)
            .cloned()
            .collect();
        compute_utilization_split(&subset)
    };

    OwnershipSplits {
        own: split_for(Ownership::Own),
        vendor: split_for(Ownership::Vendor),
    }
}

/// Mean utilization per category, in first-seen order.
pub fn group_average_by<K, F>(records: &[VehicleRecord], key: F) -> Vec<CategoryAverage<K>>
where
    K: Eq + Hash + Clone,
    F: Fn(&VehicleRecord) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, f64, usize)> = Vec::new();

    for record in records {
        let category = key(record);
        let index = *positions.entry(category.clone()).or_insert_with(|| {
            groups.push((category, 0.0, 0));
            groups.len() - 1
        });
        let group = &mut groups[index];
        group.1 += record.utilization_percent;
        group.2 += 1;
    }

    groups
        .into_iter()
        .map(|(category, sum, count)| CategoryAverage {
            category,
            mean_utilization: Percentage::mean(sum, count),
            vehicle_count: count,
        })
        .collect()
}

pub fn utilization_by_class(records: &[VehicleRecord]) -> Vec<CategoryAverage<VehicleClass>> {
    group_average_by(records, |record| record.vehicle_class)
}

pub fn utilization_by_shift(records: &[VehicleRecord]) -> Vec<CategoryAverage<Shift>> {
    group_average_by(records, |record| record.shift)
}

pub fn utilization_by_vendor(records: &[VehicleRecord]) -> Vec<CategoryAverage<String>> {
    group_average_by(records, |record| record.vendor_name.clone())
}

/// Vendors by mean utilization, highest first. Equal means keep first-seen
/// order.
pub fn rank_vendors(records: &[VehicleRecord]) -> Vec<VendorRanking> {
    let mut ranking: Vec<VendorRanking> = utilization_by_vendor(records)
        .into_iter()
        .map(VendorRanking::from)
        .collect();
    // `sort_by` is stable.
    ranking.sort_by(|a, b| b.mean_utilization.cmp(&a.mean_utilization));
    ranking
}

/// The `top_n` idlest vehicles, highest score first. Equal scores keep
/// snapshot order.
pub fn idle_time_ranking(records: &[VehicleRecord], top_n: usize) -> Vec<IdleTimeEntry> {
    let mut entries: Vec<IdleTimeEntry> = records
        .iter()
        .map(|record| IdleTimeEntry {
            vehicle_id: record.id.clone(),
            idle_score: idle_score(record.idle_time_score),
        })
        .collect();
    entries.sort_by(|a, b| b.idle_score.cmp(&a.idle_score));
    entries.truncate(top_n);
    entries
}

fn idle_score(idle_hours: f64) -> u32 {
    if !idle_hours.is_finite() || idle_hours <= 0.0 {
        return 0;
    }
    (idle_hours * 10.0).round() as u32
}

pub fn compute_maintenance_summary(records: &[VehicleRecord]) -> MaintenanceSummary {
    if records.is_empty() {
        return MaintenanceSummary::default();
    }

    let total = records.len();
    let downtime_sum: f64 = records.iter().map(|record| record.downtime_hours).sum();
    let age_sum: u64 = records.iter().map(|record| u64::from(record.age_years)).sum();

    let overdue_count = records
        .iter()
        .filter(|record| record.maintenance_status == MaintenanceStatus::Repair)
        .count();
    let due_soon_count = records
        .iter()
        .filter(|record| {
            record.maintenance_status == MaintenanceStatus::Fair
                || record.age_years > SERVICE_AGE_YEARS
        })
        .count();

    MaintenanceSummary {
        mean_downtime: DowntimeDuration::from_hours(downtime_sum / total as f64),
        overdue_count,
        due_soon_count,
        unplanned_breakdowns: count_status(records, VehicleStatus::Maintenance),
        compliance: Percentage::from_rounded(100.0 - overdue_count as f64 / total as f64 * 100.0),
        mean_age_years: (age_sum as f64 / total as f64).round() as u32,
    }
}

pub fn compute_dispatch_summary(records: &[VehicleRecord]) -> DispatchSummary {
    let active_count = count_status(records, VehicleStatus::Active);
    DispatchSummary {
        active_count,
        dispatch_coverage: Percentage::of(active_count, records.len()),
        available_per_request: round_hundredths(active_count as f64 / REQUEST_WINDOW),
        available_per_peak_request: round_hundredths(active_count as f64 / PEAK_REQUEST_WINDOW),
    }
}

/// Counts per 10-point utilization band. 100 falls in the top band.
pub fn utilization_histogram(records: &[VehicleRecord]) -> Vec<HistogramBucket> {
    let mut counts = [0_usize; HISTOGRAM_BUCKETS];
    for record in records {
        let band = (record.utilization_percent / f64::from(HISTOGRAM_BUCKET_WIDTH)).floor();
        let index = (band.max(0.0) as usize).min(HISTOGRAM_BUCKETS - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .zip(0_u8..)
        .map(|(count, band)| HistogramBucket {
            lower: band * HISTOGRAM_BUCKET_WIDTH,
            upper: (band + 1) * HISTOGRAM_BUCKET_WIDTH,
            count,
        })
        .collect()
}

fn count_status(records: &[VehicleRecord], status: VehicleStatus) -> usize {
    records.iter().filter(|record| record.status == status).count()
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::models::Location;
    use chrono::Utc;

    fn vehicle(id: &str, status: VehicleStatus, utilization: f64) -> VehicleRecord {
        VehicleRecord {
            id: id.to_string(),
            name: id.to_string(),
            vehicle_class: VehicleClass::Scorpio,
            status,
            utilization_percent: utilization,
            fuel_percent: 50.0,
            odometer_km: 1_000,
            last_update: Utc::now(),
            vendor_name: "John".to_string(),
            shift: Shift::A,
            trip_count: 0,
            idle_time_score: 0.0,
            maintenance_status: MaintenanceStatus::Good,
            age_years: 2,
            downtime_hours: 0.0,
            location: Location { lat: 0.0, lng: 0.0 },
        }
    }

    fn four_vehicle_snapshot() -> Vec<VehicleRecord> {
        vec![
            vehicle("A", VehicleStatus::Active, 80.0),
            vehicle("B", VehicleStatus::Idle, 40.0),
            vehicle("C", VehicleStatus::Maintenance, 0.0),
            vehicle("D", VehicleStatus::Active, 60.0),
        ]
    }

    fn ids(records: &[VehicleRecord]) -> Vec<&str> {
        records.iter().map(|record| record.id.as_str()).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let snapshot = four_vehicle_snapshot();
        assert_eq!(filter_vehicles(&snapshot, &FilterCriteria::new()), snapshot);
    }

    #[test]
    fn status_filter_keeps_snapshot_order() {
        let snapshot = four_vehicle_snapshot();
        let active = filter_vehicles(&snapshot, &FilterCriteria::new().with_status(VehicleStatus::Active));
        assert_eq!(ids(&active), ["A", "D"]);
    }

    #[test]
    fn zero_lower_bound_is_a_real_constraint() {
        let snapshot = four_vehicle_snapshot();
        let criteria = FilterCriteria::new().with_utilization_range(Some(0.0), Some(0.0));
        assert_eq!(ids(&filter_vehicles(&snapshot, &criteria)), ["C"]);

        let inverted = FilterCriteria::new().with_utilization_range(Some(90.0), Some(10.0));
        assert!(filter_vehicles(&snapshot, &inverted).is_empty());
    }

    #[test]
    fn utilization_bounds_are_inclusive() {
        let snapshot = four_vehicle_snapshot();
        let criteria = FilterCriteria::new().with_utilization_range(Some(40.0), Some(60.0));
        assert_eq!(ids(&filter_vehicles(&snapshot, &criteria)), ["B", "D"]);
    }

    #[test]
    fn ownership_filter_uses_vendor_roster() {
        let mut own = vehicle("OWN", VehicleStatus::Idle, 50.0);
        own.vendor_name = "Neha Kumari".to_string();
        let snapshot = vec![own, vehicle("V1", VehicleStatus::Active, 70.0)];

        let owned = filter_vehicles(&snapshot, &FilterCriteria::new().with_ownership(Ownership::Own));
        assert_eq!(ids(&owned), ["OWN"]);
        let vendor = filter_vehicles(&snapshot, &FilterCriteria::new().with_ownership(Ownership::Vendor));
        assert_eq!(ids(&vendor), ["V1"]);
    }

    #[test]
    fn fleet_metrics_for_four_vehicles() {
        let metrics = compute_fleet_metrics(&four_vehicle_snapshot());
        assert_eq!(metrics.total_count, 4);
        assert_eq!(metrics.status_counts.active, 2);
        assert_eq!(metrics.status_counts.idle, 1);
        assert_eq!(metrics.status_counts.maintenance, 1);
        assert_eq!(metrics.mean_utilization.value(), 45);
        assert_eq!(metrics.utilization_rate.value(), 50);
        assert_eq!(metrics.mean_fuel.value(), 50);
        assert_eq!(metrics.total_odometer_km, 4_000);
    }

    #[test]
    fn empty_set_degrades_to_zero() {
        assert_eq!(compute_fleet_metrics(&[]), FleetMetrics::default());
        assert_eq!(compute_maintenance_summary(&[]), MaintenanceSummary::default());
        assert!(compute_utilization_split(&[]).is_empty());
        assert!(group_average_by(&[], |record| record.shift).is_empty());
        assert!(rank_vendors(&[]).is_empty());
        assert!(idle_time_ranking(&[], 5).is_empty());
        assert_eq!(compute_dispatch_summary(&[]).dispatch_coverage, Percentage::ZERO);
        assert!(utilization_histogram(&[]).iter().all(|bucket| bucket.count == 0));
    }

    #[test]
    fn singleton_set_is_handled() {
        let single = vec![vehicle("S", VehicleStatus::Idle, 33.0)];
        let metrics = compute_fleet_metrics(&single);
        assert_eq!(metrics.mean_utilization.value(), 33);
        assert_eq!(metrics.utilization_rate, Percentage::ZERO);

        let split = compute_utilization_split(&single);
        assert_eq!(split.active_share, Percentage::ZERO);
        assert_eq!(split.idle_or_other_share, Percentage::FULL);
    }

    #[test]
    fn split_complement_fixes_rounding_drift() {
        // 1 of 8 active: 12.5 rounds to 13, idle 87.5 would also round up.
        let mut records = vec![vehicle("A", VehicleStatus::Active, 50.0)];
        records.extend((0..7).map(|i| vehicle(&format!("I{i}"), VehicleStatus::Idle, 50.0)));

        let split = compute_utilization_split(&records);
        assert_eq!(split.active_share.value(), 13);
        assert_eq!(split.idle_or_other_share.value(), 87);
    }

    #[test]
    fn group_average_keeps_first_seen_order() {
        let mut x = vehicle("X", VehicleStatus::Active, 80.0);
        x.vehicle_class = VehicleClass::Bolero;
        let mut y = vehicle("Y", VehicleStatus::Active, 60.0);
        y.vehicle_class = VehicleClass::Bolero;
        let mut z = vehicle("Z", VehicleStatus::Active, 50.0);
        z.vehicle_class = VehicleClass::Scorpio;

        let groups = utilization_by_class(&[x, y, z]);
        let summary: Vec<(VehicleClass, u8, usize)> = groups
            .iter()
            .map(|group| (group.category, group.mean_utilization.value(), group.vehicle_count))
            .collect();
        assert_eq!(
            summary,
            vec![(VehicleClass::Bolero, 70, 2), (VehicleClass::Scorpio, 50, 1)]
        );
    }

    #[test]
    fn vendor_ranking_sorts_descending_with_stable_ties() {
        let records: Vec<VehicleRecord> = [("Sanjay", 70.0), ("John", 90.0), ("Sabita Devi", 70.0), ("Neha Kumari", 80.0)]
            .into_iter()
            .enumerate()
            .map(|(i, (vendor, util))| {
                let mut record = vehicle(&format!("V{i}"), VehicleStatus::Active, util);
                record.vendor_name = vendor.to_string();
                record
            })
            .collect();

        let ranking: Vec<(String, u8)> = rank_vendors(&records)
            .into_iter()
            .map(|entry| (entry.vendor_name, entry.mean_utilization.value()))
            .collect();
        assert_eq!(
            ranking,
            vec![
                ("John".to_string(), 90),
                ("Neha Kumari".to_string(), 80),
                ("Sanjay".to_string(), 70),
                ("Sabita Devi".to_string(), 70),
            ]
        );
    }

    #[test]
    fn idle_ranking_truncates_and_breaks_ties_by_order() {
        let records: Vec<VehicleRecord> = [1.0, 9.1, 4.0, 9.1, 0.5, 7.25]
            .into_iter()
            .enumerate()
            .map(|(i, idle)| {
                let mut record = vehicle(&format!("VH{i}"), VehicleStatus::Idle, 50.0);
                record.idle_time_score = idle;
                record
            })
            .collect();

        let top = idle_time_ranking(&records, 3);
        let summary: Vec<(&str, u32)> = top
            .iter()
            .map(|entry| (entry.vehicle_id.as_str(), entry.idle_score))
            .collect();
        assert_eq!(summary, vec![("VH1", 91), ("VH3", 91), ("VH5", 73)]);

        assert_eq!(idle_time_ranking(&records, 20).len(), records.len());
        assert!(idle_time_ranking(&records, 0).is_empty());
    }

    #[test]
    fn maintenance_summary_counts_overdue_and_due_soon() {
        let mut repair = vehicle("R", VehicleStatus::Maintenance, 10.0);
        repair.maintenance_status = MaintenanceStatus::Repair;
        repair.downtime_hours = 4.0;
        repair.age_years = 4;
        let mut fair = vehicle("F", VehicleStatus::Active, 70.0);
        fair.maintenance_status = MaintenanceStatus::Fair;
        fair.downtime_hours = 1.0;
        fair.age_years = 2;
        let mut old = vehicle("O", VehicleStatus::Idle, 50.0);
        old.age_years = 9;
        old.downtime_hours = 2.0;
        let young = vehicle("Y", VehicleStatus::Active, 60.0);

        let summary = compute_maintenance_summary(&[repair, fair, old, young]);
        assert_eq!(summary.overdue_count, 1);
        assert_eq!(summary.due_soon_count, 2);
        assert_eq!(summary.unplanned_breakdowns, 1);
        assert_eq!(summary.compliance.value(), 75);
        assert_eq!(summary.mean_downtime.to_string(), "1:45");
        assert_eq!(summary.mean_age_years, 4);
    }

    #[test]
    fn ownership_splits_cover_each_group() {
        let mut own_active = vehicle("O1", VehicleStatus::Active, 90.0);
        own_active.vendor_name = "Thriveni Vehicles".to_string();
        let mut own_idle = vehicle("O2", VehicleStatus::Idle, 20.0);
        own_idle.vendor_name = "Chintamani Devi".to_string();
        let vendor_idle = vehicle("V1", VehicleStatus::Idle, 30.0);

        let splits = compute_ownership_splits(&[own_active, own_idle, vendor_idle]);
        assert_eq!(splits.own.active_share.value(), 50);
        assert_eq!(splits.vendor.active_share, Percentage::ZERO);
        assert_eq!(splits.vendor.idle_or_other_share, Percentage::FULL);

        let no_own = compute_ownership_splits(&[vehicle("V2", VehicleStatus::Active, 10.0)]);
        assert!(no_own.own.is_empty());
    }

    #[test]
    fn dispatch_summary_scales_active_vehicles() {
        let summary = compute_dispatch_summary(&four_vehicle_snapshot());
        assert_eq!(summary.active_count, 2);
        assert_eq!(summary.dispatch_coverage.value(), 50);
        assert!((summary.available_per_request - 0.02).abs() < f64::EPSILON);
        assert!((summary.available_per_peak_request - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn histogram_places_boundaries_in_upper_band() {
        let records = vec![
            vehicle("A", VehicleStatus::Active, 0.0),
            vehicle("B", VehicleStatus::Active, 9.9),
            vehicle("C", VehicleStatus::Active, 10.0),
            vehicle("D", VehicleStatus::Active, 100.0),
            vehicle("E", VehicleStatus::Active, 95.0),
        ];
        let histogram = utilization_histogram(&records);

        assert_eq!(histogram.len(), 10);
        assert_eq!(histogram[0].count, 2);
        assert_eq!(histogram[1].count, 1);
        assert_eq!(histogram[9].count, 2);
        assert_eq!(histogram[9].label(), "90-100");
        assert_eq!(histogram.iter().map(|bucket| bucket.count).sum::<usize>(), records.len());
    }
}

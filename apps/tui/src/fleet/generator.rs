use crate::domain::{MaintenanceStatus, Shift, VehicleClass, VehicleStatus, VENDOR_ROSTER};
use crate::fleet::error::FleetError;
use crate::fleet::models::{Location, VehicleRecord};
use crate::fleet::snapshot::FleetSnapshot;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_FLEET_SIZE: usize = 150;

const DEPOT: Location = Location {
    lat: 28.6139,
    lng: 77.2090,
};
const LOCATION_SPREAD_DEGREES: f64 = 0.1;
const UPDATE_WINDOW_SECONDS: i64 = 86_400;

/// Placeholder telemetry source: a random fleet with the same shape and value
/// ranges as the production feed.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticFleet {
    size: usize,
    seed: Option<u64>,
}

impl Default for SyntheticFleet {
    fn default() -> Self {
        Self::new(DEFAULT_FLEET_SIZE)
    }
}

impl SyntheticFleet {
    pub const fn new(size: usize) -> Self {
        Self { size, seed: None }
    }

    /// Makes generation deterministic.
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub const fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub fn generate(&self) -> Result<FleetSnapshot, FleetError> {
        self.generate_at(Utc::now())
    }

    /// Generates a snapshot whose `last_update` values fall in the 24 hours
    /// before `now`.
    pub fn generate_at(&self, now: DateTime<Utc>) -> Result<FleetSnapshot, FleetError> {
        let mut rng = self
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

        let records = (0..self.size)
            .map(|index| Self::vehicle(&mut rng, index, now))
            .collect();

        let snapshot = FleetSnapshot::new(records)?;
        tracing::debug!(
            vehicles = snapshot.len(),
            seed = ?self.seed,
            "generated synthetic fleet"
        );
        Ok(snapshot)
    }

    fn vehicle(rng: &mut StdRng, index: usize, now: DateTime<Utc>) -> VehicleRecord {
        let number = index + 1;
        let pick = |rng: &mut StdRng, len: usize| rng.gen_range(0..len);

        let vehicle_class = VehicleClass::ALL[pick(rng, VehicleClass::ALL.len())];
        let status = VehicleStatus::ALL[pick(rng, VehicleStatus::ALL.len())];
        let utilization_percent = f64::from(rng.gen_range(60_u32..100)).clamp(0.0, 100.0);
        let location = Location {
            lat: DEPOT.lat + (rng.gen::<f64>() - 0.5) * LOCATION_SPREAD_DEGREES,
            lng: DEPOT.lng + (rng.gen::<f64>() - 0.5) * LOCATION_SPREAD_DEGREES,
        };
        let fuel_percent = f64::from(rng.gen_range(60_u32..100)).clamp(0.0, 100.0);
        let odometer_km = rng.gen_range(20_000_u64..70_000);
        let last_update = now - Duration::seconds(rng.gen_range(0..UPDATE_WINDOW_SECONDS));
        let vendor_name = VENDOR_ROSTER[pick(rng, VENDOR_ROSTER.len())].to_string();
        let shift = Shift::ALL[pick(rng, Shift::ALL.len())];
        let trip_count = rng.gen_range(0_u32..20);
        let idle_time_score = rng.gen_range(0.0..10.0);
        let maintenance_status = MaintenanceStatus::ALL[pick(rng, MaintenanceStatus::ALL.len())];
        let age_years = rng.gen_range(1_u32..=10);
        let downtime_hours = rng.gen_range(0.0..5.0);

        VehicleRecord {
            id: format!("VH{number:03}"),
            name: format!("Vehicle {number}"),
            vehicle_class,
            status,
            utilization_percent,
            fuel_percent,
            odometer_km,
            last_update,
            vendor_name,
            shift,
            trip_count,
            idle_time_score,
            maintenance_status,
            age_years,
            downtime_hours,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).single().unwrap_or_default()
    }

    #[test]
    fn default_size_matches_dashboard_fleet() -> Result<(), FleetError> {
        let snapshot = SyntheticFleet::default().with_seed(1).generate_at(fixed_now())?;
        assert_eq!(snapshot.len(), DEFAULT_FLEET_SIZE);
        assert_eq!(snapshot.records()[0].id, "VH001");
        assert_eq!(snapshot.records()[149].id, "VH150");
        Ok(())
    }

    #[test]
    fn seeded_generation_is_deterministic() -> Result<(), FleetError> {
        let first = SyntheticFleet::new(40).with_seed(7).generate_at(fixed_now())?;
        let second = SyntheticFleet::new(40).with_seed(7).generate_at(fixed_now())?;
        assert_eq!(first.records(), second.records());

        let other = SyntheticFleet::new(40).with_seed(8).generate_at(fixed_now())?;
        assert_ne!(first.records(), other.records());
        Ok(())
    }

    #[test]
    fn generated_values_stay_in_range() -> Result<(), FleetError> {
        let now = fixed_now();
        let snapshot = SyntheticFleet::new(300).with_seed(42).generate_at(now)?;

        for record in snapshot.records() {
            assert!((60.0..100.0).contains(&record.utilization_percent));
            assert!((60.0..100.0).contains(&record.fuel_percent));
            assert!((20_000..70_000).contains(&record.odometer_km));
            assert!((0.0..10.0).contains(&record.idle_time_score));
            assert!((0.0..5.0).contains(&record.downtime_hours));
            assert!((1..=10).contains(&record.age_years));
            assert!(record.last_update <= now);
            assert!(record.last_update > now - Duration::seconds(UPDATE_WINDOW_SECONDS));
            assert!(VENDOR_ROSTER.contains(&record.vendor_name.as_str()));
            assert!((record.location.lat - DEPOT.lat).abs() <= 0.05);
            assert!((record.location.lng - DEPOT.lng).abs() <= 0.05);
        }
        Ok(())
    }

    #[test]
    fn empty_fleet_is_valid() -> Result<(), FleetError> {
        let snapshot = SyntheticFleet::new(0).generate()?;
        assert!(snapshot.is_empty());
        Ok(())
    }
}

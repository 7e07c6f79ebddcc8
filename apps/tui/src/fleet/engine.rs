use crate::fleet::models::{
    CategoryAverage, FilterCriteria, FleetDashboard, FleetMetrics, IdleTimeEntry,
    MaintenanceSummary, UtilizationSplit, VehicleRecord, VendorRanking,
};
use crate::fleet::queries::{self, DEFAULT_IDLE_TOP_N};
use crate::fleet::snapshot::FleetSnapshot;
use std::hash::Hash;

/// Owns the current snapshot and answers queries against it.
///
/// There is no hidden state: each call filters the snapshot afresh and
/// returns independent results. `refresh` swaps in a whole new snapshot.
#[derive(Debug, Clone)]
pub struct FleetQueryEngine {
    snapshot: FleetSnapshot,
    idle_top_n: usize,
}

impl FleetQueryEngine {
    pub const fn new(snapshot: FleetSnapshot) -> Self {
        Self {
            snapshot,
            idle_top_n: DEFAULT_IDLE_TOP_N,
        }
    }

    pub const fn with_idle_top_n(mut self, top_n: usize) -> Self {
        self.idle_top_n = top_n;
        self
    }

    pub const fn snapshot(&self) -> &FleetSnapshot {
        &self.snapshot
    }

    pub const fn idle_top_n(&self) -> usize {
        self.idle_top_n
    }

    /// Replaces the snapshot and returns the one it discarded.
    pub fn refresh(&mut self, snapshot: FleetSnapshot) -> FleetSnapshot {
        tracing::debug!(
            previous = self.snapshot.len(),
            current = snapshot.len(),
            "fleet snapshot refreshed"
        );
        std::mem::replace(&mut self.snapshot, snapshot)
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<VehicleRecord> {
        queries::filter_vehicles(self.snapshot.records(), criteria)
    }

    pub fn fleet_metrics(&self, criteria: &FilterCriteria) -> FleetMetrics {
        queries::compute_fleet_metrics(&self.filter(criteria))
    }

    pub fn utilization_split(&self, criteria: &FilterCriteria) -> UtilizationSplit {
        queries::compute_utilization_split(&self.filter(criteria))
    }

    pub fn group_average_by<K, F>(
        &self,
        criteria: &FilterCriteria,
        key: F,
    ) -> Vec<CategoryAverage<K>>
    where
        K: Eq + Hash + Clone,
        F: Fn(&VehicleRecord) -> K,
    {
        queries::group_average_by(&self.filter(criteria), key)
    }

    pub fn rank_vendors(&self, criteria: &FilterCriteria) -> Vec<VendorRanking> {
        queries::rank_vendors(&self.filter(criteria))
    }

    pub fn idle_time_ranking(&self, criteria: &FilterCriteria) -> Vec<IdleTimeEntry> {
        queries::idle_time_ranking(&self.filter(criteria), self.idle_top_n)
    }

    pub fn maintenance_summary(&self, criteria: &FilterCriteria) -> MaintenanceSummary {
        queries::compute_maintenance_summary(&self.filter(criteria))
    }

    /// Computes every aggregate from a single filtering pass.
    pub fn dashboard(&self, criteria: &FilterCriteria) -> FleetDashboard {
        let records = self.filter(criteria);
        FleetDashboard {
            criteria: criteria.clone(),
            metrics: queries::compute_fleet_metrics(&records),
            utilization_split: queries::compute_utilization_split(&records),
            ownership_splits: queries::compute_ownership_splits(&records),
            by_class: queries::utilization_by_class(&records),
            by_shift: queries::utilization_by_shift(&records),
            vendor_ranking: queries::rank_vendors(&records),
            idle_ranking: queries::idle_time_ranking(&records, self.idle_top_n),
            maintenance: queries::compute_maintenance_summary(&records),
            dispatch: queries::compute_dispatch_summary(&records),
            histogram: queries::utilization_histogram(&records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Shift, VehicleStatus};
    use crate::fleet::generator::SyntheticFleet;
    use crate::fleet::FleetError;

    fn engine() -> Result<FleetQueryEngine, FleetError> {
        Ok(FleetQueryEngine::new(
            SyntheticFleet::new(60).with_seed(11).generate()?,
        ))
    }

    #[test]
    fn dashboard_matches_individual_queries() -> Result<(), FleetError> {
        let engine = engine()?;
        let criteria = FilterCriteria::new().with_shift(Shift::B);
        let dashboard = engine.dashboard(&criteria);

        assert_eq!(dashboard.metrics, engine.fleet_metrics(&criteria));
        assert_eq!(dashboard.utilization_split, engine.utilization_split(&criteria));
        assert_eq!(dashboard.vendor_ranking, engine.rank_vendors(&criteria));
        assert_eq!(dashboard.idle_ranking, engine.idle_time_ranking(&criteria));
        assert_eq!(dashboard.maintenance, engine.maintenance_summary(&criteria));
        assert_eq!(
            dashboard.by_shift,
            engine.group_average_by(&criteria, |record| record.shift)
        );
        assert!(dashboard.by_shift.iter().all(|group| group.category == Shift::B));
        Ok(())
    }

    #[test]
    fn idle_ranking_respects_configured_length() -> Result<(), FleetError> {
        let engine = engine()?.with_idle_top_n(5);
        assert_eq!(engine.idle_time_ranking(&FilterCriteria::new()).len(), 5);
        assert_eq!(engine.dashboard(&FilterCriteria::new()).idle_ranking.len(), 5);
        Ok(())
    }

    #[test]
    fn refresh_replaces_whole_snapshot() -> Result<(), FleetError> {
        let mut engine = engine()?;
        let replacement = SyntheticFleet::new(5).with_seed(3).generate()?;

        let previous = engine.refresh(replacement);
        assert_eq!(previous.len(), 60);
        assert_eq!(engine.snapshot().len(), 5);
        assert_eq!(engine.fleet_metrics(&FilterCriteria::new()).total_count, 5);
        Ok(())
    }

    #[test]
    fn unmatched_criteria_yield_empty_dashboard() -> Result<(), FleetError> {
        let engine = engine()?;
        let criteria = FilterCriteria::new()
            .with_status(VehicleStatus::Active)
            .with_vendor("Nobody");
        let dashboard = engine.dashboard(&criteria);

        assert!(dashboard.is_empty());
        assert!(dashboard.utilization_split.is_empty());
        assert!(dashboard.by_class.is_empty());
        assert!(dashboard.vendor_ranking.is_empty());
        Ok(())
    }

    #[test]
    fn snapshot_can_be_read_from_many_threads() -> Result<(), Box<dyn std::error::Error>> {
        let engine = engine()?;
        let expected = engine.fleet_metrics(&FilterCriteria::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || engine.fleet_metrics(&FilterCriteria::new()))
            })
            .collect();

        for handle in handles {
            let metrics = handle.join().map_err(|_| "reader thread panicked")?;
            assert_eq!(metrics, expected);
        }
        Ok(())
    }
}

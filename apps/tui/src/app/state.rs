use crate::app::actions::AppActions;
use crate::app::input::helpers::{cycle_option, wrap_decrement, wrap_increment};
use crate::domain::{MaintenanceStatus, Ownership, Shift, VehicleClass, VehicleStatus};
use crate::fleet::{FilterCriteria, FleetDashboard, FleetQueryEngine, VehicleRecord};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Utilization bound steps offered by the filter panel.
pub const UTILIZATION_STEPS: [u8; 11] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100];
const UTILIZATION_NUDGE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Overview,
    Vehicles,
}

impl AppScreen {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Vehicles => "Vehicles",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Overview => Self::Vehicles,
            Self::Vehicles => Self::Overview,
        }
    }
}

/// Rows of the filter panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Class,
    Status,
    Vendor,
    Shift,
    Maintenance,
    Ownership,
    MinUtilization,
    MaxUtilization,
}

impl FilterField {
    pub const ALL: [Self; 8] = [
        Self::Class,
        Self::Status,
        Self::Vendor,
        Self::Shift,
        Self::Maintenance,
        Self::Ownership,
        Self::MinUtilization,
        Self::MaxUtilization,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Class),
            1 => Some(Self::Status),
            2 => Some(Self::Vendor),
            3 => Some(Self::Shift),
            4 => Some(Self::Maintenance),
            5 => Some(Self::Ownership),
            6 => Some(Self::MinUtilization),
            7 => Some(Self::MaxUtilization),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Status => "Status",
            Self::Vendor => "Vendor",
            Self::Shift => "Shift",
            Self::Maintenance => "Maintenance",
            Self::Ownership => "Ownership",
            Self::MinUtilization => "Min util",
            Self::MaxUtilization => "Max util",
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub engine: FleetQueryEngine,
    pub actions: AppActions,
    pub criteria: FilterCriteria,
    pub dashboard: FleetDashboard,
    /// The filtered set, in snapshot order.
    pub vehicles: Vec<VehicleRecord>,
    /// Positions in `vehicles` that match the search query, best match first.
    pub visible_vehicle_indices: Vec<usize>,
    pub selected_vehicle_index: usize,
    pub filter_field_index: usize,
    pub search_active: bool,
    pub search_query: String,
    pub show_help: bool,
    pub status_message: String,
}

impl App {
    pub fn new(engine: FleetQueryEngine, actions: AppActions, criteria: FilterCriteria) -> Self {
        let dashboard = engine.dashboard(&criteria);
        let vehicles = engine.filter(&criteria);
        let mut app = Self {
            running: true,
            screen: AppScreen::Overview,
            engine,
            actions,
            criteria,
            dashboard,
            vehicles,
            visible_vehicle_indices: Vec::new(),
            selected_vehicle_index: 0,
            filter_field_index: 0,
            search_active: false,
            search_query: String::new(),
            show_help: false,
            status_message: String::new(),
        };
        app.apply_search();
        app.status_message = format!(
            "Loaded {} vehicles from {}",
            app.engine.snapshot().len(),
            app.actions.source_label()
        );
        app
    }

    /// Re-runs every query for the current criteria.
    pub fn recompute(&mut self) {
        self.dashboard = self.engine.dashboard(&self.criteria);
        self.vehicles = self.engine.filter(&self.criteria);
        self.apply_search();
        tracing::debug!(
            criteria = ?self.criteria.describe(),
            matched = self.vehicles.len(),
            "dashboard recomputed"
        );
    }

    pub fn apply_search(&mut self) {
        let query = self.search_query.trim();
        if query.is_empty() {
            self.visible_vehicle_indices = (0..self.vehicles.len()).collect();
        } else {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<(i64, usize)> = self
                .vehicles
                .iter()
                .enumerate()
                .filter_map(|(index, vehicle)| {
                    let haystack = format!("{} {}", vehicle.id, vehicle.vendor_name);
                    matcher
                        .fuzzy_match(&haystack, query)
                        .map(|score| (score, index))
                })
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            self.visible_vehicle_indices = scored.into_iter().map(|(_, index)| index).collect();
        }

        let len = self.visible_vehicle_indices.len();
        if self.selected_vehicle_index >= len {
            self.selected_vehicle_index = len.saturating_sub(1);
        }
    }

    pub fn visible_vehicles(&self) -> impl Iterator<Item = &VehicleRecord> + '_ {
        self.visible_vehicle_indices
            .iter()
            .filter_map(|index| self.vehicles.get(*index))
    }

    pub fn selected_vehicle(&self) -> Option<&VehicleRecord> {
        self.visible_vehicle_indices
            .get(self.selected_vehicle_index)
            .and_then(|index| self.vehicles.get(*index))
    }

    pub fn selected_filter_field(&self) -> FilterField {
        FilterField::from_index(self.filter_field_index).unwrap_or(FilterField::Class)
    }

    pub fn select_next_filter_field(&mut self) {
        self.filter_field_index = wrap_increment(self.filter_field_index, FilterField::ALL.len());
    }

    pub fn select_previous_filter_field(&mut self) {
        self.filter_field_index = wrap_decrement(self.filter_field_index, FilterField::ALL.len());
    }

    /// Moves the selected filter field to its next (or previous) value,
    /// passing through "All".
    pub fn cycle_filter_value(&mut self, forward: bool) {
        let field = self.selected_filter_field();
        let criteria = &mut self.criteria;
        match field {
            FilterField::Class => {
                criteria.vehicle_class =
                    cycle_option(&VehicleClass::ALL, criteria.vehicle_class.as_ref(), forward);
            }
            FilterField::Status => {
                criteria.status =
                    cycle_option(&VehicleStatus::ALL, criteria.status.as_ref(), forward);
            }
            FilterField::Vendor => {
                let vendors = self.engine.snapshot().vendor_names();
                criteria.vendor = cycle_option(&vendors, criteria.vendor.as_ref(), forward);
            }
            FilterField::Shift => {
                criteria.shift = cycle_option(&Shift::ALL, criteria.shift.as_ref(), forward);
            }
            FilterField::Maintenance => {
                criteria.maintenance_status = cycle_option(
                    &MaintenanceStatus::ALL,
                    criteria.maintenance_status.as_ref(),
                    forward,
                );
            }
            FilterField::Ownership => {
                criteria.ownership =
                    cycle_option(&Ownership::ALL, criteria.ownership.as_ref(), forward);
            }
            FilterField::MinUtilization => {
                criteria.utilization_min = cycle_bound(criteria.utilization_min, forward);
            }
            FilterField::MaxUtilization => {
                criteria.utilization_max = cycle_bound(criteria.utilization_max, forward);
            }
        }
        self.recompute();
    }

    /// Lowers or raises the minimum utilization bound by ten points. Lowering
    /// below zero removes the bound.
    pub fn nudge_min_utilization(&mut self, raise: bool) {
        let current = self.criteria.utilization_min;
        self.criteria.utilization_min = if raise {
            Some(current.map_or(0.0, |min| min + UTILIZATION_NUDGE).min(100.0))
        } else {
            current
                .map(|min| min - UTILIZATION_NUDGE)
                .filter(|min| *min >= 0.0)
        };
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::new();
        self.recompute();
        self.status_message = "Filters cleared".to_string();
    }

    pub fn filter_value_label(&self, field: FilterField) -> String {
        let criteria = &self.criteria;
        let value = match field {
            FilterField::Class => criteria.vehicle_class.map(|class| class.label().to_string()),
            FilterField::Status => criteria.status.map(|status| status.label().to_string()),
            FilterField::Vendor => criteria.vendor.clone(),
            FilterField::Shift => criteria.shift.map(|shift| shift.label().to_string()),
            FilterField::Maintenance => criteria
                .maintenance_status
                .map(|status| status.label().to_string()),
            FilterField::Ownership => criteria
                .ownership
                .map(|ownership| ownership.label().to_string()),
            FilterField::MinUtilization => criteria.utilization_min.map(|min| format!("{min}%")),
            FilterField::MaxUtilization => criteria.utilization_max.map(|max| format!("{max}%")),
        };
        value.unwrap_or_else(|| "All".to_string())
    }

    pub fn toggle_screen(&mut self) {
        self.screen = self.screen.next();
        self.search_active = false;
    }

    pub fn select_next_vehicle(&mut self) {
        self.selected_vehicle_index =
            wrap_increment(self.selected_vehicle_index, self.visible_vehicle_indices.len());
    }

    pub fn select_previous_vehicle(&mut self) {
        self.selected_vehicle_index =
            wrap_decrement(self.selected_vehicle_index, self.visible_vehicle_indices.len());
    }

    pub fn jump_vehicles(&mut self, forward: bool, rows: usize) {
        let last = self.visible_vehicle_indices.len().saturating_sub(1);
        self.selected_vehicle_index = if forward {
            (self.selected_vehicle_index + rows).min(last)
        } else {
            self.selected_vehicle_index.saturating_sub(rows)
        };
    }

    /// Replaces the snapshot with a freshly loaded or regenerated one. On
    /// failure the previous snapshot stays in place.
    pub async fn refresh(&mut self) {
        match self.actions.load_snapshot().await {
            Ok(snapshot) => {
                let count = snapshot.len();
                self.engine.refresh(snapshot);
                self.recompute();
                self.status_message = format!("Refreshed: {count} vehicles");
            }
            Err(e) => {
                tracing::debug!(error = %e, "snapshot refresh failed");
                self.status_message = format!("Refresh failed: {e}");
            }
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

fn cycle_bound(current: Option<f64>, forward: bool) -> Option<f64> {
    let current = current.and_then(|value| {
        UTILIZATION_STEPS
            .into_iter()
            .find(|step| (f64::from(*step) - value).abs() < f64::EPSILON)
    });
    cycle_option(&UTILIZATION_STEPS, current.as_ref(), forward).map(f64::from)
}

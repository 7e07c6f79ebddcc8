use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{handle_input, App};
use crate::fleet::FleetDashboard;
use crate::ui;

/// Print the dashboard and exit (no UI)
pub fn run_headless(app: &App, json: bool) -> Result<()> {
    let stats = HeadlessStats::from_app(app);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", render_headless_text(&stats)?);
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct HeadlessStats<'a> {
    source: String,
    snapshot_vehicles: usize,
    filters: Vec<String>,
    dashboard: &'a FleetDashboard,
}

impl<'a> HeadlessStats<'a> {
    fn from_app(app: &'a App) -> Self {
        Self {
            source: app.actions.source_label(),
            snapshot_vehicles: app.engine.snapshot().len(),
            filters: app.criteria.describe(),
            dashboard: &app.dashboard,
        }
    }
}

fn render_headless_text(stats: &HeadlessStats<'_>) -> Result<String, std::fmt::Error> {
    use std::fmt::Write;

    let dashboard = stats.dashboard;
    let metrics = &dashboard.metrics;
    let mut out = String::new();

    writeln!(out, "\nFleet Dashboard")?;
    writeln!(out, "===============")?;
    writeln!(out, "Source: {} ({} vehicles)", stats.source, stats.snapshot_vehicles)?;
    if stats.filters.is_empty() {
        writeln!(out, "Filters: none")?;
    } else {
        writeln!(out, "Filters: {}", stats.filters.join(", "))?;
    }

    if dashboard.is_empty() {
        writeln!(out, "\nNo vehicles match the current filters.")?;
        return Ok(out);
    }

    writeln!(out, "\nFleet Metrics:")?;
    writeln!(out, "- Total vehicles: {}", metrics.total_count)?;
    writeln!(
        out,
        "- Active / Idle / Maintenance: {} / {} / {}",
        metrics.status_counts.active, metrics.status_counts.idle, metrics.status_counts.maintenance
    )?;
    writeln!(out, "- Utilization rate: {}", metrics.utilization_rate)?;
    writeln!(out, "- Average utilization: {}", metrics.mean_utilization)?;
    writeln!(out, "- Average fuel: {}", metrics.mean_fuel)?;
    writeln!(out, "- Total distance: {} km", metrics.total_odometer_km)?;

    let split = dashboard.utilization_split;
    let own = dashboard.ownership_splits.own;
    let vendor = dashboard.ownership_splits.vendor;
    writeln!(out, "\nUtilization Split (active / idle or other):")?;
    writeln!(out, "- Fleet: {} / {}", split.active_share, split.idle_or_other_share)?;
    writeln!(out, "- Own: {} / {}", own.active_share, own.idle_or_other_share)?;
    writeln!(out, "- Vendor: {} / {}", vendor.active_share, vendor.idle_or_other_share)?;

    writeln!(out, "\nUtilization by Class:")?;
    for group in &dashboard.by_class {
        writeln!(
            out,
            "- {}: {} ({} vehicles)",
            group.category.label(),
            group.mean_utilization,
            group.vehicle_count
        )?;
    }

    writeln!(out, "\nUtilization by Shift:")?;
    for group in &dashboard.by_shift {
        writeln!(
            out,
            "- {}: {} ({} vehicles)",
            group.category.label(),
            group.mean_utilization,
            group.vehicle_count
        )?;
    }

    writeln!(out, "\nVendor Ranking:")?;
    for (rank, vendor) in dashboard.vendor_ranking.iter().enumerate() {
        writeln!(
            out,
            "{}. {} | {} | {} vehicles",
            rank + 1,
            vendor.vendor_name,
            vendor.mean_utilization,
            vendor.vehicle_count
        )?;
    }

    writeln!(out, "\nIdle Time (top {}):", dashboard.idle_ranking.len())?;
    for entry in &dashboard.idle_ranking {
        writeln!(out, "- {}: {}", entry.vehicle_id, entry.idle_score)?;
    }

    let maintenance = &dashboard.maintenance;
    writeln!(out, "\nMaintenance:")?;
    writeln!(out, "- Mean downtime: {}", maintenance.mean_downtime)?;
    writeln!(out, "- Overdue: {}", maintenance.overdue_count)?;
    writeln!(out, "- Due soon: {}", maintenance.due_soon_count)?;
    writeln!(out, "- Unplanned breakdowns: {}", maintenance.unplanned_breakdowns)?;
    writeln!(out, "- Compliance: {}", maintenance.compliance)?;
    writeln!(out, "- Mean age: {} years", maintenance.mean_age_years)?;

    let dispatch = &dashboard.dispatch;
    writeln!(out, "\nDispatch:")?;
    writeln!(out, "- Coverage: {}", dispatch.dispatch_coverage)?;
    writeln!(out, "- Available per request: {:.2}", dispatch.available_per_request)?;
    writeln!(out, "- Available per peak request: {:.2}", dispatch.available_per_peak_request)?;

    writeln!(out, "\nUtilization Histogram:")?;
    for bucket in &dashboard.histogram {
        writeln!(out, "- {:>6}: {}", bucket.label(), bucket.count)?;
    }

    Ok(out)
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    while app.running {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                handle_input(app, key.code).await;
            }
            Ok(Event::Resize(width, height)) => {
                tracing::debug!(width, height, "terminal resized");
            }
            Ok(_) => {}
            Err(e) => {
                return Err(color_eyre::eyre::eyre!("Terminal event error: {e}"));
            }
        }
    }

    Ok(())
}

use crate::app::App;
use crate::fleet::FleetDashboard;
use crate::ui::widgets::{no_data, panel, utilization_color, HIGHLIGHT};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    0
}

fn header(cells: &[&'static str]) -> Row<'static> {
    Row::new(cells.iter().map(|cell| Cell::from(*cell))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn render_vendor_table(dashboard: &FleetDashboard, f: &mut Frame<'_>, area: Rect) {
    if dashboard.vendor_ranking.is_empty() {
        f.render_widget(no_data("Vendor Ranking", Color::Cyan), area);
        return;
    }

    let rows = dashboard
        .vendor_ranking
        .iter()
        .enumerate()
        .map(|(rank, vendor)| {
            let percent = vendor.mean_utilization.value();
            Row::new(vec![
                Cell::from((rank + 1).to_string()),
                Cell::from(vendor.vendor_name.clone()),
                Cell::from(vendor.mean_utilization.to_string())
                    .style(Style::default().fg(utilization_color(percent))),
                Cell::from(vendor.vehicle_count.to_string()),
            ])
        });

    let widths = [
        Constraint::Length(3),
        Constraint::Min(18),
        Constraint::Length(6),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header(&["#", "Vendor", "Util", "Vehicles"]))
        .block(panel("Vendor Ranking", Color::Cyan))
        .column_spacing(1);

    f.render_widget(table, area);
}

pub fn render_vehicle_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let total_rows = app.visible_vehicle_indices.len();
    if total_rows == 0 {
        let title = if app.search_query.is_empty() {
            "Vehicles".to_string()
        } else {
            format!("Vehicles matching {:?}", app.search_query)
        };
        f.render_widget(no_data(title, Color::Yellow), area);
        return;
    }

    // Borders plus header row
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_vehicle_index);

    let rows = app
        .visible_vehicles()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, vehicle)| {
            let percent = vehicle.utilization_percent.round().clamp(0.0, 100.0) as u8;
            let style = if index == app.selected_vehicle_index {
                Style::default()
                    .bg(HIGHLIGHT)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(vehicle.id.clone()),
                Cell::from(vehicle.vehicle_class.label()),
                Cell::from(vehicle.status.label()),
                Cell::from(format!("{percent}%"))
                    .style(Style::default().fg(utilization_color(percent))),
                Cell::from(format!("{:.0}%", vehicle.fuel_percent)),
                Cell::from(vehicle.odometer_km.to_string()),
                Cell::from(vehicle.vendor_name.clone()),
                Cell::from(vehicle.ownership().as_str()),
                Cell::from(vehicle.shift.label()),
                Cell::from(vehicle.trip_count.to_string()),
                Cell::from(format!("{:.1}", vehicle.idle_time_score)),
                Cell::from(vehicle.maintenance_status.label()),
                Cell::from(format!("{:.1}h", vehicle.downtime_hours)),
                Cell::from(vehicle.last_update.format("%H:%M").to_string()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(11),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(7),
        Constraint::Min(17),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(11),
        Constraint::Length(6),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header(&[
            "ID", "Class", "Status", "Util", "Fuel", "km", "Vendor", "Owner", "Shift", "Trips",
            "Idle", "Condition", "Down", "Seen",
        ]))
        .block(panel(
            format!(
                "Vehicles ({} of {})",
                app.selected_vehicle_index + 1,
                total_rows
            ),
            Color::Yellow,
        ))
        .column_spacing(1);

    f.render_widget(table, area);
}

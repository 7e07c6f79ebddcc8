use crate::app::App;
use crate::ui::widgets::charts::{
    render_class_chart, render_histogram, render_idle_ranking, render_shift_chart,
    render_utilization_gauges,
};
use crate::ui::widgets::filters::render_filter_panel;
use crate::ui::widgets::kpi::{render_dispatch_panel, render_kpi_cards, render_maintenance_panel};
use crate::ui::widgets::tables::render_vendor_table;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

pub fn render_overview(app: &App, f: &mut Frame<'_>, area: Rect) {
    let dashboard = &app.dashboard;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(40)])
        .split(area);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12), // Filters
            Constraint::Length(8),  // Maintenance
            Constraint::Min(6),     // Dispatch
        ])
        .split(columns[0]);

    render_filter_panel(app, f, sidebar[0]);
    render_maintenance_panel(dashboard, f, sidebar[1]);
    render_dispatch_panel(dashboard, f, sidebar[2]);

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // KPI cards
            Constraint::Length(3),      // Gauges
            Constraint::Percentage(45), // Category charts
            Constraint::Min(8),         // Rankings
        ])
        .split(columns[1]);

    render_kpi_cards(dashboard, f, content[0]);
    render_utilization_gauges(dashboard, f, content[1]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(content[2]);

    render_class_chart(dashboard, f, charts[0]);
    render_shift_chart(dashboard, f, charts[1]);
    render_histogram(dashboard, f, charts[2]);

    let rankings = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content[3]);

    render_vendor_table(dashboard, f, rankings[0]);
    render_idle_ranking(dashboard, f, rankings[1]);
}

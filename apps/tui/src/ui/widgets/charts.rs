use crate::domain::Ownership;
use crate::fleet::models::UtilizationSplit;
use crate::fleet::FleetDashboard;
use crate::ui::widgets::{no_data, panel, utilization_color};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Bar, BarChart, BarGroup, Gauge};
use ratatui::Frame;

fn render_split_gauge(title: &str, split: UtilizationSplit, f: &mut Frame<'_>, area: Rect) {
    if split.is_empty() {
        f.render_widget(no_data(title, Color::Cyan), area);
        return;
    }

    let active = split.active_share.value();
    let gauge = Gauge::default()
        .block(panel(title, Color::Cyan))
        .gauge_style(Style::default().fg(utilization_color(active)).bg(Color::DarkGray))
        .percent(u16::from(active))
        .label(format!(
            "{} active / {} idle or other",
            split.active_share, split.idle_or_other_share
        ));
    f.render_widget(gauge, area);
}

pub fn render_utilization_gauges(dashboard: &FleetDashboard, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_split_gauge("Fleet Utilization", dashboard.utilization_split, f, chunks[0]);
    for (ownership, chunk) in Ownership::ALL.into_iter().zip(chunks.iter().skip(1)) {
        render_split_gauge(
            ownership.label(),
            dashboard.ownership_splits.get(ownership),
            f,
            *chunk,
        );
    }
}

/// Mean utilization per category, one bar each, on a 0-100 scale.
fn render_utilization_bars(
    title: &str,
    entries: &[(&str, u8)],
    f: &mut Frame<'_>,
    area: Rect,
) {
    if entries.is_empty() {
        f.render_widget(no_data(title, Color::Cyan), area);
        return;
    }

    let bars: Vec<Bar<'_>> = entries
        .iter()
        .map(|(label, percent)| {
            Bar::default()
                .value(u64::from(*percent))
                .text_value(format!("{percent}%"))
                .label(TextLine::from(*label))
                .style(Style::default().fg(utilization_color(*percent)))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(utilization_color(*percent))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(panel(title, Color::Cyan))
        .data(BarGroup::default().bars(&bars))
        .max(100)
        .bar_gap(1)
        .bar_width(9);

    f.render_widget(chart, area);
}

pub fn render_class_chart(dashboard: &FleetDashboard, f: &mut Frame<'_>, area: Rect) {
    let entries: Vec<(&str, u8)> = dashboard
        .by_class
        .iter()
        .map(|group| (group.category.label(), group.mean_utilization.value()))
        .collect();
    render_utilization_bars("Utilization by Class", &entries, f, area);
}

pub fn render_shift_chart(dashboard: &FleetDashboard, f: &mut Frame<'_>, area: Rect) {
    let entries: Vec<(&str, u8)> = dashboard
        .by_shift
        .iter()
        .map(|group| (group.category.label(), group.mean_utilization.value()))
        .collect();
    render_utilization_bars("Utilization by Shift", &entries, f, area);
}

pub fn render_idle_ranking(dashboard: &FleetDashboard, f: &mut Frame<'_>, area: Rect) {
    let title = format!("Idle Time (top {})", dashboard.idle_ranking.len());
    if dashboard.idle_ranking.is_empty() {
        f.render_widget(no_data(title, Color::Yellow), area);
        return;
    }

    let bars: Vec<Bar<'_>> = dashboard
        .idle_ranking
        .iter()
        .map(|entry| {
            Bar::default()
                .value(u64::from(entry.idle_score))
                .label(TextLine::from(entry.vehicle_id.as_str()))
                .style(Style::default().fg(Color::Yellow))
                .value_style(Style::default().fg(Color::Black).bg(Color::Yellow))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel(title, Color::Yellow))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .max(100)
        .bar_gap(0)
        .bar_width(1);

    f.render_widget(chart, area);
}

pub fn render_histogram(dashboard: &FleetDashboard, f: &mut Frame<'_>, area: Rect) {
    if dashboard.is_empty() {
        f.render_widget(no_data("Utilization Histogram", Color::Magenta), area);
        return;
    }

    let labels: Vec<String> = dashboard
        .histogram
        .iter()
        .map(|bucket| bucket.lower.to_string())
        .collect();
    let bars: Vec<Bar<'_>> = dashboard
        .histogram
        .iter()
        .zip(labels.iter())
        .map(|(bucket, label)| {
            Bar::default()
                .value(u64::try_from(bucket.count).unwrap_or(u64::MAX))
                .label(TextLine::from(label.as_str()))
                .style(Style::default().fg(Color::Magenta))
                .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        })
        .collect();

    let max_value = bars_max(dashboard);
    let chart = BarChart::default()
        .block(panel("Utilization Histogram", Color::Magenta))
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1)
        .bar_width(3);

    f.render_widget(chart, area);
}

fn bars_max(dashboard: &FleetDashboard) -> u64 {
    let max = dashboard
        .histogram
        .iter()
        .map(|bucket| bucket.count)
        .max()
        .unwrap_or(0)
        .max(1);
    u64::try_from(max).unwrap_or(u64::MAX)
}

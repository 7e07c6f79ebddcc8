use crate::fleet::FleetDashboard;
use crate::ui::widgets::{no_data, panel, utilization_color};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

struct Card {
    title: &'static str,
    value: String,
    color: Color,
}

fn cards(dashboard: &FleetDashboard) -> Vec<Card> {
    let metrics = &dashboard.metrics;
    vec![
        Card {
            title: "Total",
            value: metrics.total_count.to_string(),
            color: Color::White,
        },
        Card {
            title: "Active",
            value: metrics.status_counts.active.to_string(),
            color: Color::Green,
        },
        Card {
            title: "Idle",
            value: metrics.status_counts.idle.to_string(),
            color: Color::Yellow,
        },
        Card {
            title: "Maintenance",
            value: metrics.status_counts.maintenance.to_string(),
            color: Color::Red,
        },
        Card {
            title: "Util Rate",
            value: metrics.utilization_rate.to_string(),
            color: utilization_color(metrics.utilization_rate.value()),
        },
        Card {
            title: "Avg Util",
            value: metrics.mean_utilization.to_string(),
            color: utilization_color(metrics.mean_utilization.value()),
        },
        Card {
            title: "Avg Fuel",
            value: metrics.mean_fuel.to_string(),
            color: Color::Cyan,
        },
        Card {
            title: "Total km",
            value: metrics.total_odometer_km.to_string(),
            color: Color::Magenta,
        },
    ]
}

pub fn render_kpi_cards(dashboard: &FleetDashboard, f: &mut Frame<'_>, area: Rect) {
    if dashboard.is_empty() {
        f.render_widget(no_data("Fleet Metrics", Color::Cyan), area);
        return;
    }

    let cards = cards(dashboard);
    let count = u32::try_from(cards.len()).unwrap_or(1);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cards.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (card, chunk) in cards.into_iter().zip(chunks.iter()) {
        let paragraph = Paragraph::new(Span::styled(
            card.value,
            Style::default().fg(card.color).add_modifier(Modifier::BOLD),
        ))
        .block(panel(card.title, Color::Cyan))
        .alignment(Alignment::Center);
        f.render_widget(paragraph, *chunk);
    }
}

fn stat_line(label: &str, value: String, color: Color) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(format!("{label:<22}"), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

pub fn render_maintenance_panel(dashboard: &FleetDashboard, f: &mut Frame<'_>, area: Rect) {
    if dashboard.is_empty() {
        f.render_widget(no_data("Maintenance", Color::Red), area);
        return;
    }

    let summary = &dashboard.maintenance;
    let lines = vec![
        stat_line("Mean downtime (h:mm)", summary.mean_downtime.to_string(), Color::White),
        stat_line("Overdue (repair)", summary.overdue_count.to_string(), Color::Red),
        stat_line("Due soon (fair)", summary.due_soon_count.to_string(), Color::Yellow),
        stat_line(
            "Unplanned breakdowns",
            summary.unplanned_breakdowns.to_string(),
            Color::Red,
        ),
        stat_line(
            "Compliance",
            summary.compliance.to_string(),
            utilization_color(summary.compliance.value()),
        ),
        stat_line("Mean age", format!("{} yrs", summary.mean_age_years), Color::White),
    ];

    f.render_widget(
        Paragraph::new(Text::from(lines)).block(panel("Maintenance", Color::Red)),
        area,
    );
}

pub fn render_dispatch_panel(dashboard: &FleetDashboard, f: &mut Frame<'_>, area: Rect) {
    if dashboard.is_empty() {
        f.render_widget(no_data("Dispatch", Color::Green), area);
        return;
    }

    let dispatch = &dashboard.dispatch;
    let lines = vec![
        stat_line("Active vehicles", dispatch.active_count.to_string(), Color::Green),
        stat_line(
            "Dispatch coverage",
            dispatch.dispatch_coverage.to_string(),
            utilization_color(dispatch.dispatch_coverage.value()),
        ),
        stat_line(
            "Per request",
            format!("{:.2}", dispatch.available_per_request),
            Color::White,
        ),
        stat_line(
            "Per peak request",
            format!("{:.2}", dispatch.available_per_peak_request),
            Color::White,
        ),
    ];

    f.render_widget(
        Paragraph::new(Text::from(lines)).block(panel("Dispatch", Color::Green)),
        area,
    );
}

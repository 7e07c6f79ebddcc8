// UI module for the fleet dashboard
// Handles all rendering; reads App state and never mutates it

pub mod screens;
pub mod widgets;

use crate::app::{App, AppScreen};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;
use widgets::popup::render_help_popup;
use widgets::HIGHLIGHT;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and tabs
            Constraint::Min(10),   // Screen content
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title_section(app, f, layout[0]);
    match app.screen {
        AppScreen::Overview => screens::overview::render_overview(app, f, layout[1]),
        AppScreen::Vehicles => screens::vehicles::render_vehicles(app, f, layout[1]),
    }
    render_status_section(app, f, layout[2]);
    render_shortcuts(app, f, layout[3]);

    if app.show_help {
        let area = f.area();
        render_help_popup(f, area);
    }
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("== Fleet Dashboard ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(10)])
        .split(inner);

    let screens = [AppScreen::Overview, AppScreen::Vehicles];
    let selected = screens
        .iter()
        .position(|screen| *screen == app.screen)
        .unwrap_or(0);
    let tabs = Tabs::new(screens.iter().map(|screen| TextLine::from(screen.label())))
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD))
        .divider(Span::raw("|"));
    f.render_widget(tabs, chunks[0]);

    let filters = app.criteria.describe();
    let summary = if filters.is_empty() {
        Span::styled("No filters", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(filters.join("  "), Style::default().fg(Color::Green))
    };
    f.render_widget(
        Paragraph::new(TextLine::from(summary)).alignment(Alignment::Right),
        chunks[1],
    );
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let snapshot = app.engine.snapshot();
    let status = Paragraph::new(TextLine::from(vec![
        Span::styled(
            format!(
                "{} vehicles · snapshot {} · ",
                snapshot.len(),
                snapshot.created_at().format("%Y-%m-%d %H:%M:%S UTC")
            ),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(app.status_message.clone(), Style::default().fg(Color::White)),
    ]))
    .block(
        Block::default()
            .title(" Status ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray)),
    );
    f.render_widget(status, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let keys: &[(&str, &str)] = match (app.screen, app.search_active) {
        (_, true) => &[("Enter", "Keep"), ("Esc", "Clear"), ("Backspace", "Delete")],
        (AppScreen::Overview, false) => &[
            ("↑/↓", "Field"),
            ("←/→", "Value"),
            ("[/]", "Min util"),
            ("c", "Clear"),
            ("r", "Refresh"),
            ("Tab", "Vehicles"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        (AppScreen::Vehicles, false) => &[
            ("↑/↓", "Navigate"),
            ("/", "Search"),
            ("PgUp/PgDn", "Jump"),
            ("r", "Refresh"),
            ("Tab", "Overview"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
    };

    let spans: Vec<Span<'_>> = keys
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(
                    *key,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(": {action}   ")),
            ]
        })
        .collect();

    f.render_widget(
        Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center),
        area,
    );
}

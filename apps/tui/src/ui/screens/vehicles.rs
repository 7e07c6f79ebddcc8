use crate::app::App;
use crate::ui::widgets::panel;
use crate::ui::widgets::tables::render_vehicle_table;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render_vehicles(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_search_bar(app, f, chunks[0]);
    render_vehicle_table(app, f, chunks[1]);
}

fn render_search_bar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let (color, cursor) = if app.search_active {
        (Color::Yellow, "_")
    } else {
        (Color::Gray, "")
    };

    let line = if app.search_query.is_empty() && !app.search_active {
        TextLine::from(Span::styled(
            "Press / to search by vehicle id or vendor",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        TextLine::from(vec![
            Span::styled("/ ", Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::raw(app.search_query.clone()),
            Span::styled(cursor, Style::default().fg(color)),
        ])
    };

    f.render_widget(Paragraph::new(line).block(panel("Search", color)), area);
}

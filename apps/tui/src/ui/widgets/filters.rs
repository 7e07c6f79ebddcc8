use crate::app::{App, FilterField};
use crate::ui::widgets::{panel, HIGHLIGHT};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render_filter_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let selected = app.selected_filter_field();
    let mut lines: Vec<TextLine<'_>> = FilterField::ALL
        .iter()
        .map(|field| {
            let value = app.filter_value_label(*field);
            let is_all = value == "All";
            if *field == selected {
                TextLine::from(vec![
                    Span::styled(
                        format!("{:<12}", field.label()),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("◀ {value} ▶"),
                        Style::default()
                            .bg(HIGHLIGHT)
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                TextLine::from(vec![
                    Span::styled(
                        format!("{:<12}", field.label()),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(
                        format!("  {value}"),
                        Style::default().fg(if is_all { Color::DarkGray } else { Color::Green }),
                    ),
                ])
            }
        })
        .collect();

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        format!(
            "{} active · {} match",
            app.criteria.active_count(),
            app.dashboard.metrics.total_count
        ),
        Style::default().fg(Color::Cyan),
    )));

    f.render_widget(
        Paragraph::new(Text::from(lines)).block(panel("Filters", Color::Green)),
        area,
    );
}

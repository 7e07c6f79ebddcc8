use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::Buffer;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use ratatui::Frame;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}

const SHORTCUTS: [(&str, &str); 14] = [
    ("F1 / ?", "Toggle this help popup"),
    ("Tab", "Switch between Overview and Vehicles"),
    ("↑/↓", "Overview: select a filter. Vehicles: move selection"),
    ("←/→", "Cycle the selected filter through its values and All"),
    ("[ / ]", "Lower / raise the minimum utilization by 10"),
    ("c", "Clear all filters"),
    ("r", "Reload or regenerate the fleet snapshot"),
    ("/", "Vehicles: fuzzy search by id or vendor"),
    ("Enter", "Search: keep the query"),
    ("Esc", "Search: clear the query. Help: close"),
    ("PgUp/PgDn", "Vehicles: jump 5 rows"),
    ("Home/End", "Vehicles: first / last row"),
    ("Esc", "Vehicles: back to Overview"),
    ("q", "Quit"),
];

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(70, 80, area);
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let mut lines = vec![
        TextLine::from(Span::styled(
            "Fleet Dashboard",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Utilization, idle time, maintenance and dispatch figures for the filtered fleet. Every panel reflects the same filter.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(SHORTCUTS.iter().map(|(key, action)| {
        TextLine::from(vec![
            Span::styled(
                format!("  {key:<10}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" - {action}")),
        ])
    }));

    let help_paragraph = Paragraph::new(Text::from(lines))
        .block(help_block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 40, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 15);
    }
}

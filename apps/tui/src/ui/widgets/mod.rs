pub mod charts;
pub mod filters;
pub mod kpi;
pub mod popup;
pub mod tables;

use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const HIGHLIGHT: Color = Color::Rgb(0, 0, 238);

pub fn panel(title: impl Into<String>, color: Color) -> Block<'static> {
    Block::default()
        .title(title.into())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

/// Placeholder shown by every widget when the filtered set is empty.
pub fn no_data(title: impl Into<String>, color: Color) -> Paragraph<'static> {
    Paragraph::new("No data")
        .block(panel(title, color))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
}

/// Green at or above 80%, yellow at or above 60%, red below.
pub const fn utilization_color(percent: u8) -> Color {
    if percent >= 80 {
        Color::Green
    } else if percent >= 60 {
        Color::Yellow
    } else {
        Color::Red
    }
}

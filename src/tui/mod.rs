//! Terminal rendering of the reserve overview
//!
//! Panels follow a `new()` / `update()` / `render()` shape and read only the
//! presentation model, never the raw reserve.

pub mod colors;
mod events;
pub mod panels;
mod terminal;
pub mod widgets;

pub use colors::DashboardColors;
pub use events::{Action, EventLoop, TuiEvent};
pub use panels::{ConfigurationPanel, HeaderView, TopDetailsPanel};
pub use terminal::TerminalManager;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Key hints shown under the panels
pub const FOOTER_HINTS: &str =
    "c copy address | a add to wallet | b back | Tab next reserve | q quit";

/// Full-screen layout: header, configuration body, one-line footer
pub fn draw(
    frame: &mut Frame,
    header: &TopDetailsPanel,
    body: &ConfigurationPanel,
    status: Option<&str>,
) {
    let chunks = split(frame.area());
    header.render(frame, chunks[0]);
    body.render(frame, chunks[1]);

    let footer = match status {
        Some(status) => format!("{} | {}", status, FOOTER_HINTS),
        None => FOOTER_HINTS.to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(footer)).style(Style::default().fg(DashboardColors::IDLE)),
        chunks[2],
    );
}

fn split(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area)
}

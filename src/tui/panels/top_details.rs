//! Top details panel - market badge, asset identity, summary metrics

use crate::overview::{CopyIndicator, TopDetails};
use crate::tui::colors::DashboardColors;
use crate::tui::widgets::{StateIndicator, StateType};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the header currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderView {
    /// On the markets route; carries the loaded reserve symbols
    Markets(Vec<String>),
    Loading,
    NotFound(String),
    Found(Box<TopDetails>),
}

pub struct TopDetailsPanel {
    view: HeaderView,
    copied: bool,
    copy_icon: &'static str,
    copy_tooltip: &'static str,
}

impl TopDetailsPanel {
    pub fn new() -> Self {
        let copy = CopyIndicator::default();
        Self {
            view: HeaderView::Loading,
            copied: false,
            copy_icon: copy.icon(),
            copy_tooltip: copy.tooltip(),
        }
    }

    pub fn update(&mut self, view: HeaderView, copy: &CopyIndicator) {
        self.view = view;
        self.copied = copy.is_copied();
        self.copy_icon = copy.icon();
        self.copy_tooltip = copy.tooltip();
    }

    pub fn view(&self) -> &HeaderView {
        &self.view
    }

    fn identity_lines(&self, details: &TopDetails) -> Vec<Line<'static>> {
        let mut badge = vec![
            Span::styled(
                details.badge.title.clone(),
                Style::default()
                    .fg(DashboardColors::HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", details.badge.network),
                Style::default().fg(DashboardColors::SECONDARY),
            ),
        ];
        if let Some(tag) = details.badge.version_tag {
            badge.push(Span::styled(
                format!("  [{}]", tag),
                Style::default().fg(DashboardColors::HIGHLIGHT),
            ));
        }

        let copy = if self.copied {
            StateIndicator::new(StateType::Copied, self.copy_tooltip).render()
        } else {
            Span::styled(
                format!("{} {}", self.copy_icon, self.copy_tooltip),
                Style::default().fg(DashboardColors::SECONDARY),
            )
        };

        vec![
            Line::from(badge),
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", details.icon_symbol),
                    Style::default().fg(DashboardColors::SECONDARY),
                ),
                Span::styled(
                    details.symbol.clone(),
                    Style::default()
                        .fg(DashboardColors::TEXT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {}", details.name)),
            ]),
            Line::from(vec![
                copy,
                Span::raw("  "),
                Span::styled(
                    format!("↗ {}", details.token_link),
                    Style::default().fg(DashboardColors::HIGHLIGHT),
                ),
            ]),
        ]
    }

    fn render_placeholder(&self, frame: &mut Frame, area: Rect, block: Block, text: String) {
        let paragraph = Paragraph::new(Line::from(StateIndicator::new(
            match self.view {
                HeaderView::Loading => StateType::Loading,
                HeaderView::Markets(_) => StateType::Enabled,
                _ => StateType::NotCollateral,
            },
            text,
        )
        .render()))
        .block(block);
        frame.render_widget(paragraph, area);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Reserve overview")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DashboardColors::BORDER));

        let details = match &self.view {
            HeaderView::Loading => {
                return self.render_placeholder(frame, area, block, "Loading reserve...".into())
            }
            HeaderView::Markets(symbols) => {
                return self.render_placeholder(
                    frame,
                    area,
                    block,
                    format!("Markets: {} (Tab opens a reserve)", symbols.join(", ")),
                )
            }
            HeaderView::NotFound(asset) => {
                return self.render_placeholder(
                    frame,
                    area,
                    block,
                    format!("Reserve not found: {}", asset),
                )
            }
            HeaderView::Found(details) => details,
        };

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(2)])
            .split(inner);

        frame.render_widget(Paragraph::new(self.identity_lines(details)), rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[1]);

        for (metric, column) in details.metrics.iter().zip(columns.iter()) {
            let mut value = vec![Span::styled(
                metric.value.clone(),
                Style::default()
                    .fg(DashboardColors::TEXT)
                    .add_modifier(Modifier::BOLD),
            )];
            if metric.link.is_some() {
                value.push(Span::styled(" ↗", Style::default().fg(DashboardColors::HIGHLIGHT)));
            }

            let lines = vec![
                Line::from(Span::styled(
                    metric.kind.title(),
                    Style::default().fg(DashboardColors::SECONDARY),
                )),
                Line::from(value),
            ];
            frame.render_widget(Paragraph::new(lines), *column);
        }
    }
}

impl Default for TopDetailsPanel {
    fn default() -> Self {
        Self::new()
    }
}

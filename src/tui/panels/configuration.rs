//! Reserve status & configuration panel

use crate::history::RateHistory;
use crate::overview::{
    ApyChart, ApyMetric, CapDisplay, ChartState, RateField, ReserveConfiguration, RiskParameters,
    SectionId, CURVE_STEPS,
};
use crate::tui::colors::DashboardColors;
use crate::tui::widgets::{CapRing, Sparkline, StateIndicator, StateType};
use crate::types::TimeSeriesPoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Width of the inline APY history sparklines
const SPARKLINE_WIDTH: usize = 40;

/// Height of the interest rate curve chart
const CHART_HEIGHT: u16 = 12;

fn series_color(field: RateField) -> Color {
    match field {
        RateField::LiquidityRate => DashboardColors::SUPPLY,
        RateField::StableBorrowRate => DashboardColors::STABLE_BORROW,
        RateField::VariableBorrowRate => DashboardColors::VARIABLE_BORROW,
    }
}

fn header(section: SectionId) -> Line<'static> {
    Line::from(Span::styled(
        section.title(),
        Style::default()
            .fg(DashboardColors::HEADER)
            .add_modifier(Modifier::BOLD),
    ))
}

fn label(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(DashboardColors::SECONDARY))
}

fn value(text: impl Into<String>) -> Span<'static> {
    Span::styled(
        text.into(),
        Style::default()
            .fg(DashboardColors::TEXT)
            .add_modifier(Modifier::BOLD),
    )
}

fn totals_line(title: &str, totals: &CapDisplay, cap_label: &str) -> Line<'static> {
    let mut spans = vec![
        label(format!("  {}: ", title)),
        value(totals.amount_line()),
        label(format!(" ({})", totals.usd_line())),
    ];
    if let Some(usage) = totals.usage() {
        spans.push(Span::raw("  "));
        spans.push(CapRing::new(usage).label(cap_label).render_span());
    }
    Line::from(spans)
}

fn apy_line(title: &str, apy: &ApyMetric) -> Line<'static> {
    let mut spans = vec![label(format!("  {}: ", title)), value(apy.value.clone())];
    if let Some(incentives) = &apy.incentives {
        spans.push(Span::styled(
            format!("  {}", incentives),
            Style::default().fg(DashboardColors::SUCCESS),
        ));
    }
    Line::from(spans)
}

fn risk_line(risk: &RiskParameters) -> Line<'static> {
    let mut spans = Vec::new();
    for (title, v) in risk.boxes() {
        spans.push(label(format!("  {} ", title)));
        spans.push(value(v.to_string()));
    }
    Line::from(spans)
}

fn chart_lines(chart: &ApyChart, points: &[TimeSeriesPoint]) -> Vec<Line<'static>> {
    match chart.state {
        ChartState::Hidden => Vec::new(),
        ChartState::Loading => chart
            .series
            .iter()
            .map(|s| {
                Line::from(vec![
                    label(format!("  {:<22}", s.label)),
                    StateIndicator::new(StateType::Loading, "loading").render(),
                ])
            })
            .collect(),
        ChartState::Ready => chart
            .series
            .iter()
            .map(|s| {
                let data: Vec<f64> = points.iter().map(|p| s.field.value(p)).collect();
                let mut spans = vec![label(format!("  {:<22}", s.label))];
                spans.extend(
                    Sparkline::new(&data)
                        .width(SPARKLINE_WIDTH)
                        .style(Style::default().fg(series_color(s.field)))
                        .render()
                        .spans,
                );
                Line::from(spans)
            })
            .collect(),
    }
}

/// Body of the configuration panel
pub struct ConfigurationPanel {
    model: Option<ReserveConfiguration>,
    points: Vec<TimeSeriesPoint>,
}

impl ConfigurationPanel {
    pub fn new() -> Self {
        Self {
            model: None,
            points: Vec::new(),
        }
    }

    pub fn update(&mut self, model: Option<ReserveConfiguration>, history: &RateHistory) {
        self.model = model;
        self.points = history.points().to_vec();
    }

    pub fn model(&self) -> Option<&ReserveConfiguration> {
        self.model.as_ref()
    }

    /// Text rows for every visible section, in display order
    pub fn lines(&self) -> Vec<Line<'static>> {
        let Some(model) = &self.model else {
            return Vec::new();
        };
        let mut lines = Vec::new();

        for section in model.layout.sections() {
            match section {
                SectionId::FrozenWarning => {
                    if let Some(frozen) = &model.frozen {
                        lines.push(Line::from(vec![
                            StateIndicator::new(StateType::Frozen, frozen.message.clone())
                                .render(),
                        ]));
                        lines.push(Line::from(vec![
                            label("  Learn more: "),
                            Span::styled(
                                frozen.link.clone(),
                                Style::default().fg(DashboardColors::HIGHLIGHT),
                            ),
                        ]));
                    }
                }
                SectionId::Supply => {
                    let supply = &model.supply;
                    lines.push(header(section));
                    lines.push(totals_line(
                        "Total supplied",
                        &supply.totals,
                        "Supply cap",
                    ));
                    lines.push(apy_line("APY", &supply.apy));
                    if let Some(unbacked) = &supply.unbacked {
                        lines.push(Line::from(vec![
                            label("  Unbacked: "),
                            value(unbacked.amount.clone()),
                            label(format!(" ({})", unbacked.usd)),
                        ]));
                    }
                    lines.extend(chart_lines(&supply.chart, &self.points));
                }
                SectionId::CollateralUsage => {
                    let collateral = &model.collateral;
                    lines.push(header(section));
                    lines.push(Line::from(vec![
                        Span::raw("  "),
                        StateIndicator::new(collateral.status.into(), collateral.message())
                            .render(),
                    ]));
                    if let Some(detail) = collateral.detail() {
                        lines.push(Line::from(label(format!("  {}", detail))));
                    }
                }
                SectionId::CollateralBoxes => {
                    let collateral = &model.collateral;
                    if let Some(risk) = &collateral.risk {
                        lines.push(risk_line(risk));
                    }
                    if let Some(ceiling) = &collateral.debt_ceiling {
                        lines.push(Line::from(vec![
                            label("  Isolated Debt Ceiling: "),
                            value(format!("{} of {}", ceiling.debt, ceiling.ceiling)),
                            Span::raw("  "),
                            CapRing::new(ceiling.usage).render_span(),
                        ]));
                    }
                }
                SectionId::Borrow => {
                    if let Some(borrow) = &model.borrow {
                        lines.push(header(section));
                        lines.push(totals_line(
                            "Total borrowed",
                            &borrow.totals,
                            "Borrow cap",
                        ));
                        lines.push(apy_line("APY, variable", &borrow.variable_apy));
                        if let Some(stable) = &borrow.stable_apy {
                            lines.push(apy_line("APY, stable", stable));
                        }
                        if let Some(cap) = &borrow.borrow_cap {
                            lines.push(Line::from(vec![
                                label("  Borrow cap: "),
                                value(cap.amount.clone()),
                                label(format!(" ({})", cap.usd)),
                            ]));
                        }
                        lines.extend(chart_lines(&borrow.chart, &self.points));
                    }
                }
                SectionId::EMode => {
                    if let Some(emode) = &model.emode {
                        lines.push(header(section));
                        lines.push(Line::from(vec![
                            label("  E-Mode Category: "),
                            value(emode.label.clone()),
                        ]));
                        lines.push(risk_line(&emode.risk));
                    }
                }
                SectionId::InterestRateModel => {
                    if let Some(irm) = &model.interest_rate_model {
                        lines.push(header(section));
                        lines.push(Line::from(vec![
                            label("  Utilization Rate: "),
                            value(crate::format::percent(irm.utilization, 2)),
                            label("  Optimal: "),
                            value(crate::format::percent(irm.optimal_usage(), 2)),
                        ]));
                    }
                }
            }
        }

        lines
    }

    fn render_rate_curve(&self, frame: &mut Frame, area: Rect) {
        let Some(irm) = self.model.as_ref().and_then(|m| m.interest_rate_model.as_ref()) else {
            return;
        };

        let variable = irm.variable.curve(CURVE_STEPS);
        let stable = irm.stable.map(|c| c.curve(CURVE_STEPS));

        let max_rate = variable
            .iter()
            .chain(stable.iter().flatten())
            .map(|(_, r)| *r)
            .fold(1.0_f64, f64::max);
        let marker = [
            (irm.utilization * 100.0, 0.0),
            (irm.utilization * 100.0, max_rate),
        ];

        let mut datasets = vec![Dataset::default()
            .name("Variable")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(DashboardColors::VARIABLE_BORROW))
            .data(&variable)];
        if let Some(stable) = &stable {
            datasets.push(
                Dataset::default()
                    .name("Stable")
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(DashboardColors::STABLE_BORROW))
                    .data(stable),
            );
        }
        datasets.push(
            Dataset::default()
                .name("Current")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(DashboardColors::UTILIZATION))
                .data(&marker),
        );

        let top = format!("{:.0}%", max_rate);
        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(SectionId::InterestRateModel.title())
                    .borders(Borders::TOP),
            )
            .x_axis(
                Axis::default()
                    .title("Utilization")
                    .style(Style::default().fg(DashboardColors::SECONDARY))
                    .bounds([0.0, 100.0])
                    .labels(["0%", "50%", "100%"]),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(DashboardColors::SECONDARY))
                    .bounds([0.0, max_rate])
                    .labels(["0%".to_string(), top]),
            );

        frame.render_widget(chart, area);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title = match &self.model {
            Some(model) => format!("Reserve status & configuration: {}", model.symbol),
            None => "Reserve status & configuration".to_string(),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DashboardColors::BORDER));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let has_curve = self
            .model
            .as_ref()
            .is_some_and(|m| m.interest_rate_model.is_some());

        if has_curve && inner.height > CHART_HEIGHT + 4 {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(4), Constraint::Length(CHART_HEIGHT)])
                .split(inner);
            frame.render_widget(Paragraph::new(self.lines()), chunks[0]);
            self.render_rate_curve(frame, chunks[1]);
        } else {
            frame.render_widget(Paragraph::new(self.lines()), inner);
        }
    }
}

impl Default for ConfigurationPanel {
    fn default() -> Self {
        Self::new()
    }
}

//! Cap usage indicator with color zones

use crate::format;
use crate::tui::colors::DashboardColors;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Quarter-filled circles, empty to full
const RINGS: [&str; 5] = ["○", "◔", "◑", "◕", "●"];

/// Share of a supply cap, borrow cap or debt ceiling in use
#[derive(Debug, Clone)]
pub struct CapRing {
    /// 0.0-100.0
    percent: f64,
    label: Option<String>,
}

impl CapRing {
    /// Create from a usage fraction (0.0-1.0)
    pub fn new(usage: f64) -> Self {
        let percent = if usage.is_finite() {
            (usage * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            percent,
            label: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Zone color (green → yellow → light red → red)
    pub fn color(&self) -> Color {
        if self.percent < 60.0 {
            DashboardColors::USAGE_LOW
        } else if self.percent < 75.0 {
            DashboardColors::USAGE_MEDIUM
        } else if self.percent < 90.0 {
            DashboardColors::USAGE_HIGH
        } else {
            DashboardColors::USAGE_CRITICAL
        }
    }

    fn glyph(&self) -> &'static str {
        let index = (self.percent / 25.0).round() as usize;
        RINGS[index.min(RINGS.len() - 1)]
    }

    fn text(&self) -> String {
        let value = format::percent(self.percent / 100.0, 2);
        match &self.label {
            Some(label) => format!("{} {}", label, value),
            None => value,
        }
    }

    /// Inline form, e.g. `◑ 52.10%`
    pub fn render_span(&self) -> Span<'static> {
        Span::styled(
            format!("{} {}", self.glyph(), self.text()),
            Style::default()
                .fg(self.color())
                .add_modifier(Modifier::BOLD),
        )
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamping() {
        assert_eq!(CapRing::new(1.5).percent(), 100.0);
        assert_eq!(CapRing::new(-0.1).percent(), 0.0);
        assert_eq!(CapRing::new(f64::NAN).percent(), 0.0);
    }

    #[test]
    fn test_color_zones() {
        assert_eq!(CapRing::new(0.30).color(), Color::Green);
        assert_eq!(CapRing::new(0.65).color(), Color::Yellow);
        assert_eq!(CapRing::new(0.80).color(), Color::LightRed);
        assert_eq!(CapRing::new(0.95).color(), Color::Red);
    }

    #[test]
    fn test_span_text() {
        let span = CapRing::new(0.5).render_span();
        assert_eq!(span.content, "◑ 50.00%");

        let span = CapRing::new(1.0).label("Supply cap").render_span();
        assert_eq!(span.content, "● Supply cap 100.00%");
    }
}

//! Inline sparkline for APY history

use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Unicode block characters for sparklines (8 levels)
const BLOCKS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Compact one-line rendering of a rate series
pub struct Sparkline<'a> {
    data: &'a [f64],
    style: Style,
    width: usize,
}

impl<'a> Sparkline<'a> {
    pub fn new(data: &'a [f64]) -> Self {
        Self {
            data,
            style: Style::default(),
            width: 24,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Number of characters
    pub fn width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    fn placeholder(&self) -> Line<'static> {
        Line::from(Span::styled("─".repeat(self.width), self.style))
    }

    /// Render as a single line of text
    pub fn render(&self) -> Line<'static> {
        let (min, max) = self
            .data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if !min.is_finite() {
            return self.placeholder();
        }

        let range = max - min;
        if range < f64::EPSILON {
            return Line::from(Span::styled(
                BLOCKS[4].to_string().repeat(self.width),
                self.style,
            ));
        }

        let chars: String = self
            .sample()
            .into_iter()
            .map(|value| {
                if !value.is_finite() {
                    return ' ';
                }
                let index = ((value - min) / range * 8.0).round() as usize;
                BLOCKS[index.clamp(1, 8)]
            })
            .collect();

        Line::from(Span::styled(chars, self.style))
    }

    /// Downsample to the target width, left-padding short series with their first value
    fn sample(&self) -> Vec<f64> {
        let len = self.data.len();
        if len <= self.width {
            let first = self.data.first().copied().unwrap_or_default();
            let mut result = vec![first; self.width - len];
            result.extend_from_slice(self.data);
            result
        } else {
            let step = len as f64 / self.width as f64;
            (0..self.width)
                .map(|i| self.data[((i as f64 * step) as usize).min(len - 1)])
                .collect()
        }
    }
}

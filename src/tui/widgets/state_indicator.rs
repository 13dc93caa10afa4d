//! State indicator widget - color-coded status badges

use crate::overview::CollateralStatus;
use crate::tui::colors::DashboardColors;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateType {
    CanBeCollateral,
    NotCollateral,
    Isolation,
    Frozen,
    Copied,
    Enabled,
    Disabled,
    Loading,
}

impl From<CollateralStatus> for StateType {
    fn from(status: CollateralStatus) -> Self {
        match status {
            CollateralStatus::Isolated => StateType::Isolation,
            CollateralStatus::CollateralEnabled => StateType::CanBeCollateral,
            CollateralStatus::CollateralDisabled => StateType::NotCollateral,
        }
    }
}

pub struct StateIndicator {
    state_type: StateType,
    text: String,
    show_icon: bool,
}

impl StateIndicator {
    pub fn new(state_type: StateType, text: impl Into<String>) -> Self {
        Self {
            state_type,
            text: text.into(),
            show_icon: true,
        }
    }

    pub fn show_icon(mut self, show: bool) -> Self {
        self.show_icon = show;
        self
    }

    fn color(&self) -> Color {
        match self.state_type {
            StateType::CanBeCollateral | StateType::Enabled | StateType::Copied => {
                DashboardColors::SUCCESS
            }
            StateType::Isolation | StateType::Loading => DashboardColors::WARNING,
            StateType::Frozen | StateType::NotCollateral => DashboardColors::ERROR,
            StateType::Disabled => DashboardColors::IDLE,
        }
    }

    fn icon(&self) -> &'static str {
        match self.state_type {
            StateType::CanBeCollateral | StateType::Copied | StateType::Enabled => "✓",
            StateType::NotCollateral => "✗",
            StateType::Isolation => "⚠",
            StateType::Frozen => "❄",
            StateType::Disabled => "○",
            StateType::Loading => "◐",
        }
    }

    /// Render as a bold styled span
    pub fn render(&self) -> Span<'static> {
        let content = if self.show_icon {
            format!("{} {}", self.icon(), self.text)
        } else {
            self.text.clone()
        };

        Span::styled(
            content,
            Style::default()
                .fg(self.color())
                .add_modifier(Modifier::BOLD),
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state_type(&self) -> StateType {
        self.state_type
    }
}

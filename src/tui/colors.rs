//! Consistent color palette for the reserve dashboard
//!
//! All panels should use these constants for visual consistency.

use ratatui::style::Color;

/// Color palette for dashboard elements
pub struct DashboardColors;

impl DashboardColors {
    // === Status Colors ===

    /// Healthy, enabled, copied (Green)
    pub const SUCCESS: Color = Color::Green;

    /// Isolation, loading, caution (Yellow)
    pub const WARNING: Color = Color::Yellow;

    /// Frozen, unavailable (Red)
    pub const ERROR: Color = Color::Red;

    /// Disabled or absent features (Gray)
    pub const IDLE: Color = Color::Gray;

    // === Series Colors ===

    /// Supply APR series (Green)
    pub const SUPPLY: Color = Color::Green;

    /// Variable borrow series (Magenta)
    pub const VARIABLE_BORROW: Color = Color::Magenta;

    /// Stable borrow series (LightBlue)
    pub const STABLE_BORROW: Color = Color::LightBlue;

    /// Current utilization marker (Yellow)
    pub const UTILIZATION: Color = Color::Yellow;

    // === UI Elements ===

    /// Panel borders (Cyan)
    pub const BORDER: Color = Color::Cyan;

    /// Headers and labels (Yellow)
    pub const HEADER: Color = Color::Yellow;

    /// Secondary text (DarkGray)
    pub const SECONDARY: Color = Color::DarkGray;

    /// Primary text (White)
    pub const TEXT: Color = Color::White;

    /// Links and highlighted values (Cyan)
    pub const HIGHLIGHT: Color = Color::Cyan;

    // === Cap Usage Colors ===

    /// Below 60% of the cap
    pub const USAGE_LOW: Color = Color::Green;

    /// 60-75%
    pub const USAGE_MEDIUM: Color = Color::Yellow;

    /// 75-90%
    pub const USAGE_HIGH: Color = Color::LightRed;

    /// 90% and above
    pub const USAGE_CRITICAL: Color = Color::Red;
}

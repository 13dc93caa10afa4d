//! Reusable dashboard widgets
//!
//! - State indicators (color-coded status badges)
//! - Cap usage rings and gauges with color zones
//! - APY history sparklines

pub mod cap_ring;
pub mod sparkline;
pub mod state_indicator;

pub use cap_ring::CapRing;
pub use sparkline::Sparkline;
pub use state_indicator::{StateIndicator, StateType};

//! Reserve overview presentation model
//!
//! Everything here is pure data derived from a [`ReserveView`](crate::types::ReserveView).
//! Rendering lives in [`crate::tui`].

pub mod caps;
pub mod configuration;
pub mod copy;
pub mod emode;
pub mod rate_model;
pub mod top_details;
pub mod visibility;

pub use caps::{CapDisplay, ValuePair};
pub use configuration::{
    ApyChart, ApyMetric, BorrowInfo, ChartSeries, CollateralInfo, DebtCeiling, EmodeInfo,
    FrozenBanner, RateField, ReserveConfiguration, RiskParameters, SupplyInfo, UsageRatios,
};
pub use copy::{CopyIndicator, CopyState, COPY_FEEDBACK};
pub use emode::emode_label;
pub use rate_model::{InterestRateCurve, InterestRateModel, CURVE_STEPS, RAY};
pub use top_details::{
    add_to_wallet, back_action, go_back, lookup, AddTokenOutcome, BackAction, MarketBadge,
    MetricKind, ReserveLookup, SummaryMetric, TopDetails,
};
pub use visibility::{BorrowLayout, ChartState, CollateralStatus, PanelLayout, SectionId};

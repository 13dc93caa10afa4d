//! Reserve Overview - lending-market reserve detail dashboard
//!
//! Presents one reserve of a lending market the way a market detail page does:
//! - A header with market badge and summary metrics
//! - Supply, collateral, borrow and E-Mode sections shown only when they apply
//! - Capped vs uncapped totals, historical APY series, the interest rate curve
//!
//! # Architecture
//!
//! - **Types**: the reserve record and market metadata
//! - **Overview**: pure presentation model derived from a reserve
//! - **History**: rates history API client
//! - **Bridge**: clipboard, navigation and wallet seams
//! - **TUI**: ratatui rendering of the presentation model
//!
//! # Example
//!
//! ```ignore
//! use reserve_overview::{lookup, OverviewConfig, ReserveConfiguration, ReserveLookup};
//! use reserve_overview::{RateHistory, UsageRatios};
//!
//! let config = OverviewConfig::load(None)?;
//! if let ReserveLookup::Found(reserve) = lookup(&snapshot, "0x6b17...") {
//!     let panel = ReserveConfiguration::build(
//!         reserve,
//!         UsageRatios::from_reserve(reserve),
//!         &config,
//!         &RateHistory::Loading,
//!     );
//!     println!("{:?}", panel.layout.sections());
//! }
//! ```

pub mod bridge;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod links;
pub mod overview;
pub mod tui;
pub mod types;

// Re-export commonly used types
pub use bridge::{Clipboard, HistoryStack, MemoryClipboard, Navigator, WalletBridge};
pub use config::OverviewConfig;
pub use error::{ReserveError, Result};
pub use history::{RateHistory, RatesHistoryClient};
pub use links::{BlockExplorer, ExplorerLinkBuilder};
pub use overview::{
    lookup, CapDisplay, ChartState, CollateralStatus, CopyIndicator, PanelLayout,
    ReserveConfiguration, ReserveLookup, SectionId, TopDetails, UsageRatios,
};
pub use types::{IncentiveData, MarketInfo, ReserveSnapshot, ReserveView, TimeSeriesPoint};

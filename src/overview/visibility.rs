//! Panel visibility resolution
//!
//! Maps a reserve to the sections of the configuration panel that are shown.
//! Resolution is pure: same reserve, same history state, same layout.

use crate::history::RateHistory;
use crate::types::ReserveView;

/// How the reserve may be used as collateral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollateralStatus {
    /// Collateral only inside isolation mode, bounded by a debt ceiling
    Isolated,
    /// Regular collateral
    CollateralEnabled,
    /// Cannot back any borrow
    CollateralDisabled,
}

impl CollateralStatus {
    pub fn of(reserve: &ReserveView) -> Self {
        if reserve.is_isolated {
            Self::Isolated
        } else if reserve.usage_as_collateral_enabled {
            Self::CollateralEnabled
        } else {
            Self::CollateralDisabled
        }
    }

    /// Whether Max LTV / threshold / penalty boxes apply
    pub fn shows_risk_boxes(&self) -> bool {
        matches!(self, Self::CollateralEnabled)
    }
}

/// Sections of the configuration panel in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    FrozenWarning,
    Supply,
    CollateralUsage,
    CollateralBoxes,
    Borrow,
    EMode,
    InterestRateModel,
}

impl SectionId {
    /// All sections in display order
    pub fn all() -> [SectionId; 7] {
        [
            SectionId::FrozenWarning,
            SectionId::Supply,
            SectionId::CollateralUsage,
            SectionId::CollateralBoxes,
            SectionId::Borrow,
            SectionId::EMode,
            SectionId::InterestRateModel,
        ]
    }

    /// Section heading
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::FrozenWarning => "Frozen",
            SectionId::Supply => "Supply Info",
            SectionId::CollateralUsage => "Collateral usage",
            SectionId::CollateralBoxes => "Collateral parameters",
            SectionId::Borrow => "Borrow info",
            SectionId::EMode => "E-Mode info",
            SectionId::InterestRateModel => "Interest rate model",
        }
    }
}

/// Whether and how a historical APY chart occupies space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartState {
    /// No chart area at all
    Hidden,
    /// Chart area present, data pending
    Loading,
    /// Chart area with data
    Ready,
}

impl ChartState {
    /// Chart state for a history fetch; `configured` is false when the market has no rates API
    pub fn from_history(configured: bool, history: &RateHistory) -> Self {
        if !configured {
            return ChartState::Hidden;
        }
        match history {
            RateHistory::Failed => ChartState::Hidden,
            RateHistory::Loading => ChartState::Loading,
            RateHistory::Ready(_) => ChartState::Ready,
        }
    }

    pub fn is_shown(&self) -> bool {
        !matches!(self, ChartState::Hidden)
    }
}

/// Borrow section layout, present only when borrowing is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorrowLayout {
    pub capped: bool,
    pub stable_column: bool,
    pub borrow_cap_column: bool,
    pub chart: ChartState,
}

/// Resolved visibility of every section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub frozen: bool,
    pub supply_capped: bool,
    pub unbacked: bool,
    pub supply_chart: ChartState,
    pub collateral: CollateralStatus,
    pub debt_ceiling_box: bool,
    pub borrow: Option<BorrowLayout>,
    pub emode: bool,
    pub interest_rate_model: bool,
}

impl PanelLayout {
    /// Resolve the layout for `reserve`
    pub fn resolve(reserve: &ReserveView, history_configured: bool, history: &RateHistory) -> Self {
        let chart = ChartState::from_history(history_configured, history);
        let collateral = CollateralStatus::of(reserve);

        let borrow = reserve.borrowing_enabled.then(|| BorrowLayout {
            capped: reserve.has_borrow_cap(),
            stable_column: reserve.stable_borrow_rate_enabled,
            borrow_cap_column: reserve.has_borrow_cap_usd(),
            chart,
        });

        Self {
            frozen: reserve.is_frozen,
            supply_capped: reserve.has_supply_cap(),
            unbacked: reserve.has_unbacked(),
            supply_chart: if reserve.borrowing_enabled {
                chart
            } else {
                ChartState::Hidden
            },
            collateral,
            debt_ceiling_box: collateral == CollateralStatus::Isolated,
            borrow,
            emode: reserve.in_emode(),
            interest_rate_model: reserve.borrowing_enabled,
        }
    }

    /// Whether `section` is rendered
    pub fn is_visible(&self, section: SectionId) -> bool {
        match section {
            SectionId::FrozenWarning => self.frozen,
            SectionId::Supply | SectionId::CollateralUsage => true,
            SectionId::CollateralBoxes => {
                self.collateral.shows_risk_boxes() || self.debt_ceiling_box
            }
            SectionId::Borrow => self.borrow.is_some(),
            SectionId::EMode => self.emode,
            SectionId::InterestRateModel => self.interest_rate_model,
        }
    }

    /// Visible sections in display order
    pub fn sections(&self) -> Vec<SectionId> {
        SectionId::all()
            .into_iter()
            .filter(|s| self.is_visible(*s))
            .collect()
    }
}

//! Reserve status & configuration panel model
//!
//! Pairs a resolved [`PanelLayout`] with the formatted values each visible
//! section displays. Hidden sections are `None` so renderers cannot show
//! stale values for them.

use crate::config::OverviewConfig;
use crate::format;
use crate::history::RateHistory;
use crate::overview::caps::{CapDisplay, ValuePair};
use crate::overview::emode::emode_label;
use crate::overview::rate_model::InterestRateModel;
use crate::overview::visibility::{ChartState, CollateralStatus, PanelLayout};
use crate::types::{IncentiveData, ReserveView, TimeSeriesPoint};

/// Cap usage fractions computed by the data layer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UsageRatios {
    pub supply_cap: f64,
    pub borrow_cap: f64,
    pub debt_ceiling: f64,
}

fn ratio(used: &str, cap: &str) -> f64 {
    match (format::parse_amount(used), format::parse_amount(cap)) {
        (Some(used), Some(cap)) if cap > 0.0 => used / cap,
        _ => 0.0,
    }
}

impl UsageRatios {
    /// Derive usage from the reserve's own totals; uncapped sides are zero
    pub fn from_reserve(reserve: &ReserveView) -> Self {
        Self {
            supply_cap: ratio(
                &reserve.total_liquidity,
                reserve.supply_cap.as_deref().unwrap_or_default(),
            ),
            borrow_cap: ratio(
                &reserve.total_debt,
                reserve.borrow_cap.as_deref().unwrap_or_default(),
            ),
            debt_ceiling: ratio(&reserve.isolation_mode_total_debt, &reserve.debt_ceiling),
        }
    }
}

/// Field of a history point plotted by a chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateField {
    LiquidityRate,
    StableBorrowRate,
    VariableBorrowRate,
}

impl RateField {
    pub fn value(&self, point: &TimeSeriesPoint) -> f64 {
        match self {
            RateField::LiquidityRate => point.liquidity_rate,
            RateField::StableBorrowRate => point.stable_borrow_rate,
            RateField::VariableBorrowRate => point.variable_borrow_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSeries {
    pub field: RateField,
    pub label: &'static str,
}

/// Historical APY chart slot
#[derive(Debug, Clone, PartialEq)]
pub struct ApyChart {
    pub state: ChartState,
    pub series: Vec<ChartSeries>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenBanner {
    pub message: String,
    pub link: String,
}

/// An APY with the side's incentive summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApyMetric {
    pub value: String,
    pub incentives: Option<String>,
}

impl ApyMetric {
    fn new(apy: &str, incentives: &[IncentiveData]) -> Self {
        Self {
            value: format::format_percent(apy),
            incentives: incentive_summary(incentives),
        }
    }
}

/// `+1.20% stkAAVE, OP` when any reward applies
pub fn incentive_summary(incentives: &[IncentiveData]) -> Option<String> {
    if incentives.is_empty() {
        return None;
    }

    let total: f64 = incentives
        .iter()
        .filter_map(|i| format::parse_amount(&i.incentive_apr))
        .sum();
    let symbols: Vec<&str> = incentives
        .iter()
        .map(|i| i.reward_token_symbol.as_str())
        .collect();

    Some(format!("+{} {}", format::percent(total, 2), symbols.join(", ")))
}

/// Max LTV / liquidation threshold / liquidation penalty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskParameters {
    pub max_ltv: String,
    pub liquidation_threshold: String,
    pub liquidation_penalty: String,
}

impl RiskParameters {
    fn new(ltv: &str, threshold: &str, bonus: &str) -> Self {
        Self {
            max_ltv: format::format_percent(ltv),
            liquidation_threshold: format::format_percent(threshold),
            liquidation_penalty: format::format_percent(bonus),
        }
    }

    /// Labelled boxes in display order
    pub fn boxes(&self) -> [(&'static str, &str); 3] {
        [
            ("Max LTV", self.max_ltv.as_str()),
            ("Liquidation threshold", self.liquidation_threshold.as_str()),
            ("Liquidation penalty", self.liquidation_penalty.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebtCeiling {
    pub debt: String,
    pub ceiling: String,
    pub usage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollateralInfo {
    pub status: CollateralStatus,
    pub risk: Option<RiskParameters>,
    pub debt_ceiling: Option<DebtCeiling>,
}

impl CollateralInfo {
    /// Headline for the collateral usage row
    pub fn message(&self) -> &'static str {
        match self.status {
            CollateralStatus::Isolated => {
                "Asset can only be used as collateral in isolation mode only."
            }
            CollateralStatus::CollateralEnabled => "Can be collateral",
            CollateralStatus::CollateralDisabled => "Asset cannot be used as collateral.",
        }
    }

    /// Explanation shown under isolation mode
    pub fn detail(&self) -> Option<&'static str> {
        match self.status {
            CollateralStatus::Isolated => Some(
                "In Isolation mode you cannot supply other assets as collateral for borrowing. \
                 Assets used as collateral in Isolation mode can only be borrowed to a specific \
                 debt ceiling.",
            ),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplyInfo {
    pub totals: CapDisplay,
    pub apy: ApyMetric,
    pub unbacked: Option<ValuePair>,
    pub chart: ApyChart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BorrowInfo {
    pub totals: CapDisplay,
    pub variable_apy: ApyMetric,
    pub stable_apy: Option<ApyMetric>,
    pub borrow_cap: Option<ValuePair>,
    pub chart: ApyChart,
}

impl BorrowInfo {
    /// Number of metric columns after the total
    pub fn apy_columns(&self) -> usize {
        1 + usize::from(self.stable_apy.is_some()) + usize::from(self.borrow_cap.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmodeInfo {
    pub category_id: u8,
    pub label: String,
    pub risk: RiskParameters,
}

/// Fully resolved configuration panel
#[derive(Debug, Clone, PartialEq)]
pub struct ReserveConfiguration {
    pub symbol: String,
    pub layout: PanelLayout,
    pub frozen: Option<FrozenBanner>,
    pub supply: SupplyInfo,
    pub collateral: CollateralInfo,
    pub borrow: Option<BorrowInfo>,
    pub emode: Option<EmodeInfo>,
    pub interest_rate_model: Option<InterestRateModel>,
}

impl ReserveConfiguration {
    pub fn build(
        reserve: &ReserveView,
        usage: UsageRatios,
        config: &OverviewConfig,
        history: &RateHistory,
    ) -> Self {
        let history_configured = config.market.rates_history_api_url.is_some();
        let layout = PanelLayout::resolve(reserve, history_configured, history);

        let frozen = layout.frozen.then(|| FrozenBanner {
            message: format!(
                "{} is frozen due to a protocol governance decision.",
                reserve.symbol
            ),
            link: config.frozen_proposal_url(&reserve.symbol).to_string(),
        });

        let supply = SupplyInfo {
            totals: CapDisplay::supply(reserve, usage.supply_cap),
            apy: ApyMetric::new(&reserve.supply_apy, &reserve.a_incentives_data),
            unbacked: layout.unbacked.then(|| {
                ValuePair::new(
                    format!(
                        "{} {}",
                        format::format_compact(reserve.unbacked.as_deref().unwrap_or_default()),
                        reserve.name
                    ),
                    format::format_usd(reserve.unbacked_usd.as_deref().unwrap_or_default()),
                )
            }),
            chart: ApyChart {
                state: layout.supply_chart,
                series: vec![ChartSeries {
                    field: RateField::LiquidityRate,
                    label: "Supply APR",
                }],
            },
        };

        let collateral = CollateralInfo {
            status: layout.collateral,
            risk: layout.collateral.shows_risk_boxes().then(|| {
                RiskParameters::new(
                    &reserve.formatted_base_ltv_as_collateral,
                    &reserve.formatted_reserve_liquidation_threshold,
                    &reserve.formatted_reserve_liquidation_bonus,
                )
            }),
            debt_ceiling: layout.debt_ceiling_box.then(|| DebtCeiling {
                debt: format::format_usd(&reserve.isolation_mode_total_debt),
                ceiling: format::format_usd(&reserve.debt_ceiling),
                usage: usage.debt_ceiling,
            }),
        };

        let borrow = layout.borrow.map(|b| {
            let mut series = Vec::with_capacity(2);
            if b.stable_column {
                series.push(ChartSeries {
                    field: RateField::StableBorrowRate,
                    label: "Borrow APR, stable",
                });
            }
            series.push(ChartSeries {
                field: RateField::VariableBorrowRate,
                label: "Borrow APR, variable",
            });

            BorrowInfo {
                totals: CapDisplay::borrow(reserve, usage.borrow_cap),
                variable_apy: ApyMetric::new(
                    &reserve.variable_borrow_apy,
                    &reserve.v_incentives_data,
                ),
                stable_apy: b.stable_column.then(|| {
                    ApyMetric::new(&reserve.stable_borrow_apy, &reserve.s_incentives_data)
                }),
                borrow_cap: b.borrow_cap_column.then(|| {
                    ValuePair::new(
                        format::format_amount(reserve.borrow_cap.as_deref().unwrap_or_default()),
                        format::format_usd(reserve.borrow_cap_usd.as_deref().unwrap_or_default()),
                    )
                }),
                chart: ApyChart {
                    state: b.chart,
                    series,
                },
            }
        });

        let emode = layout.emode.then(|| EmodeInfo {
            category_id: reserve.e_mode_category_id,
            label: emode_label(
                reserve.e_mode_category_id,
                &config.market.base_asset_symbol,
                &config.emode_labels,
            ),
            risk: RiskParameters::new(
                &reserve.formatted_e_mode_ltv,
                &reserve.formatted_e_mode_liquidation_threshold,
                &reserve.formatted_e_mode_liquidation_bonus,
            ),
        });

        let interest_rate_model = layout
            .interest_rate_model
            .then(|| InterestRateModel::from_reserve(reserve));

        Self {
            symbol: reserve.symbol.clone(),
            layout,
            frozen,
            supply,
            collateral,
            borrow,
            emode,
            interest_rate_model,
        }
    }
}

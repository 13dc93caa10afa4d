//! Core data structures for the reserve overview
//!
//! `ReserveView` mirrors the computed reserve record produced by the data
//! aggregation layer. Amounts stay as the decimal strings the indexer emits
//! and are parsed only when formatted.

use serde::{Deserialize, Serialize};

/// Reward emitted on one side of a reserve (supply, variable or stable debt)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IncentiveData {
    #[serde(rename = "incentiveAPR")]
    pub incentive_apr: String,
    pub reward_token_symbol: String,
}

/// Read-only projection of a lending-market reserve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ReserveView {
    // Identity
    pub underlying_asset: String,
    pub symbol: String,
    pub name: String,
    pub icon_symbol: String,
    pub price_oracle: String,

    // Supply
    pub total_liquidity: String,
    #[serde(rename = "totalLiquidityUSD")]
    pub total_liquidity_usd: String,
    pub supply_cap: Option<String>,
    #[serde(rename = "supplyCapUSD")]
    pub supply_cap_usd: Option<String>,
    pub unbacked: Option<String>,
    #[serde(rename = "unbackedUSD")]
    pub unbacked_usd: Option<String>,
    #[serde(rename = "supplyAPY")]
    pub supply_apy: String,
    #[serde(rename = "availableLiquidityUSD")]
    pub available_liquidity_usd: String,
    #[serde(rename = "priceInUSD")]
    pub price_in_usd: String,
    pub a_incentives_data: Vec<IncentiveData>,

    // Borrow
    pub total_debt: String,
    #[serde(rename = "totalDebtUSD")]
    pub total_debt_usd: String,
    pub borrow_cap: Option<String>,
    #[serde(rename = "borrowCapUSD")]
    pub borrow_cap_usd: Option<String>,
    #[serde(rename = "variableBorrowAPY")]
    pub variable_borrow_apy: String,
    #[serde(rename = "stableBorrowAPY")]
    pub stable_borrow_apy: String,
    pub stable_borrow_rate_enabled: bool,
    pub borrowing_enabled: bool,
    pub v_incentives_data: Vec<IncentiveData>,
    pub s_incentives_data: Vec<IncentiveData>,

    // Collateral
    pub usage_as_collateral_enabled: bool,
    pub is_isolated: bool,
    pub is_frozen: bool,
    #[serde(rename = "formattedBaseLTVasCollateral")]
    pub formatted_base_ltv_as_collateral: String,
    pub formatted_reserve_liquidation_threshold: String,
    pub formatted_reserve_liquidation_bonus: String,
    pub debt_ceiling: String,
    #[serde(rename = "debtCeilingUSD")]
    pub debt_ceiling_usd: String,
    pub isolation_mode_total_debt: String,

    // E-Mode
    pub e_mode_category_id: u8,
    pub formatted_e_mode_ltv: String,
    pub formatted_e_mode_liquidation_threshold: String,
    pub formatted_e_mode_liquidation_bonus: String,

    // Interest rate model (RAY-scaled strings)
    pub base_variable_borrow_rate: String,
    pub variable_rate_slope1: String,
    pub variable_rate_slope2: String,
    pub base_stable_borrow_rate: String,
    pub stable_rate_slope1: String,
    pub stable_rate_slope2: String,
    pub optimal_usage_ratio: String,
    pub borrow_usage_ratio: String,
}

impl ReserveView {
    /// Whether the supply side has a configured cap
    pub fn has_supply_cap(&self) -> bool {
        is_set(self.supply_cap.as_deref())
    }

    /// Whether the borrow side has a configured cap
    pub fn has_borrow_cap(&self) -> bool {
        is_set(self.borrow_cap.as_deref())
    }

    /// Whether a borrow cap is known in USD terms
    pub fn has_borrow_cap_usd(&self) -> bool {
        is_set(self.borrow_cap_usd.as_deref())
    }

    /// Whether part of the supply is minted without backing
    pub fn has_unbacked(&self) -> bool {
        is_set(self.unbacked.as_deref())
    }

    /// Whether the reserve belongs to an E-Mode category
    pub fn in_emode(&self) -> bool {
        self.e_mode_category_id != 0
    }
}

/// A cap or amount field counts as set unless it is absent, empty or `"0"`
pub fn is_set(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") | Some("0") => false,
        Some(_) => true,
    }
}

/// Reserves list as handed over by the data provider
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReserveSnapshot {
    pub reserves: Vec<ReserveView>,
    pub loading: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    List(Vec<ReserveView>),
    Snapshot(ReserveSnapshot),
}

impl ReserveSnapshot {
    /// Loaded snapshot of `reserves`
    pub fn loaded(reserves: Vec<ReserveView>) -> Self {
        Self {
            reserves,
            loading: false,
        }
    }

    /// Parse either a bare reserve array or a `{"reserves": [...], "loading": ..}` object
    pub fn from_json(source: &str) -> crate::error::Result<Self> {
        Ok(match serde_json::from_str::<SnapshotFile>(source)? {
            SnapshotFile::List(reserves) => Self::loaded(reserves),
            SnapshotFile::Snapshot(snapshot) => snapshot,
        })
    }
}

/// One bucket of historical rates (all rates as fractions)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    /// Bucket start, unix epoch milliseconds
    pub date: i64,
    pub liquidity_rate: f64,
    pub stable_borrow_rate: f64,
    pub variable_borrow_rate: f64,
    pub utilization_rate: f64,
}

/// Market and network metadata for the current deployment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketInfo {
    pub market_title: String,
    pub network_name: String,
    pub v3: bool,
    pub chain_id: u64,
    pub base_asset_symbol: String,
    /// Block explorer root, e.g. `https://etherscan.io`
    pub explorer_url: String,
    pub rates_history_api_url: Option<String>,
    pub lending_pool_address_provider: String,
}

impl Default for MarketInfo {
    fn default() -> Self {
        Self {
            market_title: "Ethereum".to_string(),
            network_name: "Ethereum".to_string(),
            v3: true,
            chain_id: 1,
            base_asset_symbol: "ETH".to_string(),
            explorer_url: "https://etherscan.io".to_string(),
            rates_history_api_url: None,
            lending_pool_address_provider: "0x2f39d218133afab8f2b819b1066c7e434ad94e9e"
                .to_string(),
        }
    }
}

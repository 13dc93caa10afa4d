//! Capped vs uncapped quantity display
//!
//! Supply and borrow totals share one shape: a single total + USD pair when no
//! cap is configured, or "used of cap" on both the token and USD lines.

use crate::format;
use crate::types::{is_set, ReserveView};

/// Formatted token amount with its USD equivalent
#[derive(Debug, Clone, PartialEq)]
pub struct ValuePair {
    pub amount: String,
    pub usd: String,
}

impl ValuePair {
    pub fn new(amount: impl Into<String>, usd: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            usd: usd.into(),
        }
    }
}

/// Total of a possibly capped quantity
#[derive(Debug, Clone, PartialEq)]
pub enum CapDisplay {
    Uncapped {
        total: ValuePair,
    },
    Capped {
        total: ValuePair,
        cap: ValuePair,
        /// Fraction of the cap in use
        usage: f64,
    },
}

impl CapDisplay {
    /// Build from raw fields; a cap of `None` or `"0"` is uncapped
    pub fn from_fields(
        total: &str,
        total_usd: &str,
        cap: Option<&str>,
        cap_usd: Option<&str>,
        usage: f64,
        compact_total: bool,
    ) -> Self {
        let amount = if compact_total {
            format::format_compact(total)
        } else {
            format::format_amount(total)
        };
        let total = ValuePair::new(amount, format::format_usd(total_usd));

        match cap {
            Some(cap) if is_set(Some(cap)) => CapDisplay::Capped {
                total,
                cap: ValuePair::new(
                    format::format_amount(cap),
                    format::format_usd(cap_usd.unwrap_or_default()),
                ),
                usage,
            },
            _ => CapDisplay::Uncapped { total },
        }
    }

    /// Supply totals; the supplied amount is shown compact
    pub fn supply(reserve: &ReserveView, usage: f64) -> Self {
        Self::from_fields(
            &reserve.total_liquidity,
            &reserve.total_liquidity_usd,
            reserve.supply_cap.as_deref(),
            reserve.supply_cap_usd.as_deref(),
            usage,
            true,
        )
    }

    /// Borrow totals
    pub fn borrow(reserve: &ReserveView, usage: f64) -> Self {
        Self::from_fields(
            &reserve.total_debt,
            &reserve.total_debt_usd,
            reserve.borrow_cap.as_deref(),
            reserve.borrow_cap_usd.as_deref(),
            usage,
            false,
        )
    }

    pub fn is_capped(&self) -> bool {
        matches!(self, CapDisplay::Capped { .. })
    }

    /// Cap usage, when capped
    pub fn usage(&self) -> Option<f64> {
        match self {
            CapDisplay::Capped { usage, .. } => Some(*usage),
            CapDisplay::Uncapped { .. } => None,
        }
    }

    /// Displayed pairs: the total, followed by the cap when capped
    pub fn pairs(&self) -> Vec<&ValuePair> {
        match self {
            CapDisplay::Uncapped { total } => vec![total],
            CapDisplay::Capped { total, cap, .. } => vec![total, cap],
        }
    }

    /// Token line, e.g. `1.20M of 2,000,000.00`
    pub fn amount_line(&self) -> String {
        match self {
            CapDisplay::Uncapped { total } => total.amount.clone(),
            CapDisplay::Capped { total, cap, .. } => format::of(&total.amount, &cap.amount),
        }
    }

    /// USD line, e.g. `$1.20M of $2.00M`
    pub fn usd_line(&self) -> String {
        match self {
            CapDisplay::Uncapped { total } => total.usd.clone(),
            CapDisplay::Capped { total, cap, .. } => format::of(&total.usd, &cap.usd),
        }
    }
}

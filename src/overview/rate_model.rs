//! Two-slope interest rate model
//!
//! Below the optimal usage ratio the rate climbs along `slope1`; past it the
//! remaining headroom is priced along `slope2`:
//!
//! ```text
//! u <= optimal: base + slope1 * u / optimal
//! u >  optimal: base + slope1 + slope2 * (u - optimal) / (1 - optimal)
//! ```

use crate::format::parse_amount;
use crate::types::ReserveView;

/// Fixed-point scale of on-chain rates
pub const RAY: f64 = 1e27;

/// Default number of samples across the utilization axis
pub const CURVE_STEPS: usize = 100;

/// One rate curve (all values as fractions)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestRateCurve {
    pub base_rate: f64,
    pub slope1: f64,
    pub slope2: f64,
    pub optimal_usage: f64,
}

impl InterestRateCurve {
    /// Borrow rate at utilization `usage` (clamped to 0..=1)
    pub fn rate_at(&self, usage: f64) -> f64 {
        let u = usage.clamp(0.0, 1.0);
        let optimal = self.optimal_usage.clamp(0.0, 1.0);

        if optimal <= 0.0 {
            return self.base_rate + self.slope1 + self.slope2 * u;
        }
        if u <= optimal {
            return self.base_rate + self.slope1 * u / optimal;
        }

        let excess = if optimal >= 1.0 {
            0.0
        } else {
            (u - optimal) / (1.0 - optimal)
        };
        self.base_rate + self.slope1 + self.slope2 * excess
    }

    /// `(utilization %, rate %)` samples from 0% to 100%
    pub fn curve(&self, steps: usize) -> Vec<(f64, f64)> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| {
                let u = i as f64 / steps as f64;
                (u * 100.0, self.rate_at(u) * 100.0)
            })
            .collect()
    }
}

/// Variable curve, optional stable curve, and where the reserve sits on them
#[derive(Debug, Clone, PartialEq)]
pub struct InterestRateModel {
    pub variable: InterestRateCurve,
    pub stable: Option<InterestRateCurve>,
    /// Current borrow usage ratio
    pub utilization: f64,
}

fn ray(value: &str) -> f64 {
    parse_amount(value).map(|v| v / RAY).unwrap_or(0.0)
}

impl InterestRateModel {
    pub fn from_reserve(reserve: &ReserveView) -> Self {
        let optimal_usage = ray(&reserve.optimal_usage_ratio);

        let variable = InterestRateCurve {
            base_rate: ray(&reserve.base_variable_borrow_rate),
            slope1: ray(&reserve.variable_rate_slope1),
            slope2: ray(&reserve.variable_rate_slope2),
            optimal_usage,
        };

        let stable = reserve.stable_borrow_rate_enabled.then(|| InterestRateCurve {
            base_rate: ray(&reserve.base_stable_borrow_rate),
            slope1: ray(&reserve.stable_rate_slope1),
            slope2: ray(&reserve.stable_rate_slope2),
            optimal_usage,
        });

        Self {
            variable,
            stable,
            utilization: parse_amount(&reserve.borrow_usage_ratio)
                .unwrap_or(0.0)
                .clamp(0.0, 1.0),
        }
    }

    pub fn optimal_usage(&self) -> f64 {
        self.variable.optimal_usage
    }

    /// Variable rate at the current utilization
    pub fn current_variable_rate(&self) -> f64 {
        self.variable.rate_at(self.utilization)
    }
}

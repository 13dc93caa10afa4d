//! Layered configuration for the reserve overview
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. Optional TOML file
//! 3. `RESERVE_DASH__*` environment variables (`__` separates nesting)

use crate::error::{ReserveError, Result};
use crate::types::MarketInfo;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Environment prefix for overrides
pub const ENV_PREFIX: &str = "RESERVE_DASH";

/// Governance proposal explaining why an asset was frozen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrozenProposal {
    pub symbol: String,
    pub url: String,
}

/// Display name for an E-Mode category; `{base}` expands to the base asset symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmodeLabel {
    pub id: u8,
    pub label: String,
}

/// Reserve overview configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewConfig {
    /// Fallback link for frozen assets without a mapped proposal
    pub governance_url: String,

    /// Frozen-asset proposals keyed by symbol
    pub frozen_proposals: Vec<FrozenProposal>,

    /// Route used by the back control when there is no history to pop
    pub markets_route: String,

    /// How long the "Copied" acknowledgement stays up
    pub copy_feedback_ms: u64,

    /// Redraw tick for the dashboard
    pub refresh_ms: u64,

    /// E-Mode category names
    pub emode_labels: Vec<EmodeLabel>,

    /// Current market and network
    pub market: MarketInfo,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            governance_url: "https://app.aave.com/governance".to_string(),
            frozen_proposals: vec![
                FrozenProposal {
                    symbol: "UST".to_string(),
                    url: "https://app.aave.com/governance/proposal/75".to_string(),
                },
                FrozenProposal {
                    symbol: "KNC".to_string(),
                    url: "https://app.aave.com/governance/proposal/69".to_string(),
                },
            ],
            markets_route: "/markets".to_string(),
            copy_feedback_ms: 1000,
            refresh_ms: 250,
            emode_labels: vec![
                EmodeLabel {
                    id: 1,
                    label: "Stablecoins".to_string(),
                },
                EmodeLabel {
                    id: 2,
                    label: "{base} correlated".to_string(),
                },
            ],
            market: MarketInfo::default(),
        }
    }
}

impl OverviewConfig {
    /// Load defaults, then `path` if given, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            debug!("Loading config file: {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parse a TOML document on top of the defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Render as a TOML document (used by `--print-config`)
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ReserveError::Other(e.to_string()))
    }

    /// Link shown on the frozen banner for `symbol`
    pub fn frozen_proposal_url(&self, symbol: &str) -> &str {
        self.frozen_proposals
            .iter()
            .find(|p| p.symbol.eq_ignore_ascii_case(symbol))
            .map(|p| p.url.as_str())
            .unwrap_or(self.governance_url.as_str())
    }

    /// Lifetime of the copy acknowledgement
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// Dashboard tick interval
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms.max(16))
    }
}

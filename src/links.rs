//! Explorer link construction
//!
//! Builders are trusted: their output is shown and opened as-is.

/// Produces a block-explorer URL for a contract address
pub trait ExplorerLinkBuilder {
    fn address_url(&self, address: &str) -> String;
}

impl<F> ExplorerLinkBuilder for F
where
    F: Fn(&str) -> String,
{
    fn address_url(&self, address: &str) -> String {
        self(address)
    }
}

/// Etherscan-style explorer: `{base}/address/{address}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockExplorer {
    base_url: String,
}

impl BlockExplorer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl ExplorerLinkBuilder for BlockExplorer {
    fn address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.base_url.trim_end_matches('/'), address)
    }
}

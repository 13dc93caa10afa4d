//! Collaborator seams: clipboard, navigation, wallet
//!
//! The overview never talks to a terminal, browser history or wallet
//! directly; callers hand in implementations of these traits.

use crate::error::{ReserveError, Result};
use crossterm::{clipboard::CopyToClipboard, execute};
use std::io;
use tracing::{debug, info};

/// System clipboard
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard {
    /// Replace clipboard contents with `text`
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Navigation history of the hosting shell
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Position in the navigation stack; zero when this is the entry page
    fn history_index(&self) -> usize;

    /// Pop one entry
    fn go_back(&mut self);

    /// Push `route`
    fn navigate_to(&mut self, route: &str);
}

/// Connected wallet
#[cfg_attr(test, mockall::automock)]
pub trait WalletBridge {
    /// Chain the wallet is connected to, if any
    fn connected_chain_id(&self) -> Option<u64>;

    /// Ask the wallet to switch to `chain_id`
    fn switch_network(&mut self, chain_id: u64) -> Result<()>;

    /// Ask the wallet to track the token at `address`
    fn add_token(&mut self, address: &str, symbol: &str) -> Result<()>;
}

/// In-process navigation stack
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: Vec<String>,
}

impl HistoryStack {
    /// Start at `entry` with nothing behind it
    pub fn new(entry: impl Into<String>) -> Self {
        Self {
            entries: vec![entry.into()],
        }
    }

    /// Current route
    pub fn current(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or("/")
    }

    /// Number of routes on the stack
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the stack keeps its entry route
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Navigator for HistoryStack {
    fn history_index(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    fn go_back(&mut self) {
        if self.entries.len() > 1 {
            let left = self.entries.pop();
            debug!("Navigated back from {:?}", left);
        }
    }

    fn navigate_to(&mut self, route: &str) {
        debug!("Navigating to {}", route);
        self.entries.push(route.to_string());
    }
}

/// Clipboard that only remembers what it was given
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(ReserveError::Clipboard("nothing to copy".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Terminal clipboard over the OSC 52 escape sequence
#[derive(Debug, Default, Clone, Copy)]
pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(ReserveError::Clipboard("nothing to copy".to_string()));
        }
        execute!(
            io::stdout(),
            CopyToClipboard::to_clipboard_from(text.as_bytes())
        )
        .map_err(|e| ReserveError::Clipboard(e.to_string()))
    }
}

/// Wallet stand-in that records the requests it receives
#[derive(Debug, Default, Clone)]
pub struct SessionWallet {
    chain_id: Option<u64>,
    watched: Vec<(String, String)>,
}

impl SessionWallet {
    pub fn new(chain_id: Option<u64>) -> Self {
        Self {
            chain_id,
            watched: Vec::new(),
        }
    }

    /// `(address, symbol)` pairs added so far
    pub fn watched(&self) -> &[(String, String)] {
        &self.watched
    }
}

impl WalletBridge for SessionWallet {
    fn connected_chain_id(&self) -> Option<u64> {
        self.chain_id
    }

    fn switch_network(&mut self, chain_id: u64) -> Result<()> {
        info!("Wallet switched to chain {}", chain_id);
        self.chain_id = Some(chain_id);
        Ok(())
    }

    fn add_token(&mut self, address: &str, symbol: &str) -> Result<()> {
        if self.chain_id.is_none() {
            return Err(ReserveError::Wallet("no network selected".to_string()));
        }
        if self
            .watched
            .iter()
            .any(|(a, _)| a.eq_ignore_ascii_case(address))
        {
            debug!("{} already watched", symbol);
            return Ok(());
        }
        self.watched.push((address.to_string(), symbol.to_string()));
        Ok(())
    }
}

const RESERVE_ROUTE_PREFIX: &str = "/reserve-overview/?underlyingAsset=";

/// Route of the overview page for `asset`
pub fn reserve_route(asset: &str) -> String {
    format!("{}{}", RESERVE_ROUTE_PREFIX, asset)
}

/// Asset address carried by an overview route
pub fn asset_from_route(route: &str) -> Option<&str> {
    route
        .strip_prefix(RESERVE_ROUTE_PREFIX)
        .filter(|asset| !asset.is_empty())
}

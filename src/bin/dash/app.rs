//! Dashboard state: routes, copy feedback, history fetches

use ratatui::Frame;
use reserve_overview::bridge::{asset_from_route, reserve_route};
use reserve_overview::history::{reserve_id, spawn_fetch, HistoryUpdate};
use reserve_overview::overview::{add_to_wallet, go_back, AddTokenOutcome, BackAction};
use reserve_overview::tui::{self, Action, ConfigurationPanel, HeaderView, TopDetailsPanel};
use reserve_overview::{
    lookup, BlockExplorer, Clipboard, CopyIndicator, HistoryStack, Navigator, OverviewConfig,
    RateHistory, RatesHistoryClient, ReserveConfiguration, ReserveLookup, ReserveSnapshot,
    TopDetails, UsageRatios, WalletBridge,
};
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct App {
    config: OverviewConfig,
    snapshot: ReserveSnapshot,
    navigator: HistoryStack,
    copy: CopyIndicator,
    clipboard: Box<dyn Clipboard>,
    wallet: Box<dyn WalletBridge>,
    explorer: BlockExplorer,

    history_client: Option<RatesHistoryClient>,
    history: RateHistory,
    /// Reserve id the current `history` belongs to
    history_for: Option<String>,
    history_tx: mpsc::UnboundedSender<HistoryUpdate>,
    history_rx: mpsc::UnboundedReceiver<HistoryUpdate>,

    header: TopDetailsPanel,
    body: ConfigurationPanel,
    status: Option<String>,
}

impl App {
    pub fn new(
        config: OverviewConfig,
        snapshot: ReserveSnapshot,
        asset: Option<&str>,
        clipboard: Box<dyn Clipboard>,
        wallet: Box<dyn WalletBridge>,
    ) -> Self {
        let entry = match asset {
            Some(asset) => reserve_route(asset),
            None => config.markets_route.clone(),
        };
        let (history_tx, history_rx) = mpsc::unbounded_channel();

        Self {
            copy: CopyIndicator::new(config.copy_feedback()),
            explorer: BlockExplorer::new(config.market.explorer_url.clone()),
            history_client: RatesHistoryClient::for_market(&config.market),
            navigator: HistoryStack::new(entry),
            config,
            snapshot,
            clipboard,
            wallet,
            history: RateHistory::Loading,
            history_for: None,
            history_tx,
            history_rx,
            header: TopDetailsPanel::new(),
            body: ConfigurationPanel::new(),
            status: None,
        }
    }

    fn current_asset(&self) -> Option<String> {
        asset_from_route(self.navigator.current()).map(str::to_string)
    }

    fn drain_history(&mut self) {
        while let Ok(update) = self.history_rx.try_recv() {
            if self.history_for.as_deref() == Some(update.reserve_id.as_str()) {
                debug!("History arrived for {}", update.reserve_id);
                self.history = update.history;
            } else {
                debug!("Discarding stale history for {}", update.reserve_id);
            }
        }
    }

    /// Re-derive panels from current state
    pub fn refresh(&mut self, now: Instant) {
        self.drain_history();
        self.copy.tick(now);

        let Some(asset) = self.current_asset() else {
            let symbols = self
                .snapshot
                .reserves
                .iter()
                .map(|r| r.symbol.clone())
                .collect();
            self.header.update(HeaderView::Markets(symbols), &self.copy);
            self.body.update(None, &self.history);
            return;
        };

        match lookup(&self.snapshot, &asset) {
            ReserveLookup::Loading => {
                self.header.update(HeaderView::Loading, &self.copy);
                self.body.update(None, &self.history);
            }
            ReserveLookup::NotFound(asset) => {
                self.header
                    .update(HeaderView::NotFound(asset.to_string()), &self.copy);
                self.body.update(None, &self.history);
            }
            ReserveLookup::Found(reserve) => {
                let id = reserve_id(reserve, &self.config.market);
                if self.history_for.as_deref() != Some(id.as_str()) {
                    self.history = RateHistory::Loading;
                    self.copy.cancel();
                    if let Some(client) = &self.history_client {
                        spawn_fetch(client.clone(), id.clone(), self.history_tx.clone());
                    }
                    self.history_for = Some(id);
                }

                let details = TopDetails::build(reserve, &self.config.market, &self.explorer);
                let model = ReserveConfiguration::build(
                    reserve,
                    UsageRatios::from_reserve(reserve),
                    &self.config,
                    &self.history,
                );
                self.header
                    .update(HeaderView::Found(Box::new(details)), &self.copy);
                self.body.update(Some(model), &self.history);
            }
        }
    }

    /// Apply `action`; true when the dashboard should exit
    pub fn handle(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Quit => return true,
            Action::Back => {
                let action = go_back(&mut self.navigator, &self.config.markets_route);
                if let BackAction::NavigateTo(route) = action {
                    info!("No history to pop, opened {}", route);
                }
                self.status = None;
            }
            Action::NextReserve => self.open_next_reserve(),
            Action::CopyAddress => {
                if let Some(asset) = self.current_asset() {
                    let result = lookup(&self.snapshot, &asset).found().and_then(|reserve| {
                        self.copy
                            .activate(self.clipboard.as_mut(), &reserve.underlying_asset, now)
                    });
                    self.status = result.err().map(|e| format!("Copy failed: {}", e));
                }
            }
            Action::AddToWallet => {
                if let Some(asset) = self.current_asset() {
                    let market = &self.config.market;
                    let wallet = self.wallet.as_mut();
                    let result = lookup(&self.snapshot, &asset).found().and_then(|reserve| {
                        add_to_wallet(wallet, reserve, market.chain_id).map(|o| (o, reserve))
                    });

                    self.status = Some(match result {
                        Ok((AddTokenOutcome::Added, reserve)) => {
                            format!("{} added to wallet", reserve.symbol)
                        }
                        Ok((AddTokenOutcome::SwitchedAndAdded, reserve)) => format!(
                            "Switched to {} and added {}",
                            market.network_name, reserve.symbol
                        ),
                        Err(e) => {
                            warn!("Add to wallet failed: {}", e);
                            format!("Wallet error: {}", e)
                        }
                    });
                }
            }
        }

        self.refresh(now);
        false
    }

    fn open_next_reserve(&mut self) {
        let reserves = &self.snapshot.reserves;
        if reserves.is_empty() {
            return;
        }

        let current = self.current_asset();
        let next = current
            .and_then(|asset| {
                reserves
                    .iter()
                    .position(|r| r.underlying_asset.eq_ignore_ascii_case(&asset))
            })
            .map(|i| (i + 1) % reserves.len())
            .unwrap_or(0);

        let route = reserve_route(&reserves[next].underlying_asset);
        self.navigator.navigate_to(&route);
        self.status = None;
    }

    pub fn draw(&self, frame: &mut Frame) {
        tui::draw(frame, &self.header, &self.body, self.status.as_deref());
    }
}

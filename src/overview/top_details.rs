//! Top details header: reserve lookup, navigation, summary metrics

use crate::bridge::{Navigator, WalletBridge};
use crate::error::{ReserveError, Result};
use crate::format;
use crate::links::ExplorerLinkBuilder;
use crate::types::{MarketInfo, ReserveSnapshot, ReserveView};
use tracing::{debug, info};

/// Outcome of resolving a reserve by asset address
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReserveLookup<'a> {
    /// Provider has not delivered reserves yet
    Loading,
    /// Reserves are loaded but none matches
    NotFound(&'a str),
    Found(&'a ReserveView),
}

impl<'a> ReserveLookup<'a> {
    /// The reserve, or why there is none
    pub fn found(self) -> Result<&'a ReserveView> {
        match self {
            ReserveLookup::Found(reserve) => Ok(reserve),
            ReserveLookup::NotFound(asset) => {
                Err(ReserveError::ReserveNotFound(asset.to_string()))
            }
            ReserveLookup::Loading => {
                Err(ReserveError::Other("reserves are still loading".to_string()))
            }
        }
    }
}

/// Case-insensitive lookup of `asset` in the snapshot
pub fn lookup<'a>(snapshot: &'a ReserveSnapshot, asset: &'a str) -> ReserveLookup<'a> {
    if snapshot.loading {
        return ReserveLookup::Loading;
    }

    snapshot
        .reserves
        .iter()
        .find(|r| r.underlying_asset.eq_ignore_ascii_case(asset))
        .map(ReserveLookup::Found)
        .unwrap_or(ReserveLookup::NotFound(asset))
}

/// What the back control does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackAction {
    GoBack,
    NavigateTo(String),
}

/// Pop history when there is some, otherwise fall back to the markets route.
///
/// History depth is a hint; the hosting shell may report zero after a reload.
pub fn back_action(history_index: usize, markets_route: &str) -> BackAction {
    if history_index != 0 {
        BackAction::GoBack
    } else {
        BackAction::NavigateTo(markets_route.to_string())
    }
}

/// Resolve and perform the back action on `navigator`
pub fn go_back(navigator: &mut dyn Navigator, markets_route: &str) -> BackAction {
    let action = back_action(navigator.history_index(), markets_route);
    match &action {
        BackAction::GoBack => navigator.go_back(),
        BackAction::NavigateTo(route) => navigator.navigate_to(route),
    }
    debug!("Back control resolved to {:?}", action);
    action
}

/// Market strip shown above the asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketBadge {
    pub title: String,
    pub network: String,
    pub version_tag: Option<&'static str>,
}

impl MarketBadge {
    pub fn new(market: &MarketInfo) -> Self {
        Self {
            title: format!("{} Market", market.market_title),
            network: market.network_name.clone(),
            version_tag: market.v3.then_some("Version 3"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    ReserveSize,
    AvailableLiquidity,
    UtilizationRate,
    OraclePrice,
}

impl MetricKind {
    pub fn title(&self) -> &'static str {
        match self {
            MetricKind::ReserveSize => "Reserve Size",
            MetricKind::AvailableLiquidity => "Available liquidity",
            MetricKind::UtilizationRate => "Utilization Rate",
            MetricKind::OraclePrice => "Oracle price",
        }
    }
}

/// One of the four header metrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryMetric {
    pub kind: MetricKind,
    pub value: String,
    /// Explorer link next to the value
    pub link: Option<String>,
}

/// Everything the header shows for a found reserve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopDetails {
    pub badge: MarketBadge,
    pub symbol: String,
    pub name: String,
    pub icon_symbol: String,
    pub underlying_asset: String,
    pub token_link: String,
    pub metrics: [SummaryMetric; 4],
}

impl TopDetails {
    pub fn build(
        reserve: &ReserveView,
        market: &MarketInfo,
        links: &dyn ExplorerLinkBuilder,
    ) -> Self {
        let metrics = [
            SummaryMetric {
                kind: MetricKind::ReserveSize,
                value: format::format_usd(&reserve.total_liquidity_usd),
                link: None,
            },
            SummaryMetric {
                kind: MetricKind::AvailableLiquidity,
                value: format::format_usd(&reserve.available_liquidity_usd),
                link: None,
            },
            SummaryMetric {
                kind: MetricKind::UtilizationRate,
                value: format::format_percent(&reserve.borrow_usage_ratio),
                link: None,
            },
            SummaryMetric {
                kind: MetricKind::OraclePrice,
                value: format::format_usd(&reserve.price_in_usd),
                link: Some(links.address_url(&reserve.price_oracle)),
            },
        ];

        Self {
            badge: MarketBadge::new(market),
            symbol: reserve.symbol.clone(),
            name: reserve.name.clone(),
            icon_symbol: reserve.icon_symbol.to_lowercase(),
            underlying_asset: reserve.underlying_asset.clone(),
            token_link: links.address_url(&reserve.underlying_asset),
            metrics,
        }
    }
}

/// Result of the add-to-wallet affordance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTokenOutcome {
    Added,
    SwitchedAndAdded,
}

/// Add the reserve's token to the wallet, switching to the market chain first if needed
pub fn add_to_wallet(
    wallet: &mut dyn WalletBridge,
    reserve: &ReserveView,
    market_chain_id: u64,
) -> Result<AddTokenOutcome> {
    let outcome = if wallet.connected_chain_id() != Some(market_chain_id) {
        info!("Switching wallet to chain {}", market_chain_id);
        wallet.switch_network(market_chain_id)?;
        AddTokenOutcome::SwitchedAndAdded
    } else {
        AddTokenOutcome::Added
    };

    wallet.add_token(&reserve.underlying_asset, &reserve.symbol)?;
    info!("Requested wallet to track {}", reserve.symbol);
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{MockNavigator, MockWalletBridge};
    use crate::links::BlockExplorer;
    use mockall::predicate::eq;

    fn dai() -> ReserveView {
        ReserveView {
            underlying_asset: "0x6B175474E89094C44Da98b954EedeAC495271d0F".to_string(),
            symbol: "DAI".to_string(),
            name: "Dai Stablecoin".to_string(),
            icon_symbol: "DAI".to_string(),
            price_oracle: "0xoracle".to_string(),
            total_liquidity_usd: "1500000".to_string(),
            available_liquidity_usd: "400000".to_string(),
            borrow_usage_ratio: "0.7333".to_string(),
            price_in_usd: "1.0001".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_lookup_states() {
        let loading = ReserveSnapshot {
            reserves: vec![dai()],
            loading: true,
        };
        assert_eq!(lookup(&loading, "0x1"), ReserveLookup::Loading);

        let loaded = ReserveSnapshot {
            reserves: vec![dai()],
            loading: false,
        };
        assert!(matches!(
            lookup(&loaded, "0x6b175474e89094c44da98b954eedeac495271d0f"),
            ReserveLookup::Found(r) if r.symbol == "DAI"
        ));
        assert_eq!(lookup(&loaded, "0xnope"), ReserveLookup::NotFound("0xnope"));
        assert!(matches!(
            lookup(&loaded, "0xnope").found(),
            Err(ReserveError::ReserveNotFound(a)) if a == "0xnope"
        ));
        assert!(lookup(&loading, "0x1").found().is_err());
    }

    #[test]
    fn test_back_action() {
        assert_eq!(back_action(3, "/markets"), BackAction::GoBack);
        assert_eq!(
            back_action(0, "/markets"),
            BackAction::NavigateTo("/markets".to_string())
        );
    }

    #[test]
    fn test_go_back_without_history_navigates() {
        let mut nav = MockNavigator::new();
        nav.expect_history_index().return_const(0usize);
        nav.expect_navigate_to()
            .with(eq("/markets"))
            .times(1)
            .return_const(());
        nav.expect_go_back().times(0);

        go_back(&mut nav, "/markets");
    }

    #[test]
    fn test_go_back_with_history_pops() {
        let mut nav = MockNavigator::new();
        nav.expect_history_index().return_const(2usize);
        nav.expect_go_back().times(1).return_const(());
        nav.expect_navigate_to().times(0);

        assert_eq!(go_back(&mut nav, "/markets"), BackAction::GoBack);
    }

    #[test]
    fn test_top_details_metrics() {
        let details = TopDetails::build(
            &dai(),
            &MarketInfo::default(),
            &BlockExplorer::new("https://etherscan.io"),
        );

        assert_eq!(details.badge.title, "Ethereum Market");
        assert_eq!(details.badge.version_tag, Some("Version 3"));
        assert_eq!(details.icon_symbol, "dai");
        assert_eq!(details.metrics[0].value, "$1.50M");
        assert_eq!(details.metrics[1].value, "$400.00K");
        assert_eq!(details.metrics[2].value, "73.33%");
        assert_eq!(details.metrics[3].value, "$1.00");
        assert_eq!(
            details.metrics[3].link.as_deref(),
            Some("https://etherscan.io/address/0xoracle")
        );
        assert!(details.token_link.ends_with(&dai().underlying_asset));
    }

    #[test]
    fn test_add_token_on_same_chain() {
        let mut wallet = MockWalletBridge::new();
        wallet.expect_connected_chain_id().return_const(Some(1u64));
        wallet.expect_switch_network().times(0);
        wallet
            .expect_add_token()
            .withf(|address, symbol| address.starts_with("0x6B17") && symbol.starts_with("DAI"))
            .times(1)
            .returning(|_, _| Ok(()));

        assert_eq!(
            add_to_wallet(&mut wallet, &dai(), 1).unwrap(),
            AddTokenOutcome::Added
        );
    }

    #[test]
    fn test_add_token_switches_chain_first() {
        let mut seq = mockall::Sequence::new();
        let mut wallet = MockWalletBridge::new();
        wallet.expect_connected_chain_id().return_const(Some(137u64));
        wallet
            .expect_switch_network()
            .with(eq(1u64))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        wallet
            .expect_add_token()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        assert_eq!(
            add_to_wallet(&mut wallet, &dai(), 1).unwrap(),
            AddTokenOutcome::SwitchedAndAdded
        );
    }

    #[test]
    fn test_add_token_stops_when_switch_rejected() {
        let mut wallet = MockWalletBridge::new();
        wallet.expect_connected_chain_id().return_const(None::<u64>);
        wallet
            .expect_switch_network()
            .returning(|_| Err(ReserveError::Wallet("user rejected".to_string())));
        wallet.expect_add_token().times(0);

        assert!(add_to_wallet(&mut wallet, &dai(), 1).is_err());
    }
}

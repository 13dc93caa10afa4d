//! End-to-end checks over the fixture market: model, navigation, rendering

mod common;

use common::{fixture_reserve, fixture_snapshot, render_dashboard, CRV, DAI, UST};
use mockall::mock;
use mockall::predicate::eq;
use reserve_overview::bridge::{reserve_route, SessionWallet};
use reserve_overview::overview::{add_to_wallet, go_back, AddTokenOutcome, BackAction};
use reserve_overview::tui::{ConfigurationPanel, HeaderView, TopDetailsPanel};
use reserve_overview::{
    lookup, BlockExplorer, Clipboard, CollateralStatus, CopyIndicator, HistoryStack, MarketInfo,
    OverviewConfig, RateHistory, ReserveConfiguration, ReserveLookup, ReserveSnapshot,
    SectionId, TopDetails, UsageRatios,
};
use std::time::{Duration, Instant};

mock! {
    pub TermClipboard {}

    impl Clipboard for TermClipboard {
        fn write_text(&mut self, text: &str) -> reserve_overview::Result<()>;
    }
}

fn panels(asset: &str, config: &OverviewConfig) -> (TopDetailsPanel, ConfigurationPanel) {
    let reserve = fixture_reserve(asset);
    let history = RateHistory::Loading;

    let mut header = TopDetailsPanel::new();
    let details = TopDetails::build(
        &reserve,
        &config.market,
        &BlockExplorer::new(config.market.explorer_url.clone()),
    );
    header.update(HeaderView::Found(Box::new(details)), &CopyIndicator::default());

    let mut body = ConfigurationPanel::new();
    let model = ReserveConfiguration::build(
        &reserve,
        UsageRatios::from_reserve(&reserve),
        config,
        &history,
    );
    body.update(Some(model), &history);

    (header, body)
}

#[test]
fn test_dai_scenario_model() {
    let dai = fixture_reserve(DAI);
    let panel = ReserveConfiguration::build(
        &dai,
        UsageRatios::from_reserve(&dai),
        &OverviewConfig::default(),
        &RateHistory::Loading,
    );

    // Capped supply: ring plus dual values
    assert!(panel.supply.totals.is_capped());
    assert_eq!(panel.supply.totals.usage(), Some(0.6));
    assert_eq!(panel.supply.totals.amount_line(), "1.20M of 2,000,000.00");
    assert_eq!(panel.supply.totals.usd_line(), "$1.20M of $2.00M");

    // Collateral enabled with three risk boxes
    assert_eq!(panel.collateral.status, CollateralStatus::CollateralEnabled);
    let risk = panel.collateral.risk.as_ref().unwrap();
    assert_eq!(risk.max_ltv, "75.00%");
    assert_eq!(risk.liquidation_threshold, "80.00%");
    assert_eq!(risk.liquidation_penalty, "5.00%");

    // Borrow with variable, stable and borrow-cap columns
    let borrow = panel.borrow.as_ref().unwrap();
    assert_eq!(borrow.variable_apy.value, "4.21%");
    assert_eq!(
        borrow.variable_apy.incentives.as_deref(),
        Some("+0.50% stkAAVE")
    );
    assert_eq!(borrow.stable_apy.as_ref().unwrap().value, "10.30%");
    assert_eq!(borrow.borrow_cap.as_ref().unwrap().amount, "1,500,000.00");
    assert_eq!(borrow.apy_columns(), 3);

    assert!(panel.emode.is_none());
    let irm = panel.interest_rate_model.as_ref().unwrap();
    assert!(irm.stable.is_some());
    assert!((irm.optimal_usage() - 0.8).abs() < 1e-9);

    assert_eq!(
        panel.layout.sections(),
        vec![
            SectionId::Supply,
            SectionId::CollateralUsage,
            SectionId::CollateralBoxes,
            SectionId::Borrow,
            SectionId::InterestRateModel,
        ]
    );
}

#[test]
fn test_dai_dashboard_renders_visible_sections() {
    let (header, body) = panels(DAI, &OverviewConfig::default());
    let screen = render_dashboard(120, 40, &header, &body);

    assert!(screen.contains("Ethereum Market"));
    assert!(screen.contains("Version 3"));
    assert!(screen.contains("DAI"));
    assert!(screen.contains("Copy token contract address"));
    assert!(screen.contains("Reserve Size"));
    assert!(screen.contains("$1.20M"));
    assert!(screen.contains("Supply Info"));
    assert!(screen.contains("Can be collateral"));
    assert!(screen.contains("Max LTV"));
    assert!(screen.contains("Borrow info"));
    assert!(screen.contains("APY, stable"));
    assert!(screen.contains("Interest rate model"));
    assert!(!screen.contains("E-Mode info"));
    assert!(!screen.contains("Unbacked"));
}

#[test]
fn test_isolated_reserve_renders_debt_ceiling() {
    let (header, body) = panels(CRV, &OverviewConfig::default());
    let screen = render_dashboard(140, 30, &header, &body);

    assert!(screen.contains("isolation mode"));
    assert!(screen.contains("Isolated Debt Ceiling"));
    assert!(screen.contains("$2.50M of $10.00M"));
    assert!(screen.contains("Unbacked: 12.50K Curve DAO Token ($7.50K)"));
    assert!(!screen.contains("Max LTV"));
    assert!(!screen.contains("Can be collateral"));
    assert!(!screen.contains("Borrow info"));
}

#[test]
fn test_frozen_reserve_links_proposal() {
    let (_, body) = panels(UST, &OverviewConfig::default());
    let model = body.model().unwrap();

    let banner = model.frozen.as_ref().unwrap();
    assert_eq!(banner.link, "https://app.aave.com/governance/proposal/75");
    assert_eq!(model.emode.as_ref().unwrap().label, "Stablecoins");
    assert_eq!(model.collateral.status, CollateralStatus::CollateralDisabled);
}

#[test]
fn test_lookup_loading_and_not_found() {
    let loaded = fixture_snapshot();
    assert!(matches!(
        lookup(&loaded, &DAI.to_uppercase().replacen("0X", "0x", 1)),
        ReserveLookup::Found(r) if r.symbol == "DAI"
    ));
    assert_eq!(
        lookup(&loaded, "0x000000000000000000000000000000000000dead"),
        ReserveLookup::NotFound("0x000000000000000000000000000000000000dead")
    );

    let pending = ReserveSnapshot {
        reserves: Vec::new(),
        loading: true,
    };
    assert_eq!(lookup(&pending, DAI), ReserveLookup::Loading);
}

#[test]
fn test_not_found_renders_placeholder() {
    let mut header = TopDetailsPanel::new();
    header.update(
        HeaderView::NotFound("0xdead".to_string()),
        &CopyIndicator::default(),
    );
    let screen = render_dashboard(80, 20, &header, &ConfigurationPanel::new());
    assert!(screen.contains("Reserve not found: 0xdead"));
}

#[test]
fn test_copy_flow_acknowledges_then_reverts() {
    let mut clipboard = MockTermClipboard::new();
    clipboard
        .expect_write_text()
        .with(eq(DAI))
        .times(1)
        .returning(|_| Ok(()));

    let mut copy = CopyIndicator::new(OverviewConfig::default().copy_feedback());
    let t0 = Instant::now();
    copy.activate(&mut clipboard, DAI, t0).unwrap();
    assert!(copy.is_copied());

    let mut header = TopDetailsPanel::new();
    let details = TopDetails::build(
        &fixture_reserve(DAI),
        &MarketInfo::default(),
        &BlockExplorer::new("https://etherscan.io"),
    );
    header.update(HeaderView::Found(Box::new(details.clone())), &copy);
    let screen = render_dashboard(120, 20, &header, &ConfigurationPanel::new());
    assert!(screen.contains("Copied"));

    assert!(!copy.tick(t0 + Duration::from_millis(500)));
    assert!(copy.tick(t0 + Duration::from_millis(1000)));
    header.update(HeaderView::Found(Box::new(details)), &copy);
    let screen = render_dashboard(120, 20, &header, &ConfigurationPanel::new());
    assert!(screen.contains("Copy token contract address"));
}

#[test]
fn test_deep_link_back_goes_to_markets() {
    let config = OverviewConfig::default();
    let mut nav = HistoryStack::new(reserve_route(DAI));

    let action = go_back(&mut nav, &config.markets_route);
    assert_eq!(action, BackAction::NavigateTo("/markets".to_string()));
    assert_eq!(nav.current(), "/markets");

    assert_eq!(go_back(&mut nav, &config.markets_route), BackAction::GoBack);
    assert_eq!(nav.current(), reserve_route(DAI));
}

#[test]
fn test_add_token_switches_disconnected_wallet() {
    let dai = fixture_reserve(DAI);
    let mut wallet = SessionWallet::new(Some(137));

    assert_eq!(
        add_to_wallet(&mut wallet, &dai, 1).unwrap(),
        AddTokenOutcome::SwitchedAndAdded
    );
    assert_eq!(
        add_to_wallet(&mut wallet, &dai, 1).unwrap(),
        AddTokenOutcome::Added
    );
    assert_eq!(wallet.watched(), &[(DAI.to_string(), "DAI".to_string())]);
}

//! Property tests for section visibility over arbitrary reserves

use proptest::prelude::*;
use reserve_overview::overview::{CollateralStatus, SectionId};
use reserve_overview::{
    CapDisplay, OverviewConfig, RateHistory, ReserveConfiguration, ReserveView, UsageRatios,
};

fn cap() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("0".to_string())),
        Just(Some(String::new())),
        (1u64..10_000_000_000).prop_map(|v| Some(v.to_string())),
    ]
}

fn symbol() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("UST".to_string()),
        Just("KNC".to_string()),
        "[A-Z]{3,5}",
    ]
}

prop_compose! {
    fn reserve()(
        symbol in symbol(),
        supply_cap in cap(),
        borrow_cap in cap(),
        borrow_cap_usd in cap(),
        unbacked in cap(),
        flags in any::<(bool, bool, bool, bool, bool)>(),
        e_mode_category_id in prop_oneof![Just(0u8), 1u8..4],
        total in 0u64..1_000_000_000,
    ) -> ReserveView {
        let (
            is_frozen,
            is_isolated,
            usage_as_collateral_enabled,
            borrowing_enabled,
            stable_borrow_rate_enabled,
        ) = flags;
        ReserveView {
            underlying_asset: "0x0000000000000000000000000000000000000001".to_string(),
            symbol,
            total_liquidity: total.to_string(),
            total_liquidity_usd: total.to_string(),
            supply_cap,
            supply_cap_usd: Some("1000".to_string()),
            borrow_cap,
            borrow_cap_usd,
            unbacked,
            is_frozen,
            is_isolated,
            usage_as_collateral_enabled,
            borrowing_enabled,
            stable_borrow_rate_enabled,
            e_mode_category_id,
            formatted_e_mode_ltv: "0.9".to_string(),
            formatted_e_mode_liquidation_threshold: "0.93".to_string(),
            formatted_e_mode_liquidation_bonus: "0.01".to_string(),
            ..Default::default()
        }
    }
}

fn build(reserve: &ReserveView) -> ReserveConfiguration {
    ReserveConfiguration::build(
        reserve,
        UsageRatios::from_reserve(reserve),
        &OverviewConfig::default(),
        &RateHistory::Loading,
    )
}

proptest! {
    #[test]
    fn supply_cap_controls_pair_count(reserve in reserve()) {
        let panel = build(&reserve);
        let capped = reserve.has_supply_cap();

        prop_assert_eq!(panel.supply.totals.pairs().len(), if capped { 2 } else { 1 });
        prop_assert_eq!(panel.layout.supply_capped, capped);
        if let CapDisplay::Capped { cap, .. } = &panel.supply.totals {
            let expected = reserve_overview::format::format_amount(
                reserve.supply_cap.as_deref().unwrap_or_default(),
            );
            prop_assert_eq!(&cap.amount, &expected);
        }
    }

    #[test]
    fn unbacked_adds_supply_column(reserve in reserve()) {
        let panel = build(&reserve);

        prop_assert_eq!(panel.supply.unbacked.is_some(), reserve.has_unbacked());
        prop_assert_eq!(panel.layout.unbacked, reserve.has_unbacked());
    }

    #[test]
    fn frozen_always_shows_banner(reserve in reserve()) {
        let panel = build(&reserve);
        let config = OverviewConfig::default();

        prop_assert_eq!(panel.frozen.is_some(), reserve.is_frozen);
        prop_assert_eq!(panel.layout.is_visible(SectionId::FrozenWarning), reserve.is_frozen);
        if let Some(banner) = panel.frozen {
            let mapped = config
                .frozen_proposals
                .iter()
                .any(|p| p.symbol.eq_ignore_ascii_case(&reserve.symbol));
            if !mapped {
                prop_assert_eq!(banner.link, config.governance_url);
            }
        }
    }

    #[test]
    fn isolation_shows_only_isolation_warning(reserve in reserve()) {
        let panel = build(&reserve);

        if reserve.is_isolated {
            prop_assert_eq!(panel.collateral.status, CollateralStatus::Isolated);
            prop_assert!(panel.collateral.risk.is_none());
            prop_assert!(panel.collateral.debt_ceiling.is_some());
            prop_assert!(panel.collateral.message().contains("isolation mode"));
            prop_assert_ne!(panel.collateral.message(), "Can be collateral");
            prop_assert_ne!(
                panel.collateral.message(),
                "Asset cannot be used as collateral."
            );
        } else {
            prop_assert!(panel.collateral.debt_ceiling.is_none());
        }
    }

    #[test]
    fn borrowing_disabled_drops_borrow_surfaces(reserve in reserve()) {
        let panel = build(&reserve);

        prop_assert_eq!(panel.borrow.is_some(), reserve.borrowing_enabled);
        prop_assert_eq!(panel.interest_rate_model.is_some(), reserve.borrowing_enabled);
        if !reserve.borrowing_enabled {
            prop_assert!(!panel.supply.chart.state.is_shown());
        }
        prop_assert_eq!(
            panel.layout.is_visible(SectionId::InterestRateModel),
            reserve.borrowing_enabled
        );
    }

    #[test]
    fn emode_section_follows_category(reserve in reserve()) {
        let panel = build(&reserve);

        match &panel.emode {
            None => prop_assert_eq!(reserve.e_mode_category_id, 0),
            Some(emode) => {
                prop_assert_ne!(reserve.e_mode_category_id, 0);
                let boxes = emode.risk.boxes();
                prop_assert_eq!(boxes.len(), 3);
                prop_assert!(boxes.iter().all(|(_, v)| v.ends_with('%')));
            }
        }
        let count = panel
            .layout
            .sections()
            .into_iter()
            .filter(|s| *s == SectionId::EMode)
            .count();
        prop_assert_eq!(count, usize::from(reserve.e_mode_category_id != 0));
    }

    #[test]
    fn sections_keep_display_order(reserve in reserve()) {
        let sections = build(&reserve).layout.sections();
        let all = SectionId::all();
        let positions: Vec<usize> = sections
            .iter()
            .map(|s| all.iter().position(|a| a == s).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

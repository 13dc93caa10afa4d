//! Common test utilities and helpers

#![allow(dead_code)]

use ratatui::{backend::TestBackend, Terminal};
use reserve_overview::tui::{self, ConfigurationPanel, TopDetailsPanel};
use reserve_overview::{ReserveSnapshot, ReserveView};

pub const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";
pub const CRV: &str = "0xd533a949740bb3306d119cc777fa900ba034cd52";
pub const UST: &str = "0xa693b19d2931d498c5b318df961919bb4aee87a5";

/// Snapshot from `tests/fixtures/reserves.json`
pub fn fixture_snapshot() -> ReserveSnapshot {
    let source = include_str!("../fixtures/reserves.json");
    ReserveSnapshot::from_json(source).expect("fixture parses")
}

/// One reserve from the fixture by asset address
pub fn fixture_reserve(asset: &str) -> ReserveView {
    fixture_snapshot()
        .reserves
        .into_iter()
        .find(|r| r.underlying_asset == asset)
        .expect("fixture reserve")
}

/// Render the full dashboard into a text grid
pub fn render_dashboard(
    width: u16,
    height: u16,
    header: &TopDetailsPanel,
    body: &ConfigurationPanel,
) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|f| tui::draw(f, header, body, None))
        .expect("draw");

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

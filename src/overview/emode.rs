//! E-Mode category naming

use crate::config::EmodeLabel;

/// Display name for `category_id`
pub fn emode_label(category_id: u8, base_asset_symbol: &str, labels: &[EmodeLabel]) -> String {
    if category_id == 0 {
        return "Disabled".to_string();
    }

    labels
        .iter()
        .find(|l| l.id == category_id)
        .map(|l| l.label.replace("{base}", base_asset_symbol))
        .unwrap_or_else(|| "Unknown".to_string())
}

//! Dashboard panels

pub mod configuration;
pub mod top_details;

pub use configuration::ConfigurationPanel;
pub use top_details::{HeaderView, TopDetailsPanel};

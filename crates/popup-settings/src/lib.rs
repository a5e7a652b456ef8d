//! Popup settings: defaults, validation and environment overrides.
//!
//! [`SettingsManager`] is the [`popup_engine::ConfigurationStore`] used by
//! the app. Values live in memory; persistence belongs to the host.

pub mod defaults;
pub mod manager;
pub mod validation;

pub use manager::{SettingsManager, parse_keywords};

use serde::{Deserialize, Serialize};

/// A setting as reported to a settings UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingInfo {
    pub key: String,
    pub value: String,
    pub description: String,
    pub has_value: bool,
    pub is_default: bool,
}

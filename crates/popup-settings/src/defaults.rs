//! All popup setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

use popup_engine::keys;

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    (keys::SINGLE_DISABLED, "false", "Disable popups for one-to-one chats"),
    (keys::GROUP_DISABLED, "false", "Disable popups for group chats"),
    (keys::KEYWORD_DIFFERENT, "true", "Use keyword colors for keyword matches"),
    (keys::GROUP_DIFFERENT, "false", "Use group colors for group chats"),
    (keys::BACKGROUND_COLOR, "#000000", "Popup background color"),
    (keys::HEADER_COLOR, "#FFFFFF", "Popup header color"),
    (keys::TEXT_COLOR, "#FFFFFF", "Popup text color"),
    (keys::DURATION, "3000", "Popup display time (ms)"),
    (keys::GROUP_BACKGROUND_COLOR, "", "Group popup background color (empty = base)"),
    (keys::GROUP_HEADER_COLOR, "", "Group popup header color (empty = base)"),
    (keys::GROUP_TEXT_COLOR, "", "Group popup text color (empty = base)"),
    (keys::GROUP_DURATION, "3000", "Group popup display time (ms)"),
    (keys::KEYWORD_BACKGROUND_COLOR, "", "Keyword popup background color (empty = base)"),
    (keys::KEYWORD_HEADER_COLOR, "", "Keyword popup header color (empty = base)"),
    (keys::KEYWORD_TEXT_COLOR, "", "Keyword popup text color (empty = base)"),
    (keys::KEYWORD_DURATION, "3000", "Keyword popup display time (ms)"),
    (keys::KEYWORDS, "", "Comma-separated keywords (case-sensitive)"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

//! Style bundles built from configuration.

use crate::color::Color;
use crate::keys;
use crate::provider::ConfigurationStore;
use crate::types::StyleBundle;

const DEFAULT_BACKGROUND: Color = Color::BLACK;
const DEFAULT_HEADER: Color = Color::WHITE;
const DEFAULT_TEXT: Color = Color::WHITE;

/// Base colors and duration.
pub fn single(config: &dyn ConfigurationStore) -> StyleBundle {
    let (background, header, text) = base_colors(config);
    StyleBundle {
        background,
        header,
        text,
        duration_ms: duration(config, keys::DURATION),
    }
}

/// Group overrides falling back to base colors; group duration.
pub fn group(config: &dyn ConfigurationStore) -> StyleBundle {
    overridden(
        config,
        [
            keys::GROUP_BACKGROUND_COLOR,
            keys::GROUP_HEADER_COLOR,
            keys::GROUP_TEXT_COLOR,
        ],
        keys::GROUP_DURATION,
    )
}

/// Base colors with the group duration, used when group styling is not distinct.
pub fn group_plain(config: &dyn ConfigurationStore) -> StyleBundle {
    StyleBundle {
        duration_ms: duration(config, keys::GROUP_DURATION),
        ..single(config)
    }
}

/// Keyword overrides falling back to base colors; keyword duration.
pub fn keyword(config: &dyn ConfigurationStore) -> StyleBundle {
    overridden(
        config,
        [
            keys::KEYWORD_BACKGROUND_COLOR,
            keys::KEYWORD_HEADER_COLOR,
            keys::KEYWORD_TEXT_COLOR,
        ],
        keys::KEYWORD_DURATION,
    )
}

fn overridden(
    config: &dyn ConfigurationStore,
    [background_key, header_key, text_key]: [&str; 3],
    duration_key: &str,
) -> StyleBundle {
    let (background, header, text) = base_colors(config);
    StyleBundle {
        background: config.get_color(background_key, background),
        header: config.get_color(header_key, header),
        text: config.get_color(text_key, text),
        duration_ms: duration(config, duration_key),
    }
}

fn base_colors(config: &dyn ConfigurationStore) -> (Color, Color, Color) {
    (
        config.get_color(keys::BACKGROUND_COLOR, DEFAULT_BACKGROUND),
        config.get_color(keys::HEADER_COLOR, DEFAULT_HEADER),
        config.get_color(keys::TEXT_COLOR, DEFAULT_TEXT),
    )
}

// Negative durations clamp to zero.
fn duration(config: &dyn ConfigurationStore, key: &str) -> u32 {
    u32::try_from(config.get_int(key)).unwrap_or(0)
}

//! Setting value validation.

use std::sync::LazyLock;

use popup_engine::keys;
use regex::Regex;

static RE_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").unwrap());
static RE_COMPONENT_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}\s*(,\s*\d{1,3}\s*){2,3}$").unwrap());

const MIN_DURATION_MS: i32 = 100;
const MAX_DURATION_MS: i32 = 60_000;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        keys::DURATION | keys::GROUP_DURATION | keys::KEYWORD_DURATION => {
            validate_int_range(value, MIN_DURATION_MS, MAX_DURATION_MS)?
        }
        keys::BACKGROUND_COLOR | keys::HEADER_COLOR | keys::TEXT_COLOR => validate_color(value)?,
        k if is_override_color(k) => {
            if !value.is_empty() {
                validate_color(value)?;
            }
        }
        k if is_boolean_setting(k) => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_color(value: &str) -> Result<(), String> {
    let value = value.trim();
    if RE_HEX_COLOR.is_match(value) {
        return Ok(());
    }
    if RE_COMPONENT_COLOR.is_match(value) {
        let in_range = value
            .split(',')
            .all(|part| part.trim().parse::<u16>().is_ok_and(|v| v <= 255));
        if in_range {
            return Ok(());
        }
        return Err("color components must be between 0 and 255".into());
    }
    Err("must be #RRGGBB, #RRGGBBAA or r,g,b[,a]".into())
}

fn validate_int_range(value: &str, min: i32, max: i32) -> Result<(), String> {
    let v: i32 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

fn is_override_color(key: &str) -> bool {
    matches!(
        key,
        keys::GROUP_BACKGROUND_COLOR
            | keys::GROUP_HEADER_COLOR
            | keys::GROUP_TEXT_COLOR
            | keys::KEYWORD_BACKGROUND_COLOR
            | keys::KEYWORD_HEADER_COLOR
            | keys::KEYWORD_TEXT_COLOR
    )
}

fn is_boolean_setting(key: &str) -> bool {
    matches!(
        key,
        keys::SINGLE_DISABLED | keys::GROUP_DISABLED | keys::KEYWORD_DIFFERENT | keys::GROUP_DIFFERENT
    )
}

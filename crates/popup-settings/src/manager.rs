//! SettingsManager: in-memory popup settings with defaults, validation and env overrides.

use std::collections::HashMap;
use std::sync::RwLock;

use popup_engine::{Color, ConfigurationStore, keys};

use crate::SettingInfo;
use crate::defaults::DEFAULT_SETTINGS;
use crate::validation::validate_setting;

/// Holds explicitly set values; unset keys read through to [`DEFAULT_SETTINGS`].
#[derive(Debug, Default)]
pub struct SettingsManager {
    values: RwLock<HashMap<String, String>>,
}

impl SettingsManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a setting value. Falls back to default if not set.
    pub fn get_setting(&self, key: &str) -> Result<String, anyhow::Error> {
        let values = self
            .values
            .read()
            .map_err(|_| anyhow::anyhow!("settings lock poisoned"))?;
        if let Some(val) = values.get(key) {
            return Ok(val.clone());
        }
        if let Some(def) = DEFAULT_SETTINGS.get(key) {
            return Ok(def.default.to_string());
        }
        anyhow::bail!("setting not found: {key}");
    }

    /// Set a setting value with validation.
    pub fn set_setting(&self, key: &str, value: &str) -> Result<(), anyhow::Error> {
        if !DEFAULT_SETTINGS.contains_key(key) {
            anyhow::bail!("unknown setting key: {key}");
        }

        validate_setting(key, value)
            .map_err(|e| anyhow::anyhow!("validation error for {key}: {e}"))?;

        self.values
            .write()
            .map_err(|_| anyhow::anyhow!("settings lock poisoned"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Get all settings, filling in defaults for missing keys.
    pub fn get_all_settings(&self) -> Result<HashMap<String, SettingInfo>, anyhow::Error> {
        let values = self
            .values
            .read()
            .map_err(|_| anyhow::anyhow!("settings lock poisoned"))?;

        let result = DEFAULT_SETTINGS
            .iter()
            .map(|(key, def)| {
                let value = values
                    .get(*key)
                    .cloned()
                    .unwrap_or_else(|| def.default.to_string());
                let info = SettingInfo {
                    key: key.to_string(),
                    has_value: !value.is_empty(),
                    is_default: value == def.default,
                    value,
                    description: def.description.to_string(),
                };
                (key.to_string(), info)
            })
            .collect();
        Ok(result)
    }

    /// Apply overrides for known keys from `vars`.
    ///
    /// Invalid values are skipped with a warning. Returns the number applied.
    pub fn load_overrides<I>(&self, vars: I) -> u32
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut applied = 0u32;
        for (key, value) in vars {
            if !DEFAULT_SETTINGS.contains_key(key.as_str()) || value.is_empty() {
                continue;
            }
            match self.set_setting(&key, &value) {
                Ok(()) => {
                    tracing::info!("Applied setting override: {key}");
                    applied += 1;
                }
                Err(e) => tracing::warn!("Ignoring setting override: {e}"),
            }
        }
        if applied > 0 {
            tracing::info!("Overrides loaded: {applied} settings applied");
        }
        applied
    }

    /// Apply overrides from the process environment.
    pub fn load_env_overrides(&self) -> u32 {
        let vars = DEFAULT_SETTINGS
            .keys()
            .filter_map(|key| std::env::var(key).ok().map(|v| (key.to_string(), v)));
        self.load_overrides(vars)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.get_setting(key) {
            Ok(value) if !value.trim().is_empty() => Some(value),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Failed to read setting: {e}");
                None
            }
        }
    }
}

impl ConfigurationStore for SettingsManager {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.read(key).as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => default,
        }
    }

    fn get_int(&self, key: &str) -> i32 {
        let parse = |v: &str| v.trim().parse::<i32>().ok();
        if let Some(v) = self.read(key).as_deref().and_then(parse) {
            return v;
        }
        tracing::warn!(key, "Integer setting unset or invalid, using default");
        DEFAULT_SETTINGS
            .get(key)
            .and_then(|def| parse(def.default))
            .unwrap_or(0)
    }

    fn get_color(&self, key: &str, default: Color) -> Color {
        let Some(raw) = self.read(key) else {
            return default;
        };
        match raw.parse() {
            Ok(color) => color,
            Err(e) => {
                tracing::warn!(key, error = %e, "Invalid color setting, using default");
                default
            }
        }
    }

    fn keywords(&self) -> Vec<String> {
        self.read(keys::KEYWORDS)
            .map(|raw| parse_keywords(&raw))
            .unwrap_or_default()
    }
}

/// Split a comma-separated keyword list, trimming and dropping empty entries.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests;

//! Process-wide settings.
//!
//! The bundled `default_settings.toml` applies unless [`init_custom`] installs
//! another document before the first [`settings`] call. Either way the
//! document is validated once and kept for the life of the process.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::options::Options;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Install settings parsed from `toml_str`. Fails once settings are in use.
pub fn init_custom(toml_str: &str) -> Result<(), SettingsError> {
    let parsed = parse_settings_toml(toml_str)?;
    SETTINGS
        .set(parsed)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| {
        parse_settings_toml(DEFAULT_SETTINGS_TOML)
            .unwrap_or_else(|e| panic!("bundled default_settings.toml is invalid: {e}"))
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings TOML error: {0}")]
    Parse(String),
    #[error("{field}: {reason}")]
    InvalidValue { field: &'static str, reason: &'static str },
    #[error("settings are already in use")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub cache: CacheSettings,
    /// Defaults for front-ends that build `Options` from flags.
    #[serde(default)]
    pub options: Options,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub capacity: usize,
}

/// Parse and validate a settings document without installing it.
pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let settings: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let invalid = |field, reason| Err(SettingsError::InvalidValue { field, reason });
    if s.cache.capacity == 0 {
        return invalid("cache.capacity", "must be positive");
    }
    if s.options.skip_starters.iter().any(String::is_empty) {
        return invalid("options.skip_starters", "tokens must be non-empty");
    }
    if s.options.skip_ends.iter().any(String::is_empty) {
        return invalid("options.skip_ends", "tokens must be non-empty");
    }
    Ok(())
}

use std::fs;
use std::path::Path;

use sanscript::settings;

use crate::CliError;

pub fn settings_export() -> &'static str {
    settings::default_toml()
}

/// Parse a settings file and summarize it.
pub fn settings_validate(path: &Path) -> Result<String, CliError> {
    let content = fs::read_to_string(path)?;
    let s = settings::parse_settings_toml(&content)?;
    Ok(format!(
        "OK: cache.capacity={}, options.skip_sgml={}, options.syncope={}",
        s.cache.capacity, s.options.skip_sgml, s.options.syncope
    ))
}

/// Install a settings file as the process-wide settings.
pub fn load_config(path: &Path) -> Result<(), CliError> {
    let content = fs::read_to_string(path)?;
    settings::init_custom(&content)?;
    Ok(())
}

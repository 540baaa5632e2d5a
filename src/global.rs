//! Process-wide engine behind the free function [`t`].

use std::sync::OnceLock;

use sanscript_core::{Options, Sanscript, SanscriptError};
use tracing::debug;

static ENGINE: OnceLock<Sanscript> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum GlobalError {
    #[error("global engine already initialized")]
    AlreadyInitialized,
}

/// Install `engine` as the global engine, e.g. one with extra schemes.
///
/// Must happen before the first [`global`] or [`t`] call.
pub fn install(engine: Sanscript) -> Result<(), GlobalError> {
    ENGINE
        .set(engine)
        .map_err(|_| GlobalError::AlreadyInitialized)?;
    debug!("custom global engine installed");
    Ok(())
}

/// The global engine, built from the bundled schemes on first use.
pub fn global() -> &'static Sanscript {
    ENGINE.get_or_init(Sanscript::new)
}

/// Transliterate with the global engine.
pub fn t(text: &str, from: &str, to: &str, options: &Options) -> Result<String, SanscriptError> {
    global().transliterate(text, from, to, options)
}

pub mod commands;

use std::io;
use std::path::PathBuf;

use sanscript::settings::SettingsError;
use sanscript::{SanscriptError, SchemeError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{}: {source}", path.display())]
    SchemeFile {
        path: PathBuf,
        #[source]
        source: SchemeError,
    },

    #[error(transparent)]
    Transliterate(#[from] SanscriptError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

use std::io;

use crate::scheme::Category;

/// Errors surfaced by a transliteration call.
///
/// Unmapped input is never an error: it is copied to the output as-is.
#[derive(Debug, thiserror::Error)]
pub enum SanscriptError {
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),

    #[error("destination scheme `{0}` declares no virama")]
    IncompleteDestinationVirama(String),
}

/// Errors raised while constructing or loading a scheme.
#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown preprocessor: {0}")]
    UnknownPreprocessor(String),

    #[error("category `{category}` expects {expected} entries, found {found}")]
    Arity {
        category: Category,
        expected: usize,
        found: usize,
    },

    #[error("roman scheme without vowel_marks must define vowels")]
    MissingVowels,
}

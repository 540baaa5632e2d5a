use std::collections::BTreeSet;

use serde::Deserialize;

/// Per-call transliteration options. Two options values are equal when all
/// fields are equal; the map cache keys on this equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Leave `<...>` tags (and regions opened by `skip_starters`) untouched.
    pub skip_sgml: bool,
    /// Drop the schwa instead of writing a virama after a bare consonant
    /// (Hindi-style input).
    pub syncope: bool,
    /// Tokens that open an SGML-skip region when `skip_sgml` is set.
    pub skip_starters: BTreeSet<String>,
    /// Tokens that close an SGML-skip region, in addition to `>`.
    pub skip_ends: BTreeSet<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            skip_sgml: false,
            syncope: false,
            skip_starters: BTreeSet::from(["[".to_string()]),
            skip_ends: BTreeSet::from(["]".to_string()]),
        }
    }
}

impl Options {
    pub fn with_skip_sgml(mut self, skip_sgml: bool) -> Self {
        self.skip_sgml = skip_sgml;
        self
    }

    pub fn with_syncope(mut self, syncope: bool) -> Self {
        self.syncope = syncope;
        self
    }
}

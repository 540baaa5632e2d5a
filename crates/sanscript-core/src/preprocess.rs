//! Per-scheme source rewrites applied before tokenization.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::SchemeError;

static ITRANS_CANDRABINDU: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\\m\+\}").unwrap());
static ITRANS_HALANT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.h").unwrap());
static ITRANS_ESCAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\([^'`_]|$)").unwrap());

/// A rewrite attached to a source scheme by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preprocessor {
    /// ITRANS conventions:
    /// - `{\m+}` is written `.h.N`
    /// - `.h` (explicit halant) is dropped; the tokenizer adds viramas itself
    /// - a backslash not starting an accent (`\'`, `` \` ``, `\_`) escapes the
    ///   next character, expressed as a `##...##` toggle region around it
    Itrans,
}

impl Preprocessor {
    pub fn name(self) -> &'static str {
        match self {
            Preprocessor::Itrans => "itrans",
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Preprocessor::Itrans => {
                let text = ITRANS_CANDRABINDU.replace_all(text, ".h.N");
                let text = ITRANS_HALANT.replace_all(&text, "").into_owned();
                ITRANS_ESCAPE.replace_all(&text, "##${1}##").into_owned()
            }
        }
    }
}

impl fmt::Display for Preprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preprocessor {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "itrans" => Ok(Preprocessor::Itrans),
            other => Err(SchemeError::UnknownPreprocessor(other.to_string())),
        }
    }
}

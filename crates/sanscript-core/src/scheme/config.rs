use std::collections::BTreeMap;

use serde::Deserialize;

use super::{Category, Scheme, SchemeData, SchemeKind};
use crate::alternates::Alternates;
use crate::error::SchemeError;
use crate::preprocess::Preprocessor;

#[derive(Deserialize)]
struct RawScheme {
    name: String,
    kind: SchemeKind,
    #[serde(default)]
    preprocess: Option<String>,
    categories: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    alternates: BTreeMap<String, Vec<String>>,
}

/// A scheme definition parsed from TOML, ready to register.
#[derive(Debug, Clone)]
pub struct SchemeDocument {
    pub name: String,
    pub scheme: Scheme,
    pub alternates: Alternates,
    pub preprocessor: Option<Preprocessor>,
}

/// Parse one scheme document:
///
/// ```toml
/// name = "hk"
/// kind = "roman"            # or "brahmic"
/// preprocess = "itrans"     # optional
///
/// [categories]
/// vowels = ["a", "A", ...]
///
/// [alternates]              # optional
/// "A" = ["aa"]
/// ```
pub fn parse_scheme_toml(toml_str: &str) -> Result<SchemeDocument, SchemeError> {
    let raw: RawScheme = toml::from_str(toml_str).map_err(|e| SchemeError::Parse(e.to_string()))?;

    let mut data = SchemeData::new();
    for (name, graphemes) in raw.categories {
        let category: Category = name.parse()?;
        data.insert(category, graphemes)?;
    }

    let scheme = match raw.kind {
        SchemeKind::Brahmic => Scheme::brahmic(data),
        SchemeKind::Roman => Scheme::roman(data)?,
    };

    let preprocessor = raw
        .preprocess
        .as_deref()
        .map(str::parse::<Preprocessor>)
        .transpose()?;

    Ok(SchemeDocument {
        name: raw.name,
        scheme,
        alternates: raw.alternates.into_iter().collect(),
        preprocessor,
    })
}

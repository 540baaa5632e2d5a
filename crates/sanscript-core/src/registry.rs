//! Named schemes, their alternate spellings, and their preprocessors.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

use crate::alternates::Alternates;
use crate::error::{SanscriptError, SchemeError};
use crate::map::TransliterationMap;
use crate::preprocess::Preprocessor;
use crate::scheme::{parse_scheme_toml, Scheme, SchemeData, SchemeKind, BUILTIN_SCHEMES};

#[derive(Debug, Clone, Default)]
pub struct Registry {
    schemes: HashMap<String, Scheme>,
    alternates: HashMap<String, Alternates>,
    preprocessors: HashMap<String, Preprocessor>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every bundled scheme.
    pub fn builtin() -> Self {
        static INSTANCE: OnceLock<Registry> = OnceLock::new();
        INSTANCE
            .get_or_init(|| {
                let mut registry = Registry::new();
                for (name, content) in BUILTIN_SCHEMES {
                    registry
                        .load_toml(content)
                        .unwrap_or_else(|e| panic!("bundled scheme {name} must be valid: {e}"));
                }
                registry
            })
            .clone()
    }

    pub fn register_brahmic_scheme(&mut self, name: impl Into<String>, data: SchemeData) {
        self.schemes.insert(name.into(), Scheme::brahmic(data));
    }

    /// Register a roman scheme, deriving `vowel_marks` when it has none.
    pub fn register_roman_scheme(
        &mut self,
        name: impl Into<String>,
        data: SchemeData,
    ) -> Result<(), SchemeError> {
        self.schemes.insert(name.into(), Scheme::roman(data)?);
        Ok(())
    }

    /// Alternates apply only while `name` is the source scheme.
    pub fn register_alternates(&mut self, name: impl Into<String>, alternates: Alternates) {
        self.alternates.insert(name.into(), alternates);
    }

    pub fn register_preprocessor(&mut self, name: impl Into<String>, preprocessor: Preprocessor) {
        self.preprocessors.insert(name.into(), preprocessor);
    }

    /// Register a scheme document (see [`parse_scheme_toml`]). Returns its name.
    ///
    /// The document replaces any alternates and preprocessor previously
    /// registered under the same name.
    pub fn load_toml(&mut self, toml_str: &str) -> Result<String, SchemeError> {
        let doc = parse_scheme_toml(toml_str)?;
        debug!(name = %doc.name, kind = %doc.scheme.kind(), "scheme loaded");
        if doc.alternates.is_empty() {
            self.alternates.remove(&doc.name);
        } else {
            self.alternates.insert(doc.name.clone(), doc.alternates);
        }
        match doc.preprocessor {
            Some(p) => {
                self.preprocessors.insert(doc.name.clone(), p);
            }
            None => {
                self.preprocessors.remove(&doc.name);
            }
        }
        self.schemes.insert(doc.name.clone(), doc.scheme);
        Ok(doc.name)
    }

    /// Read and register a scheme document from disk.
    pub fn load_file(&mut self, path: &Path) -> Result<String, SchemeError> {
        let content = fs::read_to_string(path)?;
        self.load_toml(&content)
    }

    pub fn scheme(&self, name: &str) -> Option<&Scheme> {
        self.schemes.get(name)
    }

    pub fn kind(&self, name: &str) -> Option<SchemeKind> {
        self.scheme(name).map(Scheme::kind)
    }

    pub fn is_roman_scheme(&self, name: &str) -> bool {
        self.scheme(name).is_some_and(Scheme::is_roman)
    }

    pub fn alternates(&self, name: &str) -> Option<&Alternates> {
        self.alternates.get(name)
    }

    pub fn preprocessor(&self, name: &str) -> Option<Preprocessor> {
        self.preprocessors.get(name).copied()
    }

    /// Registered scheme names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Compile the lookup tables for `from` → `to`.
    pub fn build_map(&self, from: &str, to: &str) -> Result<TransliterationMap, SanscriptError> {
        let from_scheme = self
            .scheme(from)
            .ok_or_else(|| SanscriptError::UnknownScheme(from.to_string()))?;
        let to_scheme = self
            .scheme(to)
            .ok_or_else(|| SanscriptError::UnknownScheme(to.to_string()))?;
        let empty = Alternates::new();
        let alternates = self.alternates(from).unwrap_or(&empty);
        TransliterationMap::build(from_scheme, to_scheme, alternates)
            .ok_or_else(|| SanscriptError::IncompleteDestinationVirama(to.to_string()))
    }
}

//! The transliteration entry point: registry + compiled-map cache.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug_span;

use crate::alternates::Alternates;
use crate::brahmic::transliterate_brahmic;
use crate::cache::MapCache;
use crate::error::{SanscriptError, SchemeError};
use crate::map::TransliterationMap;
use crate::options::Options;
use crate::preprocess::Preprocessor;
use crate::registry::Registry;
use crate::roman::transliterate_roman;
use crate::scheme::SchemeData;
use crate::settings::settings;

/// A transliteration engine.
///
/// Safe to share across threads; the map cache sits behind a mutex and only
/// affects speed. Registering a scheme through the engine clears the cache.
pub struct Sanscript {
    registry: Registry,
    cache: Mutex<MapCache>,
}

impl Sanscript {
    /// All bundled schemes, cache sized from `settings()`.
    pub fn new() -> Self {
        Self::with_registry(Registry::builtin(), settings().cache.capacity)
    }

    pub fn with_registry(registry: Registry, cache_capacity: usize) -> Self {
        Self {
            registry,
            cache: Mutex::new(MapCache::new(cache_capacity)),
        }
    }

    /// Transliterate `text` from scheme `from` to scheme `to`.
    pub fn transliterate(
        &self,
        text: &str,
        from: &str,
        to: &str,
        options: &Options,
    ) -> Result<String, SanscriptError> {
        let _span = debug_span!("transliterate", from, to).entered();
        let map = self.compiled_map(from, to, options)?;

        let preprocessed;
        let text = match self.registry.preprocessor(from) {
            Some(p) => {
                preprocessed = p.apply(text);
                preprocessed.as_str()
            }
            None => text,
        };

        if map.from_roman() {
            Ok(transliterate_roman(text, &map, options))
        } else {
            Ok(transliterate_brahmic(text, &map))
        }
    }

    /// The compiled map for a scheme pair, from the cache when possible.
    pub fn compiled_map(
        &self,
        from: &str,
        to: &str,
        options: &Options,
    ) -> Result<Arc<TransliterationMap>, SanscriptError> {
        self.lock_cache()
            .get_or_try_insert_with(from, to, options, || self.registry.build_map(from, to))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn is_roman_scheme(&self, name: &str) -> bool {
        self.registry.is_roman_scheme(name)
    }

    pub fn register_brahmic_scheme(&mut self, name: impl Into<String>, data: SchemeData) {
        self.registry.register_brahmic_scheme(name, data);
        self.invalidate();
    }

    pub fn register_roman_scheme(
        &mut self,
        name: impl Into<String>,
        data: SchemeData,
    ) -> Result<(), SchemeError> {
        self.registry.register_roman_scheme(name, data)?;
        self.invalidate();
        Ok(())
    }

    pub fn register_alternates(&mut self, name: impl Into<String>, alternates: Alternates) {
        self.registry.register_alternates(name, alternates);
        self.invalidate();
    }

    pub fn register_preprocessor(&mut self, name: impl Into<String>, preprocessor: Preprocessor) {
        self.registry.register_preprocessor(name, preprocessor);
        self.invalidate();
    }

    /// Register a TOML scheme document. Returns the scheme name.
    pub fn load_toml(&mut self, toml_str: &str) -> Result<String, SchemeError> {
        let name = self.registry.load_toml(toml_str)?;
        self.invalidate();
        Ok(name)
    }

    /// Number of maps compiled so far.
    pub fn map_builds(&self) -> u64 {
        self.lock_cache().builds()
    }

    fn invalidate(&mut self) {
        self.cache
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn lock_cache(&self) -> MutexGuard<'_, MapCache> {
        // The cache holds only rebuildable maps, so a poisoned lock is still usable.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Sanscript {
    fn default() -> Self {
        Self::new()
    }
}

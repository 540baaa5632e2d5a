//! Compiled-map cache keyed by `(from, to, options)`.
//!
//! Least-recently-used eviction. A capacity of 1 keeps only the last map,
//! which is all a caller converting one scheme pair needs. A miss rebuilds
//! the same map from the registry, so the cache never changes output.

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::debug;

use crate::map::TransliterationMap;
use crate::options::Options;

struct Entry {
    from: String,
    to: String,
    options: Options,
    map: Arc<TransliterationMap>,
}

impl Entry {
    fn matches(&self, from: &str, to: &str, options: &Options) -> bool {
        self.from == from && self.to == to && self.options == *options
    }
}

pub struct MapCache {
    capacity: usize,
    /// Most recently used first.
    entries: VecDeque<Entry>,
    builds: u64,
}

impl MapCache {
    /// A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
            builds: 0,
        }
    }

    /// Return the cached map for the key, or build, store and return it.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        from: &str,
        to: &str,
        options: &Options,
        build: impl FnOnce() -> Result<TransliterationMap, E>,
    ) -> Result<Arc<TransliterationMap>, E> {
        if let Some(idx) = self.entries.iter().position(|e| e.matches(from, to, options)) {
            debug!(from, to, "map cache hit");
            if idx > 0 {
                if let Some(entry) = self.entries.remove(idx) {
                    self.entries.push_front(entry);
                }
            }
            return Ok(Arc::clone(&self.entries[0].map));
        }

        let map = Arc::new(build()?);
        self.builds += 1;
        debug!(
            from,
            to,
            max_token_length = map.max_token_length(),
            "map cache miss"
        );
        self.entries.push_front(Entry {
            from: from.to_string(),
            to: to.to_string(),
            options: options.clone(),
            map: Arc::clone(&map),
        });
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                debug!(from = %evicted.from, to = %evicted.to, "map cache evict");
            }
        }
        Ok(map)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of maps built since creation.
    pub fn builds(&self) -> u64 {
        self.builds
    }
}

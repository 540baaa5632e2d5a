//! Alternate spellings accepted by a source scheme.
//!
//! Each canonical grapheme may have several alternates. When the scheme is
//! the source of a transliteration, every alternate maps to the same target
//! as its canonical grapheme.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alternates {
    map: HashMap<String, Vec<String>>,
}

impl Alternates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add alternates for `canonical`, after any already registered.
    pub fn insert<I, S>(&mut self, canonical: impl Into<String>, alternates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.map
            .entry(canonical.into())
            .or_default()
            .extend(alternates.into_iter().map(Into::into));
    }

    /// Alternates for `canonical`, or an empty slice.
    pub fn get(&self, canonical: &str) -> &[String] {
        self.map.get(canonical).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl FromIterator<(String, Vec<String>)> for Alternates {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        let mut alternates = Alternates::new();
        for (canonical, spellings) in iter {
            alternates.insert(canonical, spellings);
        }
        alternates
    }
}

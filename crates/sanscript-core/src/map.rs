//! Compiled lookup tables between a source and a destination scheme.

use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::alternates::Alternates;
use crate::scheme::{Category, Scheme};

/// Source grapheme → destination grapheme tables for one scheme pair.
///
/// Keys include every alternate spelling of the source scheme. Immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransliterationMap {
    /// Full forms of vowels, consonants, symbols and the rest.
    pub(crate) letters: HashMap<String, String>,
    /// Vowel marks and virama.
    pub(crate) marks: HashMap<String, String>,
    /// The subset of `letters` drawn from `consonants` and `other`.
    pub(crate) consonants: HashMap<String, String>,
    /// Virama of the destination scheme.
    pub(crate) virama: String,
    /// Longest source token, in chars.
    pub(crate) max_token_length: usize,
    pub(crate) from_roman: bool,
    pub(crate) to_roman: bool,
}

impl TransliterationMap {
    /// Map every grapheme of `from` to its positional partner in `to`.
    ///
    /// Categories missing from `to` are skipped. Returns `None` when `to`
    /// has no virama.
    pub fn build(from: &Scheme, to: &Scheme, alternates: &Alternates) -> Option<Self> {
        let _span = debug_span!("build_map").entered();
        let to_data = to.data();
        let virama = to_data.get(Category::Virama)?.first()?.clone();

        let mut letters = HashMap::new();
        let mut marks = HashMap::new();
        let mut consonants = HashMap::new();
        let mut max_token_length = 0;

        for (category, from_group) in from.data().iter() {
            let Some(to_group) = to_data.get(category) else {
                continue;
            };
            for (f, t) in from_group.iter().zip(to_group) {
                let spellings = std::iter::once(f).chain(alternates.get(f));
                for spelling in spellings {
                    max_token_length = max_token_length.max(spelling.chars().count());
                    if category.is_mark() {
                        marks.insert(spelling.clone(), t.clone());
                    } else {
                        letters.insert(spelling.clone(), t.clone());
                        if category.is_consonant() {
                            consonants.insert(spelling.clone(), t.clone());
                        }
                    }
                }
            }
        }

        debug!(
            letters = letters.len(),
            marks = marks.len(),
            max_token_length,
            "map built"
        );

        Some(Self {
            letters,
            marks,
            consonants,
            virama,
            max_token_length,
            from_roman: from.is_roman(),
            to_roman: to.is_roman(),
        })
    }

    pub fn letter(&self, token: &str) -> Option<&str> {
        self.letters.get(token).map(String::as_str)
    }

    pub fn mark(&self, token: &str) -> Option<&str> {
        self.marks.get(token).map(String::as_str)
    }

    pub fn is_consonant(&self, token: &str) -> bool {
        self.consonants.contains_key(token)
    }

    pub fn virama(&self) -> &str {
        &self.virama
    }

    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }

    pub fn from_roman(&self) -> bool {
        self.from_roman
    }

    pub fn to_roman(&self) -> bool {
        self.to_roman
    }
}

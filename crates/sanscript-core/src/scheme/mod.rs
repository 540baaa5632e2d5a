//! Scheme data: typed category tables for Brahmic scripts and roman encodings.
//!
//! Position `i` of a category in one scheme names the same sound as position
//! `i` of that category in every other scheme. Each category has a fixed
//! arity, checked when a scheme is constructed, so two schemes that share a
//! category always line up.

mod config;
mod table;

pub use config::{parse_scheme_toml, SchemeDocument};
pub(crate) use table::BUILTIN_SCHEMES;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SchemeError;

/// A named group of graphemes within a scheme.
///
/// Declaration order is the order in which the map builder visits
/// categories; a later category overwrites an earlier one on key collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Vowels,
    VowelMarks,
    OtherMarks,
    Virama,
    Consonants,
    Symbols,
    Zwj,
    Skip,
    Accent,
    ComboAccent,
    Candra,
    Other,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Vowels,
        Category::VowelMarks,
        Category::OtherMarks,
        Category::Virama,
        Category::Consonants,
        Category::Symbols,
        Category::Zwj,
        Category::Skip,
        Category::Accent,
        Category::ComboAccent,
        Category::Candra,
        Category::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Vowels => "vowels",
            Category::VowelMarks => "vowel_marks",
            Category::OtherMarks => "other_marks",
            Category::Virama => "virama",
            Category::Consonants => "consonants",
            Category::Symbols => "symbols",
            Category::Zwj => "zwj",
            Category::Skip => "skip",
            Category::Accent => "accent",
            Category::ComboAccent => "combo_accent",
            Category::Candra => "candra",
            Category::Other => "other",
        }
    }

    /// Number of entries every scheme must give this category.
    pub fn arity(self) -> usize {
        match self {
            Category::Vowels => 16,
            Category::VowelMarks => 15,
            Category::OtherMarks => 3,
            Category::Virama => 1,
            Category::Consonants => 36,
            Category::Symbols => 14,
            Category::Zwj => 1,
            Category::Skip => 1,
            Category::Accent => 2,
            Category::ComboAccent => 4,
            Category::Candra => 1,
            Category::Other => 9,
        }
    }

    /// Categories whose entries attach to a preceding consonant.
    pub fn is_mark(self) -> bool {
        matches!(self, Category::VowelMarks | Category::Virama)
    }

    /// Categories whose entries carry an inherent vowel in Brahmic scripts.
    pub fn is_consonant(self) -> bool {
        matches!(self, Category::Consonants | Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| SchemeError::UnknownCategory(s.to_string()))
    }
}

/// Whether a scheme is an abugida or a roman encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    Brahmic,
    Roman,
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemeKind::Brahmic => f.write_str("brahmic"),
            SchemeKind::Roman => f.write_str("roman"),
        }
    }
}

/// Category tables of one scheme. Every stored category has its fixed arity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeData {
    groups: BTreeMap<Category, Vec<String>>,
}

impl SchemeData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a category, replacing any previous entries.
    pub fn insert<I, S>(&mut self, category: Category, graphemes: I) -> Result<(), SchemeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let graphemes: Vec<String> = graphemes.into_iter().map(Into::into).collect();
        if graphemes.len() != category.arity() {
            return Err(SchemeError::Arity {
                category,
                expected: category.arity(),
                found: graphemes.len(),
            });
        }
        self.groups.insert(category, graphemes);
        Ok(())
    }

    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.groups.get(&category).map(Vec::as_slice)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.groups.contains_key(&category)
    }

    /// Categories in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.groups.iter().map(|(c, g)| (*c, g.as_slice()))
    }
}

/// A registered scheme. Brahmic consonants are stated without a virama;
/// roman consonants are stated without the vowel `a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheme {
    Brahmic(SchemeData),
    Roman(SchemeData),
}

impl Scheme {
    pub fn brahmic(data: SchemeData) -> Self {
        Scheme::Brahmic(data)
    }

    /// Build a roman scheme. Missing `vowel_marks` are derived from `vowels`
    /// minus its first entry, which must be the inherent `a`.
    pub fn roman(mut data: SchemeData) -> Result<Self, SchemeError> {
        if !data.contains(Category::VowelMarks) {
            let vowels = data.get(Category::Vowels).ok_or(SchemeError::MissingVowels)?;
            let marks = vowels[1..].to_vec();
            data.insert(Category::VowelMarks, marks)?;
        }
        Ok(Scheme::Roman(data))
    }

    pub fn kind(&self) -> SchemeKind {
        match self {
            Scheme::Brahmic(_) => SchemeKind::Brahmic,
            Scheme::Roman(_) => SchemeKind::Roman,
        }
    }

    pub fn is_roman(&self) -> bool {
        matches!(self, Scheme::Roman(_))
    }

    pub fn data(&self) -> &SchemeData {
        match self {
            Scheme::Brahmic(data) | Scheme::Roman(data) => data,
        }
    }
}

//! Transliteration from a Brahmic script.
//!
//! Brahmic graphemes in the scheme tables are single chars, so no lookahead
//! is needed. Going to a roman scheme, a consonant's inherent `a` is written
//! out unless a vowel mark or virama follows it.

use tracing::debug_span;

use crate::map::TransliterationMap;

const HASH: char = '#';
const INHERENT_VOWEL: char = 'a';

pub(crate) fn transliterate_brahmic(text: &str, map: &TransliterationMap) -> String {
    let _span = debug_span!("transliterate_brahmic", len = text.len()).entered();

    let mut out = String::with_capacity(text.len());
    let mut skipping = false;
    // A single '#' seen; a second one toggles, a letter makes it literal.
    // Marks leave it pending and a lone '#' at the end is dropped.
    let mut dangling_hash = false;
    let mut had_roman_consonant = false;
    let mut utf8 = [0u8; 4];

    for ch in text.chars() {
        if ch == HASH {
            if dangling_hash {
                skipping = !skipping;
                dangling_hash = false;
            } else {
                dangling_hash = true;
            }
            if had_roman_consonant {
                out.push(INHERENT_VOWEL);
                had_roman_consonant = false;
            }
            continue;
        }
        if skipping {
            out.push(ch);
            continue;
        }

        let grapheme: &str = ch.encode_utf8(&mut utf8);
        if let Some(mark) = map.mark(grapheme) {
            out.push_str(mark);
            had_roman_consonant = false;
            continue;
        }

        if dangling_hash {
            out.push(HASH);
            dangling_hash = false;
        }
        if had_roman_consonant {
            out.push(INHERENT_VOWEL);
            had_roman_consonant = false;
        }
        match map.letter(grapheme).filter(|letter| !letter.is_empty()) {
            Some(letter) => {
                out.push_str(letter);
                had_roman_consonant = map.to_roman() && map.is_consonant(grapheme);
            }
            None => out.push(ch),
        }
    }

    if had_roman_consonant {
        out.push(INHERENT_VOWEL);
    }
    out
}

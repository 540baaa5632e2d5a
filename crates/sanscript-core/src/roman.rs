//! Transliteration from a roman scheme.
//!
//! Greedy longest-match over a window of `max_token_length` chars. Roman
//! consonants carry no vowel, so when the destination is Brahmic the
//! tokenizer tracks whether the last unit was a bare consonant and decides
//! between a vowel mark, a virama, or nothing for the inherent `a`.

use tracing::debug_span;

use crate::map::TransliterationMap;
use crate::options::Options;

/// Toggles transliteration off and on again.
const TOGGLE: &str = "##";
const SGML_OPEN: &str = "<";
const SGML_CLOSE: &str = ">";
const INHERENT_VOWEL: &str = "a";

pub(crate) fn transliterate_roman(text: &str, map: &TransliterationMap, options: &Options) -> String {
    let _span = debug_span!("transliterate_roman", len = text.len()).entered();

    // Byte offset of every char start, plus the end of the text.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_count = bounds.len() - 1;
    let max_len = map.max_token_length().max(1);

    let mut out = String::with_capacity(text.len() * 2);
    let mut had_consonant = false;
    // Transliteration is suspended while either flag is set.
    let mut skipping_sgml = false;
    let mut toggled = false;

    let mut pos = 0;
    while pos < char_count {
        let window = (char_count - pos).min(max_len);

        for j in 0..max_len {
            let len = (max_len - j).min(window);
            let token = &text[bounds[pos]..bounds[pos + len]];

            if skipping_sgml {
                skipping_sgml = token != SGML_CLOSE && !options.skip_ends.contains(token);
            } else if token == SGML_OPEN {
                skipping_sgml = options.skip_sgml;
            } else if token == TOGGLE {
                toggled = !toggled;
                pos += len;
                break;
            } else if options.skip_starters.contains(token) {
                skipping_sgml = options.skip_sgml;
            }

            let skipping = skipping_sgml || toggled;
            if !skipping {
                if let Some(letter) = map.letter(token) {
                    if map.to_roman() {
                        out.push_str(letter);
                    } else {
                        if !had_consonant {
                            out.push_str(letter);
                        } else if let Some(mark) = map.mark(token) {
                            out.push_str(mark);
                        } else if token != INHERENT_VOWEL {
                            out.push_str(map.virama());
                            out.push_str(letter);
                        }
                        had_consonant = map.is_consonant(token);
                    }
                    pos += len;
                    break;
                }
            }

            if j == max_len - 1 {
                // Nothing matched: copy one char through.
                if had_consonant {
                    had_consonant = false;
                    if !options.syncope {
                        out.push_str(map.virama());
                    }
                }
                out.push_str(token);
                pos += len;
            }
        }
    }

    if had_consonant && !options.syncope {
        out.push_str(map.virama());
    }
    out
}

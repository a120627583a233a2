/*
 * Copyright © 2024 the langdetect-core authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either expressed or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use crate::language::Language;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// A script class. Each variant answers "does this character/string belong
/// to my script" and knows which languages in the catalog use it.
#[derive(Clone, Copy, Debug, EnumIter, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Alphabet {
    Arabic,
    Armenian,
    Bengali,
    Cyrillic,
    Devanagari,
    Georgian,
    Greek,
    Gujarati,
    Gurmukhi,
    Han,
    Hangul,
    Hebrew,
    Hiragana,
    Katakana,
    Latin,
    Tamil,
    Telugu,
    Thai,
}

macro_rules! script_regex {
    ($name:ident, $class:literal) => {
        static $name: Lazy<Regex> =
            Lazy::new(|| Regex::new(concat!("^\\p{", $class, "}+$")).unwrap());
    };
}

script_regex!(ARABIC, "Arabic");
script_regex!(ARMENIAN, "Armenian");
script_regex!(BENGALI, "Bengali");
script_regex!(CYRILLIC, "Cyrillic");
script_regex!(DEVANAGARI, "Devanagari");
script_regex!(GEORGIAN, "Georgian");
script_regex!(GREEK, "Greek");
script_regex!(GUJARATI, "Gujarati");
script_regex!(GURMUKHI, "Gurmukhi");
script_regex!(HAN, "Han");
script_regex!(HANGUL, "Hangul");
script_regex!(HEBREW, "Hebrew");
script_regex!(HIRAGANA, "Hiragana");
script_regex!(KATAKANA, "Katakana");
script_regex!(LATIN, "Latin");
script_regex!(TAMIL, "Tamil");
script_regex!(TELUGU, "Telugu");
script_regex!(THAI, "Thai");

impl Alphabet {
    fn regex(&self) -> &'static Regex {
        match self {
            Alphabet::Arabic => &ARABIC,
            Alphabet::Armenian => &ARMENIAN,
            Alphabet::Bengali => &BENGALI,
            Alphabet::Cyrillic => &CYRILLIC,
            Alphabet::Devanagari => &DEVANAGARI,
            Alphabet::Georgian => &GEORGIAN,
            Alphabet::Greek => &GREEK,
            Alphabet::Gujarati => &GUJARATI,
            Alphabet::Gurmukhi => &GURMUKHI,
            Alphabet::Han => &HAN,
            Alphabet::Hangul => &HANGUL,
            Alphabet::Hebrew => &HEBREW,
            Alphabet::Hiragana => &HIRAGANA,
            Alphabet::Katakana => &KATAKANA,
            Alphabet::Latin => &LATIN,
            Alphabet::Tamil => &TAMIL,
            Alphabet::Telugu => &TELUGU,
            Alphabet::Thai => &THAI,
        }
    }

    /// True iff every character of `text` belongs to this script.
    pub fn matches(&self, text: &str) -> bool {
        self.regex().is_match(text)
    }

    /// True iff `ch` belongs to this script.
    pub fn matches_char(&self, ch: char) -> bool {
        let mut buffer = [0u8; 4];
        self.regex().is_match(ch.encode_utf8(&mut buffer))
    }

    /// A stable name used only to pin iteration order; not part of any
    /// wire format.
    fn name(&self) -> &'static str {
        match self {
            Alphabet::Arabic => "Arabic",
            Alphabet::Armenian => "Armenian",
            Alphabet::Bengali => "Bengali",
            Alphabet::Cyrillic => "Cyrillic",
            Alphabet::Devanagari => "Devanagari",
            Alphabet::Georgian => "Georgian",
            Alphabet::Greek => "Greek",
            Alphabet::Gujarati => "Gujarati",
            Alphabet::Gurmukhi => "Gurmukhi",
            Alphabet::Han => "Han",
            Alphabet::Hangul => "Hangul",
            Alphabet::Hebrew => "Hebrew",
            Alphabet::Hiragana => "Hiragana",
            Alphabet::Katakana => "Katakana",
            Alphabet::Latin => "Latin",
            Alphabet::Tamil => "Tamil",
            Alphabet::Telugu => "Telugu",
            Alphabet::Thai => "Thai",
        }
    }

    /// The subset of alphabets used by exactly one language in the given
    /// catalog, as `(alphabet, language)` pairs sorted by alphabet name.
    ///
    /// Returned as a `Vec` rather than a `HashMap` so that rule-engine
    /// iteration is deterministic across runs (spec §9, Open Questions).
    pub fn all_supporting_single_language(languages: &HashSet<Language>) -> Vec<(Alphabet, Language)> {
        let mut pairs: Vec<(Alphabet, Language)> = Alphabet::iter()
            .filter_map(|alphabet| {
                let mut supporting = languages
                    .iter()
                    .filter(|language| language.alphabets().contains(&alphabet));
                let first = supporting.next()?;
                if supporting.next().is_none() {
                    Some((alphabet, first.clone()))
                } else {
                    None
                }
            })
            .collect();
        pairs.sort_by_key(|(alphabet, _)| alphabet.name());
        pairs
    }
}

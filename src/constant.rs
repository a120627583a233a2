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

pub mod charclass {
    use once_cell::sync::Lazy;
    use regex::Regex;

    pub static NO_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new("^[^\\p{L}]+$").unwrap());
    pub static MULTIPLE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new("\\s+").unwrap());
    pub static NUMBERS: Lazy<Regex> = Lazy::new(|| Regex::new("\\p{N}").unwrap());
    pub static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new("\\p{P}").unwrap());
}

/// The bundled disambiguation table of spec §6: character classes to
/// language sets, consulted in this exact insertion order by
/// `RuleEngine::filter_candidates`.
pub mod charmapping {
    use crate::language::Language::*;
    use once_cell::sync::Lazy;

    pub static CHARS_TO_LANGUAGES_MAPPING: Lazy<Vec<(&'static str, Vec<crate::language::Language>)>> =
        Lazy::new(|| {
            vec![
                ("Îî", vec![French]),
                ("Ññ", vec![Spanish]),
                ("Ûû", vec![French]),
                ("Ëë", vec![French]),
                ("ÈèÙù", vec![French]),
                ("Êê", vec![French]),
                ("Ôô", vec![French]),
                ("Àà", vec![French]),
                ("Üü", vec![Spanish]),
                ("Çç", vec![French]),
                ("Óó", vec![Spanish]),
                ("ÁáÍíÚú", vec![Spanish]),
                ("Éé", vec![French, Spanish]),
            ]
        });
}

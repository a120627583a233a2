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

use crate::alphabet::Alphabet;
use crate::constant::charmapping::CHARS_TO_LANGUAGES_MAPPING;
use crate::language::Language;
use std::collections::{HashMap, HashSet};
use strum::IntoEnumIterator;

/// Script/alphabet- and character-based filtering and short-circuit
/// decisions (spec §4.3). Holds no state of its own beyond the configured
/// language set and the derived single-language-alphabet map, both owned
/// by the `Detector`.
pub(crate) struct RuleEngine<'a> {
    languages: &'a HashSet<Language>,
    one_language_alphabets: &'a [(Alphabet, Language)],
}

impl<'a> RuleEngine<'a> {
    pub(crate) fn new(
        languages: &'a HashSet<Language>,
        one_language_alphabets: &'a [(Alphabet, Language)],
    ) -> Self {
        RuleEngine {
            languages,
            one_language_alphabets,
        }
    }

    /// A rule-only classifier that may short-circuit statistical scoring.
    /// Returns `None` for the `UNKNOWN` sentinel.
    pub(crate) fn detect_by_rules(&self, words: &[&str]) -> Option<Language> {
        let mut total_counts: HashMap<Option<Language>, u32> = HashMap::new();

        for word in words {
            let mut word_counts: HashMap<Language, u32> = HashMap::new();

            for character in word.chars() {
                let mut matched_unique_alphabet = false;

                for (alphabet, language) in self.one_language_alphabets {
                    if alphabet.matches_char(character) {
                        *word_counts.entry(language.clone()).or_insert(0) += 1;
                        matched_unique_alphabet = true;
                    }
                }

                if !matched_unique_alphabet
                    && (Alphabet::Latin.matches_char(character)
                        || Alphabet::Devanagari.matches_char(character))
                {
                    for language in self.languages {
                        if language
                            .unique_characters()
                            .is_some_and(|chars| chars.contains(character))
                        {
                            *word_counts.entry(language.clone()).or_insert(0) += 1;
                        }
                    }
                }
            }

            let verdict: Option<Language> = if word_counts.is_empty() {
                None
            } else if word_counts.len() == 1 {
                let (language, _) = word_counts.into_iter().next().unwrap();
                if self.languages.contains(&language) {
                    Some(language)
                } else {
                    None
                }
            } else {
                let max_count = *word_counts.values().max().unwrap();
                let winners: Vec<&Language> = word_counts
                    .iter()
                    .filter(|(_, count)| **count == max_count)
                    .map(|(language, _)| language)
                    .collect();
                if winners.len() > 1 {
                    None
                } else {
                    let winner = winners[0].clone();
                    if self.languages.contains(&winner) {
                        Some(winner)
                    } else {
                        None
                    }
                }
            };

            *total_counts.entry(verdict).or_insert(0) += 1;
        }

        let half_word_count = words.len() as f64 * 0.5;
        let unknown_count = *total_counts.get(&None).unwrap_or(&0) as f64;
        if unknown_count < half_word_count {
            total_counts.remove(&None);
        }

        let verdict = if total_counts.is_empty() {
            None
        } else if total_counts.len() == 1 {
            total_counts.into_iter().next().unwrap().0
        } else {
            let max_count = *total_counts.values().max().unwrap();
            let winners: Vec<&Option<Language>> = total_counts
                .iter()
                .filter(|(_, count)| **count == max_count)
                .map(|(language, _)| language)
                .collect();
            if winners.len() > 1 {
                None
            } else {
                winners[0].clone()
            }
        };

        log::trace!("rule short-circuit verdict for {} word(s): {verdict:?}", words.len());
        verdict
    }

    /// Narrows the candidate set before statistical scoring (spec §4.3b).
    /// Returned in the catalog's natural ordering for determinism.
    pub(crate) fn filter_candidates(&self, words: &[&str]) -> Vec<Language> {
        let mut detected_alphabets: HashMap<Alphabet, u32> = HashMap::new();

        for word in words {
            for alphabet in Alphabet::iter() {
                if alphabet.matches(word) {
                    *detected_alphabets.entry(alphabet).or_insert(0) += 1;
                    break;
                }
            }
        }

        if detected_alphabets.is_empty() {
            log::trace!("no alphabet detected; candidate set left unnarrowed");
            return Self::sorted(self.languages.iter().cloned().collect());
        }

        let max_count = *detected_alphabets.values().max().unwrap();
        let most_frequent_alphabet = Alphabet::iter()
            .find(|alphabet| detected_alphabets.get(alphabet).copied().unwrap_or(0) == max_count)
            .unwrap();

        let filtered: HashSet<Language> = self
            .languages
            .iter()
            .filter(|language| language.alphabets().contains(&most_frequent_alphabet))
            .cloned()
            .collect();

        let mut language_counts: HashMap<Language, u32> = HashMap::new();
        for word in words {
            for (chars, languages) in CHARS_TO_LANGUAGES_MAPPING.iter() {
                if chars.chars().any(|ch| word.contains(ch)) {
                    for language in languages {
                        *language_counts.entry(language.clone()).or_insert(0) += 1;
                    }
                    break;
                }
            }
        }

        let half_word_count = words.len() / 2;
        let strong_subset: HashSet<Language> = language_counts
            .into_iter()
            .filter(|(_, count)| *count as usize >= half_word_count)
            .map(|(language, _)| language)
            .collect();

        let result = if strong_subset.is_empty() {
            filtered
        } else {
            filtered.into_iter().filter(|it| strong_subset.contains(it)).collect()
        };

        let result = Self::sorted(result);
        log::trace!(
            "candidate filter narrowed to alphabet {most_frequent_alphabet:?}, {} language(s): {result:?}",
            result.len()
        );
        result
    }

    fn sorted(languages: HashSet<Language>) -> Vec<Language> {
        let mut languages: Vec<Language> = languages.into_iter().collect();
        languages.sort();
        languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    fn one_language_alphabets(languages: &HashSet<Language>) -> Vec<(Alphabet, Language)> {
        Alphabet::all_supporting_single_language(languages)
    }

    #[test]
    fn test_detect_by_rules_short_circuits_on_korean_hangul() {
        let languages = Language::all();
        let alphabets = one_language_alphabets(&languages);
        let engine = RuleEngine::new(&languages, &alphabets);
        let words = vec!["한국어입니다"];
        assert_eq!(engine.detect_by_rules(&words), Some(Language::Korean));
    }

    #[test]
    fn test_detect_by_rules_returns_none_for_ambiguous_latin() {
        let languages = Language::all();
        let alphabets = one_language_alphabets(&languages);
        let engine = RuleEngine::new(&languages, &alphabets);
        let words = vec!["languages", "are", "awesome"];
        assert_eq!(engine.detect_by_rules(&words), None);
    }

    #[test]
    fn test_detect_by_rules_uses_unique_characters() {
        let languages = Language::all();
        let alphabets = one_language_alphabets(&languages);
        let engine = RuleEngine::new(&languages, &alphabets);
        // "ß" is German's unique character.
        let words = vec!["straße"];
        assert_eq!(engine.detect_by_rules(&words), Some(Language::German));
    }

    #[test]
    fn test_filter_candidates_returns_all_when_no_alphabet_detected() {
        let languages: HashSet<Language> = hashset!(Language::English, Language::German);
        let alphabets = one_language_alphabets(&languages);
        let engine = RuleEngine::new(&languages, &alphabets);
        let words = vec!["123"];
        let mut candidates = engine.filter_candidates(&words);
        candidates.sort();
        let mut expected: Vec<Language> = languages.into_iter().collect();
        expected.sort();
        assert_eq!(candidates, expected);
    }

    #[test]
    fn test_filter_candidates_narrows_to_cyrillic_languages() {
        let languages = Language::all();
        let alphabets = one_language_alphabets(&languages);
        let engine = RuleEngine::new(&languages, &alphabets);
        let words = vec!["привет", "мир"];
        let candidates = engine.filter_candidates(&words);
        assert!(candidates.contains(&Language::Russian));
        assert!(!candidates.contains(&Language::English));
    }

    #[test]
    fn test_filter_candidates_disambiguation_table_narrows_spanish() {
        let languages: HashSet<Language> = hashset!(Language::French, Language::Spanish);
        let alphabets = one_language_alphabets(&languages);
        let engine = RuleEngine::new(&languages, &alphabets);
        let words = vec!["señor"];
        let candidates = engine.filter_candidates(&words);
        assert_eq!(candidates, vec![Language::Spanish]);
    }
}

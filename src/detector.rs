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
use crate::constant::charclass::{MULTIPLE_WHITESPACE, NO_LETTER, NUMBERS, PUNCTUATION};
use crate::language::Language;
use crate::model::ModelStore;
use crate::ngram::extract_ngrams;
use crate::rules::RuleEngine;
use crate::scorer::Scorer;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

/// A configured, immutable language detector (spec §4.5).
///
/// Construct one through [`crate::DetectorBuilder`]. Every method here takes
/// `&self`: a `Detector` is safe to share across threads and call
/// concurrently once built (spec §5) — the only interior mutability is the
/// lazily-materialized [`ModelStore`], whose per-`(language, order)` cells
/// guarantee first-use-wins without blocking later readers.
pub struct Detector {
    languages: HashSet<Language>,
    one_language_alphabets: Vec<(Alphabet, Language)>,
    minimum_relative_distance: f64,
    models: ModelStore,
}

impl Detector {
    pub(crate) fn new(languages: HashSet<Language>, minimum_relative_distance: f64) -> Self {
        let one_language_alphabets = Alphabet::all_supporting_single_language(&languages);
        let models = ModelStore::new(languages.iter().cloned());
        Detector {
            languages,
            one_language_alphabets,
            minimum_relative_distance,
            models,
        }
    }

    /// The single most likely language, or `None` for the `UNKNOWN` sentinel
    /// (spec §4.5's threshold law): no candidate at all, a tie for first
    /// place, or too thin a lead over the runner-up given
    /// `minimum_relative_distance`.
    pub fn detect(&self, text: &str) -> Option<Language> {
        let values = self.confidence_values(text);
        let (top_language, top_confidence) = values.first()?;

        if values.len() == 1 {
            return Some(top_language.clone());
        }

        let (_, second_confidence) = &values[1];
        if top_confidence == second_confidence {
            return None;
        }
        if top_confidence - second_confidence < self.minimum_relative_distance {
            return None;
        }

        Some(top_language.clone())
    }

    /// Every candidate language with nonzero evidence, paired with a
    /// confidence in `(0.0, 1.0]`, sorted by descending confidence and then
    /// by the language catalog's natural ordering. Empty means `UNKNOWN`.
    pub fn confidence_values(&self, text: &str) -> Vec<(Language, f64)> {
        let cleaned = self.clean_up_input_text(text);
        if cleaned.is_empty() || NO_LETTER.is_match(&cleaned) {
            return Vec::new();
        }

        let words = self.split_text_into_words(&cleaned);
        let rule_engine = RuleEngine::new(&self.languages, &self.one_language_alphabets);

        if let Some(language) = rule_engine.detect_by_rules(&words) {
            return vec![(language, 1.0)];
        }

        let mut candidates = rule_engine.filter_candidates(&words);
        if candidates.is_empty() {
            return Vec::new();
        }

        let scorer = Scorer::new(&self.models);
        let mut total_scores: HashMap<Language, f64> = HashMap::new();
        let mut unigram_hits: HashMap<Language, usize> = HashMap::new();
        let cleaned_len = cleaned.chars().count();

        for order in 1..=5usize {
            if cleaned_len < order {
                continue;
            }
            let ngrams = extract_ngrams(&cleaned, order);
            let probabilities = scorer
                .language_probabilities(&candidates, &ngrams)
                .expect("ngrams are non-empty whenever cleaned text reaches this order");

            if order == 1 {
                for language in &candidates {
                    let hits = ngrams
                        .iter()
                        .filter(|ngram| self.models.relative_frequency(language, ngram) > 0.0)
                        .count();
                    unigram_hits.insert(language.clone(), hits);
                }
            }

            for (language, score) in &probabilities {
                *total_scores.entry(language.clone()).or_insert(0.0) += score;
            }

            if !probabilities.is_empty() {
                let surviving: HashSet<Language> = probabilities.into_keys().collect();
                candidates.retain(|language| surviving.contains(language));
            }

            log::trace!(
                "order {order}: {} candidate(s) remain: {candidates:?}",
                candidates.len()
            );
        }

        // Step 6 (spec §4.5): the unigram-hit-count divisor is not
        // statistically principled (spec §9, Design Notes) but is kept
        // verbatim. A language that survives narrowing with zero recorded
        // unigram hits only does so via evidence from longer orders; skip
        // the division rather than divide by zero in that case.
        let mut confidences: Vec<(Language, f64)> = Vec::new();
        for language in &candidates {
            let mut score = *total_scores.get(language).unwrap_or(&0.0);
            if let Some(&hits) = unigram_hits.get(language) {
                if hits > 0 {
                    score /= hits as f64;
                }
            }
            if score != 0.0 {
                confidences.push((language.clone(), score));
            }
        }

        if confidences.is_empty() {
            return Vec::new();
        }

        let max_score = confidences
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut confidences: Vec<(Language, f64)> = confidences
            .into_iter()
            .map(|(language, score)| (language, max_score / score))
            .collect();

        confidences.sort_by(|(left_language, left_confidence), (right_language, right_confidence)| {
            right_confidence
                .partial_cmp(left_confidence)
                .unwrap()
                .then_with(|| left_language.cmp(right_language))
        });

        confidences
    }

    fn clean_up_input_text(&self, text: &str) -> String {
        let trimmed = text.trim().to_lowercase();
        let without_punctuation = PUNCTUATION.replace_all(&trimmed, "");
        let without_numbers = NUMBERS.replace_all(&without_punctuation, "");
        MULTIPLE_WHITESPACE.replace_all(&without_numbers, " ").to_string()
    }

    fn split_text_into_words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        if text.contains(' ') {
            text.split(' ').filter(|word| !word.is_empty()).collect()
        } else {
            vec![text]
        }
    }

    fn sorted_languages(&self) -> Vec<&Language> {
        let mut languages: Vec<&Language> = self.languages.iter().collect();
        languages.sort();
        languages
    }
}

impl PartialEq for Detector {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_languages() == other.sorted_languages()
            && self.minimum_relative_distance.to_bits() == other.minimum_relative_distance.to_bits()
    }
}

impl Eq for Detector {}

impl Hash for Detector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_languages().hash(state);
        self.minimum_relative_distance.to_bits().hash(state);
    }
}

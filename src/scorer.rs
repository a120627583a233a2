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

use crate::error::DetectionError;
use crate::language::Language;
use crate::model::ModelStore;
use crate::ngram::Ngram;
use std::collections::{HashMap, HashSet};

/// Turns a set of same-order ngrams into per-language log-probability sums
/// (spec §4.4). Stateless beyond the `ModelStore` it scores against.
pub(crate) struct Scorer<'a> {
    models: &'a ModelStore,
}

impl<'a> Scorer<'a> {
    pub(crate) fn new(models: &'a ModelStore) -> Self {
        Scorer { models }
    }

    /// The summed natural-log relative frequency of `ngrams` under
    /// `language`, each ngram resolved through its backoff chain: the
    /// longest prefix with a nonzero stored frequency wins, falling all the
    /// way back to the unigram. An ngram with no nonzero frequency anywhere
    /// in its chain (typically a language with no bundled data at all)
    /// contributes nothing rather than `ln(0)`.
    ///
    /// Returns [`DetectionError::EmptyNgram`] if `ngrams` is empty — callers
    /// are expected to have already confirmed the input text yields ngrams
    /// at this order.
    pub(crate) fn score_language(
        &self,
        language: &Language,
        ngrams: &HashSet<Ngram>,
    ) -> Result<f64, DetectionError> {
        if ngrams.is_empty() {
            return Err(DetectionError::EmptyNgram);
        }

        let mut sum = 0.0;
        for ngram in ngrams {
            for candidate in ngram.backoff_chain() {
                let frequency = self.models.relative_frequency(language, &candidate);
                if frequency > 0.0 {
                    sum += frequency.ln();
                    break;
                }
            }
        }
        Ok(sum)
    }

    /// Scores every candidate in `languages` against `ngrams`, keeping only
    /// languages with a strictly negative score — a score of exactly zero
    /// means none of the ngrams carried any information for that language
    /// and it is not a real candidate (spec §4.4).
    pub(crate) fn language_probabilities(
        &self,
        languages: &[Language],
        ngrams: &HashSet<Ngram>,
    ) -> Result<HashMap<Language, f64>, DetectionError> {
        if ngrams.is_empty() {
            return Err(DetectionError::EmptyNgram);
        }

        let mut scores = HashMap::new();
        for language in languages {
            let score = self.score_language(language, ngrams)?;
            if score < 0.0 {
                scores.insert(language.clone(), score);
            }
        }
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_language_rejects_empty_ngram_set() {
        let store = ModelStore::new([Language::English].into_iter());
        let scorer = Scorer::new(&store);
        let result = scorer.score_language(&Language::English, &HashSet::new());
        assert!(matches!(result, Err(DetectionError::EmptyNgram)));
    }

    #[test]
    fn test_score_language_is_negative_for_known_letters() {
        let store = ModelStore::new([Language::English].into_iter());
        let scorer = Scorer::new(&store);
        let mut ngrams = HashSet::new();
        ngrams.insert(Ngram::new("e"));
        let score = scorer.score_language(&Language::English, &ngrams).unwrap();
        assert!(score < 0.0);
    }

    #[test]
    fn test_score_language_is_zero_for_language_without_data() {
        let store = ModelStore::new([Language::Zulu].into_iter());
        let scorer = Scorer::new(&store);
        let mut ngrams = HashSet::new();
        ngrams.insert(Ngram::new("e"));
        let score = scorer.score_language(&Language::Zulu, &ngrams).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_language_probabilities_excludes_non_negative_scores() {
        let store = ModelStore::new([Language::English, Language::Zulu].into_iter());
        let scorer = Scorer::new(&store);
        let mut ngrams = HashSet::new();
        ngrams.insert(Ngram::new("e"));
        let probabilities = scorer
            .language_probabilities(&[Language::English, Language::Zulu], &ngrams)
            .unwrap();
        assert!(probabilities.contains_key(&Language::English));
        assert!(!probabilities.contains_key(&Language::Zulu));
    }
}

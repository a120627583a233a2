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
use crate::ngram::Ngram;
use ahash::AHashMap;
use include_dir::{include_dir, Dir};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::HashMap;

static BUNDLED_MODELS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/language-models");

/// An immutable per-(language, order) frequency table: ngram string to a
/// relative frequency in `(0, 1]`. A missing key means zero (spec §3/§4.2).
pub(crate) type TrainingModel = AHashMap<String, f64>;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFrequency {
    Decimal(f64),
    Fraction(String),
}

impl RawFrequency {
    fn into_f64(self) -> Option<f64> {
        match self {
            RawFrequency::Decimal(value) => Some(value),
            RawFrequency::Fraction(text) => {
                let (numerator, denominator) = text.split_once('/')?;
                let numerator: f64 = numerator.parse().ok()?;
                let denominator: f64 = denominator.parse().ok()?;
                Some(numerator / denominator)
            }
        }
    }
}

fn decode_training_model(
    language: Language,
    order: usize,
    json: &str,
) -> Result<TrainingModel, DetectionError> {
    let raw: HashMap<String, RawFrequency> =
        serde_json::from_str(json).map_err(|source| DetectionError::ModelLoad {
            language: language.clone(),
            order,
            source,
        })?;
    Ok(raw
        .into_iter()
        .filter_map(|(ngram, frequency)| frequency.into_f64().map(|f| (ngram, f)))
        .collect())
}

/// Lazily materializes and caches per-(language, order) `TrainingModel`s and
/// answers relative-frequency lookups for the scorer (spec §4.2).
///
/// Each `(language, order)` slot is backed by its own [`OnceCell`], so first
/// use by any thread triggers exactly one materialization (blocking I/O plus
/// JSON decode); every later access anywhere, on any thread, is a lock-free
/// read of the published table (spec §5).
pub(crate) struct ModelStore {
    // index 0 = unigrams ... index 4 = fivegrams
    cells: [HashMap<Language, OnceCell<TrainingModel>>; 5],
}

impl ModelStore {
    pub(crate) fn new(languages: impl Iterator<Item = Language> + Clone) -> Self {
        let cells = std::array::from_fn(|_| {
            languages
                .clone()
                .map(|language| (language, OnceCell::new()))
                .collect::<HashMap<_, _>>()
        });
        ModelStore { cells }
    }

    /// Returns the stored frequency for `ngram` under `language` at the
    /// ngram's own length, materializing that order's table on first use.
    /// A language outside the configured set, or an absent resource file,
    /// contributes 0.0 rather than panicking — only genuinely corrupt
    /// bundled JSON is treated as fatal (see DESIGN.md).
    pub(crate) fn relative_frequency(&self, language: &Language, ngram: &Ngram) -> f64 {
        let order = ngram.len();
        let Some(slot) = self.cells.get(order - 1) else {
            return 0.0;
        };
        let Some(cell) = slot.get(language) else {
            return 0.0;
        };
        let table = cell.get_or_init(|| Self::materialize(language.clone(), order));
        table.get(ngram.as_str()).copied().unwrap_or(0.0)
    }

    fn materialize(language: Language, order: usize) -> TrainingModel {
        let Ok(order_name) = Ngram::name_for_order(order) else {
            return TrainingModel::default();
        };
        let file_path = format!("{}/{}s.json", language.iso_code_639_1().as_str(), order_name);
        match BUNDLED_MODELS.get_file(&file_path) {
            None => {
                log::warn!(
                    "no bundled {order_name} model for {language:?}; it will never outscore a candidate with data"
                );
                TrainingModel::default()
            }
            Some(file) => {
                let contents = file
                    .contents_utf8()
                    .expect("bundled model resources are UTF-8 JSON");
                log::debug!("materializing {order_name} model for {language:?}");
                match decode_training_model(language.clone(), order, contents) {
                    Ok(model) => model,
                    Err(err) => panic!("{err}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_training_model_accepts_decimals_and_fractions() {
        let json = r#"{"a":"1/5","b":0.25}"#;
        let model = decode_training_model(Language::English, 1, json).unwrap();
        assert!((model["a"] - 0.2).abs() < 1e-9);
        assert!((model["b"] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_materialize_missing_language_returns_empty_model() {
        let model = ModelStore::materialize(Language::Zulu, 1);
        assert!(model.is_empty());
    }

    #[test]
    fn test_relative_frequency_missing_key_is_zero() {
        let store = ModelStore::new([Language::English].into_iter());
        let frequency = store.relative_frequency(&Language::English, &Ngram::new("zzzzz"));
        assert_eq!(frequency, 0.0);
    }

    #[test]
    fn test_relative_frequency_unconfigured_language_is_zero() {
        let store = ModelStore::new([Language::English].into_iter());
        let frequency = store.relative_frequency(&Language::German, &Ngram::new("a"));
        assert_eq!(frequency, 0.0);
    }

    #[test]
    fn test_english_unigram_model_has_common_letters() {
        let store = ModelStore::new([Language::English].into_iter());
        let frequency = store.relative_frequency(&Language::English, &Ngram::new("e"));
        assert!(frequency > 0.0);
    }
}

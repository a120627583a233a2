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

use crate::detector::Detector;
use crate::isocode::IsoCode639_1;
use crate::language::Language;
use std::collections::HashSet;

const MISSING_LANGUAGE_MESSAGE: &str = "a detector needs at least 2 languages to choose from";

/// Builds a [`Detector`] over a chosen subset of the language catalog (spec
/// §3/§6). Every `from_*` constructor panics if it would leave fewer than
/// two languages configured — a detector with one or zero languages cannot
/// meaningfully disambiguate anything.
pub struct DetectorBuilder {
    languages: HashSet<Language>,
    minimum_relative_distance: f64,
}

impl DetectorBuilder {
    pub fn from_all_languages() -> Self {
        Self::from(Language::all())
    }

    pub fn from_all_spoken_languages() -> Self {
        Self::from(Language::all_spoken_ones())
    }

    pub fn from_all_languages_with_arabic_script() -> Self {
        Self::from(Language::all_with_arabic_script())
    }

    pub fn from_all_languages_with_cyrillic_script() -> Self {
        Self::from(Language::all_with_cyrillic_script())
    }

    pub fn from_all_languages_with_devanagari_script() -> Self {
        Self::from(Language::all_with_devanagari_script())
    }

    pub fn from_all_languages_with_latin_script() -> Self {
        Self::from(Language::all_with_latin_script())
    }

    pub fn from_all_languages_without(languages: &[Language]) -> Self {
        let mut languages_to_load = Language::all();
        languages_to_load.retain(|it| !languages.contains(it));
        if languages_to_load.len() < 2 {
            panic!("{MISSING_LANGUAGE_MESSAGE}");
        }
        Self::from(languages_to_load)
    }

    pub fn from_languages(languages: &[Language]) -> Self {
        if languages.len() < 2 {
            panic!("{MISSING_LANGUAGE_MESSAGE}");
        }
        Self::from(languages.iter().cloned().collect())
    }

    pub fn from_iso_codes_639_1(iso_codes: &[IsoCode639_1]) -> Self {
        if iso_codes.len() < 2 {
            panic!("{MISSING_LANGUAGE_MESSAGE}");
        }
        let languages = iso_codes.iter().map(Language::from_iso_code_639_1).collect();
        Self::from(languages)
    }

    /// The minimum gap, in confidence, that the top-ranked language must
    /// hold over the runner-up for [`Detector::detect`] to return it instead
    /// of `UNKNOWN`. Must lie in `0.0..=0.99`.
    pub fn with_minimum_relative_distance(&mut self, distance: f64) -> &mut Self {
        if !(0.0..=0.99).contains(&distance) {
            panic!("minimum relative distance must lie in between 0.0 and 0.99");
        }
        self.minimum_relative_distance = distance;
        self
    }

    pub fn build(&mut self) -> Detector {
        Detector::new(self.languages.clone(), self.minimum_relative_distance)
    }

    fn from(languages: HashSet<Language>) -> Self {
        Self {
            languages,
            minimum_relative_distance: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "at least 2 languages")]
    fn test_from_languages_panics_on_single_language() {
        DetectorBuilder::from_languages(&[Language::English]);
    }

    #[test]
    #[should_panic(expected = "between 0.0 and 0.99")]
    fn test_with_minimum_relative_distance_panics_out_of_range() {
        DetectorBuilder::from_all_languages().with_minimum_relative_distance(1.5);
    }

    #[test]
    fn test_from_iso_codes_639_1_resolves_languages() {
        let builder = DetectorBuilder::from_iso_codes_639_1(&[IsoCode639_1::EN, IsoCode639_1::DE]);
        assert_eq!(builder.languages.len(), 2);
        assert!(builder.languages.contains(&Language::English));
        assert!(builder.languages.contains(&Language::German));
    }

    #[test]
    fn test_from_all_languages_without_excludes_given_languages() {
        let builder = DetectorBuilder::from_all_languages_without(&[Language::English]);
        assert!(!builder.languages.contains(&Language::English));
    }
}

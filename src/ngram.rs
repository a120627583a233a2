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
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fmt::Display;

/// An immutable string of 1..=5 Unicode characters, produced by cleaning
/// and slicing input text (spec §3/§4.1). Length is counted in characters,
/// not bytes, so surrogate pairs and multi-byte scripts count as one.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct Ngram(String);

impl Ngram {
    pub(crate) fn new(value: &str) -> Self {
        let length = value.chars().count();
        assert!(
            (1..=5).contains(&length),
            "length of ngram '{value}' is not in range 1..=5"
        );
        Self(value.to_string())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub(crate) fn name_for_order(order: usize) -> Result<&'static str, DetectionError> {
        match order {
            1 => Ok("unigram"),
            2 => Ok("bigram"),
            3 => Ok("trigram"),
            4 => Ok("quadrigram"),
            5 => Ok("fivegram"),
            _ => Err(DetectionError::NgramLengthOutOfRange { length: order }),
        }
    }

    /// The sequence `(self, prefix_{k-1}, ..., prefix_1)`: the ngram itself
    /// followed by its trailing-truncated prefixes down to length 1
    /// (spec §3's "backoff chain").
    pub(crate) fn backoff_chain(&self) -> impl Iterator<Item = Ngram> + '_ {
        let chars: Vec<char> = self.0.chars().collect();
        (1..=chars.len()).rev().map(move |len| Ngram(chars[..len].iter().collect()))
    }
}

impl Display for Ngram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All distinct length-`order` ngrams present in `text` (spec §4.1's
/// `TestModel`/`NgramExtractor`). Character-based: if `text` has fewer
/// than `order` characters, the set is empty.
pub(crate) fn extract_ngrams(text: &str, order: usize) -> HashSet<Ngram> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < order {
        return HashSet::new();
    }
    (0..=chars.len() - order)
        .map(|start| Ngram(chars[start..start + order].iter().collect()))
        .collect()
}

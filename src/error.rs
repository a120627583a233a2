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
use thiserror::Error;

/// The core's fatal, programmer-visible error class (spec §7). These never
/// arise from untrusted input — only from an empty-ngram query, an
/// out-of-range ngram order, or bundled model JSON that fails to decode.
/// `Detector::detect` and `Detector::confidence_values` never surface this
/// type; they encode input-insufficient and ambiguous-result conditions in
/// their return value instead. A missing (as opposed to corrupt) model
/// resource is deliberately not a variant here — see `ModelStore::materialize`
/// and DESIGN.md for why that case is non-fatal in this bundle.
#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("cannot query the empty ngram")]
    EmptyNgram,

    #[error("ngram length {length} is not in range 1..=5")]
    NgramLengthOutOfRange { length: usize },

    #[error("failed to load {order}-gram model for {language:?}: {source}")]
    ModelLoad {
        language: Language,
        order: usize,
        #[source]
        source: serde_json::Error,
    },
}

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

//! A statistical natural language identification engine.
//!
//! A [`Detector`], built through [`DetectorBuilder`], classifies a piece of
//! text against a configured subset of a static 75-language catalog. Cheap
//! script/alphabet rules short-circuit the easy cases (a string of Hangul
//! is Korean, full stop); everything else falls through to a classic
//! character-ngram backoff model scored against bundled per-language
//! frequency tables.

#![allow(dead_code)]

#[macro_use]
extern crate maplit;

mod alphabet;
mod builder;
mod constant;
mod detector;
mod error;
mod isocode;
mod language;
mod model;
mod ngram;
mod rules;
mod scorer;

pub use builder::DetectorBuilder;
pub use detector::Detector;
pub use error::DetectionError;
pub use isocode::IsoCode639_1;
pub use language::Language;

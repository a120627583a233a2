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
use crate::isocode::IsoCode639_1;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// A language drawn from the static, closed catalog this crate ships with.
///
/// There is deliberately no `Language::Unknown` variant: the sentinel the
/// rest of the API calls `UNKNOWN` is represented as `Option<Language>`'s
/// `None`, exactly where the detection pipeline would otherwise return a
/// language it isn't confident about. A `Language` by itself always refers
/// to a concrete, model-backed member of the catalog.
#[derive(Clone, Debug, Serialize, Deserialize, EnumIter, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[serde(rename_all(serialize = "UPPERCASE", deserialize = "UPPERCASE"))]
pub enum Language {
    Afrikaans,
    Albanian,
    Arabic,
    Armenian,
    Azerbaijani,
    Basque,
    Belarusian,
    Bengali,
    Bokmal,
    Bosnian,
    Bulgarian,
    Catalan,
    Chinese,
    Croatian,
    Czech,
    Danish,
    Dutch,
    English,
    Esperanto,
    Estonian,
    Finnish,
    French,
    Ganda,
    Georgian,
    German,
    Greek,
    Gujarati,
    Hebrew,
    Hindi,
    Hungarian,
    Icelandic,
    Indonesian,
    Irish,
    Italian,
    Japanese,
    Kazakh,
    Korean,
    Latin,
    Latvian,
    Lithuanian,
    Macedonian,
    Malay,
    Maori,
    Marathi,
    Mongolian,
    Nynorsk,
    Persian,
    Polish,
    Portuguese,
    Punjabi,
    Romanian,
    Russian,
    Serbian,
    Shona,
    Slovak,
    Slovene,
    Somali,
    Sotho,
    Spanish,
    Swahili,
    Swedish,
    Tagalog,
    Tamil,
    Telugu,
    Thai,
    Tsonga,
    Tswana,
    Turkish,
    Ukrainian,
    Urdu,
    Vietnamese,
    Welsh,
    Xhosa,
    Yoruba,
    Zulu,
}

impl Language {
    pub fn all() -> HashSet<Language> {
        Language::iter().collect()
    }

    pub fn all_spoken_ones() -> HashSet<Language> {
        Language::iter().filter(|it| it != &Language::Latin).collect()
    }

    pub fn all_with_arabic_script() -> HashSet<Language> {
        Language::iter()
            .filter(|it| it.alphabets().contains(&Alphabet::Arabic))
            .collect()
    }

    pub fn all_with_cyrillic_script() -> HashSet<Language> {
        Language::iter()
            .filter(|it| it.alphabets().contains(&Alphabet::Cyrillic))
            .collect()
    }

    pub fn all_with_devanagari_script() -> HashSet<Language> {
        Language::iter()
            .filter(|it| it.alphabets().contains(&Alphabet::Devanagari))
            .collect()
    }

    pub fn all_with_latin_script() -> HashSet<Language> {
        Language::iter()
            .filter(|it| it.alphabets().contains(&Alphabet::Latin))
            .collect()
    }

    pub fn from_iso_code_639_1(iso_code: &IsoCode639_1) -> Language {
        Language::iter()
            .find(|it| &it.iso_code_639_1() == iso_code)
            .expect("every IsoCode639_1 variant must map back to a catalog language")
    }

    pub fn iso_code_639_1(&self) -> IsoCode639_1 {
        use IsoCode639_1 as Iso;
        match self {
            Language::Afrikaans => Iso::AF,
            Language::Albanian => Iso::SQ,
            Language::Arabic => Iso::AR,
            Language::Armenian => Iso::HY,
            Language::Azerbaijani => Iso::AZ,
            Language::Basque => Iso::EU,
            Language::Belarusian => Iso::BE,
            Language::Bengali => Iso::BN,
            Language::Bokmal => Iso::NB,
            Language::Bosnian => Iso::BS,
            Language::Bulgarian => Iso::BG,
            Language::Catalan => Iso::CA,
            Language::Chinese => Iso::ZH,
            Language::Croatian => Iso::HR,
            Language::Czech => Iso::CS,
            Language::Danish => Iso::DA,
            Language::Dutch => Iso::NL,
            Language::English => Iso::EN,
            Language::Esperanto => Iso::EO,
            Language::Estonian => Iso::ET,
            Language::Finnish => Iso::FI,
            Language::French => Iso::FR,
            Language::Ganda => Iso::LG,
            Language::Georgian => Iso::KA,
            Language::German => Iso::DE,
            Language::Greek => Iso::EL,
            Language::Gujarati => Iso::GU,
            Language::Hebrew => Iso::HE,
            Language::Hindi => Iso::HI,
            Language::Hungarian => Iso::HU,
            Language::Icelandic => Iso::IS,
            Language::Indonesian => Iso::ID,
            Language::Irish => Iso::GA,
            Language::Italian => Iso::IT,
            Language::Japanese => Iso::JA,
            Language::Kazakh => Iso::KK,
            Language::Korean => Iso::KO,
            Language::Latin => Iso::LA,
            Language::Latvian => Iso::LV,
            Language::Lithuanian => Iso::LT,
            Language::Macedonian => Iso::MK,
            Language::Malay => Iso::MS,
            Language::Maori => Iso::MI,
            Language::Marathi => Iso::MR,
            Language::Mongolian => Iso::MN,
            Language::Nynorsk => Iso::NN,
            Language::Persian => Iso::FA,
            Language::Polish => Iso::PL,
            Language::Portuguese => Iso::PT,
            Language::Punjabi => Iso::PA,
            Language::Romanian => Iso::RO,
            Language::Russian => Iso::RU,
            Language::Serbian => Iso::SR,
            Language::Shona => Iso::SN,
            Language::Slovak => Iso::SK,
            Language::Slovene => Iso::SL,
            Language::Somali => Iso::SO,
            Language::Sotho => Iso::ST,
            Language::Spanish => Iso::ES,
            Language::Swahili => Iso::SW,
            Language::Swedish => Iso::SV,
            Language::Tagalog => Iso::TL,
            Language::Tamil => Iso::TA,
            Language::Telugu => Iso::TE,
            Language::Thai => Iso::TH,
            Language::Tsonga => Iso::TS,
            Language::Tswana => Iso::TN,
            Language::Turkish => Iso::TR,
            Language::Ukrainian => Iso::UK,
            Language::Urdu => Iso::UR,
            Language::Vietnamese => Iso::VI,
            Language::Welsh => Iso::CY,
            Language::Xhosa => Iso::XH,
            Language::Yoruba => Iso::YO,
            Language::Zulu => Iso::ZU,
        }
    }

    /// The scripts this language is written in. Most languages use exactly
    /// one; `Japanese` is the one multi-script exception in this catalog.
    pub(crate) fn alphabets(&self) -> HashSet<Alphabet> {
        match self {
            Language::Afrikaans
            | Language::Albanian
            | Language::Azerbaijani
            | Language::Basque
            | Language::Bokmal
            | Language::Bosnian
            | Language::Catalan
            | Language::Croatian
            | Language::Czech
            | Language::Danish
            | Language::Dutch
            | Language::English
            | Language::Esperanto
            | Language::Estonian
            | Language::Finnish
            | Language::French
            | Language::Ganda
            | Language::German
            | Language::Hungarian
            | Language::Icelandic
            | Language::Indonesian
            | Language::Irish
            | Language::Italian
            | Language::Latin
            | Language::Latvian
            | Language::Lithuanian
            | Language::Malay
            | Language::Maori
            | Language::Nynorsk
            | Language::Polish
            | Language::Portuguese
            | Language::Romanian
            | Language::Shona
            | Language::Slovak
            | Language::Slovene
            | Language::Somali
            | Language::Sotho
            | Language::Spanish
            | Language::Swahili
            | Language::Swedish
            | Language::Tagalog
            | Language::Tsonga
            | Language::Tswana
            | Language::Turkish
            | Language::Vietnamese
            | Language::Welsh
            | Language::Xhosa
            | Language::Yoruba
            | Language::Zulu => hashset!(Alphabet::Latin),

            Language::Belarusian
            | Language::Bulgarian
            | Language::Kazakh
            | Language::Macedonian
            | Language::Mongolian
            | Language::Russian
            | Language::Serbian
            | Language::Ukrainian => hashset!(Alphabet::Cyrillic),

            Language::Arabic | Language::Persian | Language::Urdu => hashset!(Alphabet::Arabic),

            Language::Hindi | Language::Marathi => hashset!(Alphabet::Devanagari),

            Language::Armenian => hashset!(Alphabet::Armenian),
            Language::Bengali => hashset!(Alphabet::Bengali),
            Language::Chinese => hashset!(Alphabet::Han),
            Language::Georgian => hashset!(Alphabet::Georgian),
            Language::Greek => hashset!(Alphabet::Greek),
            Language::Gujarati => hashset!(Alphabet::Gujarati),
            Language::Hebrew => hashset!(Alphabet::Hebrew),
            Language::Japanese => hashset!(Alphabet::Hiragana, Alphabet::Katakana, Alphabet::Han),
            Language::Korean => hashset!(Alphabet::Hangul),
            Language::Punjabi => hashset!(Alphabet::Gurmukhi),
            Language::Tamil => hashset!(Alphabet::Tamil),
            Language::Telugu => hashset!(Alphabet::Telugu),
            Language::Thai => hashset!(Alphabet::Thai),
        }
    }

    /// Characters that, on their own, are a strong signal for exactly this
    /// language (spec §3's "unique characters").
    pub(crate) fn unique_characters(&self) -> Option<&'static str> {
        match self {
            Language::Albanian => Some("Ëë"),
            Language::Azerbaijani => Some("Əə"),
            Language::Catalan => Some("Ïï"),
            Language::Czech => Some("ĚěŘřŮů"),
            Language::Esperanto => Some("ĈĉĜĝĤĥĴĵŜŝŬŭ"),
            Language::German => Some("ß"),
            Language::Hungarian => Some("ŐőŰű"),
            Language::Kazakh => Some("ӘәҒғҚқҢңҰұ"),
            Language::Latvian => Some("ĢģĶķĻļŅņ"),
            Language::Lithuanian => Some("ĖėĮįŲų"),
            Language::Macedonian => Some("ЃѓЅѕЌќЏџ"),
            Language::Marathi => Some("ळ"),
            Language::Mongolian => Some("ӨөҮү"),
            Language::Polish => Some("ŁłŃńŚśŹź"),
            Language::Romanian => Some("Țţ"),
            Language::Serbian => Some("ЂђЋћ"),
            Language::Slovak => Some("ĹĺĽľŔŕ"),
            Language::Spanish => Some("¿¡"),
            Language::Ukrainian => Some("ҐґЄєЇї"),
            Language::Vietnamese => Some("ẰằẦầẲẳẨẩẴẵẪẫẮắẤấẠạẶặẬậỀềẺẻỂểẼẽỄễẾếỆệỈỉĨĩỊịƠơỒồỜờỎỏỔổỞởỖỗỠỡỐốỚớỘộỢợƯưỪừỦủỬửŨũỮữỨứỤụỰựỲỳỶỷỸỹỴỵ"),
            Language::Yoruba => Some("ŌōṢṣ"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_serializer() {
        let serialized = serde_json::to_string(&Language::English).unwrap();
        assert_eq!(serialized, "\"ENGLISH\"");
    }

    #[test]
    fn test_language_deserializer() {
        let deserialized = serde_json::from_str::<Language>("\"ENGLISH\"").unwrap();
        assert_eq!(deserialized, Language::English);
    }

    #[test]
    fn test_all_languages_count() {
        assert_eq!(Language::all().len(), 75);
    }

    #[test]
    fn test_all_spoken_excludes_latin() {
        assert!(!Language::all_spoken_ones().contains(&Language::Latin));
    }

    #[test]
    fn assert_certain_languages_support_arabic_script() {
        assert_eq!(
            Language::all_with_arabic_script(),
            hashset!(Language::Arabic, Language::Persian, Language::Urdu)
        );
    }

    #[test]
    fn assert_certain_languages_support_cyrillic_script() {
        assert_eq!(
            Language::all_with_cyrillic_script(),
            hashset!(
                Language::Belarusian,
                Language::Bulgarian,
                Language::Kazakh,
                Language::Macedonian,
                Language::Mongolian,
                Language::Russian,
                Language::Serbian,
                Language::Ukrainian
            )
        );
    }

    #[test]
    fn assert_certain_languages_support_devanagari_script() {
        assert_eq!(
            Language::all_with_devanagari_script(),
            hashset!(Language::Hindi, Language::Marathi)
        );
    }

    #[test]
    fn test_iso_code_roundtrip() {
        for language in Language::iter() {
            let code = language.iso_code_639_1();
            assert_eq!(Language::from_iso_code_639_1(&code), language);
        }
    }
}

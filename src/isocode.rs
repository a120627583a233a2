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

use strum_macros::{EnumIter, EnumString};

/// ISO 639-1 code for each language in the static catalog.
///
/// This is the key used to look up a language's bundled model resources
/// (`language-models/<code>/<order>s.json`).
#[derive(Clone, Copy, Debug, EnumIter, EnumString, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[allow(clippy::upper_case_acronyms)]
#[strum(ascii_case_insensitive)]
pub enum IsoCode639_1 {
    AF, SQ, AR, HY, AZ, EU, BE, BN, NB, BS, BG, CA, ZH, HR, CS, DA, NL, EN, EO,
    ET, FI, FR, LG, KA, DE, EL, GU, HE, HI, HU, IS, ID, GA, IT, JA, KK, KO, LA,
    LV, LT, MK, MS, MI, MR, MN, NN, FA, PL, PT, PA, RO, RU, SR, SN, SK, SL, SO,
    ST, ES, SW, SV, TL, TA, TE, TH, TS, TN, TR, UK, UR, VI, CY, XH, YO, ZU,
}

impl IsoCode639_1 {
    /// The lowercase code used as a directory name in the model resource layout.
    pub fn as_str(&self) -> &'static str {
        use IsoCode639_1::*;
        match self {
            AF => "af", SQ => "sq", AR => "ar", HY => "hy", AZ => "az", EU => "eu",
            BE => "be", BN => "bn", NB => "nb", BS => "bs", BG => "bg", CA => "ca",
            ZH => "zh", HR => "hr", CS => "cs", DA => "da", NL => "nl", EN => "en",
            EO => "eo", ET => "et", FI => "fi", FR => "fr", LG => "lg", KA => "ka",
            DE => "de", EL => "el", GU => "gu", HE => "he", HI => "hi", HU => "hu",
            IS => "is", ID => "id", GA => "ga", IT => "it", JA => "ja", KK => "kk",
            KO => "ko", LA => "la", LV => "lv", LT => "lt", MK => "mk", MS => "ms",
            MI => "mi", MR => "mr", MN => "mn", NN => "nn", FA => "fa", PL => "pl",
            PT => "pt", PA => "pa", RO => "ro", RU => "ru", SR => "sr", SN => "sn",
            SK => "sk", SL => "sl", SO => "so", ST => "st", ES => "es", SW => "sw",
            SV => "sv", TL => "tl", TA => "ta", TE => "te", TH => "th", TS => "ts",
            TN => "tn", TR => "tr", UK => "uk", UR => "ur", VI => "vi", CY => "cy",
            XH => "xh", YO => "yo", ZU => "zu",
        }
    }
}

impl std::fmt::Display for IsoCode639_1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_is_lowercase() {
        assert_eq!(IsoCode639_1::EN.as_str(), "en");
        assert_eq!(IsoCode639_1::ZH.as_str(), "zh");
    }

    #[test]
    fn test_display_is_uppercase() {
        assert_eq!(IsoCode639_1::EN.to_string(), "EN");
    }
}

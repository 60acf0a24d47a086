use std::collections::BTreeMap;

use lexicard_types::Language;
use serde::{Deserialize, Serialize};

/// Inflectional suffixes per language, in matching order.
///
/// A profile only needs to list the languages it changes; every other
/// language keeps its built-in list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Language, Vec<String>>",
    into = "BTreeMap<Language, Vec<String>>"
)]
pub struct SuffixConfig {
    tables: BTreeMap<Language, Vec<String>>,
}

impl SuffixConfig {
    pub fn get(&self, language: Language) -> Option<&[String]> {
        self.tables.get(&language).map(Vec::as_slice)
    }

    pub fn set(&mut self, language: Language, suffixes: Vec<String>) {
        self.tables.insert(language, suffixes);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &[String])> {
        self.tables.iter().map(|(lang, list)| (*lang, list.as_slice()))
    }
}

impl Default for SuffixConfig {
    fn default() -> Self {
        let tables = Language::ALL
            .into_iter()
            .map(|lang| {
                let list = builtin_suffixes(lang).iter().map(|s| s.to_string()).collect();
                (lang, list)
            })
            .collect();

        Self { tables }
    }
}

impl From<BTreeMap<Language, Vec<String>>> for SuffixConfig {
    fn from(overrides: BTreeMap<Language, Vec<String>>) -> Self {
        let mut config = SuffixConfig::default();
        config.tables.extend(overrides);
        config
    }
}

impl From<SuffixConfig> for BTreeMap<Language, Vec<String>> {
    fn from(config: SuffixConfig) -> Self {
        config.tables
    }
}

pub fn builtin_suffixes(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => &["s", "ed", "er", "ing", "ly"],
        Language::Fr => &[
            "s", "e", "es", "eur", "euse", "aux", "il", "ille", "eux", "x", "t", "ent", "is", "it",
            "ons", "ont", "ment",
        ],
        Language::Es => &[
            "s", "o", "a", "os", "as", "ir", "er", "ar", "í", "ó", "é", "aron", "se", "ieron",
            "amos", "imos", "emos", "eis", "ais", "mente", "aba",
        ],
        Language::Pt => &[
            "s", "ir", "er", "ar", "a", "o", "al", "este", "amos", "emos", "imos", "ou", "ei", "i",
            "ão", "ões", "aste", "aram", "eram", "mente", "ava",
        ],
        Language::De => &["e", "st", "er", "s", "t", "d", "en", "ig", "lich", "ung", "keit"],
    }
}

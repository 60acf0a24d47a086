use std::collections::BTreeMap;

use lexicard_types::{DictionaryKey, Language};
use scraper::Html;

use crate::error::{CoreError, Result};
use crate::extract::{Extraction, ExtractionRules};
use crate::highlight::Quirk;
use crate::normalize::{Definition, NormalizationRules};
use crate::rulesets;

/// Catalogue data about an online dictionary
#[derive(Debug, Clone)]
pub struct DictionaryInfo {
    pub name: String,
    pub description: String,
    /// Lookup URL; the lowercased word is appended
    pub url: String,
    pub referer: String,
    /// Language the definitions are written in
    pub target: Language,
}

/// Extraction and normalization rules bound to one dictionary
#[derive(Debug)]
pub struct DictionaryRuleset {
    pub key: DictionaryKey,
    pub info: DictionaryInfo,
    pub extraction: ExtractionRules,
    pub normalization: NormalizationRules,
    pub quirk: Option<Quirk>,
}

impl DictionaryRuleset {
    pub fn extract(&self, html: &str) -> Extraction {
        let document = Html::parse_document(html);
        let extraction = self.extraction.apply(&document);
        if let Extraction::NotFound(miss) = &extraction {
            tracing::debug!("{}: nothing extracted ({miss:?})", self.key);
        }
        extraction
    }

    pub fn normalize(&self, extraction: &Extraction, word: Option<&str>) -> Definition {
        self.normalization.normalize(extraction, word)
    }

    /// Extract then normalize
    pub fn define(&self, html: &str, word: &str) -> Definition {
        self.normalize(&self.extract(html), Some(word))
    }
}

/// Every configured dictionary, keyed by (source language, id)
#[derive(Debug, Default)]
pub struct RulesetRegistry {
    rulesets: BTreeMap<DictionaryKey, DictionaryRuleset>,
}

impl RulesetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All built-in dictionaries, selectors and patterns compiled up front
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for ruleset in rulesets::builtin()? {
            registry.register(ruleset);
        }
        tracing::info!("Registered {} dictionary rulesets", registry.len());
        Ok(registry)
    }

    pub fn register(&mut self, ruleset: DictionaryRuleset) {
        if let Some(previous) = self.rulesets.insert(ruleset.key, ruleset) {
            tracing::warn!("Replaced ruleset {}", previous.key);
        }
    }

    pub fn resolve(&self, language: Language, id: u8) -> Result<&DictionaryRuleset> {
        self.rulesets
            .get(&DictionaryKey::new(language, id))
            .ok_or(CoreError::UnknownRuleset { language, id })
    }

    /// Same as [`resolve`](Self::resolve) with a language tag such as `"pt"`
    pub fn resolve_code(&self, language: &str, id: u8) -> Result<&DictionaryRuleset> {
        self.resolve(language.parse()?, id)
    }

    /// Dictionaries available for words of `language`, by id
    pub fn dictionaries_for(&self, language: Language) -> impl Iterator<Item = &DictionaryRuleset> {
        self.rulesets
            .values()
            .filter(move |ruleset| ruleset.key.language == language)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DictionaryRuleset> {
        self.rulesets.values()
    }

    pub fn len(&self) -> usize {
        self.rulesets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rulesets.is_empty()
    }
}

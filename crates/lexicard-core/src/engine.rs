use lexicard_config::Config;
use lexicard_types::{DictionaryKey, Language, PresentationMode};

use crate::error::Result;
use crate::forms::{CandidateForms, SuffixTables};
use crate::highlight::{Highlighter, Quirk};
use crate::normalize::Definition;
use crate::registry::{DictionaryRuleset, RulesetRegistry};

/// Everything needed to turn a dictionary page into card text, validated once
/// up front and read-only afterwards.
#[derive(Debug)]
pub struct Engine {
    registry: RulesetRegistry,
    suffixes: SuffixTables,
    highlighter: Highlighter,
    default_key: DictionaryKey,
}

impl Engine {
    pub fn new(config: &Config) -> Result<Self> {
        let registry = RulesetRegistry::builtin()?;
        let suffixes = SuffixTables::from_config(&config.suffixes)?;
        let highlighter = Highlighter::new(config.highlight.placeholder.clone());
        let default_key = config.dictionary.key();

        tracing::info!(
            "Engine ready: {} rulesets, default dictionary {default_key}",
            registry.len()
        );

        Ok(Self {
            registry,
            suffixes,
            highlighter,
            default_key,
        })
    }

    pub fn registry(&self) -> &RulesetRegistry {
        &self.registry
    }

    pub fn suffixes(&self) -> &SuffixTables {
        &self.suffixes
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    pub fn default_key(&self) -> DictionaryKey {
        self.default_key
    }

    pub fn ruleset(&self, key: DictionaryKey) -> Result<&DictionaryRuleset> {
        self.registry.resolve(key.language, key.id)
    }

    /// Extract and normalize the definition of `word` from a dictionary page
    pub fn define(&self, html: &str, word: &str, key: DictionaryKey) -> Result<Definition> {
        let ruleset = self.ruleset(key)?;
        let definition = ruleset.define(html, word);
        tracing::debug!("{key}: {word} -> found={}", definition.is_found());
        Ok(definition)
    }

    pub fn forms(&self, word: &str, language: Language) -> Result<CandidateForms> {
        self.suffixes.generate_forms(word, language)
    }

    /// Highlight or redact `word` and its inflected forms in `text`
    pub fn present(
        &self,
        text: &str,
        word: &str,
        language: Language,
        mode: PresentationMode,
        quirk: Option<Quirk>,
    ) -> Result<String> {
        let forms = self.forms(word, language)?;
        self.highlighter.apply(text, &forms, mode, quirk)
    }
}
